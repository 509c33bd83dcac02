//! # Constants and type definitions for msise00
//!
//! This module centralizes the **unit conversions**, **default parameters**, and **common type
//! definitions** used throughout the `msise00` crate. It also records the documented behavioral
//! thresholds of the native NRLMSISE-00 routine, which the binding passes through unaltered.
//!
//! These definitions are used by all main modules, including the model invocation, the effect
//! switches, and the atmosphere facade.

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Number of seconds in an hour
pub const SECONDS_PER_HOUR: f64 = 3_600.0;

/// Longitude span covered by one hour of local solar time, in degrees
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// g/cm³ → kg/m³ rescaling applied to the model's total mass density slot
pub const GRAM_CM3_TO_KG_M3: f64 = 1.0e3;

// -------------------------------------------------------------------------------------------------
// Default solar and geomagnetic parameters
// -------------------------------------------------------------------------------------------------

/// Default 81-day average F10.7 solar radio flux (sfu)
pub const DEFAULT_F107A: Sfu = 150.0;

/// Default previous-day F10.7 solar radio flux (sfu)
pub const DEFAULT_F107: Sfu = 150.0;

/// Default daily Ap geomagnetic index
pub const DEFAULT_AP: f64 = 4.0;

/// Missing-data marker used by the NWRA space weather feed
pub const FEED_SENTINEL: f64 = -999.0;

// -------------------------------------------------------------------------------------------------
// Documented native-model thresholds
// -------------------------------------------------------------------------------------------------

/// Altitude below which the native routine reports zero O, H and N number densities (km)
pub const ATOMIC_SPECIES_FLOOR: Kilometer = 72.5;

/// Altitude below which the native routine pins the exospheric temperature to its
/// global-average value (km)
pub const EXOSPHERIC_TEMPERATURE_FLOOR: Kilometer = 120.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Local solar time in hours
pub type Hour = f64;
/// Temperature in kelvin
pub type Kelvin = f64;
/// Solar radio flux in solar flux units
pub type Sfu = f64;
