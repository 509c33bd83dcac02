//! # Model invocation
//!
//! Safe wrappers around the two native NRLMSISE-00 entry points. The wrappers marshal plain
//! numeric inputs into the fixed-layout records the native routine expects, select the entry
//! point according to the anomalous-oxygen flag, and copy the fixed-size output arrays back
//! out before the call-scoped records are released.
//!
//! Output slots (with the default all-on switch vector):
//!
//! * `d[0]` — He number density (m⁻³)
//! * `d[1]` — O number density (m⁻³)
//! * `d[2]` — N2 number density (m⁻³)
//! * `d[3]` — O2 number density (m⁻³)
//! * `d[4]` — Ar number density (m⁻³)
//! * `d[5]` — total mass density (includes `d[8]` under the anomalous-oxygen entry point)
//! * `d[6]` — H number density (m⁻³)
//! * `d[7]` — N number density (m⁻³)
//! * `d[8]` — anomalous oxygen number density (m⁻³)
//! * `t[0]` — exospheric temperature (K)
//! * `t[1]` — temperature at altitude (K)
//!
//! UT, local solar time and longitude are used independently by the model; for a physically
//! consistent query they should satisfy `lst = sec/3600 + g_long/15`. O, H and N densities
//! are zero below 72.5 km, and the exospheric temperature collapses to the model's
//! global-average value below 120 km; both are native behaviors the wrapper passes through.
//!
//! Day-of-year outside `1..=366` or seconds-of-day outside `0..=86400` are **not** validated:
//! the native routine silently extrapolates, and the result is unspecified.

use crate::constants::{Degree, Hour, Kelvin, Kilometer, Sfu, DEFAULT_AP, DEFAULT_F107, DEFAULT_F107A};
use crate::msise_errors::MsiseError;
use crate::msise_sys::{self, ApStruct, NrlmsiseFlags, NrlmsiseInput, NrlmsiseOutput};
use crate::switches::{SwitchVector, NUM_SWITCHES};

/// Per-period geomagnetic activity, one value per lookback window:
///
/// * `0` — daily Ap
/// * `1` — 3-hour Ap index for the current time
/// * `2` — 3-hour Ap index for 3 hours before the current time
/// * `3` — 3-hour Ap index for 6 hours before the current time
/// * `4` — 3-hour Ap index for 9 hours before the current time
/// * `5` — average of eight 3-hour Ap indices from 12 to 33 hours prior
/// * `6` — average of eight 3-hour Ap indices from 36 to 57 hours prior
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApArray(pub [f64; 7]);

impl From<[f64; 7]> for ApArray {
    fn from(values: [f64; 7]) -> Self {
        ApArray(values)
    }
}

/// Solar/geomagnetic parameters and switch overrides for a model invocation.
///
/// Supplying `ap_array` forces switch 9 into its sentinel state so the model reads the
/// per-period record instead of the scalar `ap`.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelParams {
    /// 81-day average of the F10.7 flux, centered on the day of year (sfu)
    pub f107a: Sfu,
    /// Daily F10.7 flux for the previous day (sfu)
    pub f107: Sfu,
    /// Daily Ap geomagnetic index
    pub ap: f64,
    /// Per-period geomagnetic detail; `None` means the scalar `ap` is used
    pub ap_array: Option<ApArray>,
    /// Switch indices to force off
    pub off_switches: Vec<usize>,
    /// Switch indices to force into the cross-terms state
    pub cross_switches: Vec<usize>,
    /// Whether to include anomalous oxygen in the total mass density
    pub anomalous_oxygen: bool,
}

impl Default for ModelParams {
    fn default() -> Self {
        ModelParams {
            f107a: DEFAULT_F107A,
            f107: DEFAULT_F107,
            ap: DEFAULT_AP,
            ap_array: None,
            off_switches: Vec::new(),
            cross_switches: Vec::new(),
            anomalous_oxygen: false,
        }
    }
}

/// Densities and temperatures copied out of one native invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelOutput {
    /// The 9 density slots, in native order
    pub densities: [f64; 9],
    /// The 2 temperature slots, in native order
    pub temperatures: [f64; 2],
}

impl ModelOutput {
    /// He number density
    pub fn helium(&self) -> f64 {
        self.densities[0]
    }

    /// O number density
    pub fn atomic_oxygen(&self) -> f64 {
        self.densities[1]
    }

    /// N2 number density
    pub fn molecular_nitrogen(&self) -> f64 {
        self.densities[2]
    }

    /// O2 number density
    pub fn molecular_oxygen(&self) -> f64 {
        self.densities[3]
    }

    /// Ar number density
    pub fn argon(&self) -> f64 {
        self.densities[4]
    }

    /// Total mass density; includes the anomalous oxygen contribution when the invocation
    /// used the anomalous-oxygen entry point.
    pub fn total_mass_density(&self) -> f64 {
        self.densities[5]
    }

    /// H number density
    pub fn hydrogen(&self) -> f64 {
        self.densities[6]
    }

    /// N number density
    pub fn atomic_nitrogen(&self) -> f64 {
        self.densities[7]
    }

    /// Anomalous (hot) atomic oxygen number density
    pub fn anomalous_oxygen(&self) -> f64 {
        self.densities[8]
    }

    /// Exospheric temperature
    pub fn exospheric_temperature(&self) -> Kelvin {
        self.temperatures[0]
    }

    /// Temperature at the queried altitude
    pub fn temperature_at_altitude(&self) -> Kelvin {
        self.temperatures[1]
    }
}

/// Run the atmosphere model at one point in time and space.
///
/// Assembles the switch vector from the override lists in `params`, then dispatches to
/// [`nrlmsise00_with_switches`].
///
/// Arguments
/// ---------
/// * `doy`: day of year (1–366)
/// * `sec`: seconds in day, UT (0–86400)
/// * `alt`: geometric altitude (km)
/// * `g_lat`: geodetic latitude (deg)
/// * `g_long`: geodetic longitude (deg)
/// * `lst`: local apparent solar time (hours)
/// * `params`: solar/geomagnetic parameters and switch overrides
///
/// Return
/// ------
/// * The densities and temperatures for the point, or a precondition violation from
///   switch-vector assembly.
pub fn nrlmsise00(
    doy: i32,
    sec: f64,
    alt: Kilometer,
    g_lat: Degree,
    g_long: Degree,
    lst: Hour,
    params: &ModelParams,
) -> Result<ModelOutput, MsiseError> {
    let switches = SwitchVector::with_overrides(&params.off_switches, &params.cross_switches)?;
    nrlmsise00_with_switches(doy, sec, alt, g_lat, g_long, lst, switches, params)
}

/// Run the atmosphere model with a caller-assembled switch vector.
///
/// The override lists in `params` are ignored here; the supplied vector is used as-is,
/// except that switch 9 is forced into its sentinel state whenever `params.ap_array` is
/// present. A vector already in the sentinel state without an accompanying ap array is a
/// precondition violation ([`MsiseError::MissingApArray`]).
#[allow(clippy::too_many_arguments)]
pub fn nrlmsise00_with_switches(
    doy: i32,
    sec: f64,
    alt: Kilometer,
    g_lat: Degree,
    g_long: Degree,
    lst: Hour,
    switches: SwitchVector,
    params: &ModelParams,
) -> Result<ModelOutput, MsiseError> {
    let switches = resolve_switches(switches, params.ap_array.as_ref())?;

    // The record only needs to outlive the synchronous native call; the model reads it
    // solely when switch 9 carries the sentinel.
    let ap_record = ApStruct {
        a: params.ap_array.map_or([0.0; 7], |array| array.0),
    };

    let flags = NrlmsiseFlags {
        switches: *switches.as_raw(),
        sw: [0.0; NUM_SWITCHES],
        swc: [0.0; NUM_SWITCHES],
    };

    let input = NrlmsiseInput {
        year: 0,
        doy,
        sec,
        alt,
        g_lat,
        g_long,
        lst,
        f107a: params.f107a,
        f107: params.f107,
        ap: params.ap,
        ap_a: &ap_record,
    };

    let mut output = NrlmsiseOutput::default();
    unsafe {
        if params.anomalous_oxygen {
            msise_sys::gtd7d(input, flags, &mut output);
        } else {
            msise_sys::gtd7(input, flags, &mut output);
        }
    }

    Ok(ModelOutput {
        densities: output.d,
        temperatures: output.t,
    })
}

/// Reconcile the switch vector with the presence of an ap array.
fn resolve_switches(
    mut switches: SwitchVector,
    ap_array: Option<&ApArray>,
) -> Result<SwitchVector, MsiseError> {
    if ap_array.is_some() {
        switches.require_ap_array();
    } else if switches.requires_ap_array() {
        return Err(MsiseError::MissingApArray);
    }
    Ok(switches)
}

#[cfg(test)]
mod model_test {
    use super::*;
    use crate::switches::{AP_ARRAY_SENTINEL, DAILY_AP};

    #[test]
    fn default_params_match_the_documented_defaults() {
        let params = ModelParams::default();
        assert_eq!(params.f107a, 150.0);
        assert_eq!(params.f107, 150.0);
        assert_eq!(params.ap, 4.0);
        assert_eq!(params.ap_array, None);
        assert!(params.off_switches.is_empty());
        assert!(params.cross_switches.is_empty());
        assert!(!params.anomalous_oxygen);
    }

    #[test]
    fn ap_array_forces_the_sentinel_state() {
        let array = ApArray([100.0; 7]);
        let resolved = resolve_switches(SwitchVector::all_on(), Some(&array)).unwrap();
        assert_eq!(resolved.as_raw()[DAILY_AP], AP_ARRAY_SENTINEL);
    }

    #[test]
    fn sentinel_without_ap_array_fails_fast() {
        let mut switches = SwitchVector::all_on();
        switches.require_ap_array();
        let err = resolve_switches(switches, None).unwrap_err();
        assert!(matches!(err, MsiseError::MissingApArray));
    }

    #[test]
    fn output_accessors_read_the_documented_slots() {
        let output = ModelOutput {
            densities: [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0],
            temperatures: [1000.0, 900.0],
        };
        assert_eq!(output.helium(), 1.0);
        assert_eq!(output.atomic_oxygen(), 2.0);
        assert_eq!(output.molecular_nitrogen(), 3.0);
        assert_eq!(output.molecular_oxygen(), 4.0);
        assert_eq!(output.argon(), 5.0);
        assert_eq!(output.total_mass_density(), 6.0);
        assert_eq!(output.hydrogen(), 7.0);
        assert_eq!(output.atomic_nitrogen(), 8.0);
        assert_eq!(output.anomalous_oxygen(), 9.0);
        assert_eq!(output.exospheric_temperature(), 1000.0);
        assert_eq!(output.temperature_at_altitude(), 900.0);
    }
}
