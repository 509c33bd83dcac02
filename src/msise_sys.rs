//! # NRLMSISE-00 system bindings
//!
//! This module contains the FFI declarations for the native NRLMSISE-00 shared library
//! (`libnrlmsise00`). The record layouts below are a binary-compatibility contract with the
//! native routine: field order and widths (32-bit integers, 64-bit floats) must be kept
//! verbatim. Prefer the safe wrappers in [`crate::model`] over calling these entry points
//! directly.
//!
//! The library is resolved through the normal native search path; `build.rs` additionally
//! honors the `NRLMSISE00_LIB_DIR` environment variable.

use std::os::raw::{c_double, c_int};

use crate::switches::NUM_SWITCHES;

/// Number of geomagnetic activity values in a per-period ap record.
pub(crate) const AP_ARRAY_LEN: usize = 7;

/// Number of density slots in the native output record.
pub(crate) const DENSITY_SLOTS: usize = 9;

/// Number of temperature slots in the native output record.
pub(crate) const TEMPERATURE_SLOTS: usize = 2;

/// Effect switches plus the two scaling tables the native routine derives from them.
///
/// The binding only ever fills `switches`; `sw` and `swc` are owned and populated by the
/// native routine from the switch values and are opaque to callers.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct NrlmsiseFlags {
    pub switches: [c_int; NUM_SWITCHES],
    pub sw: [c_double; NUM_SWITCHES],
    pub swc: [c_double; NUM_SWITCHES],
}

/// Per-period geomagnetic activity record (daily, 3-hour windows, multi-day averages).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ApStruct {
    pub a: [c_double; AP_ARRAY_LEN],
}

/// Input record of the native entry points.
///
/// `year` is unused by the model and passed as zero. `ap_a` must point at a live
/// [`ApStruct`] for the duration of the call; the model only reads it when switch 9 is in
/// its `-1` sentinel state.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct NrlmsiseInput {
    pub year: c_int,
    pub doy: c_int,
    pub sec: c_double,
    pub alt: c_double,
    pub g_lat: c_double,
    pub g_long: c_double,
    pub lst: c_double,
    pub f107a: c_double,
    pub f107: c_double,
    pub ap: c_double,
    pub ap_a: *const ApStruct,
}

/// Output record of the native entry points: 9 densities then 2 temperatures.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct NrlmsiseOutput {
    pub d: [c_double; DENSITY_SLOTS],
    pub t: [c_double; TEMPERATURE_SLOTS],
}

#[link(name = "nrlmsise00")]
extern "C" {
    /// Neutral atmosphere model; total mass density excludes anomalous oxygen.
    pub(crate) fn gtd7(input: NrlmsiseInput, flags: NrlmsiseFlags, output: *mut NrlmsiseOutput);

    /// Neutral atmosphere model; total mass density includes anomalous oxygen.
    pub(crate) fn gtd7d(input: NrlmsiseInput, flags: NrlmsiseFlags, output: *mut NrlmsiseOutput);
}
