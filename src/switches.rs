//! # Effect switches
//!
//! The native NRLMSISE-00 routine is configured through an ordered vector of 24 tri-state
//! switches, one per physical effect. Each switch is `0` (off), `1` (on) or `2` (main effect
//! off but cross terms on); the standard value is `1` for all of them. Switch 9 additionally
//! admits the sentinel value `-1`, which tells the model to read the per-period ap record
//! instead of the single daily ap index.
//!
//! The switch indices are stable and documented:
//!
//! | index | effect |
//! |-------|--------|
//! | 0  | output in meters and kilograms instead of centimeters and grams |
//! | 1  | F10.7 effect on mean |
//! | 2  | time independent |
//! | 3  | symmetrical annual |
//! | 4  | symmetrical semiannual |
//! | 5  | asymmetrical annual |
//! | 6  | asymmetrical semiannual |
//! | 7  | diurnal |
//! | 8  | semidiurnal |
//! | 9  | daily ap (`-1` selects the per-period ap record) |
//! | 10 | all UT/longitude effects |
//! | 11 | longitudinal |
//! | 12 | UT and mixed UT/longitude |
//! | 13 | mixed ap/UT/longitude |
//! | 14 | terdiurnal |
//! | 15 | departures from diffusive equilibrium |
//! | 16 | all TINF variations |
//! | 17 | all TLB variations |
//! | 18 | all TN1 variations |
//! | 19 | all S variations |
//! | 20 | all TN2 variations |
//! | 21 | all NLB variations |
//! | 22 | all TN3 variations |
//! | 23 | turbopause scale height variations |
//!
//! With switch 0 in its default on state the model reports number densities in m⁻³; with
//! switch 0 off it reports in the cgs system (cm⁻³ number densities, g/cm³-derived total
//! mass density), which is the unit system of the upstream reference table.

use crate::msise_errors::MsiseError;

/// Number of effect switches in the configuration vector.
pub const NUM_SWITCHES: usize = 24;

/// Index of the daily-ap switch, the only one admitting the `-1` sentinel.
pub const DAILY_AP: usize = 9;

/// Sentinel value for switch 9 requesting the per-period ap record.
pub const AP_ARRAY_SENTINEL: i32 = -1;

/// Switch state: effect disabled.
pub const STATE_OFF: i32 = 0;
/// Switch state: effect enabled (the default for every index).
pub const STATE_ON: i32 = 1;
/// Switch state: main effect disabled but cross terms kept.
pub const STATE_CROSS_TERMS: i32 = 2;

/// The 24-element switch configuration passed to the native routine.
///
/// Built from two optional override lists: indices to force off and indices to force into
/// the cross-terms state. Overrides are applied off-list first, then cross-list, so an index
/// appearing in both ends up in the cross-terms state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchVector {
    values: [i32; NUM_SWITCHES],
}

impl Default for SwitchVector {
    fn default() -> Self {
        Self::all_on()
    }
}

impl SwitchVector {
    /// The standard configuration: every effect enabled.
    pub fn all_on() -> Self {
        SwitchVector {
            values: [STATE_ON; NUM_SWITCHES],
        }
    }

    /// Build a switch vector from override lists.
    ///
    /// Arguments
    /// ---------
    /// * `off`: indices of switches to set to [`STATE_OFF`]
    /// * `cross`: indices of switches to set to [`STATE_CROSS_TERMS`]
    ///
    /// Return
    /// ------
    /// * The assembled vector, or [`MsiseError::SwitchIndexOutOfRange`] if any index is
    ///   outside `0..=23`.
    pub fn with_overrides(off: &[usize], cross: &[usize]) -> Result<Self, MsiseError> {
        let mut vector = Self::all_on();
        for &index in off {
            *vector.checked_slot(index)? = STATE_OFF;
        }
        for &index in cross {
            *vector.checked_slot(index)? = STATE_CROSS_TERMS;
        }
        Ok(vector)
    }

    fn checked_slot(&mut self, index: usize) -> Result<&mut i32, MsiseError> {
        self.values
            .get_mut(index)
            .ok_or(MsiseError::SwitchIndexOutOfRange(index))
    }

    /// Force switch 9 into its sentinel state so the model reads the per-period ap record.
    ///
    /// Applied automatically whenever an ap array accompanies the invocation, overriding any
    /// explicit override request for index 9.
    pub fn require_ap_array(&mut self) {
        self.values[DAILY_AP] = AP_ARRAY_SENTINEL;
    }

    /// Whether switch 9 is in its sentinel state and an ap array must be supplied.
    pub fn requires_ap_array(&self) -> bool {
        self.values[DAILY_AP] == AP_ARRAY_SENTINEL
    }

    /// The raw switch values in native order.
    pub fn as_raw(&self) -> &[i32; NUM_SWITCHES] {
        &self.values
    }
}
