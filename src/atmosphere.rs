//! # Atmosphere facade
//!
//! [`Atmosphere`] binds a timestamp and a set of default model parameters, so repeated
//! point queries share one day-of-year/seconds-of-day derivation. The snapshot is immutable
//! after construction: querying the same facade twice with the same point reproduces the
//! same output bit for bit.
//!
//! Below 80 km the effects of space weather are neither large nor well established, and the
//! default parameters are adequate.

use hifitime::{Epoch, Unit};

use crate::constants::{Degree, Hour, Kelvin, Kilometer, DEGREES_PER_HOUR, GRAM_CM3_TO_KG_M3, SECONDS_PER_HOUR};
use crate::model::{nrlmsise00, ModelOutput, ModelParams};
use crate::msise_errors::MsiseError;
use crate::space_weather::SpaceWeatherClient;

/// A timestamp-bound view of the atmosphere model.
#[derive(Debug, Clone, PartialEq)]
pub struct Atmosphere {
    doy: i32,
    sec: f64,
    params: ModelParams,
}

impl Atmosphere {
    /// Create a facade for the given instant.
    ///
    /// Arguments
    /// ---------
    /// * `now`: the UTC instant to bind; `None` uses the current system time
    /// * `params`: default solar/geomagnetic parameters and switch overrides, forwarded
    ///   verbatim to every query
    ///
    /// Return
    /// ------
    /// * A new facade, or a clock error when `now` is `None` and the system time cannot
    ///   be read.
    pub fn new(now: Option<Epoch>, params: ModelParams) -> Result<Self, MsiseError> {
        let now = match now {
            Some(epoch) => epoch,
            None => Epoch::now()?,
        };
        let (doy, sec) = day_of_year_and_seconds(now);

        Ok(Atmosphere { doy, sec, params })
    }

    /// Create a facade seeded with the latest live space weather.
    ///
    /// The feed's latest valid F10.7, 81-day mean F10.7, daily Ap and per-period ap record
    /// overwrite the corresponding fields of `params` before construction completes. Any
    /// fetch or parse failure fails the construction; values are never silently defaulted.
    pub fn with_live_space_weather(
        now: Option<Epoch>,
        mut params: ModelParams,
    ) -> Result<Self, MsiseError> {
        let weather = SpaceWeatherClient::new().fetch_latest()?;
        params.f107 = weather.f107;
        params.f107a = weather.f107a;
        params.ap = weather.ap;
        params.ap_array = Some(weather.ap_array);

        Self::new(now, params)
    }

    /// Day of year bound at construction (1–366).
    pub fn day_of_year(&self) -> i32 {
        self.doy
    }

    /// Seconds of day (UT) bound at construction.
    pub fn seconds_of_day(&self) -> f64 {
        self.sec
    }

    /// Query the full model output at a point.
    ///
    /// Arguments
    /// ---------
    /// * `g_lat`: geodetic latitude (deg)
    /// * `g_long`: geodetic longitude (deg)
    /// * `alt`: geometric altitude (km)
    /// * `lst`: explicit local solar time override (hours); `None` derives
    ///   `sec/3600 + g_long/15`
    ///
    /// Return
    /// ------
    /// * The full densities/temperatures output for the point.
    pub fn full_output(
        &self,
        g_lat: Degree,
        g_long: Degree,
        alt: Kilometer,
        lst: Option<Hour>,
    ) -> Result<ModelOutput, MsiseError> {
        let lst = lst.unwrap_or_else(|| default_local_solar_time(self.sec, g_long));
        nrlmsise00(self.doy, self.sec, alt, g_lat, g_long, lst, &self.params)
    }

    /// Query the total mass density and temperature at a point.
    ///
    /// Arguments
    /// ---------
    /// * `g_lat`: geodetic latitude (deg)
    /// * `g_long`: geodetic longitude (deg)
    /// * `alt`: geometric altitude (km)
    ///
    /// Return
    /// ------
    /// * `(total mass density in kg/m³, temperature at altitude in K)`. The density is the
    ///   model's slot 5 rescaled by exactly 1000; whether it includes anomalous oxygen
    ///   follows the facade's `anomalous_oxygen` parameter.
    pub fn local_conditions(
        &self,
        g_lat: Degree,
        g_long: Degree,
        alt: Kilometer,
    ) -> Result<(f64, Kelvin), MsiseError> {
        let output = self.full_output(g_lat, g_long, alt, None)?;

        let rho = output.total_mass_density() * GRAM_CM3_TO_KG_M3;
        let temperature = output.temperature_at_altitude();

        Ok((rho, temperature))
    }
}

/// Derive the model's day-of-year and whole seconds-of-day from a UTC instant.
fn day_of_year_and_seconds(epoch: Epoch) -> (i32, f64) {
    let (year, _, _, hour, minute, second, _) = epoch.to_gregorian_utc();
    let sec = f64::from(u32::from(hour) * 3600 + u32::from(minute) * 60 + u32::from(second));

    let jan_1 = Epoch::from_gregorian_utc_at_midnight(year, 1, 1);
    let doy = (epoch - jan_1).to_unit(Unit::Day).floor() as i32 + 1;

    (doy, sec)
}

/// Local solar time consistent with the bound UT and the queried longitude.
fn default_local_solar_time(sec: f64, g_long: Degree) -> Hour {
    sec / SECONDS_PER_HOUR + g_long / DEGREES_PER_HOUR
}
