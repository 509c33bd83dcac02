//! # Live space weather
//!
//! Client for the NWRA space weather service, which publishes the latest solar and
//! geomagnetic indices as a preformatted text table inside a `<pre>` block. The table layout
//! is fixed by the publisher (specific lines, specific leading columns), so the parsing here
//! is brittle by construction and isolated behind [`parse_env_latest`], which returns either
//! the four numeric outputs the model needs or a format error.
//!
//! Missing entries in each series are marked with `-999.0`; the latest valid value is the
//! last entry of a series after stripping sentinels from its tail.

use std::time::Duration;

use ureq::Agent;

use crate::constants::{Sfu, FEED_SENTINEL};
use crate::model::ApArray;
use crate::msise_errors::MsiseError;

/// URL of the NWRA "latest environment" page.
pub const SPACE_WEATHER_URL: &str = "https://spawx.nwra.com/spawx/env_latest.html";

// Fixed line positions inside the <pre> block, and the number of leading label columns to
// skip on each line.
const F107_OBSERVED_LINE: usize = 16;
const F107_OBSERVED_SKIP: usize = 1;
const F107_MEAN_LINE: usize = 17;
const F107_MEAN_SKIP: usize = 1;
const AP_DAILY_LINE: usize = 20;
const AP_DAILY_SKIP: usize = 2;
const AP_3HOUR_LINE: usize = 31;
const AP_3HOUR_SKIP: usize = 3;

/// The latest solar/geomagnetic indices published by the feed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpaceWeather {
    /// Latest observed F10.7 flux (sfu)
    pub f107: Sfu,
    /// Latest 81-day average F10.7 flux (sfu)
    pub f107a: Sfu,
    /// Latest daily Ap index
    pub ap: f64,
    /// Per-period ap record assembled from the daily and 3-hourly series
    pub ap_array: ApArray,
}

/// HTTP client for the space weather service.
#[derive(Debug, Clone)]
pub struct SpaceWeatherClient {
    http_client: Agent,
}

impl Default for SpaceWeatherClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SpaceWeatherClient {
    /// Create a new client with a 10 second global timeout.
    pub fn new() -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(10)))
            .build();

        SpaceWeatherClient {
            http_client: config.into(),
        }
    }

    /// Fetch and parse the latest space weather indices.
    ///
    /// Return
    /// ------
    /// * The latest valid indices, or an error if the fetch fails or the page no longer
    ///   matches the expected layout. Failures are never silently defaulted.
    pub fn fetch_latest(&self) -> Result<SpaceWeather, MsiseError> {
        let page = self
            .http_client
            .get(SPACE_WEATHER_URL)
            .call()?
            .body_mut()
            .read_to_string()?;

        parse_env_latest(&page)
    }
}

/// Parse the `<pre>` table of the NWRA environment page.
pub fn parse_env_latest(page: &str) -> Result<SpaceWeather, MsiseError> {
    let table = extract_pre_block(page)?;
    let lines: Vec<&str> = table.lines().collect();

    let f107_series = parse_series(&lines, F107_OBSERVED_LINE, F107_OBSERVED_SKIP)?;
    let f107a_series = parse_series(&lines, F107_MEAN_LINE, F107_MEAN_SKIP)?;
    let ap_daily = parse_series(&lines, AP_DAILY_LINE, AP_DAILY_SKIP)?;
    let ap_3hour = parse_series(&lines, AP_3HOUR_LINE, AP_3HOUR_SKIP)?;

    let f107 = latest_valid(&f107_series)
        .ok_or_else(|| MsiseError::SpaceWeatherFormat("observed F10.7 series is empty".into()))?;
    let f107a = latest_valid(&f107a_series)
        .ok_or_else(|| MsiseError::SpaceWeatherFormat("mean F10.7 series is empty".into()))?;
    let ap = latest_valid(&ap_daily)
        .ok_or_else(|| MsiseError::SpaceWeatherFormat("daily ap series is empty".into()))?;

    if ap_daily.len() < 3 || ap_3hour.len() < 4 {
        return Err(MsiseError::SpaceWeatherFormat(format!(
            "ap series too short: {} daily and {} 3-hourly values",
            ap_daily.len(),
            ap_3hour.len()
        )));
    }

    let n = ap_daily.len();
    let m = ap_3hour.len();
    let ap_array = ApArray([
        ap_daily[n - 1],
        ap_3hour[m - 1],
        ap_3hour[m - 2],
        ap_3hour[m - 3],
        ap_3hour[m - 4],
        ap_daily[n - 2],
        ap_daily[n - 3],
    ]);

    Ok(SpaceWeather {
        f107,
        f107a,
        ap,
        ap_array,
    })
}

/// Extract the text between the first `<pre>` and `</pre>` tags.
fn extract_pre_block(page: &str) -> Result<&str, MsiseError> {
    let start = page
        .find("<pre>")
        .ok_or_else(|| MsiseError::SpaceWeatherFormat("no <pre> block in page".into()))?;
    let body = &page[start + "<pre>".len()..];
    let end = body
        .find("</pre>")
        .ok_or_else(|| MsiseError::SpaceWeatherFormat("unterminated <pre> block".into()))?;
    Ok(&body[..end])
}

/// Parse the whitespace-separated numeric tail of a fixed-position line.
fn parse_series(lines: &[&str], line: usize, skip: usize) -> Result<Vec<f64>, MsiseError> {
    let row = lines.get(line).ok_or_else(|| {
        MsiseError::SpaceWeatherFormat(format!("page has fewer than {} lines", line + 1))
    })?;

    row.split_whitespace()
        .skip(skip)
        .map(|token| {
            token.parse::<f64>().map_err(|_| {
                MsiseError::SpaceWeatherFormat(format!("unparsable value {token:?} on line {line}"))
            })
        })
        .collect()
}

/// The last entry of a series after stripping `-999.0` sentinels from its tail.
fn latest_valid(series: &[f64]) -> Option<f64> {
    series.iter().rev().find(|&&value| value != FEED_SENTINEL).copied()
}
