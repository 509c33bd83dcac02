use thiserror::Error;

#[derive(Error, Debug)]
pub enum MsiseError {
    #[error("Switch index out of range: {0} (valid switch indices are 0 to 23)")]
    SwitchIndexOutOfRange(usize),

    #[error("Switch 9 requests a per-period ap array but none was supplied")]
    MissingApArray,

    #[error("HTTP ureq error: {0}")]
    UreqHttpError(#[from] ureq::Error),

    #[error("Space weather feed format error: {0}")]
    SpaceWeatherFormat(String),

    #[error("System clock error: {0}")]
    SystemTimeError(#[from] hifitime::HifitimeError),
}
