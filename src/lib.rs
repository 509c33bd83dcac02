pub mod atmosphere;
pub mod constants;
pub mod model;
pub mod msise_errors;
mod msise_sys;
pub mod space_weather;
pub mod switches;
