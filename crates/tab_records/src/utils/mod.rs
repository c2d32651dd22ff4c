pub mod line_format;
pub mod logging;
