//! Protocol implementations for the two GPS receiver wire formats, plus the
//! serial-line seams they are driven through.
pub mod nmea;
pub mod sirf;
pub mod traits;
