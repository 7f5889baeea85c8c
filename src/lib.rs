//! `nmea-sirf` library: streaming decoders for the two wire protocols spoken
//! by serial GPS receivers (NMEA-0183 ASCII sentences and SiRF binary
//! packets), together with the matching outgoing command builders. Designed
//! for `no_std` targets: no heap allocation, fixed-size staging buffers, and
//! cooperative byte-at-a-time parsing driven by the caller.
#![no_std]
//==================================================================================
/// Error types surfaced at the byte-source seam.
pub mod error;
/// Staged input buffer and in-place field decoders.
pub mod infra;
/// Protocol implementations: NMEA-0183, SiRF binary, and the serial-line
/// capability traits both of them are built against.
pub mod protocol;
//==================================================================================
