//! Error definitions shared across library modules.
//! Protocol-level failures (bad tokens, checksum mismatches, framing
//! deviations) stay internal and silent; only the staged-buffer seam is
//! `Result`-shaped, because the caller decides when more bytes arrive.
use thiserror_no_std::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Failures surfaced by the staged input buffer.
pub enum StageError {
    /// The byte source has no data available right now. Not an error in the
    /// fatal sense: parsing resumes from the same point once bytes arrive.
    #[error("no byte available")]
    Pending,
    /// The staging window is full and the current token cannot grow. The
    /// lexer reports this as an invalid token so the parser resynchronises
    /// at the next newline.
    #[error("staging buffer full")]
    Overflow,
}
