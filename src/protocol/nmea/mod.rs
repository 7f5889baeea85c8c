//! NMEA-0183 decoding pipeline: DFA lexer, per-sentence parser state
//! machines, sentence records, and the proprietary command builder.
pub mod command;
pub mod lexer;
pub mod messages;
pub mod parser;
pub mod values;

/// NMEA sentence identifiers, numbered as on the receiver's message table.
/// `Psrf140` and `Psrf155` are recognised by the lexer but carry no record;
/// the parser rejects them in the prologue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MessageId {
    Gga = 1,
    Gll = 2,
    Gsa = 3,
    Gsv = 4,
    Mss = 5,
    Rmc = 6,
    Vtg = 7,
    Zda = 8,
    Psrf140 = 9,
    Psrf150 = 10,
    Psrf151 = 11,
    Psrf152 = 12,
    Psrf154 = 13,
    Psrf155 = 14,
}
