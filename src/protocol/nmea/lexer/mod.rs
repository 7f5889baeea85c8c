//! Incremental DFA lexer for NMEA-0183 byte streams.
//!
//! The automaton has the classic generated-scanner shape: a precomputed
//! byte-to-class table, an explicit state set with a transition function,
//! and a driver that remembers the last accepting state and rewinds the
//! staging buffer when the walk jams.
//! States without successors accept immediately, so tokens like a sentence
//! tag or `*HH` never require lookahead. The lexer also owns the rolling XOR
//! checksum: `checksum()` covers every accepted byte since the last clear,
//! excluding the token most recently returned.
use crate::error::StageError;
use crate::infra::stage::StagedBuffer;
use crate::protocol::nmea::MessageId;
use crate::protocol::traits::byte_source::ByteSource;

/// Token kinds handed to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Token {
    /// Five-letter talker/sentence id.
    Tag(MessageId),
    /// Optionally signed integer run.
    Num,
    /// Optionally signed decimal containing `.`.
    FltNum,
    /// `0x` followed by exactly eight hex digits.
    Hex8,
    /// `*` followed by two hex digits.
    Checksum,
    /// CR, LF, or CRLF. Also clears the rolling checksum.
    Nl,
    /// A byte that did not start a longer token.
    Char(u8),
    /// The staging window overflowed; the run is discarded and the parser
    /// resynchronises at the next newline.
    Invalid,
}

//==================================================================================EQUIVALENCE_CLASSES

/// Input byte equivalence classes. Digits 0/1/2/4/5 and the tag letters are
/// distinguished individually because the sentence ids need them; everything
/// else collapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Digit0,
    Digit1,
    Digit2,
    Digit4,
    Digit5,
    Digit,
    LetA,
    LetC,
    LetD,
    LetF,
    LetG,
    LetL,
    LetM,
    LetP,
    LetR,
    LetS,
    LetT,
    LetV,
    LetZ,
    HexMisc,
    LowerX,
    Minus,
    Dot,
    Star,
    Cr,
    Lf,
    Blank,
    Other,
}

const fn classify(byte: u8) -> Class {
    match byte {
        b'0' => Class::Digit0,
        b'1' => Class::Digit1,
        b'2' => Class::Digit2,
        b'4' => Class::Digit4,
        b'5' => Class::Digit5,
        b'3' | b'6'..=b'9' => Class::Digit,
        b'A' => Class::LetA,
        b'C' => Class::LetC,
        b'D' => Class::LetD,
        b'F' => Class::LetF,
        b'G' => Class::LetG,
        b'L' => Class::LetL,
        b'M' => Class::LetM,
        b'P' => Class::LetP,
        b'R' => Class::LetR,
        b'S' => Class::LetS,
        b'T' => Class::LetT,
        b'V' => Class::LetV,
        b'Z' => Class::LetZ,
        b'B' | b'E' | b'a'..=b'f' => Class::HexMisc,
        b'x' => Class::LowerX,
        b'-' => Class::Minus,
        b'.' => Class::Dot,
        b'*' => Class::Star,
        b'\r' => Class::Cr,
        b'\n' => Class::Lf,
        b' ' | b'\t' => Class::Blank,
        _ => Class::Other,
    }
}

/// Byte-to-class table, filled at compile time.
static CLASS_OF: [Class; 256] = {
    let mut table = [Class::Other; 256];
    let mut byte = 0usize;
    while byte < 256 {
        table[byte] = classify(byte as u8);
        byte += 1;
    }
    table
};

fn is_digit(class: Class) -> bool {
    matches!(
        class,
        Class::Digit0 | Class::Digit1 | Class::Digit2 | Class::Digit4 | Class::Digit5 | Class::Digit
    )
}

fn is_hex(class: Class) -> bool {
    is_digit(class)
        || matches!(
            class,
            Class::LetA | Class::LetC | Class::LetD | Class::LetF | Class::HexMisc
        )
}

//==================================================================================STATES

/// Automaton states. The `Gp*` / `Ps*` chains spell out the sentence tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Minus,
    Zero,
    Num,
    Dot,
    Frac,
    /// Count of hex digits consumed after `0x`, 0..=8.
    Hex(u8),
    Star,
    StarHex,
    Cksum,
    Blank,
    Cr,
    Nl,
    Ch,
    G1,
    Gp,
    Gpg,
    Gpgg,
    Gpgl,
    Gpgs,
    Gpm,
    Gpms,
    Gpr,
    Gprm,
    Gpv,
    Gpvt,
    Gpz,
    Gpzd,
    P1,
    Ps,
    Psr,
    Psrf,
    Psrf1,
    Psrf14,
    Psrf15,
    Tag(MessageId),
}

/// Accepting rule of a state, when it has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    Tag(MessageId),
    Num,
    Flt,
    Hex8,
    Cksum,
    Nl,
    Skip,
    Ch,
}

fn accept(state: State) -> Option<Rule> {
    match state {
        State::Minus | State::Star | State::G1 | State::P1 | State::Ch => Some(Rule::Ch),
        State::Zero | State::Num => Some(Rule::Num),
        State::Dot | State::Frac => Some(Rule::Flt),
        State::Hex(8) => Some(Rule::Hex8),
        State::Cksum => Some(Rule::Cksum),
        State::Cr | State::Nl => Some(Rule::Nl),
        State::Blank => Some(Rule::Skip),
        State::Tag(id) => Some(Rule::Tag(id)),
        _ => None,
    }
}

/// States with no successors resolve without reading a lookahead byte.
fn dead_end(state: State) -> bool {
    matches!(
        state,
        State::Ch | State::Nl | State::Cksum | State::Hex(8) | State::Tag(_)
    )
}

fn advance(state: State, class: Class) -> Option<State> {
    use Class::*;
    Some(match state {
        State::Start => match class {
            Digit0 => State::Zero,
            _ if is_digit(class) => State::Num,
            Minus => State::Minus,
            Star => State::Star,
            Cr => State::Cr,
            Lf => State::Nl,
            Blank => State::Blank,
            LetG => State::G1,
            LetP => State::P1,
            _ => State::Ch,
        },
        State::Minus if is_digit(class) => State::Num,
        State::Zero => match class {
            _ if is_digit(class) => State::Num,
            Dot => State::Dot,
            LowerX => State::Hex(0),
            _ => return None,
        },
        State::Num => match class {
            _ if is_digit(class) => State::Num,
            Dot => State::Dot,
            _ => return None,
        },
        State::Dot | State::Frac if is_digit(class) => State::Frac,
        State::Hex(seen) if seen < 8 && is_hex(class) => State::Hex(seen + 1),
        State::Star if is_hex(class) => State::StarHex,
        State::StarHex if is_hex(class) => State::Cksum,
        State::Blank if class == Blank => State::Blank,
        State::Cr if class == Lf => State::Nl,
        State::G1 if class == LetP => State::Gp,
        State::Gp => match class {
            LetG => State::Gpg,
            LetM => State::Gpm,
            LetR => State::Gpr,
            LetV => State::Gpv,
            LetZ => State::Gpz,
            _ => return None,
        },
        State::Gpg => match class {
            LetG => State::Gpgg,
            LetL => State::Gpgl,
            LetS => State::Gpgs,
            _ => return None,
        },
        State::Gpgg if class == LetA => State::Tag(MessageId::Gga),
        State::Gpgl if class == LetL => State::Tag(MessageId::Gll),
        State::Gpgs => match class {
            LetA => State::Tag(MessageId::Gsa),
            LetV => State::Tag(MessageId::Gsv),
            _ => return None,
        },
        State::Gpm if class == LetS => State::Gpms,
        State::Gpms if class == LetS => State::Tag(MessageId::Mss),
        State::Gpr if class == LetM => State::Gprm,
        State::Gprm if class == LetC => State::Tag(MessageId::Rmc),
        State::Gpv if class == LetT => State::Gpvt,
        State::Gpvt if class == LetG => State::Tag(MessageId::Vtg),
        State::Gpz if class == LetD => State::Gpzd,
        State::Gpzd if class == LetA => State::Tag(MessageId::Zda),
        State::P1 if class == LetS => State::Ps,
        State::Ps if class == LetR => State::Psr,
        State::Psr if class == LetF => State::Psrf,
        State::Psrf if class == Digit1 => State::Psrf1,
        State::Psrf1 => match class {
            Digit4 => State::Psrf14,
            Digit5 => State::Psrf15,
            _ => return None,
        },
        State::Psrf14 if class == Digit0 => State::Tag(MessageId::Psrf140),
        State::Psrf15 => match class {
            Digit0 => State::Tag(MessageId::Psrf150),
            Digit1 => State::Tag(MessageId::Psrf151),
            Digit2 => State::Tag(MessageId::Psrf152),
            Digit4 => State::Tag(MessageId::Psrf154),
            Digit5 => State::Tag(MessageId::Psrf155),
            _ => return None,
        },
        _ => return None,
    })
}

//==================================================================================LEXER

/// Streaming lexer over a staged byte source. Left mid-token when the
/// source runs dry; the next call resumes where it stopped.
pub struct Lexer<S> {
    buffer: StagedBuffer<S>,
    /// `None` at a token boundary: commit the window and restart the walk.
    state: Option<State>,
    last_accept: Option<(Rule, usize)>,
    /// XOR over accepted bytes, excluding the most recent token.
    checksum: u8,
    /// XOR over accepted bytes, including the most recent token.
    folded: u8,
}

impl<S: ByteSource> Lexer<S> {
    pub fn new(stream: S) -> Self {
        Self {
            buffer: StagedBuffer::new(stream),
            state: None,
            last_accept: None,
            checksum: 0,
            folded: 0,
        }
    }

    /// The staging buffer, holding the bytes of the current token. Used by
    /// the parser to decode fields in place.
    pub fn buffer(&self) -> &StagedBuffer<S> {
        &self.buffer
    }

    /// Rolling XOR up to (not including) the token most recently returned.
    pub fn checksum(&self) -> u8 {
        self.checksum
    }

    /// Zero both checksum accumulators. The parser calls this on `$` so the
    /// accumulator is clean for the byte right after it.
    pub fn clear_checksum(&mut self) {
        self.checksum = 0;
        self.folded = 0;
    }

    /// Produce the next token, or `None` when the source has no byte
    /// available. Whitespace runs are consumed silently.
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            let state = match self.state {
                Some(state) => state,
                None => {
                    self.buffer.accept();
                    self.checksum = self.folded;
                    self.last_accept = None;
                    self.state = Some(State::Start);
                    State::Start
                }
            };
            match self.buffer.next() {
                Err(StageError::Pending) => return None,
                Err(StageError::Overflow) => {
                    // Flush the whole window; the sentence is lost anyway.
                    self.folded = self.buffer.calc_checksum(self.checksum);
                    self.state = None;
                    return Some(Token::Invalid);
                }
                Ok(byte) => {
                    let class = CLASS_OF[byte as usize];
                    if let Some(rule) = accept(state) {
                        self.last_accept = Some((rule, self.buffer.position()));
                    }
                    match advance(state, class) {
                        Some(next) if dead_end(next) => {
                            if let Some(token) = self.resolve_dead_end(next) {
                                return Some(token);
                            }
                        }
                        Some(next) => self.state = Some(next),
                        None => {
                            let rule = match self.last_accept {
                                Some((rule, pos)) => {
                                    self.buffer.rewind(pos);
                                    rule
                                }
                                // Unreachable by construction (every state
                                // one byte from Start accepts), kept as a
                                // consume-one-byte fallback.
                                None => Rule::Ch,
                            };
                            if let Some(token) = self.resolve(rule) {
                                return Some(token);
                            }
                        }
                    }
                }
            }
        }
    }

    fn resolve_dead_end(&mut self, state: State) -> Option<Token> {
        match accept(state) {
            Some(rule) => self.resolve(rule),
            None => None,
        }
    }

    /// Close the current token: fold its bytes into the rolling checksum
    /// and map the rule to a token. `Skip` yields nothing and the driver
    /// loops on to the next token.
    fn resolve(&mut self, rule: Rule) -> Option<Token> {
        self.folded = self.buffer.calc_checksum(self.checksum);
        self.state = None;
        match rule {
            Rule::Tag(id) => Some(Token::Tag(id)),
            Rule::Num => Some(Token::Num),
            Rule::Flt => Some(Token::FltNum),
            Rule::Hex8 => Some(Token::Hex8),
            Rule::Cksum => Some(Token::Checksum),
            Rule::Nl => {
                self.checksum = 0;
                self.folded = 0;
                Some(Token::Nl)
            }
            Rule::Ch => Some(Token::Char(self.buffer.byte(0))),
            Rule::Skip => None,
        }
    }
}
