//! Outgoing NMEA command sentences (`$PSRF100`, `$PSRF103`).
//!
//! `SentenceWriter` wraps a byte sink and keeps the running XOR of every
//! byte written except the leading `$`; closing a sentence appends
//! `*HH\r\n` with uppercase hex digits.
use core::fmt;

use crate::protocol::traits::byte_sink::ByteSink;

/// Protocol selector for `set_serial_port`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProtocolType {
    SirfBinary = 0,
    Nmea = 1,
}

/// Sentence addressed by `query_rate_control`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MessageType {
    Gga = 0,
    Gll = 1,
    Gsa = 2,
    Gsv = 3,
    Rmc = 4,
    Vtg = 5,
    Mss = 6,
    Zda = 8,
}

/// Rate-control action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum QueryRateControlMode {
    SetRate = 0,
    Query = 1,
}

//==================================================================================SENTENCE_WRITER

/// Checksum-accounting writer over a byte sink. The first byte written
/// after `begin` (the `$`) stays out of the XOR; everything else, including
/// punctuation and formatted integers, is folded in.
pub struct SentenceWriter<P> {
    port: P,
    checksum: u8,
    leading: bool,
}

impl<P: ByteSink> SentenceWriter<P> {
    pub fn new(port: P) -> Self {
        Self {
            port,
            checksum: 0,
            leading: false,
        }
    }

    /// Open a sentence: reset the checksum and arm the leading-byte skip.
    pub fn begin(&mut self) {
        self.checksum = 0;
        self.leading = true;
    }

    /// Close the sentence with `*HH\r\n`.
    pub fn end(&mut self) {
        let tail = [
            b'*',
            hex_digit(self.checksum >> 4),
            hex_digit(self.checksum & 0x0f),
            b'\r',
            b'\n',
        ];
        self.port.write_all(&tail);
    }

    /// The wrapped sink, for callers that interleave raw writes.
    pub fn port(&mut self) -> &mut P {
        &mut self.port
    }

    /// Release the wrapped sink.
    pub fn into_port(self) -> P {
        self.port
    }

    fn put(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        self.port.write_all(bytes);
        let counted = if self.leading {
            self.leading = false;
            &bytes[1..]
        } else {
            bytes
        };
        for &byte in counted {
            self.checksum ^= byte;
        }
    }
}

impl<P: ByteSink> fmt::Write for SentenceWriter<P> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.put(s.as_bytes());
        Ok(())
    }
}

fn hex_digit(value: u8) -> u8 {
    if value < 10 {
        b'0' + value
    } else {
        b'A' + value - 10
    }
}

//==================================================================================COMMAND_BUILDER

/// Builder for the two supported receiver commands.
pub struct CommandBuilder<P> {
    port: SentenceWriter<P>,
}

impl<P: ByteSink> CommandBuilder<P> {
    pub fn new(port: P) -> Self {
        Self {
            port: SentenceWriter::new(port),
        }
    }

    /// Release the wrapped sink.
    pub fn into_port(self) -> P {
        self.port.into_port()
    }

    /// Emit `$PSRF100` (Set Serial Port). Typical arguments are 8 data
    /// bits, 1 stop bit, no parity.
    pub fn set_serial_port(
        &mut self,
        protocol: ProtocolType,
        baud: u32,
        data_bits: u8,
        stop_bits: u8,
        parity: u8,
    ) -> fmt::Result {
        use core::fmt::Write;
        self.port.begin();
        write!(
            self.port,
            "$PSRF100,{},{},{},{},{}",
            protocol as u8, baud, data_bits, stop_bits, parity
        )?;
        self.port.end();
        Ok(())
    }

    /// Emit `$PSRF103` (Query/Rate Control).
    pub fn query_rate_control(
        &mut self,
        message: MessageType,
        mode: QueryRateControlMode,
        rate: u8,
        checksum_enable: u8,
    ) -> fmt::Result {
        use core::fmt::Write;
        self.port.begin();
        write!(
            self.port,
            "$PSRF103,{},{},{},{}",
            message as u8, mode as u8, rate, checksum_enable
        )?;
        self.port.end();
        Ok(())
    }
}
