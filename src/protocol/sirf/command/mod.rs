//! Builders for the SiRF input messages the receiver accepts. Each emits a
//! complete frame: start sequence, big-endian length with the top bit
//! clear, body, sum-mod-2^15 checksum, end sequence.
use crate::protocol::sirf::messages::{
    SET_BINARY_SERIAL_PORT_ID, SET_MESSAGE_RATE_ID, SET_PROTOCOL_ID,
};
use crate::protocol::traits::byte_sink::ByteSink;

/// Protocol selector for Set Protocol (message id 135).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Protocol {
    Null = 0,
    SirfBinary = 1,
    Nmea = 2,
    Ascii = 3,
    Rtcm = 4,
    User = 5,
    SirfLoc = 6,
    Statistic = 7,
}

/// Frame-and-checksum writer for receiver input messages.
pub struct CommandBuilder<P> {
    port: P,
}

impl<P: ByteSink> CommandBuilder<P> {
    pub fn new(port: P) -> Self {
        Self { port }
    }

    /// Release the wrapped sink.
    pub fn into_port(self) -> P {
        self.port
    }

    /// Set Binary Serial Port - Message ID 134. Typical arguments are
    /// 8 data bits, 1 stop bit, no parity.
    pub fn set_binary_serial_port(&mut self, bit_rate: u32, data_bits: u8, stop_bit: u8, parity: u8) {
        let rate = bit_rate.to_be_bytes();
        let body = [
            SET_BINARY_SERIAL_PORT_ID,
            rate[0],
            rate[1],
            rate[2],
            rate[3],
            data_bits,
            stop_bit,
            parity,
            0,
        ];
        self.write_frame(&body);
    }

    /// Set Protocol - Message ID 135.
    pub fn set_protocol(&mut self, protocol: Protocol) {
        self.write_frame(&[SET_PROTOCOL_ID, protocol as u8]);
    }

    /// Set Message Rate - Message ID 166. The trailing four bytes are
    /// reserved and transmitted as zero.
    pub fn set_message_rate(&mut self, mode: u8, message_id: u8, update_rate: u8) {
        self.write_frame(&[SET_MESSAGE_RATE_ID, mode, message_id, update_rate, 0, 0, 0, 0]);
    }

    fn write_frame(&mut self, body: &[u8]) {
        let length = body.len() as u16;
        self.port.write(0xa0);
        self.port.write(0xa2);
        self.port.write(((length >> 8) & 0x7f) as u8);
        self.port.write((length & 0xff) as u8);
        self.port.write_all(body);
        let sum = body.iter().fold(0u16, |acc, &b| (acc + b as u16) & 0x7fff);
        self.port.write((sum >> 8) as u8);
        self.port.write((sum & 0xff) as u8);
        self.port.write(0xb0);
        self.port.write(0xb3);
    }
}
