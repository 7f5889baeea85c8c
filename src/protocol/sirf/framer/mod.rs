//! SiRF binary packet framer: start sequence, big-endian length, payload,
//! sum-mod-2^15 checksum, end sequence. Any deviation resets the machine to
//! hunting for `A0 A2`, so resynchronisation after garbage is automatic.
//! Payload bytes are forwarded to the body decoder as they arrive; a packet
//! is delivered only when the checksum matched and the body id was
//! recognised and completed.
use crate::protocol::sirf::messages::{
    GeodeticNavigationData, OutputMessage, GEODETIC_NAVIGATION_DATA_ID, GEODETIC_PAYLOAD_LEN,
};
use crate::protocol::traits::byte_source::ByteSource;

/// Upper bound on a sane payload; longer claims are discarded.
pub const MAX_PAYLOAD_LENGTH: u16 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameState {
    StartSequence,
    PayloadLength,
    Payload,
    Checksum,
    EndSequence,
}

//==================================================================================BODY_DECODER

/// Byte-at-a-time decoder for recognised message bodies. Unknown ids turn
/// the decoder off for the rest of the packet; the framer still validates
/// and discards the payload normally.
struct BodyDecoder {
    raw: [u8; GEODETIC_PAYLOAD_LEN],
    pos: usize,
    message: Option<OutputMessage>,
}

impl BodyDecoder {
    const fn new() -> Self {
        Self {
            raw: [0; GEODETIC_PAYLOAD_LEN],
            pos: 0,
            message: None,
        }
    }

    fn reset(&mut self) {
        self.pos = 0;
        self.message = None;
    }

    /// Feed one payload byte. Returns false once the decoder wants no more
    /// bytes, either because the body is complete or the id is unknown.
    fn parse(&mut self, byte: u8) -> bool {
        if self.pos == 0 {
            return match byte {
                GEODETIC_NAVIGATION_DATA_ID => {
                    self.raw[0] = byte;
                    self.pos = 1;
                    true
                }
                _ => false,
            };
        }
        self.raw[self.pos] = byte;
        self.pos += 1;
        if self.pos == GEODETIC_PAYLOAD_LEN {
            self.message = Some(OutputMessage::GeodeticNavigation(
                GeodeticNavigationData::from_payload(&self.raw),
            ));
            false
        } else {
            true
        }
    }

    /// The decoded body, if the packet carried a complete recognised one.
    fn finished(&self) -> Option<&OutputMessage> {
        self.message.as_ref()
    }
}

//==================================================================================PACKET_FRAMER

/// Five-state packet machine over a polled byte source.
pub struct PacketFramer {
    state: FrameState,
    /// Position inside a two-byte unit of the current state (0 or 1).
    step: u8,
    /// High byte of a pending big-endian pair.
    high: u8,
    payload_length: u16,
    payload_count: u16,
    payload_sum: u16,
    reading_body: bool,
    decoder: BodyDecoder,
}

impl Default for PacketFramer {
    fn default() -> Self {
        Self::new()
    }
}

impl PacketFramer {
    pub const fn new() -> Self {
        Self {
            state: FrameState::StartSequence,
            step: 0,
            high: 0,
            payload_length: 0,
            payload_count: 0,
            payload_sum: 0,
            reading_body: false,
            decoder: BodyDecoder::new(),
        }
    }

    /// Consume every byte the source currently offers, delivering zero or
    /// more completed packets to `on_message` along the way.
    pub fn poll<S: ByteSource>(
        &mut self,
        source: &mut S,
        mut on_message: impl FnMut(&OutputMessage),
    ) {
        while source.available() {
            let byte = source.read();
            self.consume(byte, &mut on_message);
        }
    }

    /// Advance the framing machine by one byte.
    pub fn consume(&mut self, byte: u8, on_message: &mut impl FnMut(&OutputMessage)) {
        match self.state {
            FrameState::StartSequence => {
                if self.step == 0 && byte == 0xa0 {
                    self.step = 1;
                } else if self.step == 1 && byte == 0xa2 {
                    self.enter(FrameState::PayloadLength);
                } else {
                    self.reset();
                }
            }
            FrameState::PayloadLength => {
                if self.step == 0 && byte <= 0x7f {
                    self.high = byte;
                    self.step = 1;
                } else if self.step == 1 {
                    let length = u16::from_be_bytes([self.high, byte]);
                    if length > 0 && length < MAX_PAYLOAD_LENGTH {
                        self.payload_length = length;
                        self.payload_count = 0;
                        self.payload_sum = 0;
                        self.reading_body = true;
                        self.decoder.reset();
                        self.enter(FrameState::Payload);
                    } else {
                        #[cfg(feature = "defmt")]
                        defmt::debug!("sirf: payload length {} rejected", length);
                        self.reset();
                    }
                } else {
                    self.reset();
                }
            }
            FrameState::Payload => {
                if self.reading_body {
                    self.reading_body = self.decoder.parse(byte);
                }
                self.payload_sum = (self.payload_sum + byte as u16) & 0x7fff;
                self.payload_count += 1;
                if self.payload_count == self.payload_length {
                    self.enter(FrameState::Checksum);
                }
            }
            FrameState::Checksum => {
                if self.step == 0 && byte <= 0x7f {
                    self.high = byte;
                    self.step = 1;
                } else if self.step == 1 {
                    let wire = u16::from_be_bytes([self.high, byte]);
                    if wire == self.payload_sum {
                        self.enter(FrameState::EndSequence);
                    } else {
                        #[cfg(feature = "defmt")]
                        defmt::debug!("sirf: checksum mismatch");
                        self.reset();
                    }
                } else {
                    self.reset();
                }
            }
            FrameState::EndSequence => {
                if self.step == 0 && byte == 0xb0 {
                    self.step = 1;
                } else if self.step == 1 && byte == 0xb3 {
                    if let Some(message) = self.decoder.finished() {
                        #[cfg(feature = "defmt")]
                        defmt::trace!("sirf: delivering message id {}", message.id());
                        on_message(message);
                    }
                    self.reset();
                } else {
                    self.reset();
                }
            }
        }
    }

    fn enter(&mut self, state: FrameState) {
        self.step = 0;
        self.state = state;
    }

    fn reset(&mut self) {
        self.step = 0;
        self.state = FrameState::StartSequence;
    }
}
