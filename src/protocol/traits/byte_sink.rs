//! Minimal abstraction for an outgoing serial byte stream, used by the
//! command builders. Writes are assumed blocking-or-buffered at the
//! implementation's discretion; the builders perform no flushing.

/// Contract for pushing bytes onto a serial line.
pub trait ByteSink {
    /// Emit a single byte.
    fn write(&mut self, byte: u8);

    /// Emit a run of bytes. Implementations with a bulk path may override.
    fn write_all(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write(byte);
        }
    }
}
