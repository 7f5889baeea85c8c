//! Test doubles for the serial-line seams used by the integration suites.
use std::cell::RefCell;
use std::rc::Rc;

use nmea_sirf::protocol::traits::byte_sink::ByteSink;
use nmea_sirf::protocol::traits::byte_source::ByteSource;

struct StreamInner {
    data: Vec<u8>,
    pos: usize,
}

/// In-memory byte source. Cloning shares the underlying buffer, so a test
/// can hand one handle to a parser and keep another to refill it, the way
/// a driver keeps feeding a serial FIFO.
#[derive(Clone)]
#[allow(dead_code)]
pub struct TestStream(Rc<RefCell<StreamInner>>);

#[allow(dead_code)]
impl TestStream {
    pub fn new(text: &str) -> Self {
        Self(Rc::new(RefCell::new(StreamInner {
            data: text.as_bytes().to_vec(),
            pos: 0,
        })))
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(Rc::new(RefCell::new(StreamInner {
            data: bytes.to_vec(),
            pos: 0,
        })))
    }

    /// Replace the pending content.
    pub fn set(&self, text: &str) {
        let mut inner = self.0.borrow_mut();
        inner.data = text.as_bytes().to_vec();
        inner.pos = 0;
    }
}

impl ByteSource for TestStream {
    fn available(&self) -> bool {
        let inner = self.0.borrow();
        inner.pos < inner.data.len()
    }

    fn read(&mut self) -> u8 {
        let mut inner = self.0.borrow_mut();
        let byte = inner.data[inner.pos];
        inner.pos += 1;
        byte
    }
}

/// Byte sink collecting everything written.
#[derive(Default)]
#[allow(dead_code)]
pub struct TestPort {
    pub bytes: Vec<u8>,
}

#[allow(dead_code)]
impl TestPort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.bytes).unwrap()
    }
}

impl ByteSink for TestPort {
    fn write(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    fn write_all(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }
}
