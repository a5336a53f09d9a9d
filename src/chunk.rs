//! Data transaction builder.
//!
//! Pixel bytes are streamed to the controller in I2C writes of one
//! [`CONTROL_DATA`] marker followed by at most [`CHUNK_SIZE`] payload bytes.

use crate::command::{CHUNK_SIZE, CONTROL_DATA};

/// One data transaction under construction.
pub(crate) struct DataChunk {
    buf: [u8; CHUNK_SIZE + 1],
    len: usize,
}

impl DataChunk {
    pub fn new() -> Self {
        let mut buf = [0u8; CHUNK_SIZE + 1];
        buf[0] = CONTROL_DATA;
        Self { buf, len: 0 }
    }

    /// Append a payload byte. Returns `true` once the chunk is full and
    /// must be sent before the next push.
    pub fn push(&mut self, byte: u8) -> bool {
        self.buf[self.len + 1] = byte;
        self.len += 1;
        self.len == CHUNK_SIZE
    }

    /// Marker plus buffered payload, ready for `I2c::write`.
    pub fn frame(&self) -> &[u8] {
        &self.buf[..self.len + 1]
    }

    /// Drop the payload, keeping the marker.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
