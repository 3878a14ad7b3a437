//! Byte-oriented device stand-in.
//!
//! [`SerialDevice`] models a simulated serial port with fixed inbound and
//! outbound buffers. It only enforces the size contract: writes larger
//! than the buffer and reads into too-small buffers fail, everything else
//! is a bounded copy.

use std::error::Error;
use std::fmt;

/// Size of each device buffer in bytes.
pub const SERIAL_BUFFER_SIZE: usize = 4096;

/// Longest device name kept, in bytes.
const MAX_NAME_LEN: usize = 256;

/// Errors from [`SerialDevice`] I/O.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeviceError {
    /// `write()` was handed more bytes than the output buffer holds.
    SizeExceeded { len: usize, limit: usize },
    /// `read()` was handed a buffer smaller than the pending input.
    BufferTooSmall { needed: usize, capacity: usize },
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeExceeded { len, limit } => {
                write!(f, "data size {len} exceeds the {limit}-byte limit")
            }
            Self::BufferTooSmall { needed, capacity } => {
                write!(f, "read buffer too small: need {needed}, have {capacity}")
            }
        }
    }
}

impl Error for DeviceError {}

/// A simulated serial device with fixed-size I/O buffers.
#[derive(Clone)]
pub struct SerialDevice {
    name: String,
    input: [u8; SERIAL_BUFFER_SIZE],
    input_len: usize,
    output: [u8; SERIAL_BUFFER_SIZE],
    output_len: usize,
}

impl SerialDevice {
    /// (Re)initialise the device under `name`, truncated to 256 bytes on a
    /// char boundary. Buffered data is discarded.
    pub fn init(&mut self, name: &str) {
        let mut end = name.len().min(MAX_NAME_LEN);
        while !name.is_char_boundary(end) {
            end -= 1;
        }
        self.name.clear();
        self.name.push_str(&name[..end]);
        self.input_len = 0;
        self.output_len = 0;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Copy `data` into the output buffer, replacing its previous contents.
    pub fn write(&mut self, data: &[u8]) -> Result<(), DeviceError> {
        if data.len() > SERIAL_BUFFER_SIZE {
            return Err(DeviceError::SizeExceeded {
                len: data.len(),
                limit: SERIAL_BUFFER_SIZE,
            });
        }
        self.output[..data.len()].copy_from_slice(data);
        self.output_len = data.len();
        Ok(())
    }

    /// Copy the pending input into `buf`, returning the byte count.
    pub fn read(&self, buf: &mut [u8]) -> Result<usize, DeviceError> {
        if buf.len() < self.input_len {
            return Err(DeviceError::BufferTooSmall {
                needed: self.input_len,
                capacity: buf.len(),
            });
        }
        buf[..self.input_len].copy_from_slice(&self.input[..self.input_len]);
        Ok(self.input_len)
    }

    /// Simulate inbound bytes arriving on the wire.
    pub fn inject(&mut self, data: &[u8]) -> Result<(), DeviceError> {
        if data.len() > SERIAL_BUFFER_SIZE {
            return Err(DeviceError::SizeExceeded {
                len: data.len(),
                limit: SERIAL_BUFFER_SIZE,
            });
        }
        self.input[..data.len()].copy_from_slice(data);
        self.input_len = data.len();
        Ok(())
    }

    /// Bytes most recently written to the device.
    pub fn written(&self) -> &[u8] {
        &self.output[..self.output_len]
    }
}

impl Default for SerialDevice {
    fn default() -> Self {
        Self {
            name: String::new(),
            input: [0; SERIAL_BUFFER_SIZE],
            input_len: 0,
            output: [0; SERIAL_BUFFER_SIZE],
            output_len: 0,
        }
    }
}

impl fmt::Debug for SerialDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerialDevice")
            .field("name", &self.name)
            .field("input_len", &self.input_len)
            .field("output_len", &self.output_len)
            .finish()
    }
}
