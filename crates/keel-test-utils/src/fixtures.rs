//! Record types for pool and ring tests.
//!
//! - [`Point`] — a small `Copy` record, two `i32`s.
//! - [`Frame`] — a 1 KiB payload with an index, too large for `Default`
//!   to be derived.

/// A 2D point. Small enough that stride bugs show up immediately.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Payload bytes carried by a [`Frame`].
pub const FRAME_PAYLOAD: usize = 1024;

/// A fixed-size frame record: sequence index plus raw payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub index: u32,
    pub data: [u8; FRAME_PAYLOAD],
}

impl Frame {
    /// Overwrite this frame in place with `index` and a one-letter tag
    /// (`'A' + index % 26`) followed by a NUL.
    pub fn stamp(&mut self, index: u32) {
        self.index = index;
        self.data[0] = b'A' + (index % 26) as u8;
        self.data[1] = 0;
    }

    /// The tag written by [`stamp`](Self::stamp), up to the first NUL.
    pub fn tag(&self) -> &[u8] {
        let end = self.data.iter().position(|&b| b == 0).unwrap_or(FRAME_PAYLOAD);
        &self.data[..end]
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            index: 0,
            data: [0; FRAME_PAYLOAD],
        }
    }
}
