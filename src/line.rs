//! Double buffered line assembly.
//!
//! Bytes are collected into the *current* buffer. A line feed completes the
//! line: the buffers swap roles, so the completed line stays readable as the
//! *last* line while the next one is filled.

use arrayvec::ArrayVec;

/// Longest raw line, including the position of the terminator.
pub const MAX_LINE_LENGTH: usize = 120;
const LINE_CAPACITY: usize = MAX_LINE_LENGTH - 1;

/// Outcome of feeding one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEvent {
    /// Byte stored, or dropped because the buffer is paused.
    None,
    /// A line feed completed the line, it is now the last line.
    Complete,
    /// The line is full and the byte was discarded.
    Truncated,
}

#[derive(Debug)]
pub struct LineBuffer {
    lines: [ArrayVec<u8, LINE_CAPACITY>; 2],
    current: usize,
    received: bool,
    paused: bool,
    truncated: bool,
    last_truncated: bool,
}

impl LineBuffer {
    pub fn new() -> Self {
        LineBuffer {
            lines: [ArrayVec::new(), ArrayVec::new()],
            current: 0,
            received: false,
            paused: false,
            truncated: false,
            last_truncated: false,
        }
    }

    /// Feed a single byte.
    pub fn feed(&mut self, byte: u8) -> LineEvent {
        if self.paused {
            return LineEvent::None;
        }

        if byte == b'\n' {
            self.current ^= 1;
            self.lines[self.current].clear();
            self.last_truncated = self.truncated;
            self.truncated = false;
            self.received = true;
            trace!("line complete: {:?}", String::from_utf8_lossy(self.last_line()));
            return LineEvent::Complete;
        }

        if self.lines[self.current].try_push(byte).is_err() {
            if !self.truncated {
                warn!("line exceeds {} bytes, truncating", LINE_CAPACITY);
            }
            self.truncated = true;
            return LineEvent::Truncated;
        }
        LineEvent::None
    }

    /// `true` if a line was completed since the last call to `take_last_line`.
    #[inline]
    pub fn has_new_line(&self) -> bool {
        self.received
    }

    /// The last completed line, without the line feed.
    #[inline]
    pub fn last_line(&self) -> &[u8] {
        &self.lines[self.current ^ 1]
    }

    /// The last completed line. Marks it as read.
    pub fn take_last_line(&mut self) -> &[u8] {
        self.received = false;
        self.last_line()
    }

    /// `true` if bytes of the last line were discarded.
    #[inline]
    pub fn last_line_truncated(&self) -> bool {
        self.last_truncated
    }

    /// Mark the last line as read without looking at it.
    #[inline]
    pub fn clear_received(&mut self) {
        self.received = false;
    }

    /// While paused every fed byte is dropped.
    pub fn pause(&mut self, paused: bool) {
        self.paused = paused;
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}
