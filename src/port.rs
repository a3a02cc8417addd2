//! The serial connection to the receiver.

use std::io;

/// A byte-oriented, non-blocking connection to the receiver.
pub trait Port {
    /// `true` if `read_one` has a byte to return.
    fn available(&mut self) -> bool;

    /// Read one byte. Only meaningful after `available` returned `true`.
    fn read_one(&mut self) -> u8;

    /// Transmit `line` followed by `\r\n`.
    fn send_line(&mut self, line: &str) -> io::Result<()>;

    /// `true` once no more bytes will ever arrive. Serial lines never close.
    fn is_closed(&self) -> bool {
        false
    }
}

/// Adapts a reader and a writer into a `Port`.
///
/// `WouldBlock` and `TimedOut` on the reader count as "nothing available".
/// The end of the reader closes the port.
#[derive(Debug)]
pub struct IoPort<R, W> {
    input: io::Bytes<R>,
    peek_buf: Option<u8>,
    output: W,
    closed: bool,
}

impl<R: io::Read, W: io::Write> IoPort<R, W> {
    pub fn new(input: R, output: W) -> Self {
        IoPort {
            input: input.bytes(),
            peek_buf: None,
            output,
            closed: false,
        }
    }

    /// The writer that received all sent lines.
    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Fill the peek buffer if it is empty.
    fn advance(&mut self) {
        if self.peek_buf.is_some() || self.closed {
            return;
        }
        self.peek_buf = match self.input.next() {
            None => {
                self.closed = true;
                None
            }
            Some(Ok(v)) => Some(v),
            Some(Err(ref e))
                if e.kind() == io::ErrorKind::WouldBlock
                    || e.kind() == io::ErrorKind::TimedOut
                    || e.kind() == io::ErrorKind::Interrupted =>
            {
                None
            }
            Some(Err(e)) => {
                warn!("closing receiver port after read error: {}", e);
                self.closed = true;
                None
            }
        };
    }
}

impl<R: io::Read, W: io::Write> Port for IoPort<R, W> {
    fn available(&mut self) -> bool {
        self.advance();
        self.peek_buf.is_some()
    }

    fn read_one(&mut self) -> u8 {
        self.advance();
        self.peek_buf.take().unwrap_or(0)
    }

    fn send_line(&mut self, line: &str) -> io::Result<()> {
        self.output.write_all(line.as_bytes())?;
        self.output.write_all(b"\r\n")?;
        self.output.flush()
    }

    fn is_closed(&self) -> bool {
        self.closed && self.peek_buf.is_none()
    }
}
