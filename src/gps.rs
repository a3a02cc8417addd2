//! The receiver driver: feeds bytes from a `Port` into a `LineBuffer`,
//! decodes completed lines and talks to the receiver.

use std::io;

use commands;
use err::ParseError;
use lexer;
use line::{LineBuffer, LineEvent};
use logger;
use parser::{NmeaParser, Profile, SentenceType};
use port::Port;
use state::NavState;

/// Default number of lines `wait_for_sentence` looks at.
pub const MAX_WAIT_SENTENCE: u8 = 5;

/// Only the head of a line is searched for the awaited identifier.
const WAIT_MATCH_LEN: usize = 19;

#[derive(Debug)]
pub struct Gps<P> {
    port: P,
    lines: LineBuffer,
    parser: NmeaParser,
    in_standby: bool,
}

impl<P: Port> Gps<P> {
    pub fn new(port: P) -> Self {
        Self::with_profile(port, Profile::default())
    }

    pub fn with_profile(port: P, profile: Profile) -> Self {
        Gps {
            port,
            lines: LineBuffer::new(),
            parser: NmeaParser::with_profile(profile),
            in_standby: false,
        }
    }

    /// Move at most one byte from the port into the line buffer.
    ///
    /// Returns the byte, or `None` if paused or nothing was available. A
    /// paused engine does not touch the port.
    pub fn read(&mut self) -> Option<u8> {
        if self.lines.is_paused() || !self.port.available() {
            return None;
        }
        let c = self.port.read_one();
        if let LineEvent::Truncated = self.lines.feed(c) {
            trace!("dropped byte {:#04x}", c);
        }
        Some(c)
    }

    /// `true` if a line was completed since it was last taken.
    #[inline]
    pub fn new_nmea_received(&self) -> bool {
        self.lines.has_new_line()
    }

    /// The last completed line. Marks it as read.
    pub fn last_nmea(&mut self) -> &[u8] {
        self.lines.take_last_line()
    }

    pub fn pause(&mut self, paused: bool) {
        self.lines.pause(paused);
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.lines.is_paused()
    }

    /// Decode `sentence` into the navigation state.
    pub fn parse(&mut self, sentence: &[u8]) -> Result<SentenceType, ParseError> {
        self.parser.parse(sentence)
    }

    /// Take the last completed line and decode it.
    pub fn parse_last(&mut self) -> Result<SentenceType, ParseError> {
        let parser = &mut self.parser;
        let line = self.lines.take_last_line();
        parser.parse(line)
    }

    #[inline]
    pub fn state(&self) -> &NavState {
        self.parser.state()
    }

    pub fn send_command(&mut self, command: &str) -> io::Result<()> {
        debug!("sending {:?}", command);
        self.port.send_line(command)
    }

    /// Read until `max` lines were completed, returning `true` as soon as
    /// one of them contains `wanted` within its first 19 bytes.
    ///
    /// Blocks for as long as the port stays silent. Gives up early once the
    /// port is closed.
    pub fn wait_for_sentence(&mut self, wanted: &str, max: u8) -> bool {
        let mut seen = 0;
        while seen < max {
            self.read();

            if !self.lines.has_new_line() {
                if self.port.is_closed() || self.lines.is_paused() {
                    break;
                }
                continue;
            }

            seen += 1;
            let line = self.lines.take_last_line();
            let head = &line[..line.len().min(WAIT_MATCH_LEN)];
            if lexer::find(head, wanted.as_bytes()).is_some() {
                trace!("found {:?} after {} lines", wanted, seen);
                return true;
            }
        }
        debug!("gave up waiting for {:?} after {} lines", wanted, seen);
        false
    }

    /// Start the LOCUS logger. `Ok(true)` once the receiver acknowledged.
    pub fn start_logger(&mut self) -> io::Result<bool> {
        self.send_command(commands::LOCUS_START)?;
        self.lines.clear_received();
        Ok(self.wait_for_sentence(commands::LOCUS_START_STOP_ACK, MAX_WAIT_SENTENCE))
    }

    /// Stop the LOCUS logger. `Ok(true)` once the receiver acknowledged.
    pub fn stop_logger(&mut self) -> io::Result<bool> {
        self.send_command(commands::LOCUS_STOP)?;
        self.lines.clear_received();
        Ok(self.wait_for_sentence(commands::LOCUS_START_STOP_ACK, MAX_WAIT_SENTENCE))
    }

    /// Query the logger and decode its answer into `state().logger`.
    ///
    /// `Ok(false)` if no answer arrived in time.
    pub fn read_logger_status(&mut self) -> Result<bool, ParseError> {
        self.send_command(commands::LOCUS_QUERY_STATUS)?;
        if !self.wait_for_sentence(logger::STATUS_RESPONSE, MAX_WAIT_SENTENCE) {
            return Ok(false);
        }
        let parser = &mut self.parser;
        parser.parse_logger_status(self.lines.last_line())?;
        Ok(true)
    }

    /// Put the receiver into standby.
    ///
    /// `Ok(false)` without sending anything if it already is in standby.
    pub fn standby(&mut self) -> io::Result<bool> {
        if self.in_standby {
            return Ok(false);
        }
        self.send_command(commands::STANDBY)?;
        self.in_standby = true;
        Ok(true)
    }

    /// Wake the receiver with an empty line and wait for it to report back.
    ///
    /// `Ok(false)` if it was not in standby or did not answer.
    pub fn wakeup(&mut self) -> io::Result<bool> {
        if !self.in_standby {
            return Ok(false);
        }
        self.in_standby = false;
        self.send_command("")?;
        Ok(self.wait_for_sentence(commands::AWAKE, MAX_WAIT_SENTENCE))
    }

    #[inline]
    pub fn in_standby(&self) -> bool {
        self.in_standby
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    pub fn into_inner(self) -> P {
        self.port
    }
}
