//! Byte-at-a-time NMEA 0183 decoding for MTK3339 GPS receivers.
//!
//! Bytes from a `Port` are assembled into lines by a `LineBuffer`; completed
//! lines are checked and decoded by a `NmeaParser` into a `NavState`. `Gps`
//! ties both together and adds the receiver commands (LOCUS logger, standby).

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
#[cfg(test)]
extern crate proptest;
extern crate arrayvec;
extern crate chrono;
#[macro_use]
extern crate log;
#[macro_use]
extern crate quick_error;

pub mod err;
#[macro_use]
mod macros;
pub mod angle;
pub mod checksum;
pub mod commands;
pub mod gps;
pub mod lexer;
pub mod line;
pub mod logger;
pub mod parser;
pub mod port;
pub mod state;

pub use angle::Angle;
pub use err::{AngleError, ChecksumError, ParseError};
pub use gps::{Gps, MAX_WAIT_SENTENCE};
pub use line::{LineBuffer, LineEvent, MAX_LINE_LENGTH};
pub use parser::{NmeaParser, Profile, SentenceType};
pub use port::{IoPort, Port};
pub use state::{
    AntennaStatus, CardDir, FixMode, GpsQualityInd, LoggerStatus, NavState, Speed, KNOTS_TO_MPS,
};
