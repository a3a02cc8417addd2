//! Decoder for the `$PMTKLOG` status response of the LOCUS logger.
//!
//! The response has the form
//! `$PMTKLOG,<serial>,<type>,<mode>,<config>,<interval>,<distance>,<speed>,<status>,<records>,<percent>*HH`.
//! Its checksum is not enforced.

use checksum;
use err::ParseError;
use lexer::{self, Cursor};
use state::LoggerStatus;

/// Identifier of the logger status response.
pub const STATUS_RESPONSE: &str = "$PMTKLOG";
/// Number of fields in a status response.
pub const STATUS_FIELDS: usize = 10;

const MODE_FIELD: usize = 2;

/// Decode a status response into `status`. Fields that are empty or missing
/// keep their previous value.
pub fn decode_status(response: &[u8], status: &mut LoggerStatus) -> Result<(), ParseError> {
    let line = checksum::trim(response);
    let start = match lexer::find(line, STATUS_RESPONSE.as_bytes()) {
        Some(start) => start,
        None => return Err(ParseError::UnexpectedSentenceType),
    };

    let mut cursor = Cursor::at(line, start);
    cursor = next_field!(cursor, "logger serial");

    let mut parsed = [None; STATUS_FIELDS];
    for (i, slot) in parsed.iter_mut().enumerate() {
        let field = cursor.field();
        if !field.is_empty() {
            let value = accumulate(field);
            *slot = Some(if i == MODE_FIELD {
                hex_letter(field, value)
            } else {
                value
            });
        }
        cursor = match cursor.advance() {
            Some(next) => next,
            None => break,
        };
    }

    let [serial, log_type, mode, config, interval, distance, speed, active, records, percent] =
        parsed;
    set(&mut status.serial, serial);
    set(&mut status.log_type, log_type);
    set(&mut status.mode, mode);
    set(&mut status.config, config);
    set(&mut status.interval, interval);
    set(&mut status.distance, distance);
    set(&mut status.speed, speed);
    if let Some(v) = active {
        status.active = v == 0;
    }
    set(&mut status.records, records);
    set(&mut status.percent, percent);
    Ok(())
}

/// Digits accumulate in base 10. Any other byte replaces the value with the
/// byte itself, so a single letter can stand in for a number.
fn accumulate(field: &[u8]) -> u16 {
    field.iter().fold(0u16, |acc, &c| {
        if c.is_ascii_digit() {
            acc.wrapping_mul(10).wrapping_add(u16::from(c - b'0'))
        } else {
            u16::from(c)
        }
    })
}

/// A field that ended on a letter is read as a hex-like digit, `a` is 10.
fn hex_letter(field: &[u8], value: u16) -> u16 {
    if !field.iter().any(|c| c.is_ascii_alphabetic()) {
        return value;
    }
    match value {
        v if v >= u16::from(b'a') && v <= u16::from(b'z') => v - u16::from(b'a') + 10,
        v if v >= u16::from(b'A') && v <= u16::from(b'Z') => v - u16::from(b'A') + 10,
        v => v,
    }
}

#[inline]
fn set(target: &mut u16, value: Option<u16>) {
    if let Some(v) = value {
        *target = v;
    }
}
