//! Field tokenizer for comma separated NMEA sentences.

use std::str::{self, FromStr};

use err::ParseError;

const FIELD_SEPARATOR: u8 = b',';
const CHECKSUM_DELIMITER: u8 = b'*';

/// A position inside a borrowed sentence.
///
/// The cursor points at the first byte of a field. A field runs until the
/// next `,`, the `*` that starts the checksum, or the end of the sentence.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    line: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `line`.
    pub fn new(line: &'a [u8]) -> Self {
        Cursor { line, pos: 0 }
    }

    /// Create a cursor at byte offset `pos` of `line`.
    pub fn at(line: &'a [u8], pos: usize) -> Self {
        Cursor {
            line,
            pos: pos.min(line.len()),
        }
    }

    /// Returns the cursor positioned just past the next comma.
    /// Returns `None` if there is no further comma or nothing follows it.
    pub fn advance(&self) -> Option<Cursor<'a>> {
        let rest = &self.line[self.pos..];
        let comma = rest.iter().position(|&c| c == FIELD_SEPARATOR)?;
        let pos = self.pos + comma + 1;
        if pos >= self.line.len() {
            return None;
        }
        Some(Cursor {
            line: self.line,
            pos,
        })
    }

    /// The content of the field under the cursor.
    pub fn field(&self) -> &'a [u8] {
        let rest = &self.line[self.pos..];
        let end = rest
            .iter()
            .position(|&c| c == FIELD_SEPARATOR || c == CHECKSUM_DELIMITER)
            .unwrap_or(rest.len());
        &rest[..end]
    }

    /// An empty field means the sender had no value for it.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.field().is_empty()
    }

    /// First byte of the field, `None` for an empty field.
    #[inline]
    pub fn first(&self) -> Option<u8> {
        self.field().first().cloned()
    }

    /// Parse the field as `T`, `None` for an empty field.
    pub fn parse<T>(&self) -> Result<Option<T>, ParseError>
    where
        T: FromStr,
        ParseError: From<T::Err>,
    {
        if self.is_empty() {
            return Ok(None);
        }
        Ok(Some(T::from_str(str::from_utf8(self.field())?)?))
    }

    /// Parse the digits before the decimal point of the field, `None` for an
    /// empty field. `"123519.000"` yields `123519`.
    pub fn parse_integral(&self) -> Result<Option<u32>, ParseError> {
        let field = self.field();
        if field.is_empty() {
            return Ok(None);
        }
        let integral = match field.iter().position(|&c| c == b'.') {
            Some(dot) => &field[..dot],
            None => field,
        };
        Ok(Some(u32::from_str(str::from_utf8(integral)?)?))
    }
}

/// Byte offset of the first occurrence of `needle` in `haystack`.
pub fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}
