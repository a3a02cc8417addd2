//! Checksum validation for `$...*HH` sentences.

use err::ChecksumError;

/// Strip the line framing around a sentence: a leading line feed left over
/// from the previous line and the trailing carriage return, line feed, or NUL.
pub fn trim(line: &[u8]) -> &[u8] {
    let start = line
        .iter()
        .position(|&c| c != b'\n' && c != b'\r')
        .unwrap_or(line.len());
    let end = line
        .iter()
        .rposition(|&c| c != b'\r' && c != b'\n' && c != 0)
        .map_or(start, |i| i + 1);
    if end <= start {
        return &[];
    }
    &line[start..end]
}

/// Decimal value of a hexadecimal digit. Only `0-9` and `A-F` are
/// recognized, every other byte counts as zero.
#[inline]
pub fn parse_hex(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

/// XOR of all bytes in `body`.
#[inline]
pub fn compute(body: &[u8]) -> u8 {
    body.iter().fold(0, |sum, &c| sum ^ c)
}

/// Check the checksum of a sentence.
///
/// The sentence has to end in `*HH`. All bytes between the leading `$` and
/// the `*` are covered.
pub fn verify(line: &[u8]) -> Result<(), ChecksumError> {
    let line = trim(line);
    if line.len() < 4 || line[line.len() - 3] != b'*' {
        return Err(ChecksumError::Missing);
    }
    let star = line.len() - 3;
    let expected = parse_hex(line[star + 1]) * 16 + parse_hex(line[star + 2]);
    let actual = compute(&line[1..star]);
    if expected != actual {
        return Err(ChecksumError::Mismatch(expected, actual));
    }
    Ok(())
}

/// `true` if the sentence carries a matching checksum.
#[inline]
pub fn validate(line: &[u8]) -> bool {
    verify(line).is_ok()
}
