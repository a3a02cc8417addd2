//! Decoder for `ddmm.mmmm` / `dddmm.mmmm` angle fields.

use err::AngleError;
use state::CardDir;

const MIN_FIELD_LENGTH: usize = 6;
const DEGREE_SCALE: i32 = 10_000_000;
const MAX_DEGREES: i32 = 180;
const MINUTE_DIGITS: usize = 2;
const MINUTE_FRACTION_DIGITS: usize = 4;

/// An angle in two fixed-point encodings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Angle {
    /// The `dddmm.mmmm` reading scaled by 10^5, so degrees and minutes stay
    /// separate digits, e.g. `48°07.038'` is `480_703_800`.
    pub degree_minute: i32,
    /// Decimal degrees scaled by 10^7, e.g. `48°07.038'` is `481_173_000`.
    pub degree: i32,
}

impl Angle {
    /// Apply the sign of a hemisphere to both encodings.
    #[inline]
    pub fn signed(self, dir: CardDir) -> Angle {
        let sign = dir.get_sign();
        Angle {
            degree_minute: self.degree_minute * sign,
            degree: self.degree * sign,
        }
    }

    /// Decimal degrees as a float.
    #[inline]
    pub fn degrees(&self) -> f64 {
        f64::from(self.degree) / f64::from(DEGREE_SCALE)
    }
}

/// Decode an angle field. The field must not contain the separator.
///
/// Two digits of degrees are expected if the decimal point is at offset 4
/// and three if it is at offset 5. Up to four fractional minute digits are
/// used; shorter fractions are padded with zeros.
pub fn decode(field: &[u8]) -> Result<Angle, AngleError> {
    if field.len() < MIN_FIELD_LENGTH {
        return Err(AngleError::TooShort(field.len()));
    }

    let deg_split = if field[4] == b'.' {
        2
    } else if field[5] == b'.' {
        3
    } else {
        return Err(AngleError::Layout);
    };

    let (deg, rest) = field.split_at(deg_split);
    let degrees = digits(deg)?;
    if degrees > MAX_DEGREES {
        return Err(AngleError::OutOfRange(degrees));
    }
    let degree_component = degrees * DEGREE_SCALE;

    // `rest` is `mm.ffff`, the point is known to be at index 2
    let mut minutes = digits(&rest[..MINUTE_DIGITS])?;
    let fraction = &rest[MINUTE_DIGITS + 1..];
    for i in 0..MINUTE_FRACTION_DIGITS {
        let d = match fraction.get(i) {
            Some(&c) => digit(c)?,
            None => 0,
        };
        minutes = minutes * 10 + d;
    }

    Ok(Angle {
        degree: degree_component + minutes * 50 / 3,
        degree_minute: degree_component + minutes * 10,
    })
}

#[inline]
fn digit(c: u8) -> Result<i32, AngleError> {
    if c.is_ascii_digit() {
        Ok(i32::from(c - b'0'))
    } else {
        Err(AngleError::InvalidDigit(c))
    }
}

fn digits(s: &[u8]) -> Result<i32, AngleError> {
    let mut value = 0;
    for &c in s {
        value = value * 10 + digit(c)?;
    }
    Ok(value)
}
