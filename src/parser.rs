//! This module provides the dispatcher and the decoders for the sentences
//! of the *NMEA 0183* protocol that an MTK3339 receiver emits.

use std::str::{self, FromStr};

use angle::{self, Angle};
use checksum;
use err::{AngleError, ParseError};
use lexer::{self, Cursor};
use logger;
use state::{AntennaStatus, CardDir, FixMode, GpsQualityInd, NavState, Speed, KNOTS_TO_MPS};

const MILLIS_DIGITS: usize = 3;

/// The sentences the dispatcher recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceType {
    /// Global positioning system fix data.
    Gga,
    /// Recommended minimum navigation information.
    Rmc,
    /// Antenna status.
    Pgtop,
    /// Satellites in view.
    Gsv,
    /// Dilution of precision and active satellites.
    Gsa,
}

impl SentenceType {
    /// Matching order of the dispatcher.
    pub const ALL: [SentenceType; 5] = [
        SentenceType::Gga,
        SentenceType::Rmc,
        SentenceType::Pgtop,
        SentenceType::Gsv,
        SentenceType::Gsa,
    ];

    pub fn identifier(&self) -> &'static [u8] {
        match self {
            SentenceType::Gga => b"$GPGGA",
            SentenceType::Rmc => b"$GPRMC",
            SentenceType::Pgtop => b"$PGTOP",
            SentenceType::Gsv => b"$GPGSV",
            SentenceType::Gsa => b"$GPGSA",
        }
    }

    /// Find the first identifier enabled in `profile` that occurs in `line`.
    /// Returns the type and the offset of the identifier.
    pub fn find(line: &[u8], profile: Profile) -> Option<(SentenceType, usize)> {
        SentenceType::ALL
            .iter()
            .filter(|t| profile.supports(**t))
            .filter_map(|&t| lexer::find(line, t.identifier()).map(|pos| (t, pos)))
            .next()
    }
}

/// Selects which sentences are decoded and how speed is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// GGA, RMC, PGTOP and GSV. Speed stays in knots.
    Basic,
    /// Everything in `Basic` plus GSA. Speed is converted to m/s.
    Full,
}

impl Profile {
    pub fn supports(&self, sentence: SentenceType) -> bool {
        match (*self, sentence) {
            (Profile::Basic, SentenceType::Gsa) => false,
            _ => true,
        }
    }

    fn speed(&self, knots: f32) -> Speed {
        match self {
            Profile::Basic => Speed::Knots(knots),
            Profile::Full => Speed::MetersPerSecond(knots * KNOTS_TO_MPS),
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Profile::Full
    }
}

/// Decodes sentences into a `NavState`.
#[derive(Debug, Default)]
pub struct NmeaParser {
    state: NavState,
    profile: Profile,
}

impl NmeaParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: Profile) -> Self {
        NmeaParser {
            state: NavState::default(),
            profile,
        }
    }

    #[inline]
    pub fn state(&self) -> &NavState {
        &self.state
    }

    #[inline]
    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Verify the checksum of `sentence`, then decode it.
    ///
    /// Nothing is updated if the checksum does not match.
    pub fn parse(&mut self, sentence: &[u8]) -> Result<SentenceType, ParseError> {
        if let Err(e) = checksum::verify(sentence) {
            debug!(
                "dropping {:?}: {}",
                String::from_utf8_lossy(sentence),
                e
            );
            return Err(e.into());
        }
        self.dispatch(sentence)
    }

    /// Decode a sentence whose checksum was already verified.
    ///
    /// Unrecognized sentences yield `ParseError::UnexpectedSentenceType`
    /// and leave the state untouched. If a decoder fails midway, the fields
    /// before the failing one have already been updated.
    pub fn dispatch(&mut self, sentence: &[u8]) -> Result<SentenceType, ParseError> {
        let line = checksum::trim(sentence);
        let (kind, offset) = match SentenceType::find(line, self.profile) {
            Some(found) => found,
            None => {
                trace!("ignoring {:?}", String::from_utf8_lossy(line));
                return Err(ParseError::UnexpectedSentenceType);
            }
        };

        let cursor = Cursor::at(line, offset);
        let res = match kind {
            SentenceType::Gga => self.parse_gga(cursor),
            SentenceType::Rmc => self.parse_rmc(cursor),
            SentenceType::Pgtop => self.parse_pgtop(cursor),
            SentenceType::Gsv => self.parse_gsv(cursor),
            SentenceType::Gsa => self.parse_gsa(cursor),
        };
        if let Err(ref e) = res {
            debug!("{:?} sentence aborted: {}", kind, e);
        }
        res.map(|_| kind)
    }

    /// Decode a `$PMTKLOG` response into the logger status.
    pub fn parse_logger_status(&mut self, response: &[u8]) -> Result<(), ParseError> {
        logger::decode_status(response, &mut self.state.logger)
    }

    /// Parse a GGA sentence.
    fn parse_gga(&mut self, mut cursor: Cursor) -> Result<(), ParseError> {
        cursor = next_field!(cursor, "time");
        self.parse_time(&cursor)?;

        self.parse_lat_long(&mut cursor)?;

        cursor = next_field!(cursor, "fix quality");
        if let Some(q) = cursor.parse::<u8>()? {
            self.state.fix_quality = GpsQualityInd::from_code(q);
        }

        cursor = next_field!(cursor, "satellites used");
        if let Some(n) = cursor.parse()? {
            self.state.satellites_used = n;
        }

        cursor = next_field!(cursor, "hdop");
        if let Some(hdop) = cursor.parse()? {
            self.state.hdop = hdop;
        }

        cursor = next_field!(cursor, "altitude");
        if let Some(altitude) = cursor.parse()? {
            self.state.altitude = altitude;
        }

        // altitude unit
        cursor = next_field!(cursor, "altitude unit");
        cursor = next_field!(cursor, "geoid height");
        if let Some(height) = cursor.parse()? {
            self.state.geoid_height = height;
        }
        Ok(())
    }

    /// Parse an RMC sentence.
    fn parse_rmc(&mut self, mut cursor: Cursor) -> Result<(), ParseError> {
        cursor = next_field!(cursor, "time");
        self.parse_time(&cursor)?;

        cursor = next_field!(cursor, "status");
        match cursor.first() {
            Some(b'A') => self.state.fix = true,
            Some(b'V') => self.state.fix = false,
            Some(c) => return Err(ParseError::InvalidStatus(c)),
            None => return Err(ParseError::Incomplete("status")),
        }

        self.parse_lat_long(&mut cursor)?;

        cursor = next_field!(cursor, "speed");
        if let Some(knots) = cursor.parse()? {
            self.state.speed = self.profile.speed(knots);
        }

        cursor = next_field!(cursor, "course");
        if let Some(angle) = cursor.parse()? {
            self.state.angle = angle;
        }

        cursor = next_field!(cursor, "date");
        if let Some(date) = cursor.parse_integral()? {
            self.state.day = (date / 10000) as u8;
            self.state.month = ((date % 10000) / 100) as u8;
            self.state.year = (date % 100) as u8;
        }
        Ok(())
    }

    /// Parse a PGTOP antenna status sentence.
    fn parse_pgtop(&mut self, mut cursor: Cursor) -> Result<(), ParseError> {
        advance_fields!(cursor, 2, "antenna status");
        if let Some(code) = cursor.parse()? {
            self.state.antenna = AntennaStatus::from_code(code);
        }
        Ok(())
    }

    /// Parse a GSV sentence, only the number of satellites in view is used.
    fn parse_gsv(&mut self, mut cursor: Cursor) -> Result<(), ParseError> {
        advance_fields!(cursor, 3, "satellites in view");
        if let Some(n) = cursor.parse()? {
            self.state.satellites_in_view = n;
        }
        Ok(())
    }

    /// Parse a GSA sentence.
    fn parse_gsa(&mut self, mut cursor: Cursor) -> Result<(), ParseError> {
        cursor = next_field!(cursor, "mode selection");
        if let Some(c) = cursor.first() {
            self.state.mode_selection = Some(c as char);
        }

        cursor = next_field!(cursor, "fix mode");
        if let Some(code) = cursor.parse::<u8>()? {
            self.state.mode = FixMode::from_code(code);
        }

        // past the twelve satellite ids
        advance_fields!(cursor, 13, "pdop");
        if let Some(pdop) = cursor.parse()? {
            self.state.pdop = pdop;
        }

        cursor = next_field!(cursor, "hdop");
        if let Some(hdop) = cursor.parse()? {
            self.state.hdop = hdop;
        }

        cursor = next_field!(cursor, "vdop");
        if let Some(vdop) = cursor.parse()? {
            self.state.vdop = vdop;
        }
        Ok(())
    }

    /// Parse `hhmmss.sss` into the time of day.
    fn parse_time(&mut self, cursor: &Cursor) -> Result<(), ParseError> {
        let time = match cursor.parse_integral()? {
            Some(t) => t,
            None => return Ok(()),
        };
        let field = cursor.field();
        let mut millis = 0;
        if let Some(dot) = field.iter().position(|&c| c == b'.') {
            let fraction = &field[dot + 1..];
            let fraction = &fraction[..fraction.len().min(MILLIS_DIGITS)];
            if !fraction.is_empty() {
                let value = u16::from_str(str::from_utf8(fraction)?)?;
                millis = value * 10u16.pow((MILLIS_DIGITS - fraction.len()) as u32);
            }
        }

        self.state.hour = (time / 10000) as u8;
        self.state.minute = ((time % 10000) / 100) as u8;
        self.state.seconds = (time % 100) as u8;
        self.state.milliseconds = millis;
        Ok(())
    }

    /// Parse the four latitude and longitude fields that follow `cursor`.
    fn parse_lat_long(&mut self, cursor: &mut Cursor) -> Result<(), ParseError> {
        *cursor = next_field!(cursor, "latitude");
        let lat = read_angle(cursor, &mut self.state.latitude)?;
        *cursor = next_field!(cursor, "latitude direction");
        apply_dir(
            cursor,
            lat,
            CardDir::latitude,
            &mut self.state.latitude,
            &mut self.state.lat_dir,
        )?;

        *cursor = next_field!(cursor, "longitude");
        let long = read_angle(cursor, &mut self.state.longitude)?;
        *cursor = next_field!(cursor, "longitude direction");
        apply_dir(
            cursor,
            long,
            CardDir::longitude,
            &mut self.state.longitude,
            &mut self.state.lon_dir,
        )
    }
}

/// Decode the angle under `cursor` into `target`.
/// Returns `false` for an empty field. An angle with an unknown layout
/// zeroes `target`.
fn read_angle(cursor: &Cursor, target: &mut Angle) -> Result<bool, ParseError> {
    if cursor.is_empty() {
        return Ok(false);
    }
    match angle::decode(cursor.field()) {
        Ok(a) => {
            *target = a;
            Ok(true)
        }
        Err(AngleError::Layout) => {
            *target = Angle::default();
            Err(AngleError::Layout.into())
        }
        Err(e) => Err(e.into()),
    }
}

/// Apply the hemisphere under `cursor`. The sign is only applied to an angle
/// that was decoded from the same sentence.
///
/// A fresh angle without a hemisphere stays unsigned and clears `dir`.
fn apply_dir(
    cursor: &Cursor,
    decoded: bool,
    to_dir: fn(u8) -> Option<CardDir>,
    target: &mut Angle,
    dir: &mut Option<CardDir>,
) -> Result<(), ParseError> {
    let c = match cursor.first() {
        Some(c) => c,
        None => {
            if decoded {
                *dir = None;
            }
            return Ok(());
        }
    };
    let d = to_dir(c).ok_or(ParseError::InvalidDir(c))?;
    *dir = Some(d);
    if decoded {
        *target = target.signed(d);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use err::ChecksumError;

    const GGA: &[u8] = b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";
    const RMC: &[u8] = b"$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A";
    const GSA: &[u8] = b"$GPGSA,A,3,19,28,14,18,27,22,31,39,,,,,1.7,1.0,1.3*34";
    const GSV: &[u8] = b"$GPGSV,4,1,14,22,87,059,12,01,82,080,23,03,69,248,34,11,67,155,15*7A";
    const PGTOP: &[u8] = b"$PGTOP,11,3*6F";

    /// Append a valid checksum to `body`, which starts with `$`.
    fn with_checksum(body: &str) -> Vec<u8> {
        let sum = checksum::compute(&body.as_bytes()[1..]);
        format!("{}*{:02X}", body, sum).into_bytes()
    }

    #[test]
    fn parses_gga() {
        let mut parser = NmeaParser::new();
        assert_matches!(parser.parse(GGA), Ok(SentenceType::Gga));
        let state = parser.state();
        assert_eq!((state.hour, state.minute, state.seconds), (12, 35, 19));
        assert_eq!(state.milliseconds, 0);
        assert_eq!(state.fix_quality, GpsQualityInd::GpsFix);
        assert_eq!(state.satellites_used, 8);
        assert_eq!(state.hdop, 0.9);
        assert_eq!(state.altitude, 545.4);
        assert_eq!(state.geoid_height, 46.9);
        assert_eq!(state.latitude.degree, 481_173_000);
        assert_eq!(state.longitude.degree, 115_166_666);
        assert_eq!(state.lat_dir, Some(CardDir::North));
        assert_eq!(state.lon_dir, Some(CardDir::East));
    }

    #[test]
    fn parses_rmc() {
        let mut parser = NmeaParser::new();
        assert_matches!(parser.parse(RMC), Ok(SentenceType::Rmc));
        let state = parser.state();
        assert!(state.fix);
        assert_eq!((state.day, state.month, state.year), (23, 3, 94));
        assert_eq!(state.angle, 84.4);
        assert_matches!(state.speed, Speed::MetersPerSecond(_));
        assert!((state.speed.as_meters_per_second() - 22.4 * KNOTS_TO_MPS).abs() < 1e-5);
        assert_eq!(state.latitude.degree_minute, 480_703_800);
    }

    #[test]
    fn basic_profile_keeps_knots() {
        let mut parser = NmeaParser::with_profile(Profile::Basic);
        parser.parse(RMC).unwrap();
        assert_eq!(parser.state().speed, Speed::Knots(22.4));
    }

    #[test]
    fn basic_profile_ignores_gsa() {
        let mut parser = NmeaParser::with_profile(Profile::Basic);
        assert_matches!(parser.parse(GSA), Err(ParseError::UnexpectedSentenceType));
        assert_eq!(parser.state(), &NavState::default());
    }

    #[test]
    fn rmc_without_fix_clears_flag() {
        let mut parser = NmeaParser::new();
        parser.parse(RMC).unwrap();
        let void = with_checksum("$GPRMC,123520,V,,,,,,,230394,,");
        assert_matches!(parser.parse(&void), Ok(SentenceType::Rmc));
        let state = parser.state();
        assert!(!state.fix);
        assert_eq!(state.seconds, 20);
        // empty position fields keep their value
        assert_eq!(state.latitude.degree, 481_173_000);
        assert_eq!(state.longitude.degree, 115_166_666);
        assert_eq!(state.angle, 84.4);
    }

    #[test]
    fn rmc_rejects_unknown_status() {
        let mut parser = NmeaParser::new();
        let bad = with_checksum("$GPRMC,123519,X,4807.038,N,01131.000,E,022.4,084.4,230394,,");
        assert_matches!(parser.parse(&bad), Err(ParseError::InvalidStatus(b'X')));
        // the time before the status field was still taken
        assert_eq!(parser.state().hour, 12);
        assert!(!parser.state().fix);
        assert_eq!(parser.state().latitude, Angle::default());
    }

    #[test]
    fn southern_and_western_positions_are_negative() {
        let mut parser = NmeaParser::new();
        let line = with_checksum("$GPGGA,000001,3723.2475,S,12158.3416,W,1,04,1.5,10.0,M,-30.0,M,,");
        parser.parse(&line).unwrap();
        let state = parser.state();
        assert_eq!(state.latitude.degree, -373_874_583);
        assert_eq!(state.longitude.degree, -1_219_723_600);
        assert_eq!(state.longitude.degree_minute, -1_215_834_160);
        assert_eq!(state.geoid_height, -30.0);
        assert_eq!(state.lat_dir, Some(CardDir::South));
        assert_eq!(state.lon_dir, Some(CardDir::West));
    }

    #[test]
    fn invalid_hemisphere_aborts() {
        let mut parser = NmeaParser::new();
        let line = with_checksum("$GPGGA,123519,4807.038,Q,01131.000,E,1,08,0.9,545.4,M,46.9,M,,");
        assert_matches!(parser.parse(&line), Err(ParseError::InvalidDir(b'Q')));
        // partial update: the latitude itself was already written
        assert_eq!(parser.state().latitude.degree, 481_173_000);
        assert_eq!(parser.state().satellites_used, 0);
    }

    #[test]
    fn empty_hemisphere_leaves_angle_unsigned() {
        let mut parser = NmeaParser::new();
        let south = with_checksum("$GPGGA,000001,3723.2475,S,12158.3416,W,1,04,1.5,10.0,M,-30.0,M,,");
        parser.parse(&south).unwrap();
        let bare = with_checksum("$GPGGA,000002,3723.2475,,12158.3416,,1,04,1.5,10.0,M,-30.0,M,,");
        parser.parse(&bare).unwrap();
        let state = parser.state();
        assert_eq!(state.latitude.degree, 373_874_583);
        assert_eq!(state.longitude.degree, 1_219_723_600);
        assert_eq!(state.lat_dir, None);
        assert_eq!(state.lon_dir, None);
    }

    #[test]
    fn empty_angle_keeps_hemisphere() {
        let mut parser = NmeaParser::new();
        let south = with_checksum("$GPGGA,000001,3723.2475,S,12158.3416,W,1,04,1.5,10.0,M,-30.0,M,,");
        parser.parse(&south).unwrap();
        let empty = with_checksum("$GPGGA,000002,,,,,1,04,1.5,10.0,M,-30.0,M,,");
        parser.parse(&empty).unwrap();
        let state = parser.state();
        assert_eq!(state.latitude.degree, -373_874_583);
        assert_eq!(state.lat_dir, Some(CardDir::South));
        assert_eq!(state.lon_dir, Some(CardDir::West));
    }

    #[test]
    fn latitude_letter_in_longitude_slot_aborts() {
        let mut parser = NmeaParser::new();
        let line = with_checksum("$GPGGA,123519,4807.038,N,01131.000,N,1,08,0.9,545.4,M,46.9,M,,");
        assert_matches!(parser.parse(&line), Err(ParseError::InvalidDir(b'N')));
        assert_eq!(parser.state().lat_dir, Some(CardDir::North));
        assert_eq!(parser.state().longitude.degree, 115_166_666);
        assert_eq!(parser.state().satellites_used, 0);
    }

    #[test]
    fn unknown_angle_layout_zeroes_coordinate() {
        let mut parser = NmeaParser::new();
        parser.parse(GGA).unwrap();
        let line = with_checksum("$GPGGA,123520,480703.8,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,");
        assert_matches!(parser.parse(&line), Err(ParseError::Angle(AngleError::Layout)));
        assert_eq!(parser.state().latitude, Angle::default());
        assert_eq!(parser.state().longitude.degree, 115_166_666);
    }

    #[test]
    fn short_angle_aborts_without_zeroing() {
        let mut parser = NmeaParser::new();
        parser.parse(GGA).unwrap();
        let line = with_checksum("$GPGGA,123520,48.0,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,");
        assert_matches!(
            parser.parse(&line),
            Err(ParseError::Angle(AngleError::TooShort(4)))
        );
        assert_eq!(parser.state().latitude.degree, 481_173_000);
        assert_eq!(parser.state().seconds, 20);
    }

    #[test]
    fn parses_milliseconds() {
        let mut parser = NmeaParser::new();
        let line = with_checksum("$GPGGA,235959.123,,,,,0,00,,,M,,M,,");
        parser.parse(&line).unwrap();
        let state = parser.state();
        assert_eq!((state.hour, state.minute, state.seconds), (23, 59, 59));
        assert_eq!(state.milliseconds, 123);

        let line = with_checksum("$GPGGA,000000.5,,,,,0,00,,,M,,M,,");
        parser.parse(&line).unwrap();
        assert_eq!(parser.state().milliseconds, 500);
    }

    #[test]
    fn empty_fields_keep_previous_values() {
        let mut parser = NmeaParser::new();
        parser.parse(GGA).unwrap();
        let before = parser.state().clone();
        let empty = with_checksum("$GPGGA,,,,,,,,,,M,,M,,");
        assert_matches!(parser.parse(&empty), Ok(SentenceType::Gga));
        assert_eq!(parser.state(), &before);
    }

    #[test]
    fn same_sentence_twice_is_idempotent() {
        let mut parser = NmeaParser::new();
        parser.parse(GGA).unwrap();
        parser.parse(RMC).unwrap();
        let first = parser.state().clone();
        parser.parse(GGA).unwrap();
        parser.parse(RMC).unwrap();
        assert_eq!(parser.state(), &first);
    }

    #[test]
    fn truncated_sentence_is_incomplete() {
        let mut parser = NmeaParser::new();
        let line = with_checksum("$GPGGA,123519,4807.038,N,01131.000,E,1,08");
        assert_matches!(parser.parse(&line), Err(ParseError::Incomplete("hdop")));
        // fields up to the end were taken
        assert_eq!(parser.state().satellites_used, 8);
    }

    #[test]
    fn parses_gsa() {
        let mut parser = NmeaParser::new();
        assert_matches!(parser.parse(GSA), Ok(SentenceType::Gsa));
        let state = parser.state();
        assert_eq!(state.mode_selection, Some('A'));
        assert_eq!(state.mode, FixMode::Fix3D);
        assert_eq!(state.pdop, 1.7);
        assert_eq!(state.hdop, 1.0);
        assert_eq!(state.vdop, 1.3);
    }

    #[test]
    fn gsa_without_fix() {
        let mut parser = NmeaParser::new();
        let line = with_checksum("$GPGSA,M,1,,,,");
        assert_matches!(parser.parse(&line), Err(ParseError::Incomplete(_)));
        assert_eq!(parser.state().mode_selection, Some('M'));
        assert_eq!(parser.state().mode, FixMode::NoFix);

        let line = with_checksum(&format!("$GPGSA,M,2{},2.5,2.1,1.2", ",".repeat(12)));
        parser.parse(&line).unwrap();
        assert_eq!(parser.state().mode, FixMode::Fix2D);
        assert_eq!(parser.state().vdop, 1.2);
    }

    #[test]
    fn parses_gsv() {
        let mut parser = NmeaParser::new();
        assert_matches!(parser.parse(GSV), Ok(SentenceType::Gsv));
        assert_eq!(parser.state().satellites_in_view, 14);
    }

    #[test]
    fn parses_pgtop() {
        let mut parser = NmeaParser::new();
        assert_matches!(parser.parse(PGTOP), Ok(SentenceType::Pgtop));
        assert_eq!(parser.state().antenna, AntennaStatus::UsingExternal);

        parser.parse(&with_checksum("$PGTOP,11,1")).unwrap();
        assert_eq!(parser.state().antenna, AntennaStatus::ExternalProblem);
        parser.parse(&with_checksum("$PGTOP,11,2")).unwrap();
        assert_eq!(parser.state().antenna, AntennaStatus::UsingInternal);
        parser.parse(&with_checksum("$PGTOP,11,7")).unwrap();
        assert_eq!(parser.state().antenna, AntennaStatus::Unknown);
    }

    #[test]
    fn checksum_mismatch_changes_nothing() {
        let mut parser = NmeaParser::new();
        let mut bad = GGA.to_vec();
        let len = bad.len();
        bad[len - 1] = b'8';
        assert_matches!(
            parser.parse(&bad),
            Err(ParseError::Checksum(ChecksumError::Mismatch(0x48, 0x47)))
        );
        assert_eq!(parser.state(), &NavState::default());
    }

    #[test]
    fn unknown_sentence_changes_nothing() {
        let mut parser = NmeaParser::new();
        parser.parse(GGA).unwrap();
        let before = parser.state().clone();
        let line = with_checksum("$XXYYY,1,2,3,4,5");
        assert_matches!(parser.parse(&line), Err(ParseError::UnexpectedSentenceType));
        assert_eq!(parser.state(), &before);
    }

    #[test]
    fn accepts_line_framing() {
        let mut parser = NmeaParser::new();
        let mut framed = GGA.to_vec();
        framed.extend_from_slice(b"\r\n");
        assert_matches!(parser.parse(&framed), Ok(SentenceType::Gga));
    }

    #[test]
    fn garbage_number_aborts() {
        let mut parser = NmeaParser::new();
        let line = with_checksum("$GPGSV,4,1,1x");
        assert_matches!(parser.parse(&line), Err(ParseError::Int(_)));
    }

    #[test]
    fn dispatch_follows_identifier_order() {
        assert_eq!(
            SentenceType::find(b"$GPRMC,$GPGGA", Profile::Full),
            Some((SentenceType::Gga, 7))
        );
        assert_eq!(SentenceType::find(b"$GPGSA", Profile::Basic), None);
        assert_eq!(
            SentenceType::find(b"$GPGSA", Profile::Full),
            Some((SentenceType::Gsa, 0))
        );
    }
}
