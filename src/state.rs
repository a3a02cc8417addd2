//! The navigation state that is updated by every decoded sentence.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use angle::Angle;

/// Factor between knots and meters per second.
pub const KNOTS_TO_MPS: f32 = 0.514444;

/// The cardinal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardDir {
    North,
    South,
    East,
    West,
}

impl CardDir {
    #[inline]
    pub fn get_sign(&self) -> i32 {
        match self {
            CardDir::North | CardDir::East => 1,
            CardDir::South | CardDir::West => -1,
        }
    }

    /// `N` or `S`.
    pub fn latitude(c: u8) -> Option<CardDir> {
        match c {
            b'N' => Some(CardDir::North),
            b'S' => Some(CardDir::South),
            _ => None,
        }
    }

    /// `E` or `W`.
    pub fn longitude(c: u8) -> Option<CardDir> {
        match c {
            b'E' => Some(CardDir::East),
            b'W' => Some(CardDir::West),
            _ => None,
        }
    }
}

/// Indicator of the quality of gps data, as reported by GGA.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpsQualityInd {
    FixNotAvailable,
    GpsFix,
    DifferentialGpsFix,
    PpsFix,
    RealTimeKinematic,
    FloatRtk,
    Estimated,
    ManualInputMode,
    SimulationMode,
    Unknown(u8),
}

impl GpsQualityInd {
    /// Takes the GGA quality code. Codes outside of `0..=8` are kept as
    /// `GpsQualityInd::Unknown`.
    #[inline]
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => GpsQualityInd::FixNotAvailable,
            1 => GpsQualityInd::GpsFix,
            2 => GpsQualityInd::DifferentialGpsFix,
            3 => GpsQualityInd::PpsFix,
            4 => GpsQualityInd::RealTimeKinematic,
            5 => GpsQualityInd::FloatRtk,
            6 => GpsQualityInd::Estimated,
            7 => GpsQualityInd::ManualInputMode,
            8 => GpsQualityInd::SimulationMode,
            c => GpsQualityInd::Unknown(c),
        }
    }
}

impl Default for GpsQualityInd {
    fn default() -> Self {
        GpsQualityInd::FixNotAvailable
    }
}

/// Fix dimension, as reported by GSA.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixMode {
    NoFix,
    Fix2D,
    Fix3D,
}

impl FixMode {
    pub fn from_code(code: u8) -> Self {
        match code {
            2 => FixMode::Fix2D,
            3 => FixMode::Fix3D,
            _ => FixMode::NoFix,
        }
    }
}

impl Default for FixMode {
    fn default() -> Self {
        FixMode::NoFix
    }
}

/// Antenna in use, as reported by PGTOP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AntennaStatus {
    Unknown,
    ExternalProblem,
    UsingInternal,
    UsingExternal,
}

impl AntennaStatus {
    pub fn from_code(code: u32) -> Self {
        match code {
            1 => AntennaStatus::ExternalProblem,
            2 => AntennaStatus::UsingInternal,
            3 => AntennaStatus::UsingExternal,
            _ => AntennaStatus::Unknown,
        }
    }
}

impl Default for AntennaStatus {
    fn default() -> Self {
        AntennaStatus::Unknown
    }
}

/// Speed over ground, tagged with the unit it was stored in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Speed {
    Knots(f32),
    MetersPerSecond(f32),
}

impl Speed {
    pub fn as_knots(&self) -> f32 {
        match *self {
            Speed::Knots(v) => v,
            Speed::MetersPerSecond(v) => v / KNOTS_TO_MPS,
        }
    }

    pub fn as_meters_per_second(&self) -> f32 {
        match *self {
            Speed::Knots(v) => v * KNOTS_TO_MPS,
            Speed::MetersPerSecond(v) => v,
        }
    }
}

impl Default for Speed {
    fn default() -> Self {
        Speed::Knots(0.0)
    }
}

/// State of the onboard LOCUS logger, as reported by `$PMTKLOG`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoggerStatus {
    pub serial: u16,
    pub log_type: u16,
    pub mode: u16,
    pub config: u16,
    /// Logging interval in seconds.
    pub interval: u16,
    /// Logging distance in meters.
    pub distance: u16,
    /// Logging speed threshold.
    pub speed: u16,
    /// The receiver reports `0` while logging.
    pub active: bool,
    pub records: u16,
    /// Flash usage in percent.
    pub percent: u16,
}

/// Everything the decoders know about the receiver.
///
/// Fields keep their previous value when a sentence leaves them empty.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NavState {
    pub hour: u8,
    pub minute: u8,
    pub seconds: u8,
    pub milliseconds: u16,
    pub day: u8,
    pub month: u8,
    /// Two-digit year.
    pub year: u8,
    /// A positive value indicates that the coordinate is in the northern hemisphere.
    pub latitude: Angle,
    /// A positive value indicates that the coordinate is in the eastern hemisphere.
    pub longitude: Angle,
    pub lat_dir: Option<CardDir>,
    pub lon_dir: Option<CardDir>,
    /// Set by RMC status `A`, cleared by `V`.
    pub fix: bool,
    pub fix_quality: GpsQualityInd,
    pub mode: FixMode,
    /// GSA `M`anual or `A`utomatic 2D/3D selection.
    pub mode_selection: Option<char>,
    pub satellites_used: u8,
    pub satellites_in_view: u8,
    pub pdop: f32,
    pub hdop: f32,
    pub vdop: f32,
    /// Antenna altitude above mean-sea-level (meters).
    pub altitude: f32,
    /// Height of the geoid above the WGS84 ellipsoid (meters).
    pub geoid_height: f32,
    pub speed: Speed,
    /// Course over ground in degrees.
    pub angle: f32,
    pub antenna: AntennaStatus,
    pub logger: LoggerStatus,
}

impl NavState {
    /// Time of day as reported by the last GGA or RMC sentence.
    pub fn utc(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_milli_opt(
            u32::from(self.hour),
            u32::from(self.minute),
            u32::from(self.seconds),
            u32::from(self.milliseconds),
        )
    }

    /// Date as reported by the last RMC sentence, the century is assumed to
    /// be 2000.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            2000 + i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
    }

    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        Some(self.date()?.and_time(self.utc()?))
    }
}
