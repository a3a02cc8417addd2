//! Replays a captured NMEA stream from stdin and prints the decoded state
//! after every sentence.

extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate mtk3339;

use std::io;

use clap::{Parser, ValueEnum};
use mtk3339::{Gps, IoPort, NavState, ParseError, Port, Profile, SentenceType};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum CliProfile {
    /// GGA, RMC, PGTOP and GSV; speed in knots
    Basic,
    /// Adds GSA; speed in meters per second
    Full,
}

impl From<CliProfile> for Profile {
    fn from(other: CliProfile) -> Profile {
        match other {
            CliProfile::Basic => Profile::Basic,
            CliProfile::Full => Profile::Full,
        }
    }
}

/// Replay a captured MTK3339 NMEA stream read from stdin.
#[derive(Parser, Debug)]
#[command(name = "mtk3339", version)]
struct Args {
    /// Decoder profile
    #[arg(value_enum, default_value_t = CliProfile::Full)]
    profile: CliProfile,
}

fn print_state(kind: SentenceType, state: &NavState) {
    let time = state
        .timestamp()
        .map(|t| t.to_string())
        .or_else(|| state.utc().map(|t| t.to_string()))
        .unwrap_or_default();
    println!(
        "{:?} {} lat={:.6} lon={:.6} fix={} quality={:?} sats={}/{} hdop={} alt={} speed={:?} angle={} antenna={:?}",
        kind,
        time,
        state.latitude.degrees(),
        state.longitude.degrees(),
        state.fix,
        state.fix_quality,
        state.satellites_used,
        state.satellites_in_view,
        state.hdop,
        state.altitude,
        state.speed,
        state.angle,
        state.antenna,
    );
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_env("MTK3339_LOG")
        .init();

    let args = Args::parse();
    let profile = Profile::from(args.profile);

    let stdin = io::stdin();
    let mut gps = Gps::with_profile(IoPort::new(stdin.lock(), io::sink()), profile);

    let (mut decoded, mut rejected) = (0u32, 0u32);
    loop {
        if gps.read().is_none() {
            if gps.port().is_closed() {
                break;
            }
            continue;
        }
        if !gps.new_nmea_received() {
            continue;
        }
        match gps.parse_last() {
            Ok(kind) => {
                decoded += 1;
                print_state(kind, gps.state());
            }
            Err(ParseError::UnexpectedSentenceType) => {}
            Err(e) => {
                rejected += 1;
                info!("rejected line: {}", e);
            }
        }
    }

    eprintln!("{} sentences decoded, {} rejected", decoded, rejected);
}
