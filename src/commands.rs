//! Prebuilt PMTK and PGCMD command sentences, checksums included.

/// Output RMC only.
pub const OUTPUT_RMC_ONLY: &str = "$PMTK314,0,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0*29";
/// Output RMC and GGA.
pub const OUTPUT_RMC_GGA: &str = "$PMTK314,0,1,0,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0*28";
/// Output every sentence the receiver knows.
pub const OUTPUT_ALL_DATA: &str = "$PMTK314,1,1,1,1,1,1,0,0,0,0,0,0,0,0,0,0,0,0,0*28";
/// Turn sentence output off.
pub const OUTPUT_OFF: &str = "$PMTK314,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0*28";

pub const UPDATE_RATE_1HZ: &str = "$PMTK220,1000*1F";
pub const UPDATE_RATE_5HZ: &str = "$PMTK220,200*2C";
pub const UPDATE_RATE_10HZ: &str = "$PMTK220,100*2F";

/// Ask for `$PGTOP` antenna status reports.
pub const ANTENNA_STATUS_ON: &str = "$PGCMD,33,1*6C";
pub const ANTENNA_STATUS_OFF: &str = "$PGCMD,33,0*6D";

pub const LOCUS_START: &str = "$PMTK185,0*22";
pub const LOCUS_STOP: &str = "$PMTK185,1*23";
/// Acknowledgement of a successful start or stop.
pub const LOCUS_START_STOP_ACK: &str = "$PMTK001,185,3";
/// Query the logger, answered by `$PMTKLOG`.
pub const LOCUS_QUERY_STATUS: &str = "$PMTK183*38";
pub const LOCUS_ERASE_FLASH: &str = "$PMTK184,1*22";

/// Enter standby.
pub const STANDBY: &str = "$PMTK161,0*28";
/// Acknowledgement of `STANDBY`.
pub const STANDBY_ACK: &str = "$PMTK001,161,3";
/// Sent by the receiver once it is awake again.
pub const AWAKE: &str = "$PMTK010,002";

/// Query the firmware release.
pub const QUERY_RELEASE: &str = "$PMTK605*31";
