use std::{io, num, str};

quick_error! {
    #[derive(Debug)]
    pub enum ParseError {
        Checksum(err: ChecksumError) {
            from()
            description("Checksum error")
            display("Rejected sentence: {}", err)
            cause(err)
        }
        Angle(err: AngleError) {
            from()
            description("Angle decoding error")
            display("Could not decode field as angle: {}", err)
            cause(err)
        }
        UnexpectedSentenceType {
            description("Unrecognized sentence type")
            display("Encountered unrecognized sentence type")
        }
        Incomplete(field: &'static str) {
            description("Incomplete sentence")
            display("Sentence ended before the {} field", field)
        }
        InvalidDir(c: u8) {
            description("Invalid hemisphere")
            display("Encountered invalid hemisphere \"{}\"", *c as char)
        }
        InvalidStatus(c: u8) {
            description("Invalid fix status")
            display("Encountered invalid fix status \"{}\"", *c as char)
        }
        Utf8(err: str::Utf8Error) {
            from()
            description("Field is not valid UTF-8")
            display("{}", err)
            cause(err)
        }
        Int(err: num::ParseIntError) {
            from()
            description("Integer parsing error")
            display("{}", err)
            cause(err)
        }
        Float(err: num::ParseFloatError) {
            from()
            description("Float parsing error")
            display("{}", err)
            cause(err)
        }
        Io(err: io::Error) {
            from()
            description("I/O error")
            display("Encountered I/O error on the receiver port: {}", err)
            cause(err)
        }
    }
}

quick_error! {
    #[derive(Debug, PartialEq, Eq)]
    pub enum ChecksumError {
        Missing {
            description("Missing checksum")
            display("No \"*HH\" checksum at the end of the sentence")
        }
        Mismatch(expected: u8, actual: u8) {
            description("Invalid checksum")
            display("Expected checksum \"{:02X}\", computed \"{:02X}\"", expected, actual)
        }
    }
}

quick_error! {
    #[derive(Debug, PartialEq, Eq)]
    pub enum AngleError {
        TooShort(len: usize) {
            description("Angle field too short")
            display("Angle field has {} characters, at least 6 are required", len)
        }
        Layout {
            description("Unexpected angle layout")
            display("Decimal point is neither at offset 4 nor at offset 5")
        }
        InvalidDigit(c: u8) {
            description("Invalid digit")
            display("Encountered invalid digit \"{}\"", *c as char)
        }
        OutOfRange(degrees: i32) {
            description("Angle out of range")
            display("{} degrees do not fit the fixed-point representation", degrees)
        }
    }
}
