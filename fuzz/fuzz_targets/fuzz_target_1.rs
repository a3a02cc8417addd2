#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate mtk3339;

use mtk3339::{LineBuffer, LineEvent, NmeaParser};

fuzz_target!(|data: &[u8]| {
    let mut lines = LineBuffer::new();
    let mut parser = NmeaParser::new();

    for &c in data {
        if let LineEvent::Complete = lines.feed(c) {
            let _ = parser.parse(lines.last_line());
            let _ = parser.dispatch(lines.last_line());
            let _ = parser.parse_logger_status(lines.take_last_line());
        }
    }
});
