#![no_main]

use libfuzzer_sys::fuzz_target;
use wattframe::{decode, parse_header, validate_crc};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must never panic any entry point - malformed frames
    // come back as typed errors
    let _ = parse_header(data);
    let _ = decode(data);

    // The boundary validator tolerates the same garbage; when it accepts,
    // the stripped body must still decode without panicking
    if let Ok(body) = validate_crc(data) {
        let _ = decode(body);
    }
});
