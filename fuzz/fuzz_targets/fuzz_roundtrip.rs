#![no_main]

use libfuzzer_sys::fuzz_target;
use wattframe::{decode, encode, validate_crc, encode_with_crc, SampleMatrix};

fuzz_target!(|data: &[u8]| {
    // First two bytes pick the dimensions, the rest feed the cells
    if data.len() < 2 {
        return;
    }
    let sample_count = usize::from(data[0]);
    let register_count = usize::from(data[1] % 16);

    let mut cells = data[2..]
        .chunks_exact(2)
        .map(|c| u16::from_be_bytes([c[0], c[1]]))
        .cycle();

    let rows: Vec<Vec<u16>> = (0..sample_count)
        .map(|_| (0..register_count).map(|_| cells.next().unwrap_or(0)).collect())
        .collect();
    let Some(matrix) = SampleMatrix::from_rows(&rows) else {
        return;
    };

    // Dimensions are bounded (<=255 x <16), so encoding cannot overflow the
    // payload size field
    let frame = encode(&matrix, false).expect("bounded matrix must encode");
    let decoded = decode(&frame).expect("encoded frame must decode");
    assert_eq!(decoded.samples, matrix, "roundtrip mismatch");
    assert!(!decoded.aggregated);

    // Same through the CRC boundary
    let sealed = encode_with_crc(&matrix, false).expect("bounded matrix must encode");
    let body = validate_crc(&sealed).expect("freshly sealed frame must validate");
    assert_eq!(body, &frame[..], "CRC trailer must strip to the bare frame");
});
