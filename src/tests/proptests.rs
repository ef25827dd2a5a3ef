use proptest::prelude::*;

use crate::{append_crc, decode, encode, encode_with_crc, validate_crc, CrcError, SampleMatrix};

prop_compose! {
    /// Generate a well-formed matrix within the header's dimension fields
    fn arb_matrix()(
        sample_count in 0usize..60,
        register_count in 0usize..12,
    )(
        values in prop::collection::vec(any::<u16>(), sample_count * register_count),
        sample_count in Just(sample_count),
        register_count in Just(register_count),
    ) -> SampleMatrix {
        let rows: Vec<Vec<u16>> = if register_count == 0 {
            vec![Vec::new(); sample_count]
        } else {
            values.chunks(register_count).map(<[u16]>::to_vec).collect()
        };
        SampleMatrix::from_rows(&rows).unwrap()
    }
}

proptest! {
    /// Property: encode then decode reproduces the matrix and the flag
    #[test]
    fn prop_roundtrip(matrix in arb_matrix(), aggregated: bool) {
        let frame = encode(&matrix, aggregated).unwrap();
        let decoded = decode(&frame).unwrap();
        prop_assert_eq!(decoded.aggregated, aggregated);
        prop_assert_eq!(decoded.samples, matrix);
    }

    /// Property: the CRC boundary strips cleanly and decode still round-trips
    #[test]
    fn prop_roundtrip_with_crc(matrix in arb_matrix()) {
        let frame = encode_with_crc(&matrix, false).unwrap();
        let body = validate_crc(&frame).unwrap();
        prop_assert_eq!(decode(body).unwrap().samples, matrix);
    }

    /// Property: arbitrary bytes never panic the decoder, only error
    #[test]
    fn prop_decode_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let _ = decode(&bytes);
        let _ = validate_crc(&bytes);
    }

    /// Property: cutting bytes off a non-trivial frame always fails decode
    /// (the header's declared payload no longer fits)
    #[test]
    fn prop_truncated_frame_errors(matrix in arb_matrix(), cut in 1usize..16) {
        let frame = encode(&matrix, false).unwrap();
        prop_assume!(cut <= frame.len());
        prop_assert!(decode(&frame[..frame.len() - cut]).is_err());
    }

    /// Property: a single flipped bit anywhere in the frame is caught by the
    /// CRC boundary (CRC16 detects all single-bit errors)
    #[test]
    fn prop_crc_detects_bitflip(matrix in arb_matrix(), pos: usize, bit in 0u8..8) {
        let mut frame = append_crc(encode(&matrix, false).unwrap());
        let pos = pos % frame.len();
        frame[pos] ^= 1 << bit;
        prop_assert!(
            matches!(validate_crc(&frame), Err(CrcError::Mismatch { .. })),
            "expected CrcError::Mismatch"
        );
    }

    /// Property: decoded cells equal the encoder's input cell for cell,
    /// addressed through every accessor consistently
    #[test]
    fn prop_accessors_agree(matrix in arb_matrix()) {
        let decoded = decode(&encode(&matrix, false).unwrap()).unwrap().samples;
        for sample in 0..decoded.sample_count() {
            let row = decoded.row(sample).unwrap();
            for register in 0..decoded.register_count() {
                let cell = decoded.get(sample, register).unwrap();
                prop_assert_eq!(cell, row[register as usize]);
                prop_assert_eq!(cell, decoded.register(register).unwrap()[sample as usize]);
            }
        }
    }
}
