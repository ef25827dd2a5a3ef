//! Producer-side frame encoder.
//!
//! The decoder is the deployed surface; the encoder exists to build
//! byte-exact frames for fixtures, round-trip tests, and the `wf_gen` tool.
//! It emits what the field devices emit: per register, the initial literal,
//! then RLE ops for unchanged stretches and delta ops for every change.

use std::fmt;

use crate::constants::{HEADER_SIZE, MAX_RUN, OP_DELTA, OP_RLE};
use crate::crc::append_crc;
use crate::matrix::SampleMatrix;

/// Error returned when a matrix cannot be framed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// Encoded payload exceeds the 16-bit size field
    PayloadTooLarge { size: usize },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PayloadTooLarge { size } => {
                write!(f, "encoded payload is {size} bytes, size field holds at most 65535")
            }
        }
    }
}

impl std::error::Error for EncodeError {}

/// Encode a sample matrix as a frame, without the trailing CRC
///
/// Unchanged stretches become RLE runs (chunked at 255, the run byte's
/// maximum); every value change becomes a delta op carrying the wrapping
/// 16-bit difference, which is always representable. Decoding the result
/// reproduces the matrix exactly.
///
/// A matrix with zero samples or zero registers encodes to a bare header
/// with an empty payload.
///
/// # Errors
/// [`EncodeError::PayloadTooLarge`] if the streams exceed the 16-bit
/// `payload_size` field.
pub fn encode(matrix: &SampleMatrix, aggregated: bool) -> Result<Vec<u8>, EncodeError> {
    let sample_count = matrix.sample_count();
    let register_count = matrix.register_count();

    let mut payload = Vec::new();
    if sample_count > 0 {
        for register in 0..register_count {
            // register_count bound makes the lookup infallible
            let sequence = matrix.register(register).unwrap_or_default();
            encode_register(&sequence, &mut payload);
        }
    }

    let payload_size = u16::try_from(payload.len())
        .map_err(|_| EncodeError::PayloadTooLarge { size: payload.len() })?;

    let mut frame = Vec::with_capacity(HEADER_SIZE + payload.len());
    frame.push(u8::from(aggregated));
    frame.extend_from_slice(&sample_count.to_be_bytes());
    frame.push(register_count);
    frame.extend_from_slice(&payload_size.to_be_bytes());
    frame.extend_from_slice(&payload);
    Ok(frame)
}

/// Encode a sample matrix and append the CRC16 trailer producers send
///
/// # Errors
/// Same as [`encode`].
pub fn encode_with_crc(matrix: &SampleMatrix, aggregated: bool) -> Result<Vec<u8>, EncodeError> {
    encode(matrix, aggregated).map(append_crc)
}

/// Append one register's stream: initial value, then RLE/delta ops
fn encode_register(sequence: &[u16], payload: &mut Vec<u8>) {
    let Some((&initial, rest)) = sequence.split_first() else {
        return;
    };
    payload.extend_from_slice(&initial.to_be_bytes());

    let mut running = initial;
    let mut zero_run = 0usize;
    for &value in rest {
        if value == running {
            zero_run += 1;
            continue;
        }
        flush_run(&mut zero_run, payload);
        let delta = value.wrapping_sub(running) as i16;
        payload.push(OP_DELTA);
        payload.extend_from_slice(&delta.to_be_bytes());
        running = value;
    }
    flush_run(&mut zero_run, payload);
}

/// Emit pending unchanged values as RLE ops, chunked at the run byte's max
fn flush_run(zero_run: &mut usize, payload: &mut Vec<u8>) {
    while *zero_run > 0 {
        let chunk = (*zero_run).min(MAX_RUN);
        payload.push(OP_RLE);
        payload.push(chunk as u8);
        *zero_run -= chunk;
    }
}
