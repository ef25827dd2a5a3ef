//! Frame decoding: per-register stream decode and whole-frame orchestration.

use serde::{Deserialize, Serialize};

use crate::constants::{INITIAL_VALUE_SIZE, OP_DELTA, OP_RLE};
use crate::error::DecodeError;
use crate::header::parse_header;
use crate::matrix::SampleMatrix;

/// A fully decoded frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedFrame {
    /// The reconstructed sample matrix
    pub samples: SampleMatrix,
    /// Aggregation flag from the header, reported as-is
    pub aggregated: bool,
}

impl DecodedFrame {
    /// Samples per register
    #[inline]
    #[must_use]
    pub fn sample_count(&self) -> u16 {
        self.samples.sample_count()
    }

    /// Registers per sample
    #[inline]
    #[must_use]
    pub fn register_count(&self) -> u8 {
        self.samples.register_count()
    }
}

/// Decode a complete frame into its sample matrix
///
/// Parses the header, then decodes each register's stream in order, threading
/// one cursor across the payload (streams are concatenated back to back, not
/// length-prefixed). Bytes after the declared payload are ignored.
///
/// A declared `sample_count` of zero decodes to an empty matrix without
/// consuming any payload.
///
/// # Errors
/// Any header or stream error aborts the whole decode; no partial matrix is
/// ever returned. See [`DecodeError`] for the full taxonomy.
///
/// # Example
/// ```
/// // 1 register, 3 samples: initial 0xFFFF, delta +1 wraps to 0, RLE run of 1
/// let frame = [
///     0x00, 0x00, 0x03, 0x01, 0x00, 0x07,
///     0xFF, 0xFF, 0x01, 0x00, 0x01, 0x00, 0x01,
/// ];
/// let decoded = wattframe::decode(&frame).unwrap();
/// assert_eq!(decoded.samples.register(0).unwrap(), vec![0xFFFF, 0x0000, 0x0000]);
/// ```
pub fn decode(frame: &[u8]) -> Result<DecodedFrame, DecodeError> {
    let (header, payload) = parse_header(frame)?;

    let mut samples = SampleMatrix::zeroed(header.sample_count, header.register_count);
    if header.sample_count > 0 {
        let mut cursor = 0usize;
        for register in 0..header.register_count {
            let sequence = decode_register(payload, &mut cursor, header.sample_count, register)?;
            samples.set_register(register, &sequence);
        }
    }

    Ok(DecodedFrame {
        samples,
        aggregated: header.aggregated,
    })
}

/// Decode one register's stream, resuming at `cursor`
///
/// Reads the 2-byte initial value, then opcode entries until the register has
/// `sample_count` values or the payload runs out. Advances `cursor` by
/// exactly the bytes consumed, so the next register's decode picks up at the
/// first byte of its own stream.
pub(crate) fn decode_register(
    payload: &[u8],
    cursor: &mut usize,
    sample_count: u16,
    register: u8,
) -> Result<Vec<u16>, DecodeError> {
    let expected = sample_count as usize;

    if *cursor + INITIAL_VALUE_SIZE > payload.len() {
        return Err(DecodeError::TruncatedInitialValue { register });
    }
    let mut running = u16::from_be_bytes([payload[*cursor], payload[*cursor + 1]]);
    *cursor += INITIAL_VALUE_SIZE;

    let mut sequence = Vec::with_capacity(expected);
    sequence.push(running);

    while sequence.len() < expected && *cursor < payload.len() {
        let opcode = payload[*cursor];
        *cursor += 1;
        match opcode {
            OP_RLE => {
                if *cursor >= payload.len() {
                    return Err(DecodeError::TruncatedRleRun { register });
                }
                let run = payload[*cursor] as usize;
                *cursor += 1;
                // A run past sample_count is truncated, never an error
                let take = run.min(expected - sequence.len());
                sequence.resize(sequence.len() + take, running);
            }
            OP_DELTA => {
                if *cursor + 2 > payload.len() {
                    return Err(DecodeError::TruncatedDelta { register });
                }
                let delta = i16::from_be_bytes([payload[*cursor], payload[*cursor + 1]]);
                *cursor += 2;
                running = running.wrapping_add_signed(delta);
                sequence.push(running);
            }
            opcode => return Err(DecodeError::UnknownOpcode { register, opcode }),
        }
    }

    if sequence.len() < expected {
        return Err(DecodeError::InsufficientSamples {
            register,
            decoded: sequence.len(),
            expected,
        });
    }

    Ok(sequence)
}
