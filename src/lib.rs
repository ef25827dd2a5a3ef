//! `WattFrame` - decoder for compressed inverter telemetry frames
//!
//! Field devices (inverters, monitoring units) periodically sample a fixed
//! set of registers and upload the whole window as one compact binary blob:
//! a fixed header followed by one RLE+delta encoded byte stream per register.
//! This crate reconstructs the full sample matrix from such a frame, plus the
//! producer-side encoder and the CRC16 boundary check used around it.
//!
//! # Features
//! - **Byte-exact decode**: strict bounds checking on every read, typed
//!   errors for every way a frame can be malformed
//! - **Wraparound semantics**: delta steps use unsigned 16-bit wraparound
//!   arithmetic, matching the producer exactly
//! - **Flat sample matrix**: one pre-sized buffer, no per-row allocation
//! - **Round-trip encoder**: builds byte-exact frames for fixtures and tests
//!
//! # Example
//! ```
//! use wattframe::{decode, encode_with_crc, validate_crc, SampleMatrix};
//!
//! // Two registers, three samples each
//! let matrix = SampleMatrix::from_rows(&[
//!     vec![2300, 150],
//!     vec![2300, 151],
//!     vec![2305, 151],
//! ]).unwrap();
//!
//! let frame = encode_with_crc(&matrix, false).unwrap();
//!
//! // Boundary check strips the trailing CRC, then the core decodes
//! let body = validate_crc(&frame).unwrap();
//! let decoded = decode(body).unwrap();
//! assert_eq!(decoded.samples, matrix);
//! assert!(!decoded.aggregated);
//! ```
//!
//! # Wire Format
//!
//! ## Header (6 bytes)
//!
//! | Offset | Size | Field | Description |
//! |--------|------|-------|-------------|
//! | 0 | 1 | `aggregated` | Nonzero means the producer applied its aggregation mode. Reported, never interpreted. |
//! | 1 | 2 | `sample_count` | Samples per register, big-endian. |
//! | 3 | 1 | `register_count` | Registers per sample. |
//! | 4 | 2 | `payload_size` | Payload bytes, big-endian. `6 + payload_size` must fit in the frame. |
//!
//! ## Payload
//!
//! Per-register streams concatenated back to back, no per-register length
//! prefix. Each stream is `initial_value(2B BE)` followed by opcode entries:
//!
//! | Opcode | Operand | Meaning |
//! |--------|---------|---------|
//! | `0x00` | run length (1B) | Repeat the running value `run` times. Runs past `sample_count` are silently truncated. |
//! | `0x01` | delta (2B BE signed) | Add the delta to the running value mod 2^16, emit it. |
//!
//! Any other opcode byte is fatal. A stream ends when its register has
//! `sample_count` values; the next register's stream begins at the very next
//! byte. Decode is therefore inherently sequential across registers within a
//! frame, while frames themselves decode independently.
//!
//! ## Trailer
//!
//! Producers append a CRC16-MODBUS checksum (polynomial 0xA001, stored
//! little-endian) over everything before it. The core decoder never looks at
//! it; [`validate_crc`] is the boundary collaborator that verifies and strips
//! it before the bytes reach [`decode`]. Any bytes after the declared payload
//! are ignored by the decoder either way.

mod constants;
mod crc;
mod decoder;
mod encoder;
mod error;
mod header;
mod matrix;

#[cfg(test)]
mod tests;

// Re-export public API
pub use crc::{append_crc, checksum, validate_crc, CrcError};
pub use decoder::{decode, DecodedFrame};
pub use encoder::{encode, encode_with_crc, EncodeError};
pub use error::DecodeError;
pub use header::{parse_header, FrameHeader};
pub use matrix::SampleMatrix;
