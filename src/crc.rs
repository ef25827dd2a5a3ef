//! CRC16-MODBUS boundary validation.
//!
//! Producers append a CRC16 (polynomial 0xA001 reflected form, init 0xFFFF)
//! over the whole frame, stored little-endian after the payload. The core
//! decoder deliberately never reads it; transports call [`validate_crc`]
//! first and hand the stripped frame to [`crate::decode`].

use std::fmt;

use crc::{Crc, CRC_16_MODBUS};

use crate::constants::CRC_SIZE;

const CRC16: Crc<u16> = Crc::<u16>::new(&CRC_16_MODBUS);

/// Error returned when a frame's trailing checksum does not check out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrcError {
    /// Frame is too short to even hold the 2-byte checksum
    TooShort { len: usize },
    /// Stored checksum disagrees with the one computed over the frame body
    Mismatch { stored: u16, computed: u16 },
}

impl fmt::Display for CrcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { len } => {
                write!(f, "frame of {len} bytes cannot hold a 2-byte checksum")
            }
            Self::Mismatch { stored, computed } => {
                write!(f, "CRC mismatch: frame stores {stored:#06x}, computed {computed:#06x}")
            }
        }
    }
}

impl std::error::Error for CrcError {}

/// CRC16-MODBUS over a byte slice
#[inline]
#[must_use]
pub fn checksum(bytes: &[u8]) -> u16 {
    CRC16.checksum(bytes)
}

/// Append the little-endian CRC16 trailer the way producers do
#[must_use]
pub fn append_crc(mut frame: Vec<u8>) -> Vec<u8> {
    let crc = checksum(&frame);
    frame.extend_from_slice(&crc.to_le_bytes());
    frame
}

/// Verify a frame's trailing checksum and strip it
///
/// Returns the frame body (everything before the last 2 bytes) on success,
/// ready to hand to [`crate::decode`].
///
/// # Errors
/// * [`CrcError::TooShort`] - fewer than 2 bytes
/// * [`CrcError::Mismatch`] - stored and computed checksums differ
pub fn validate_crc(frame: &[u8]) -> Result<&[u8], CrcError> {
    if frame.len() < CRC_SIZE {
        return Err(CrcError::TooShort { len: frame.len() });
    }
    let (body, trailer) = frame.split_at(frame.len() - CRC_SIZE);
    let stored = u16::from_le_bytes([trailer[0], trailer[1]]);
    let computed = checksum(body);
    if stored != computed {
        return Err(CrcError::Mismatch { stored, computed });
    }
    Ok(body)
}
