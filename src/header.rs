//! Frame header parsing.

use serde::{Deserialize, Serialize};

use crate::constants::HEADER_SIZE;
use crate::error::DecodeError;

/// Parsed frame header
///
/// Invariant once constructed: the frame it was parsed from holds at least
/// `6 + payload_size` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameHeader {
    /// Producer applied its aggregation mode (reported, never interpreted)
    pub aggregated: bool,
    /// Samples per register
    pub sample_count: u16,
    /// Registers per sample
    pub register_count: u8,
    /// Payload bytes following the header
    pub payload_size: u16,
}

/// Parse the fixed 6-byte header and slice out the payload
///
/// Bytes after the declared payload (e.g. a trailing checksum) are left
/// untouched; this function never looks past `6 + payload_size`.
///
/// # Errors
/// * [`DecodeError::FrameTooSmall`] - fewer than 6 bytes
/// * [`DecodeError::PayloadSizeMismatch`] - declared payload exceeds the frame
pub fn parse_header(frame: &[u8]) -> Result<(FrameHeader, &[u8]), DecodeError> {
    if frame.len() < HEADER_SIZE {
        return Err(DecodeError::FrameTooSmall { len: frame.len() });
    }

    let header = FrameHeader {
        aggregated: frame[0] != 0,
        sample_count: u16::from_be_bytes([frame[1], frame[2]]),
        register_count: frame[3],
        payload_size: u16::from_be_bytes([frame[4], frame[5]]),
    };

    let payload_end = HEADER_SIZE + header.payload_size as usize;
    if payload_end > frame.len() {
        return Err(DecodeError::PayloadSizeMismatch {
            declared: header.payload_size as usize,
            available: frame.len() - HEADER_SIZE,
        });
    }

    Ok((header, &frame[HEADER_SIZE..payload_end]))
}
