//! Error types for frame decoding.
//!
//! Every error aborts the whole decode; nothing is retried and no partial
//! matrix is ever returned. The one defined truncation rule (an RLE run
//! capped at the remaining sample slots) is format behavior, not an error.

use std::fmt;

/// Error returned when decoding a frame fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Frame is shorter than the 6-byte header
    FrameTooSmall { len: usize },
    /// Header declares more payload bytes than the frame contains
    PayloadSizeMismatch { declared: usize, available: usize },
    /// Register stream ended before its 2-byte initial value
    TruncatedInitialValue { register: u8 },
    /// RLE opcode with no run-length byte after it
    TruncatedRleRun { register: u8 },
    /// Delta opcode with fewer than 2 operand bytes after it
    TruncatedDelta { register: u8 },
    /// Opcode byte that is neither RLE (0x00) nor delta (0x01)
    UnknownOpcode { register: u8, opcode: u8 },
    /// Payload ran out before the register reached `sample_count` values
    InsufficientSamples {
        register: u8,
        decoded: usize,
        expected: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrameTooSmall { len } => {
                write!(f, "frame too small: {len} bytes, header needs 6")
            }
            Self::PayloadSizeMismatch {
                declared,
                available,
            } => {
                write!(
                    f,
                    "payload size mismatch: header declares {declared} bytes, frame has {available}"
                )
            }
            Self::TruncatedInitialValue { register } => {
                write!(f, "register {register}: truncated initial value")
            }
            Self::TruncatedRleRun { register } => {
                write!(f, "register {register}: RLE opcode missing its run-length byte")
            }
            Self::TruncatedDelta { register } => {
                write!(f, "register {register}: delta opcode missing its 2-byte operand")
            }
            Self::UnknownOpcode { register, opcode } => {
                write!(f, "register {register}: unknown opcode {opcode:#04x}")
            }
            Self::InsufficientSamples {
                register,
                decoded,
                expected,
            } => {
                write!(
                    f,
                    "register {register}: stream ended after {decoded} of {expected} samples"
                )
            }
        }
    }
}

impl std::error::Error for DecodeError {}
