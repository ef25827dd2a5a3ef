//! Internal constants for the frame wire format.

/// Header size in bytes (flag: 1 + sample_count: 2 + register_count: 1 + payload_size: 2)
pub(crate) const HEADER_SIZE: usize = 6;

/// Initial value size per register stream (u16 big-endian)
pub(crate) const INITIAL_VALUE_SIZE: usize = 2;

/// Opcode: repeat the running value `run_length` times
pub(crate) const OP_RLE: u8 = 0x00;

/// Opcode: add a signed 16-bit delta to the running value
pub(crate) const OP_DELTA: u8 = 0x01;

/// Longest run a single RLE op can express (run length is one byte)
pub(crate) const MAX_RUN: usize = u8::MAX as usize;

/// Trailing CRC16 size appended by producers (little-endian)
pub(crate) const CRC_SIZE: usize = 2;
