//! Flat sample matrix for decoded frames.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Decoded sample matrix: `sample_count` rows by `register_count` columns
///
/// Row `i`, column `r` is the i-th temporal sample of register `r`. Backed by
/// one flat row-major buffer (`row * register_count + column`), so a frame
/// decodes with a single allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleMatrix {
    values: Vec<u16>,
    sample_count: u16,
    register_count: u8,
}

impl SampleMatrix {
    /// Create a zero-filled matrix with the given dimensions
    #[must_use]
    pub(crate) fn zeroed(sample_count: u16, register_count: u8) -> Self {
        Self {
            values: vec![0; sample_count as usize * register_count as usize],
            sample_count,
            register_count,
        }
    }

    /// Build a matrix from sample rows
    ///
    /// Returns `None` if rows have unequal lengths, or if the dimensions do
    /// not fit the header fields (more than 65535 rows or 255 columns).
    /// An empty slice yields the 0x0 matrix.
    #[must_use]
    pub fn from_rows(rows: &[Vec<u16>]) -> Option<Self> {
        let sample_count = u16::try_from(rows.len()).ok()?;
        let register_count = match rows.first() {
            Some(first) => u8::try_from(first.len()).ok()?,
            None => 0,
        };
        let mut values = Vec::with_capacity(rows.len() * register_count as usize);
        for row in rows {
            if row.len() != register_count as usize {
                return None;
            }
            values.extend_from_slice(row);
        }
        Some(Self {
            values,
            sample_count,
            register_count,
        })
    }

    /// Number of temporal samples (rows)
    #[inline]
    #[must_use]
    pub fn sample_count(&self) -> u16 {
        self.sample_count
    }

    /// Number of registers (columns)
    #[inline]
    #[must_use]
    pub fn register_count(&self) -> u8 {
        self.register_count
    }

    /// Value at row `sample`, column `register`
    #[inline]
    #[must_use]
    pub fn get(&self, sample: u16, register: u8) -> Option<u16> {
        if sample >= self.sample_count || register >= self.register_count {
            return None;
        }
        Some(self.values[sample as usize * self.register_count as usize + register as usize])
    }

    /// One sample row: the value of every register at time index `sample`
    #[inline]
    #[must_use]
    pub fn row(&self, sample: u16) -> Option<&[u16]> {
        if sample >= self.sample_count {
            return None;
        }
        let cols = self.register_count as usize;
        let start = sample as usize * cols;
        Some(&self.values[start..start + cols])
    }

    /// Iterate over sample rows in temporal order
    pub fn rows(&self) -> impl Iterator<Item = &[u16]> {
        // chunks_exact(0) panics, so the 0-column matrix iterates nothing
        let cols = self.register_count.max(1) as usize;
        self.values.chunks_exact(cols)
    }

    /// One register's full value sequence, in temporal order
    #[must_use]
    pub fn register(&self, register: u8) -> Option<Vec<u16>> {
        if register >= self.register_count {
            return None;
        }
        Some(
            self.values
                .iter()
                .skip(register as usize)
                .step_by(self.register_count as usize)
                .copied()
                .collect(),
        )
    }

    /// The flat row-major backing buffer
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u16] {
        &self.values
    }

    /// Write one register's decoded sequence into its column
    ///
    /// Caller guarantees `register < register_count` and
    /// `sequence.len() == sample_count`.
    pub(crate) fn set_register(&mut self, register: u8, sequence: &[u16]) {
        debug_assert!(register < self.register_count);
        debug_assert_eq!(sequence.len(), self.sample_count as usize);
        let cols = self.register_count as usize;
        for (row, &value) in sequence.iter().enumerate() {
            self.values[row * cols + register as usize] = value;
        }
    }
}

impl fmt::Display for SampleMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (i, value) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
