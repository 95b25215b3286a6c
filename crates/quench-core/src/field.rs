//! The 2D scalar field grid.

use serde::{Deserialize, Serialize};

use crate::types::FieldStats;

/// A square grid of scalar values with periodic (wrap-around) boundaries.
///
/// Row-major storage. All simulation systems mutate this in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarField {
    size: usize,
    cells: Vec<f64>,
}

impl ScalarField {
    /// Create a zero-filled field of `size` x `size` cells.
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            cells: vec![0.0; size * size],
        }
    }

    /// Side length in cells.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Value at (row, col). Both indices must be in range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.cells[row * self.size + col]
    }

    /// Set the value at (row, col). Both indices must be in range.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.cells[row * self.size + col] = value;
    }

    /// Value at (row, col) with periodic wrap-around on both axes.
    /// Accepts offsets of up to one full grid width beyond the bounds.
    #[inline]
    pub fn get_wrapped(&self, row: isize, col: isize) -> f64 {
        let n = self.size as isize;
        let r = row.rem_euclid(n) as usize;
        let c = col.rem_euclid(n) as usize;
        self.cells[r * self.size + c]
    }

    /// Read-only view of the raw cells (row-major).
    pub fn as_slice(&self) -> &[f64] {
        &self.cells
    }

    /// Mutable view of the raw cells (row-major).
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.cells
    }

    /// Discrete 5-point Laplacian at (row, col) under periodic boundaries.
    #[inline]
    pub fn laplacian_at(&self, row: usize, col: usize) -> f64 {
        let r = row as isize;
        let c = col as isize;
        self.get_wrapped(r - 1, c)
            + self.get_wrapped(r + 1, c)
            + self.get_wrapped(r, c - 1)
            + self.get_wrapped(r, c + 1)
            - 4.0 * self.get(row, col)
    }

    /// Summary statistics over all cells.
    pub fn stats(&self) -> FieldStats {
        let n = self.cells.len().max(1) as f64;
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in &self.cells {
            sum += v;
            sum_sq += v * v;
            min = min.min(v);
            max = max.max(v);
        }
        if self.cells.is_empty() {
            return FieldStats::default();
        }
        FieldStats {
            mean: sum / n,
            min,
            max,
            rms: (sum_sq / n).sqrt(),
        }
    }

    /// True if every cell is finite.
    pub fn is_finite(&self) -> bool {
        self.cells.iter().all(|v| v.is_finite())
    }
}
