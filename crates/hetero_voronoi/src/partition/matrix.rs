//! Dense locations × agents distance storage.
use std::ops::Index;

/// Row-major matrix of distances, one row per location and one column per agent.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Creates a matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Builds a matrix by evaluating `f(row, col)` for every entry.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { rows, cols, data }
    }

    /// Number of locations.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of agents.
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.data[row * self.cols + col])
    }

    /// Distances from one location to every agent.
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Distances from every location to one agent.
    pub fn column(&self, col: usize) -> impl ExactSizeIterator<Item = f64> + '_ {
        assert!(col < self.cols, "column {col} out of range ({})", self.cols);
        self.data.iter().skip(col).step_by(self.cols).copied()
    }

    pub fn row_iter(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// Largest entry, or `None` when the matrix is empty.
    pub fn max(&self) -> Option<f64> {
        self.data.iter().copied().reduce(f64::max)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Divides every entry by `divisor`; a zero divisor maps every entry to zero.
    pub(crate) fn normalize_by(&mut self, divisor: f64) {
        if divisor == 0.0 {
            self.data.fill(0.0);
        } else {
            self.data.iter_mut().for_each(|v| *v /= divisor);
        }
    }
}

impl Index<(usize, usize)> for DistanceMatrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of range ({}, {})",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}
