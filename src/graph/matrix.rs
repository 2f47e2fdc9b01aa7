//! Dense square matrix
//!
//! Row-major `n × n` storage with the handful of operations TextRank needs:
//! symmetrization, column normalization and a matrix-vector product.

use rayon::prelude::*;

/// Row count at which [`DenseMatrix::mul_vec`] switches to rayon.
/// Below it the thread hand-off costs more than the product.
pub const PARALLEL_ROWS: usize = 512;

/// Row-major `n × n` matrix of `f64`.
///
/// Storage is `8 · n²` bytes with no upper bound on `n`: a 10k-word
/// vocabulary needs about 800 MB per matrix, and a graph keeps two of them
/// (adjacency and transition).
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DenseMatrix {
    /// An `n × n` zero matrix
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; n * n],
        }
    }

    /// Side length
    pub fn dim(&self) -> usize {
        self.n
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.n + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.n + col] = value;
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.n..(row + 1) * self.n]
    }

    /// `A + Aᵀ − diag(A + Aᵀ)`: exactly symmetric with a zero diagonal.
    pub fn symmetrized(&self) -> Self {
        let n = self.n;
        let mut out = Self::zeros(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let v = self.get(i, j) + self.get(j, i);
                out.set(i, j, v);
                out.set(j, i, v);
            }
        }
        out
    }

    pub fn column_sums(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.n];
        for row in self.data.chunks_exact(self.n.max(1)) {
            for (sum, &v) in sums.iter_mut().zip(row) {
                *sum += v;
            }
        }
        sums
    }

    /// Divide every column by its sum. Columns summing to zero are left as
    /// they are (all zeros for a non-negative matrix).
    pub fn normalize_columns(&mut self) {
        let sums = self.column_sums();
        let n = self.n;
        for row in self.data.chunks_exact_mut(n.max(1)) {
            for (v, &sum) in row.iter_mut().zip(&sums) {
                if sum != 0.0 {
                    *v /= sum;
                }
            }
        }
    }

    /// `A · v`. Each output entry is summed left to right over its row on both
    /// the sequential and the parallel path, so results don't depend on
    /// which one runs.
    pub fn mul_vec(&self, v: &[f64]) -> Vec<f64> {
        debug_assert_eq!(v.len(), self.n);
        if self.n == 0 {
            return Vec::new();
        }

        let dot = |row: &[f64]| row.iter().zip(v).map(|(a, b)| a * b).sum::<f64>();

        if self.n >= PARALLEL_ROWS {
            self.data.par_chunks_exact(self.n).map(dot).collect()
        } else {
            self.data.chunks_exact(self.n).map(dot).collect()
        }
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| ((i + 1)..self.n).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Number of non-zero entries
    pub fn nnz(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0.0).count()
    }
}
