//! # Complex Matrices
//!
//! Dense square complex matrices used as gate operators. Elements are stored
//! row-major; `m[(row, col)]` indexes them.
//!
//! The Kronecker product follows the usual block layout:
//!
//! ```text
//! (A ⊗ B)[i][j] = A[i / n][j / n] · B[i % n][j % n]      (B is n×n)
//! ```

use num_complex::Complex64;
use serde::Serialize;
use std::ops::{Index, IndexMut};

/// Square complex matrix acting on a `dim`-dimensional space
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GateMatrix {
    dim: usize,
    elements: Vec<Complex64>,
}

impl GateMatrix {
    /// All-zero matrix
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            elements: vec![Complex64::new(0.0, 0.0); dim * dim],
        }
    }

    /// Identity matrix
    pub fn identity(dim: usize) -> Self {
        let mut m = Self::zeros(dim);
        for i in 0..dim {
            m[(i, i)] = Complex64::new(1.0, 0.0);
        }
        m
    }

    /// Builds a 2x2 matrix from `[[a, b], [c, d]]`
    pub fn from_2x2(rows: [[Complex64; 2]; 2]) -> Self {
        let [[a, b], [c, d]] = rows;
        Self {
            dim: 2,
            elements: vec![a, b, c, d],
        }
    }

    /// Builds a matrix from explicit rows, `None` when they are not square
    pub fn from_rows(rows: Vec<Vec<Complex64>>) -> Option<Self> {
        let dim = rows.len();
        if rows.iter().any(|row| row.len() != dim) {
            return None;
        }
        Some(Self {
            dim,
            elements: rows.into_iter().flatten().collect(),
        })
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Rows as nested vectors
    pub fn rows(&self) -> Vec<Vec<Complex64>> {
        if self.dim == 0 {
            return Vec::new();
        }
        self.elements.chunks(self.dim).map(<[_]>::to_vec).collect()
    }

    /// Kronecker (tensor) product `self ⊗ other`
    pub fn kron(&self, other: &GateMatrix) -> GateMatrix {
        let n = other.dim;
        let dim = self.dim * n;
        let mut result = GateMatrix::zeros(dim);
        for i in 0..dim {
            for j in 0..dim {
                result[(i, j)] = self[(i / n, j / n)] * other[(i % n, j % n)];
            }
        }
        result
    }

    /// Left fold of the Kronecker product over an ordered factor list.
    ///
    /// `[A, B, C]` reduces to `(A ⊗ B) ⊗ C`; the first factor ends up as the
    /// most significant tensor slot. Returns `None` for an empty list.
    pub fn reduce<'a, I>(factors: I) -> Option<GateMatrix>
    where
        I: IntoIterator<Item = &'a GateMatrix>,
    {
        let mut iter = factors.into_iter();
        let first = iter.next()?.clone();
        Some(iter.fold(first, |acc, factor| acc.kron(factor)))
    }

    /// Matrix product `self · other`
    pub fn mul(&self, other: &GateMatrix) -> GateMatrix {
        debug_assert_eq!(self.dim, other.dim);
        let dim = self.dim;
        let mut result = GateMatrix::zeros(dim);
        for i in 0..dim {
            for k in 0..dim {
                let lhs = self[(i, k)];
                if lhs == Complex64::new(0.0, 0.0) {
                    continue;
                }
                for j in 0..dim {
                    result[(i, j)] += lhs * other[(k, j)];
                }
            }
        }
        result
    }

    /// Entrywise sum
    pub fn add(&self, other: &GateMatrix) -> GateMatrix {
        debug_assert_eq!(self.dim, other.dim);
        GateMatrix {
            dim: self.dim,
            elements: self
                .elements
                .iter()
                .zip(&other.elements)
                .map(|(a, b)| a + b)
                .collect(),
        }
    }

    /// Conjugate transpose
    pub fn dagger(&self) -> GateMatrix {
        let dim = self.dim;
        let mut result = GateMatrix::zeros(dim);
        for i in 0..dim {
            for j in 0..dim {
                result[(j, i)] = self[(i, j)].conj();
            }
        }
        result
    }

    /// Entrywise comparison within `tolerance`
    pub fn approx_eq(&self, other: &GateMatrix, tolerance: f64) -> bool {
        self.dim == other.dim
            && self
                .elements
                .iter()
                .zip(&other.elements)
                .all(|(a, b)| (a - b).norm() < tolerance)
    }

    /// Checks `M · M† = I` within `tolerance`
    pub fn is_unitary(&self, tolerance: f64) -> bool {
        self.mul(&self.dagger())
            .approx_eq(&GateMatrix::identity(self.dim), tolerance)
    }

    /// Row-vector product `v · M`, i.e. `out[i] = Σ_j v[j] · M[j][i]`
    pub fn apply_row_vector(&self, vector: &[Complex64]) -> Vec<Complex64> {
        debug_assert_eq!(vector.len(), self.dim);
        let mut out = vec![Complex64::new(0.0, 0.0); self.dim];
        for (j, amp) in vector.iter().enumerate() {
            if *amp == Complex64::new(0.0, 0.0) {
                continue;
            }
            for (i, slot) in out.iter_mut().enumerate() {
                *slot += amp * self[(j, i)];
            }
        }
        out
    }
}

impl Index<(usize, usize)> for GateMatrix {
    type Output = Complex64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.elements[row * self.dim + col]
    }
}

impl IndexMut<(usize, usize)> for GateMatrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.elements[row * self.dim + col]
    }
}
