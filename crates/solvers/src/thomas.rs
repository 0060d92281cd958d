//! Thomas algorithm for tridiagonal systems.
//!
//! Systems are stored in diffusion form, where off-diagonal couplings are
//! positive weights:
//!
//! ```text
//! −lower[i] · x[i−1] + diag[i] · x[i] − upper[i] · x[i+1] = rhs[i]
//! ```
//!
//! `lower[0]` and `upper[n−1]` are unused.
//!
//! The forward-elimination coefficients depend only on the matrix, so they are
//! computed once in [`Tridiagonal::new`]. Each [`Tridiagonal::solve`] is then
//! one forward sweep for the elimination intercepts and one backward sweep of
//! back-substitution, with no iteration and no convergence check.

use thiserror::Error;

/// A factored tridiagonal matrix ready for repeated solves.
#[derive(Debug, Clone, PartialEq)]
pub struct Tridiagonal {
    lower: Vec<f64>,
    diag: Vec<f64>,
    upper: Vec<f64>,
    pivots: Vec<f64>,
    coefs: Vec<f64>,
}

/// Errors that can occur when factoring a [`Tridiagonal`] matrix.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ThomasError {
    #[error("tridiagonal system must have at least one row")]
    Empty,

    #[error("diagonals have mismatched lengths: lower {lower}, diag {diag}, upper {upper}")]
    LengthMismatch {
        lower: usize,
        diag: usize,
        upper: usize,
    },

    #[error("zero or non-finite pivot {pivot} at row {row}")]
    SingularPivot { row: usize, pivot: f64 },
}

impl Tridiagonal {
    /// Factors the matrix given by its three diagonals.
    ///
    /// # Errors
    ///
    /// Returns an error if the diagonals are empty or of different lengths, or
    /// if elimination meets a zero or non-finite pivot.
    pub fn new(lower: Vec<f64>, diag: Vec<f64>, upper: Vec<f64>) -> Result<Self, ThomasError> {
        let n = diag.len();
        if n == 0 {
            return Err(ThomasError::Empty);
        }
        if lower.len() != n || upper.len() != n {
            return Err(ThomasError::LengthMismatch {
                lower: lower.len(),
                diag: n,
                upper: upper.len(),
            });
        }

        let mut pivots = vec![0.0; n];
        let mut coefs = vec![0.0; n];

        for row in 0..n {
            let pivot = if row == 0 {
                diag[0]
            } else {
                diag[row] - lower[row] * coefs[row - 1]
            };
            if pivot == 0.0 || !pivot.is_finite() {
                return Err(ThomasError::SingularPivot { row, pivot });
            }
            pivots[row] = pivot;
            if row + 1 < n {
                coefs[row] = upper[row] / pivot;
            }
        }

        Ok(Self {
            lower,
            diag,
            upper,
            pivots,
            coefs,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.diag.len()
    }

    /// Always false; construction rejects empty systems.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diag.is_empty()
    }

    #[must_use]
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    #[must_use]
    pub fn diag(&self) -> &[f64] {
        &self.diag
    }

    #[must_use]
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// Solves the system for `rhs`, writing the solution into `out`.
    ///
    /// `intercepts` is caller-owned scratch space so that repeated solves do
    /// not allocate.
    ///
    /// # Panics
    ///
    /// Panics if `rhs`, `intercepts`, or `out` is not [`len`](Self::len) long.
    pub fn solve(&self, rhs: &[f64], intercepts: &mut [f64], out: &mut [f64]) {
        let n = self.len();
        assert_eq!(rhs.len(), n, "rhs length");
        assert_eq!(intercepts.len(), n, "scratch length");
        assert_eq!(out.len(), n, "output length");

        intercepts[0] = rhs[0] / self.pivots[0];
        for i in 1..n {
            intercepts[i] = (rhs[i] + self.lower[i] * intercepts[i - 1]) / self.pivots[i];
        }

        out[n - 1] = intercepts[n - 1];
        for i in (0..n - 1).rev() {
            out[i] = self.coefs[i] * out[i + 1] + intercepts[i];
        }
    }
}
