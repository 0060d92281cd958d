use galva_core::DimensionlessPoint;

use super::SweepError;

/// Cartesian `(log ℓ, log Ξ)` grid, flattened with `log Ξ` varying fastest.
///
/// Cell `index = i_ell · n_xi + i_xi` evaluates `(log_ell[i_ell], log_xi[i_xi])`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    log_ell: Vec<f64>,
    log_xi: Vec<f64>,
}

impl Grid {
    /// Creates a grid from its two axes.
    ///
    /// # Errors
    ///
    /// Returns an error if either axis is empty or holds a non-finite value.
    pub fn new(log_ell: Vec<f64>, log_xi: Vec<f64>) -> Result<Self, SweepError> {
        if log_ell.is_empty() || log_xi.is_empty() {
            return Err(SweepError::EmptyGrid {
                log_ell: log_ell.len(),
                log_xi: log_xi.len(),
            });
        }
        for (axis, values) in [("log_ell", &log_ell), ("log_xi", &log_xi)] {
            if let Some(index) = values.iter().position(|v| !v.is_finite()) {
                return Err(SweepError::NonFinite { axis, index });
            }
        }
        Ok(Self { log_ell, log_xi })
    }

    #[must_use]
    pub fn log_ell(&self) -> &[f64] {
        &self.log_ell
    }

    #[must_use]
    pub fn log_xi(&self) -> &[f64] {
        &self.log_xi
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.log_ell.len() * self.log_xi.len()
    }

    /// Always false; construction rejects empty axes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the point evaluated by cell `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn point(&self, index: usize) -> DimensionlessPoint {
        let n_xi = self.log_xi.len();
        DimensionlessPoint::new(self.log_ell[index / n_xi], self.log_xi[index % n_xi])
    }
}
