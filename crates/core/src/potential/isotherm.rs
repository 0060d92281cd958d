use thiserror::Error;

use crate::constants::SEED_SOC;

use super::EquilibriumPotential;

/// Cubic polynomial valid on one breakpoint interval of an [`IsothermTable`].
///
/// Evaluates `d + c·Δ + b·Δ² + a·Δ³` with `Δ = x − origin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub origin: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Segment {
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        let dx = x - self.origin;
        self.d + self.c * dx + self.b * dx * dx + self.a * dx * dx * dx
    }
}

/// Piecewise cubic equilibrium potential over ordered SOC breakpoints.
///
/// A table with `n` segments has `n + 1` strictly increasing breakpoints.
/// Segment `i` covers `[breakpoints[i], breakpoints[i + 1])`. Any occupancy
/// outside every segment, including one at or past the last breakpoint, is
/// evaluated on the last segment, which saturates the curve instead of
/// failing.
#[derive(Debug, Clone, PartialEq)]
pub struct IsothermTable {
    breakpoints: Vec<f64>,
    segments: Vec<Segment>,
}

/// Errors that can occur when building an [`IsothermTable`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IsothermError {
    #[error("isotherm table needs at least one segment")]
    Empty,

    #[error("expected {expected} {name} coefficients, got {actual}")]
    LengthMismatch {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("non-finite value in {name} at index {index}")]
    NonFinite { name: &'static str, index: usize },

    #[error("breakpoints must be strictly increasing: {previous} then {next} at index {index}")]
    NotIncreasing {
        index: usize,
        previous: f64,
        next: f64,
    },
}

impl IsothermTable {
    /// Builds a table from breakpoints and per-segment cubic coefficients.
    ///
    /// `a` holds cubic, `b` quadratic, `c` linear, and `d` constant terms.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no segments, the coefficient arrays are
    /// not one shorter than `breakpoints`, any value is non-finite, or the
    /// breakpoints are not strictly increasing.
    pub fn new(
        breakpoints: Vec<f64>,
        a: Vec<f64>,
        b: Vec<f64>,
        c: Vec<f64>,
        d: Vec<f64>,
    ) -> Result<Self, IsothermError> {
        let len = breakpoints.len().checked_sub(1).ok_or(IsothermError::Empty)?;
        if len == 0 {
            return Err(IsothermError::Empty);
        }

        for (name, values) in [("a", &a), ("b", &b), ("c", &c), ("d", &d)] {
            if values.len() != len {
                return Err(IsothermError::LengthMismatch {
                    name,
                    expected: len,
                    actual: values.len(),
                });
            }
        }

        for (name, values) in [
            ("breakpoints", &breakpoints),
            ("a", &a),
            ("b", &b),
            ("c", &c),
            ("d", &d),
        ] {
            if let Some(index) = values.iter().position(|v| !v.is_finite()) {
                return Err(IsothermError::NonFinite { name, index });
            }
        }

        if let Some(index) = breakpoints.windows(2).position(|w| w[1] <= w[0]) {
            return Err(IsothermError::NotIncreasing {
                index: index + 1,
                previous: breakpoints[index],
                next: breakpoints[index + 1],
            });
        }

        let segments = (0..len)
            .map(|i| Segment {
                origin: breakpoints[i],
                a: a[i],
                b: b[i],
                c: c[i],
                d: d[i],
            })
            .collect();

        Ok(Self {
            breakpoints,
            segments,
        })
    }

    /// Returns the number of cubic segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; a table has at least one segment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub fn breakpoints(&self) -> &[f64] {
        &self.breakpoints
    }

    /// Returns the index of the segment used to evaluate `soc`.
    #[must_use]
    pub fn segment_index(&self, soc: f64) -> usize {
        let last = self.segments.len() - 1;
        // Number of breakpoints at or below `soc`.
        match self.breakpoints.partition_point(|&bp| bp <= soc) {
            0 => last,
            n if n > self.segments.len() => last,
            n => n - 1,
        }
    }

    /// Returns the segment used to evaluate `soc`.
    #[must_use]
    pub fn segment(&self, soc: f64) -> &Segment {
        &self.segments[self.segment_index(soc)]
    }
}

impl EquilibriumPotential for IsothermTable {
    fn potential(&self, surface_soc: f64) -> f64 {
        self.segment(surface_soc).eval(surface_soc)
    }

    /// Starts at the first breakpoint, or at the seed occupancy when the
    /// table begins at exactly zero.
    fn initial_soc(&self) -> f64 {
        let first = self.breakpoints[0];
        if first == 0.0 { SEED_SOC } else { first }
    }
}
