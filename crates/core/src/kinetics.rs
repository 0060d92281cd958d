use crate::{
    DimensionlessPoint, Geometry,
    constants::SECONDS_PER_HOUR,
    constraint::{ConstraintError, StrictlyPositive},
};

/// Transport and kinetic properties of an active material.
///
/// Relates a physical experiment (particle length, C-rate) to its location
/// on the dimensionless `(ℓ, Ξ)` map:
///
/// ```text
/// ℓ = d² · C / (z · t_h · D)
/// Ξ = k⁰ · sqrt(t_h / (C · D))
/// ```
///
/// where `z` is the geometry shape factor and `t_h` is one hour in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KineticParameters {
    diffusion_coefficient: f64,
    rate_constant: f64,
}

impl KineticParameters {
    /// Creates kinetic parameters from a diffusion coefficient (cm²/s) and a
    /// kinetic rate constant (cm/s).
    ///
    /// # Errors
    ///
    /// Returns an error if either value is not strictly positive.
    pub fn new(diffusion_coefficient: f64, rate_constant: f64) -> Result<Self, ConstraintError> {
        let diffusion_coefficient = StrictlyPositive::new(diffusion_coefficient)?.into_inner();
        let rate_constant = StrictlyPositive::new(rate_constant)?.into_inner();
        Ok(Self {
            diffusion_coefficient,
            rate_constant,
        })
    }

    #[must_use]
    pub fn diffusion_coefficient(&self) -> f64 {
        self.diffusion_coefficient
    }

    #[must_use]
    pub fn rate_constant(&self) -> f64 {
        self.rate_constant
    }

    /// Locates a discharge of a particle of characteristic `length` (cm) at
    /// `c_rate` on the dimensionless map.
    #[must_use]
    pub fn dimensionless_point(
        &self,
        length: f64,
        c_rate: f64,
        geometry: Geometry,
    ) -> DimensionlessPoint {
        let z = geometry.shape_factor();
        let ell =
            length * length * c_rate / (z * SECONDS_PER_HOUR * self.diffusion_coefficient);
        let xi = self.rate_constant * (SECONDS_PER_HOUR / (c_rate * self.diffusion_coefficient)).sqrt();
        DimensionlessPoint::new(ell.log10(), xi.log10())
    }

    /// Returns the characteristic length (cm) that places a discharge at
    /// `c_rate` on the map row `log_ell`.
    #[must_use]
    pub fn length_for(&self, log_ell: f64, c_rate: f64, geometry: Geometry) -> f64 {
        let z = geometry.shape_factor();
        (z * SECONDS_PER_HOUR * self.diffusion_coefficient * 10_f64.powf(log_ell) / c_rate).sqrt()
    }
}
