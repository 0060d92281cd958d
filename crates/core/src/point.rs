use crate::{
    CellParameters,
    constants::{FARADAY, SECONDS_PER_HOUR},
};

/// One point of the discharge-regime map, as `(log₁₀ ℓ, log₁₀ Ξ)`.
///
/// `ℓ` is a size-like parameter (diffusion time relative to discharge time)
/// and `Ξ` is a rate-like parameter (kinetic rate relative to discharge rate).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionlessPoint {
    pub log_ell: f64,
    pub log_xi: f64,
}

/// Quantities derived from a [`DimensionlessPoint`] for a given cell.
///
/// Lengths are in cm, current densities in A/cm², and concentrations in
/// mol/cm³. The diffusion coefficient and rate constant are unity in these
/// units; `ℓ` and `Ξ` carry their physical values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedQuantities {
    /// Discharge rate in units of full discharges per hour.
    pub c_rate: f64,

    /// Characteristic particle size (thickness or diameter).
    pub particle_size: f64,

    /// Total electrochemically active surface area.
    pub surface_area: f64,

    /// Applied current density. Negative values insert lithium.
    pub current_density: f64,

    /// Maximum lithium concentration of the host.
    pub max_concentration: f64,

    /// Duration of a complete theoretical discharge, in seconds.
    pub discharge_time: f64,
}

impl DimensionlessPoint {
    #[must_use]
    pub fn new(log_ell: f64, log_xi: f64) -> Self {
        Self { log_ell, log_xi }
    }

    /// Derives the operating quantities of this point for `cell`.
    ///
    /// These are pure functions of the point and the cell; callers recompute
    /// them for every point instead of caching across points.
    #[must_use]
    pub fn derive(&self, cell: &CellParameters) -> DerivedQuantities {
        let factor = cell.geometry().size_factor();
        let mass = cell.mass_g();
        let density = cell.density_g_per_cm3();
        let capacity = cell.specific_capacity();

        let xi = 10_f64.powf(self.log_xi);
        let ell = 10_f64.powf(self.log_ell);

        let c_rate = SECONDS_PER_HOUR / (xi * xi);
        let particle_size = 2.0 * (ell * factor * SECONDS_PER_HOUR / c_rate).sqrt();
        let surface_area = 2.0 * factor * mass / (density * particle_size);
        let current_density = -c_rate * capacity * mass / (1000.0 * surface_area);
        let max_concentration = capacity * density * 3.6 / FARADAY;
        let discharge_time = capacity * mass * 3.6 / (current_density.abs() * surface_area);

        DerivedQuantities {
            c_rate,
            particle_size,
            surface_area,
            current_density,
            max_concentration,
            discharge_time,
        }
    }
}

impl From<(f64, f64)> for DimensionlessPoint {
    fn from((log_ell, log_xi): (f64, f64)) -> Self {
        Self { log_ell, log_xi }
    }
}
