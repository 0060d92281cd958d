//! Shared fixtures for the end-to-end scenarios under `tests/`.

use galva::{CellParameters, Config, Frumkin, Geometry, IsothermTable, PotentialModel};
use uom::si::{
    electric_potential::volt,
    f64::{ElectricPotential, Mass, MassDensity, ThermodynamicTemperature},
    mass::gram,
    mass_density::gram_per_cubic_centimeter,
    thermodynamic_temperature::kelvin,
};

/// A 1 g LiCoO2-like cell discharged to −0.15 V.
///
/// # Panics
///
/// Never, the parameters are valid.
#[must_use]
pub fn reference_cell(geometry: Geometry) -> CellParameters {
    CellParameters::new(
        ThermodynamicTemperature::new::<kelvin>(298.0),
        Mass::new::<gram>(1.0),
        MassDensity::new::<gram_per_cubic_centimeter>(4.28),
        ElectricPotential::new::<volt>(-0.15),
        148.0,
        geometry,
    )
    .expect("reference cell is valid")
}

/// Same cell with a different cutoff voltage.
///
/// # Panics
///
/// Panics if `cutoff` is not finite.
#[must_use]
pub fn cell_with_cutoff(geometry: Geometry, cutoff: f64) -> CellParameters {
    CellParameters::new(
        ThermodynamicTemperature::new::<kelvin>(298.0),
        Mass::new::<gram>(1.0),
        MassDensity::new::<gram_per_cubic_centimeter>(4.28),
        ElectricPotential::new::<volt>(cutoff),
        148.0,
        geometry,
    )
    .expect("finite cutoff")
}

/// Ideal-solution Frumkin isotherm at the cell's temperature.
#[must_use]
pub fn ideal_solution(cell: &CellParameters) -> PotentialModel {
    Frumkin::new(0.0, cell.thermal_voltage()).into()
}

/// Linear isotherm `E = 1 − x` stored as two spline segments.
///
/// # Panics
///
/// Never, the table is valid.
#[must_use]
pub fn linear_isotherm() -> PotentialModel {
    IsothermTable::new(
        vec![0.0, 0.5, 1.0],
        vec![0.0, 0.0],
        vec![0.0, 0.0],
        vec![-1.0, -1.0],
        vec![1.0, 0.5],
    )
    .expect("linear table is valid")
    .into()
}

/// A coarse discretization that keeps scenarios fast.
///
/// # Panics
///
/// Never, the counts are valid.
#[must_use]
pub fn coarse() -> Config {
    Config::new(30, 3000).expect("coarse config is valid")
}
