use galva_core::{CellParameters, Frumkin, Geometry};
use uom::si::{
    electric_potential::volt,
    f64::{ElectricPotential, Mass, MassDensity, ThermodynamicTemperature},
    mass::gram,
    mass_density::gram_per_cubic_centimeter,
    thermodynamic_temperature::kelvin,
};

/// A spherical LiMn₂O₄-like cell at room temperature, cut off at −0.15 V.
pub(crate) fn sphere_cell() -> CellParameters {
    cell_with(Geometry::Spherical, -0.15)
}

pub(crate) fn cell_with(geometry: Geometry, cutoff_voltage: f64) -> CellParameters {
    CellParameters::new(
        ThermodynamicTemperature::new::<kelvin>(298.0),
        Mass::new::<gram>(1.0),
        MassDensity::new::<gram_per_cubic_centimeter>(4.28),
        ElectricPotential::new::<volt>(cutoff_voltage),
        148.0,
        geometry,
    )
    .expect("valid cell")
}

/// Ideal solid solution at the cell's temperature.
pub(crate) fn ideal_solution(cell: &CellParameters) -> Frumkin {
    Frumkin::new(0.0, cell.thermal_voltage())
}
