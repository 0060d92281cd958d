use thiserror::Error;
use uom::si::{
    electric_potential::volt,
    f64::{ElectricPotential, Mass, MassDensity, ThermodynamicTemperature},
    mass::gram,
    mass_density::gram_per_cubic_centimeter,
    thermodynamic_temperature::kelvin,
};

use crate::{
    Geometry,
    constants::thermal_voltage,
    constraint::{ConstraintError, StrictlyPositive},
};

/// Immutable description of the electrode and its operating conditions.
///
/// Quantities are stored with units; the physics kernel reads them in the
/// working units of the isotherm maps (K, g, g/cm³, V, mAh/g).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellParameters {
    temperature: ThermodynamicTemperature,
    mass: Mass,
    density: MassDensity,
    cutoff_voltage: ElectricPotential,
    specific_capacity: f64,
    geometry: Geometry,
}

/// Errors that can occur when constructing [`CellParameters`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CellError {
    #[error("temperature: {0}")]
    Temperature(#[source] ConstraintError),

    #[error("active mass: {0}")]
    Mass(#[source] ConstraintError),

    #[error("density: {0}")]
    Density(#[source] ConstraintError),

    #[error("specific capacity: {0}")]
    SpecificCapacity(#[source] ConstraintError),

    #[error("cutoff voltage must be finite, got {0} V")]
    CutoffVoltage(f64),
}

impl CellParameters {
    /// Creates a validated set of cell parameters.
    ///
    /// `specific_capacity` is in mAh/g.
    ///
    /// # Errors
    ///
    /// Returns an error if temperature, mass, density, or specific capacity is
    /// not strictly positive, or if the cutoff voltage is not finite.
    pub fn new(
        temperature: ThermodynamicTemperature,
        mass: Mass,
        density: MassDensity,
        cutoff_voltage: ElectricPotential,
        specific_capacity: f64,
        geometry: Geometry,
    ) -> Result<Self, CellError> {
        StrictlyPositive::new(temperature.get::<kelvin>()).map_err(CellError::Temperature)?;
        StrictlyPositive::new(mass.get::<gram>()).map_err(CellError::Mass)?;
        StrictlyPositive::new(density.get::<gram_per_cubic_centimeter>())
            .map_err(CellError::Density)?;
        StrictlyPositive::new(specific_capacity).map_err(CellError::SpecificCapacity)?;

        let cutoff = cutoff_voltage.get::<volt>();
        if !cutoff.is_finite() {
            return Err(CellError::CutoffVoltage(cutoff));
        }

        Ok(Self {
            temperature,
            mass,
            density,
            cutoff_voltage,
            specific_capacity,
            geometry,
        })
    }

    /// Returns the cell temperature.
    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }

    /// Returns the active-material mass.
    #[must_use]
    pub fn mass(&self) -> Mass {
        self.mass
    }

    /// Returns the active-material density.
    #[must_use]
    pub fn density(&self) -> MassDensity {
        self.density
    }

    /// Returns the voltage at which a discharge is terminated.
    #[must_use]
    pub fn cutoff_voltage(&self) -> ElectricPotential {
        self.cutoff_voltage
    }

    /// Returns the specific capacity in mAh/g.
    #[must_use]
    pub fn specific_capacity(&self) -> f64 {
        self.specific_capacity
    }

    #[must_use]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Returns the thermal voltage `RT/F` in volts.
    #[must_use]
    pub fn thermal_voltage(&self) -> f64 {
        thermal_voltage(self.temperature.get::<kelvin>())
    }

    pub(crate) fn mass_g(&self) -> f64 {
        self.mass.get::<gram>()
    }

    pub(crate) fn density_g_per_cm3(&self) -> f64 {
        self.density.get::<gram_per_cubic_centimeter>()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use super::test_utils::sphere_cell;

    #[test]
    fn reads_back_working_units() {
        let cell = sphere_cell();
        assert_relative_eq!(cell.mass_g(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(cell.density_g_per_cm3(), 4.28, epsilon = 1e-12);
        assert_relative_eq!(cell.cutoff_voltage().get::<volt>(), -0.15, epsilon = 1e-12);
        assert_relative_eq!(cell.thermal_voltage(), 0.025_680, epsilon = 1e-6);
    }

    #[test]
    fn rejects_non_positive_inputs() {
        let result = CellParameters::new(
            ThermodynamicTemperature::new::<kelvin>(298.0),
            Mass::new::<gram>(0.0),
            MassDensity::new::<gram_per_cubic_centimeter>(4.28),
            ElectricPotential::new::<volt>(-0.15),
            148.0,
            Geometry::Planar,
        );
        assert!(matches!(result, Err(CellError::Mass(ConstraintError::Zero))));

        let result = CellParameters::new(
            ThermodynamicTemperature::new::<kelvin>(298.0),
            Mass::new::<gram>(1.0),
            MassDensity::new::<gram_per_cubic_centimeter>(4.28),
            ElectricPotential::new::<volt>(f64::NAN),
            148.0,
            Geometry::Planar,
        );
        assert!(matches!(result, Err(CellError::CutoffVoltage(_))));
    }
}
