//! Physical constants shared by every simulation.
//!
//! Values match the reference tables the isotherm maps were generated with,
//! so they are kept as literals rather than pulled from a unit library.

/// Faraday constant, C/mol.
pub const FARADAY: f64 = 96_484.556_1;

/// Molar gas constant, J/(mol·K).
pub const GAS_CONSTANT: f64 = 8.314_472;

/// Seconds in one hour.
pub const SECONDS_PER_HOUR: f64 = 3_600.0;

/// Occupancy used in place of an exactly empty site fraction.
///
/// The analytic potential takes `ln((1 − x)/x)`, so fields never start at zero.
pub const SEED_SOC: f64 = 1.0e-4;

/// Returns the thermal voltage `RT/F` in volts at `temperature` kelvin.
#[must_use]
pub fn thermal_voltage(temperature: f64) -> f64 {
    GAS_CONSTANT * temperature / FARADAY
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn thermal_voltage_at_room_temperature() {
        assert_relative_eq!(thermal_voltage(298.0), 0.025_680, epsilon = 1e-6);
    }
}
