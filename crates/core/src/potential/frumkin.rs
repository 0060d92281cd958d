use super::EquilibriumPotential;

/// Frumkin isotherm:
///
/// ```text
/// E(x) = (RT/F) · (g · (0.5 − x) + ln((1 − x) / x))
/// ```
///
/// With `g = 0` this reduces to an ideal solid solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frumkin {
    interaction: f64,
    thermal_voltage: f64,
}

impl Frumkin {
    /// Creates a Frumkin isotherm with interaction parameter `interaction`
    /// at thermal voltage `RT/F` (volts).
    #[must_use]
    pub fn new(interaction: f64, thermal_voltage: f64) -> Self {
        Self {
            interaction,
            thermal_voltage,
        }
    }

    #[must_use]
    pub fn interaction(&self) -> f64 {
        self.interaction
    }
}

impl EquilibriumPotential for Frumkin {
    fn potential(&self, surface_soc: f64) -> f64 {
        let x = surface_soc;
        self.thermal_voltage * (self.interaction * (0.5 - x) + ((1.0 - x) / x).ln())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::constants::{SEED_SOC, thermal_voltage};

    #[test]
    fn half_filled_host_is_at_zero() {
        for g in [-2.0, 0.0, 4.0] {
            let model = Frumkin::new(g, thermal_voltage(298.0));
            assert_relative_eq!(model.potential(0.5), 0.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn ideal_solution_is_antisymmetric() {
        let model = Frumkin::new(0.0, thermal_voltage(298.0));
        assert_relative_eq!(model.potential(0.2), -model.potential(0.8), epsilon = 1e-15);
    }

    #[test]
    fn seed_potential_matches_closed_form() {
        let vt = thermal_voltage(298.0);
        let model = Frumkin::new(0.0, vt);
        let expected = vt * ((1.0 - SEED_SOC) / SEED_SOC).ln();
        assert_relative_eq!(model.potential(SEED_SOC), expected);
        assert_relative_eq!(model.potential(SEED_SOC), 0.236_5, epsilon = 1e-3);
    }

    #[test]
    fn interaction_shifts_potential() {
        let vt = 0.025;
        let ideal = Frumkin::new(0.0, vt);
        let attractive = Frumkin::new(3.0, vt);
        assert_relative_eq!(
            attractive.potential(0.1) - ideal.potential(0.1),
            vt * 3.0 * 0.4,
            epsilon = 1e-15
        );
    }

    #[test]
    fn endpoints_are_not_finite() {
        let model = Frumkin::new(0.0, 0.025);
        assert!(!model.potential(0.0).is_finite());
        assert!(!model.potential(1.0).is_finite());
    }
}
