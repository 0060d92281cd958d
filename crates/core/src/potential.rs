//! Equilibrium (open-circuit) potential models.
//!
//! Every model maps the lithium occupancy at the particle surface to an
//! equilibrium potential through the single [`EquilibriumPotential`]
//! contract:
//!
//! - [`Frumkin`]: the analytic Frumkin isotherm with interaction parameter `g`
//! - [`IsothermTable`]: a piecewise cubic fitted to a measured isotherm
//!
//! [`PotentialModel`] selects between the two at runtime without branching
//! inside the stepping loop of generic callers.

mod frumkin;
mod isotherm;

pub use frumkin::Frumkin;
pub use isotherm::{IsothermError, IsothermTable, Segment};

use crate::constants::SEED_SOC;

/// Maps a surface occupancy to an equilibrium potential in volts.
pub trait EquilibriumPotential {
    /// Returns the equilibrium potential at `surface_soc`.
    ///
    /// The result is only meaningful for `0 < surface_soc < 1`; callers
    /// check the domain before evaluating.
    fn potential(&self, surface_soc: f64) -> f64;

    /// Returns the uniform occupancy a fresh particle starts from.
    fn initial_soc(&self) -> f64 {
        SEED_SOC
    }
}

/// Runtime selection of an equilibrium potential model.
#[derive(Debug, Clone, PartialEq)]
pub enum PotentialModel {
    Analytic(Frumkin),
    Tabulated(IsothermTable),
}

impl EquilibriumPotential for PotentialModel {
    fn potential(&self, surface_soc: f64) -> f64 {
        match self {
            Self::Analytic(model) => model.potential(surface_soc),
            Self::Tabulated(model) => model.potential(surface_soc),
        }
    }

    fn initial_soc(&self) -> f64 {
        match self {
            Self::Analytic(model) => model.initial_soc(),
            Self::Tabulated(model) => model.initial_soc(),
        }
    }
}

impl From<Frumkin> for PotentialModel {
    fn from(model: Frumkin) -> Self {
        Self::Analytic(model)
    }
}

impl From<IsothermTable> for PotentialModel {
    fn from(model: IsothermTable) -> Self {
        Self::Tabulated(model)
    }
}
