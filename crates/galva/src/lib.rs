//! Galvanostatic discharge of a single active-material particle.
//!
//! The two entry points share one physics kernel:
//!
//! - [`run_map`] runs a discharge for every point of a `(log ℓ, log Ξ)` grid
//!   and reports the maximum SOC reached at the voltage cutoff.
//! - [`run_profile`] runs one point and records its voltage trajectory and
//!   a concentration snapshot at a target SOC.
//!
//! Requests are built directly from validated types or from a TOML
//! [`RunConfig`].

pub mod config;

mod error;
mod map;
mod profile;

pub use config::RunConfig;
pub use error::Error;
pub use map::{MapRequest, run_map};
pub use profile::{ProfileRequest, ProfileResult, run_profile};

pub use galva_core::{
    CellParameters, DerivedQuantities, DimensionlessPoint, EquilibriumPotential, Frumkin,
    Geometry, IsothermTable, KineticParameters, PotentialModel,
};
pub use galva_observers::profile::{Sample, Snapshot};
pub use galva_solvers::{
    discharge::Config,
    sweep::{CellOutcome, Grid, SweepResult, Workers},
};
