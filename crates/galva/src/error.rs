use galva_core::{CellError, GeometryError, potential::IsothermError};
use galva_observers::profile::RecorderError;
use galva_solvers::{discharge, sweep::SweepError};
use thiserror::Error;

/// Errors returned by the galva entry points.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid cell: {0}")]
    Cell(#[from] CellError),

    #[error("invalid geometry: {0}")]
    Geometry(#[from] GeometryError),

    #[error("invalid isotherm table: {0}")]
    Isotherm(#[from] IsothermError),

    #[error("invalid discretization: {0}")]
    Discretization(#[from] discharge::ConfigError),

    #[error("invalid profile settings: {0}")]
    Recorder(#[from] RecorderError),

    #[error("invalid sweep: {0}")]
    Sweep(#[from] SweepError),

    #[error("discharge failed: {0}")]
    Discharge(#[from] discharge::Error),

    #[error("cutoff not reached within {steps} steps")]
    ExceededBudget { steps: usize },

    #[error("failed to parse configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("configuration has no [{0}] section")]
    MissingSection(&'static str),
}
