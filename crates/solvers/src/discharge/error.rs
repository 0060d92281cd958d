use crate::diffusion::DiffusionError;

/// Errors that can occur during a discharge run.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("surface occupancy left (0, 1) at step {step}: {surface_soc}")]
    Domain { step: usize, surface_soc: f64 },

    #[error("voltage is not finite at step {step} (surface occupancy {surface_soc})")]
    NonFiniteVoltage { step: usize, surface_soc: f64 },

    #[error("setup failed: {0}")]
    Setup(#[from] DiffusionError),
}
