use galva_core::{CellParameters, DimensionlessPoint, PotentialModel};
use galva_observers::profile::{ProfileRecorder, Sample, Snapshot};
use galva_solvers::discharge::{self, Config, Status};
use tracing::debug;

use crate::Error;

/// Everything a single-point profile run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRequest {
    pub model: PotentialModel,
    pub cell: CellParameters,
    pub point: DimensionlessPoint,
    pub config: Config,

    /// Maximum number of trajectory entries.
    pub sample_count: usize,

    /// Mean SOC at which to capture the concentration snapshot.
    pub target_soc: f64,
}

/// Voltage trajectory and concentration snapshot of one discharge.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileResult {
    /// `(SOC, voltage)` samples, ending with the state at the cutoff.
    pub trajectory: Vec<Sample>,

    /// Concentration field at the target SOC, if the run passed through it.
    pub snapshot: Option<Snapshot>,

    /// Mean SOC of the field that reached the cutoff.
    pub max_soc: f64,

    /// Number of diffusion updates applied.
    pub steps: usize,
}

/// Runs one discharge and records its voltage profile.
///
/// # Errors
///
/// Returns an error if the sampling settings are invalid, if the run fails
/// numerically, or if it does not reach the cutoff within its step budget.
pub fn run_profile(request: &ProfileRequest) -> Result<ProfileResult, Error> {
    let mut recorder = ProfileRecorder::new(
        request.sample_count,
        request.config.time_steps(),
        request.target_soc,
    )?;

    let solution = discharge::solve(
        &request.model,
        &request.cell,
        request.point,
        &request.config,
        &mut recorder,
    )?;

    match solution.status {
        Status::ReachedCutoff => {}
        // The recorder never stops a run, so anything else is the budget.
        Status::MaxSteps | Status::StoppedByObserver => {
            return Err(Error::ExceededBudget {
                steps: solution.steps,
            });
        }
    }

    let profile = recorder.finish();
    debug!(
        samples = profile.trajectory.len(),
        snapshot = profile.snapshot.is_some(),
        max_soc = solution.max_soc,
        "profile recorded"
    );

    Ok(ProfileResult {
        trajectory: profile.trajectory,
        snapshot: profile.snapshot,
        max_soc: solution.max_soc,
        steps: solution.steps,
    })
}
