//! Independent discharge runs over a `(log ℓ, log Ξ)` grid, in parallel.
//!
//! Every grid cell runs its own discharge with its own buffers and writes
//! only its own flattened output slot. Results are therefore identical for
//! any worker count and any scheduling order.
//!
//! Per-cell numerical failures do not abort the sweep. They are recorded in
//! [`SweepResult::outcomes`] and leave `NaN` in the cell's `max_soc` slot.

mod grid;
mod workers;

#[cfg(test)]
mod tests;

pub use grid::Grid;
pub use workers::Workers;

use galva_core::{CellParameters, DimensionlessPoint, EquilibriumPotential};
use rayon::{ThreadPoolBuildError, ThreadPoolBuilder, prelude::*};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::discharge::{self, Config, Status};

/// Errors that prevent a sweep from running at all.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("worker hint must be -1 or positive, got {0}")]
    InvalidWorkers(i64),

    #[error("grid axes must be non-empty: {log_ell} log_ell by {log_xi} log_xi values")]
    EmptyGrid { log_ell: usize, log_xi: usize },

    #[error("non-finite {axis} value at index {index}")]
    NonFinite { axis: &'static str, index: usize },

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] ThreadPoolBuildError),
}

/// How one grid cell's discharge ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellOutcome {
    /// The voltage reached the cutoff.
    Converged { max_soc: f64, steps: usize },

    /// The step budget ran out before the cutoff.
    ExceededBudget { steps: usize },

    /// The run failed numerically.
    Failed(discharge::Error),
}

impl CellOutcome {
    /// Returns the reported maximum SOC, or `NaN` if the cell did not converge.
    #[must_use]
    pub fn max_soc(&self) -> f64 {
        match self {
            Self::Converged { max_soc, .. } => *max_soc,
            Self::ExceededBudget { .. } | Self::Failed(_) => f64::NAN,
        }
    }

    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self, Self::Converged { .. })
    }
}

impl From<Result<discharge::Solution, discharge::Error>> for CellOutcome {
    fn from(result: Result<discharge::Solution, discharge::Error>) -> Self {
        match result {
            Ok(solution) => match solution.status {
                Status::ReachedCutoff => Self::Converged {
                    max_soc: solution.max_soc,
                    steps: solution.steps,
                },
                // Unobserved runs stop only at the cutoff or the budget.
                Status::MaxSteps | Status::StoppedByObserver => Self::ExceededBudget {
                    steps: solution.steps,
                },
            },
            Err(error) => Self::Failed(error),
        }
    }
}

/// Per-cell results of a discharge sweep, in flattened grid order.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    /// `log ℓ` of each cell.
    pub log_ell: Vec<f64>,

    /// `log Ξ` of each cell.
    pub log_xi: Vec<f64>,

    /// Maximum SOC of each cell, `NaN` where the run did not converge.
    pub max_soc: Vec<f64>,

    /// How each cell's run ended.
    pub outcomes: Vec<CellOutcome>,
}

impl SweepResult {
    /// Returns the number of cells that did not reach the cutoff.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_converged()).count()
    }
}

/// Evaluates `cell` once for every grid cell on a pool of `workers` threads.
///
/// The returned vector is in flattened grid order. `cell` receives the
/// flattened index and the point of that cell.
///
/// # Errors
///
/// Returns an error if the worker pool cannot be built.
pub fn sweep<T, F>(grid: &Grid, workers: Workers, cell: F) -> Result<Vec<T>, SweepError>
where
    T: Send,
    F: Fn(usize, DimensionlessPoint) -> T + Sync,
{
    let pool = ThreadPoolBuilder::new()
        .num_threads(workers.num_threads())
        .build()?;
    debug!(threads = pool.current_num_threads(), "worker pool ready");

    let mut slots = Vec::with_capacity(grid.len());
    pool.install(|| {
        (0..grid.len())
            .into_par_iter()
            .map(|index| cell(index, grid.point(index)))
            .collect_into_vec(&mut slots);
    });

    Ok(slots)
}

/// Runs one discharge per grid cell and collects the maximum SOC of each.
///
/// # Errors
///
/// Returns an error if the worker pool cannot be built. Failures of
/// individual cells are reported in the result instead.
pub fn sweep_discharge<P>(
    potential: &P,
    cell: &CellParameters,
    grid: &Grid,
    config: &Config,
    workers: Workers,
) -> Result<SweepResult, SweepError>
where
    P: EquilibriumPotential + Sync + ?Sized,
{
    info!(
        cells = grid.len(),
        ?workers,
        grid_size = config.grid_size(),
        time_steps = config.time_steps(),
        "starting sweep"
    );

    let outcomes = sweep(grid, workers, |index, point| {
        let outcome = CellOutcome::from(discharge::solve_unobserved(
            potential, cell, point, config,
        ));
        if !outcome.is_converged() {
            warn!(
                index,
                log_ell = point.log_ell,
                log_xi = point.log_xi,
                ?outcome,
                "cell did not reach cutoff"
            );
        }
        outcome
    })?;

    let (log_ell, log_xi) = (0..grid.len())
        .map(|index| {
            let point = grid.point(index);
            (point.log_ell, point.log_xi)
        })
        .unzip();

    let result = SweepResult {
        log_ell,
        log_xi,
        max_soc: outcomes.iter().map(CellOutcome::max_soc).collect(),
        outcomes,
    };

    info!(
        cells = grid.len(),
        failures = result.failures(),
        "sweep finished"
    );

    Ok(result)
}
