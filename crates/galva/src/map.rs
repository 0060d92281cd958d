use galva_core::{CellParameters, PotentialModel};
use galva_solvers::{
    discharge::Config,
    sweep::{self, Grid, SweepResult, Workers},
};

use tracing::debug;

use crate::Error;

/// Everything a diagnostic map run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct MapRequest {
    pub model: PotentialModel,
    pub cell: CellParameters,
    pub grid: Grid,
    pub config: Config,
    pub workers: Workers,
}

/// Runs one discharge per grid cell and reports each cell's maximum SOC.
///
/// Cells that fail or exhaust their step budget report `NaN` and do not stop
/// the other cells.
///
/// # Errors
///
/// Returns an error only if the worker pool cannot be built.
pub fn run_map(request: &MapRequest) -> Result<SweepResult, Error> {
    debug!(
        geometry = ?request.cell.geometry(),
        grid_size = request.config.grid_size(),
        time_steps = request.config.time_steps(),
        "building map"
    );

    let result = sweep::sweep_discharge(
        &request.model,
        &request.cell,
        &request.grid,
        &request.config,
        request.workers,
    )?;
    Ok(result)
}
