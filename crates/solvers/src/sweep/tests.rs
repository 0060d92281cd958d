use super::*;

use std::{
    num::NonZeroUsize,
    sync::atomic::{AtomicUsize, Ordering},
};

use approx::assert_relative_eq;
use galva_core::{Geometry, constants::SEED_SOC};

use crate::test_utils::{cell_with, ideal_solution, sphere_cell};

fn fixed(n: usize) -> Workers {
    Workers::Fixed(NonZeroUsize::new(n).expect("non-zero"))
}

fn grid_3x3() -> Grid {
    Grid::new(vec![-1.5, -1.0, -0.5], vec![0.5, 1.0, 1.5]).expect("valid grid")
}

#[test]
fn worker_hints() {
    assert_eq!(Workers::from_hint(-1).expect("all"), Workers::All);
    assert_eq!(Workers::from_hint(4).expect("fixed"), fixed(4));
    assert!(matches!(
        Workers::from_hint(0),
        Err(SweepError::InvalidWorkers(0))
    ));
    assert!(matches!(
        Workers::from_hint(-3),
        Err(SweepError::InvalidWorkers(-3))
    ));
    assert_eq!(Workers::All.num_threads(), 0);
    assert_eq!(fixed(3).num_threads(), 3);
}

#[test]
fn pool_size_follows_workers() {
    let grid = grid_3x3();
    let default_size = rayon::ThreadPoolBuilder::new()
        .build()
        .expect("default pool")
        .current_num_threads();

    let sizes = sweep(&grid, Workers::All, |_, _| rayon::current_num_threads()).expect("runs");
    assert!(sizes.iter().all(|&n| n == default_size));

    let sizes = sweep(&grid, fixed(2), |_, _| rayon::current_num_threads()).expect("runs");
    assert!(sizes.iter().all(|&n| n == 2));
}

#[test]
fn grid_flattens_with_log_xi_fastest() {
    let grid = Grid::new(vec![1.0, 2.0], vec![10.0, 20.0, 30.0]).expect("valid grid");

    assert_eq!(grid.len(), 6);
    assert_eq!(grid.point(0), DimensionlessPoint::new(1.0, 10.0));
    assert_eq!(grid.point(2), DimensionlessPoint::new(1.0, 30.0));
    assert_eq!(grid.point(3), DimensionlessPoint::new(2.0, 10.0));
    assert_eq!(grid.point(5), DimensionlessPoint::new(2.0, 30.0));
}

#[test]
fn grid_rejects_bad_axes() {
    assert!(matches!(
        Grid::new(vec![], vec![1.0]),
        Err(SweepError::EmptyGrid { log_ell: 0, log_xi: 1 })
    ));
    assert!(matches!(
        Grid::new(vec![0.0], vec![1.0, f64::INFINITY]),
        Err(SweepError::NonFinite { axis: "log_xi", index: 1 })
    ));
}

#[test]
fn every_slot_is_written_exactly_once() {
    let grid = grid_3x3();

    for workers in [fixed(1), fixed(2), fixed(4), Workers::All] {
        let writes: Vec<AtomicUsize> = (0..grid.len()).map(|_| AtomicUsize::new(0)).collect();

        let slots = sweep(&grid, workers, |index, point| {
            writes[index].fetch_add(1, Ordering::SeqCst);
            (index, point)
        })
        .expect("sweep runs");

        assert_eq!(slots.len(), 9);
        for (index, (slot_index, point)) in slots.into_iter().enumerate() {
            assert_eq!(writes[index].load(Ordering::SeqCst), 1);
            assert_eq!(slot_index, index);
            assert_eq!(point, grid.point(index));
        }
    }
}

#[test]
fn results_do_not_depend_on_worker_count() {
    let cell = sphere_cell();
    let model = ideal_solution(&cell);
    let grid = grid_3x3();
    let config = Config::new(30, 2000).expect("valid config");

    let serial = sweep_discharge(&model, &cell, &grid, &config, fixed(1)).expect("serial");
    let parallel = sweep_discharge(&model, &cell, &grid, &config, fixed(4)).expect("parallel");
    let again = sweep_discharge(&model, &cell, &grid, &config, fixed(4)).expect("again");

    assert_eq!(serial.failures(), 0);
    assert_eq!(serial.log_ell, parallel.log_ell);
    assert_eq!(serial.log_xi, parallel.log_xi);
    assert_eq!(serial.outcomes, parallel.outcomes);

    let bits = |r: &SweepResult| r.max_soc.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&serial), bits(&parallel));
    assert_eq!(bits(&parallel), bits(&again));

    for &soc in &serial.max_soc {
        assert!(soc > 0.0 && soc < 1.0);
    }
}

#[test]
fn echoes_grid_coordinates() {
    let cell = sphere_cell();
    let grid = grid_3x3();
    let config = Config::new(20, 500)
        .and_then(|c| c.with_max_steps(1))
        .expect("valid config");

    let result = sweep_discharge(&ideal_solution(&cell), &cell, &grid, &config, fixed(2))
        .expect("sweep runs");

    assert_eq!(result.log_ell, vec![-1.5, -1.5, -1.5, -1.0, -1.0, -1.0, -0.5, -0.5, -0.5]);
    assert_eq!(result.log_xi, vec![0.5, 1.0, 1.5, 0.5, 1.0, 1.5, 0.5, 1.0, 1.5]);
}

#[test]
fn failed_cells_leave_nan_and_others_continue() {
    // At Ξ = 1 the initial overpotential already crosses a 0.1 V cutoff;
    // at Ξ = 100 the run needs far more than two steps.
    let cell = cell_with(Geometry::Spherical, 0.1);
    let grid = Grid::new(vec![-1.0], vec![0.0, 2.0]).expect("valid grid");
    let config = Config::new(20, 1000)
        .and_then(|c| c.with_max_steps(2))
        .expect("valid config");

    let result = sweep_discharge(&ideal_solution(&cell), &cell, &grid, &config, Workers::All)
        .expect("sweep runs");

    assert_eq!(
        result.outcomes[0],
        CellOutcome::Converged {
            max_soc: result.max_soc[0],
            steps: 0
        }
    );
    assert_relative_eq!(result.max_soc[0], SEED_SOC, max_relative = 1e-12);

    assert_eq!(result.outcomes[1], CellOutcome::ExceededBudget { steps: 2 });
    assert!(result.max_soc[1].is_nan());
    assert_eq!(result.failures(), 1);
}

#[test]
fn numerical_failures_are_per_cell() {
    let outcome = CellOutcome::from(Err(discharge::Error::Domain {
        step: 7,
        surface_soc: 1.0,
    }));

    assert!(!outcome.is_converged());
    assert!(outcome.max_soc().is_nan());
}
