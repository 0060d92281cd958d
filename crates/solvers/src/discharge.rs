//! Galvanostatic discharge of a single particle down to a cutoff voltage.
//!
//! A run seeds a uniform concentration field, then repeatedly evaluates the
//! cell voltage on the current field and advances the field by one
//! Crank–Nicolson step under constant current:
//!
//! ```text
//! i₀ = F · C_max · sqrt(s · (1 − s))
//! V  = E(s) + 2 · (RT/F) · asinh(j / (2 · i₀))
//! ```
//!
//! where `s` is the surface occupancy, `E` the equilibrium potential, and `j`
//! the applied current density.
//!
//! # Example
//!
//! ```ignore
//! use galva_solvers::discharge;
//!
//! let solution = discharge::solve_unobserved(&model, &cell, point, &config)?;
//! println!("{:?} at SOC {}", solution.status, solution.max_soc);
//! ```

mod action;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use galva_core::{
    CellParameters, DimensionlessPoint, EquilibriumPotential, Observer, constants::FARADAY,
    constraint::OpenUnitInterval,
};
use tracing::debug;
use uom::si::electric_potential::volt;

use crate::diffusion::{DiffusionStepper, Discretization};

/// Runs one discharge at `point` until the voltage reaches the cell's cutoff.
///
/// # Algorithm
///
/// 1. Derive the operating quantities of `point` and discretize the particle.
/// 2. Seed the field at the model's initial occupancy.
/// 3. For each step, up to the configured budget:
///    - Check that the surface occupancy lies in `(0, 1)`.
///    - Evaluate the cell voltage on the current field.
///    - Emit an [`Event`] to the observer.
///    - If the observer returns `StopEarly`, terminate.
///    - If the voltage is at or below the cutoff, terminate.
///    - Otherwise advance the field under the applied current.
///
/// The reported `max_soc` is the mean of the field on which the terminating
/// voltage was evaluated, so no diffusion update follows the cutoff.
///
/// # Observer
///
/// The observer receives an [`Event`] for every evaluated field, including
/// the terminal one, and may return [`Action::StopEarly`].
///
/// # Errors
///
/// Returns an error if the derived discretization is degenerate, if the
/// surface occupancy leaves `(0, 1)`, or if the voltage is not finite.
pub fn solve<P, Obs>(
    potential: &P,
    cell: &CellParameters,
    point: DimensionlessPoint,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    P: EquilibriumPotential + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let derived = point.derive(cell);
    let discretization = Discretization::new(
        config.grid_size(),
        config.time_steps(),
        derived.particle_size,
        derived.discharge_time,
        cell.geometry().curvature(),
    )?;
    let mut stepper = DiffusionStepper::new(
        discretization,
        derived.max_concentration,
        potential.initial_soc(),
    )?;

    let thermal_voltage = cell.thermal_voltage();
    let cutoff = cell.cutoff_voltage().get::<volt>();
    let current_density = derived.current_density;

    debug!(
        log_ell = point.log_ell,
        log_xi = point.log_xi,
        c_rate = derived.c_rate,
        grid_size = config.grid_size(),
        time_steps = config.time_steps(),
        "starting discharge"
    );

    let mut voltage = f64::NAN;

    for step in 0..config.max_steps() {
        let surface_soc = stepper.surface();
        if !OpenUnitInterval::contains(&surface_soc) {
            return Err(Error::Domain { step, surface_soc });
        }

        let exchange =
            FARADAY * derived.max_concentration * (surface_soc * (1.0 - surface_soc)).sqrt();
        voltage = potential.potential(surface_soc)
            + 2.0 * thermal_voltage * (current_density / (2.0 * exchange)).asinh();
        if !voltage.is_finite() {
            return Err(Error::NonFiniteVoltage { step, surface_soc });
        }

        let mean_soc = stepper.mean();
        let event = Event {
            step,
            mean_soc,
            surface_soc,
            voltage,
            field: stepper.field(),
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(finish(point, Status::StoppedByObserver, mean_soc, voltage, step));
        }

        if voltage <= cutoff {
            return Ok(finish(point, Status::ReachedCutoff, mean_soc, voltage, step));
        }

        stepper.advance(current_density);
    }

    Ok(finish(
        point,
        Status::MaxSteps,
        stepper.mean(),
        voltage,
        config.max_steps(),
    ))
}

/// Runs one discharge without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<P>(
    potential: &P,
    cell: &CellParameters,
    point: DimensionlessPoint,
    config: &Config,
) -> Result<Solution, Error>
where
    P: EquilibriumPotential + ?Sized,
{
    solve(potential, cell, point, config, ())
}

fn finish(
    point: DimensionlessPoint,
    status: Status,
    max_soc: f64,
    voltage: f64,
    steps: usize,
) -> Solution {
    debug!(
        log_ell = point.log_ell,
        log_xi = point.log_xi,
        ?status,
        steps,
        max_soc,
        voltage,
        "discharge finished"
    );

    Solution {
        status,
        max_soc,
        voltage,
        steps,
    }
}
