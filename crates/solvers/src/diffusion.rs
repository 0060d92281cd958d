//! Crank–Nicolson stepping of radial diffusion in a single particle.
//!
//! The particle is discretized from its center (node 0) to its surface
//! (node `n − 1`) with uniform spacing `dx`. For curvature coefficient `κ`
//! each step solves
//!
//! ```text
//! −sub[i]·c'[i−1] + α₀·c'[i] − add[i]·c'[i+1]
//!     = sub[i]·c[i−1] + γ₀·c[i] + add[i]·c[i+1]
//!
//! α = dt / (2·dx²)     β = κ·dt / (4·dx)
//! α₀ = 1 + 2α          γ₀ = 1 − 2α
//! add[i] = α + β/r[i]  sub[i] = α − β/r[i]
//! ```
//!
//! The center row mirrors its neighbor (zero flux, both couplings `2α`).
//! The surface row mirrors its inner neighbor and carries the applied
//! current as an inhomogeneous flux term.

use galva_core::{constants::FARADAY, constraint::OpenUnitInterval};
use thiserror::Error;

use crate::thomas::{ThomasError, Tridiagonal};

/// Space and time steps of one discharge run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Discretization {
    grid_size: usize,
    space_step: f64,
    time_step: f64,
    alpha: f64,
    beta: f64,
}

/// Errors that can occur when setting up a diffusion stepper.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DiffusionError {
    #[error("grid needs at least 3 nodes, got {0}")]
    GridTooSmall(usize),

    #[error("at least 2 time steps are needed, got {0}")]
    TooFewTimeSteps(usize),

    #[error("{name} must be finite and positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("curvature coefficient must be finite, got {0}")]
    Curvature(f64),

    #[error("initial occupancy must lie in (0, 1), got {0}")]
    InitialSoc(f64),

    #[error(transparent)]
    Thomas(#[from] ThomasError),
}

fn positive(name: &'static str, value: f64) -> Result<f64, DiffusionError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(DiffusionError::NotPositive { name, value })
    }
}

impl Discretization {
    /// Discretizes a particle of `particle_size` over `grid_size` nodes and a
    /// full discharge of `discharge_time` seconds over `time_steps` steps.
    ///
    /// The grid spans half the particle size, from center to surface.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid or step counts are too small, or if any
    /// resulting step is not finite and positive.
    pub fn new(
        grid_size: usize,
        time_steps: usize,
        particle_size: f64,
        discharge_time: f64,
        curvature: f64,
    ) -> Result<Self, DiffusionError> {
        if grid_size < 3 {
            return Err(DiffusionError::GridTooSmall(grid_size));
        }
        if time_steps < 2 {
            return Err(DiffusionError::TooFewTimeSteps(time_steps));
        }
        if !curvature.is_finite() {
            return Err(DiffusionError::Curvature(curvature));
        }

        let space_step = positive("space step", 0.5 * particle_size / (grid_size - 1) as f64)?;
        let time_step = positive("time step", discharge_time / (time_steps - 1) as f64)?;

        Ok(Self {
            grid_size,
            space_step,
            time_step,
            alpha: time_step / (2.0 * space_step * space_step),
            beta: curvature * time_step / (4.0 * space_step),
        })
    }

    #[must_use]
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Returns the radial node spacing, in cm.
    #[must_use]
    pub fn space_step(&self) -> f64 {
        self.space_step
    }

    /// Returns the time step, in seconds.
    #[must_use]
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    #[must_use]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Returns the radial position of node `i`.
    #[must_use]
    pub fn position(&self, i: usize) -> f64 {
        i as f64 * self.space_step
    }

    /// Builds the implicit-side matrix for this discretization.
    fn system(&self) -> Result<Tridiagonal, ThomasError> {
        let n = self.grid_size;
        let alpha = self.alpha;

        let mut lower = vec![0.0; n];
        let mut upper = vec![0.0; n];

        upper[0] = 2.0 * alpha;
        for i in 1..n - 1 {
            let skew = self.beta / self.position(i);
            lower[i] = alpha - skew;
            upper[i] = alpha + skew;
        }
        lower[n - 1] = 2.0 * alpha;

        Tridiagonal::new(lower, vec![1.0 + 2.0 * alpha; n], upper)
    }
}

/// Owns the concentration field of one run and advances it in time.
///
/// All buffers are sized once at construction; [`advance`](Self::advance)
/// does not allocate.
#[derive(Debug, Clone)]
pub struct DiffusionStepper {
    discretization: Discretization,
    system: Tridiagonal,
    explicit_diag: f64,
    surface_flux_weight: f64,
    field: Vec<f64>,
    rhs: Vec<f64>,
    scratch: Vec<f64>,
}

impl DiffusionStepper {
    /// Creates a stepper with a uniform field at `initial_soc`.
    ///
    /// `max_concentration` (mol/cm³) converts the applied current density
    /// into an occupancy flux at the surface.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial_soc` is outside `(0, 1)`, if
    /// `max_concentration` is not finite and positive, or if the implicit
    /// system cannot be factored.
    pub fn new(
        discretization: Discretization,
        max_concentration: f64,
        initial_soc: f64,
    ) -> Result<Self, DiffusionError> {
        if !OpenUnitInterval::contains(&initial_soc) {
            return Err(DiffusionError::InitialSoc(initial_soc));
        }
        let max_concentration = positive("maximum concentration", max_concentration)?;

        let n = discretization.grid_size();
        let system = discretization.system()?;

        let surface_add =
            discretization.alpha() + discretization.beta() / discretization.position(n - 1);
        let surface_flux_weight =
            surface_add * 4.0 * discretization.space_step() / (FARADAY * max_concentration);

        Ok(Self {
            discretization,
            system,
            explicit_diag: 1.0 - 2.0 * discretization.alpha(),
            surface_flux_weight,
            field: vec![initial_soc; n],
            rhs: vec![0.0; n],
            scratch: vec![0.0; n],
        })
    }

    /// Advances the field by one time step under `current_density` (A/cm²).
    ///
    /// Negative current densities insert lithium through the surface.
    pub fn advance(&mut self, current_density: f64) {
        let n = self.field.len();
        let lower = self.system.lower();
        let upper = self.system.upper();
        let c = &self.field;

        self.rhs[0] = self.explicit_diag * c[0] + upper[0] * c[1];
        for i in 1..n - 1 {
            self.rhs[i] = lower[i] * c[i - 1] + self.explicit_diag * c[i] + upper[i] * c[i + 1];
        }
        self.rhs[n - 1] = lower[n - 1] * c[n - 2] + self.explicit_diag * c[n - 1]
            - self.surface_flux_weight * current_density;

        self.system.solve(&self.rhs, &mut self.scratch, &mut self.field);
    }

    /// Returns the concentration field as occupancy fractions, center first.
    #[must_use]
    pub fn field(&self) -> &[f64] {
        &self.field
    }

    /// Returns the occupancy at the surface node.
    #[must_use]
    pub fn surface(&self) -> f64 {
        self.field[self.field.len() - 1]
    }

    /// Returns the arithmetic mean occupancy over all nodes.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.field.iter().sum::<f64>() / self.field.len() as f64
    }

    #[must_use]
    pub fn discretization(&self) -> &Discretization {
        &self.discretization
    }
}
