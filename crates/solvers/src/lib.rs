//! Numerical solvers for single-particle galvanostatic discharge.
//!
//! # Modules
//!
//! - [`thomas`]: direct O(n) elimination for tridiagonal systems
//! - [`diffusion`]: Crank–Nicolson stepping of the radial diffusion equation
//! - [`discharge`]: constant-current discharge down to a cutoff voltage
//! - [`sweep`]: independent discharges over a `(log ℓ, log Ξ)` grid, in parallel

pub mod diffusion;
pub mod discharge;
pub mod sweep;
pub mod thomas;

#[cfg(test)]
pub(crate) mod test_utils;
