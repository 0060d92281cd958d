//! Core types for single-particle galvanostatic discharge simulation.
//!
//! This crate defines the shared vocabulary that the solvers, observers, and
//! entry points build on:
//!
//! - [`constants`]: the few physical constants the physics kernel uses
//! - [`constraint`]: numeric invariants checked once at construction
//! - [`Geometry`] and [`CellParameters`]: the immutable description of a cell
//! - [`DimensionlessPoint`]: one `(log ℓ, log Ξ)` pair and the quantities
//!   derived from it
//! - [`KineticParameters`]: conversion between physical and dimensionless
//!   parameters
//! - [`potential`]: equilibrium potential models
//! - [`Observer`]: receives solver events and optionally returns control actions

pub mod constants;
pub mod constraint;
pub mod potential;

mod cell;
mod geometry;
mod kinetics;
mod observer;
mod point;

pub use cell::{CellError, CellParameters};
pub use geometry::{Geometry, GeometryError};
pub use kinetics::KineticParameters;
pub use observer::Observer;
pub use point::{DerivedQuantities, DimensionlessPoint};
pub use potential::{EquilibriumPotential, Frumkin, IsothermTable, PotentialModel};
