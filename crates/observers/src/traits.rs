//! Capability traits for reusable observers.
//!
//! These traits abstract over the solver's event and action types, so
//! observers can be written once against the capabilities they need.
//!
//! # Event traits
//!
//! - [`HasStep`]: events that carry a step number
//! - [`HasSoc`]: events that carry a mean state of charge
//! - [`HasVoltage`]: events that carry a cell voltage
//! - [`HasField`]: events that carry the full concentration field
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use galva_core::Observer;
//! use galva_observers::traits::{CanStopEarly, HasSoc};
//!
//! struct StopAtSoc {
//!     limit: f64,
//! }
//!
//! impl<E: HasSoc, A: CanStopEarly> Observer<E, A> for StopAtSoc {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.soc() >= self.limit).then(A::stop_early)
//!     }
//! }
//! ```

use galva_solvers::discharge;

/// An event that carries a step number.
pub trait HasStep {
    fn step(&self) -> usize;
}

/// An event that carries the mean state of charge of the particle.
pub trait HasSoc {
    fn soc(&self) -> f64;
}

/// An event that carries a cell voltage, in volts.
pub trait HasVoltage {
    fn voltage(&self) -> f64;
}

/// An event that carries the concentration field, center first.
pub trait HasField {
    fn field(&self) -> &[f64];
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- discharge::Event ---

impl HasStep for discharge::Event<'_> {
    fn step(&self) -> usize {
        self.step
    }
}

impl HasSoc for discharge::Event<'_> {
    fn soc(&self) -> f64 {
        self.mean_soc
    }
}

impl HasVoltage for discharge::Event<'_> {
    fn voltage(&self) -> f64 {
        self.voltage
    }
}

impl HasField for discharge::Event<'_> {
    fn field(&self) -> &[f64] {
        self.field
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for discharge::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
