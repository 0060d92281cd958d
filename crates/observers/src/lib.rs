//! Reusable observers for galva discharge runs.
//!
//! This crate provides [`Observer`] implementations and the capability traits
//! they are written against.
//!
//! # Modules
//!
//! - [`traits`]: capability traits over discharge events and actions
//!   ([`HasStep`], [`HasSoc`], [`HasVoltage`], [`HasField`], [`CanStopEarly`])
//! - [`profile`]: [`ProfileRecorder`], which samples a voltage trajectory
//!   and captures one concentration snapshot
//!
//! [`Observer`]: galva_core::Observer
//! [`HasStep`]: traits::HasStep
//! [`HasSoc`]: traits::HasSoc
//! [`HasVoltage`]: traits::HasVoltage
//! [`HasField`]: traits::HasField
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`ProfileRecorder`]: profile::ProfileRecorder

pub mod profile;
pub mod traits;
