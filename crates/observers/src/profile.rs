//! Voltage-profile recording for a single discharge run.
//!
//! [`ProfileRecorder`] samples `(SOC, voltage)` pairs every
//! `time_steps / sample_count` steps, skipping the seeded state at step 0,
//! and keeps the last
//! event it saw so the terminal state can close the trajectory. It also
//! captures the concentration field the first time the mean SOC comes within
//! [`SNAPSHOT_TOLERANCE`] of a target.
//!
//! # Example
//!
//! ```ignore
//! let mut recorder = ProfileRecorder::new(100, config.time_steps(), 0.5)?;
//! discharge::solve(&model, &cell, point, &config, &mut recorder)?;
//! let profile = recorder.finish();
//! ```

use galva_core::Observer;
use thiserror::Error;

use crate::traits::{HasField, HasSoc, HasStep, HasVoltage};

/// Half-width of the SOC band that triggers the snapshot.
pub const SNAPSHOT_TOLERANCE: f64 = 1.0e-4;

/// One point of a discharge trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub soc: f64,
    pub voltage: f64,
}

/// Radial concentration profile at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Radial position of each node divided by the particle radius.
    pub radius: Vec<f64>,

    /// Occupancy fraction at each node.
    pub concentration: Vec<f64>,
}

/// Trajectory and snapshot collected by a [`ProfileRecorder`].
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Cadence samples followed by the terminal sample.
    pub trajectory: Vec<Sample>,

    /// Field captured at the target SOC, if the run passed through it.
    pub snapshot: Option<Snapshot>,
}

/// Errors that can occur when creating a [`ProfileRecorder`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RecorderError {
    #[error("sample_count must be between 1 and time_steps ({time_steps}), got {sample_count}")]
    SampleCount {
        sample_count: usize,
        time_steps: usize,
    },

    #[error("target SOC must be finite, got {0}")]
    TargetSoc(f64),
}

/// Observer that records a voltage profile and one concentration snapshot.
///
/// The finished trajectory holds at most `sample_count` entries: up to
/// `sample_count − 1` cadence samples and the terminal sample.
#[derive(Debug, Clone)]
pub struct ProfileRecorder {
    cadence: usize,
    capacity: usize,
    target_soc: f64,
    trajectory: Vec<(usize, Sample)>,
    last: Option<(usize, Sample)>,
    snapshot: Option<Snapshot>,
}

impl ProfileRecorder {
    /// Creates a recorder for a run with `time_steps` time points.
    ///
    /// # Errors
    ///
    /// Returns an error if `sample_count` is zero or exceeds `time_steps`,
    /// or if `target_soc` is not finite.
    pub fn new(
        sample_count: usize,
        time_steps: usize,
        target_soc: f64,
    ) -> Result<Self, RecorderError> {
        if sample_count == 0 || sample_count > time_steps {
            return Err(RecorderError::SampleCount {
                sample_count,
                time_steps,
            });
        }
        if !target_soc.is_finite() {
            return Err(RecorderError::TargetSoc(target_soc));
        }

        Ok(Self {
            cadence: time_steps / sample_count,
            capacity: sample_count,
            target_soc,
            trajectory: Vec::with_capacity(sample_count),
            last: None,
            snapshot: None,
        })
    }

    /// Returns the number of steps between cadence samples.
    #[must_use]
    pub fn cadence(&self) -> usize {
        self.cadence
    }

    /// Records one event.
    pub fn record<E>(&mut self, event: &E)
    where
        E: HasStep + HasSoc + HasVoltage + HasField,
    {
        let step = event.step();
        let sample = Sample {
            soc: event.soc(),
            voltage: event.voltage(),
        };

        if step > 0 && step % self.cadence == 0 && self.trajectory.len() + 1 < self.capacity {
            self.trajectory.push((step, sample));
        }

        if self.snapshot.is_none() && (sample.soc - self.target_soc).abs() < SNAPSHOT_TOLERANCE {
            let field = event.field();
            let last = field.len().saturating_sub(1).max(1) as f64;
            self.snapshot = Some(Snapshot {
                radius: (0..field.len()).map(|i| i as f64 / last).collect(),
                concentration: field.to_vec(),
            });
        }

        self.last = Some((step, sample));
    }

    /// Closes the trajectory with the last recorded event and returns the profile.
    #[must_use]
    pub fn finish(self) -> Profile {
        let mut trajectory = self.trajectory;

        if let Some((step, sample)) = self.last {
            let already_sampled = trajectory.last().is_some_and(|&(s, _)| s == step);
            if !already_sampled {
                trajectory.push((step, sample));
            }
        }

        Profile {
            trajectory: trajectory.into_iter().map(|(_, sample)| sample).collect(),
            snapshot: self.snapshot,
        }
    }
}

impl<E, A> Observer<E, A> for ProfileRecorder
where
    E: HasStep + HasSoc + HasVoltage + HasField,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

/// Allows `&mut ProfileRecorder` to be passed to solvers that take an
/// observer by value, so [`ProfileRecorder::finish`] can be called after the
/// run completes.
impl<E, A> Observer<E, A> for &mut ProfileRecorder
where
    E: HasStep + HasSoc + HasVoltage + HasField,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}
