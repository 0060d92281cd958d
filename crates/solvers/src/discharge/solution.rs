/// Indicates how a discharge run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The voltage fell to or below the cutoff.
    ReachedCutoff,

    /// The step budget ran out before the cutoff was reached.
    MaxSteps,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a discharge run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// How the run terminated.
    pub status: Status,

    /// Mean occupancy of the last field whose voltage was evaluated.
    ///
    /// For [`Status::ReachedCutoff`] this is the field on which the voltage
    /// first reached the cutoff. For [`Status::MaxSteps`] it is the field
    /// after the final update.
    pub max_soc: f64,

    /// Last evaluated cell voltage, in volts.
    pub voltage: f64,

    /// Number of diffusion updates applied.
    pub steps: usize,
}
