use thiserror::Error;

/// Configuration for a discharge run.
///
/// `time_steps` sets the time step: a full theoretical discharge spans
/// `time_steps − 1` steps. `max_steps` bounds the run, which normally ends
/// much earlier at the voltage cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    grid_size: usize,
    time_steps: usize,
    max_steps: usize,
}

/// Errors that can occur when validating a discharge config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid_size must be at least 3, got {0}")]
    GridSize(usize),

    #[error("time_steps must be at least 2, got {0}")]
    TimeSteps(usize),

    #[error("max_steps must be positive")]
    MaxSteps,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_size: 1000,
            time_steps: 100_000,
            max_steps: 200_000,
        }
    }
}

impl Config {
    /// Creates a new config with a step budget of twice `time_steps`.
    ///
    /// # Errors
    ///
    /// Returns an error if `grid_size < 3` or `time_steps < 2`.
    pub fn new(grid_size: usize, time_steps: usize) -> Result<Self, ConfigError> {
        if grid_size < 3 {
            return Err(ConfigError::GridSize(grid_size));
        }
        if time_steps < 2 {
            return Err(ConfigError::TimeSteps(time_steps));
        }

        Ok(Self {
            grid_size,
            time_steps,
            max_steps: time_steps.saturating_mul(2),
        })
    }

    /// Replaces the step budget.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_steps` is zero.
    pub fn with_max_steps(self, max_steps: usize) -> Result<Self, ConfigError> {
        if max_steps == 0 {
            return Err(ConfigError::MaxSteps);
        }
        Ok(Self { max_steps, ..self })
    }

    /// Returns the number of radial nodes.
    #[must_use]
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Returns the number of time points spanning a full discharge.
    #[must_use]
    pub fn time_steps(&self) -> usize {
        self.time_steps
    }

    /// Returns the maximum number of diffusion updates per run.
    #[must_use]
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_defaults_to_twice_time_steps() {
        let config = Config::new(50, 4000).expect("valid");
        assert_eq!(config.max_steps(), 8000);
        assert_eq!(Config::default().max_steps(), 2 * Config::default().time_steps());
    }

    #[test]
    fn rejects_small_counts() {
        assert_eq!(Config::new(2, 100), Err(ConfigError::GridSize(2)));
        assert_eq!(Config::new(10, 1), Err(ConfigError::TimeSteps(1)));
        assert_eq!(
            Config::new(10, 100).and_then(|c| c.with_max_steps(0)),
            Err(ConfigError::MaxSteps)
        );
    }
}
