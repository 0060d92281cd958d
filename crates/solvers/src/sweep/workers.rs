use std::num::NonZeroUsize;

use super::SweepError;

/// Number of worker threads a sweep runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Workers {
    /// One worker per available hardware thread.
    #[default]
    All,

    /// A fixed number of workers.
    Fixed(NonZeroUsize),
}

impl Workers {
    /// Interprets a worker-count hint, where `-1` requests all hardware threads.
    ///
    /// # Errors
    ///
    /// Returns an error for zero or for negative hints other than `-1`.
    pub fn from_hint(hint: i64) -> Result<Self, SweepError> {
        match hint {
            -1 => Ok(Self::All),
            n => usize::try_from(n)
                .ok()
                .and_then(NonZeroUsize::new)
                .map(Self::Fixed)
                .ok_or(SweepError::InvalidWorkers(hint)),
        }
    }

    /// Returns the thread count to request from rayon.
    ///
    /// `All` maps to 0, which leaves the pool size to rayon.
    #[must_use]
    pub fn num_threads(self) -> usize {
        match self {
            Self::All => 0,
            Self::Fixed(n) => n.get(),
        }
    }
}

