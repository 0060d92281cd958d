/// Control actions supported by the discharge runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the run before the next diffusion update.
    StopEarly,
}
