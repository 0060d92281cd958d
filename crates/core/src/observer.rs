/// Watches a running simulation and optionally steers it.
///
/// A discharge run emits one event per time step. An observer can sample
/// those events (voltage curves, concentration snapshots, log lines) or ask
/// the run to stop by returning `Some(action)`. Returning `None` leaves the
/// run unchanged.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, which is the usual
/// way to attach borrowed recording state. `()` is the observer that never
/// intervenes.
pub trait Observer<E, A> {
    /// Inspects one event and returns the action to apply, if any.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
