/// Delay-and-coalesce helper: a burst of calls collapses into one trailing
/// delivery.
///
/// This is tick-driven, like everything else in this crate: there are no
/// threads or timers. `call` restarts the delay window and stores the
/// payload (last call wins); `poll` hands the payload out exactly once after
/// the window elapses with no further call. Nothing is propagated from the
/// wrapped execution beyond the payload itself.
#[derive(Clone, Debug)]
pub struct Debounce<T = ()> {
    delay_ms: u64,
    pending: Option<(T, u64)>,
}

impl<T> Debounce<T> {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Changes the delay window. An already pending delivery keeps its
    /// original call time but is judged against the new delay.
    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.delay_ms = delay_ms;
    }

    /// Schedules (or reschedules) a delivery of `value` once `delay_ms`
    /// passes without another call.
    pub fn call(&mut self, value: T, now_ms: u64) {
        self.pending = Some((value, now_ms));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Delivers the pending payload when the window has elapsed.
    ///
    /// Returns `None` while the window is still open or when nothing is
    /// pending; a delivered payload is not delivered again.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        let (_, called_ms) = self.pending.as_ref()?;
        if now_ms.saturating_sub(*called_ms) < self.delay_ms {
            return None;
        }
        self.pending.take().map(|(value, _)| value)
    }

    /// Drops any pending delivery. Used on teardown so a settled timer never
    /// fires into a dismantled component.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
