//! Instance-owned timers for coalescing event storms.
//!
//! Neither timer reads a clock. The host passes a monotonic millisecond timestamp on every call
//! and polls again once [`Throttle::deadline`] / [`Debounce::deadline`] has passed.

/// A leading + trailing throttle.
///
/// The first event of a burst runs immediately. Events inside the following interval are folded
/// into one trailing run, due `interval_ms` after the last run.
#[derive(Clone, Debug)]
pub struct Throttle {
    interval_ms: u64,
    last_run_ms: Option<u64>,
    pending: bool,
}

impl Throttle {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_run_ms: None,
            pending: false,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Records an event. Returns `true` when the handler should run now (leading edge).
    pub fn hit(&mut self, now_ms: u64) -> bool {
        match self.last_run_ms {
            Some(last) if now_ms.saturating_sub(last) < self.interval_ms => {
                self.pending = true;
                false
            }
            _ => {
                self.last_run_ms = Some(now_ms);
                self.pending = false;
                true
            }
        }
    }

    /// Returns `true` when the trailing run is due; the caller must run the handler.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let Some(deadline) = self.deadline() else {
            return false;
        };
        if now_ms < deadline {
            return false;
        }
        self.last_run_ms = Some(now_ms);
        self.pending = false;
        true
    }

    /// When the pending trailing run becomes due, if any.
    pub fn deadline(&self) -> Option<u64> {
        if !self.pending {
            return None;
        }
        Some(
            self.last_run_ms
                .map_or(0, |last| last.saturating_add(self.interval_ms)),
        )
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Drops a pending trailing run. The current interval still applies to new events.
    pub fn cancel(&mut self) {
        self.pending = false;
    }
}

/// A trailing debounce that keeps the latest value of a burst.
///
/// Every [`Debounce::hit`] replaces the value and pushes the deadline back; the timer is reset,
/// never stacked.
#[derive(Clone, Debug)]
pub struct Debounce<V> {
    delay_ms: u64,
    deadline_ms: Option<u64>,
    value: Option<V>,
}

impl<V> Debounce<V> {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            deadline_ms: None,
            value: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn hit(&mut self, now_ms: u64, value: V) {
        self.deadline_ms = Some(now_ms.saturating_add(self.delay_ms));
        self.value = Some(value);
    }

    /// Returns the latest value once the burst has been quiet for `delay_ms`.
    pub fn poll(&mut self, now_ms: u64) -> Option<V> {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                self.value.take()
            }
            _ => None,
        }
    }

    pub fn deadline(&self) -> Option<u64> {
        self.deadline_ms
    }

    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn cancel(&mut self) {
        self.deadline_ms = None;
        self.value = None;
    }
}
