//! Cancellable delayed-execution primitive for autosave coalescing.
//!
//! # Responsibility
//! - Collapse bursts of triggering events into one deferred action.
//!
//! # Invariants
//! - At most one pending execution exists per debouncer.
//! - Each new signal cancels the previous pending deadline and schedules
//!   a fresh one; only the most recent pending action can fire.
//! - Time is explicit epoch/loop milliseconds supplied by the host event
//!   loop, keeping behavior deterministic under test.

/// One debounced action slot.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    delay_ms: u64,
    deadline_ms: Option<u64>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            deadline_ms: None,
        }
    }

    /// Records a triggering event at `now_ms`, cancelling any previously
    /// scheduled execution and rescheduling after the configured delay.
    pub fn signal(&mut self, now_ms: u64) {
        self.deadline_ms = Some(now_ms + self.delay_ms);
    }

    /// Drops the pending execution, if any.
    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// Returns `true` exactly once when the quiet period has elapsed.
    ///
    /// The pending slot is consumed, so the caller runs the action at
    /// most once per scheduled deadline.
    pub fn fire_due(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Debouncer;

    #[test]
    fn rapid_signals_coalesce_into_one_firing() {
        let mut debouncer = Debouncer::new(300);
        for offset in 0..5 {
            debouncer.signal(1_000 + offset * 50);
        }

        // Last signal at 1200 -> deadline 1500.
        assert!(!debouncer.fire_due(1_499));
        assert!(debouncer.fire_due(1_500));
        assert!(!debouncer.fire_due(2_000));
    }

    #[test]
    fn cancel_discards_pending_execution() {
        let mut debouncer = Debouncer::new(300);
        debouncer.signal(0);
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        assert!(!debouncer.fire_due(10_000));
    }

    #[test]
    fn new_signal_supersedes_earlier_deadline() {
        let mut debouncer = Debouncer::new(300);
        debouncer.signal(0);
        debouncer.signal(1_000);
        assert!(!debouncer.fire_due(300));
        assert!(debouncer.fire_due(1_300));
    }
}
