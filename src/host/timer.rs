use std::time::{Duration, Instant};

/// Cancellable one-shot deadline for a deferred persist. Owned by whoever
/// drives the UI loop; it is polled, never threaded.
#[derive(Debug, Clone)]
pub struct PersistTimer {
    delay: Duration,
    due: Option<Instant>,
}

impl PersistTimer {
    pub fn new(delay: Duration) -> Self {
        PersistTimer { delay, due: None }
    }

    /// Arm the timer at `now + delay`. Re-arming while pending keeps the
    /// earlier deadline, so a stream of toggles still persists.
    pub fn schedule(&mut self, now: Instant) {
        let due = now + self.delay;
        self.due = Some(self.due.map_or(due, |d| d.min(due)));
    }

    pub fn cancel(&mut self) {
        self.due = None;
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    /// Disarm and return true if the deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_delay() {
        let start = Instant::now();
        let mut timer = PersistTimer::new(Duration::from_millis(300));
        timer.schedule(start);
        assert!(!timer.take_due(start + Duration::from_millis(299)));
        assert!(timer.take_due(start + Duration::from_millis(300)));
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_cancel_disarms() {
        let start = Instant::now();
        let mut timer = PersistTimer::new(Duration::from_millis(10));
        timer.schedule(start);
        timer.cancel();
        assert!(!timer.take_due(start + Duration::from_secs(1)));
    }

    #[test]
    fn test_rearm_keeps_earliest_deadline() {
        let start = Instant::now();
        let mut timer = PersistTimer::new(Duration::from_millis(300));
        timer.schedule(start);
        timer.schedule(start + Duration::from_millis(200));
        assert!(timer.take_due(start + Duration::from_millis(300)));
    }
}
