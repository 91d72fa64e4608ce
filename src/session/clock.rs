//! Explicit tick handle for the session's background clock.
//!
//! The host drives `LabSession::tick` on a fixed cadence; this handle is
//! what makes that cadence cancelable. Once stopped, every further tick is
//! refused, so a stale driver can never mutate a superseded session. Ticks
//! are serialized by construction - the whole model is single-threaded.

#[derive(Debug, Clone)]
pub struct LabClock {
    interval_secs: u64,
    active: bool,
    ticks: u64,
}

impl LabClock {
    pub fn new(interval_secs: u64) -> LabClock {
        LabClock {
            interval_secs,
            active: true,
            ticks: 0,
        }
    }

    pub fn interval_secs(&self) -> u64 {
        self.interval_secs
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Record one tick. Returns false (and records nothing) once stopped.
    pub fn tick(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.ticks += 1;
        true
    }

    /// Stop the clock. Idempotent; used on teardown.
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Fresh start after an experiment reset.
    pub fn restart(&mut self) {
        self.active = true;
        self.ticks = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_accumulate_while_active() {
        let mut clock = LabClock::new(1);
        assert!(clock.tick());
        assert!(clock.tick());
        assert_eq!(clock.ticks(), 2);
    }

    #[test]
    fn test_stopped_clock_refuses_ticks() {
        let mut clock = LabClock::new(1);
        clock.tick();
        clock.stop();
        assert!(!clock.tick());
        assert!(!clock.tick());
        assert_eq!(clock.ticks(), 1);
        assert!(!clock.is_active());
    }

    #[test]
    fn test_restart_clears_tick_count() {
        let mut clock = LabClock::new(1);
        clock.tick();
        clock.stop();
        clock.restart();
        assert!(clock.is_active());
        assert_eq!(clock.ticks(), 0);
        assert!(clock.tick());
    }
}
