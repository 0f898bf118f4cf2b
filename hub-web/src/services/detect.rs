//! Bounded Provider Detection
//!
//! Injected providers can attach to `window` after the page has already
//! evaluated, so a single synchronous probe produces false "not installed"
//! negatives. The poll below retries on a fixed interval up to a fixed
//! attempt ceiling, stops on first detection, and checks a cancellation
//! probe on every step so no timer outlives a network switch or teardown.

use gloo_timers::future::TimeoutFuture;

/// Outcome of one poll step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollStep {
    /// Provider present; stop and report success.
    Found,
    /// Owning context went away; stop silently.
    Cancelled,
    /// Attempt ceiling reached without a detection; stop and report absence.
    Exhausted,
    /// Sleep one interval and probe again.
    Continue,
}

/// Attempt bookkeeping for one detection poll.
#[derive(Clone, Copy, Debug)]
pub struct DetectPoll {
    remaining: u32,
}

impl DetectPoll {
    pub fn new(attempts: u32) -> Self {
        Self {
            remaining: attempts,
        }
    }

    /// Cancellation wins over detection so a torn-down context can never
    /// observe a late positive.
    pub fn step(&mut self, found: bool, cancelled: bool) -> PollStep {
        if cancelled {
            return PollStep::Cancelled;
        }
        if found {
            return PollStep::Found;
        }
        if self.remaining <= 1 {
            self.remaining = 0;
            return PollStep::Exhausted;
        }
        self.remaining -= 1;
        PollStep::Continue
    }
}

/// Drive a poll to completion. Returns `true` only when the probe reported
/// the provider before cancellation or exhaustion.
pub async fn wait_for_provider(
    probe: impl Fn() -> bool,
    cancelled: impl Fn() -> bool,
    attempts: u32,
    interval_ms: u32,
) -> bool {
    let mut poll = DetectPoll::new(attempts);
    loop {
        match poll.step(probe(), cancelled()) {
            PollStep::Found => return true,
            PollStep::Cancelled | PollStep::Exhausted => return false,
            PollStep::Continue => TimeoutFuture::new(interval_ms).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_stops_at_attempt_ceiling() {
        let mut poll = DetectPoll::new(3);
        assert_eq!(poll.step(false, false), PollStep::Continue);
        assert_eq!(poll.step(false, false), PollStep::Continue);
        assert_eq!(poll.step(false, false), PollStep::Exhausted);
        // Further steps stay terminal rather than underflowing.
        assert_eq!(poll.step(false, false), PollStep::Exhausted);
    }

    #[test]
    fn test_poll_stops_on_first_detection() {
        let mut poll = DetectPoll::new(5);
        assert_eq!(poll.step(false, false), PollStep::Continue);
        assert_eq!(poll.step(true, false), PollStep::Found);
    }

    #[test]
    fn test_cancellation_beats_detection() {
        let mut poll = DetectPoll::new(5);
        assert_eq!(poll.step(true, true), PollStep::Cancelled);
    }

    #[test]
    fn test_single_attempt_poll_is_one_probe() {
        let mut poll = DetectPoll::new(1);
        assert_eq!(poll.step(false, false), PollStep::Exhausted);
    }

    #[test]
    fn test_zero_attempt_poll_never_continues() {
        let mut poll = DetectPoll::new(0);
        assert_eq!(poll.step(false, false), PollStep::Exhausted);
    }
}
