//! Deploy timeline - the fixed sequence of timed notifications
//!
//! The simulated deploy is pure data: an ordered table of
//! (offset, message, kind) triples. `DeployRun` walks the table against
//! explicitly passed instants, so tests drive it with fabricated times
//! instead of sleeping.

use crate::core::types::LogKind;
use std::time::{Duration, Instant};

/// One scheduled notification in the simulated deploy
#[derive(Debug, Clone, Copy)]
pub struct TimelineStep {
    /// Offset from the start of the run
    pub offset: Duration,
    pub message: &'static str,
    pub kind: LogKind,
}

/// The simulated build/deploy progression
///
/// The first step fires immediately on start; when the last one fires the
/// run is over and the session clears its busy flag. There is no failure
/// or cancellation path: once started, every step fires.
pub const DEPLOY_TIMELINE: [TimelineStep; 5] = [
    TimelineStep {
        offset: Duration::ZERO,
        message: "Analyzing project structure...",
        kind: LogKind::Info,
    },
    TimelineStep {
        offset: Duration::from_millis(800),
        message: "Detected React + Vite configuration",
        kind: LogKind::Success,
    },
    TimelineStep {
        offset: Duration::from_millis(1500),
        message: "Optimizing assets...",
        kind: LogKind::Info,
    },
    TimelineStep {
        offset: Duration::from_millis(2500),
        message: "Building production bundle...",
        kind: LogKind::Warning,
    },
    TimelineStep {
        offset: Duration::from_millis(4000),
        message: "Deployment successful! https://autodeploy-agent.vercel.app",
        kind: LogKind::Success,
    },
];

/// An in-flight walk of `DEPLOY_TIMELINE`
///
/// Steps fire in table order even if the caller stalls past several
/// offsets: one `due` call then returns all of them at once, preserving
/// log order.
#[derive(Debug, Clone)]
pub struct DeployRun {
    started: Instant,
    next: usize,
}

impl DeployRun {
    /// Begin a run at `now`; the immediate step is returned by the first
    /// `due` call rather than here.
    pub fn start(now: Instant) -> Self {
        Self { started: now, next: 0 }
    }

    /// Steps whose offsets have elapsed by `now`, in table order
    pub fn due(&mut self, now: Instant) -> Vec<TimelineStep> {
        let elapsed = now.duration_since(self.started);
        let mut fired = Vec::new();
        while self.next < DEPLOY_TIMELINE.len() {
            let step = DEPLOY_TIMELINE[self.next];
            if elapsed < step.offset {
                break;
            }
            fired.push(step);
            self.next += 1;
        }
        fired
    }

    /// True once every step has been returned by `due`
    pub fn finished(&self) -> bool {
        self.next >= DEPLOY_TIMELINE.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_step_fires_immediately() {
        let start = Instant::now();
        let mut run = DeployRun::start(start);

        let fired = run.due(start);
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].message, "Analyzing project structure...");
        assert!(!run.finished());
    }

    #[test]
    fn test_steps_fire_at_offsets() {
        let start = Instant::now();
        let mut run = DeployRun::start(start);
        run.due(start);

        assert!(run.due(start + Duration::from_millis(799)).is_empty());

        let fired = run.due(start + Duration::from_millis(800));
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].message, "Detected React + Vite configuration");
    }

    #[test]
    fn test_stalled_caller_gets_all_due_steps_in_order() {
        let start = Instant::now();
        let mut run = DeployRun::start(start);

        let fired = run.due(start + Duration::from_secs(10));
        assert_eq!(fired.len(), DEPLOY_TIMELINE.len());
        for (fired, expected) in fired.iter().zip(DEPLOY_TIMELINE.iter()) {
            assert_eq!(fired.message, expected.message);
        }
        assert!(run.finished());
    }

    #[test]
    fn test_due_after_finish_is_empty() {
        let start = Instant::now();
        let mut run = DeployRun::start(start);
        run.due(start + Duration::from_secs(10));

        assert!(run.due(start + Duration::from_secs(20)).is_empty());
    }
}
