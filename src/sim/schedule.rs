//! One-shot deferred task driven by the frame clock
//!
//! The frame loop polls with the current time; the task fires on the first
//! poll at or after its due time. There is no cancellation.

use serde::{Deserialize, Serialize};

/// A task that runs once, `delay` milliseconds after being scheduled
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OneShotTask {
    due_at_ms: Option<f64>,
}

impl OneShotTask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the task. Returns false (and keeps the existing due time) if one
    /// is already pending.
    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64) -> bool {
        if self.is_pending() {
            return false;
        }
        self.due_at_ms = Some(now_ms + delay_ms);
        true
    }

    pub fn is_pending(&self) -> bool {
        self.due_at_ms.is_some()
    }

    pub fn due_at_ms(&self) -> Option<f64> {
        self.due_at_ms
    }

    /// Returns true exactly once, on the first poll at or after the due time
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.due_at_ms {
            Some(due) if now_ms >= due => {
                self.due_at_ms = None;
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
    fn test_fires_once_after_delay() {
        let mut task = OneShotTask::new();
        assert!(task.schedule(1000.0, 3000.0));
        assert!(!task.poll(3999.9));
        assert!(task.poll(4000.0));
        assert!(!task.poll(5000.0));
        assert!(!task.is_pending());
    }

    #[test]
    fn test_second_schedule_is_rejected() {
        let mut task = OneShotTask::new();
        assert!(task.schedule(0.0, 3000.0));
        assert!(!task.schedule(500.0, 3000.0));
        assert_eq!(task.due_at_ms(), Some(3000.0));
    }

    #[test]
    fn test_can_rearm_after_firing() {
        let mut task = OneShotTask::new();
        task.schedule(0.0, 10.0);
        assert!(task.poll(10.0));
        assert!(task.schedule(20.0, 10.0));
        assert_eq!(task.due_at_ms(), Some(30.0));
    }
}
