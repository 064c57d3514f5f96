//! # Submission state
//!
//! Tracks one submit button across a single request: Idle → Submitting →
//! Idle. The DOM layer projects this onto the real button; keeping the
//! state here makes the restore semantics testable on the host.

/// Lifecycle phase of the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

/// Captured button state for one request. Created when the form enters
/// Submitting, settled exactly once when the request finishes — though
/// settling again is a harmless no-op by design of the restore contract.
#[derive(Debug, Clone)]
pub struct SubmissionState {
    saved_label: String,
    phase: Phase,
}

impl SubmissionState {
    /// Enters Submitting, capturing the button's current label so it can
    /// be restored after the request settles.
    pub fn begin(current_label: &str) -> Self {
        Self {
            saved_label: current_label.to_string(),
            phase: Phase::Submitting,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Returns to Idle and yields the label to restore. Idempotent:
    /// repeated calls keep returning the same captured label.
    pub fn finish(&mut self) -> &str {
        self.phase = Phase::Idle;
        &self.saved_label
    }
}
