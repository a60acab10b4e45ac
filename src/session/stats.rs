//! Drag session counters for diagnostics and throttle tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected by a drag controller.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Drags started.
    pub drags_started: u32,

    /// `update` calls during a drag.
    pub updates_received: u32,

    /// Updates that recomputed hover (not throttled).
    pub updates_processed: u32,

    /// Hover transitions emitted.
    pub hover_changes: u32,

    /// Drops whose action ran successfully.
    pub drops_succeeded: u32,

    /// `end` calls that did not drop (including misuse).
    pub drops_failed: u32,

    /// Validator errors coerced to "invalid".
    pub validator_errors: u32,
}

impl SessionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fraction of updates that did real work.
    #[must_use]
    pub fn processed_ratio(&self) -> f64 {
        if self.updates_received == 0 {
            0.0
        } else {
            f64::from(self.updates_processed) / f64::from(self.updates_received)
        }
    }

    /// Fraction of drop attempts that succeeded.
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        let attempts = self.drops_succeeded + self.drops_failed;
        if attempts == 0 {
            0.0
        } else {
            f64::from(self.drops_succeeded) / f64::from(attempts)
        }
    }
}
