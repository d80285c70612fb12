//! Generation shortfall counters.
//!
//! Placement failures never abort a run; they surface here instead. A
//! regeneration with a different random draw may cure any of these, which
//! is why they are counters rather than errors.

use serde::{Deserialize, Serialize};

/// What a generation run could not place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Lab requirements left entirely unplaced (no feasible block found).
    pub unplaced_labs: usize,
    /// Theory hours dropped after the attempt budget ran out.
    pub unplaced_theory_hours: u32,
    /// Periods the joint resolver filled with Library after exhausting
    /// its retry budget.
    pub conflict_fallbacks: usize,
}

impl GenerationReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every requirement was placed in full.
    pub fn is_complete(&self) -> bool {
        self.unplaced_labs == 0 && self.unplaced_theory_hours == 0 && self.conflict_fallbacks == 0
    }
}
