//! Staff availability tracking.
//!
//! Records which staff are already committed in each (day, period) slot of
//! the current generation run. The index is shared across all years in a
//! run so a staff member teaching year 4 in Mon/period 2 can never also be
//! placed in year 2's Mon/period 2.

use std::collections::{HashMap, HashSet};

use crate::models::UNASSIGNED_STAFF;

/// Per-run record of committed staff, keyed by (day, period).
///
/// Scoped strictly to one generation invocation and discarded afterwards.
#[derive(Debug, Clone, Default)]
pub struct StaffBusyIndex {
    busy: HashMap<(usize, usize), HashSet<String>>,
}

impl StaffBusyIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `staff_name` is already committed at (day, period).
    ///
    /// Empty names and the `"TBD"` sentinel are always free.
    pub fn is_busy(&self, day: usize, period: usize, staff_name: &str) -> bool {
        if staff_name.is_empty() || staff_name == UNASSIGNED_STAFF {
            return false;
        }
        self.busy
            .get(&(day, period))
            .is_some_and(|names| names.contains(staff_name))
    }

    /// Marks `staff_name` as committed at (day, period).
    ///
    /// Sentinel and empty names are not recorded.
    pub fn mark_busy(&mut self, day: usize, period: usize, staff_name: &str) {
        if staff_name.is_empty() || staff_name == UNASSIGNED_STAFF {
            return;
        }
        self.busy
            .entry((day, period))
            .or_default()
            .insert(staff_name.to_string());
    }

    /// Number of (day, period) slots with at least one committed member.
    pub fn occupied_slot_count(&self) -> usize {
        self.busy.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_and_query() {
        let mut index = StaffBusyIndex::new();
        assert!(!index.is_busy(0, 0, "Anita"));

        index.mark_busy(0, 0, "Anita");
        assert!(index.is_busy(0, 0, "Anita"));
        assert!(!index.is_busy(0, 1, "Anita"));
        assert!(!index.is_busy(1, 0, "Anita"));
        assert!(!index.is_busy(0, 0, "Ravi"));
    }

    #[test]
    fn test_tbd_always_free() {
        let mut index = StaffBusyIndex::new();
        index.mark_busy(2, 3, "TBD");
        index.mark_busy(2, 3, "");

        assert!(!index.is_busy(2, 3, "TBD"));
        assert!(!index.is_busy(2, 3, ""));
        assert_eq!(index.occupied_slot_count(), 0);
    }

    #[test]
    fn test_multiple_staff_same_slot() {
        let mut index = StaffBusyIndex::new();
        index.mark_busy(1, 4, "Anita");
        index.mark_busy(1, 4, "Ravi");

        assert!(index.is_busy(1, 4, "Anita"));
        assert!(index.is_busy(1, 4, "Ravi"));
        assert_eq!(index.occupied_slot_count(), 1);
    }
}
