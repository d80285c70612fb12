//! Week grid (solution) model.
//!
//! A week grid is the solution to one year's timetable problem: 6 days
//! (Mon–Sat) of 8 periods each, 48 slots total. During placement a slot is
//! either empty or holds exactly one assignment; after normalization every
//! slot is populated (empty slots become library periods), so downstream
//! consumers never see holes.
//!
//! # Reference
//! Schaerf (1999), "A Survey of Automated Timetabling"

use serde::{Deserialize, Serialize};

/// Teaching days per week (Mon–Sat).
pub const DAYS_PER_WEEK: usize = 6;
/// Periods per teaching day.
pub const PERIODS_PER_DAY: usize = 8;
/// Day labels, indexed by day position.
pub const DAY_NAMES: [&str; DAYS_PER_WEEK] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// How a slot came to be filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotKind {
    /// Placed as part of a contiguous lab block.
    Lab,
    /// Placed as a scattered theory period.
    Theory,
    /// Overwritten by an interactive manual edit.
    Manual,
    /// Free period (library). Produced by normalization or manual clearing.
    Empty,
}

/// One filled slot: a subject, its staff member, and how it was placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAssignment {
    /// Subject name shown in the cell.
    pub subject: String,
    /// Staff name, or `"-"` for free periods.
    pub staff: String,
    /// Placement provenance.
    pub kind: SlotKind,
}

impl SlotAssignment {
    /// Creates a new assignment.
    pub fn new(subject: impl Into<String>, staff: impl Into<String>, kind: SlotKind) -> Self {
        Self {
            subject: subject.into(),
            staff: staff.into(),
            kind,
        }
    }

    /// The default free-period filler.
    pub fn library() -> Self {
        Self::new("Library", "-", SlotKind::Empty)
    }

    /// Whether this slot is a free (library) period.
    pub fn is_library(&self) -> bool {
        self.kind == SlotKind::Empty
    }
}

/// One day's row of the grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySchedule {
    /// Day label ("Mon".."Sat").
    pub day: String,
    /// The day's periods. `None` = not yet placed.
    pub periods: Vec<Option<SlotAssignment>>,
}

/// A full week of slots for one academic year.
///
/// Owned exclusively by the generation run that creates it and replaced
/// wholesale on each regeneration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekGrid {
    /// Day rows, Monday first.
    pub days: Vec<DaySchedule>,
}

impl WeekGrid {
    /// Creates an empty grid (all 48 slots unplaced).
    pub fn new() -> Self {
        Self {
            days: DAY_NAMES
                .iter()
                .map(|&day| DaySchedule {
                    day: day.to_string(),
                    periods: vec![None; PERIODS_PER_DAY],
                })
                .collect(),
        }
    }

    /// Returns the assignment at (day, period), if placed.
    pub fn slot(&self, day: usize, period: usize) -> Option<&SlotAssignment> {
        self.days
            .get(day)
            .and_then(|d| d.periods.get(period))
            .and_then(|p| p.as_ref())
    }

    /// Writes an assignment into (day, period), replacing any existing one.
    pub fn set_slot(&mut self, day: usize, period: usize, assignment: SlotAssignment) {
        self.days[day].periods[period] = Some(assignment);
    }

    /// Whether (day, period) is still unplaced.
    pub fn is_free(&self, day: usize, period: usize) -> bool {
        self.slot(day, period).is_none()
    }

    /// Number of periods on `day` already held by `subject`.
    pub fn subject_periods_on_day(&self, day: usize, subject: &str) -> usize {
        self.days[day]
            .periods
            .iter()
            .filter(|p| p.as_ref().is_some_and(|a| a.subject == subject))
            .count()
    }

    /// Whether the period before or after (day, period) holds `subject`.
    pub fn has_adjacent_subject(&self, day: usize, period: usize, subject: &str) -> bool {
        let same = |p: usize| self.slot(day, p).is_some_and(|a| a.subject == subject);
        (period > 0 && same(period - 1)) || (period + 1 < PERIODS_PER_DAY && same(period + 1))
    }

    /// Fills every unplaced slot with the library marker.
    ///
    /// After this, all 48 slots are populated and stay populated.
    pub fn normalize(&mut self) {
        for day in &mut self.days {
            for slot in &mut day.periods {
                if slot.is_none() {
                    *slot = Some(SlotAssignment::library());
                }
            }
        }
    }

    /// Number of still-unplaced slots.
    pub fn free_slot_count(&self) -> usize {
        self.days
            .iter()
            .flat_map(|d| &d.periods)
            .filter(|p| p.is_none())
            .count()
    }

    /// Number of slots holding a library (free) period.
    pub fn library_slot_count(&self) -> usize {
        self.days
            .iter()
            .flat_map(|d| &d.periods)
            .filter(|p| p.as_ref().is_some_and(|a| a.is_library()))
            .count()
    }

    /// Total slots in the grid (always 48).
    pub fn slot_count(&self) -> usize {
        self.days.iter().map(|d| d.periods.len()).sum()
    }
}

impl Default for WeekGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_dimensions() {
        let grid = WeekGrid::new();
        assert_eq!(grid.days.len(), DAYS_PER_WEEK);
        assert_eq!(grid.slot_count(), 48);
        assert_eq!(grid.free_slot_count(), 48);
        assert_eq!(grid.days[0].day, "Mon");
        assert_eq!(grid.days[5].day, "Sat");
    }

    #[test]
    fn test_set_and_query_slot() {
        let mut grid = WeekGrid::new();
        assert!(grid.is_free(2, 3));

        grid.set_slot(2, 3, SlotAssignment::new("DBMS", "Anita", SlotKind::Theory));
        assert!(!grid.is_free(2, 3));
        let a = grid.slot(2, 3).unwrap();
        assert_eq!(a.subject, "DBMS");
        assert_eq!(a.kind, SlotKind::Theory);
        assert_eq!(grid.free_slot_count(), 47);

        // Manual edits overwrite placed slots wholesale
        grid.set_slot(2, 3, SlotAssignment::new("Maths", "Ravi", SlotKind::Manual));
        let a = grid.slot(2, 3).unwrap();
        assert_eq!(a.subject, "Maths");
        assert_eq!(a.kind, SlotKind::Manual);
    }

    #[test]
    fn test_slot_out_of_range_is_none() {
        let grid = WeekGrid::new();
        assert!(grid.slot(6, 0).is_none());
        assert!(grid.slot(0, 8).is_none());
    }

    #[test]
    fn test_subject_periods_on_day() {
        let mut grid = WeekGrid::new();
        grid.set_slot(1, 0, SlotAssignment::new("Maths", "Ravi", SlotKind::Theory));
        grid.set_slot(1, 4, SlotAssignment::new("Maths", "Ravi", SlotKind::Theory));
        grid.set_slot(1, 2, SlotAssignment::new("Physics", "Ravi", SlotKind::Theory));

        assert_eq!(grid.subject_periods_on_day(1, "Maths"), 2);
        assert_eq!(grid.subject_periods_on_day(1, "Physics"), 1);
        assert_eq!(grid.subject_periods_on_day(0, "Maths"), 0);
    }

    #[test]
    fn test_has_adjacent_subject() {
        let mut grid = WeekGrid::new();
        grid.set_slot(0, 3, SlotAssignment::new("Maths", "Ravi", SlotKind::Theory));

        assert!(grid.has_adjacent_subject(0, 2, "Maths"));
        assert!(grid.has_adjacent_subject(0, 4, "Maths"));
        assert!(!grid.has_adjacent_subject(0, 5, "Maths"));
        assert!(!grid.has_adjacent_subject(0, 3, "Physics"));
        // Edges must not underflow or overflow
        assert!(!grid.has_adjacent_subject(0, 0, "Maths"));
        assert!(!grid.has_adjacent_subject(0, 7, "Maths"));
    }

    #[test]
    fn test_normalize_fills_all_slots() {
        let mut grid = WeekGrid::new();
        grid.set_slot(0, 0, SlotAssignment::new("DBMS", "Anita", SlotKind::Theory));
        grid.normalize();

        assert_eq!(grid.free_slot_count(), 0);
        assert_eq!(grid.library_slot_count(), 47);
        // Normalization never overwrites placed slots
        assert_eq!(grid.slot(0, 0).unwrap().subject, "DBMS");
        let lib = grid.slot(3, 5).unwrap();
        assert_eq!(lib.subject, "Library");
        assert_eq!(lib.staff, "-");
        assert_eq!(lib.kind, SlotKind::Empty);
    }

    #[test]
    fn test_library_marker() {
        let lib = SlotAssignment::library();
        assert!(lib.is_library());
        assert!(!SlotAssignment::new("DBMS", "Anita", SlotKind::Lab).is_library());
    }

    #[test]
    fn test_grid_serde_round_trip() {
        let mut grid = WeekGrid::new();
        grid.set_slot(4, 6, SlotAssignment::new("OS Lab", "Kumar", SlotKind::Lab));
        grid.normalize();

        let json = serde_json::to_string(&grid).unwrap();
        let back: WeekGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back.slot_count(), 48);
        assert_eq!(back.slot(4, 6).unwrap().subject, "OS Lab");
        assert_eq!(back.free_slot_count(), 0);
    }
}
