//! Cross-year lockstep resolution (alternate mode).
//!
//! Walks the 6×8 grid one absolute period at a time and fills that period
//! for every year simultaneously: each year draws one subject with hours
//! remaining, and the joint draw is accepted only if no staff member
//! appears in two years' picks. Collisions redraw the whole period, up to
//! a retry budget; on exhaustion the period becomes a Library slot for all
//! years and a conflict counter ticks.
//!
//! Unlike the per-year generator this mode has no block or adjacency
//! rules — it guarantees only the cross-year same-slot property, which is
//! why it is kept as an alternate rather than the default.

use std::collections::HashSet;

use log::warn;
use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::models::{
    SlotAssignment, SlotKind, StaffMember, SubjectKind, WeekGrid, YearRequirements,
    DAYS_PER_WEEK, PERIODS_PER_DAY,
};
use crate::validation::{validate_requirements, ValidationError};

use super::generator::{GenerationOutcome, YearGrid};
use super::report::GenerationReport;

/// Lockstep cross-year scheduler.
#[derive(Debug, Clone)]
pub struct JointScheduler {
    /// Joint redraws allowed per period before falling back to Library.
    pub attempt_budget: usize,
}

impl Default for JointScheduler {
    fn default() -> Self {
        Self {
            attempt_budget: 500,
        }
    }
}

impl JointScheduler {
    /// Creates a scheduler with the default retry budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-period retry budget.
    pub fn with_attempt_budget(mut self, attempt_budget: usize) -> Self {
        self.attempt_budget = attempt_budget;
        self
    }

    /// Generates one grid per year, period by period in lockstep.
    ///
    /// Validation failures abort before any placement. Every period of
    /// every grid is populated on return — by a drawn subject or by the
    /// Library fallback — so no normalization pass is needed.
    pub fn generate<R: Rng>(
        &self,
        years: &[YearRequirements],
        staff: &[StaffMember],
        rng: &mut R,
    ) -> Result<GenerationOutcome, Vec<ValidationError>> {
        validate_requirements(years, staff)?;

        let mut remaining: Vec<Vec<u32>> = years
            .iter()
            .map(|y| y.subjects.iter().map(|s| s.weekly_hours).collect())
            .collect();
        let mut grids: Vec<WeekGrid> = years.iter().map(|_| WeekGrid::new()).collect();
        let mut report = GenerationReport::new();

        for day in 0..DAYS_PER_WEEK {
            for period in 0..PERIODS_PER_DAY {
                match self.draw_period(years, &remaining, rng) {
                    Some(picks) => {
                        for (yi, pick) in picks.iter().enumerate() {
                            match *pick {
                                Some(si) => {
                                    let sub = &years[yi].subjects[si];
                                    let kind = match sub.kind() {
                                        SubjectKind::Lab => SlotKind::Lab,
                                        SubjectKind::Theory => SlotKind::Theory,
                                    };
                                    grids[yi].set_slot(
                                        day,
                                        period,
                                        SlotAssignment::new(&sub.name, &sub.staff_name, kind),
                                    );
                                    remaining[yi][si] -= 1;
                                }
                                None => {
                                    grids[yi].set_slot(day, period, SlotAssignment::library());
                                }
                            }
                        }
                    }
                    None => {
                        warn!("no conflict-free joint draw for ({day}, {period}); falling back to Library");
                        for grid in &mut grids {
                            grid.set_slot(day, period, SlotAssignment::library());
                        }
                        report.conflict_fallbacks += 1;
                    }
                }
            }
        }

        let grids = years
            .iter()
            .zip(grids)
            .map(|(y, grid)| YearGrid {
                year: y.year,
                grid,
            })
            .collect();
        Ok(GenerationOutcome { grids, report })
    }

    /// Draws one subject per year for a single period.
    ///
    /// `None` entries mark years whose pools are exhausted. Returns `None`
    /// when the retry budget runs out without a conflict-free joint draw.
    fn draw_period<R: Rng>(
        &self,
        years: &[YearRequirements],
        remaining: &[Vec<u32>],
        rng: &mut R,
    ) -> Option<Vec<Option<usize>>> {
        for _ in 0..self.attempt_budget {
            let picks: Vec<Option<usize>> = years
                .iter()
                .enumerate()
                .map(|(yi, year)| {
                    let candidates: Vec<usize> = (0..year.subjects.len())
                        .filter(|&si| remaining[yi][si] > 0)
                        .collect();
                    candidates.choose(rng).copied()
                })
                .collect();

            if self.conflict_free(years, &picks) {
                return Some(picks);
            }
        }
        None
    }

    /// Whether no real staff member appears in two different years' picks.
    fn conflict_free(&self, years: &[YearRequirements], picks: &[Option<usize>]) -> bool {
        let mut seen = HashSet::new();
        for (yi, pick) in picks.iter().enumerate() {
            if let Some(si) = *pick {
                let sub = &years[yi].subjects[si];
                if sub.has_staff() && !seen.insert(sub.staff_name.as_str()) {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SubjectRequirement, UNASSIGNED_STAFF};
    use crate::validation::ValidationErrorKind;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn staff_roster() -> Vec<StaffMember> {
        vec![
            StaffMember::shared("Anita"),
            StaffMember::shared("Ravi"),
            StaffMember::shared("Kumar"),
        ]
    }

    #[test]
    fn test_all_periods_populated() {
        let years = vec![
            YearRequirements::new(2)
                .with_subject(SubjectRequirement::new("DBMS", 4).with_staff("Anita"))
                .with_subject(SubjectRequirement::new("Maths", 4).with_staff("Ravi")),
            YearRequirements::new(3)
                .with_subject(SubjectRequirement::new("Networks", 4).with_staff("Kumar")),
        ];
        let mut rng = SmallRng::seed_from_u64(42);

        let outcome = JointScheduler::new()
            .generate(&years, &staff_roster(), &mut rng)
            .unwrap();
        for yg in &outcome.grids {
            assert_eq!(yg.grid.free_slot_count(), 0);
            assert_eq!(yg.grid.slot_count(), 48);
        }
    }

    #[test]
    fn test_no_staff_shared_across_years_in_same_period() {
        // Both years draw from pools taught by the same two staff members;
        // the joint draw must never book either of them twice in a period.
        let years = vec![
            YearRequirements::new(2)
                .with_subject(SubjectRequirement::new("DBMS", 20).with_staff("Anita"))
                .with_subject(SubjectRequirement::new("Maths", 20).with_staff("Ravi")),
            YearRequirements::new(3)
                .with_subject(SubjectRequirement::new("ADBMS", 20).with_staff("Anita"))
                .with_subject(SubjectRequirement::new("Statistics", 20).with_staff("Ravi")),
        ];
        let mut rng = SmallRng::seed_from_u64(42);

        let outcome = JointScheduler::new()
            .generate(&years, &staff_roster(), &mut rng)
            .unwrap();

        for d in 0..DAYS_PER_WEEK {
            for p in 0..PERIODS_PER_DAY {
                let names: Vec<&str> = outcome
                    .grids
                    .iter()
                    .filter_map(|yg| yg.grid.slot(d, p))
                    .map(|a| a.staff.as_str())
                    .filter(|s| *s != "-" && *s != UNASSIGNED_STAFF)
                    .collect();
                let unique: HashSet<&str> = names.iter().copied().collect();
                assert_eq!(names.len(), unique.len(), "staff collision at ({d}, {p})");
            }
        }
    }

    #[test]
    fn test_hours_decremented_exactly() {
        let years = vec![YearRequirements::new(2)
            .with_subject(SubjectRequirement::new("DBMS", 4).with_staff("Anita"))];
        let mut rng = SmallRng::seed_from_u64(42);

        let outcome = JointScheduler::new()
            .generate(&years, &staff_roster(), &mut rng)
            .unwrap();
        let grid = outcome.grid_for_year(2).unwrap();

        let dbms_periods: usize = (0..DAYS_PER_WEEK)
            .map(|d| grid.subject_periods_on_day(d, "DBMS"))
            .sum();
        assert_eq!(dbms_periods, 4);
        assert_eq!(grid.library_slot_count(), 44);
    }

    #[test]
    fn test_unresolvable_conflict_falls_back_to_library() {
        // Each year's only subject is taught by the same shared member, so
        // every joint draw collides and every period falls back.
        let years = vec![
            YearRequirements::new(2)
                .with_subject(SubjectRequirement::new("DBMS", 48).with_staff("Anita")),
            YearRequirements::new(3)
                .with_subject(SubjectRequirement::new("ADBMS", 48).with_staff("Anita")),
        ];
        let mut rng = SmallRng::seed_from_u64(42);

        let outcome = JointScheduler::new()
            .generate(&years, &staff_roster(), &mut rng)
            .unwrap();
        assert_eq!(outcome.report.conflict_fallbacks, 48);
        for yg in &outcome.grids {
            assert_eq!(yg.grid.library_slot_count(), 48);
        }
    }

    #[test]
    fn test_tbd_staff_never_collides() {
        // Unassigned subjects can be drawn in every year simultaneously.
        let years = vec![
            YearRequirements::new(2).with_subject(SubjectRequirement::new("Elective A", 48)),
            YearRequirements::new(3).with_subject(SubjectRequirement::new("Elective B", 48)),
        ];
        let mut rng = SmallRng::seed_from_u64(42);

        let outcome = JointScheduler::new().generate(&years, &[], &mut rng).unwrap();
        assert_eq!(outcome.report.conflict_fallbacks, 0);
        for yg in &outcome.grids {
            assert_eq!(yg.grid.library_slot_count(), 0);
        }
    }

    #[test]
    fn test_empty_pool_year_gets_all_library() {
        let years = vec![
            YearRequirements::new(2)
                .with_subject(SubjectRequirement::new("DBMS", 4).with_staff("Anita")),
            YearRequirements::new(3),
        ];
        let mut rng = SmallRng::seed_from_u64(42);

        let outcome = JointScheduler::new()
            .generate(&years, &staff_roster(), &mut rng)
            .unwrap();
        assert_eq!(outcome.grid_for_year(3).unwrap().library_slot_count(), 48);
    }

    #[test]
    fn test_lab_subjects_keep_lab_kind() {
        let years = vec![YearRequirements::new(2)
            .with_subject(SubjectRequirement::new("OS Lab", 3).with_staff("Kumar"))];
        let mut rng = SmallRng::seed_from_u64(42);

        let outcome = JointScheduler::new()
            .generate(&years, &staff_roster(), &mut rng)
            .unwrap();
        let grid = outcome.grid_for_year(2).unwrap();

        let lab_slots = (0..DAYS_PER_WEEK)
            .flat_map(|d| (0..PERIODS_PER_DAY).map(move |p| (d, p)))
            .filter(|&(d, p)| grid.slot(d, p).is_some_and(|a| a.subject == "OS Lab"))
            .count();
        assert_eq!(lab_slots, 3);
        for d in 0..DAYS_PER_WEEK {
            for p in 0..PERIODS_PER_DAY {
                if let Some(a) = grid.slot(d, p) {
                    if a.subject == "OS Lab" {
                        assert_eq!(a.kind, SlotKind::Lab);
                    }
                }
            }
        }
    }

    #[test]
    fn test_unique_staff_validation_applies() {
        let years = vec![
            YearRequirements::new(2)
                .with_subject(SubjectRequirement::new("DBMS", 2).with_staff("Kumar")),
            YearRequirements::new(3)
                .with_subject(SubjectRequirement::new("Networks", 2).with_staff("Kumar")),
        ];
        let staff = vec![StaffMember::unique("Kumar")];
        let mut rng = SmallRng::seed_from_u64(42);

        let errors = JointScheduler::new()
            .generate(&years, &staff, &mut rng)
            .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UniqueStaffConflict));
    }
}
