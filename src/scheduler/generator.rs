//! Per-year timetable generation (primary mode).
//!
//! # Algorithm
//!
//! 1. Validate the allocation tables and roster (hard abort on error).
//! 2. Process years seniors-first, so senior-year constraints win when
//!    staff contention exists. One staff-availability index spans the whole
//!    run, so a member is never double-booked in the same (day, period)
//!    across years.
//! 3. Within a year, place all lab subjects first (contiguous blocks
//!    reserve room before fragmentation), then theory subjects.
//! 4. Normalize each grid: leftover holes become Library periods.
//!
//! Everything the run mutates — grids, busy index, remaining-hour
//! counters — is owned by the `generate` call, so repeated or concurrent
//! invocations never share state.

use log::{debug, warn};
use rand::Rng;

use crate::models::{StaffMember, SubjectKind, WeekGrid, YearRequirements};
use crate::validation::{validate_requirements, ValidationError};

use super::placement::{place_lab, place_theory, SchedulerConfig};
use super::report::GenerationReport;
use super::StaffBusyIndex;

/// One year's generated grid.
#[derive(Debug, Clone)]
pub struct YearGrid {
    /// Academic year number.
    pub year: u32,
    /// The fully normalized grid (all 48 slots populated).
    pub grid: WeekGrid,
}

/// Result of a generation run: per-year grids plus shortfall counters.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// Generated grids, in processing order.
    pub grids: Vec<YearGrid>,
    /// What could not be placed.
    pub report: GenerationReport,
}

impl GenerationOutcome {
    /// Returns the grid generated for a year, if that year was requested.
    pub fn grid_for_year(&self, year: u32) -> Option<&WeekGrid> {
        self.grids.iter().find(|g| g.year == year).map(|g| &g.grid)
    }
}

/// Per-year randomized timetable generator.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use timetable_core::models::{StaffMember, SubjectRequirement, YearRequirements};
/// use timetable_core::scheduler::TimetableGenerator;
///
/// let years = vec![YearRequirements::new(2)
///     .with_subject(SubjectRequirement::new("DBMS", 4).with_staff("Anita"))];
/// let staff = vec![StaffMember::shared("Anita")];
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let outcome = TimetableGenerator::new()
///     .generate(&years, &staff, &mut rng)
///     .unwrap();
/// assert_eq!(outcome.grid_for_year(2).unwrap().free_slot_count(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableGenerator {
    config: SchedulerConfig,
}

impl TimetableGenerator {
    /// Creates a generator with default constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the placement constraints.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Generates one grid per requested year.
    ///
    /// Validation failures abort before any placement; placement shortfalls
    /// are absorbed as Library periods and counted on the report.
    pub fn generate<R: Rng>(
        &self,
        years: &[YearRequirements],
        staff: &[StaffMember],
        rng: &mut R,
    ) -> Result<GenerationOutcome, Vec<ValidationError>> {
        validate_requirements(years, staff)?;

        // Seniors first: order years descending for placement priority
        let mut year_order: Vec<&YearRequirements> = years.iter().collect();
        year_order.sort_by(|a, b| b.year.cmp(&a.year));

        let mut busy = StaffBusyIndex::new();
        let mut report = GenerationReport::new();
        let mut grids = Vec::with_capacity(years.len());

        for year in year_order {
            let mut grid = WeekGrid::new();

            for sub in year.subjects.iter().filter(|s| s.kind() == SubjectKind::Lab) {
                if !place_lab(sub, &mut grid, &mut busy, rng) {
                    warn!(
                        "year {}: no feasible block for lab '{}' ({} periods)",
                        year.year, sub.name, sub.weekly_hours
                    );
                    report.unplaced_labs += 1;
                }
            }

            for sub in year
                .subjects
                .iter()
                .filter(|s| s.kind() == SubjectKind::Theory)
            {
                let placed = place_theory(sub, &mut grid, &mut busy, &self.config, rng);
                let shortfall = sub.weekly_hours - placed;
                if shortfall > 0 {
                    warn!(
                        "year {}: dropped {} of {} hours for '{}'",
                        year.year, shortfall, sub.weekly_hours, sub.name
                    );
                    report.unplaced_theory_hours += shortfall;
                }
            }

            grid.normalize();
            debug!(
                "year {}: {} library periods after placement",
                year.year,
                grid.library_slot_count()
            );
            grids.push(YearGrid {
                year: year.year,
                grid,
            });
        }

        Ok(GenerationOutcome { grids, report })
    }
}
