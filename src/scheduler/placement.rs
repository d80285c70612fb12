//! Slot placement strategies.
//!
//! Two strategies write into a shared week grid:
//!
//! - **Lab (block)**: the whole weekly requirement as one contiguous run of
//!   periods within a single day, anchored to the morning half (period 0)
//!   or afternoon half (period 4). Day order and half order are shuffled,
//!   and the first fully-feasible block wins.
//! - **Theory (scattered)**: one period at a time at uniformly random
//!   (day, period) targets, bounded by a retry budget, with a per-day
//!   repetition cap and a no-adjacent-repeat rule.
//!
//! Both strategies check and update the [`StaffBusyIndex`] so the assigned
//! staff member is never double-booked. Failures are soft: the caller
//! counts what could not be placed and the normalizer fills the holes.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{
    SlotAssignment, SlotKind, SubjectRequirement, WeekGrid, DAYS_PER_WEEK, PERIODS_PER_DAY,
};

use super::availability::StaffBusyIndex;

/// Half-day block anchors: morning and afternoon.
const BLOCK_STARTS: [usize; 2] = [0, PERIODS_PER_DAY / 2];
/// Longest lab block that fits within one half-day.
const MAX_BLOCK_LEN: usize = PERIODS_PER_DAY / 2;

/// Tunable placement constraints.
///
/// Defaults carry the values the generator has always used.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Random-target attempts allowed per theory subject.
    pub theory_attempt_budget: usize,
    /// Maximum periods one subject may occupy on a single day.
    pub max_daily_periods: usize,
    /// Reject a theory slot when a neighboring period holds the same subject.
    pub forbid_adjacent_repeat: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            theory_attempt_budget: 200,
            max_daily_periods: 2,
            forbid_adjacent_repeat: true,
        }
    }
}

/// Places a lab subject as one contiguous block within a single day.
///
/// # Algorithm
/// 1. Shuffle the day order.
/// 2. Per day, shuffle the feasible half-day anchors (a block of
///    `weekly_hours` periods must fit within the day and within one half).
/// 3. A block is feasible iff every period is empty in the grid and the
///    staff member is free there.
/// 4. First feasible block wins: write all periods, mark staff busy, stop.
///
/// Returns `true` if placed. `false` is a soft failure — the subject simply
/// does not appear in this run's grid.
pub fn place_lab<R: Rng>(
    subject: &SubjectRequirement,
    grid: &mut WeekGrid,
    busy: &mut StaffBusyIndex,
    rng: &mut R,
) -> bool {
    let needed = subject.weekly_hours as usize;
    if needed == 0 {
        return true;
    }

    let mut day_order: Vec<usize> = (0..DAYS_PER_WEEK).collect();
    day_order.shuffle(rng);

    for &day in &day_order {
        let mut starts: Vec<usize> = BLOCK_STARTS
            .iter()
            .copied()
            .filter(|&s| needed <= MAX_BLOCK_LEN && s + needed <= PERIODS_PER_DAY)
            .collect();
        starts.shuffle(rng);

        for &start in &starts {
            let feasible = (start..start + needed)
                .all(|p| grid.is_free(day, p) && !busy.is_busy(day, p, &subject.staff_name));
            if !feasible {
                continue;
            }

            for p in start..start + needed {
                grid.set_slot(
                    day,
                    p,
                    SlotAssignment::new(&subject.name, &subject.staff_name, SlotKind::Lab),
                );
                busy.mark_busy(day, p, &subject.staff_name);
            }
            return true;
        }
    }

    false
}

/// Places a theory subject one period at a time at random targets.
///
/// Rejects a target when the slot is occupied, the staff member is busy
/// there, the subject already holds `max_daily_periods` that day, or (with
/// `forbid_adjacent_repeat`) a neighboring period holds the same subject.
///
/// Returns the number of hours actually placed; a result below
/// `weekly_hours` means the attempt budget ran out (soft failure).
pub fn place_theory<R: Rng>(
    subject: &SubjectRequirement,
    grid: &mut WeekGrid,
    busy: &mut StaffBusyIndex,
    config: &SchedulerConfig,
    rng: &mut R,
) -> u32 {
    let mut remaining = subject.weekly_hours;
    let mut attempts = 0;

    while remaining > 0 && attempts < config.theory_attempt_budget {
        attempts += 1;
        let day = rng.random_range(0..DAYS_PER_WEEK);
        let period = rng.random_range(0..PERIODS_PER_DAY);

        if !grid.is_free(day, period) {
            continue;
        }
        if busy.is_busy(day, period, &subject.staff_name) {
            continue;
        }
        if grid.subject_periods_on_day(day, &subject.name) >= config.max_daily_periods {
            continue;
        }
        if config.forbid_adjacent_repeat && grid.has_adjacent_subject(day, period, &subject.name) {
            continue;
        }

        grid.set_slot(
            day,
            period,
            SlotAssignment::new(&subject.name, &subject.staff_name, SlotKind::Theory),
        );
        busy.mark_busy(day, period, &subject.staff_name);
        remaining -= 1;
    }

    subject.weekly_hours - remaining
}
