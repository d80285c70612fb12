//! Timetable generation engines and shortfall reporting.
//!
//! Two generation modes share the models and validation layer:
//!
//! - **`TimetableGenerator`** (primary): places each year's subjects into
//!   its own grid — lab subjects first as contiguous blocks, then theory
//!   subjects as scattered single periods — with one staff-availability
//!   index spanning the whole run. Years are processed seniors-first.
//! - **`JointScheduler`** (alternate): walks the 6×8 grid period by period
//!   and draws one subject per year per period, redrawing on staff
//!   collisions, with a Library fallback when the retry budget runs out.
//!
//! Both modes are randomized; callers supply the `rand::Rng` so runs are
//! reproducible. Placement shortfalls never abort a run — they accumulate
//! on the [`GenerationReport`].

mod availability;
mod generator;
mod joint;
mod placement;
mod report;

pub use availability::StaffBusyIndex;
pub use generator::{GenerationOutcome, TimetableGenerator, YearGrid};
pub use joint::JointScheduler;
pub use placement::{place_lab, place_theory, SchedulerConfig};
pub use report::GenerationReport;
