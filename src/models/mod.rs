//! Timetable domain models.
//!
//! Core data types for describing a weekly timetable problem and its
//! solution: the 6×8 week grid, slot assignments, per-year subject
//! requirements, and the staff roster with exclusivity classes.
//!
//! All models are plain serde-serializable data; persistence and rendering
//! are external collaborators that consume these shapes.

mod grid;
mod staff;
mod subject;

pub use grid::{DaySchedule, SlotAssignment, SlotKind, WeekGrid, DAYS_PER_WEEK, DAY_NAMES, PERIODS_PER_DAY};
pub use staff::{Exclusivity, StaffMember};
pub use subject::{SubjectKind, SubjectRequirement, YearRequirements, UNASSIGNED_STAFF};
