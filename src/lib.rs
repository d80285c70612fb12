//! Weekly college timetable generation.
//!
//! Produces conflict-free 6-day × 8-period timetables for multiple academic
//! years at once from per-year subject allocations, using randomized
//! constraint-satisfaction placement with bounded retries.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `WeekGrid`, `SlotAssignment`,
//!   `SubjectRequirement`, `YearRequirements`, `StaffMember`
//! - **`validation`**: Pre-generation integrity checks (unique-staff
//!   double-assignment, duplicate subjects, zero hours)
//! - **`scheduler`**: The two generation modes — per-year placement
//!   (`TimetableGenerator`) and cross-year lockstep resolution
//!   (`JointScheduler`) — plus shortfall reporting
//!
//! # Randomness
//!
//! Every randomized operation takes a caller-supplied `rand::Rng`, so runs
//! are reproducible under a seeded generator. Generation is single-threaded
//! and run-to-completion; all mutable state is owned by the call.

pub mod models;
pub mod scheduler;
pub mod validation;
