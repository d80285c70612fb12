//! Input validation for timetable generation.
//!
//! Checks the allocation tables and staff roster before any placement
//! begins. Detects:
//! - Unique-class staff assigned to more than one subject (across all years)
//! - Duplicate subject names within one year
//! - Subjects requesting zero weekly hours
//! - Subjects referencing staff missing from the roster
//!
//! All checks are hard errors: generation aborts and nothing is placed.
//! Shortfalls that only appear during randomized placement are soft and
//! handled by the scheduler instead (see `scheduler::report`).

use std::collections::{HashMap, HashSet};

use crate::models::{StaffMember, YearRequirements};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A unique-class staff member is assigned to more than one subject.
    UniqueStaffConflict,
    /// Two subjects in the same year share a name.
    DuplicateSubject,
    /// A subject requests zero weekly hours.
    ZeroHours,
    /// A subject references a staff name missing from the roster.
    UnknownStaff,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates allocation tables and the staff roster.
///
/// Checks:
/// 1. No unique-class staff member is referenced by more than one subject,
///    counting across all years combined.
/// 2. No duplicate subject names within a single year.
/// 3. Every subject requests at least one weekly hour.
/// 4. Every assigned staff name exists in the roster (`"TBD"` excepted).
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_requirements(years: &[YearRequirements], staff: &[StaffMember]) -> ValidationResult {
    let mut errors = Vec::new();

    let roster: HashMap<&str, &StaffMember> = staff.iter().map(|s| (s.name.as_str(), s)).collect();

    // Assignment counts per staff name, across all years combined
    let mut assignment_counts: HashMap<&str, usize> = HashMap::new();

    for year in years {
        let mut seen_subjects = HashSet::new();
        for sub in &year.subjects {
            if !seen_subjects.insert(sub.name.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateSubject,
                    format!("Year {}: duplicate subject '{}'", year.year, sub.name),
                ));
            }

            if sub.weekly_hours == 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::ZeroHours,
                    format!(
                        "Year {}: subject '{}' requests zero weekly hours",
                        year.year, sub.name
                    ),
                ));
            }

            if sub.has_staff() {
                *assignment_counts.entry(sub.staff_name.as_str()).or_insert(0) += 1;

                if !roster.contains_key(sub.staff_name.as_str()) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::UnknownStaff,
                        format!(
                            "Year {}: subject '{}' references unknown staff '{}'",
                            year.year, sub.name, sub.staff_name
                        ),
                    ));
                }
            }
        }
    }

    // Unique-class staff may hold at most one assignment in the whole table
    for (name, count) in &assignment_counts {
        if *count > 1 && roster.get(name).is_some_and(|s| s.is_unique()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UniqueStaffConflict,
                format!("Unique staff '{name}' is assigned to {count} subjects"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
