//! Subject requirement model.
//!
//! A subject requirement is one row of a year's allocation table: the
//! subject name, its required weekly teaching hours, and the assigned staff
//! member (or the `"TBD"` sentinel when none is assigned yet).

use serde::{Deserialize, Serialize};

/// Sentinel staff name meaning "no staff assigned".
///
/// Never conflicts with any other assignment in availability checks.
pub const UNASSIGNED_STAFF: &str = "TBD";

/// Placement strategy class for a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubjectKind {
    /// Placed as one contiguous block within a single day.
    Lab,
    /// Placed as scattered single periods across the week.
    Theory,
}

/// One subject's weekly requirement within a year's allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRequirement {
    /// Subject name (e.g., "DBMS", "OS Lab").
    pub name: String,
    /// Required teaching periods per week.
    pub weekly_hours: u32,
    /// Assigned staff name, or [`UNASSIGNED_STAFF`].
    pub staff_name: String,
}

impl SubjectRequirement {
    /// Creates a requirement with no staff assigned.
    pub fn new(name: impl Into<String>, weekly_hours: u32) -> Self {
        Self {
            name: name.into(),
            weekly_hours,
            staff_name: UNASSIGNED_STAFF.to_string(),
        }
    }

    /// Sets the assigned staff member.
    pub fn with_staff(mut self, staff_name: impl Into<String>) -> Self {
        self.staff_name = staff_name.into();
        self
    }

    /// Whether a real staff member is assigned (not the `"TBD"` sentinel).
    pub fn has_staff(&self) -> bool {
        !self.staff_name.is_empty() && self.staff_name != UNASSIGNED_STAFF
    }

    /// Classifies the subject by name: `Lab` iff the name contains "lab",
    /// case-insensitive. The rule is total — everything else is `Theory`.
    pub fn kind(&self) -> SubjectKind {
        if self.name.to_lowercase().contains("lab") {
            SubjectKind::Lab
        } else {
            SubjectKind::Theory
        }
    }
}

/// One academic year's ordered subject pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearRequirements {
    /// Academic year number (e.g., 2, 3, 4).
    pub year: u32,
    /// Subjects to place for this year.
    pub subjects: Vec<SubjectRequirement>,
}

impl YearRequirements {
    /// Creates an empty pool for a year.
    pub fn new(year: u32) -> Self {
        Self {
            year,
            subjects: Vec::new(),
        }
    }

    /// Adds a subject requirement.
    pub fn with_subject(mut self, subject: SubjectRequirement) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Total weekly hours requested across all subjects.
    pub fn total_hours(&self) -> u32 {
        self.subjects.iter().map(|s| s.weekly_hours).sum()
    }
}
