//! Staff roster model.
//!
//! Staff members carry an exclusivity class that the validator enforces
//! before generation: shared staff may teach any number of subjects (limited
//! only by same-slot conflicts), unique staff may be assigned to at most one
//! subject across the entire timetable.

use serde::{Deserialize, Serialize};

/// How widely a staff member may be assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Exclusivity {
    /// May teach multiple subjects and years, subject to same-slot rules.
    Shared,
    /// May be assigned to at most one subject across all years.
    Unique,
}

/// A member of the teaching staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Staff name, matched against `SubjectRequirement::staff_name`.
    pub name: String,
    /// Assignment exclusivity class.
    pub exclusivity: Exclusivity,
}

impl StaffMember {
    /// Creates a shared staff member.
    pub fn shared(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exclusivity: Exclusivity::Shared,
        }
    }

    /// Creates a unique (single-assignment) staff member.
    pub fn unique(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exclusivity: Exclusivity::Unique,
        }
    }

    /// Whether this member is restricted to a single subject.
    pub fn is_unique(&self) -> bool {
        self.exclusivity == Exclusivity::Unique
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_factories() {
        let s = StaffMember::shared("Anita");
        assert_eq!(s.exclusivity, Exclusivity::Shared);
        assert!(!s.is_unique());

        let u = StaffMember::unique("Kumar");
        assert_eq!(u.name, "Kumar");
        assert!(u.is_unique());
    }

    #[test]
    fn test_staff_serde_round_trip() {
        let s = StaffMember::unique("Kumar");
        let json = serde_json::to_string(&s).unwrap();
        let back: StaffMember = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
