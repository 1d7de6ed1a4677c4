//! Teacher model.
//!
//! Teachers carry a capacity ceiling (`max_credits`), a declared subject
//! profile (primary plus any number of secondary subjects), and an
//! optional availability set. An empty availability set means available
//! at every slot, not at none.
//!
//! Per-run load is deliberately *not* a field here; the allocator owns
//! it in its run state so that nothing leaks across generation runs.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::SlotKey;

/// A teacher that can be assigned to weekly slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Home department.
    pub department: String,
    /// Maximum weekly slots this teacher may be assigned.
    pub max_credits: u32,
    /// Declared main subject (by name).
    pub primary_subject: String,
    /// Additional subjects (by name), in declaration order.
    pub other_subjects: Vec<String>,
    /// Slots the teacher may be scheduled at. Empty = all slots.
    pub availability: HashSet<SlotKey>,
}

impl Teacher {
    /// Creates a new teacher with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            department: String::new(),
            max_credits: 0,
            primary_subject: String::new(),
            other_subjects: Vec::new(),
            availability: HashSet::new(),
        }
    }

    /// Sets the teacher name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the home department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets the weekly capacity ceiling.
    pub fn with_max_credits(mut self, max_credits: u32) -> Self {
        self.max_credits = max_credits;
        self
    }

    /// Sets the primary subject.
    pub fn with_primary_subject(mut self, subject: impl Into<String>) -> Self {
        self.primary_subject = subject.into();
        self
    }

    /// Adds a secondary subject.
    pub fn with_other_subject(mut self, subject: impl Into<String>) -> Self {
        self.other_subjects.push(subject.into());
        self
    }

    /// Restricts availability to the given slots.
    pub fn with_availability(mut self, slots: impl IntoIterator<Item = SlotKey>) -> Self {
        self.availability.extend(slots);
        self
    }

    /// Whether the teacher may be scheduled at the given slot.
    ///
    /// An empty availability set means available everywhere.
    pub fn is_available(&self, slot: SlotKey) -> bool {
        self.availability.is_empty() || self.availability.contains(&slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayOfWeek;

    #[test]
    fn test_builder() {
        let t = Teacher::new("T1")
            .with_name("Dr. John Smith")
            .with_department("Science")
            .with_max_credits(20)
            .with_primary_subject("Mathematics")
            .with_other_subject("Physics");

        assert_eq!(t.id, "T1");
        assert_eq!(t.max_credits, 20);
        assert_eq!(t.primary_subject, "Mathematics");
        assert_eq!(t.other_subjects, vec!["Physics".to_string()]);
    }

    #[test]
    fn test_empty_availability_means_everywhere() {
        let t = Teacher::new("T1");
        assert!(t.is_available((DayOfWeek::Monday, 1)));
        assert!(t.is_available((DayOfWeek::Saturday, 6)));
    }

    #[test]
    fn test_restricted_availability() {
        let t = Teacher::new("T1").with_availability([(DayOfWeek::Monday, 1), (DayOfWeek::Tuesday, 2)]);
        assert!(t.is_available((DayOfWeek::Monday, 1)));
        assert!(!t.is_available((DayOfWeek::Monday, 2)));
        assert!(!t.is_available((DayOfWeek::Friday, 1)));
    }
}
