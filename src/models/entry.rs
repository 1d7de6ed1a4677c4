//! Timetable (solution) model.
//!
//! A timetable is the set of committed (slot, subject, teacher, class)
//! assignments produced by one generation run. Entries denormalize the
//! names and codes they are rendered with, so reports and validation can
//! work from the timetable alone.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{ClassSection, SlotKey, Subject, SubjectType, Teacher, TimeSlot};

/// Room placeholder used until room allocation exists.
pub const UNASSIGNED_ROOM: &str = "TBA";

/// A single committed assignment: one class meets one subject with one
/// teacher at one weekly slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// The weekly slot this entry occupies.
    pub time_slot: TimeSlot,
    /// Class section ID.
    pub class_id: String,
    /// Class section name (denormalized for reporting).
    pub class_name: String,
    /// Class section department (denormalized for reporting).
    pub class_department: String,
    /// Subject ID.
    pub subject_id: String,
    /// Subject name (denormalized for reporting).
    pub subject_name: String,
    /// Subject catalogue code.
    pub subject_code: String,
    /// Subject delivery format.
    pub subject_type: SubjectType,
    /// Teacher ID.
    pub teacher_id: String,
    /// Teacher name (denormalized for reporting).
    pub teacher_name: String,
    /// Assigned room; [`UNASSIGNED_ROOM`] unless room allocation is added.
    pub room: String,
}

impl ScheduleEntry {
    /// Creates an entry for the given slot, denormalizing the entities.
    pub fn new(
        time_slot: TimeSlot,
        subject: &Subject,
        teacher: &Teacher,
        class: &ClassSection,
    ) -> Self {
        Self {
            time_slot,
            class_id: class.id.clone(),
            class_name: class.name.clone(),
            class_department: class.department.clone(),
            subject_id: subject.id.clone(),
            subject_name: subject.name.clone(),
            subject_code: subject.code.clone(),
            subject_type: subject.subject_type,
            teacher_id: teacher.id.clone(),
            teacher_name: teacher.name.clone(),
            room: UNASSIGNED_ROOM.to_string(),
        }
    }

    /// The `(day, period)` identity of this entry's slot.
    #[inline]
    pub fn slot_key(&self) -> SlotKey {
        self.time_slot.key()
    }
}

/// A complete weekly timetable for one tenant snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timetable {
    /// Committed entries, in commit order.
    pub entries: Vec<ScheduleEntry>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a committed entry.
    pub fn add_entry(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Number of committed entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// All entries for a given class.
    pub fn entries_for_class(&self, class_id: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.class_id == class_id)
            .collect()
    }

    /// All entries for a given teacher, across classes.
    pub fn entries_for_teacher(&self, teacher_id: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.teacher_id == teacher_id)
            .collect()
    }

    /// Class IDs in first-commit order.
    pub fn class_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut ids = Vec::new();
        for e in &self.entries {
            if seen.insert(e.class_id.as_str()) {
                ids.push(e.class_id.as_str());
            }
        }
        ids
    }

    /// Committed load (entry count) for a teacher.
    pub fn teacher_load(&self, teacher_id: &str) -> usize {
        self.entries
            .iter()
            .filter(|e| e.teacher_id == teacher_id)
            .count()
    }

    /// Distinct subject names a teacher is committed to.
    pub fn subjects_taught(&self, teacher_id: &str) -> usize {
        self.entries
            .iter()
            .filter(|e| e.teacher_id == teacher_id)
            .map(|e| e.subject_name.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayOfWeek;

    fn sample_entry(class_id: &str, teacher_id: &str, subject_name: &str, day: DayOfWeek, period: u8) -> ScheduleEntry {
        let subject = Subject::new("S1", SubjectType::Theory)
            .with_name(subject_name)
            .with_code("X101");
        let teacher = Teacher::new(teacher_id).with_name("T");
        let class = ClassSection::new(class_id).with_name("C");
        ScheduleEntry::new(TimeSlot::new(day, period), &subject, &teacher, &class)
    }

    fn sample_timetable() -> Timetable {
        let mut t = Timetable::new();
        t.add_entry(sample_entry("C1", "T1", "Math", DayOfWeek::Monday, 1));
        t.add_entry(sample_entry("C1", "T1", "Math", DayOfWeek::Monday, 2));
        t.add_entry(sample_entry("C2", "T1", "Physics", DayOfWeek::Tuesday, 1));
        t.add_entry(sample_entry("C2", "T2", "Math", DayOfWeek::Monday, 1));
        t
    }

    #[test]
    fn test_entry_defaults() {
        let e = sample_entry("C1", "T1", "Math", DayOfWeek::Monday, 1);
        assert_eq!(e.room, UNASSIGNED_ROOM);
        assert_eq!(e.slot_key(), (DayOfWeek::Monday, 1));
    }

    #[test]
    fn test_queries() {
        let t = sample_timetable();
        assert_eq!(t.entry_count(), 4);
        assert_eq!(t.entries_for_class("C1").len(), 2);
        assert_eq!(t.entries_for_teacher("T1").len(), 3);
        assert_eq!(t.class_ids(), vec!["C1", "C2"]);
    }

    #[test]
    fn test_teacher_load_and_subjects() {
        let t = sample_timetable();
        assert_eq!(t.teacher_load("T1"), 3);
        // T1 teaches Math (twice) and Physics → 2 distinct subjects
        assert_eq!(t.subjects_taught("T1"), 2);
        assert_eq!(t.subjects_taught("T2"), 1);
        assert_eq!(t.subjects_taught("T99"), 0);
    }

    #[test]
    fn test_empty_timetable() {
        let t = Timetable::new();
        assert_eq!(t.entry_count(), 0);
        assert!(t.class_ids().is_empty());
        assert_eq!(t.teacher_load("T1"), 0);
    }
}
