//! Post-hoc timetable validation.
//!
//! Scans a produced timetable for:
//! - a teacher holding two entries at the same (day, period),
//! - a class holding two entries at the same (day, period),
//! - a teacher committed beyond `max_credits`.
//!
//! The allocator already prevents all three by construction, so these
//! checks should never fire on its output. They exist as regression
//! guards for future allocator changes (backtracking, parallel commits),
//! and for timetables that arrive from outside the allocator.
//!
//! The timetable is an explicit argument; validation never reads engine
//! instance state, so it cannot silently scan a stale or empty schedule.

use std::collections::{HashMap, HashSet};

use log::warn;

use crate::models::{SlotKey, Teacher, Timetable};

/// Validates a timetable, returning one message per detected issue.
///
/// An empty vector means the timetable is conflict-free. Coverage
/// shortfalls are deliberately not reported here; they are a capacity
/// concern, not a correctness one.
pub fn validate_timetable(timetable: &Timetable, teachers: &[Teacher]) -> Vec<String> {
    let mut issues = Vec::new();

    // Teacher slot overlaps, across all classes
    let mut teacher_slots: HashMap<&str, HashSet<SlotKey>> = HashMap::new();
    let mut flagged_teachers: HashSet<&str> = HashSet::new();
    for entry in &timetable.entries {
        let slots = teacher_slots.entry(entry.teacher_id.as_str()).or_default();
        if !slots.insert(entry.slot_key()) && flagged_teachers.insert(entry.teacher_id.as_str()) {
            issues.push(format!(
                "Teacher {} has overlapping schedules",
                entry.teacher_name
            ));
        }
    }

    // Class slot overlaps
    let mut class_slots: HashMap<&str, HashSet<SlotKey>> = HashMap::new();
    let mut flagged_classes: HashSet<&str> = HashSet::new();
    for entry in &timetable.entries {
        let slots = class_slots.entry(entry.class_id.as_str()).or_default();
        if !slots.insert(entry.slot_key()) && flagged_classes.insert(entry.class_id.as_str()) {
            issues.push(format!(
                "Class {} has overlapping schedules",
                entry.class_name
            ));
        }
    }

    // Capacity ceilings
    for teacher in teachers {
        let load = timetable.teacher_load(&teacher.id);
        if load as u32 > teacher.max_credits {
            issues.push(format!(
                "Teacher {} is overloaded: {}/{}",
                teacher.name, load, teacher.max_credits
            ));
        }
    }

    for issue in &issues {
        warn!("timetable validation: {issue}");
    }

    issues
}
