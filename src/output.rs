//! Output formatting.
//!
//! Normalizes a committed timetable into the serializable shape handed
//! to persistence and reporting collaborators: entries grouped by class,
//! each class's week sorted by (day, period).

use serde::{Deserialize, Serialize};

use crate::models::{DayOfWeek, SubjectType, Timetable};

/// One rendered timetable cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedEntry {
    pub day: DayOfWeek,
    pub period: u8,
    pub start_time: String,
    pub end_time: String,
    pub subject: String,
    pub subject_code: String,
    pub teacher: String,
    pub room: String,
    pub subject_type: SubjectType,
}

/// One class's rendered week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassTimetable {
    pub class_name: String,
    pub department: String,
    /// Entries sorted by (day, period).
    pub schedule: Vec<FormattedEntry>,
}

/// The full formatted result for one generation run.
///
/// Classes appear in first-commit order. This is the structure the
/// persistence collaborator stores with replace-all semantics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimetableResult {
    pub classes: Vec<ClassTimetable>,
}

impl TimetableResult {
    /// Renders a committed timetable.
    pub fn from_timetable(timetable: &Timetable) -> Self {
        let classes = timetable
            .class_ids()
            .into_iter()
            .map(|class_id| {
                let entries = timetable.entries_for_class(class_id);
                let mut schedule: Vec<FormattedEntry> = entries
                    .iter()
                    .map(|e| FormattedEntry {
                        day: e.time_slot.day,
                        period: e.time_slot.period,
                        start_time: e.time_slot.start_time.clone(),
                        end_time: e.time_slot.end_time.clone(),
                        subject: e.subject_name.clone(),
                        subject_code: e.subject_code.clone(),
                        teacher: e.teacher_name.clone(),
                        room: e.room.clone(),
                        subject_type: e.subject_type,
                    })
                    .collect();
                schedule.sort_by_key(|f| (f.day.index(), f.period));

                // entries_for_class is never empty for an ID returned by
                // class_ids, so the denormalized fields are present
                let first = entries[0];
                ClassTimetable {
                    class_name: first.class_name.clone(),
                    department: first.class_department.clone(),
                    schedule,
                }
            })
            .collect();

        Self { classes }
    }

    /// Total rendered entries across all classes.
    pub fn entry_count(&self) -> usize {
        self.classes.iter().map(|c| c.schedule.len()).sum()
    }
}
