//! Teacher workload report.
//!
//! Pull-based: everything is re-derived from the committed timetable at
//! report time, nothing is cached between runs.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Teacher, Timetable};

/// Workload figures for one teacher.
#[derive(Debug, Clone, Serialize)]
pub struct TeacherWorkload {
    /// Committed weekly hours.
    pub current_load: u32,
    /// Declared capacity ceiling.
    pub max_capacity: u32,
    /// `current_load / max_capacity * 100`, rounded to 2 decimals.
    /// Zero when the teacher has no declared capacity.
    pub utilization_percent: f64,
    /// Distinct subject names across the teacher's committed entries.
    pub subjects_taught: usize,
}

impl TeacherWorkload {
    /// Builds the workload report for every teacher in the snapshot,
    /// keyed by teacher name.
    ///
    /// Teachers with no committed entries still appear, at zero load.
    pub fn report(timetable: &Timetable, teachers: &[Teacher]) -> BTreeMap<String, TeacherWorkload> {
        teachers
            .iter()
            .map(|t| {
                let load = timetable.teacher_load(&t.id) as u32;
                let utilization = if t.max_credits == 0 {
                    0.0
                } else {
                    round2(load as f64 / t.max_credits as f64 * 100.0)
                };
                (
                    t.name.clone(),
                    TeacherWorkload {
                        current_load: load,
                        max_capacity: t.max_credits,
                        utilization_percent: utilization,
                        subjects_taught: timetable.subjects_taught(&t.id),
                    },
                )
            })
            .collect()
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
