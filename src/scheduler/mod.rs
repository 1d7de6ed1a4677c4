//! Greedy slot allocation and workload reporting.
//!
//! `GreedyScheduler` commits (slot, subject, teacher, class) entries in a
//! single pass with no backtracking; coverage gaps surface as shortfalls,
//! not errors. `TeacherWorkload` derives per-teacher load figures from
//! the committed timetable on demand.
//!
//! # Reference
//! Schaerf (1999), "A Survey of Automated Timetabling"

mod greedy;
mod workload;

pub use greedy::{GenerationOutcome, GreedyScheduler, Shortfall, TenantSnapshot};
pub use workload::TeacherWorkload;
