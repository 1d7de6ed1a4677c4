//! Engine error taxonomy.
//!
//! Only two conditions abort a run: the snapshot could not be loaded, or
//! it contains no classes. Scheduling shortfalls are data on the outcome,
//! not errors.

use thiserror::Error;

/// Fatal failures of a generation run.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The snapshot contains no classes; there is nothing to schedule.
    #[error("no classes in snapshot, nothing to schedule")]
    NoClasses,

    /// The external loader could not produce a snapshot. The engine does
    /// no partial work in this case; the variant exists so loader
    /// collaborators surface failures through one taxonomy.
    #[error("failed to load tenant snapshot: {reason}")]
    Load { reason: String },
}
