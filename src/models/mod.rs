//! Timetabling domain models.
//!
//! Core data types for representing one tenant's scheduling snapshot and
//! the timetable produced from it. Entities are immutable by convention:
//! all per-run mutable state (teacher loads, occupancy sets) lives in the
//! allocator's run state, not on these types.

mod class;
mod entry;
mod slot;
mod subject;
mod teacher;

pub use class::{ClassSection, DEFAULT_STRENGTH};
pub use entry::{ScheduleEntry, Timetable, UNASSIGNED_ROOM};
pub use slot::{DayOfWeek, SlotKey, TimeSlot, PERIODS_PER_DAY, SLOT_COUNT};
pub use subject::{Subject, SubjectType};
pub use teacher::Teacher;
