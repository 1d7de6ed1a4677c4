//! Weekly class timetable engine.
//!
//! Assigns weekly periods to (subject, teacher, class) triples under
//! capacity, compatibility, and non-overlap constraints, for one tenant
//! snapshot at a time. Loading and persistence are external concerns:
//! the engine consumes an already-scoped [`scheduler::TenantSnapshot`]
//! and hands back a serializable [`output::TimetableResult`].
//!
//! # Modules
//!
//! - **`models`**: Domain types: `TimeSlot`, `Subject`, `Teacher`,
//!   `ClassSection`, `ScheduleEntry`, `Timetable`
//! - **`matching`**: Teacher-subject compatibility policy and the
//!   compatibility matrix report
//! - **`scheduler`**: The greedy slot allocator and workload reporting
//! - **`validation`**: Post-hoc conflict scan over a produced timetable
//! - **`output`**: Grouped, sorted, serializable timetable shape
//! - **`error`**: Fatal run failures
//!
//! # Algorithm
//!
//! The allocator is a one-pass greedy heuristic over a fixed 36-slot
//! week (6 days x 6 periods): subjects are taken in descending credit
//! order, slots in a shuffled order, and each slot goes to the
//! least-loaded compatible teacher. There is no backtracking and no
//! global optimization; when supply runs out the gap is reported as a
//! shortfall and the run continues. Randomness is injected, so a seeded
//! RNG makes runs reproducible.
//!
//! # Reference
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod error;
pub mod matching;
pub mod models;
pub mod output;
pub mod scheduler;
pub mod validation;
