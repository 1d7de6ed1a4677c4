//! Greedy slot allocator.
//!
//! # Algorithm
//!
//! 1. Process classes in snapshot order.
//! 2. Per class, process subjects in descending credit order (stable
//!    tie-break: input order).
//! 3. Per subject, walk a freshly shuffled copy of the 36-slot universe;
//!    at each free slot pick the least-loaded compatible, available
//!    teacher with remaining capacity and commit.
//! 4. Stop once the subject's weekly hours are covered; if the universe
//!    runs out first, record a shortfall and move on.
//!
//! One pass, no backtracking: earlier classes and heavier subjects can
//! exhaust scarce teacher capacity that later ones needed. That is
//! accepted: shortfalls are reported, never raised.
//!
//! # Reference
//! Schaerf (1999), "A Survey of Automated Timetabling"

use std::collections::{HashMap, HashSet};

use log::{debug, info, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::error::ScheduleError;
use crate::matching::CompatibilityPolicy;
use crate::models::{
    ClassSection, ScheduleEntry, SlotKey, Subject, Teacher, TimeSlot, Timetable, SLOT_COUNT,
};

/// One tenant's already-loaded scheduling snapshot.
///
/// The engine never touches storage; a loader collaborator fills this in.
#[derive(Debug, Clone, Default)]
pub struct TenantSnapshot {
    /// Teachers, in an order that also decides load tie-breaks.
    pub teachers: Vec<Teacher>,
    /// All subjects known to the tenant. May be empty.
    pub subjects: Vec<Subject>,
    /// Class sections to timetable. Must be non-empty.
    pub classes: Vec<ClassSection>,
}

impl TenantSnapshot {
    /// Creates a snapshot from loaded collections.
    pub fn new(teachers: Vec<Teacher>, subjects: Vec<Subject>, classes: Vec<ClassSection>) -> Self {
        Self {
            teachers,
            subjects,
            classes,
        }
    }
}

/// A subject that could not receive all its weekly hours.
#[derive(Debug, Clone, Serialize)]
pub struct Shortfall {
    pub class_name: String,
    pub subject_name: String,
    /// Hours required but not committed.
    pub missing_hours: u32,
}

/// Result of one generation run: the committed timetable plus any
/// coverage shortfalls (non-fatal by design).
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub timetable: Timetable,
    pub shortfalls: Vec<Shortfall>,
}

/// Mutable allocation state for a single run.
///
/// Id-indexed tables rather than counters on the entities, so one run's
/// state is a single resettable unit and nothing aliases across runs.
#[derive(Debug, Default)]
struct RunState {
    teacher_load: HashMap<String, u32>,
    teacher_slots: HashMap<String, HashSet<SlotKey>>,
    class_slots: HashMap<String, HashSet<SlotKey>>,
}

impl RunState {
    fn load(&self, teacher_id: &str) -> u32 {
        self.teacher_load.get(teacher_id).copied().unwrap_or(0)
    }

    fn is_teacher_free(&self, teacher_id: &str, slot: SlotKey) -> bool {
        self.teacher_slots
            .get(teacher_id)
            .is_none_or(|s| !s.contains(&slot))
    }

    fn is_class_free(&self, class_id: &str, slot: SlotKey) -> bool {
        self.class_slots
            .get(class_id)
            .is_none_or(|s| !s.contains(&slot))
    }

    fn commit(&mut self, class_id: &str, teacher_id: &str, slot: SlotKey) {
        self.class_slots
            .entry(class_id.to_string())
            .or_default()
            .insert(slot);
        self.teacher_slots
            .entry(teacher_id.to_string())
            .or_default()
            .insert(slot);
        *self.teacher_load.entry(teacher_id.to_string()).or_insert(0) += 1;
    }
}

/// Greedy, single-pass timetable generator.
///
/// Each call to [`GreedyScheduler::generate`] owns its run state; a
/// scheduler value may be reused sequentially but must not be shared
/// across concurrent runs. Randomness is injected so callers control
/// reproducibility.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use timetable_engine::models::{ClassSection, Subject, SubjectType, Teacher};
/// use timetable_engine::scheduler::{GreedyScheduler, TenantSnapshot};
///
/// let math = Subject::new("S1", SubjectType::Theory)
///     .with_name("Mathematics")
///     .with_department("Science")
///     .with_credits(2);
/// let snapshot = TenantSnapshot::new(
///     vec![Teacher::new("T1")
///         .with_name("Dr. A")
///         .with_department("Science")
///         .with_primary_subject("Mathematics")
///         .with_max_credits(10)],
///     vec![math.clone()],
///     vec![ClassSection::new("C1")
///         .with_name("Science 1A")
///         .with_department("Science")
///         .with_subject(math)],
/// );
///
/// let scheduler = GreedyScheduler::new();
/// let mut rng = SmallRng::seed_from_u64(7);
/// let outcome = scheduler.generate(&snapshot, &mut rng).unwrap();
/// assert_eq!(outcome.timetable.entry_count(), 2);
/// assert!(outcome.shortfalls.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyScheduler {
    policy: CompatibilityPolicy,
}

impl GreedyScheduler {
    /// Creates a scheduler with the default compatibility policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the compatibility policy.
    pub fn with_policy(mut self, policy: CompatibilityPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Generates a timetable for the snapshot.
    ///
    /// Fails only when the snapshot has no classes. Under-scheduled
    /// subjects are reported as [`Shortfall`]s on the outcome, and the
    /// run continues through the remaining classes regardless.
    pub fn generate<R: Rng>(
        &self,
        snapshot: &TenantSnapshot,
        rng: &mut R,
    ) -> Result<GenerationOutcome, ScheduleError> {
        if snapshot.classes.is_empty() {
            return Err(ScheduleError::NoClasses);
        }

        info!(
            "generating timetable: {} classes, {} subjects, {} teachers",
            snapshot.classes.len(),
            snapshot.subjects.len(),
            snapshot.teachers.len()
        );

        let universe = TimeSlot::universe();
        let mut state = RunState::default();
        let mut timetable = Timetable::new();
        let mut shortfalls = Vec::new();

        for class in &snapshot.classes {
            debug!("scheduling class {}", class.name);

            let mut subjects = class.subjects_for_run(&snapshot.subjects);
            // Stable sort: equal credits keep their input order.
            subjects.sort_by(|a, b| b.credits.cmp(&a.credits));

            for subject in &subjects {
                let needed = required_hours(subject);
                let committed = self.schedule_subject(
                    class,
                    subject,
                    &snapshot.teachers,
                    &universe,
                    &mut state,
                    &mut timetable,
                    rng,
                );
                if committed < needed {
                    let missing = needed - committed;
                    warn!(
                        "could not schedule {missing} of {needed} hours for {} in {}",
                        subject.name, class.name
                    );
                    shortfalls.push(Shortfall {
                        class_name: class.name.clone(),
                        subject_name: subject.name.clone(),
                        missing_hours: missing,
                    });
                }
            }
        }

        info!(
            "generation done: {} entries, {} shortfalls",
            timetable.entry_count(),
            shortfalls.len()
        );

        Ok(GenerationOutcome {
            timetable,
            shortfalls,
        })
    }

    /// Commits up to `weekly_hours` slots for one subject in one class.
    ///
    /// Returns the number of hours actually committed.
    #[allow(clippy::too_many_arguments)]
    fn schedule_subject<R: Rng>(
        &self,
        class: &ClassSection,
        subject: &Subject,
        teachers: &[Teacher],
        universe: &[TimeSlot],
        state: &mut RunState,
        timetable: &mut Timetable,
        rng: &mut R,
    ) -> u32 {
        let mut hours_needed = required_hours(subject);
        let mut committed = 0;

        let mut slots = universe.to_vec();
        slots.shuffle(rng);

        for slot in &slots {
            if hours_needed == 0 {
                break;
            }

            let key = slot.key();
            if !state.is_class_free(&class.id, key) {
                continue;
            }

            let Some(teacher) = self.pick_teacher(subject, key, teachers, state) else {
                continue;
            };

            timetable.add_entry(ScheduleEntry::new(slot.clone(), subject, teacher, class));
            state.commit(&class.id, &teacher.id, key);
            hours_needed -= 1;
            committed += 1;
        }

        committed
    }

    /// Picks the least-loaded admissible teacher for a slot.
    ///
    /// Admissible: compatible with the subject, available at the slot,
    /// slot not already occupied, and one more hour within capacity.
    /// Ties go to the earliest teacher in snapshot order.
    fn pick_teacher<'a>(
        &self,
        subject: &Subject,
        slot: SlotKey,
        teachers: &'a [Teacher],
        state: &RunState,
    ) -> Option<&'a Teacher> {
        let mut best: Option<(&Teacher, u32)> = None;

        for teacher in teachers {
            if !self.policy.can_teach(teacher, subject) {
                continue;
            }
            if !teacher.is_available(slot) {
                continue;
            }
            if !state.is_teacher_free(&teacher.id, slot) {
                continue;
            }
            let load = state.load(&teacher.id);
            if load + 1 > teacher.max_credits {
                continue;
            }
            if best.is_none_or(|(_, b)| load < b) {
                best = Some((teacher, load));
            }
        }

        best.map(|(t, _)| t)
    }
}

/// Required hours for a subject, capped at the universe size so a
/// pathological credit value cannot demand more slots than exist.
fn required_hours(subject: &Subject) -> u32 {
    subject.weekly_hours().min(SLOT_COUNT as u32)
}
