use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use derive_more::Deref;
use log::warn;
use uuid::Uuid;

use crate::{Catalog, PlannedExercise, TargetZone, WorkoutPlan};

pub const PLAN_NAME: &str = "Daily Workout";

/// Weight and rep count actually performed for one set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletedSet {
    pub weight: f64,
    pub reps: u32,
}

/// Live tracking state for one in-progress plan.
///
/// Completion is stored in fixed-size slots, one per planned set, so a set's
/// index is a stable identity: un-marking a set clears its slot instead of
/// shifting its successors. Finishing consumes the tracker, which makes the
/// finished state terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionTracker {
    plan: WorkoutPlan,
    completed: BTreeMap<usize, Vec<Option<CompletedSet>>>,
    cardio_completed: bool,
}

impl SessionTracker {
    #[must_use]
    pub fn new(plan: WorkoutPlan) -> Self {
        Self {
            plan,
            completed: BTreeMap::new(),
            cardio_completed: false,
        }
    }

    #[must_use]
    pub fn plan(&self) -> &WorkoutPlan {
        &self.plan
    }

    #[must_use]
    pub fn cardio_completed(&self) -> bool {
        self.cardio_completed
    }

    /// Flips the warm-up completion flag, independent of exercise state.
    pub fn toggle_cardio(&mut self) {
        self.cardio_completed = !self.cardio_completed;
    }

    #[must_use]
    pub fn is_set_completed(&self, exercise_idx: usize, set_idx: usize) -> bool {
        self.completed
            .get(&exercise_idx)
            .is_some_and(|slots| slots.get(set_idx).is_some_and(Option::is_some))
    }

    /// Filled slots for the exercise at the given position, in set order.
    #[must_use]
    pub fn completed_sets(&self, exercise_idx: usize) -> Vec<CompletedSet> {
        self.completed
            .get(&exercise_idx)
            .map(|slots| slots.iter().flatten().copied().collect())
            .unwrap_or_default()
    }

    /// Marks the set done, or un-marks it when it already is. A newly
    /// marked set defaults to weight 0 and the rep target's lower bound.
    /// Out-of-range indices are ignored.
    pub fn toggle_set(&mut self, exercise_idx: usize, set_idx: usize) {
        let Some(exercise) = self.plan.exercises.get(exercise_idx) else {
            return;
        };
        if set_idx >= exercise.sets.count() {
            return;
        }
        let reps = exercise.reps.lower_bound();
        let slots = self
            .completed
            .entry(exercise_idx)
            .or_insert_with(|| vec![None; exercise.sets.count()]);
        slots[set_idx] = match slots[set_idx] {
            Some(_) => None,
            None => Some(CompletedSet { weight: 0.0, reps }),
        };
    }

    /// Replaces the exercise at the given position with a catalog entry,
    /// keeping the outgoing exercise's set count and rep target and
    /// clearing any completed sets at that position. Positions other than
    /// the swapped one are untouched. Unknown ids are ignored.
    pub fn swap_exercise(&mut self, exercise_idx: usize, new_id: &str, catalog: &Catalog) {
        let Some(current) = self.plan.exercises.get(exercise_idx) else {
            return;
        };
        let Some(replacement) = catalog.exercise_by_id(new_id) else {
            warn!("ignoring swap to unknown exercise id: {new_id}");
            return;
        };
        self.plan.exercises[exercise_idx] =
            PlannedExercise::from_library(replacement, current.sets, current.reps.clone());
        self.completed.remove(&exercise_idx);
    }

    /// Ends the session and snapshots it into an immutable log record.
    ///
    /// The cardio flag is intentionally not part of the log.
    #[must_use]
    pub fn finish(self) -> WorkoutLog {
        let exercises = self
            .plan
            .exercises
            .iter()
            .enumerate()
            .map(|(idx, exercise)| LoggedExercise {
                name: exercise.name.clone(),
                sets_completed: self.completed_sets(idx),
            })
            .collect();
        WorkoutLog {
            id: WorkoutLogID::new(),
            date: Utc::now(),
            plan_name: String::from(PLAN_NAME),
            target_zone: self.plan.target_zone,
            exercises,
        }
    }
}

/// Historical record of a finished session. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutLog {
    pub id: WorkoutLogID,
    pub date: DateTime<Utc>,
    pub plan_name: String,
    pub target_zone: TargetZone,
    pub exercises: Vec<LoggedExercise>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggedExercise {
    pub name: String,
    pub sets_completed: Vec<CompletedSet>,
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutLogID(Uuid);

impl WorkoutLogID {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutLogID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutLogID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}
