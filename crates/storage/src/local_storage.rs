use chrono::{DateTime, Utc};
use gloo_storage::Storage as GlooStorage;
use gymbuddy_domain as domain;
use uuid::Uuid;

/// Workout history persisted in browser local storage.
///
/// The full sequence is rewritten on every append. Absent or corrupt data
/// is recovered by starting with an empty history; corruption is logged,
/// never surfaced.
pub struct History;

const KEY_HISTORY: &str = "gymBuddyHistory";

impl History {
    fn read_raw() -> Vec<WorkoutLog> {
        match gloo_storage::LocalStorage::get(KEY_HISTORY) {
            Ok(logs) => logs,
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Vec::new(),
            Err(err) => {
                log::warn!("discarding unreadable workout history: {err}");
                Vec::new()
            }
        }
    }
}

impl domain::HistoryRepository for History {
    async fn read_logs(&self) -> Result<Vec<domain::WorkoutLog>, domain::StorageError> {
        Ok(Self::read_raw()
            .into_iter()
            .filter_map(|log| match domain::WorkoutLog::try_from(log) {
                Ok(log) => Some(log),
                Err(err) => {
                    log::warn!("dropping stored workout log: {err}");
                    None
                }
            })
            .collect())
    }

    async fn append_log(
        &self,
        log: domain::WorkoutLog,
    ) -> Result<domain::WorkoutLog, domain::StorageError> {
        let mut logs = Self::read_raw();
        logs.push(WorkoutLog::from(&log));
        gloo_storage::LocalStorage::set(KEY_HISTORY, logs)
            .map_err(|err| domain::StorageError::Other(Box::new(err)))?;
        Ok(log)
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct WorkoutLog {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub plan_name: String,
    pub target_zone: String,
    pub exercises: Vec<LoggedExercise>,
}

impl From<&domain::WorkoutLog> for WorkoutLog {
    fn from(value: &domain::WorkoutLog) -> Self {
        Self {
            id: *value.id,
            date: value.date,
            plan_name: value.plan_name.clone(),
            target_zone: value.target_zone.to_string(),
            exercises: value.exercises.iter().map(Into::into).collect(),
        }
    }
}

impl TryFrom<WorkoutLog> for domain::WorkoutLog {
    type Error = domain::TargetZoneError;

    fn try_from(value: WorkoutLog) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            date: value.date,
            plan_name: value.plan_name,
            target_zone: value.target_zone.parse()?,
            exercises: value.exercises.into_iter().map(Into::into).collect(),
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct LoggedExercise {
    pub name: String,
    pub sets_completed: Vec<CompletedSet>,
}

impl From<&domain::LoggedExercise> for LoggedExercise {
    fn from(value: &domain::LoggedExercise) -> Self {
        Self {
            name: value.name.clone(),
            sets_completed: value.sets_completed.iter().map(Into::into).collect(),
        }
    }
}

impl From<LoggedExercise> for domain::LoggedExercise {
    fn from(value: LoggedExercise) -> Self {
        Self {
            name: value.name,
            sets_completed: value.sets_completed.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CompletedSet {
    pub weight: f64,
    pub reps: u32,
}

impl From<&domain::CompletedSet> for CompletedSet {
    fn from(value: &domain::CompletedSet) -> Self {
        Self {
            weight: value.weight,
            reps: value.reps,
        }
    }
}

impl From<CompletedSet> for domain::CompletedSet {
    fn from(value: CompletedSet) -> Self {
        Self {
            weight: value.weight,
            reps: value.reps,
        }
    }
}
