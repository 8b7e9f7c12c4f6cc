use log::{debug, error};

use crate::{StorageError, WorkoutLog};

/// Persisted, ordered, append-only workout history.
#[allow(async_fn_in_trait)]
pub trait HistoryRepository {
    async fn read_logs(&self) -> Result<Vec<WorkoutLog>, StorageError>;
    async fn append_log(&self, log: WorkoutLog) -> Result<WorkoutLog, StorageError>;
}

#[allow(async_fn_in_trait)]
pub trait HistoryService {
    async fn get_history(&self) -> Result<Vec<WorkoutLog>, StorageError>;
    async fn record_workout(&self, log: WorkoutLog) -> Result<WorkoutLog, StorageError>;
}

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                StorageError::NoConnection => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                StorageError::Other(_) => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: HistoryRepository> HistoryService for Service<R> {
    async fn get_history(&self) -> Result<Vec<WorkoutLog>, StorageError> {
        log_on_error!(self.repository.read_logs(), "get", "workout history")
    }

    async fn record_workout(&self, log: WorkoutLog) -> Result<WorkoutLog, StorageError> {
        log_on_error!(self.repository.append_log(log), "record", "workout")
    }
}
