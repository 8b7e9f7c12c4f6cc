#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod alternatives;
pub mod catalog;
pub mod composer;
pub mod error;
pub mod plan;
pub mod service;
pub mod session;

pub use alternatives::find_alternatives;
pub use catalog::{Catalog, EquipmentCategory, LibraryExercise, MuscleGroup};
pub use composer::{
    GeneratedExercise, GeneratedPlan, PlanComposer, PlanConstraints, PlanGenerator, ZonePolicy,
};
pub use error::{GenerationError, StorageError};
pub use plan::{
    CardioBlock, PlannedExercise, RepTarget, Sets, SetsError, TargetZone, TargetZoneError,
    WorkoutPlan,
};
pub use service::{HistoryRepository, HistoryService, Service};
pub use session::{
    CompletedSet, LoggedExercise, SessionTracker, WorkoutLog, WorkoutLogID, PLAN_NAME,
};
