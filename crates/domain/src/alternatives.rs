use crate::{Catalog, LibraryExercise, PlannedExercise};

/// Ranked replacement candidates for an exercise in a plan.
///
/// Candidates share the exercise's muscle group; the entry with the same
/// catalog id is excluded (by id, not by name). When the exercise resolves
/// to a catalog entry with a specific target, exact specific-target matches
/// come first. The sort is a stable partition, so catalog order is
/// preserved within each half.
#[must_use]
pub fn find_alternatives<'a>(
    catalog: &'a Catalog,
    exercise: &PlannedExercise,
) -> Vec<&'a LibraryExercise> {
    let Some(muscle_group) = exercise.muscle_group else {
        return Vec::new();
    };
    let current_id = exercise.exercise_id.as_deref();

    let mut alternatives = catalog
        .exercises()
        .filter(|e| e.muscle_group == muscle_group)
        .filter(|e| current_id != Some(e.id))
        .collect::<Vec<_>>();

    let specific_target = current_id
        .and_then(|id| catalog.exercise_by_id(id))
        .and_then(|e| e.specific_target);

    if let Some(target) = specific_target {
        alternatives.sort_by_key(|e| e.specific_target != Some(target));
    }

    alternatives
}
