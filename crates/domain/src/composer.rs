use log::warn;

use crate::{
    CardioBlock, Catalog, GenerationError, PlannedExercise, RepTarget, Sets, TargetZone,
    WorkoutPlan,
};

/// External plan-generation collaborator.
///
/// The generator receives the resolved target zone, the full catalog as
/// selection context and the structural constraints, and is expected to
/// answer with catalog ids only. Its output is validated by the composer,
/// never trusted.
#[allow(async_fn_in_trait)]
pub trait PlanGenerator {
    async fn generate(
        &self,
        zone: TargetZone,
        catalog: &Catalog,
        constraints: &PlanConstraints,
    ) -> Result<GeneratedPlan, GenerationError>;
}

/// Structural constraints passed to the generator. Advisory only, the
/// composer does not re-validate them on the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanConstraints {
    pub total_duration: &'static str,
    pub cardio_warmup: &'static str,
    pub resistance_duration: &'static str,
    pub min_exercises: u32,
    pub max_exercises: u32,
    pub rep_range: &'static str,
    pub equipment_preference: &'static str,
}

impl Default for PlanConstraints {
    fn default() -> Self {
        Self {
            total_duration: "45-50 minutes",
            cardio_warmup: "15 minutes",
            resistance_duration: "30 minutes",
            min_exercises: 5,
            max_exercises: 7,
            rep_range: "12-15",
            equipment_preference: "Machine > Dumbbell/Cable > Bodyweight",
        }
    }
}

/// Unresolved generator output: catalog references plus session parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPlan {
    pub cardio: CardioBlock,
    pub exercises: Vec<GeneratedExercise>,
    pub estimated_duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedExercise {
    pub exercise_id: String,
    pub sets: u32,
    pub reps: String,
    pub notes: String,
}

/// How a requested focus maps to the day's target zone.
///
/// Product-policy choice, kept pluggable. The app uses `Direct`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ZonePolicy {
    /// Today's zone is the zone named by the focus text.
    #[default]
    Direct,
    /// Today's zone is the opposite of the focus text, treating the focus
    /// as yesterday's session (anti-repetition).
    Rotation,
}

impl ZonePolicy {
    #[must_use]
    pub fn target_zone(self, focus: &str) -> TargetZone {
        let requested = TargetZone::from_focus(focus);
        match self {
            ZonePolicy::Direct => requested,
            ZonePolicy::Rotation => requested.opposite(),
        }
    }
}

/// Turns a free-text focus request into a structured workout plan.
pub struct PlanComposer<'a, G> {
    catalog: &'a Catalog,
    generator: &'a G,
    policy: ZonePolicy,
    constraints: PlanConstraints,
}

impl<'a, G: PlanGenerator> PlanComposer<'a, G> {
    pub fn new(catalog: &'a Catalog, generator: &'a G, policy: ZonePolicy) -> Self {
        Self {
            catalog,
            generator,
            policy,
            constraints: PlanConstraints::default(),
        }
    }

    /// Generates today's plan for the given focus.
    ///
    /// Generator-returned ids that are not in the catalog are dropped, as
    /// are entries with an invalid set count. Only an empty result is an
    /// error.
    pub async fn compose_plan(&self, focus: &str) -> Result<WorkoutPlan, GenerationError> {
        let zone = self.policy.target_zone(focus);
        let generated = self
            .generator
            .generate(zone, self.catalog, &self.constraints)
            .await?;

        let mut exercises = Vec::new();
        for entry in generated.exercises {
            let Some(library_exercise) = self.catalog.exercise_by_id(&entry.exercise_id) else {
                warn!("dropping unknown exercise id: {}", entry.exercise_id);
                continue;
            };
            let Ok(sets) = Sets::new(entry.sets) else {
                warn!(
                    "dropping exercise with invalid set count: {}",
                    entry.exercise_id
                );
                continue;
            };
            let mut exercise =
                PlannedExercise::from_library(library_exercise, sets, RepTarget::new(&entry.reps));
            if !entry.notes.trim().is_empty() {
                exercise.notes = entry.notes;
            }
            exercises.push(exercise);
        }

        if exercises.is_empty() {
            return Err(GenerationError::NoUsableExercises);
        }

        Ok(WorkoutPlan {
            target_zone: zone,
            cardio: generated.cardio,
            exercises,
            estimated_duration: generated.estimated_duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    struct StubGenerator {
        result: Result<GeneratedPlan, GenerationError>,
    }

    impl PlanGenerator for StubGenerator {
        async fn generate(
            &self,
            _zone: TargetZone,
            _catalog: &Catalog,
            _constraints: &PlanConstraints,
        ) -> Result<GeneratedPlan, GenerationError> {
            self.result.clone()
        }
    }

    fn cardio() -> CardioBlock {
        CardioBlock {
            name: String::from("Treadmill"),
            duration: String::from("15 minutes"),
            notes: String::from("Brisk incline walk."),
        }
    }

    fn generated(exercises: Vec<GeneratedExercise>) -> GeneratedPlan {
        GeneratedPlan {
            cardio: cardio(),
            exercises,
            estimated_duration: String::from("45 minutes"),
        }
    }

    fn entry(exercise_id: &str, sets: u32, reps: &str, notes: &str) -> GeneratedExercise {
        GeneratedExercise {
            exercise_id: exercise_id.to_string(),
            sets,
            reps: reps.to_string(),
            notes: notes.to_string(),
        }
    }

    #[rstest]
    #[case(ZonePolicy::Direct, "Legs & Abs", TargetZone::LowerBody)]
    #[case(ZonePolicy::Direct, "Arms, Chest, Back", TargetZone::UpperBody)]
    #[case(ZonePolicy::Rotation, "Legs & Abs", TargetZone::UpperBody)]
    #[case(ZonePolicy::Rotation, "Upper body", TargetZone::LowerBody)]
    #[case(ZonePolicy::Rotation, "Rest", TargetZone::FullBody)]
    fn test_zone_policy(
        #[case] policy: ZonePolicy,
        #[case] focus: &str,
        #[case] expected: TargetZone,
    ) {
        assert_eq!(policy.target_zone(focus), expected);
    }

    #[test]
    fn test_compose_plan_resolves_catalog_ids() {
        let catalog = Catalog::library();
        let generator = StubGenerator {
            result: Ok(generated(vec![
                entry("leg-press", 3, "12-15", ""),
                entry("made-up-exercise", 3, "12-15", ""),
                entry("seated-leg-curl", 3, "12-15", "Slow negatives."),
                entry("plank", 0, "30s", ""),
            ])),
        };
        let composer = PlanComposer::new(&catalog, &generator, ZonePolicy::Direct);

        let plan = block_on(composer.compose_plan("Legs & Abs")).unwrap();

        assert_eq!(plan.target_zone, TargetZone::LowerBody);
        assert_eq!(
            plan.exercises
                .iter()
                .map(|e| e.exercise_id.as_deref().unwrap())
                .collect::<Vec<_>>(),
            vec!["leg-press", "seated-leg-curl"]
        );
        // Catalog default notes unless the generator provided its own.
        assert_eq!(
            plan.exercises[0].notes,
            "Feet shoulder width in middle of platform. Do not lock knees."
        );
        assert_eq!(plan.exercises[1].notes, "Slow negatives.");
        assert_eq!(plan.exercises[0].equipment, "Machine");
        assert_eq!(
            plan.exercises[0].muscle_group,
            Some(crate::MuscleGroup::Legs)
        );
    }

    #[test]
    fn test_compose_plan_empty_result_is_an_error() {
        let catalog = Catalog::library();
        let generator = StubGenerator {
            result: Ok(generated(vec![entry("made-up-exercise", 3, "12-15", "")])),
        };
        let composer = PlanComposer::new(&catalog, &generator, ZonePolicy::Direct);

        assert_eq!(
            block_on(composer.compose_plan("Legs & Abs")),
            Err(GenerationError::NoUsableExercises)
        );
    }

    #[test]
    fn test_compose_plan_propagates_generator_failure() {
        let catalog = Catalog::library();
        let generator = StubGenerator {
            result: Err(GenerationError::Generator(String::from("no connection"))),
        };
        let composer = PlanComposer::new(&catalog, &generator, ZonePolicy::Direct);

        assert_eq!(
            block_on(composer.compose_plan("Full Body")),
            Err(GenerationError::Generator(String::from("no connection")))
        );
    }
}
