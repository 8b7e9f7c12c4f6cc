use std::fmt;

/// An immutable catalog entry. Defined at process start, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryExercise {
    pub id: &'static str,
    pub name: &'static str,
    pub muscle_group: MuscleGroup,
    pub specific_target: Option<&'static str>,
    pub equipment: EquipmentCategory,
    pub default_notes: &'static str,
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum MuscleGroup {
    Chest,
    Back,
    Legs,
    Shoulders,
    Arms,
    Core,
    FullBody,
    Cardio,
}

impl MuscleGroup {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Arms => "Arms",
            MuscleGroup::Core => "Core",
            MuscleGroup::FullBody => "Full Body",
            MuscleGroup::Cardio => "Cardio",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum EquipmentCategory {
    Machine,
    Dumbbell,
    Barbell,
    Bodyweight,
    Cable,
    Cardio,
    SmithMachine,
}

impl EquipmentCategory {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            EquipmentCategory::Machine => "Machine",
            EquipmentCategory::Dumbbell => "Dumbbell",
            EquipmentCategory::Barbell => "Barbell",
            EquipmentCategory::Bodyweight => "Bodyweight",
            EquipmentCategory::Cable => "Cable",
            EquipmentCategory::Cardio => "Cardio",
            EquipmentCategory::SmithMachine => "Smith Machine",
        }
    }
}

impl fmt::Display for EquipmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Fixed, ordered collection of known exercises.
///
/// Constructed once at startup and passed to the components that need it,
/// allowing substitute catalogs in tests.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    exercises: &'static [LibraryExercise],
}

impl Catalog {
    #[must_use]
    pub fn new(exercises: &'static [LibraryExercise]) -> Self {
        Self { exercises }
    }

    /// The built-in exercise library.
    #[must_use]
    pub fn library() -> Self {
        Self::new(&EXERCISE_LIBRARY)
    }

    #[must_use]
    pub fn exercise_by_id(&self, id: &str) -> Option<&LibraryExercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    /// All entries for a muscle group, catalog order preserved.
    #[must_use]
    pub fn exercises_by_muscle_group(&self, muscle_group: MuscleGroup) -> Vec<&LibraryExercise> {
        self.exercises
            .iter()
            .filter(|e| e.muscle_group == muscle_group)
            .collect()
    }

    pub fn exercises(&self) -> impl Iterator<Item = &LibraryExercise> {
        self.exercises.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::library()
    }
}

static EXERCISE_LIBRARY: [LibraryExercise; 62] = [
    // Chest, pressing
    LibraryExercise {
        id: "chest-press-machine",
        name: "Seated Chest Press",
        muscle_group: MuscleGroup::Chest,
        specific_target: Some("Mid Chest"),
        equipment: EquipmentCategory::Machine,
        default_notes: "Keep back flat against pad, push forward evenly.",
    },
    LibraryExercise {
        id: "incline-chest-press-machine",
        name: "Incline Chest Press Machine",
        muscle_group: MuscleGroup::Chest,
        specific_target: Some("Upper Chest"),
        equipment: EquipmentCategory::Machine,
        default_notes: "Press upward at an angle, focus on upper pec contraction.",
    },
    LibraryExercise {
        id: "db-bench-press",
        name: "Dumbbell Bench Press",
        muscle_group: MuscleGroup::Chest,
        specific_target: Some("Mid Chest"),
        equipment: EquipmentCategory::Dumbbell,
        default_notes: "Lower weights to chest level, press up and slightly in.",
    },
    LibraryExercise {
        id: "incline-db-press",
        name: "Incline Dumbbell Press",
        muscle_group: MuscleGroup::Chest,
        specific_target: Some("Upper Chest"),
        equipment: EquipmentCategory::Dumbbell,
        default_notes: "Bench at 30-45 degrees. Press straight up from shoulders.",
    },
    LibraryExercise {
        id: "decline-pushups",
        name: "Decline Push-ups",
        muscle_group: MuscleGroup::Chest,
        specific_target: Some("Upper Chest"),
        equipment: EquipmentCategory::Bodyweight,
        default_notes: "Feet on bench, hands on floor. Keep core tight.",
    },
    LibraryExercise {
        id: "pushups",
        name: "Push-ups",
        muscle_group: MuscleGroup::Chest,
        specific_target: Some("Mid Chest"),
        equipment: EquipmentCategory::Bodyweight,
        default_notes: "Keep body in straight line, chest to floor.",
    },
    LibraryExercise {
        id: "dips-chest",
        name: "Dips (Chest Focus)",
        muscle_group: MuscleGroup::Chest,
        specific_target: Some("Lower Chest"),
        equipment: EquipmentCategory::Bodyweight,
        default_notes: "Lean forward slightly to engage chest over triceps.",
    },
    // Chest, flys
    LibraryExercise {
        id: "pec-deck",
        name: "Pec Deck Fly",
        muscle_group: MuscleGroup::Chest,
        specific_target: Some("Inner Chest"),
        equipment: EquipmentCategory::Machine,
        default_notes: "Squeeze chest at the center, slight bend in elbows.",
    },
    LibraryExercise {
        id: "cable-fly-high",
        name: "High-to-Low Cable Fly",
        muscle_group: MuscleGroup::Chest,
        specific_target: Some("Lower Chest"),
        equipment: EquipmentCategory::Cable,
        default_notes: "Pull handles down towards waist, keeping chest up.",
    },
    LibraryExercise {
        id: "cable-fly-low",
        name: "Low-to-High Cable Fly",
        muscle_group: MuscleGroup::Chest,
        specific_target: Some("Upper Chest"),
        equipment: EquipmentCategory::Cable,
        default_notes: "Scoop handles up and in towards chin level.",
    },
    LibraryExercise {
        id: "db-fly",
        name: "Dumbbell Fly",
        muscle_group: MuscleGroup::Chest,
        specific_target: Some("Outer Chest"),
        equipment: EquipmentCategory::Dumbbell,
        default_notes: "Wide arc, feel the stretch at the bottom. Hug a tree to close.",
    },
    // Back, vertical pull
    LibraryExercise {
        id: "lat-pulldown",
        name: "Lat Pulldown (Wide Grip)",
        muscle_group: MuscleGroup::Back,
        specific_target: Some("Lats (Width)"),
        equipment: EquipmentCategory::Machine,
        default_notes: "Pull bar to upper chest, squeeze shoulder blades down.",
    },
    LibraryExercise {
        id: "close-grip-pulldown",
        name: "Close Grip Lat Pulldown",
        muscle_group: MuscleGroup::Back,
        specific_target: Some("Lower Lats"),
        equipment: EquipmentCategory::Machine,
        default_notes: "Use v-handle, pull to upper chest, keep elbows in.",
    },
    LibraryExercise {
        id: "assisted-pullup",
        name: "Assisted Pull-up",
        muscle_group: MuscleGroup::Back,
        specific_target: Some("Lats (Width)"),
        equipment: EquipmentCategory::Machine,
        default_notes: "Full range of motion, control the descent.",
    },
    LibraryExercise {
        id: "pullups",
        name: "Pull-ups",
        muscle_group: MuscleGroup::Back,
        specific_target: Some("Lats (Width)"),
        equipment: EquipmentCategory::Bodyweight,
        default_notes: "Wide grip, chin over bar.",
    },
    // Back, horizontal pull
    LibraryExercise {
        id: "seated-row-machine",
        name: "Seated Machine Row",
        muscle_group: MuscleGroup::Back,
        specific_target: Some("Mid Back"),
        equipment: EquipmentCategory::Machine,
        default_notes: "Keep chest up, pull handle to stomach.",
    },
    LibraryExercise {
        id: "cable-row",
        name: "Seated Cable Row",
        muscle_group: MuscleGroup::Back,
        specific_target: Some("Mid Back"),
        equipment: EquipmentCategory::Cable,
        default_notes: "Keep back straight, pull handle to waist.",
    },
    LibraryExercise {
        id: "db-row",
        name: "Single Arm Dumbbell Row",
        muscle_group: MuscleGroup::Back,
        specific_target: Some("Lats"),
        equipment: EquipmentCategory::Dumbbell,
        default_notes: "Flat back, support on bench, pull weight to hip.",
    },
    LibraryExercise {
        id: "t-bar-row-machine",
        name: "T-Bar Row (Chest Supported)",
        muscle_group: MuscleGroup::Back,
        specific_target: Some("Mid Back"),
        equipment: EquipmentCategory::Machine,
        default_notes: "Keep chest on pad, squeeze back at top.",
    },
    LibraryExercise {
        id: "face-pull",
        name: "Face Pull",
        muscle_group: MuscleGroup::Back,
        specific_target: Some("Upper Back/Rear Delts"),
        equipment: EquipmentCategory::Cable,
        default_notes: "Pull rope to forehead, elbows high and wide.",
    },
    // Back, lower back
    LibraryExercise {
        id: "back-extension",
        name: "Back Extension",
        muscle_group: MuscleGroup::Back,
        specific_target: Some("Lower Back"),
        equipment: EquipmentCategory::Bodyweight,
        default_notes: "Cross arms over chest, hinge at hips, neutral spine.",
    },
    // Legs, quads
    LibraryExercise {
        id: "leg-press",
        name: "Leg Press",
        muscle_group: MuscleGroup::Legs,
        specific_target: Some("Quads"),
        equipment: EquipmentCategory::Machine,
        default_notes: "Feet shoulder width in middle of platform. Do not lock knees.",
    },
    LibraryExercise {
        id: "hack-squat",
        name: "Hack Squat Machine",
        muscle_group: MuscleGroup::Legs,
        specific_target: Some("Quads"),
        equipment: EquipmentCategory::Machine,
        default_notes: "Back flat against pad, go deep, drive through heels.",
    },
    LibraryExercise {
        id: "leg-extension",
        name: "Leg Extension",
        muscle_group: MuscleGroup::Legs,
        specific_target: Some("Quads"),
        equipment: EquipmentCategory::Machine,
        default_notes: "Squeeze quads hard at the top, control the lowering.",
    },
    LibraryExercise {
        id: "goblet-squat",
        name: "Goblet Squat",
        muscle_group: MuscleGroup::Legs,
        specific_target: Some("Quads/Glutes"),
        equipment: EquipmentCategory::Dumbbell,
        default_notes: "Hold weight at chest, sit back deep, keep chest up.",
    },
    LibraryExercise {
        id: "walking-lunges",
        name: "Walking Lunges",
        muscle_group: MuscleGroup::Legs,
        specific_target: Some("Quads/Glutes"),
        equipment: EquipmentCategory::Bodyweight,
        default_notes: "Step forward, back knee almost touches ground. Keep torso upright.",
    },
    LibraryExercise {
        id: "bulgarian-split-squat",
        name: "Bulgarian Split Squat",
        muscle_group: MuscleGroup::Legs,
        specific_target: Some("Quads/Glutes"),
        equipment: EquipmentCategory::Dumbbell,
        default_notes: "Rear foot on bench. Drop back knee to floor.",
    },
    // Legs, hamstrings and glutes
    LibraryExercise {
        id: "seated-leg-curl",
        name: "Seated Leg Curl",
        muscle_group: MuscleGroup::Legs,
        specific_target: Some("Hamstrings"),
        equipment: EquipmentCategory::Machine,
        default_notes: "Lock pad firmly on thighs. Curl legs fully under you.",
    },
    LibraryExercise {
        id: "lying-leg-curl",
        name: "Lying Leg Curl",
        muscle_group: MuscleGroup::Legs,
        specific_target: Some("Hamstrings"),
        equipment: EquipmentCategory::Machine,
        default_notes: "Hips down on bench, curl heels to glutes.",
    },
    LibraryExercise {
        id: "rdl-db",
        name: "Romanian Deadlift (DB)",
        muscle_group: MuscleGroup::Legs,
        specific_target: Some("Hamstrings/Glutes"),
        equipment: EquipmentCategory::Dumbbell,
        default_notes: "Slight knee bend, hinge at hips, flat back. Feel hamstring stretch.",
    },
    LibraryExercise {
        id: "glute-bridge-machine",
        name: "Glute Drive / Bridge Machine",
        muscle_group: MuscleGroup::Legs,
        specific_target: Some("Glutes"),
        equipment: EquipmentCategory::Machine,
        default_notes: "Belt across hips, drive hips up, squeeze glutes at top.",
    },
    LibraryExercise {
        id: "cable-kickback",
        name: "Cable Glute Kickback",
        muscle_group: MuscleGroup::Legs,
        specific_target: Some("Glutes"),
        equipment: EquipmentCategory::Cable,
        default_notes: "Ankle strap, kick straight back, squeeze glute.",
    },
    // Legs, calves
    LibraryExercise {
        id: "calf-raise-machine",
        name: "Standing Calf Raise",
        muscle_group: MuscleGroup::Legs,
        specific_target: Some("Calves"),
        equipment: EquipmentCategory::Machine,
        default_notes: "Full stretch at bottom, high on toes at top.",
    },
    LibraryExercise {
        id: "seated-calf-raise",
        name: "Seated Calf Raise",
        muscle_group: MuscleGroup::Legs,
        specific_target: Some("Calves"),
        equipment: EquipmentCategory::Machine,
        default_notes: "Focus on soleus muscle. Controlled motion.",
    },
    // Shoulders, overhead press
    LibraryExercise {
        id: "shoulder-press-machine",
        name: "Shoulder Press Machine",
        muscle_group: MuscleGroup::Shoulders,
        specific_target: Some("Front/Side Delts"),
        equipment: EquipmentCategory::Machine,
        default_notes: "Press straight up, don't arch back excessively.",
    },
    LibraryExercise {
        id: "db-shoulder-press",
        name: "Seated DB Shoulder Press",
        muscle_group: MuscleGroup::Shoulders,
        specific_target: Some("Front/Side Delts"),
        equipment: EquipmentCategory::Dumbbell,
        default_notes: "Palms forward, press overhead to touch.",
    },
    LibraryExercise {
        id: "arnold-press",
        name: "Arnold Press",
        muscle_group: MuscleGroup::Shoulders,
        specific_target: Some("Front/Side Delts"),
        equipment: EquipmentCategory::Dumbbell,
        default_notes: "Start palms facing you, rotate out as you press up.",
    },
    // Shoulders, isolation
    LibraryExercise {
        id: "db-lateral-raise",
        name: "Dumbbell Lateral Raise",
        muscle_group: MuscleGroup::Shoulders,
        specific_target: Some("Side Delts"),
        equipment: EquipmentCategory::Dumbbell,
        default_notes: "Lift arms to side until parallel with floor. Pour the pitcher.",
    },
    LibraryExercise {
        id: "cable-lateral-raise",
        name: "Cable Lateral Raise",
        muscle_group: MuscleGroup::Shoulders,
        specific_target: Some("Side Delts"),
        equipment: EquipmentCategory::Cable,
        default_notes: "Cable passes behind back or in front. Constant tension.",
    },
    LibraryExercise {
        id: "machine-lateral-raise",
        name: "Lateral Raise Machine",
        muscle_group: MuscleGroup::Shoulders,
        specific_target: Some("Side Delts"),
        equipment: EquipmentCategory::Machine,
        default_notes: "Elbows against pads, lift with elbows.",
    },
    LibraryExercise {
        id: "front-raise-db",
        name: "Dumbbell Front Raise",
        muscle_group: MuscleGroup::Shoulders,
        specific_target: Some("Front Delts"),
        equipment: EquipmentCategory::Dumbbell,
        default_notes: "Lift straight in front to shoulder height.",
    },
    LibraryExercise {
        id: "reverse-fly-machine",
        name: "Reverse Pec Deck",
        muscle_group: MuscleGroup::Shoulders,
        specific_target: Some("Rear Delts"),
        equipment: EquipmentCategory::Machine,
        default_notes: "Sit facing pad, pull arms back, squeeze rear delts.",
    },
    // Arms, biceps
    LibraryExercise {
        id: "bicep-curl-machine",
        name: "Preacher Curl Machine",
        muscle_group: MuscleGroup::Arms,
        specific_target: Some("Biceps"),
        equipment: EquipmentCategory::Machine,
        default_notes: "Keep elbows on pad, curl fully.",
    },
    LibraryExercise {
        id: "db-bicep-curl",
        name: "Standing Dumbbell Curl",
        muscle_group: MuscleGroup::Arms,
        specific_target: Some("Biceps"),
        equipment: EquipmentCategory::Dumbbell,
        default_notes: "Rotate palms up as you lift (supinate).",
    },
    LibraryExercise {
        id: "hammer-curl",
        name: "Hammer Curls",
        muscle_group: MuscleGroup::Arms,
        specific_target: Some("Biceps/Forearms"),
        equipment: EquipmentCategory::Dumbbell,
        default_notes: "Palms facing each other throughout the movement.",
    },
    LibraryExercise {
        id: "cable-bicep-curl",
        name: "Cable Bicep Curl",
        muscle_group: MuscleGroup::Arms,
        specific_target: Some("Biceps"),
        equipment: EquipmentCategory::Cable,
        default_notes: "Bar attachment, elbows at sides, curl up.",
    },
    LibraryExercise {
        id: "incline-db-curl",
        name: "Incline Dumbbell Curl",
        muscle_group: MuscleGroup::Arms,
        specific_target: Some("Biceps (Stretch)"),
        equipment: EquipmentCategory::Dumbbell,
        default_notes: "Seated on incline bench, arms hanging back. Full stretch.",
    },
    // Arms, triceps
    LibraryExercise {
        id: "tricep-press-machine",
        name: "Tricep Press Machine",
        muscle_group: MuscleGroup::Arms,
        specific_target: Some("Triceps"),
        equipment: EquipmentCategory::Machine,
        default_notes: "Push down, keeping elbows close to body.",
    },
    LibraryExercise {
        id: "cable-rope-pushdown",
        name: "Cable Rope Pushdown",
        muscle_group: MuscleGroup::Arms,
        specific_target: Some("Triceps"),
        equipment: EquipmentCategory::Cable,
        default_notes: "Spread rope at bottom, keep elbows locked at sides.",
    },
    LibraryExercise {
        id: "skullcrushers-db",
        name: "Dumbbell Skullcrushers",
        muscle_group: MuscleGroup::Arms,
        specific_target: Some("Triceps"),
        equipment: EquipmentCategory::Dumbbell,
        default_notes: "Lying flat, bend at elbows bringing weights to ears.",
    },
    LibraryExercise {
        id: "overhead-tricep-db",
        name: "Overhead Dumbbell Extension",
        muscle_group: MuscleGroup::Arms,
        specific_target: Some("Triceps (Long Head)"),
        equipment: EquipmentCategory::Dumbbell,
        default_notes: "Seated or standing, one heavy DB behind head.",
    },
    LibraryExercise {
        id: "bench-dips",
        name: "Bench Dips",
        muscle_group: MuscleGroup::Arms,
        specific_target: Some("Triceps"),
        equipment: EquipmentCategory::Bodyweight,
        default_notes: "Lower hips, keep back close to bench. Legs straight for harder variation.",
    },
    // Core
    LibraryExercise {
        id: "ab-crunch-machine",
        name: "Ab Crunch Machine",
        muscle_group: MuscleGroup::Core,
        specific_target: Some("Upper Abs"),
        equipment: EquipmentCategory::Machine,
        default_notes: "Use abs to curl forward, not arms.",
    },
    LibraryExercise {
        id: "plank",
        name: "Plank",
        muscle_group: MuscleGroup::Core,
        specific_target: Some("Core Stability"),
        equipment: EquipmentCategory::Bodyweight,
        default_notes: "Straight line from head to heels, core tight, hold.",
    },
    LibraryExercise {
        id: "hanging-leg-raise",
        name: "Hanging Leg Raise",
        muscle_group: MuscleGroup::Core,
        specific_target: Some("Lower Abs"),
        equipment: EquipmentCategory::Bodyweight,
        default_notes: "Hang from bar, lift knees to chest.",
    },
    LibraryExercise {
        id: "cable-woodchopper",
        name: "Cable Woodchopper",
        muscle_group: MuscleGroup::Core,
        specific_target: Some("Obliques"),
        equipment: EquipmentCategory::Cable,
        default_notes: "Rotate torso against resistance, pivot back foot.",
    },
    LibraryExercise {
        id: "russian-twist",
        name: "Russian Twist",
        muscle_group: MuscleGroup::Core,
        specific_target: Some("Obliques"),
        equipment: EquipmentCategory::Bodyweight,
        default_notes: "Seated V-shape, rotate hands side to side.",
    },
    // Cardio
    LibraryExercise {
        id: "treadmill",
        name: "Treadmill",
        muscle_group: MuscleGroup::Cardio,
        specific_target: Some("Endurance"),
        equipment: EquipmentCategory::Cardio,
        default_notes: "Steady pace or incline walk.",
    },
    LibraryExercise {
        id: "elliptical",
        name: "Elliptical",
        muscle_group: MuscleGroup::Cardio,
        specific_target: Some("Low Impact"),
        equipment: EquipmentCategory::Cardio,
        default_notes: "Use handles to engage arms.",
    },
    LibraryExercise {
        id: "rower",
        name: "Rowing Machine",
        muscle_group: MuscleGroup::Cardio,
        specific_target: Some("Full Body Cardio"),
        equipment: EquipmentCategory::Cardio,
        default_notes: "Drive with legs, then pull with arms.",
    },
    LibraryExercise {
        id: "bike",
        name: "Stationary Bike",
        muscle_group: MuscleGroup::Cardio,
        specific_target: Some("Leg Endurance"),
        equipment: EquipmentCategory::Cardio,
        default_notes: "Adjust seat height so leg is almost straight at bottom.",
    },
    LibraryExercise {
        id: "stairmaster",
        name: "StairMaster",
        muscle_group: MuscleGroup::Cardio,
        specific_target: Some("Glutes/Calves"),
        equipment: EquipmentCategory::Cardio,
        default_notes: "Don't lean too heavily on the rails.",
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_catalog_ids_unique() {
        let catalog = Catalog::library();
        let ids = catalog.exercises().map(|e| e.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_catalog_exercise_by_id() {
        let catalog = Catalog::library();
        assert_eq!(
            catalog.exercise_by_id("leg-press").map(|e| e.name),
            Some("Leg Press")
        );
        assert_eq!(catalog.exercise_by_id("unknown"), None);
    }

    #[rstest]
    #[case(MuscleGroup::Chest, 11)]
    #[case(MuscleGroup::Back, 10)]
    #[case(MuscleGroup::Legs, 13)]
    #[case(MuscleGroup::Shoulders, 8)]
    #[case(MuscleGroup::Arms, 10)]
    #[case(MuscleGroup::Core, 5)]
    #[case(MuscleGroup::Cardio, 5)]
    #[case(MuscleGroup::FullBody, 0)]
    fn test_catalog_exercises_by_muscle_group(
        #[case] muscle_group: MuscleGroup,
        #[case] expected: usize,
    ) {
        let catalog = Catalog::library();
        let exercises = catalog.exercises_by_muscle_group(muscle_group);
        assert_eq!(exercises.len(), expected);
        assert!(exercises.iter().all(|e| e.muscle_group == muscle_group));
    }

    #[test]
    fn test_catalog_order_preserved() {
        let catalog = Catalog::library();
        let chest = catalog.exercises_by_muscle_group(MuscleGroup::Chest);
        assert_eq!(chest.first().map(|e| e.id), Some("chest-press-machine"));
        assert_eq!(chest.last().map(|e| e.id), Some("db-fly"));
    }

    // Plan generation prefers machines over dumbbells and cables over
    // bodyweight. Every resistance group must offer at least one machine
    // entry or generation quality degrades for that group.
    #[rstest]
    #[case(MuscleGroup::Chest)]
    #[case(MuscleGroup::Back)]
    #[case(MuscleGroup::Legs)]
    #[case(MuscleGroup::Shoulders)]
    #[case(MuscleGroup::Arms)]
    #[case(MuscleGroup::Core)]
    fn test_catalog_equipment_coverage(#[case] muscle_group: MuscleGroup) {
        let catalog = Catalog::library();
        assert!(
            catalog
                .exercises_by_muscle_group(muscle_group)
                .iter()
                .any(|e| e.equipment == EquipmentCategory::Machine
                    || e.equipment == EquipmentCategory::Cable),
            "{muscle_group} has no machine or cable entry"
        );
    }
}
