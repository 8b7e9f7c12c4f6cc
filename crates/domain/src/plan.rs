use std::{fmt, str::FromStr};

use derive_more::{AsRef, Deref, Display};

use crate::{LibraryExercise, MuscleGroup};

/// Number of sets prescribed for an exercise. Always positive.
#[derive(Deref, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sets(u32);

impl Sets {
    pub fn new(value: u32) -> Result<Self, SetsError> {
        if value == 0 {
            return Err(SetsError::Zero);
        }
        Ok(Self(value))
    }

    /// Number of set slots, for indexing.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn count(self) -> usize {
        self.0 as usize
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SetsError {
    #[error("Set count must be positive")]
    Zero,
}

/// Rep prescription as provided by the generator, e.g. `"12"` or `"12-15"`.
///
/// The text is kept verbatim for display. Only the lower bound is
/// interpreted, as the default rep count when a set is marked done.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq)]
pub struct RepTarget(String);

impl RepTarget {
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.trim().to_string())
    }

    /// Leading integer before a `-` separator; 10 when unparseable.
    #[must_use]
    pub fn lower_bound(&self) -> u32 {
        self.0
            .split('-')
            .next()
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(10)
    }
}

/// The day's training theme. Exactly three zones exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TargetZone {
    UpperBody,
    LowerBody,
    FullBody,
}

impl TargetZone {
    /// Deterministic mapping from a free-text focus to a zone.
    #[must_use]
    pub fn from_focus(focus: &str) -> Self {
        let focus = focus.to_lowercase();
        if ["arms", "chest", "back", "upper"]
            .iter()
            .any(|t| focus.contains(t))
        {
            TargetZone::UpperBody
        } else if ["legs", "abs", "lower"].iter().any(|t| focus.contains(t)) {
            TargetZone::LowerBody
        } else {
            TargetZone::FullBody
        }
    }

    /// The complementary zone for anti-repetition scheduling.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            TargetZone::UpperBody => TargetZone::LowerBody,
            TargetZone::LowerBody => TargetZone::UpperBody,
            TargetZone::FullBody => TargetZone::FullBody,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            TargetZone::UpperBody => "Arms, Chest, Back",
            TargetZone::LowerBody => "Legs & Abs",
            TargetZone::FullBody => "Full Body",
        }
    }
}

impl fmt::Display for TargetZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TargetZone {
    type Err = TargetZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Arms, Chest, Back" => Ok(TargetZone::UpperBody),
            "Legs & Abs" => Ok(TargetZone::LowerBody),
            "Full Body" => Ok(TargetZone::FullBody),
            _ => Err(TargetZoneError::Unknown(s.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum TargetZoneError {
    #[error("Unknown target zone: {0}")]
    Unknown(String),
}

/// An exercise as part of a plan, with session-specific parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedExercise {
    /// Catalog id. Absent only for exercises generated without catalog
    /// backing. Required for swap eligibility together with `muscle_group`.
    pub exercise_id: Option<String>,
    pub name: String,
    pub sets: Sets,
    pub reps: RepTarget,
    pub equipment: String,
    pub notes: String,
    pub muscle_group: Option<MuscleGroup>,
}

impl PlannedExercise {
    #[must_use]
    pub fn from_library(exercise: &LibraryExercise, sets: Sets, reps: RepTarget) -> Self {
        Self {
            exercise_id: Some(exercise.id.to_string()),
            name: exercise.name.to_string(),
            sets,
            reps,
            equipment: exercise.equipment.to_string(),
            notes: exercise.default_notes.to_string(),
            muscle_group: Some(exercise.muscle_group),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardioBlock {
    pub name: String,
    pub duration: String,
    pub notes: String,
}

/// A generated workout for one session: warm-up plus an ordered exercise
/// sequence. Immutable once handed to a session, except for exercise
/// substitution by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutPlan {
    pub target_zone: TargetZone,
    pub cardio: CardioBlock,
    pub exercises: Vec<PlannedExercise>,
    pub estimated_duration: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1, Ok(Sets(1)))]
    #[case(4, Ok(Sets(4)))]
    #[case(0, Err(SetsError::Zero))]
    fn test_sets_new(#[case] value: u32, #[case] expected: Result<Sets, SetsError>) {
        assert_eq!(Sets::new(value), expected);
    }

    #[rstest]
    #[case("12-15", 12)]
    #[case("12", 12)]
    #[case(" 8 - 10 ", 8)]
    #[case("AMRAP", 10)]
    #[case("", 10)]
    fn test_rep_target_lower_bound(#[case] value: &str, #[case] expected: u32) {
        assert_eq!(RepTarget::new(value).lower_bound(), expected);
    }

    #[test]
    fn test_rep_target_display() {
        assert_eq!(RepTarget::new(" 12-15 ").to_string(), "12-15");
    }

    #[rstest]
    #[case("Arms, Chest, Back", TargetZone::UpperBody)]
    #[case("I want to train my chest today", TargetZone::UpperBody)]
    #[case("Upper body", TargetZone::UpperBody)]
    #[case("Legs & Abs", TargetZone::LowerBody)]
    #[case("lower body", TargetZone::LowerBody)]
    #[case("Full Body", TargetZone::FullBody)]
    #[case("Rest", TargetZone::FullBody)]
    #[case("Nothing", TargetZone::FullBody)]
    #[case("", TargetZone::FullBody)]
    fn test_target_zone_from_focus(#[case] focus: &str, #[case] expected: TargetZone) {
        assert_eq!(TargetZone::from_focus(focus), expected);
    }

    #[rstest]
    #[case(TargetZone::UpperBody, TargetZone::LowerBody)]
    #[case(TargetZone::LowerBody, TargetZone::UpperBody)]
    #[case(TargetZone::FullBody, TargetZone::FullBody)]
    fn test_target_zone_opposite(#[case] zone: TargetZone, #[case] expected: TargetZone) {
        assert_eq!(zone.opposite(), expected);
    }

    #[rstest]
    #[case(TargetZone::UpperBody, "Arms, Chest, Back")]
    #[case(TargetZone::LowerBody, "Legs & Abs")]
    #[case(TargetZone::FullBody, "Full Body")]
    fn test_target_zone_roundtrip(#[case] zone: TargetZone, #[case] name: &str) {
        assert_eq!(zone.to_string(), name);
        assert_eq!(name.parse(), Ok(zone));
    }

    #[test]
    fn test_target_zone_from_str_unknown() {
        assert_eq!(
            "Cardio".parse::<TargetZone>(),
            Err(TargetZoneError::Unknown(String::from("Cardio")))
        );
    }
}
