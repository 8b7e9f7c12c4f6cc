#![warn(clippy::pedantic)]

use std::collections::BTreeMap;

use gymbuddy_domain::{
    Catalog, LibraryExercise, SessionTracker, WorkoutLog, WorkoutPlan, find_alternatives,
};

pub mod image;

pub use image::{ExerciseImage, ImageGenerator, ImageSlot};

/// Quick-select presets for the focus input.
pub const QUICK_SELECTS: [&str; 3] = ["Arms, Chest, Back", "Legs & Abs", "Full Body"];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    Generating,
    Active,
    History,
}

/// UI-framework-agnostic application state.
///
/// All transitions are synchronous and driven by discrete user actions;
/// the rendering layer owns the async plumbing and reports the outcomes
/// back here. Plan generation is one-shot: the busy flag blocks
/// re-invocation until the pending request succeeds or fails.
#[derive(Debug, Default)]
pub struct App {
    view: View,
    focus: String,
    error: Option<String>,
    generating: bool,
    session: Option<SessionTracker>,
    images: BTreeMap<usize, ImageSlot>,
    pending_swap: Option<usize>,
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    #[must_use]
    pub fn focus(&self) -> &str {
        &self.focus
    }

    pub fn set_focus(&mut self, focus: &str) {
        self.focus = focus.to_string();
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.generating
    }

    #[must_use]
    pub fn session(&self) -> Option<&SessionTracker> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut SessionTracker> {
        self.session.as_mut()
    }

    /// Enters the generating state. Returns `false` without effect when a
    /// generation is already pending or no focus has been entered.
    pub fn start_generation(&mut self) -> bool {
        if self.generating {
            return false;
        }
        if self.focus.trim().is_empty() {
            self.error = Some(String::from("Please select a workout type."));
            return false;
        }
        self.generating = true;
        self.error = None;
        self.view = View::Generating;
        true
    }

    /// Starts a session over the generated plan. All image slots begin
    /// pending.
    pub fn generation_succeeded(&mut self, plan: WorkoutPlan) {
        self.generating = false;
        self.images = (0..plan.exercises.len())
            .map(|idx| (idx, ImageSlot::Pending))
            .collect();
        self.pending_swap = None;
        self.session = Some(SessionTracker::new(plan));
        self.view = View::Active;
    }

    /// Returns to the home view with a retryable error message.
    pub fn generation_failed(&mut self, message: &str) {
        self.generating = false;
        self.error = Some(message.to_string());
        self.view = View::Home;
    }

    #[must_use]
    pub fn image(&self, exercise_idx: usize) -> ImageSlot {
        self.images
            .get(&exercise_idx)
            .cloned()
            .unwrap_or(ImageSlot::Unavailable)
    }

    pub fn image_ready(&mut self, exercise_idx: usize, image: ExerciseImage) {
        self.images.insert(exercise_idx, ImageSlot::Ready(image));
    }

    pub fn image_unavailable(&mut self, exercise_idx: usize) {
        self.images.insert(exercise_idx, ImageSlot::Unavailable);
    }

    /// Selects the exercise to be swapped. Ignored for invalid positions.
    pub fn begin_swap(&mut self, exercise_idx: usize) {
        let Some(session) = &self.session else {
            return;
        };
        if exercise_idx < session.plan().exercises.len() {
            self.pending_swap = Some(exercise_idx);
        }
    }

    #[must_use]
    pub fn pending_swap(&self) -> Option<usize> {
        self.pending_swap
    }

    /// Ranked replacement candidates for the exercise selected for
    /// swapping.
    #[must_use]
    pub fn swap_alternatives<'a>(&self, catalog: &'a Catalog) -> Vec<&'a LibraryExercise> {
        let (Some(session), Some(idx)) = (&self.session, self.pending_swap) else {
            return Vec::new();
        };
        session
            .plan()
            .exercises
            .get(idx)
            .map(|exercise| find_alternatives(catalog, exercise))
            .unwrap_or_default()
    }

    /// Performs the pending swap. Silently a no-op when no swap is pending
    /// or the id is unknown. The swapped slot's image starts over.
    pub fn confirm_swap(&mut self, new_id: &str, catalog: &Catalog) {
        let Some(idx) = self.pending_swap.take() else {
            return;
        };
        if let Some(session) = &mut self.session {
            session.swap_exercise(idx, new_id, catalog);
            self.images.insert(idx, ImageSlot::Pending);
        }
    }

    pub fn cancel_swap(&mut self) {
        self.pending_swap = None;
    }

    /// Finishes the active session and yields the log to be persisted.
    pub fn finish_session(&mut self) -> Option<WorkoutLog> {
        let session = self.session.take()?;
        self.images.clear();
        self.pending_swap = None;
        self.view = View::History;
        Some(session.finish())
    }

    /// Leaves the active session without logging it.
    pub fn cancel_session(&mut self) {
        self.session = None;
        self.images.clear();
        self.pending_swap = None;
        self.view = View::Home;
    }

    pub fn show_history(&mut self) {
        self.view = View::History;
    }

    pub fn go_home(&mut self) {
        self.view = View::Home;
    }
}

#[cfg(test)]
mod tests {
    use gymbuddy_domain::{CardioBlock, PlannedExercise, RepTarget, Sets, TargetZone};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn plan() -> WorkoutPlan {
        let catalog = Catalog::library();
        let exercise = |id: &str| {
            PlannedExercise::from_library(
                catalog.exercise_by_id(id).unwrap(),
                Sets::new(3).unwrap(),
                RepTarget::new("12-15"),
            )
        };
        WorkoutPlan {
            target_zone: TargetZone::UpperBody,
            cardio: CardioBlock {
                name: String::from("Treadmill"),
                duration: String::from("15 minutes"),
                notes: String::from("Brisk pace."),
            },
            exercises: vec![exercise("chest-press-machine"), exercise("lat-pulldown")],
            estimated_duration: String::from("50 minutes"),
        }
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_start_generation_requires_focus(#[case] focus: &str) {
        let mut app = App::new();
        app.set_focus(focus);
        assert!(!app.start_generation());
        assert_eq!(app.error(), Some("Please select a workout type."));
        assert_eq!(app.view(), View::Home);
    }

    #[test]
    fn test_start_generation_is_guarded_by_busy_flag() {
        let mut app = App::new();
        app.set_focus("Full Body");

        assert!(app.start_generation());
        assert_eq!(app.view(), View::Generating);
        // A second invocation while pending is rejected.
        assert!(!app.start_generation());
    }

    #[test]
    fn test_generation_succeeded_starts_session() {
        let mut app = App::new();
        app.set_focus("Arms, Chest, Back");
        assert!(app.start_generation());

        app.generation_succeeded(plan());

        assert_eq!(app.view(), View::Active);
        assert!(!app.is_generating());
        assert_eq!(app.image(0), ImageSlot::Pending);
        assert_eq!(app.image(1), ImageSlot::Pending);
        assert!(app.session().is_some());
    }

    #[test]
    fn test_generation_failed_returns_home() {
        let mut app = App::new();
        app.set_focus("Full Body");
        assert!(app.start_generation());

        app.generation_failed("Failed to create workout.");

        assert_eq!(app.view(), View::Home);
        assert!(!app.is_generating());
        assert_eq!(app.error(), Some("Failed to create workout."));
        // The user can retry.
        assert!(app.start_generation());
    }

    #[test]
    fn test_image_slots_are_independent() {
        let mut app = App::new();
        app.set_focus("Full Body");
        assert!(app.start_generation());
        app.generation_succeeded(plan());

        app.image_unavailable(0);
        app.image_ready(
            1,
            ExerciseImage {
                mime_type: String::from("image/png"),
                data: vec![0],
            },
        );

        assert_eq!(app.image(0), ImageSlot::Unavailable);
        assert!(matches!(app.image(1), ImageSlot::Ready(_)));
    }

    #[test]
    fn test_swap_flow() {
        let catalog = Catalog::library();
        let mut app = App::new();
        app.set_focus("Arms, Chest, Back");
        assert!(app.start_generation());
        app.generation_succeeded(plan());

        app.begin_swap(0);
        let alternatives = app.swap_alternatives(&catalog);
        assert!(!alternatives.is_empty());
        assert!(alternatives.iter().all(|e| e.id != "chest-press-machine"));

        let new_id = alternatives[0].id;
        app.confirm_swap(new_id, &catalog);

        assert_eq!(app.pending_swap(), None);
        assert_eq!(
            app.session().unwrap().plan().exercises[0]
                .exercise_id
                .as_deref(),
            Some(new_id)
        );
        assert_eq!(app.image(0), ImageSlot::Pending);
    }

    #[test]
    fn test_confirm_swap_without_pending_swap_is_a_no_op() {
        let catalog = Catalog::library();
        let mut app = App::new();
        app.set_focus("Arms, Chest, Back");
        assert!(app.start_generation());
        app.generation_succeeded(plan());
        let before = app.session().unwrap().plan().clone();

        app.confirm_swap("pec-deck", &catalog);

        assert_eq!(app.session().unwrap().plan(), &before);
    }

    #[test]
    fn test_finish_session_yields_log() {
        let mut app = App::new();
        app.set_focus("Arms, Chest, Back");
        assert!(app.start_generation());
        app.generation_succeeded(plan());
        app.session_mut().unwrap().toggle_set(0, 0);

        let log = app.finish_session().unwrap();

        assert_eq!(app.view(), View::History);
        assert!(app.session().is_none());
        assert_eq!(log.exercises[0].sets_completed.len(), 1);
        // Finishing twice is impossible.
        assert!(app.finish_session().is_none());
    }
}
