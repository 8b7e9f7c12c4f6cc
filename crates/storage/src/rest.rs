use base64::Engine;
use gloo_net::http::Request;
use gymbuddy_domain::{
    CardioBlock, Catalog, GeneratedExercise, GeneratedPlan, GenerationError, PlanConstraints,
    PlanGenerator, TargetZone,
};
use gymbuddy_web_app::{ExerciseImage, ImageGenerator};
use serde_json::json;

/// Client for the generative-AI proxy endpoints.
pub struct Generator;

impl PlanGenerator for Generator {
    async fn generate(
        &self,
        zone: TargetZone,
        catalog: &Catalog,
        constraints: &PlanConstraints,
    ) -> Result<GeneratedPlan, GenerationError> {
        let request = Request::post("api/workout")
            .json(&json!({
                "target_zone": zone.to_string(),
                "constraints": {
                    "total_duration": constraints.total_duration,
                    "cardio_warmup": constraints.cardio_warmup,
                    "resistance_duration": constraints.resistance_duration,
                    "exercises": format!(
                        "{}-{}",
                        constraints.min_exercises, constraints.max_exercises
                    ),
                    "rep_range": constraints.rep_range,
                    "equipment_preference": constraints.equipment_preference,
                },
                "catalog": catalog
                    .exercises()
                    .map(|e| json!({
                        "id": e.id,
                        "name": e.name,
                        "muscle_group": e.muscle_group.to_string(),
                        "specific_target": e.specific_target,
                        "category": e.equipment.to_string(),
                    }))
                    .collect::<Vec<_>>(),
            }))
            .map_err(|err| GenerationError::Generator(err.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|_| GenerationError::Generator(String::from("no connection")))?;
        if !response.ok() {
            return Err(GenerationError::Generator(format!(
                "{} {}",
                response.status(),
                response.status_text()
            )));
        }
        let plan = response
            .json::<WorkoutResponse>()
            .await
            .map_err(|err| GenerationError::Malformed(format!("deserialization failed: {err:?}")))?;
        Ok(plan.into())
    }
}

impl ImageGenerator for Generator {
    async fn generate_image(&self, exercise_name: &str) -> Option<ExerciseImage> {
        let request = Request::post("api/exercise_image")
            .json(&json!({ "exercise": exercise_name }))
            .ok()?;
        let response = request.send().await.ok()?;
        if !response.ok() {
            log::warn!("no image for {exercise_name}: {}", response.status());
            return None;
        }
        let image = response.json::<ImageResponse>().await.ok()?;
        let data = base64::engine::general_purpose::STANDARD
            .decode(image.data)
            .ok()?;
        Some(ExerciseImage {
            mime_type: image.mime_type,
            data,
        })
    }
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
struct WorkoutResponse {
    cardio: CardioResponse,
    exercises: Vec<ExerciseResponse>,
    estimated_duration: String,
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
struct CardioResponse {
    name: String,
    duration: String,
    #[serde(default)]
    notes: String,
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
struct ExerciseResponse {
    id: String,
    sets: u32,
    reps: String,
    #[serde(default)]
    notes: String,
}

impl From<WorkoutResponse> for GeneratedPlan {
    fn from(value: WorkoutResponse) -> Self {
        Self {
            cardio: CardioBlock {
                name: value.cardio.name,
                duration: value.cardio.duration,
                notes: value.cardio.notes,
            },
            exercises: value
                .exercises
                .into_iter()
                .map(|e| GeneratedExercise {
                    exercise_id: e.id,
                    sets: e.sets,
                    reps: e.reps,
                    notes: e.notes,
                })
                .collect(),
            estimated_duration: value.estimated_duration,
        }
    }
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
struct ImageResponse {
    mime_type: String,
    data: String,
}
