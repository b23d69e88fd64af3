use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use serde::Deserialize;
use serde_json::Value;

use liftlog_core::db::models::WorkoutExercise;
use liftlog_core::db::operations::{associations, exercises, workouts};

use crate::error::ApiError;
use crate::handlers::{message, require_body};
use crate::state::AppState;

/// Body for adding or updating an association. Used with `#[serde(default)]`
/// so an absent field falls back to 3x10 at bodyweight.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AssociationPayload {
    pub sets: i32,
    pub reps: i32,
    pub weight: f32,
}

impl Default for AssociationPayload {
    fn default() -> Self {
        Self {
            sets: 3,
            reps: 10,
            weight: 0.0,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReorderPayload {
    pub exercise_ids: Vec<i32>,
}

pub async fn list_workout_exercises(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<WorkoutExercise>>, ApiError> {
    state
        .store(move |conn| workouts::get_workout(conn, id))
        .await
        .map_err(|e| e.not_found("Workout not found"))?;

    let list = state
        .store(move |conn| associations::list_workout_exercises(conn, id))
        .await
        .map_err(|e| e.context("Failed to fetch workout exercises"))?;
    Ok(Json(list))
}

pub async fn add_exercise_to_workout(
    State(state): State<AppState>,
    Path((workout_id, exercise_id)): Path<(i32, i32)>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    // An absent or unparseable body means "use defaults", not an error.
    let payload: AssociationPayload = serde_json::from_slice(&body).unwrap_or_default();

    // Parent checks and the insert share one connection checkout so a parent
    // deleted in between cannot turn the insert into a bare FK failure.
    state
        .store(move |conn| {
            workouts::get_workout(conn, workout_id)
                .map_err(|e| ApiError::from(e).not_found("Workout not found"))?;
            exercises::get_exercise(conn, exercise_id)
                .map_err(|e| ApiError::from(e).not_found("Exercise not found"))?;
            associations::add_exercise_to_workout(
                conn,
                workout_id,
                exercise_id,
                payload.sets,
                payload.reps,
                payload.weight,
            )
            .map_err(|e| ApiError::from(e).context("Failed to add exercise to workout"))
        })
        .await?;
    Ok(message("Exercise added to workout successfully"))
}

pub async fn update_workout_exercise(
    State(state): State<AppState>,
    Path((workout_id, exercise_id)): Path<(i32, i32)>,
    body: Result<Json<AssociationPayload>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let payload = require_body(body)?;

    state
        .store(move |conn| {
            associations::update_workout_exercise(
                conn,
                workout_id,
                exercise_id,
                payload.sets,
                payload.reps,
                payload.weight,
            )
        })
        .await
        .map_err(|e| e.context("Failed to update workout exercise"))?;
    Ok(message("Workout exercise updated successfully"))
}

pub async fn remove_exercise_from_workout(
    State(state): State<AppState>,
    Path((workout_id, exercise_id)): Path<(i32, i32)>,
) -> Result<Json<Value>, ApiError> {
    state
        .store(move |conn| associations::remove_exercise_from_workout(conn, workout_id, exercise_id))
        .await
        .map_err(|e| e.context("Failed to remove exercise from workout"))?;
    Ok(message("Exercise removed from workout successfully"))
}

pub async fn reorder_workout_exercises(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Result<Json<ReorderPayload>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let payload = require_body(body)?;
    if payload.exercise_ids.is_empty() {
        return Err(ApiError::BadRequest("Exercise IDs are required".to_string()));
    }

    let mode = state.reorder_mode;
    state
        .store(move |conn| {
            associations::reorder_workout_exercises(conn, id, &payload.exercise_ids, mode)
        })
        .await
        .map_err(|e| e.context("Failed to reorder exercises"))?;
    Ok(message("Exercises reordered successfully"))
}
