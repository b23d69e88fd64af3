use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{Value, json};

use liftlog_core::db::models::{NewWorkout, Workout, WorkoutChanges};
use liftlog_core::db::operations::{associations, users, workouts};

use crate::error::ApiError;
use crate::handlers::{message, require_body};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct WorkoutPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub user_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct WorkoutListQuery {
    pub user_id: Option<i32>,
}

pub async fn list_workouts(
    State(state): State<AppState>,
    Query(query): Query<WorkoutListQuery>,
) -> Result<Json<Vec<Workout>>, ApiError> {
    let list = state
        .store(move |conn| match query.user_id {
            Some(user_id) => workouts::get_user_workouts(conn, user_id),
            None => workouts::get_all_workouts(conn),
        })
        .await
        .map_err(|e| e.context("Failed to fetch workouts"))?;
    Ok(Json(list))
}

/// Returns the workout together with its ordered exercise list, the way the
/// detail view renders it.
pub async fn get_workout(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    let (workout, exercises) = state
        .store(move |conn| {
            let workout = workouts::get_workout(conn, id)?;
            let exercises = associations::list_workout_exercises(conn, id)?;
            Ok::<_, liftlog_core::error::StoreError>((workout, exercises))
        })
        .await
        .map_err(|e| e.not_found("Workout not found"))?;
    Ok(Json(json!({ "workout": workout, "exercises": exercises })))
}

pub async fn create_workout(
    State(state): State<AppState>,
    body: Result<Json<WorkoutPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Workout>), ApiError> {
    let payload = require_body(body)?;
    if payload.name.is_empty() || payload.user_id == 0 {
        return Err(ApiError::BadRequest(
            "Workout name and user ID are required".to_string(),
        ));
    }

    let user_id = payload.user_id;
    state
        .store(move |conn| users::get_user(conn, user_id))
        .await
        .map_err(|e| e.not_found("User not found"))?;

    let workout = state
        .store(move |conn| {
            workouts::create_workout(
                conn,
                &NewWorkout {
                    name: payload.name,
                    description: payload.description,
                    user_id: payload.user_id,
                },
            )
        })
        .await
        .map_err(|e| e.context("Failed to create workout"))?;
    Ok((StatusCode::CREATED, Json(workout)))
}

pub async fn update_workout(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Result<Json<WorkoutPayload>, JsonRejection>,
) -> Result<Json<Workout>, ApiError> {
    let payload = require_body(body)?;

    // The owning user is never taken from the payload; the changeset has no
    // user_id field, so ownership survives any request body.
    let existing = state
        .store(move |conn| workouts::get_workout(conn, id))
        .await
        .map_err(|e| e.not_found("Workout not found"))?;

    let changes = WorkoutChanges {
        name: if payload.name.is_empty() {
            existing.name
        } else {
            payload.name
        },
        description: if payload.description.is_empty() {
            existing.description
        } else {
            payload.description
        },
        updated_at: Utc::now().naive_utc(),
    };

    let workout = state
        .store(move |conn| workouts::update_workout(conn, id, &changes))
        .await
        .map_err(|e| e.context("Failed to update workout"))?;
    Ok(Json(workout))
}

pub async fn delete_workout(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    state
        .store(move |conn| workouts::get_workout(conn, id))
        .await
        .map_err(|e| e.not_found("Workout not found"))?;

    state
        .store(move |conn| workouts::delete_workout(conn, id))
        .await
        .map_err(|e| e.context("Failed to delete workout"))?;
    Ok(message("Workout deleted successfully"))
}
