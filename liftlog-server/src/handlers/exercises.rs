use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;

use liftlog_core::db::models::{Exercise, ExerciseChanges, NewExercise};
use liftlog_core::db::operations::exercises;

use crate::error::ApiError;
use crate::handlers::{message, require_body};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExercisePayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
}

pub async fn list_exercises(
    State(state): State<AppState>,
) -> Result<Json<Vec<Exercise>>, ApiError> {
    let all = state
        .store(exercises::get_all_exercises)
        .await
        .map_err(|e| e.context("Failed to fetch exercises"))?;
    Ok(Json(all))
}

pub async fn get_exercise(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Exercise>, ApiError> {
    let exercise = state
        .store(move |conn| exercises::get_exercise(conn, id))
        .await
        .map_err(|e| e.not_found("Exercise not found"))?;
    Ok(Json(exercise))
}

pub async fn create_exercise(
    State(state): State<AppState>,
    body: Result<Json<ExercisePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Exercise>), ApiError> {
    let payload = require_body(body)?;
    if payload.name.is_empty() || payload.category.is_empty() {
        return Err(ApiError::BadRequest(
            "Exercise name and category are required".to_string(),
        ));
    }

    let exercise = state
        .store(move |conn| {
            exercises::create_exercise(
                conn,
                &NewExercise {
                    name: payload.name,
                    description: payload.description,
                    category: payload.category,
                },
            )
        })
        .await
        .map_err(|e| e.context("Failed to create exercise"))?;
    Ok((StatusCode::CREATED, Json(exercise)))
}

pub async fn update_exercise(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Result<Json<ExercisePayload>, JsonRejection>,
) -> Result<Json<Exercise>, ApiError> {
    let payload = require_body(body)?;

    let existing = state
        .store(move |conn| exercises::get_exercise(conn, id))
        .await
        .map_err(|e| e.not_found("Exercise not found"))?;

    let changes = ExerciseChanges {
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
        category: if payload.category.is_empty() {
            existing.category
        } else {
            payload.category
        },
        updated_at: Utc::now().naive_utc(),
    };

    let exercise = state
        .store(move |conn| exercises::update_exercise(conn, id, &changes))
        .await
        .map_err(|e| e.context("Failed to update exercise"))?;
    Ok(Json(exercise))
}

pub async fn delete_exercise(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    state
        .store(move |conn| exercises::get_exercise(conn, id))
        .await
        .map_err(|e| e.not_found("Exercise not found"))?;

    state
        .store(move |conn| exercises::delete_exercise(conn, id))
        .await
        .map_err(|e| e.context("Failed to delete exercise"))?;
    Ok(message("Exercise deleted successfully"))
}
