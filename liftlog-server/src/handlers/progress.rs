use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::Value;

use liftlog_core::db::models::{NewProgress, Progress};
use liftlog_core::db::operations::{exercises, progress, users, workouts};

use crate::error::ApiError;
use crate::handlers::{message, require_body};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProgressPayload {
    #[serde(default)]
    pub workout_id: i32,
    #[serde(default)]
    pub exercise_id: i32,
    #[serde(default)]
    pub sets: i32,
    #[serde(default)]
    pub reps: i32,
    #[serde(default)]
    pub weight: f32,
    #[serde(default)]
    pub notes: String,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct ProgressQuery {
    pub exercise_id: Option<i32>,
}

pub async fn list_user_progress(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<ProgressQuery>,
) -> Result<Json<Vec<Progress>>, ApiError> {
    state
        .store(move |conn| users::get_user(conn, id))
        .await
        .map_err(|e| e.not_found("User not found"))?;

    let entries = state
        .store(move |conn| match query.exercise_id {
            Some(exercise_id) => progress::get_exercise_progress(conn, id, exercise_id),
            None => progress::get_user_progress(conn, id),
        })
        .await
        .map_err(|e| e.context("Failed to fetch progress"))?;
    Ok(Json(entries))
}

pub async fn record_user_progress(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Result<Json<ProgressPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Progress>), ApiError> {
    let payload = require_body(body)?;
    if payload.workout_id == 0 || payload.exercise_id == 0 || payload.sets <= 0 || payload.reps <= 0
    {
        return Err(ApiError::BadRequest(
            "Workout ID, exercise ID, sets, and reps are required".to_string(),
        ));
    }

    state
        .store(move |conn| users::get_user(conn, id))
        .await
        .map_err(|e| e.not_found("User not found"))?;
    let workout_id = payload.workout_id;
    state
        .store(move |conn| workouts::get_workout(conn, workout_id))
        .await
        .map_err(|e| e.not_found("Workout not found"))?;
    let exercise_id = payload.exercise_id;
    state
        .store(move |conn| exercises::get_exercise(conn, exercise_id))
        .await
        .map_err(|e| e.not_found("Exercise not found"))?;

    let entry = state
        .store(move |conn| {
            progress::record_progress(
                conn,
                &NewProgress {
                    user_id: id,
                    workout_id: payload.workout_id,
                    exercise_id: payload.exercise_id,
                    sets: payload.sets,
                    reps: payload.reps,
                    weight: payload.weight,
                    notes: payload.notes,
                    date: payload.date.unwrap_or_else(|| Utc::now().date_naive()),
                },
            )
        })
        .await
        .map_err(|e| e.context("Failed to record progress"))?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn delete_user_progress(
    State(state): State<AppState>,
    Path((user_id, progress_id)): Path<(i32, i32)>,
) -> Result<Json<Value>, ApiError> {
    state
        .store(move |conn| progress::delete_progress(conn, progress_id, user_id))
        .await
        .map_err(|e| e.context("Failed to delete progress"))?;
    Ok(message("Progress deleted successfully"))
}
