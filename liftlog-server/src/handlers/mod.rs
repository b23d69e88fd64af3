pub mod exercises;
pub mod progress;
pub mod users;
pub mod workout_exercises;
pub mod workouts;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde_json::{Value, json};

use crate::error::ApiError;

/// Confirmation body for operations that return no record.
pub(crate) fn message(text: &str) -> Json<Value> {
    Json(json!({ "message": text }))
}

/// Unwraps a JSON body, mapping any decode failure to a 400.
pub(crate) fn require_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(payload)| payload)
        .map_err(|_| ApiError::BadRequest("Invalid request body".to_string()))
}
