use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHasher};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;

use liftlog_core::db::models::{NewUser, User, UserChanges};
use liftlog_core::db::operations::users;

use crate::error::ApiError;
use crate::handlers::{message, require_body};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| ApiError::Internal("Failed to hash password".to_string()))
}

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let all = state
        .store(users::get_all_users)
        .await
        .map_err(|e| e.context("Failed to fetch users"))?;
    Ok(Json(all))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<User>, ApiError> {
    let user = state
        .store(move |conn| users::get_user(conn, id))
        .await
        .map_err(|e| e.not_found("User not found"))?;
    Ok(Json(user))
}

pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<UserPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let payload = require_body(body)?;
    if payload.username.is_empty() || payload.email.is_empty() || payload.password.is_empty() {
        return Err(ApiError::BadRequest(
            "Username, email, and password are required".to_string(),
        ));
    }

    let password = hash_password(&payload.password)?;
    let user = state
        .store(move |conn| {
            users::create_user(
                conn,
                &NewUser {
                    username: payload.username,
                    email: payload.email,
                    password,
                },
            )
        })
        .await
        .map_err(|e| e.context("Failed to create user"))?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Result<Json<UserPayload>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    let payload = require_body(body)?;

    let existing = state
        .store(move |conn| users::get_user(conn, id))
        .await
        .map_err(|e| e.not_found("User not found"))?;

    // Patch against the stored row: omitted fields keep their current
    // values, and the password is only re-hashed when one was supplied.
    let password = if payload.password.is_empty() {
        None
    } else {
        Some(hash_password(&payload.password)?)
    };
    let changes = UserChanges {
        username: if payload.username.is_empty() {
            existing.username
        } else {
            payload.username
        },
        email: if payload.email.is_empty() {
            existing.email
        } else {
            payload.email
        },
        password,
        updated_at: Utc::now().naive_utc(),
    };

    let user = state
        .store(move |conn| users::update_user(conn, id, &changes))
        .await
        .map_err(|e| e.context("Failed to update user"))?;
    Ok(Json(user))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    state
        .store(move |conn| users::get_user(conn, id))
        .await
        .map_err(|e| e.not_found("User not found"))?;

    state
        .store(move |conn| users::delete_user(conn, id))
        .await
        .map_err(|e| e.context("Failed to delete user"))?;
    Ok(message("User deleted successfully"))
}
