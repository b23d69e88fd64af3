use chrono::{NaiveDate, NaiveDateTime};
use diesel::{AsChangeset, Insertable, Queryable};
use serde::Serialize;

use crate::db::schema;

// User models
#[derive(Queryable, Debug, Clone, Serialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    // Stored as an argon2 hash, never serialized.
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = schema::users)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(AsChangeset, Debug)]
#[diesel(table_name = schema::users)]
pub struct UserChanges {
    pub username: String,
    pub email: String,
    // None keeps the stored hash untouched.
    pub password: Option<String>,
    pub updated_at: NaiveDateTime,
}

// Workout models
#[derive(Queryable, Debug, Clone, Serialize)]
pub struct Workout {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub user_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = schema::workouts)]
pub struct NewWorkout {
    pub name: String,
    pub description: String,
    pub user_id: i32,
}

/// Deliberately has no `user_id` field: ownership of a workout is immutable
/// through updates.
#[derive(AsChangeset, Debug)]
#[diesel(table_name = schema::workouts)]
pub struct WorkoutChanges {
    pub name: String,
    pub description: String,
    pub updated_at: NaiveDateTime,
}

// Exercise models
#[derive(Queryable, Debug, Clone, Serialize)]
pub struct Exercise {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub category: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = schema::exercises)]
pub struct NewExercise {
    pub name: String,
    pub description: String,
    pub category: String,
}

#[derive(AsChangeset, Debug)]
#[diesel(table_name = schema::exercises)]
pub struct ExerciseChanges {
    pub name: String,
    pub description: String,
    pub category: String,
    pub updated_at: NaiveDateTime,
}

// Workout-exercise association models
//
// `exercise_order` is a per-workout sort key. `add` and `reorder` keep it a
// dense 1..N sequence; `remove` leaves gaps, which readers must tolerate.
#[derive(Queryable, Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutExercise {
    pub workout_id: i32,
    pub exercise_id: i32,
    pub sets: i32,
    pub reps: i32,
    pub weight: f32,
    #[serde(rename = "order")]
    pub exercise_order: i32,
}

#[derive(Insertable)]
#[diesel(table_name = schema::workout_exercises)]
pub struct NewWorkoutExercise {
    pub workout_id: i32,
    pub exercise_id: i32,
    pub sets: i32,
    pub reps: i32,
    pub weight: f32,
    pub exercise_order: i32,
}

// Progress models
#[derive(Queryable, Debug, Clone, Serialize)]
pub struct Progress {
    pub id: i32,
    pub user_id: i32,
    pub workout_id: i32,
    pub exercise_id: i32,
    pub sets: i32,
    pub reps: i32,
    pub weight: f32,
    pub notes: String,
    pub date: NaiveDate,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = schema::progress)]
pub struct NewProgress {
    pub user_id: i32,
    pub workout_id: i32,
    pub exercise_id: i32,
    pub sets: i32,
    pub reps: i32,
    pub weight: f32,
    pub notes: String,
    pub date: NaiveDate,
}
