use axum::Router;
use axum::routing::{delete, get, post, put};

use crate::handlers::{exercises, progress, users, workout_exercises, workouts};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        // User routes
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        // Workout routes
        .route(
            "/workouts",
            get(workouts::list_workouts).post(workouts::create_workout),
        )
        .route(
            "/workouts/{id}",
            get(workouts::get_workout)
                .put(workouts::update_workout)
                .delete(workouts::delete_workout),
        )
        // Exercise routes
        .route(
            "/exercises",
            get(exercises::list_exercises).post(exercises::create_exercise),
        )
        .route(
            "/exercises/{id}",
            get(exercises::get_exercise)
                .put(exercises::update_exercise)
                .delete(exercises::delete_exercise),
        )
        // Workout-exercise association routes; the static `reorder` segment
        // takes precedence over `{exercise_id}`.
        .route(
            "/workouts/{id}/exercises",
            get(workout_exercises::list_workout_exercises),
        )
        .route(
            "/workouts/{id}/exercises/reorder",
            put(workout_exercises::reorder_workout_exercises),
        )
        .route(
            "/workouts/{id}/exercises/{exercise_id}",
            post(workout_exercises::add_exercise_to_workout)
                .put(workout_exercises::update_workout_exercise)
                .delete(workout_exercises::remove_exercise_from_workout),
        )
        // User progress routes
        .route(
            "/users/{id}/progress",
            get(progress::list_user_progress).post(progress::record_user_progress),
        )
        .route(
            "/users/{id}/progress/{progress_id}",
            delete(progress::delete_user_progress),
        )
        .with_state(state)
}
