use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use liftlog_core::db;
use liftlog_core::db::operations::ReorderMode;
use liftlog_server::routes::router;
use liftlog_server::state::AppState;

fn test_app(mode: ReorderMode) -> Router {
    // A single-connection pool keeps every request on the same in-memory
    // database.
    let pool = db::init_pool(":memory:", 1).unwrap();
    let mut conn = pool.get().unwrap();
    db::run_migrations(&mut conn).unwrap();
    drop(conn);
    router(AppState::new(pool, mode))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Creates a user, a workout, and three exercises; returns
/// (workout id, [exercise ids]).
async fn seed_workout_with_exercises(app: &Router) -> (i64, Vec<i64>) {
    let (status, user) = send(
        app,
        "POST",
        "/users",
        Some(json!({"username": "alice", "email": "alice@example.com", "password": "secret"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, workout) = send(
        app,
        "POST",
        "/workouts",
        Some(json!({"name": "push day", "user_id": user["id"]})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let workout_id = workout["id"].as_i64().unwrap();

    let mut exercise_ids = Vec::new();
    for name in ["bench press", "overhead press", "dips"] {
        let (status, exercise) = send(
            app,
            "POST",
            "/exercises",
            Some(json!({"name": name, "category": "strength"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        exercise_ids.push(exercise["id"].as_i64().unwrap());
    }
    (workout_id, exercise_ids)
}

fn listed_order(list: &Value) -> Vec<(i64, i64)> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|we| (we["exercise_id"].as_i64().unwrap(), we["order"].as_i64().unwrap()))
        .collect()
}

#[tokio::test]
async fn password_is_never_serialized() {
    let app = test_app(ReorderMode::Strict);
    let (status, user) = send(
        &app,
        "POST",
        "/users",
        Some(json!({"username": "alice", "email": "alice@example.com", "password": "secret"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(user.get("password").is_none());

    let (status, fetched) = send(&app, "GET", &format!("/users/{}", user["id"]), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(fetched.get("password").is_none());
}

#[tokio::test]
async fn missing_user_is_404_with_generic_message() {
    let app = test_app(ReorderMode::Strict);
    let (status, body) = send(&app, "GET", "/users/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn create_user_requires_all_fields() {
    let app = test_app(ReorderMode::Strict);
    let (status, _) = send(
        &app,
        "POST",
        "/users",
        Some(json!({"username": "alice", "email": "alice@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn workout_update_cannot_reassign_owner() {
    let app = test_app(ReorderMode::Strict);
    let (workout_id, _) = seed_workout_with_exercises(&app).await;

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/workouts/{workout_id}"),
        Some(json!({"name": "pull day", "user_id": 999})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "pull day");
    assert_eq!(updated["user_id"], 1);
}

#[tokio::test]
async fn add_without_body_uses_defaults() {
    let app = test_app(ReorderMode::Strict);
    let (workout_id, exercises) = seed_workout_with_exercises(&app).await;

    let (status, _) = send(
        &app,
        "POST",
        &format!("/workouts/{workout_id}/exercises/{}", exercises[0]),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, list) = send(&app, "GET", &format!("/workouts/{workout_id}/exercises"), None).await;
    assert_eq!(status, StatusCode::OK);
    let entry = &list.as_array().unwrap()[0];
    assert_eq!(entry["sets"], 3);
    assert_eq!(entry["reps"], 10);
    assert_eq!(entry["weight"], 0.0);
    assert_eq!(entry["order"], 1);
}

#[tokio::test]
async fn add_to_missing_workout_is_404() {
    let app = test_app(ReorderMode::Strict);
    let (status, body) = send(&app, "POST", "/workouts/999/exercises/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Workout not found");
}

#[tokio::test]
async fn add_with_missing_exercise_is_404() {
    let app = test_app(ReorderMode::Strict);
    let (workout_id, _) = seed_workout_with_exercises(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/workouts/{workout_id}/exercises/999"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Exercise not found");

    let (_, list) = send(&app, "GET", &format!("/workouts/{workout_id}/exercises"), None).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn listing_exercises_of_missing_workout_is_404() {
    let app = test_app(ReorderMode::Strict);
    let (status, _) = send(&app, "GET", "/workouts/999/exercises", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn reorder_flow_end_to_end() {
    let app = test_app(ReorderMode::Strict);
    let (workout_id, e) = seed_workout_with_exercises(&app).await;
    for id in &e {
        let (status, _) = send(
            &app,
            "POST",
            &format!("/workouts/{workout_id}/exercises/{id}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, list) = send(&app, "GET", &format!("/workouts/{workout_id}/exercises"), None).await;
    assert_eq!(listed_order(&list), vec![(e[0], 1), (e[1], 2), (e[2], 3)]);

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/workouts/{workout_id}/exercises/reorder"),
        Some(json!({"exercise_ids": [e[2], e[0], e[1]]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Exercises reordered successfully");

    let (_, list) = send(&app, "GET", &format!("/workouts/{workout_id}/exercises"), None).await;
    assert_eq!(listed_order(&list), vec![(e[2], 1), (e[0], 2), (e[1], 3)]);
}

#[tokio::test]
async fn reorder_with_empty_list_is_400() {
    let app = test_app(ReorderMode::Strict);
    let (workout_id, _) = seed_workout_with_exercises(&app).await;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/workouts/{workout_id}/exercises/reorder"),
        Some(json!({"exercise_ids": []})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Exercise IDs are required");
}

#[tokio::test]
async fn strict_reorder_rejects_mismatch_and_changes_nothing() {
    let app = test_app(ReorderMode::Strict);
    let (workout_id, e) = seed_workout_with_exercises(&app).await;
    for id in &e {
        send(&app, "POST", &format!("/workouts/{workout_id}/exercises/{id}"), None).await;
    }

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/workouts/{workout_id}/exercises/reorder"),
        Some(json!({"exercise_ids": [e[0], e[1]]})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = send(&app, "GET", &format!("/workouts/{workout_id}/exercises"), None).await;
    assert_eq!(listed_order(&list), vec![(e[0], 1), (e[1], 2), (e[2], 3)]);
}

#[tokio::test]
async fn lenient_reorder_accepts_partial_input() {
    let app = test_app(ReorderMode::Lenient);
    let (workout_id, e) = seed_workout_with_exercises(&app).await;
    for id in &e[..2] {
        send(&app, "POST", &format!("/workouts/{workout_id}/exercises/{id}"), None).await;
    }

    // An id that was never associated is a silent no-op per statement; the
    // real associations land at the positions the input gives them.
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/workouts/{workout_id}/exercises/reorder"),
        Some(json!({"exercise_ids": [999, e[1], e[0]]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = send(&app, "GET", &format!("/workouts/{workout_id}/exercises"), None).await;
    assert_eq!(listed_order(&list), vec![(e[1], 2), (e[0], 3)]);
}

#[tokio::test]
async fn association_update_with_bad_body_is_400() {
    let app = test_app(ReorderMode::Strict);
    let (workout_id, e) = seed_workout_with_exercises(&app).await;
    send(&app, "POST", &format!("/workouts/{workout_id}/exercises/{}", e[0]), None).await;

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/workouts/{workout_id}/exercises/{}", e[0]))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn progress_flow_end_to_end() {
    let app = test_app(ReorderMode::Strict);
    let (workout_id, e) = seed_workout_with_exercises(&app).await;

    let (status, entry) = send(
        &app,
        "POST",
        "/users/1/progress",
        Some(json!({
            "workout_id": workout_id,
            "exercise_id": e[0],
            "sets": 3,
            "reps": 8,
            "weight": 80.0,
            "date": "2026-08-20"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(entry["sets"], 3);

    let (status, list) = send(&app, "GET", "/users/1/progress", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, _) = send(
        &app,
        "POST",
        "/users/1/progress",
        Some(json!({"workout_id": workout_id, "exercise_id": e[0], "sets": 0, "reps": 8})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/users/1/progress/{}", entry["id"]),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Progress deleted successfully");
}

#[tokio::test]
async fn deleting_exercise_cascades_into_ordered_list() {
    let app = test_app(ReorderMode::Strict);
    let (workout_id, e) = seed_workout_with_exercises(&app).await;
    for id in &e {
        send(&app, "POST", &format!("/workouts/{workout_id}/exercises/{id}"), None).await;
    }

    let (status, _) = send(&app, "DELETE", &format!("/exercises/{}", e[0]), None).await;
    assert_eq!(status, StatusCode::OK);

    // The association row went with the exercise; survivors keep their old
    // order values, leaving a gap at 1.
    let (_, list) = send(&app, "GET", &format!("/workouts/{workout_id}/exercises"), None).await;
    assert_eq!(listed_order(&list), vec![(e[1], 2), (e[2], 3)]);
}
