//! The workout-exercise association manager.
//!
//! Each association carries `exercise_order`, a per-workout sort key.
//! `add_exercise_to_workout` appends at max+1 and `reorder_workout_exercises`
//! rewrites the sequence to a dense 1..N; `remove_exercise_from_workout`
//! never renumbers survivors, so gaps are expected between reorders.

use diesel::dsl::max;
use diesel::prelude::*;

use crate::db::models::{NewWorkoutExercise, WorkoutExercise};
use crate::db::schema::workout_exercises;
use crate::error::{StoreError, StoreResult};

/// How `reorder_workout_exercises` treats an input sequence that does not
/// match the workout's current association set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReorderMode {
    /// Reject unless the input ids are exactly the workout's current
    /// exercise ids (compared as multisets).
    #[default]
    Strict,
    /// Ids not associated with the workout update nothing; associations
    /// omitted from the input keep their old order value.
    Lenient,
}

/// Associations for a workout, in the user-intended sequence.
pub fn list_workout_exercises(
    conn: &mut SqliteConnection,
    workout_id: i32,
) -> StoreResult<Vec<WorkoutExercise>> {
    workout_exercises::table
        .filter(workout_exercises::workout_id.eq(workout_id))
        .order(workout_exercises::exercise_order.asc())
        .load::<WorkoutExercise>(conn)
        .map_err(Into::into)
}

/// Appends an exercise to a workout at position max(existing orders) + 1.
///
/// The max-order read and the insert share one transaction so two concurrent
/// adds cannot compute the same next position.
pub fn add_exercise_to_workout(
    conn: &mut SqliteConnection,
    workout_id: i32,
    exercise_id: i32,
    sets: i32,
    reps: i32,
    weight: f32,
) -> StoreResult<WorkoutExercise> {
    conn.transaction(|conn| {
        let max_order: Option<i32> = workout_exercises::table
            .filter(workout_exercises::workout_id.eq(workout_id))
            .select(max(workout_exercises::exercise_order))
            .first(conn)?;

        diesel::insert_into(workout_exercises::table)
            .values(&NewWorkoutExercise {
                workout_id,
                exercise_id,
                sets,
                reps,
                weight,
                exercise_order: max_order.unwrap_or(0) + 1,
            })
            .get_result::<WorkoutExercise>(conn)
    })
    .map_err(Into::into)
}

/// Updates sets/reps/weight for a pair; never touches the order. A missing
/// pair is a no-op success (zero rows affected).
pub fn update_workout_exercise(
    conn: &mut SqliteConnection,
    workout_id: i32,
    exercise_id: i32,
    sets: i32,
    reps: i32,
    weight: f32,
) -> StoreResult<usize> {
    diesel::update(workout_exercises::table.find((workout_id, exercise_id)))
        .set((
            workout_exercises::sets.eq(sets),
            workout_exercises::reps.eq(reps),
            workout_exercises::weight.eq(weight),
        ))
        .execute(conn)
        .map_err(Into::into)
}

/// Deletes the pair. Survivors keep their order values, so the sequence may
/// contain gaps afterwards.
pub fn remove_exercise_from_workout(
    conn: &mut SqliteConnection,
    workout_id: i32,
    exercise_id: i32,
) -> StoreResult<usize> {
    diesel::delete(workout_exercises::table.find((workout_id, exercise_id)))
        .execute(conn)
        .map_err(Into::into)
}

/// Rewrites the order of a workout's associations: position i in the input
/// gets order i+1, all inside one transaction. Either every position update
/// commits or none does.
pub fn reorder_workout_exercises(
    conn: &mut SqliteConnection,
    workout_id: i32,
    exercise_ids: &[i32],
    mode: ReorderMode,
) -> StoreResult<()> {
    if exercise_ids.is_empty() {
        return Err(StoreError::Validation("exercise ids are required".into()));
    }

    conn.transaction(|conn| {
        if mode == ReorderMode::Strict {
            let mut current: Vec<i32> = workout_exercises::table
                .filter(workout_exercises::workout_id.eq(workout_id))
                .select(workout_exercises::exercise_id)
                .load(conn)?;
            let mut requested = exercise_ids.to_vec();
            current.sort_unstable();
            requested.sort_unstable();
            if current != requested {
                return Err(StoreError::Validation(
                    "exercise ids do not match the workout's current exercises".into(),
                ));
            }
        }

        for (i, exercise_id) in exercise_ids.iter().enumerate() {
            diesel::update(workout_exercises::table.find((workout_id, *exercise_id)))
                .set(workout_exercises::exercise_order.eq(i as i32 + 1))
                .execute(conn)?;
        }
        Ok(())
    })
}
