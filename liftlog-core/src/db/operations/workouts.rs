use diesel::prelude::*;

use crate::db::models::{NewWorkout, Workout, WorkoutChanges};
use crate::db::schema::workouts;
use crate::error::StoreResult;

pub fn get_all_workouts(conn: &mut SqliteConnection) -> StoreResult<Vec<Workout>> {
    workouts::table.load::<Workout>(conn).map_err(Into::into)
}

pub fn get_user_workouts(conn: &mut SqliteConnection, user_id: i32) -> StoreResult<Vec<Workout>> {
    workouts::table
        .filter(workouts::user_id.eq(user_id))
        .load::<Workout>(conn)
        .map_err(Into::into)
}

pub fn get_workout(conn: &mut SqliteConnection, workout_id: i32) -> StoreResult<Workout> {
    workouts::table
        .find(workout_id)
        .first::<Workout>(conn)
        .map_err(Into::into)
}

pub fn create_workout(
    conn: &mut SqliteConnection,
    new_workout: &NewWorkout,
) -> StoreResult<Workout> {
    diesel::insert_into(workouts::table)
        .values(new_workout)
        .get_result::<Workout>(conn)
        .map_err(Into::into)
}

pub fn update_workout(
    conn: &mut SqliteConnection,
    workout_id: i32,
    changes: &WorkoutChanges,
) -> StoreResult<Workout> {
    diesel::update(workouts::table.find(workout_id))
        .set(changes)
        .get_result::<Workout>(conn)
        .map_err(Into::into)
}

pub fn delete_workout(conn: &mut SqliteConnection, workout_id: i32) -> StoreResult<usize> {
    diesel::delete(workouts::table.find(workout_id))
        .execute(conn)
        .map_err(Into::into)
}
