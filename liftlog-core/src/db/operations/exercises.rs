use diesel::prelude::*;

use crate::db::models::{Exercise, ExerciseChanges, NewExercise};
use crate::db::schema::exercises;
use crate::error::StoreResult;

pub fn get_all_exercises(conn: &mut SqliteConnection) -> StoreResult<Vec<Exercise>> {
    exercises::table.load::<Exercise>(conn).map_err(Into::into)
}

pub fn get_exercise(conn: &mut SqliteConnection, exercise_id: i32) -> StoreResult<Exercise> {
    exercises::table
        .find(exercise_id)
        .first::<Exercise>(conn)
        .map_err(Into::into)
}

pub fn create_exercise(
    conn: &mut SqliteConnection,
    new_exercise: &NewExercise,
) -> StoreResult<Exercise> {
    diesel::insert_into(exercises::table)
        .values(new_exercise)
        .get_result::<Exercise>(conn)
        .map_err(Into::into)
}

pub fn update_exercise(
    conn: &mut SqliteConnection,
    exercise_id: i32,
    changes: &ExerciseChanges,
) -> StoreResult<Exercise> {
    diesel::update(exercises::table.find(exercise_id))
        .set(changes)
        .get_result::<Exercise>(conn)
        .map_err(Into::into)
}

pub fn delete_exercise(conn: &mut SqliteConnection, exercise_id: i32) -> StoreResult<usize> {
    diesel::delete(exercises::table.find(exercise_id))
        .execute(conn)
        .map_err(Into::into)
}
