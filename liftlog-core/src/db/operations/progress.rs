use diesel::prelude::*;

use crate::db::models::{NewProgress, Progress};
use crate::db::schema::progress;
use crate::error::StoreResult;

/// Progress entries for a user, newest first.
pub fn get_user_progress(conn: &mut SqliteConnection, user_id: i32) -> StoreResult<Vec<Progress>> {
    progress::table
        .filter(progress::user_id.eq(user_id))
        .order((progress::date.desc(), progress::created_at.desc()))
        .load::<Progress>(conn)
        .map_err(Into::into)
}

/// Progress entries for one exercise by a user, newest first.
pub fn get_exercise_progress(
    conn: &mut SqliteConnection,
    user_id: i32,
    exercise_id: i32,
) -> StoreResult<Vec<Progress>> {
    progress::table
        .filter(progress::user_id.eq(user_id))
        .filter(progress::exercise_id.eq(exercise_id))
        .order((progress::date.desc(), progress::created_at.desc()))
        .load::<Progress>(conn)
        .map_err(Into::into)
}

pub fn record_progress(
    conn: &mut SqliteConnection,
    new_progress: &NewProgress,
) -> StoreResult<Progress> {
    diesel::insert_into(progress::table)
        .values(new_progress)
        .get_result::<Progress>(conn)
        .map_err(Into::into)
}

/// Scoped to the owning user: a record belonging to someone else is not
/// deleted (zero rows affected).
pub fn delete_progress(
    conn: &mut SqliteConnection,
    progress_id: i32,
    user_id: i32,
) -> StoreResult<usize> {
    diesel::delete(
        progress::table
            .find(progress_id)
            .filter(progress::user_id.eq(user_id)),
    )
    .execute(conn)
    .map_err(Into::into)
}
