use diesel::prelude::*;

use crate::db::models::{NewUser, User, UserChanges};
use crate::db::schema::users;
use crate::error::StoreResult;

pub fn get_all_users(conn: &mut SqliteConnection) -> StoreResult<Vec<User>> {
    users::table.load::<User>(conn).map_err(Into::into)
}

pub fn get_user(conn: &mut SqliteConnection, user_id: i32) -> StoreResult<User> {
    users::table
        .find(user_id)
        .first::<User>(conn)
        .map_err(Into::into)
}

pub fn create_user(conn: &mut SqliteConnection, new_user: &NewUser) -> StoreResult<User> {
    diesel::insert_into(users::table)
        .values(new_user)
        .get_result::<User>(conn)
        .map_err(Into::into)
}

pub fn update_user(
    conn: &mut SqliteConnection,
    user_id: i32,
    changes: &UserChanges,
) -> StoreResult<User> {
    diesel::update(users::table.find(user_id))
        .set(changes)
        .get_result::<User>(conn)
        .map_err(Into::into)
}

pub fn delete_user(conn: &mut SqliteConnection, user_id: i32) -> StoreResult<usize> {
    diesel::delete(users::table.find(user_id))
        .execute(conn)
        .map_err(Into::into)
}
