diesel::table! {
    users (id) {
        id -> Integer,
        username -> Text,
        email -> Text,
        password -> Text,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::table! {
    workouts (id) {
        id -> Integer,
        name -> Text,
        description -> Text,
        user_id -> Integer,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::table! {
    exercises (id) {
        id -> Integer,
        name -> Text,
        description -> Text,
        category -> Text,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::table! {
    workout_exercises (workout_id, exercise_id) {
        workout_id -> Integer,
        exercise_id -> Integer,
        sets -> Integer,
        reps -> Integer,
        weight -> Float,
        exercise_order -> Integer,
    }
}

diesel::table! {
    progress (id) {
        id -> Integer,
        user_id -> Integer,
        workout_id -> Integer,
        exercise_id -> Integer,
        sets -> Integer,
        reps -> Integer,
        weight -> Float,
        notes -> Text,
        date -> Date,
        created_at -> Timestamp,
    }
}

diesel::joinable!(workouts -> users (user_id));
diesel::joinable!(workout_exercises -> workouts (workout_id));
diesel::joinable!(workout_exercises -> exercises (exercise_id));
diesel::joinable!(progress -> users (user_id));
diesel::joinable!(progress -> workouts (workout_id));
diesel::joinable!(progress -> exercises (exercise_id));

diesel::allow_tables_to_appear_in_same_query!(users, workouts, exercises, workout_exercises, progress,);
