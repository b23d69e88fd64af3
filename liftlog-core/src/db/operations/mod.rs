pub mod associations;
pub mod exercises;
pub mod progress;
pub mod users;
pub mod workouts;

pub use associations::ReorderMode;
