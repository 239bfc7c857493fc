pub mod ids;
pub mod models;
pub mod patch;
pub mod stats;

pub use ids::{ExerciseId, PlanId, SessionId};
pub use models::{
    CompletedExercise, Exercise, NewExercise, NewWorkoutPlan, NewWorkoutSession, PlanExercise,
    WorkoutPlan, WorkoutSession,
};
pub use patch::{ExercisePatch, WorkoutPlanPatch, WorkoutSessionPatch};
pub use stats::{DayStat, WeeklyStats};
