//! Entity records and their insert payloads.
//!
//! Wire names are camelCase to match the JSON API (`defaultSets`,
//! `estimatedDuration`, ...). Records are plain values; the store hands out
//! copies and callers never hold references into it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ExerciseId, PlanId, SessionId};

/// A catalog entry describing a single movement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: ExerciseId,
    pub name: String,
    pub description: Option<String>,
    /// One of: Krahë, Këmbë, Gjoks, Shpinë, Kardio, Bark. Stored as free
    /// text; the vocabulary is constrained upstream.
    pub category: String,
    /// One of: Fillestare, Mesatare, Përparuar.
    pub difficulty: String,
    pub default_sets: i64,
    pub default_reps: i64,
    /// Seconds. Present for time-based exercises, absent for rep-based ones.
    pub default_duration: Option<i64>,
    /// False for the seeded catalog, true for user-created entries.
    pub is_custom: bool,
}

/// Insert payload for [`Exercise`]: the record minus its id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExercise {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    pub difficulty: String,
    #[serde(default = "default_sets")]
    pub default_sets: i64,
    #[serde(default = "default_reps")]
    pub default_reps: i64,
    #[serde(default)]
    pub default_duration: Option<i64>,
    #[serde(default)]
    pub is_custom: bool,
}

fn default_sets() -> i64 {
    3
}

fn default_reps() -> i64 {
    10
}

impl NewExercise {
    pub fn into_exercise(self, id: ExerciseId) -> Exercise {
        Exercise {
            id,
            name: self.name,
            description: self.description,
            category: self.category,
            difficulty: self.difficulty,
            default_sets: self.default_sets,
            default_reps: self.default_reps,
            default_duration: self.default_duration,
            is_custom: self.is_custom,
        }
    }
}

/// One entry in a plan's ordered exercise sequence.
///
/// `exercise_id` is a weak reference: it is never validated against the
/// exercise table, and the exercise it names may be deleted out from under
/// it. Consumers doing lookups must handle the missing case.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanExercise {
    pub exercise_id: ExerciseId,
    pub sets: i64,
    pub reps: i64,
    /// Seconds, for time-based entries.
    #[serde(default)]
    pub duration: Option<i64>,
    /// Rest between sets, seconds.
    #[serde(default)]
    pub rest_time: Option<i64>,
}

/// A named, ordered composition of exercise references.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    pub id: PlanId,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    /// Minutes.
    pub estimated_duration: i64,
    /// Order is significant: it defines the workout order and is preserved
    /// verbatim from input.
    pub exercises: Vec<PlanExercise>,
    /// Stamped once at creation, never updated.
    pub created_at: DateTime<Utc>,
}

/// Insert payload for [`WorkoutPlan`]: the record minus id and created_at.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkoutPlan {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    pub estimated_duration: i64,
    pub exercises: Vec<PlanExercise>,
}

impl NewWorkoutPlan {
    pub fn into_plan(self, id: PlanId, created_at: DateTime<Utc>) -> WorkoutPlan {
        WorkoutPlan {
            id,
            name: self.name,
            description: self.description,
            category: self.category,
            estimated_duration: self.estimated_duration,
            exercises: self.exercises,
            created_at,
        }
    }
}

/// One exercise's outcome within a finished session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedExercise {
    pub exercise_id: ExerciseId,
    pub sets_completed: i64,
    #[serde(default)]
    pub actual_reps: Option<Vec<i64>>,
}

/// A record of one performed (or in-progress) execution of a plan.
///
/// A session starts with `completed = false` and no end_time/duration;
/// finishing it sets all three together. The store itself allows any partial
/// update at any time — that atomicity is the caller's convention.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSession {
    pub id: SessionId,
    /// Weak reference, never validated against the plan table.
    pub workout_plan_id: PlanId,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    /// Total elapsed, seconds.
    pub duration: Option<i64>,
    pub completed: bool,
    pub exercises_completed: Vec<CompletedExercise>,
    pub notes: Option<String>,
}

/// Insert payload for [`WorkoutSession`]: the record minus its id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkoutSession {
    pub workout_plan_id: PlanId,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub exercises_completed: Vec<CompletedExercise>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewWorkoutSession {
    pub fn into_session(self, id: SessionId) -> WorkoutSession {
        WorkoutSession {
            id,
            workout_plan_id: self.workout_plan_id,
            start_time: self.start_time,
            end_time: self.end_time,
            duration: self.duration,
            completed: self.completed,
            exercises_completed: self.exercises_completed,
            notes: self.notes,
        }
    }
}
