//! Partial-update payloads.
//!
//! Every field is individually optional; merging a patch overwrites exactly
//! the fields it carries and preserves the rest. Ids and `created_at` are
//! excluded from the patchable field set entirely, so a caller can never
//! overwrite them. Everything else is fair game, including fields that are
//! conceptually immutable after creation (a completed session's start_time,
//! say) — the store does not police caller conventions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::PlanId;
use crate::models::{CompletedExercise, Exercise, PlanExercise, WorkoutPlan, WorkoutSession};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub default_sets: Option<i64>,
    #[serde(default)]
    pub default_reps: Option<i64>,
    #[serde(default)]
    pub default_duration: Option<i64>,
    #[serde(default)]
    pub is_custom: Option<bool>,
}

impl ExercisePatch {
    pub fn apply_to(self, exercise: &mut Exercise) {
        if let Some(name) = self.name {
            exercise.name = name;
        }
        if let Some(description) = self.description {
            exercise.description = Some(description);
        }
        if let Some(category) = self.category {
            exercise.category = category;
        }
        if let Some(difficulty) = self.difficulty {
            exercise.difficulty = difficulty;
        }
        if let Some(sets) = self.default_sets {
            exercise.default_sets = sets;
        }
        if let Some(reps) = self.default_reps {
            exercise.default_reps = reps;
        }
        if let Some(duration) = self.default_duration {
            exercise.default_duration = Some(duration);
        }
        if let Some(is_custom) = self.is_custom {
            exercise.is_custom = is_custom;
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlanPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub estimated_duration: Option<i64>,
    #[serde(default)]
    pub exercises: Option<Vec<PlanExercise>>,
}

impl WorkoutPlanPatch {
    pub fn apply_to(self, plan: &mut WorkoutPlan) {
        if let Some(name) = self.name {
            plan.name = name;
        }
        if let Some(description) = self.description {
            plan.description = Some(description);
        }
        if let Some(category) = self.category {
            plan.category = category;
        }
        if let Some(duration) = self.estimated_duration {
            plan.estimated_duration = duration;
        }
        if let Some(exercises) = self.exercises {
            plan.exercises = exercises;
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSessionPatch {
    #[serde(default)]
    pub workout_plan_id: Option<PlanId>,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub exercises_completed: Option<Vec<CompletedExercise>>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl WorkoutSessionPatch {
    pub fn apply_to(self, session: &mut WorkoutSession) {
        if let Some(plan_id) = self.workout_plan_id {
            session.workout_plan_id = plan_id;
        }
        if let Some(start) = self.start_time {
            session.start_time = start;
        }
        if let Some(end) = self.end_time {
            session.end_time = Some(end);
        }
        if let Some(duration) = self.duration {
            session.duration = Some(duration);
        }
        if let Some(completed) = self.completed {
            session.completed = completed;
        }
        if let Some(done) = self.exercises_completed {
            session.exercises_completed = done;
        }
        if let Some(notes) = self.notes {
            session.notes = Some(notes);
        }
    }
}
