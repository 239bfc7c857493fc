//! Workout plan CRUD.

use chrono::Utc;
use tracing::instrument;

use fitlog_core::ids::PlanId;
use fitlog_core::models::{NewWorkoutPlan, WorkoutPlan};
use fitlog_core::patch::WorkoutPlanPatch;

use crate::Store;

impl Store {
    /// All plans, in insertion order.
    pub fn list_workout_plans(&self) -> Vec<WorkoutPlan> {
        self.inner.plans.read().list()
    }

    pub fn get_workout_plan(&self, id: PlanId) -> Option<WorkoutPlan> {
        self.inner.plans.read().get(id)
    }

    /// Create a plan, stamping `created_at` with the current time. The
    /// exercise references inside are taken as-is; nothing checks that they
    /// name existing exercises.
    #[instrument(skip(self, new), fields(name = %new.name))]
    pub fn create_workout_plan(&self, new: NewWorkoutPlan) -> WorkoutPlan {
        let created_at = Utc::now();
        self.inner
            .plans
            .write()
            .insert_with(|id| new.into_plan(id, created_at))
    }

    /// Shallow-merge the patch. `id` and `created_at` are outside the
    /// patchable field set and always survive.
    #[instrument(skip(self, patch), fields(plan_id = %id))]
    pub fn update_workout_plan(&self, id: PlanId, patch: WorkoutPlanPatch) -> Option<WorkoutPlan> {
        self.inner
            .plans
            .write()
            .update_with(id, |plan| patch.apply_to(plan))
    }

    #[instrument(skip(self), fields(plan_id = %id))]
    pub fn delete_workout_plan(&self, id: PlanId) -> bool {
        self.inner.plans.write().remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitlog_core::ids::ExerciseId;
    use fitlog_core::models::PlanExercise;

    fn leg_day() -> NewWorkoutPlan {
        NewWorkoutPlan {
            name: "Leg Day Power".into(),
            description: Some("Stërvitje intensive për këmbë dhe glutea".into()),
            category: "Këmbë".into(),
            estimated_duration: 50,
            exercises: vec![
                PlanExercise {
                    exercise_id: ExerciseId::from_raw(2),
                    sets: 4,
                    reps: 15,
                    duration: None,
                    rest_time: Some(90),
                },
                PlanExercise {
                    exercise_id: ExerciseId::from_raw(3),
                    sets: 4,
                    reps: 8,
                    duration: None,
                    rest_time: Some(120),
                },
            ],
        }
    }

    #[test]
    fn create_stamps_created_at_and_preserves_exercise_order() {
        let store = Store::empty();
        let before = Utc::now();
        let plan = store.create_workout_plan(leg_day());
        assert!(plan.created_at >= before);
        assert_eq!(plan.id.as_i64(), 1);
        assert_eq!(plan.exercises[0].exercise_id.as_i64(), 2);
        assert_eq!(plan.exercises[1].exercise_id.as_i64(), 3);
    }

    #[test]
    fn exercise_references_are_not_validated() {
        // The store has no exercise with id 999, yet the plan is accepted.
        let store = Store::empty();
        let mut new = leg_day();
        new.exercises[0].exercise_id = ExerciseId::from_raw(999);
        let plan = store.create_workout_plan(new);
        assert_eq!(plan.exercises[0].exercise_id.as_i64(), 999);
    }

    #[test]
    fn update_preserves_created_at_and_id() {
        let store = Store::empty();
        let created = store.create_workout_plan(leg_day());

        let updated = store
            .update_workout_plan(
                created.id,
                WorkoutPlanPatch {
                    estimated_duration: Some(55),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.estimated_duration, 55);
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.exercises, created.exercises);
    }

    #[test]
    fn replacing_exercises_swaps_the_whole_sequence() {
        let store = Store::empty();
        let created = store.create_workout_plan(leg_day());

        let replacement = vec![PlanExercise {
            exercise_id: ExerciseId::from_raw(7),
            sets: 3,
            reps: 8,
            duration: None,
            rest_time: Some(90),
        }];
        let updated = store
            .update_workout_plan(
                created.id,
                WorkoutPlanPatch {
                    exercises: Some(replacement.clone()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.exercises, replacement);
    }

    #[test]
    fn delete_missing_plan_returns_false() {
        let store = Store::empty();
        assert!(!store.delete_workout_plan(PlanId::from_raw(1)));
    }

    #[test]
    fn deleting_a_referenced_exercise_does_not_cascade() {
        let store = Store::new();
        // Seed plan 1 references exercise 1.
        assert!(store.delete_exercise(ExerciseId::from_raw(1)));
        let plan = store.get_workout_plan(PlanId::from_raw(1)).unwrap();
        assert!(plan
            .exercises
            .iter()
            .any(|e| e.exercise_id.as_i64() == 1));
    }
}
