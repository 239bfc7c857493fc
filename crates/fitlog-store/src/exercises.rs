//! Exercise CRUD.

use tracing::instrument;

use fitlog_core::ids::ExerciseId;
use fitlog_core::models::{Exercise, NewExercise};
use fitlog_core::patch::ExercisePatch;

use crate::Store;

impl Store {
    /// All exercises, in insertion order.
    pub fn list_exercises(&self) -> Vec<Exercise> {
        self.inner.exercises.read().list()
    }

    /// Exercises whose category equals `category` exactly. Case-sensitive,
    /// no normalization.
    pub fn list_exercises_by_category(&self, category: &str) -> Vec<Exercise> {
        self.inner
            .exercises
            .read()
            .list()
            .into_iter()
            .filter(|ex| ex.category == category)
            .collect()
    }

    pub fn get_exercise(&self, id: ExerciseId) -> Option<Exercise> {
        self.inner.exercises.read().get(id)
    }

    #[instrument(skip(self, new), fields(name = %new.name))]
    pub fn create_exercise(&self, new: NewExercise) -> Exercise {
        self.inner
            .exercises
            .write()
            .insert_with(|id| new.into_exercise(id))
    }

    /// Shallow-merge the patch over the stored record. Absent patch fields
    /// preserve the stored value; the id is not part of the patchable set.
    #[instrument(skip(self, patch), fields(exercise_id = %id))]
    pub fn update_exercise(&self, id: ExerciseId, patch: ExercisePatch) -> Option<Exercise> {
        self.inner
            .exercises
            .write()
            .update_with(id, |ex| patch.apply_to(ex))
    }

    #[instrument(skip(self), fields(exercise_id = %id))]
    pub fn delete_exercise(&self, id: ExerciseId) -> bool {
        self.inner.exercises.write().remove(id)
    }
}
