//! Workout session CRUD and the recent-sessions query.

use tracing::instrument;

use fitlog_core::ids::SessionId;
use fitlog_core::models::{NewWorkoutSession, WorkoutSession};
use fitlog_core::patch::WorkoutSessionPatch;

use crate::Store;

impl Store {
    /// All sessions, in insertion order.
    pub fn list_workout_sessions(&self) -> Vec<WorkoutSession> {
        self.inner.sessions.read().list()
    }

    pub fn get_workout_session(&self, id: SessionId) -> Option<WorkoutSession> {
        self.inner.sessions.read().get(id)
    }

    #[instrument(skip(self, new), fields(plan_id = %new.workout_plan_id))]
    pub fn create_workout_session(&self, new: NewWorkoutSession) -> WorkoutSession {
        self.inner
            .sessions
            .write()
            .insert_with(|id| new.into_session(id))
    }

    #[instrument(skip(self, patch), fields(session_id = %id))]
    pub fn update_workout_session(
        &self,
        id: SessionId,
        patch: WorkoutSessionPatch,
    ) -> Option<WorkoutSession> {
        self.inner
            .sessions
            .write()
            .update_with(id, |session| patch.apply_to(session))
    }

    #[instrument(skip(self), fields(session_id = %id))]
    pub fn delete_workout_session(&self, id: SessionId) -> bool {
        self.inner.sessions.write().remove(id)
    }

    /// The `limit` most recently started sessions, newest first.
    pub fn recent_workout_sessions(&self, limit: usize) -> Vec<WorkoutSession> {
        let mut sessions = self.inner.sessions.read().list();
        sessions.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        sessions.truncate(limit);
        sessions
    }
}
