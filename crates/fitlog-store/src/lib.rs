//! In-memory store for exercises, workout plans and workout sessions.
//!
//! The store is volatile by design: process-resident, seeded at construction,
//! gone on restart. [`Store`] is a cheap clone-able handle (shared `Arc`
//! inner) that the HTTP layer holds; each entity table sits behind its own
//! lock, and every CRUD call takes that lock exactly once for its whole
//! read-modify-write, so id allocation and the subsequent insert are a single
//! critical section.

pub mod exercises;
pub mod plans;
pub mod seed;
pub mod sessions;
pub mod stats;
mod table;

use std::sync::Arc;

use parking_lot::RwLock;

use fitlog_core::ids::{ExerciseId, PlanId, SessionId};
use fitlog_core::models::{Exercise, WorkoutPlan, WorkoutSession};

use crate::table::Table;

/// The store facade. All entity state lives behind this handle.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    exercises: RwLock<Table<ExerciseId, Exercise>>,
    plans: RwLock<Table<PlanId, WorkoutPlan>>,
    sessions: RwLock<Table<SessionId, WorkoutSession>>,
}

impl Store {
    /// Construct a store pre-populated with the default exercise catalog and
    /// sample plans. Seeding runs synchronously through the same allocation
    /// path as regular creates, before the handle is returned to anyone.
    pub fn new() -> Self {
        let store = Self::empty();
        seed::populate(&store);
        store
    }

    /// An unseeded store. Tests start from this to get predictable ids.
    pub(crate) fn empty() -> Self {
        Self {
            inner: Arc::new(StoreInner {
                exercises: RwLock::new(Table::new()),
                plans: RwLock::new(Table::new()),
                sessions: RwLock::new(Table::new()),
            }),
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
