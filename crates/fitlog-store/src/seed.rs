//! Default catalog seeded into every freshly constructed store.
//!
//! Runs once, synchronously, during [`Store::new`], before any external call
//! can reach the store. Inserts go through the same allocation path as
//! regular creates, so the catalog occupies exercise ids 1–8 and plan ids
//! 1–3 and the counters continue from there.

use fitlog_core::ids::ExerciseId;
use fitlog_core::models::{NewExercise, NewWorkoutPlan, PlanExercise};

use crate::Store;

pub(crate) fn populate(store: &Store) {
    for exercise in default_exercises() {
        store.create_exercise(exercise);
    }
    for plan in default_plans() {
        store.create_workout_plan(plan);
    }
}

fn exercise(
    name: &str,
    description: &str,
    category: &str,
    difficulty: &str,
    default_sets: i64,
    default_reps: i64,
    default_duration: Option<i64>,
) -> NewExercise {
    NewExercise {
        name: name.into(),
        description: Some(description.into()),
        category: category.into(),
        difficulty: difficulty.into(),
        default_sets,
        default_reps,
        default_duration,
        is_custom: false,
    }
}

fn default_exercises() -> Vec<NewExercise> {
    vec![
        exercise(
            "Push-ups",
            "Ushtrim klasik për zhvillimin e forcës së gjoksit dhe krahëve",
            "Krahë",
            "Fillestare",
            3,
            12,
            None,
        ),
        exercise(
            "Squats",
            "Ushtrim bazë për forcimin e këmbëve dhe gluteave",
            "Këmbë",
            "Fillestare",
            3,
            15,
            None,
        ),
        exercise(
            "Deadlifts",
            "Ushtrim kompleks për shpinën dhe këmbët",
            "Shpinë",
            "Përparuar",
            4,
            8,
            None,
        ),
        exercise(
            "Bench Press",
            "Ushtrim me peshë për gjoksin",
            "Gjoks",
            "Mesatare",
            4,
            10,
            None,
        ),
        exercise("Running", "Vrapim për kardio", "Kardio", "Fillestare", 1, 1, Some(1800)),
        exercise(
            "Burpees",
            "Ushtrim i plotë për të gjithë trupin",
            "Kardio",
            "Mesatare",
            3,
            10,
            None,
        ),
        exercise(
            "Pull-ups",
            "Ushtrim për shpinën dhe bicepset",
            "Krahë",
            "Mesatare",
            3,
            8,
            None,
        ),
        exercise(
            "Planks",
            "Ushtrim statik për muskujt e barkut",
            "Bark",
            "Fillestare",
            3,
            1,
            Some(60),
        ),
    ]
}

fn entry(exercise_id: i64, sets: i64, reps: i64, duration: Option<i64>, rest_time: Option<i64>) -> PlanExercise {
    PlanExercise {
        exercise_id: ExerciseId::from_raw(exercise_id),
        sets,
        reps,
        duration,
        rest_time,
    }
}

fn default_plans() -> Vec<NewWorkoutPlan> {
    vec![
        NewWorkoutPlan {
            name: "Upper Body Blast".into(),
            description: Some("Fokus në krahë, shpinë dhe gjoks për forcë maksimale".into()),
            category: "Krahë".into(),
            estimated_duration: 45,
            exercises: vec![
                entry(1, 3, 12, None, Some(60)),
                entry(4, 4, 10, None, Some(90)),
                entry(7, 3, 8, None, Some(90)),
            ],
        },
        NewWorkoutPlan {
            name: "Leg Day Power".into(),
            description: Some("Stërvitje intensive për këmbë dhe glutea".into()),
            category: "Këmbë".into(),
            estimated_duration: 50,
            exercises: vec![entry(2, 4, 15, None, Some(90)), entry(3, 4, 8, None, Some(120))],
        },
        NewWorkoutPlan {
            name: "Cardio HIIT".into(),
            description: Some("Stërvitje kardiovaskulare me intensitet të lartë".into()),
            category: "Kardio".into(),
            estimated_duration: 30,
            exercises: vec![entry(6, 3, 10, None, Some(60)), entry(5, 1, 1, Some(1200), Some(0))],
        },
    ]
}
