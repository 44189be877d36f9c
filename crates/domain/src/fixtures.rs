use std::sync::LazyLock;

use crate::{Day, Exercise, ExerciseEntry, Reps, Sets, WeekDays};

pub static EXERCISES: LazyLock<Vec<Exercise>> = LazyLock::new(|| {
    vec![
        Exercise::new("Bench Press", &["chest"], &["triceps", "front deltoids"]),
        Exercise::new(
            "Barbell Squat",
            &["quadriceps"],
            &["glutes", "hamstrings", "lower back"],
        ),
        Exercise::new(
            "Barbell Deadlift",
            &["lower back"],
            &["glutes", "hamstrings", "quadriceps"],
        ),
        Exercise::new("Standing Military Press", &["shoulders"], &["triceps"]),
        Exercise::new(
            "Bent Over Barbell Row",
            &["middle back"],
            &["lats", "biceps", "rear deltoids"],
        ),
        Exercise::new("Pull-Up", &["lats"], &["biceps", "middle back"]),
        Exercise::new("Dumbbell Curl", &["biceps"], &["forearms"]),
        Exercise::new("Triceps Pushdown", &["triceps"], &[]),
        Exercise::new("Leg Curl", &["hamstrings"], &[]),
        Exercise::new("Standing Calf Raise", &["calves"], &[]),
        Exercise::new("Plank", &["abdominals"], &[]),
    ]
});

pub fn entry(exercise: &str, sets: u32, reps: u32) -> ExerciseEntry {
    ExerciseEntry::new(exercise, Sets::new(sets).unwrap(), Reps::new(reps).unwrap())
}

pub fn days(entries: impl IntoIterator<Item = (Day, ExerciseEntry)>) -> WeekDays {
    let mut days = WeekDays::default();
    for (day, entry) in entries {
        days.day_mut(day).push(entry);
    }
    days
}
