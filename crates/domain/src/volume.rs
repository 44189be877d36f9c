//! Fractional set counting.
//!
//! A set counts fully for the muscles an exercise targets and the lift that is
//! performed, and half for secondary muscles and lifts sharing a muscle.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::{Day, ExerciseCatalog, Muscle, Property, Reps, Sets, Stimulus, WeekDays};

pub const INDIRECT_FACTOR: f64 = 0.5;

/// Fractional sets per key for each day of a week.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyVolume<K: Ord> {
    days: [BTreeMap<K, f64>; 7],
}

pub type MuscleVolume = DailyVolume<Muscle>;
pub type LiftVolume = DailyVolume<String>;

impl<K: Ord> Default for DailyVolume<K> {
    fn default() -> Self {
        Self {
            days: Default::default(),
        }
    }
}

impl<K: Ord + Clone> DailyVolume<K> {
    pub fn add(&mut self, day: Day, key: K, sets: f64) {
        *self.days[day.index()].entry(key).or_insert(0.0) += sets;
    }

    #[must_use]
    pub fn day(&self, day: Day) -> &BTreeMap<K, f64> {
        &self.days[day.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Day, &BTreeMap<K, f64>)> {
        Day::iter().map(|day| (*day, self.day(*day)))
    }

    #[must_use]
    pub fn keys(&self) -> BTreeSet<&K> {
        self.days.iter().flat_map(BTreeMap::keys).collect()
    }

    #[must_use]
    pub fn weekly_totals(&self) -> BTreeMap<K, f64> {
        let mut totals = BTreeMap::new();
        for day in &self.days {
            for (key, sets) in day {
                *totals.entry(key.clone()).or_insert(0.0) += sets;
            }
        }
        totals
    }

    #[must_use]
    pub fn total(&self, key: &K) -> f64 {
        self.days.iter().filter_map(|d| d.get(key)).sum()
    }

    /// Volume of every day in week order, rest days included as zero.
    #[must_use]
    pub fn per_day(&self, key: &K) -> Vec<(Day, f64)> {
        self.iter()
            .map(|(day, volume)| (day, volume.get(key).copied().unwrap_or_default()))
            .collect()
    }

    #[must_use]
    pub fn max_session(&self, key: &K) -> f64 {
        self.days
            .iter()
            .filter_map(|d| d.get(key))
            .copied()
            .fold(0.0, f64::max)
    }

    #[must_use]
    pub fn days_trained(&self, key: &K) -> usize {
        self.days
            .iter()
            .filter(|d| d.get(key).is_some_and(|sets| *sets > 0.0))
            .count()
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&K) -> bool) {
        for day in &mut self.days {
            day.retain(|key, _| keep(key));
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.iter().all(BTreeMap::is_empty)
    }
}

/// Volume per muscle of all entries with more than six reps.
#[must_use]
pub fn hypertrophy_volume<C: ExerciseCatalog + ?Sized>(days: &WeekDays, catalog: &C) -> MuscleVolume {
    let mut volume = MuscleVolume::default();

    for (day, entry) in days.entries() {
        if entry.reps.is_strength() {
            continue;
        }
        let Some(exercise) = catalog.lookup(&entry.exercise) else {
            debug!("skipping unknown exercise \"{}\"", entry.exercise);
            continue;
        };
        let sets = f64::from(entry.sets);
        for (muscle, stimulus) in exercise.muscle_stimulus() {
            volume.add(day, muscle.clone(), sets * stimulus.factor());
        }
    }

    volume
}

/// Volume per lift of all entries with at most six reps.
///
/// The performed lift gains the full set count. Every other catalog exercise
/// sharing at least one muscle gains half of it, scheduled or not.
#[must_use]
pub fn strength_volume<C: ExerciseCatalog + ?Sized>(days: &WeekDays, catalog: &C) -> LiftVolume {
    let mut volume = LiftVolume::default();

    if !days.entries().any(|(_, e)| e.reps.is_strength()) {
        return volume;
    }

    let exercise_muscles = catalog_muscles(catalog);
    let no_muscles = BTreeSet::new();

    for (day, entry) in days.entries() {
        if !entry.reps.is_strength() {
            continue;
        }
        let sets = f64::from(entry.sets);
        volume.add(day, entry.exercise.clone(), sets);

        let muscles = exercise_muscles
            .get(entry.exercise.as_str())
            .unwrap_or(&no_muscles);

        for (other, other_muscles) in &exercise_muscles {
            if *other != entry.exercise && !muscles.is_disjoint(other_muscles) {
                volume.add(day, (*other).to_string(), sets * INDIRECT_FACTOR);
            }
        }
    }

    volume
}

/// Touched muscles per exercise name. The first exercise of a name wins.
fn catalog_muscles<C: ExerciseCatalog + ?Sized>(catalog: &C) -> BTreeMap<&str, BTreeSet<&Muscle>> {
    let mut result = BTreeMap::new();
    for exercise in catalog.exercises() {
        result
            .entry(exercise.name.as_str())
            .or_insert_with(|| exercise.muscles());
    }
    result
}

#[derive(Debug, Clone, PartialEq)]
pub struct MuscleContribution {
    pub exercise: String,
    pub day: Day,
    pub sets: Sets,
    pub reps: Reps,
    pub stimulus: Stimulus,
    pub contribution: f64,
}

/// Hypertrophy entries adding volume to `muscle`, in week order.
#[must_use]
pub fn muscle_contributors<C: ExerciseCatalog + ?Sized>(
    muscle: &Muscle,
    days: &WeekDays,
    catalog: &C,
) -> Vec<MuscleContribution> {
    days.entries()
        .filter(|(_, entry)| !entry.reps.is_strength())
        .filter_map(|(day, entry)| {
            let exercise = catalog.lookup(&entry.exercise)?;
            let stimulus = if exercise.primary_muscles.contains(muscle) {
                Stimulus::Primary
            } else if exercise.secondary_muscles.contains(muscle) {
                Stimulus::Secondary
            } else {
                return None;
            };
            Some(MuscleContribution {
                exercise: entry.exercise.clone(),
                day,
                sets: entry.sets,
                reps: entry.reps,
                stimulus,
                contribution: f64::from(entry.sets) * stimulus.factor(),
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectStrengthEntry {
    pub day: Day,
    pub sets: Sets,
    pub reps: Reps,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndirectStrengthEntry {
    pub exercise: String,
    pub day: Day,
    pub sets: Sets,
    pub reps: Reps,
    /// Sorted by display name.
    pub shared_muscles: Vec<Muscle>,
    pub contribution: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrengthDetails {
    pub direct: Vec<DirectStrengthEntry>,
    pub indirect: Vec<IndirectStrengthEntry>,
}

/// Scheduled strength-range entries behind the volume of a lift.
///
/// Only scheduled entries are listed, so the indirect part may be smaller than
/// the half sets [`strength_volume`] attributes from the whole catalog.
#[must_use]
pub fn strength_details<C: ExerciseCatalog + ?Sized>(
    exercise: &str,
    days: &WeekDays,
    catalog: &C,
) -> StrengthDetails {
    let Some(lift) = catalog.lookup(exercise) else {
        return StrengthDetails::default();
    };
    let muscles = lift.muscles();
    let mut details = StrengthDetails::default();

    for (day, entry) in days.entries() {
        if !entry.reps.is_strength() {
            continue;
        }
        if entry.exercise == exercise {
            details.direct.push(DirectStrengthEntry {
                day,
                sets: entry.sets,
                reps: entry.reps,
            });
            continue;
        }
        let Some(other) = catalog.lookup(&entry.exercise) else {
            continue;
        };
        let shared_muscles = muscles
            .intersection(&other.muscles())
            .map(|m| (*m).clone())
            .collect::<Vec<_>>();
        if shared_muscles.is_empty() {
            continue;
        }
        details.indirect.push(IndirectStrengthEntry {
            exercise: entry.exercise.clone(),
            day,
            sets: entry.sets,
            reps: entry.reps,
            shared_muscles,
            contribution: f64::from(entry.sets) * INDIRECT_FACTOR,
        });
    }

    details
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::fixtures::{EXERCISES, days, entry};

    fn muscle(name: &str) -> Muscle {
        Muscle::new(name).unwrap()
    }

    #[test]
    fn test_daily_volume() {
        let mut volume = LiftVolume::default();
        assert!(volume.is_empty());

        volume.add(Day::Monday, "A".to_string(), 2.0);
        volume.add(Day::Monday, "A".to_string(), 1.5);
        volume.add(Day::Thursday, "A".to_string(), 4.0);
        volume.add(Day::Thursday, "B".to_string(), 0.5);

        let a = "A".to_string();
        assert_approx_eq!(volume.total(&a), 7.5);
        assert_approx_eq!(volume.max_session(&a), 4.0);
        assert_eq!(volume.days_trained(&a), 2);
        assert_eq!(volume.per_day(&a)[0], (Day::Monday, 3.5));
        assert_eq!(volume.per_day(&a)[1], (Day::Tuesday, 0.0));
        assert_eq!(
            volume.weekly_totals(),
            BTreeMap::from([("A".to_string(), 7.5), ("B".to_string(), 0.5)])
        );

        volume.retain(|k| k != "B");
        assert_eq!(volume.keys(), BTreeSet::from([&a]));
    }

    #[test]
    fn test_hypertrophy_volume() {
        let volume = hypertrophy_volume(
            &days([(Day::Monday, entry("Bench Press", 4, 8))]),
            EXERCISES.as_slice(),
        );

        assert_eq!(
            volume.day(Day::Monday),
            &BTreeMap::from([
                (muscle("chest"), 4.0),
                (muscle("front deltoids"), 2.0),
                (muscle("triceps"), 2.0),
            ])
        );
        assert!(volume.day(Day::Tuesday).is_empty());
    }

    #[test]
    fn test_hypertrophy_volume_sums_over_days() {
        let volume = hypertrophy_volume(
            &days([
                (Day::Monday, entry("Bench Press", 4, 8)),
                (Day::Thursday, entry("Triceps Pushdown", 3, 12)),
            ]),
            EXERCISES.as_slice(),
        );

        assert_approx_eq!(volume.total(&muscle("triceps")), 5.0);
        assert_eq!(volume.days_trained(&muscle("triceps")), 2);
    }

    #[test]
    fn test_hypertrophy_volume_ignores_strength_range_and_unknown_exercises() {
        let volume = hypertrophy_volume(
            &days([
                (Day::Monday, entry("Bench Press", 4, 6)),
                (Day::Monday, entry("Unknown", 4, 10)),
            ]),
            EXERCISES.as_slice(),
        );

        assert!(volume.is_empty());
    }

    #[test]
    fn test_strength_volume() {
        let volume = strength_volume(
            &days([(Day::Monday, entry("Bench Press", 4, 5))]),
            EXERCISES.as_slice(),
        );

        assert_eq!(
            volume.day(Day::Monday),
            &BTreeMap::from([
                ("Bench Press".to_string(), 4.0),
                ("Standing Military Press".to_string(), 2.0),
                ("Triceps Pushdown".to_string(), 2.0),
            ])
        );
        assert!(
            hypertrophy_volume(
                &days([(Day::Monday, entry("Bench Press", 4, 5))]),
                EXERCISES.as_slice()
            )
            .is_empty()
        );
    }

    #[test]
    fn test_strength_volume_related_lifts() {
        let volume = strength_volume(
            &days([
                (Day::Monday, entry("Barbell Squat", 5, 5)),
                (Day::Wednesday, entry("Barbell Deadlift", 1, 5)),
            ]),
            EXERCISES.as_slice(),
        );
        let totals = volume.weekly_totals();

        assert_approx_eq!(totals["Barbell Squat"], 5.5);
        assert_approx_eq!(totals["Barbell Deadlift"], 3.5);
        assert_approx_eq!(totals["Leg Curl"], 3.0);
        assert!(!totals.contains_key("Bench Press"));
    }

    #[test]
    fn test_strength_volume_unknown_exercise() {
        let volume = strength_volume(
            &days([(Day::Friday, entry("Atlas Stone", 3, 3))]),
            EXERCISES.as_slice(),
        );

        assert_eq!(
            volume.weekly_totals(),
            BTreeMap::from([("Atlas Stone".to_string(), 3.0)])
        );
    }

    #[test]
    fn test_strength_volume_boundary() {
        let volume = strength_volume(
            &days([
                (Day::Monday, entry("Pull-Up", 3, 6)),
                (Day::Monday, entry("Pull-Up", 3, 7)),
            ]),
            EXERCISES.as_slice(),
        );

        assert_approx_eq!(volume.total(&"Pull-Up".to_string()), 3.0);
    }

    #[test]
    fn test_muscle_contributors() {
        let days = days([
            (Day::Monday, entry("Bench Press", 4, 8)),
            (Day::Monday, entry("Bench Press", 3, 5)),
            (Day::Tuesday, entry("Triceps Pushdown", 3, 12)),
            (Day::Tuesday, entry("Dumbbell Curl", 3, 12)),
        ]);

        assert_eq!(
            muscle_contributors(&muscle("Triceps"), &days, EXERCISES.as_slice()),
            vec![
                MuscleContribution {
                    exercise: "Bench Press".to_string(),
                    day: Day::Monday,
                    sets: Sets::new(4).unwrap(),
                    reps: Reps::new(8).unwrap(),
                    stimulus: Stimulus::Secondary,
                    contribution: 2.0,
                },
                MuscleContribution {
                    exercise: "Triceps Pushdown".to_string(),
                    day: Day::Tuesday,
                    sets: Sets::new(3).unwrap(),
                    reps: Reps::new(12).unwrap(),
                    stimulus: Stimulus::Primary,
                    contribution: 3.0,
                },
            ]
        );
    }

    #[test]
    fn test_strength_details() {
        let days = days([
            (Day::Monday, entry("Barbell Squat", 5, 5)),
            (Day::Wednesday, entry("Barbell Deadlift", 2, 3)),
            (Day::Wednesday, entry("Bench Press", 5, 5)),
            (Day::Friday, entry("Barbell Squat", 3, 3)),
            (Day::Friday, entry("Leg Curl", 3, 10)),
        ]);

        assert_eq!(
            strength_details("Barbell Squat", &days, EXERCISES.as_slice()),
            StrengthDetails {
                direct: vec![
                    DirectStrengthEntry {
                        day: Day::Monday,
                        sets: Sets::new(5).unwrap(),
                        reps: Reps::new(5).unwrap(),
                    },
                    DirectStrengthEntry {
                        day: Day::Friday,
                        sets: Sets::new(3).unwrap(),
                        reps: Reps::new(3).unwrap(),
                    },
                ],
                indirect: vec![IndirectStrengthEntry {
                    exercise: "Barbell Deadlift".to_string(),
                    day: Day::Wednesday,
                    sets: Sets::new(2).unwrap(),
                    reps: Reps::new(3).unwrap(),
                    shared_muscles: vec![
                        muscle("glutes"),
                        muscle("hamstrings"),
                        muscle("lower back"),
                        muscle("quadriceps"),
                    ],
                    contribution: 1.0,
                }],
            }
        );
        assert_eq!(
            strength_details("Unknown", &days, EXERCISES.as_slice()),
            StrengthDetails::default()
        );
    }
}
