use std::{collections::BTreeMap, slice::Iter};

use crate::{Day, Property, Reps, Sets, WeekDays};

/// The five fundamental barbell lifts.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Big5Category {
    Squat,
    Deadlift,
    BenchPress,
    OverheadPress,
    Row,
}

impl Big5Category {
    /// Lower-case substrings identifying an exercise of this category.
    #[must_use]
    pub fn patterns(self) -> &'static [&'static str] {
        match self {
            Big5Category::Squat => &["squat"],
            Big5Category::Deadlift => &["deadlift"],
            Big5Category::BenchPress => &["bench press"],
            Big5Category::OverheadPress => &["military press", "overhead press", "shoulder press"],
            Big5Category::Row => &["barbell row", "pendlay row", "t-bar row", "seal row"],
        }
    }

    #[must_use]
    pub fn matches(self, exercise: &str) -> bool {
        let name = exercise.to_lowercase();
        self.patterns().iter().any(|p| name.contains(p))
    }

    /// First category in canonical order whose pattern occurs in the name.
    #[must_use]
    pub fn of(exercise: &str) -> Option<Self> {
        Big5Category::iter().copied().find(|c| c.matches(exercise))
    }
}

impl Property for Big5Category {
    fn iter() -> Iter<'static, Big5Category> {
        static CATEGORIES: [Big5Category; 5] = [
            Big5Category::Squat,
            Big5Category::Deadlift,
            Big5Category::BenchPress,
            Big5Category::OverheadPress,
            Big5Category::Row,
        ];
        CATEGORIES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Big5Category::Squat => "Squat",
            Big5Category::Deadlift => "Deadlift",
            Big5Category::BenchPress => "Bench Press",
            Big5Category::OverheadPress => "Overhead Press",
            Big5Category::Row => "Row",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Big5Entry {
    pub exercise: String,
    pub day: Day,
    pub sets: Sets,
    pub reps: Reps,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Big5Coverage {
    pub covered: BTreeMap<Big5Category, Vec<Big5Entry>>,
    pub missing: Vec<Big5Category>,
}

impl Big5Coverage {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Only strength-range entries count towards coverage.
#[must_use]
pub fn big5_coverage(days: &WeekDays) -> Big5Coverage {
    let mut covered: BTreeMap<Big5Category, Vec<Big5Entry>> = BTreeMap::new();

    for (day, entry) in days.entries() {
        if !entry.reps.is_strength() {
            continue;
        }
        for category in Big5Category::iter().filter(|c| c.matches(&entry.exercise)) {
            covered.entry(*category).or_default().push(Big5Entry {
                exercise: entry.exercise.clone(),
                day,
                sets: entry.sets,
                reps: entry.reps,
            });
        }
    }

    let missing = Big5Category::iter()
        .copied()
        .filter(|c| !covered.contains_key(c))
        .collect();

    Big5Coverage { covered, missing }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::fixtures::{days, entry};

    #[rstest]
    #[case("Barbell Squat", Some(Big5Category::Squat))]
    #[case("Front squat", Some(Big5Category::Squat))]
    #[case("Romanian Deadlift", Some(Big5Category::Deadlift))]
    #[case("Incline Bench Press", Some(Big5Category::BenchPress))]
    #[case("Seated Dumbbell Shoulder Press", Some(Big5Category::OverheadPress))]
    #[case("Standing Military Press", Some(Big5Category::OverheadPress))]
    #[case("T-Bar Row", Some(Big5Category::Row))]
    #[case("Bent Over Barbell Row", Some(Big5Category::Row))]
    #[case("Dumbbell Row", None)]
    #[case("Leg Press", None)]
    fn test_big5_category_of(#[case] exercise: &str, #[case] expected: Option<Big5Category>) {
        assert_eq!(Big5Category::of(exercise), expected);
    }

    #[test]
    fn test_big5_coverage_squat_only() {
        let coverage = big5_coverage(&days([(Day::Monday, entry("Barbell Squat", 3, 5))]));

        assert_eq!(
            coverage.covered,
            BTreeMap::from([(
                Big5Category::Squat,
                vec![Big5Entry {
                    exercise: "Barbell Squat".to_string(),
                    day: Day::Monday,
                    sets: Sets::new(3).unwrap(),
                    reps: Reps::new(5).unwrap(),
                }]
            )])
        );
        assert_eq!(
            coverage.missing,
            vec![
                Big5Category::Deadlift,
                Big5Category::BenchPress,
                Big5Category::OverheadPress,
                Big5Category::Row,
            ]
        );
        assert!(!coverage.is_complete());
    }

    #[test]
    fn test_big5_coverage_ignores_hypertrophy_range() {
        let coverage = big5_coverage(&days([
            (Day::Monday, entry("Barbell Squat", 3, 8)),
            (Day::Tuesday, entry("Bench Press", 3, 6)),
        ]));

        assert_eq!(
            coverage.covered.keys().copied().collect::<Vec<_>>(),
            vec![Big5Category::BenchPress]
        );
        assert_eq!(coverage.missing.len(), 4);
    }

    #[test]
    fn test_big5_coverage_complete() {
        let coverage = big5_coverage(&days([
            (Day::Monday, entry("Barbell Squat", 3, 5)),
            (Day::Monday, entry("Bench Press", 3, 5)),
            (Day::Wednesday, entry("Barbell Deadlift", 1, 3)),
            (Day::Friday, entry("Standing Military Press", 3, 5)),
            (Day::Friday, entry("Pendlay Row", 3, 5)),
            (Day::Saturday, entry("Front Squat", 2, 3)),
        ]));

        assert!(coverage.is_complete());
        assert_eq!(coverage.covered[&Big5Category::Squat].len(), 2);
    }
}
