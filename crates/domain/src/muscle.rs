use std::{fmt, slice::Iter};

use derive_more::AsRef;

use crate::Property;

/// Muscle groups known to the exercise database.
pub const MUSCLE_GROUPS: [&str; 21] = [
    "abdominals",
    "abductors",
    "adductors",
    "biceps",
    "calves",
    "chest",
    "forearms",
    "front deltoids",
    "glutes",
    "hamstrings",
    "lats",
    "lower back",
    "middle back",
    "neck",
    "quadriceps",
    "rear deltoids",
    "rotator cuff",
    "shoulders",
    "side deltoids",
    "traps",
    "triceps",
];

/// A muscle name in canonical form.
///
/// Catalog sources disagree on casing ("Chest", "chest", "front Deltoids"), so
/// every muscle name passes through [`normalize_muscle_name`] when it enters the
/// engine. The canonical form is lower case with single spaces; title case is
/// only produced by the `Display` implementation.
#[derive(AsRef, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[as_ref(str)]
pub struct Muscle(String);

impl Muscle {
    /// Returns `None` for names that are blank after normalization.
    #[must_use]
    pub fn new(name: &str) -> Option<Self> {
        let normalized = normalize_muscle_name(name);

        if normalized.is_empty() {
            return None;
        }

        Some(Self(normalized))
    }

    #[must_use]
    pub fn region(&self) -> Option<BodyRegion> {
        BodyRegion::of(self)
    }

    #[must_use]
    pub fn movement(&self) -> Option<MovementPattern> {
        MovementPattern::of(self)
    }

    #[must_use]
    pub fn is_known(&self) -> bool {
        MUSCLE_GROUPS.contains(&self.0.as_str())
    }
}

impl fmt::Display for Muscle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", title_case(&self.0))
    }
}

#[must_use]
pub fn normalize_muscle_name(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(value: &str) -> String {
    value
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum BodyRegion {
    Upper,
    Lower,
    Core,
}

impl BodyRegion {
    #[must_use]
    pub fn of(muscle: &Muscle) -> Option<Self> {
        match muscle.as_ref() {
            "chest" | "front deltoids" | "side deltoids" | "rear deltoids" | "rotator cuff"
            | "triceps" | "biceps" | "lats" | "traps" | "middle back" | "forearms" => {
                Some(BodyRegion::Upper)
            }
            "quadriceps" | "hamstrings" | "glutes" | "calves" | "adductors" | "abductors" => {
                Some(BodyRegion::Lower)
            }
            "abdominals" | "lower back" => Some(BodyRegion::Core),
            _ => None,
        }
    }
}

impl Property for BodyRegion {
    fn iter() -> Iter<'static, BodyRegion> {
        static REGIONS: [BodyRegion; 3] = [BodyRegion::Upper, BodyRegion::Lower, BodyRegion::Core];
        REGIONS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            BodyRegion::Upper => "Upper",
            BodyRegion::Lower => "Lower",
            BodyRegion::Core => "Core",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MovementPattern {
    Push,
    Pull,
    Legs,
}

impl MovementPattern {
    #[must_use]
    pub fn of(muscle: &Muscle) -> Option<Self> {
        match muscle.as_ref() {
            "chest" | "front deltoids" | "side deltoids" | "triceps" => Some(MovementPattern::Push),
            "lats" | "middle back" | "rear deltoids" | "biceps" | "traps" | "forearms" => {
                Some(MovementPattern::Pull)
            }
            "quadriceps" | "hamstrings" | "glutes" | "calves" | "adductors" | "abductors" => {
                Some(MovementPattern::Legs)
            }
            _ => None,
        }
    }
}

impl Property for MovementPattern {
    fn iter() -> Iter<'static, MovementPattern> {
        static PATTERNS: [MovementPattern; 3] = [
            MovementPattern::Push,
            MovementPattern::Pull,
            MovementPattern::Legs,
        ];
        PATTERNS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MovementPattern::Push => "Push",
            MovementPattern::Pull => "Pull",
            MovementPattern::Legs => "Legs",
        }
    }
}
