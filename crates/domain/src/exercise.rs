use std::{
    collections::{BTreeSet, HashSet},
    slice::Iter,
};

use crate::Muscle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    /// The first primary muscle is the one used for region and movement buckets.
    pub primary_muscles: Vec<Muscle>,
    pub secondary_muscles: Vec<Muscle>,
    pub force: Option<Force>,
    pub level: Option<Level>,
    pub mechanic: Option<Mechanic>,
    pub equipment: Option<Equipment>,
    pub category: Option<Category>,
    pub instructions: Vec<String>,
    pub images: Vec<String>,
}

impl Exercise {
    /// Blank muscle names are dropped.
    #[must_use]
    pub fn new(name: &str, primary_muscles: &[&str], secondary_muscles: &[&str]) -> Self {
        Self {
            id: generate_exercise_id(name),
            name: name.to_string(),
            primary_muscles: primary_muscles.iter().filter_map(|m| Muscle::new(m)).collect(),
            secondary_muscles: secondary_muscles
                .iter()
                .filter_map(|m| Muscle::new(m))
                .collect(),
            force: None,
            level: None,
            mechanic: None,
            equipment: None,
            category: None,
            instructions: vec![],
            images: vec![],
        }
    }

    #[must_use]
    pub fn primary_muscle(&self) -> Option<&Muscle> {
        self.primary_muscles.first()
    }

    #[must_use]
    pub fn muscles(&self) -> BTreeSet<&Muscle> {
        self.primary_muscles
            .iter()
            .chain(self.secondary_muscles.iter())
            .collect()
    }

    /// Primary muscles first, followed by secondary muscles, in catalog order.
    pub fn muscle_stimulus(&self) -> impl Iterator<Item = (&Muscle, Stimulus)> {
        self.primary_muscles
            .iter()
            .map(|m| (m, Stimulus::Primary))
            .chain(
                self.secondary_muscles
                    .iter()
                    .map(|m| (m, Stimulus::Secondary)),
            )
    }

    #[must_use]
    pub fn targets(&self, muscle: &Muscle) -> bool {
        self.primary_muscles.contains(muscle)
    }
}

/// Keeps ASCII letters, digits and whitespace, then replaces spaces by underscores.
#[must_use]
pub fn generate_exercise_id(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .replace(' ', "_")
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Stimulus {
    Primary,
    Secondary,
}

impl Stimulus {
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Stimulus::Primary => 1.0,
            Stimulus::Secondary => 0.5,
        }
    }
}

impl Property for Stimulus {
    fn iter() -> Iter<'static, Stimulus> {
        static STIMULUS: [Stimulus; 2] = [Stimulus::Primary, Stimulus::Secondary];
        STIMULUS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Stimulus::Primary => "Primary",
            Stimulus::Secondary => "Secondary",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Force {
    Push,
    Pull,
    Static,
}

impl Property for Force {
    fn iter() -> Iter<'static, Force> {
        static FORCE: [Force; 3] = [Force::Push, Force::Pull, Force::Static];
        FORCE.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Force::Push => "Push",
            Force::Pull => "Pull",
            Force::Static => "Static",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mechanic {
    Compound,
    Isolation,
}

impl Property for Mechanic {
    fn iter() -> Iter<'static, Mechanic> {
        static MECHANIC: [Mechanic; 2] = [Mechanic::Compound, Mechanic::Isolation];
        MECHANIC.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Mechanic::Compound => "Compound",
            Mechanic::Isolation => "Isolation",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Level {
    Beginner,
    Intermediate,
    Expert,
}

impl Property for Level {
    fn iter() -> Iter<'static, Level> {
        static LEVEL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Expert];
        LEVEL.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Expert => "Expert",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Equipment {
    BodyOnly,
    Machine,
    Other,
    FoamRoll,
    Kettlebells,
    Dumbbell,
    Cable,
    Barbell,
    Bands,
    MedicineBall,
    ExerciseBall,
    EzCurlBar,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 12] = [
            Equipment::Barbell,
            Equipment::Dumbbell,
            Equipment::Cable,
            Equipment::Machine,
            Equipment::Kettlebells,
            Equipment::Bands,
            Equipment::MedicineBall,
            Equipment::ExerciseBall,
            Equipment::EzCurlBar,
            Equipment::FoamRoll,
            Equipment::BodyOnly,
            Equipment::Other,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::BodyOnly => "Body Only",
            Equipment::Machine => "Machine",
            Equipment::Other => "Other",
            Equipment::FoamRoll => "Foam Roll",
            Equipment::Kettlebells => "Kettlebells",
            Equipment::Dumbbell => "Dumbbell",
            Equipment::Cable => "Cable",
            Equipment::Barbell => "Barbell",
            Equipment::Bands => "Bands",
            Equipment::MedicineBall => "Medicine Ball",
            Equipment::ExerciseBall => "Exercise Ball",
            Equipment::EzCurlBar => "E-Z Curl Bar",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
    Strength,
    Powerlifting,
    OlympicWeightlifting,
    Strongman,
    Plyometrics,
    Stretching,
    Cardio,
}

impl Property for Category {
    fn iter() -> Iter<'static, Category> {
        static CATEGORY: [Category; 7] = [
            Category::Strength,
            Category::Powerlifting,
            Category::OlympicWeightlifting,
            Category::Strongman,
            Category::Plyometrics,
            Category::Stretching,
            Category::Cardio,
        ];
        CATEGORY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Category::Strength => "Strength",
            Category::Powerlifting => "Powerlifting",
            Category::OlympicWeightlifting => "Olympic Weightlifting",
            Category::Strongman => "Strongman",
            Category::Plyometrics => "Plyometrics",
            Category::Stretching => "Stretching",
            Category::Cardio => "Cardio",
        }
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct ExerciseFilter {
    pub name: String,
    pub muscles: HashSet<Muscle>,
    pub force: HashSet<Force>,
    pub mechanic: HashSet<Mechanic>,
    pub level: HashSet<Level>,
    pub equipment: HashSet<Equipment>,
    pub category: HashSet<Category>,
}

impl ExerciseFilter {
    #[must_use]
    pub fn exercises<'a>(
        &self,
        exercises: impl Iterator<Item = &'a Exercise>,
    ) -> Vec<&'a Exercise> {
        let name = self.name.to_lowercase();
        let name = name.trim();
        exercises
            .filter(|e| {
                e.name.to_lowercase().contains(name)
                    && (self.muscles.is_empty() || {
                        let muscles = e.muscles();
                        self.muscles.iter().all(|m| muscles.contains(m))
                    })
                    && matches(&self.force, e.force)
                    && matches(&self.mechanic, e.mechanic)
                    && matches(&self.level, e.level)
                    && matches(&self.equipment, e.equipment)
                    && matches(&self.category, e.category)
            })
            .collect()
    }
}

fn matches<P: Property + Eq + std::hash::Hash>(selected: &HashSet<P>, value: Option<P>) -> bool {
    selected.is_empty() || value.is_some_and(|v| selected.contains(&v))
}

pub trait Property: Clone + Copy + Sized + 'static {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
    /// Case-insensitive lookup by display name.
    fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }
}
