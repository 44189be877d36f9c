use std::{collections::BTreeMap, slice::Iter};

use crate::{Property, Reps, Sets};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl Property for Day {
    fn iter() -> Iter<'static, Day> {
        static DAYS: [Day; 7] = [
            Day::Monday,
            Day::Tuesday,
            Day::Wednesday,
            Day::Thursday,
            Day::Friday,
            Day::Saturday,
            Day::Sunday,
        ];
        DAYS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl TryFrom<&str> for Day {
    type Error = DayError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Day::from_name(value).ok_or_else(|| DayError::Unknown(value.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DayError {
    #[error("Unknown day \"{0}\"")]
    Unknown(String),
}

/// One planned exercise. The name does not have to exist in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseEntry {
    pub exercise: String,
    pub sets: Sets,
    pub reps: Reps,
}

impl ExerciseEntry {
    #[must_use]
    pub fn new(exercise: &str, sets: Sets, reps: Reps) -> Self {
        Self {
            exercise: exercise.to_string(),
            sets,
            reps,
        }
    }
}

/// The entries of all seven days of a week, rest days being empty.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WeekDays([Vec<ExerciseEntry>; 7]);

impl WeekDays {
    #[must_use]
    pub fn day(&self, day: Day) -> &[ExerciseEntry] {
        &self.0[day.index()]
    }

    pub fn day_mut(&mut self, day: Day) -> &mut Vec<ExerciseEntry> {
        &mut self.0[day.index()]
    }

    /// All days in week order, including rest days.
    pub fn iter(&self) -> impl Iterator<Item = (Day, &[ExerciseEntry])> {
        Day::iter().map(|day| (*day, self.day(*day)))
    }

    pub fn entries(&self) -> impl Iterator<Item = (Day, &ExerciseEntry)> {
        self.iter()
            .flat_map(|(day, entries)| entries.iter().map(move |e| (day, e)))
    }

    pub fn scale_sets(&mut self, modifier: f64) {
        for entries in &mut self.0 {
            for entry in entries {
                entry.sets = entry.sets.scale(modifier);
            }
        }
    }

    #[must_use]
    pub fn training_days(&self) -> Vec<Day> {
        self.iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(day, _)| day)
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Vec::is_empty)
    }
}

impl From<BTreeMap<Day, Vec<ExerciseEntry>>> for WeekDays {
    fn from(value: BTreeMap<Day, Vec<ExerciseEntry>>) -> Self {
        let mut days = WeekDays::default();
        for (day, entries) in value {
            *days.day_mut(day) = entries;
        }
        days
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum WeekType {
    #[default]
    Training,
    Deload,
    Testing,
    Intensification,
    Volume,
}

impl WeekType {
    /// Identifier used in documents.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            WeekType::Training => "training",
            WeekType::Deload => "deload",
            WeekType::Testing => "testing",
            WeekType::Intensification => "intensification",
            WeekType::Volume => "volume",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            WeekType::Training => "Normal training week",
            WeekType::Deload => "Reduced volume for recovery",
            WeekType::Testing => "Max testing week",
            WeekType::Intensification => "Lower volume, higher intensity",
            WeekType::Volume => "Higher volume accumulation",
        }
    }

    #[must_use]
    pub fn volume_modifier(self) -> f64 {
        match self {
            WeekType::Training => 1.0,
            WeekType::Deload => 0.5,
            WeekType::Testing => 0.3,
            WeekType::Intensification => 0.8,
            WeekType::Volume => 1.2,
        }
    }

    #[must_use]
    pub fn intensity_modifier(self) -> f64 {
        match self {
            WeekType::Training | WeekType::Testing => 1.0,
            WeekType::Deload | WeekType::Volume => 0.9,
            WeekType::Intensification => 1.1,
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        WeekType::iter().copied().find(|t| t.key() == key)
    }
}

impl Property for WeekType {
    fn iter() -> Iter<'static, WeekType> {
        static WEEK_TYPES: [WeekType; 5] = [
            WeekType::Training,
            WeekType::Deload,
            WeekType::Testing,
            WeekType::Intensification,
            WeekType::Volume,
        ];
        WEEK_TYPES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            WeekType::Training => "Training",
            WeekType::Deload => "Deload",
            WeekType::Testing => "1RM Testing",
            WeekType::Intensification => "Intensification",
            WeekType::Volume => "Volume",
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Week {
    pub name: String,
    pub week_type: WeekType,
    pub days: WeekDays,
    pub notes: String,
}

impl Week {
    #[must_use]
    pub fn new(name: &str, week_type: WeekType) -> Self {
        Self {
            name: name.to_string(),
            week_type,
            days: WeekDays::default(),
            notes: String::new(),
        }
    }
}
