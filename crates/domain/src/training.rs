use std::slice::Iter;

use derive_more::{Display, Into};

use crate::Property;

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sets(u32);

impl Sets {
    pub const MAX: u32 = 999;

    pub fn new(value: u32) -> Result<Self, SetsError> {
        if !(1..=Self::MAX).contains(&value) {
            return Err(SetsError::OutOfRange);
        }

        Ok(Self(value))
    }

    /// Never scales below one set.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn scale(self, modifier: f64) -> Self {
        let scaled = (f64::from(self.0) * modifier).floor();

        if scaled.is_nan() {
            return Self(1);
        }

        Self(scaled.clamp(1.0, f64::from(Self::MAX)) as u32)
    }
}

impl From<Sets> for f64 {
    fn from(value: Sets) -> Self {
        f64::from(value.0)
    }
}

impl TryFrom<&str> for Sets {
    type Error = SetsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Sets::new(parsed_value),
            Err(_) => Err(SetsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SetsError {
    #[error("Sets must be in the range 1 to 999")]
    OutOfRange,
    #[error("Sets must be an integer")]
    ParseError,
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(1..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn goal(self) -> TrainingGoal {
        if self.0 <= TrainingGoal::STRENGTH_MAX_REPS {
            TrainingGoal::Strength
        } else {
            TrainingGoal::Hypertrophy
        }
    }

    #[must_use]
    pub fn is_strength(self) -> bool {
        self.goal() == TrainingGoal::Strength
    }

    /// Reps in reserve to aim for at this rep count.
    #[must_use]
    pub fn goal_rir(self) -> &'static str {
        match self.0 {
            0..=6 => "0-4",
            7..=8 => "0-3",
            9..=12 => "0-2",
            _ => "0-1",
        }
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 1 to 999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum TrainingGoal {
    Strength,
    Hypertrophy,
}

impl TrainingGoal {
    pub const STRENGTH_MAX_REPS: u32 = 6;
}

impl Property for TrainingGoal {
    fn iter() -> Iter<'static, TrainingGoal> {
        static GOALS: [TrainingGoal; 2] = [TrainingGoal::Strength, TrainingGoal::Hypertrophy];
        GOALS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            TrainingGoal::Strength => "Strength",
            TrainingGoal::Hypertrophy => "Hypertrophy",
        }
    }
}
