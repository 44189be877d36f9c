use std::{collections::BTreeSet, slice::Iter};

use crate::{Big5Category, ExerciseCatalog, Muscle, Property};

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum TrainingStatus {
    Novice,
    #[default]
    Intermediate,
    Advanced,
}

impl TrainingStatus {
    #[must_use]
    pub fn volume_multiplier(self) -> f64 {
        match self {
            TrainingStatus::Novice => 0.8,
            TrainingStatus::Intermediate => 1.0,
            TrainingStatus::Advanced => 1.2,
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            TrainingStatus::Novice => "Less than 1 year of consistent training",
            TrainingStatus::Intermediate => "1-3 years of consistent training",
            TrainingStatus::Advanced => "3+ years of consistent training",
        }
    }
}

impl Property for TrainingStatus {
    fn iter() -> Iter<'static, TrainingStatus> {
        static STATUS: [TrainingStatus; 3] = [
            TrainingStatus::Novice,
            TrainingStatus::Intermediate,
            TrainingStatus::Advanced,
        ];
        STATUS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            TrainingStatus::Novice => "Novice",
            TrainingStatus::Intermediate => "Intermediate",
            TrainingStatus::Advanced => "Advanced",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum VolumeTier {
    Minimal,
    Low,
    #[default]
    Medium,
    High,
    VeryHigh,
}

impl VolumeTier {
    /// Weekly hard sets per muscle.
    #[must_use]
    pub fn sets_range(self) -> (u32, u32) {
        match self {
            VolumeTier::Minimal => (4, 8),
            VolumeTier::Low => (9, 12),
            VolumeTier::Medium => (13, 16),
            VolumeTier::High => (17, 20),
            VolumeTier::VeryHigh => (21, 30),
        }
    }

    /// Sessions per muscle per week.
    #[must_use]
    pub fn frequency_range(self) -> (u32, u32) {
        match self {
            VolumeTier::Minimal | VolumeTier::Low => (1, 2),
            VolumeTier::Medium | VolumeTier::High => (2, 3),
            VolumeTier::VeryHigh => (3, 4),
        }
    }
}

impl Property for VolumeTier {
    fn iter() -> Iter<'static, VolumeTier> {
        static TIERS: [VolumeTier; 5] = [
            VolumeTier::Minimal,
            VolumeTier::Low,
            VolumeTier::Medium,
            VolumeTier::High,
            VolumeTier::VeryHigh,
        ];
        TIERS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            VolumeTier::Minimal => "Minimal",
            VolumeTier::Low => "Low",
            VolumeTier::Medium => "Medium",
            VolumeTier::High => "High",
            VolumeTier::VeryHigh => "Very High",
        }
    }
}

/// Which lifts the strength analysis reports on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StrengthTracking {
    /// Lifts matching one of the Big-5 patterns.
    #[default]
    Compound,
    All,
    /// An empty selection tracks everything.
    Custom(BTreeSet<String>),
}

impl StrengthTracking {
    #[must_use]
    pub fn mode(&self) -> &'static str {
        match self {
            StrengthTracking::Compound => "compound",
            StrengthTracking::All => "all",
            StrengthTracking::Custom(_) => "custom",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MuscleTracking {
    #[default]
    All,
    Selected(BTreeSet<Muscle>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub training_status: TrainingStatus,
    pub volume_tier: VolumeTier,
    pub use_custom_targets: bool,
    pub custom_hypertrophy_target: u32,
    pub custom_strength_target: u32,
    pub hypertrophy_tracking: MuscleTracking,
    pub strength_tracking: StrengthTracking,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            training_status: TrainingStatus::default(),
            volume_tier: VolumeTier::default(),
            use_custom_targets: false,
            custom_hypertrophy_target: 15,
            custom_strength_target: 4,
            hypertrophy_tracking: MuscleTracking::default(),
            strength_tracking: StrengthTracking::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetRange {
    pub low: u32,
    pub high: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeTargets {
    pub hypertrophy: TargetRange,
    pub strength: TargetRange,
}

impl UserProfile {
    pub const HYPERTROPHY_FLOOR: u32 = 4;
    pub const HYPERTROPHY_CEILING: u32 = 30;
    pub const STRENGTH_TARGETS: TargetRange = TargetRange { low: 3, high: 5 };

    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn volume_targets(&self) -> VolumeTargets {
        if self.use_custom_targets {
            return VolumeTargets {
                hypertrophy: TargetRange {
                    low: self.custom_hypertrophy_target,
                    high: self.custom_hypertrophy_target,
                },
                strength: TargetRange {
                    low: self.custom_strength_target,
                    high: self.custom_strength_target,
                },
            };
        }

        let (low, high) = self.volume_tier.sets_range();
        let multiplier = self.training_status.volume_multiplier();
        let scale = |sets: u32| (f64::from(sets) * multiplier).floor() as u32;

        VolumeTargets {
            hypertrophy: TargetRange {
                low: scale(low).max(Self::HYPERTROPHY_FLOOR),
                high: scale(high).min(Self::HYPERTROPHY_CEILING),
            },
            strength: Self::STRENGTH_TARGETS,
        }
    }

    #[must_use]
    pub fn tracks_muscle(&self, muscle: &Muscle) -> bool {
        match &self.hypertrophy_tracking {
            MuscleTracking::All => true,
            MuscleTracking::Selected(muscles) => muscles.contains(muscle),
        }
    }

    /// Returns `None` if every lift is tracked.
    #[must_use]
    pub fn tracked_lifts<C: ExerciseCatalog + ?Sized>(
        &self,
        catalog: &C,
    ) -> Option<BTreeSet<String>> {
        match &self.strength_tracking {
            StrengthTracking::Compound => Some(
                catalog
                    .exercises()
                    .iter()
                    .filter(|e| Big5Category::of(&e.name).is_some())
                    .map(|e| e.name.clone())
                    .collect(),
            ),
            StrengthTracking::All => None,
            StrengthTracking::Custom(names) if names.is_empty() => None,
            StrengthTracking::Custom(names) => Some(names.clone()),
        }
    }
}
