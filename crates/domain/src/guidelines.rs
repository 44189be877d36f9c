use std::slice::Iter;

use crate::{Property, TargetRange, VolumeTargets};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum VolumeStatus {
    BelowMinimum,
    BelowPractical,
    Optimal,
    AbovePractical,
    AboveMaximum,
}

impl VolumeStatus {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            VolumeStatus::BelowMinimum => "below_minimum",
            VolumeStatus::BelowPractical => "below_practical",
            VolumeStatus::Optimal => "optimal",
            VolumeStatus::AbovePractical => "above_practical",
            VolumeStatus::AboveMaximum => "above_maximum",
        }
    }

    #[must_use]
    pub fn is_below_practical(self) -> bool {
        matches!(
            self,
            VolumeStatus::BelowMinimum | VolumeStatus::BelowPractical
        )
    }
}

impl Property for VolumeStatus {
    fn iter() -> Iter<'static, VolumeStatus> {
        static STATUS: [VolumeStatus; 5] = [
            VolumeStatus::BelowMinimum,
            VolumeStatus::BelowPractical,
            VolumeStatus::Optimal,
            VolumeStatus::AbovePractical,
            VolumeStatus::AboveMaximum,
        ];
        STATUS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            VolumeStatus::BelowMinimum => "Below minimum",
            VolumeStatus::BelowPractical => "Below target",
            VolumeStatus::Optimal => "Optimal",
            VolumeStatus::AbovePractical => "Above target",
            VolumeStatus::AboveMaximum => "Above maximum",
        }
    }
}

/// Absolute limits and the practical target range in between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeRange {
    pub minimum: f64,
    pub maximum: f64,
    pub practical_low: f64,
    pub practical_high: f64,
}

impl VolumeRange {
    /// The absolute limits are checked before the practical bounds, both of
    /// which are inclusive.
    #[must_use]
    pub fn classify(&self, value: f64) -> VolumeStatus {
        if value < self.minimum {
            VolumeStatus::BelowMinimum
        } else if value < self.practical_low {
            VolumeStatus::BelowPractical
        } else if value > self.maximum {
            VolumeStatus::AboveMaximum
        } else if value > self.practical_high {
            VolumeStatus::AbovePractical
        } else {
            VolumeStatus::Optimal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Guidelines {
    /// Fractional sets per muscle per week.
    pub hypertrophy: VolumeRange,
    /// Fractional sets per muscle per session.
    pub per_session_max: f64,
    /// Direct sets per lift per week.
    pub strength: VolumeRange,
    pub strength_frequency: (usize, usize),
}

impl Guidelines {
    pub const HYPERTROPHY_MINIMUM: f64 = 4.0;
    pub const HYPERTROPHY_MAXIMUM: f64 = 30.0;
    pub const PER_SESSION_MAXIMUM: f64 = 10.0;
    pub const STRENGTH_MINIMUM: f64 = 1.0;
    pub const STRENGTH_MAXIMUM: f64 = 5.0;
    pub const STRENGTH_FREQUENCY: (usize, usize) = (2, 6);

    #[must_use]
    pub fn new(targets: &VolumeTargets) -> Self {
        Self {
            hypertrophy: VolumeRange {
                minimum: Self::HYPERTROPHY_MINIMUM,
                maximum: Self::HYPERTROPHY_MAXIMUM,
                practical_low: f64::from(targets.hypertrophy.low),
                practical_high: f64::from(targets.hypertrophy.high),
            },
            per_session_max: Self::PER_SESSION_MAXIMUM,
            strength: VolumeRange {
                minimum: Self::STRENGTH_MINIMUM,
                maximum: Self::STRENGTH_MAXIMUM,
                practical_low: f64::from(targets.strength.low),
                practical_high: f64::from(targets.strength.high),
            },
            strength_frequency: Self::STRENGTH_FREQUENCY,
        }
    }
}

impl Default for Guidelines {
    /// General recommendations independent of any user profile.
    fn default() -> Self {
        Self::new(&VolumeTargets {
            hypertrophy: TargetRange { low: 10, high: 20 },
            strength: TargetRange { low: 3, high: 5 },
        })
    }
}

/// Recommended sessions per week for a weekly set count of a muscle.
///
/// Counts between two table rows, like 10.5, belong to the higher row.
#[must_use]
pub fn recommended_frequency(weekly_sets: f64) -> (u32, u32) {
    if weekly_sets < 4.0 {
        (1, 1)
    } else if weekly_sets <= 10.0 {
        (1, 2)
    } else if weekly_sets <= 20.0 {
        (2, 3)
    } else {
        (3, 4)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::UserProfile;

    #[rstest]
    #[case::zero(0.0, VolumeStatus::BelowMinimum)]
    #[case::just_below_minimum(3.5, VolumeStatus::BelowMinimum)]
    #[case::minimum(4.0, VolumeStatus::BelowPractical)]
    #[case::below_practical_low(12.0, VolumeStatus::BelowPractical)]
    #[case::practical_low(13.0, VolumeStatus::Optimal)]
    #[case::practical_high(16.0, VolumeStatus::Optimal)]
    #[case::above_practical_high(16.5, VolumeStatus::AbovePractical)]
    #[case::maximum(30.0, VolumeStatus::AbovePractical)]
    #[case::above_maximum(31.0, VolumeStatus::AboveMaximum)]
    fn test_volume_range_classify(#[case] value: f64, #[case] expected: VolumeStatus) {
        let guidelines = Guidelines::new(&UserProfile::default().volume_targets());
        assert_eq!(guidelines.hypertrophy.classify(value), expected);
    }

    #[rstest]
    #[case(0.0, VolumeStatus::BelowMinimum)]
    #[case(1.0, VolumeStatus::BelowPractical)]
    #[case(3.0, VolumeStatus::Optimal)]
    #[case(5.0, VolumeStatus::Optimal)]
    #[case(6.0, VolumeStatus::AboveMaximum)]
    fn test_strength_classify(#[case] value: f64, #[case] expected: VolumeStatus) {
        assert_eq!(Guidelines::default().strength.classify(value), expected);
    }

    #[test]
    fn test_guidelines_default() {
        let guidelines = Guidelines::default();
        assert_eq!(guidelines.hypertrophy.practical_low, 10.0);
        assert_eq!(guidelines.hypertrophy.practical_high, 20.0);
        assert_eq!(guidelines.per_session_max, 10.0);
        assert_eq!(guidelines.strength.minimum, 1.0);
        assert_eq!(guidelines.strength_frequency, (2, 6));
    }

    #[rstest]
    #[case(0.0, (1, 1))]
    #[case(3.5, (1, 1))]
    #[case(4.0, (1, 2))]
    #[case(10.0, (1, 2))]
    #[case(10.5, (2, 3))]
    #[case(20.0, (2, 3))]
    #[case(20.5, (3, 4))]
    #[case(30.0, (3, 4))]
    #[case(45.0, (3, 4))]
    fn test_recommended_frequency(#[case] weekly_sets: f64, #[case] expected: (u32, u32)) {
        assert_eq!(recommended_frequency(weekly_sets), expected);
    }

    #[test]
    fn test_volume_status_key() {
        assert_eq!(
            VolumeStatus::iter().map(|s| s.key()).collect::<Vec<_>>(),
            vec![
                "below_minimum",
                "below_practical",
                "optimal",
                "above_practical",
                "above_maximum"
            ]
        );
    }
}
