//! Load estimation with the Epley formula.

use std::slice::Iter;

use crate::{Property, Reps};

/// Estimated one-rep max for a set of `reps` with `weight`.
#[must_use]
pub fn one_rep_max_from_reps(weight: f64, reps: Reps) -> f64 {
    let reps = u32::from(reps);
    if reps == 1 {
        return weight;
    }
    weight * (1.0 + f64::from(reps) / 30.0)
}

/// Inverse of [`one_rep_max_from_reps`].
#[must_use]
pub fn weight_for_reps(one_rep_max: f64, reps: Reps) -> f64 {
    let reps = u32::from(reps);
    if reps == 1 {
        return one_rep_max;
    }
    one_rep_max / (1.0 + f64::from(reps) / 30.0)
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RepZone {
    Strength,
    Hypertrophy,
    Endurance,
}

impl RepZone {
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            RepZone::Strength => "Strength (1-5 reps)",
            RepZone::Hypertrophy => "Hypertrophy (6-12 reps)",
            RepZone::Endurance => "Muscular Endurance (15+ reps)",
        }
    }

    /// Percentage of the one-rep max per rep count.
    #[must_use]
    pub fn percentages(self) -> &'static [(u32, u32)] {
        match self {
            RepZone::Strength => &[(1, 100), (2, 95), (3, 93), (4, 90), (5, 87)],
            RepZone::Hypertrophy => &[(6, 85), (8, 80), (10, 75), (12, 70)],
            RepZone::Endurance => &[(15, 65), (20, 60)],
        }
    }
}

impl Property for RepZone {
    fn iter() -> Iter<'static, RepZone> {
        static ZONES: [RepZone; 3] = [RepZone::Strength, RepZone::Hypertrophy, RepZone::Endurance];
        ZONES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            RepZone::Strength => "Strength",
            RepZone::Hypertrophy => "Hypertrophy",
            RepZone::Endurance => "Endurance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadRecommendation {
    pub reps: u32,
    pub percentage: u32,
    pub weight: f64,
}

#[must_use]
pub fn load_recommendations(one_rep_max: f64) -> Vec<(RepZone, Vec<LoadRecommendation>)> {
    RepZone::iter()
        .map(|zone| {
            (
                *zone,
                zone.percentages()
                    .iter()
                    .map(|(reps, percentage)| LoadRecommendation {
                        reps: *reps,
                        percentage: *percentage,
                        weight: one_rep_max * f64::from(*percentage) / 100.0,
                    })
                    .collect(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn reps(value: u32) -> Reps {
        Reps::new(value).unwrap()
    }

    #[rstest]
    #[case(100.0, 1, 100.0)]
    #[case(100.0, 3, 110.0)]
    #[case(90.0, 10, 120.0)]
    #[case(60.0, 30, 120.0)]
    fn test_one_rep_max_from_reps(#[case] weight: f64, #[case] r: u32, #[case] expected: f64) {
        assert_approx_eq!(one_rep_max_from_reps(weight, reps(r)), expected);
    }

    #[rstest]
    #[case(100.0, 1, 100.0)]
    #[case(110.0, 3, 100.0)]
    #[case(120.0, 10, 90.0)]
    fn test_weight_for_reps(#[case] one_rep_max: f64, #[case] r: u32, #[case] expected: f64) {
        assert_approx_eq!(weight_for_reps(one_rep_max, reps(r)), expected);
    }

    #[rstest]
    fn test_round_trip(#[values(1, 2, 5, 8, 12, 20)] r: u32) {
        let weight = 82.5;
        assert_approx_eq!(
            weight_for_reps(one_rep_max_from_reps(weight, reps(r)), reps(r)),
            weight
        );
    }

    #[test]
    fn test_load_recommendations() {
        let recommendations = load_recommendations(200.0);

        assert_eq!(
            recommendations.iter().map(|(z, _)| *z).collect::<Vec<_>>(),
            vec![RepZone::Strength, RepZone::Hypertrophy, RepZone::Endurance]
        );
        assert_eq!(recommendations[0].1.len(), 5);
        assert_eq!(recommendations[1].1[1].reps, 8);
        assert_eq!(recommendations[1].1[1].percentage, 80);
        assert_approx_eq!(recommendations[1].1[1].weight, 160.0);
        assert_approx_eq!(recommendations[2].1[1].weight, 120.0);
    }
}
