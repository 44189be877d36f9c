use std::{collections::BTreeSet, fmt};

use crate::{
    Big5Category, Big5Coverage, Day, DayLoad, ExerciseCatalog, Guidelines, Muscle, Property,
    StrengthTracking, UserProfile, VolumeStatus, WeekDays, big5_coverage, day_loads,
    hypertrophy_volume, strength_volume,
};

/// A noteworthy deviation from the guidelines.
#[derive(Debug, Clone, PartialEq)]
pub enum Finding {
    BelowMinimum {
        muscle: Muscle,
        total: f64,
        minimum: f64,
    },
    AboveMaximum {
        muscle: Muscle,
        total: f64,
        maximum: f64,
    },
    SessionTooLarge {
        muscle: Muscle,
        max_session: f64,
        per_session_max: f64,
    },
    LiftAboveMaximum {
        exercise: String,
        direct_sets: u32,
        maximum: f64,
    },
    LowFrequency {
        exercise: String,
        days_trained: usize,
        minimum: usize,
        maximum: usize,
    },
    MissingBig5(Vec<Big5Category>),
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::BelowMinimum {
                muscle,
                total,
                minimum,
            } => write!(f, "{muscle}: {total:.1} sets < minimum ({minimum})"),
            Finding::AboveMaximum {
                muscle,
                total,
                maximum,
            } => write!(f, "{muscle}: {total:.1} sets > maximum ({maximum})"),
            Finding::SessionTooLarge {
                muscle,
                max_session,
                per_session_max,
            } => write!(
                f,
                "{muscle}: {max_session:.1} sets in one session > recommended max ({per_session_max}). Consider splitting."
            ),
            Finding::LiftAboveMaximum {
                exercise,
                direct_sets,
                maximum,
            } => write!(
                f,
                "{exercise}: {direct_sets} direct sets > short-term max ({maximum})"
            ),
            Finding::LowFrequency {
                exercise,
                days_trained,
                minimum,
                maximum,
            } => write!(
                f,
                "{exercise}: trained {days_trained}x/week < recommended ({minimum}-{maximum}x)"
            ),
            Finding::MissingBig5(categories) => write!(
                f,
                "Missing Big 5 categories: {}. Consider adding exercises for balanced strength development.",
                categories
                    .iter()
                    .map(|c| c.name())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MuscleAnalysis {
    pub muscle: Muscle,
    pub total: f64,
    pub status: VolumeStatus,
    pub per_day: Vec<(Day, f64)>,
    pub max_session: f64,
    pub session_warning: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiftAnalysis {
    pub exercise: String,
    pub direct_sets: u32,
    pub total_fractional: f64,
    pub days_trained: usize,
    pub status: VolumeStatus,
    pub per_day: Vec<(Day, f64)>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HypertrophyAnalysis {
    pub muscles: Vec<MuscleAnalysis>,
    pub issues: Vec<Finding>,
    pub suggestions: Vec<Finding>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrengthAnalysis {
    pub lifts: Vec<LiftAnalysis>,
    pub issues: Vec<Finding>,
    pub suggestions: Vec<Finding>,
    /// Only present when compound lifts are tracked.
    pub big5: Option<Big5Coverage>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyAnalysis {
    pub days: Vec<DayLoad>,
    pub training_days: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub guidelines: Guidelines,
    pub hypertrophy: HypertrophyAnalysis,
    pub strength: StrengthAnalysis,
    pub frequency: FrequencyAnalysis,
    pub muscle_suggestions: Vec<MuscleSuggestion>,
    pub lift_suggestions: Vec<LiftSuggestion>,
}

/// Compares the volume of a week against the guidelines of a profile.
#[must_use]
pub fn analyze_week<C: ExerciseCatalog + ?Sized>(
    days: &WeekDays,
    catalog: &C,
    profile: &UserProfile,
) -> Analysis {
    let guidelines = Guidelines::new(&profile.volume_targets());
    let hypertrophy = analyze_hypertrophy(days, catalog, profile, &guidelines);
    let strength = analyze_strength(days, catalog, profile, &guidelines);
    let loads = day_loads(days);
    let frequency = FrequencyAnalysis {
        training_days: loads.len(),
        days: loads,
    };
    let muscle_suggestions = muscle_suggestions(&hypertrophy, catalog, &guidelines);
    let lift_suggestions = lift_suggestions(&strength, &guidelines);

    Analysis {
        guidelines,
        hypertrophy,
        strength,
        frequency,
        muscle_suggestions,
        lift_suggestions,
    }
}

fn analyze_hypertrophy<C: ExerciseCatalog + ?Sized>(
    days: &WeekDays,
    catalog: &C,
    profile: &UserProfile,
    guidelines: &Guidelines,
) -> HypertrophyAnalysis {
    let mut volume = hypertrophy_volume(days, catalog);
    volume.retain(|muscle| profile.tracks_muscle(muscle));

    let mut analysis = HypertrophyAnalysis::default();
    let range = &guidelines.hypertrophy;

    for (muscle, total) in volume.weekly_totals() {
        let status = range.classify(total);
        match status {
            VolumeStatus::BelowMinimum => analysis.issues.push(Finding::BelowMinimum {
                muscle: muscle.clone(),
                total,
                minimum: range.minimum,
            }),
            VolumeStatus::AboveMaximum => analysis.issues.push(Finding::AboveMaximum {
                muscle: muscle.clone(),
                total,
                maximum: range.maximum,
            }),
            VolumeStatus::BelowPractical | VolumeStatus::Optimal | VolumeStatus::AbovePractical => {
            }
        }

        let max_session = volume.max_session(&muscle);
        let session_warning = max_session > guidelines.per_session_max;
        if session_warning {
            analysis.suggestions.push(Finding::SessionTooLarge {
                muscle: muscle.clone(),
                max_session,
                per_session_max: guidelines.per_session_max,
            });
        }

        analysis.muscles.push(MuscleAnalysis {
            per_day: volume.per_day(&muscle),
            muscle,
            total,
            status,
            max_session,
            session_warning,
        });
    }

    analysis
}

fn analyze_strength<C: ExerciseCatalog + ?Sized>(
    days: &WeekDays,
    catalog: &C,
    profile: &UserProfile,
    guidelines: &Guidelines,
) -> StrengthAnalysis {
    let volume = strength_volume(days, catalog);
    let tracked = profile.tracked_lifts(catalog);
    let scheduled = days
        .entries()
        .filter(|(_, e)| e.reps.is_strength())
        .map(|(_, e)| e.exercise.clone())
        .filter(|name| tracked.as_ref().is_none_or(|t| t.contains(name)))
        .collect::<BTreeSet<_>>();

    let mut analysis = StrengthAnalysis::default();
    let range = &guidelines.strength;
    let (frequency_min, frequency_max) = guidelines.strength_frequency;

    for exercise in scheduled {
        let direct_sets = days
            .entries()
            .filter(|(_, e)| e.exercise == exercise && e.reps.is_strength())
            .map(|(_, e)| u32::from(e.sets))
            .sum::<u32>();
        let days_trained = volume.days_trained(&exercise);
        let status = range.classify(f64::from(direct_sets));

        if status == VolumeStatus::AboveMaximum {
            analysis.issues.push(Finding::LiftAboveMaximum {
                exercise: exercise.clone(),
                direct_sets,
                maximum: range.maximum,
            });
        }
        if days_trained < frequency_min {
            analysis.suggestions.push(Finding::LowFrequency {
                exercise: exercise.clone(),
                days_trained,
                minimum: frequency_min,
                maximum: frequency_max,
            });
        }

        analysis.lifts.push(LiftAnalysis {
            total_fractional: volume.total(&exercise),
            per_day: volume.per_day(&exercise),
            exercise,
            direct_sets,
            days_trained,
            status,
        });
    }

    if profile.strength_tracking == StrengthTracking::Compound {
        let coverage = big5_coverage(days);
        if !coverage.missing.is_empty() {
            analysis
                .suggestions
                .push(Finding::MissingBig5(coverage.missing.clone()));
        }
        analysis.big5 = Some(coverage);
    }

    analysis
}

#[derive(Debug, Clone, PartialEq)]
pub struct MuscleSuggestion {
    pub muscle: Muscle,
    pub current: f64,
    pub target: f64,
    pub deficit: f64,
    pub exercises: Vec<String>,
}

impl MuscleSuggestion {
    pub const SESSIONS: u32 = 2;
    pub const MAX_EXERCISES: usize = 5;

    /// Sets to add in each of the suggested sessions.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn sets_per_session(&self) -> u32 {
        ((self.deficit / f64::from(Self::SESSIONS)).floor() as u32).max(1)
    }
}

/// Exercises for muscles trained below the practical range, largest deficit first.
#[must_use]
pub fn muscle_suggestions<C: ExerciseCatalog + ?Sized>(
    analysis: &HypertrophyAnalysis,
    catalog: &C,
    guidelines: &Guidelines,
) -> Vec<MuscleSuggestion> {
    let target = guidelines.hypertrophy.practical_low;
    let mut suggestions = analysis
        .muscles
        .iter()
        .filter(|m| m.status.is_below_practical())
        .filter_map(|m| {
            let exercises = catalog
                .exercises_targeting(&m.muscle)
                .into_iter()
                .take(MuscleSuggestion::MAX_EXERCISES)
                .map(|e| e.name.clone())
                .collect::<Vec<_>>();
            if exercises.is_empty() {
                return None;
            }
            Some(MuscleSuggestion {
                muscle: m.muscle.clone(),
                current: m.total,
                target,
                deficit: (target - m.total).max(0.0),
                exercises,
            })
        })
        .collect::<Vec<_>>();

    suggestions.sort_by(|a, b| b.deficit.total_cmp(&a.deficit));
    suggestions
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiftSuggestion {
    pub exercise: String,
    pub current: u32,
    pub target: f64,
    pub deficit: f64,
    pub days_trained: usize,
    pub extra_days: usize,
}

/// Lifts trained below the practical range, largest deficit first.
#[must_use]
pub fn lift_suggestions(analysis: &StrengthAnalysis, guidelines: &Guidelines) -> Vec<LiftSuggestion> {
    let target = guidelines.strength.practical_low;
    let (frequency_min, _) = guidelines.strength_frequency;
    let mut suggestions = analysis
        .lifts
        .iter()
        .filter(|l| l.status.is_below_practical())
        .map(|l| LiftSuggestion {
            exercise: l.exercise.clone(),
            current: l.direct_sets,
            target,
            deficit: (target - f64::from(l.direct_sets)).max(0.0),
            days_trained: l.days_trained,
            extra_days: frequency_min.saturating_sub(l.days_trained).max(1),
        })
        .collect::<Vec<_>>();

    suggestions.sort_by(|a, b| b.deficit.total_cmp(&a.deficit));
    suggestions
}
