use std::{collections::BTreeMap, ops::AddAssign, slice::Iter};

use crate::{
    BodyRegion, Day, ExerciseCatalog, ExerciseEntry, MovementPattern, Muscle, Program, Property,
    WeekDays, WeekType,
};

/// Set counts of a day, a week or a whole program.
///
/// Region and movement buckets are based on the first primary muscle of each
/// exercise only, whereas the muscle breakdown counts every muscle
/// fractionally regardless of the rep range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VolumeStats {
    pub total_sets: u32,
    pub strength_sets: u32,
    pub hypertrophy_sets: u32,
    pub region_sets: BTreeMap<BodyRegion, u32>,
    pub movement_sets: BTreeMap<MovementPattern, u32>,
    pub muscle_breakdown: BTreeMap<Muscle, f64>,
}

impl VolumeStats {
    #[must_use]
    pub fn region(&self, region: BodyRegion) -> u32 {
        self.region_sets.get(&region).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn movement(&self, movement: MovementPattern) -> u32 {
        self.movement_sets.get(&movement).copied().unwrap_or_default()
    }
}

impl AddAssign<&VolumeStats> for VolumeStats {
    fn add_assign(&mut self, rhs: &VolumeStats) {
        self.total_sets += rhs.total_sets;
        self.strength_sets += rhs.strength_sets;
        self.hypertrophy_sets += rhs.hypertrophy_sets;
        for (region, sets) in &rhs.region_sets {
            *self.region_sets.entry(*region).or_default() += sets;
        }
        for (movement, sets) in &rhs.movement_sets {
            *self.movement_sets.entry(*movement).or_default() += sets;
        }
        for (muscle, sets) in &rhs.muscle_breakdown {
            *self.muscle_breakdown.entry(muscle.clone()).or_default() += sets;
        }
    }
}

#[must_use]
pub fn day_stats<C: ExerciseCatalog + ?Sized>(entries: &[ExerciseEntry], catalog: &C) -> VolumeStats {
    let mut stats = VolumeStats::default();

    for entry in entries {
        let sets = u32::from(entry.sets);

        stats.total_sets += sets;
        if entry.reps.is_strength() {
            stats.strength_sets += sets;
        } else {
            stats.hypertrophy_sets += sets;
        }

        let Some(exercise) = catalog.lookup(&entry.exercise) else {
            continue;
        };

        for (muscle, stimulus) in exercise.muscle_stimulus() {
            *stats.muscle_breakdown.entry(muscle.clone()).or_default() +=
                f64::from(sets) * stimulus.factor();
        }

        if let Some(muscle) = exercise.primary_muscle() {
            if let Some(region) = muscle.region() {
                *stats.region_sets.entry(region).or_default() += sets;
            }
            if let Some(movement) = muscle.movement() {
                *stats.movement_sets.entry(movement).or_default() += sets;
            }
        }
    }

    stats
}

#[must_use]
pub fn week_stats<C: ExerciseCatalog + ?Sized>(days: &WeekDays, catalog: &C) -> VolumeStats {
    let mut stats = VolumeStats::default();
    for (_, entries) in days.iter() {
        stats += &day_stats(entries, catalog);
    }
    stats
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekSummary {
    pub index: usize,
    pub name: String,
    pub week_type: WeekType,
    pub stats: VolumeStats,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgramStats {
    pub totals: VolumeStats,
    pub weeks: Vec<WeekSummary>,
}

#[must_use]
pub fn program_stats<C: ExerciseCatalog + ?Sized>(program: &Program, catalog: &C) -> ProgramStats {
    let weeks = program
        .weeks()
        .iter()
        .enumerate()
        .map(|(index, week)| WeekSummary {
            index,
            name: week.name.clone(),
            week_type: week.week_type,
            stats: week_stats(&week.days, catalog),
        })
        .collect::<Vec<_>>();

    let mut totals = VolumeStats::default();
    for week in &weeks {
        totals += &week.stats;
    }

    ProgramStats { totals, weeks }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BalanceAssessment {
    NeedsMorePull,
    Balanced,
    PullEmphasis,
}

impl Property for BalanceAssessment {
    fn iter() -> Iter<'static, BalanceAssessment> {
        static ASSESSMENTS: [BalanceAssessment; 3] = [
            BalanceAssessment::NeedsMorePull,
            BalanceAssessment::Balanced,
            BalanceAssessment::PullEmphasis,
        ];
        ASSESSMENTS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            BalanceAssessment::NeedsMorePull => "Add more pulling",
            BalanceAssessment::Balanced => "Balanced",
            BalanceAssessment::PullEmphasis => "Pull emphasis",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MuscleBalance {
    pub push: f64,
    pub pull: f64,
    pub upper: f64,
    pub lower: f64,
}

impl MuscleBalance {
    #[must_use]
    pub fn pull_push_ratio(&self) -> Option<f64> {
        if self.push > 0.0 {
            Some(self.pull / self.push)
        } else {
            None
        }
    }

    #[must_use]
    pub fn lower_upper_ratio(&self) -> Option<f64> {
        if self.upper > 0.0 {
            Some(self.lower / self.upper)
        } else {
            None
        }
    }

    #[must_use]
    pub fn assessment(&self) -> Option<BalanceAssessment> {
        self.pull_push_ratio().map(|ratio| {
            if ratio < 0.8 {
                BalanceAssessment::NeedsMorePull
            } else if ratio > 1.2 {
                BalanceAssessment::PullEmphasis
            } else {
                BalanceAssessment::Balanced
            }
        })
    }
}

const BALANCE_PUSH: [&str; 3] = ["chest", "shoulders", "triceps"];
const BALANCE_PULL: [&str; 6] = [
    "lats",
    "middle back",
    "lower back",
    "traps",
    "biceps",
    "forearms",
];
const BALANCE_UPPER_EXTRA: [&str; 2] = ["abdominals", "neck"];
const BALANCE_LOWER: [&str; 6] = [
    "quadriceps",
    "glutes",
    "hamstrings",
    "calves",
    "adductors",
    "abductors",
];

/// Balance of weekly hypertrophy volume between pushing and pulling and between upper and lower
/// body.
///
/// Uses coarser groups than [`BodyRegion`] and [`MovementPattern`]: deltoid heads count towards
/// neither side, lower back counts as pull, and abdominals and neck count as upper body.
#[must_use]
pub fn muscle_balance(totals: &BTreeMap<Muscle, f64>) -> MuscleBalance {
    let mut balance = MuscleBalance::default();

    for (muscle, sets) in totals {
        let name: &str = muscle.as_ref();
        let push = BALANCE_PUSH.contains(&name);
        let pull = BALANCE_PULL.contains(&name);
        if push {
            balance.push += sets;
        }
        if pull {
            balance.pull += sets;
        }
        if push || pull || BALANCE_UPPER_EXTRA.contains(&name) {
            balance.upper += sets;
        } else if BALANCE_LOWER.contains(&name) {
            balance.lower += sets;
        }
    }

    balance
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayLoad {
    pub day: Day,
    pub exercises: usize,
    pub total_sets: u32,
    pub hypertrophy_sets: u32,
    pub strength_sets: u32,
}

/// Load of every training day, rest days omitted.
#[must_use]
pub fn day_loads(days: &WeekDays) -> Vec<DayLoad> {
    days.iter()
        .filter(|(_, entries)| !entries.is_empty())
        .map(|(day, entries)| {
            let (strength, hypertrophy): (Vec<_>, Vec<_>) =
                entries.iter().partition(|e| e.reps.is_strength());
            let sum = |entries: &[&ExerciseEntry]| {
                entries.iter().map(|e| u32::from(e.sets)).sum::<u32>()
            };
            DayLoad {
                day,
                exercises: entries.len(),
                total_sets: sum(&strength) + sum(&hypertrophy),
                hypertrophy_sets: sum(&hypertrophy),
                strength_sets: sum(&strength),
            }
        })
        .collect()
}
