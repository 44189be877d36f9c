use std::collections::{BTreeMap, BTreeSet};

use fracsets_domain::{self as domain, Property};
use log::debug;
use serde_json::Value;

use crate::ImportError;

pub const IMPORTED_PROGRAM_NAME: &str = "Imported Program";

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::AsRefStr, strum::Display, strum::EnumString)]
pub enum FormatVersion {
    /// A single week, either as `{"days": {...}}` or with the days at the top level.
    #[strum(serialize = "1.0")]
    SingleWeek,
    #[strum(serialize = "2.0")]
    MultiWeek,
}

impl FormatVersion {
    pub const CURRENT: FormatVersion = FormatVersion::MultiWeek;

    /// Documents without a known version are read as single-week documents.
    #[must_use]
    pub fn of(document: &Value) -> Self {
        document
            .get("format_version")
            .and_then(Value::as_str)
            .and_then(|version| version.parse().ok())
            .unwrap_or(FormatVersion::SingleWeek)
    }
}

pub type Days = BTreeMap<String, Vec<ExerciseEntry>>;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct ProgramDocument {
    #[serde(default = "imported_program_name")]
    pub name: String,
    #[serde(default)]
    pub format_version: String,
    #[serde(default)]
    pub weeks: Vec<Week>,
    #[serde(default)]
    pub exercise_1rm: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_profile: Option<UserProfile>,
}

fn imported_program_name() -> String {
    IMPORTED_PROGRAM_NAME.to_string()
}

impl From<&domain::Program> for ProgramDocument {
    fn from(value: &domain::Program) -> Self {
        Self {
            name: value.name.clone(),
            format_version: FormatVersion::CURRENT.to_string(),
            weeks: value.weeks().iter().map(Week::from).collect(),
            exercise_1rm: value.one_rep_maxes().clone(),
            user_profile: Some(UserProfile::from(&value.profile)),
        }
    }
}

impl TryFrom<ProgramDocument> for domain::Program {
    type Error = ImportError;

    fn try_from(value: ProgramDocument) -> Result<Self, Self::Error> {
        let weeks = value
            .weeks
            .into_iter()
            .enumerate()
            .map(|(index, week)| {
                week.into_domain(index + 1)
                    .map_err(|err| ImportError::InvalidWeek {
                        week: index + 1,
                        source: Box::new(err),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let mut program =
            domain::Program::from_weeks(&value.name, weeks).map_err(|_| ImportError::NoWeeks)?;

        store_one_rep_maxes(&mut program, value.exercise_1rm);

        if let Some(profile) = value.user_profile {
            profile.merge_into(&mut program.profile)?;
        }

        Ok(program)
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Week {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub week_type: Option<String>,
    #[serde(default)]
    pub days: Days,
    #[serde(default)]
    pub notes: String,
}

impl Week {
    fn into_domain(self, number: usize) -> Result<domain::Week, ImportError> {
        let week_type = match self.week_type.as_deref() {
            None => domain::WeekType::Training,
            Some(key) => domain::WeekType::from_key(key).unwrap_or_else(|| {
                debug!("unknown week type \"{key}\" read as training");
                domain::WeekType::Training
            }),
        };
        let name = if self.name.trim().is_empty() {
            format!("Week {number}")
        } else {
            self.name
        };
        Ok(domain::Week {
            name,
            week_type,
            days: week_days(self.days)?,
            notes: self.notes,
        })
    }
}

impl From<&domain::Week> for Week {
    fn from(value: &domain::Week) -> Self {
        Self {
            name: value.name.clone(),
            week_type: Some(value.week_type.key().to_string()),
            days: export_days(&value.days),
            notes: value.notes.clone(),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ExerciseEntry {
    pub exercise: String,
    pub sets: u32,
    pub reps: u32,
}

impl From<&domain::ExerciseEntry> for ExerciseEntry {
    fn from(value: &domain::ExerciseEntry) -> Self {
        Self {
            exercise: value.exercise.clone(),
            sets: u32::from(value.sets),
            reps: u32::from(value.reps),
        }
    }
}

impl TryFrom<ExerciseEntry> for domain::ExerciseEntry {
    type Error = EntryError;

    fn try_from(value: ExerciseEntry) -> Result<Self, Self::Error> {
        if value.exercise.trim().is_empty() {
            return Err(EntryError::MissingExercise);
        }
        Ok(Self {
            exercise: value.exercise,
            sets: domain::Sets::new(value.sets)?,
            reps: domain::Reps::new(value.reps)?,
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum EntryError {
    #[error("Missing exercise name")]
    MissingExercise,
    #[error(transparent)]
    InvalidSets(#[from] domain::SetsError),
    #[error(transparent)]
    InvalidReps(#[from] domain::RepsError),
}

/// Keys that are not day names are ignored. Missing days are rest days.
pub fn week_days(days: Days) -> Result<domain::WeekDays, ImportError> {
    let mut week_days = domain::WeekDays::default();

    for (key, entries) in days {
        let Ok(day) = domain::Day::try_from(key.as_str()) else {
            debug!("ignoring unknown day \"{key}\"");
            continue;
        };
        let target = week_days.day_mut(day);
        for (position, entry) in entries.into_iter().enumerate() {
            target.push(
                domain::ExerciseEntry::try_from(entry).map_err(|err| {
                    ImportError::InvalidEntry {
                        day: day.name().to_string(),
                        position,
                        message: err.to_string(),
                    }
                })?,
            );
        }
    }

    Ok(week_days)
}

/// All seven days, rest days included.
#[must_use]
pub fn export_days(week_days: &domain::WeekDays) -> Days {
    week_days
        .iter()
        .map(|(day, entries)| {
            (
                day.name().to_string(),
                entries.iter().map(ExerciseEntry::from).collect(),
            )
        })
        .collect()
}

/// Only the fields present in a document are applied to a profile.
#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_tier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_custom_targets: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_hypertrophy_target: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_strength_target: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hypertrophy_tracked_muscles: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength_tracking_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength_tracked_exercises: Option<Vec<String>>,
}

impl UserProfile {
    /// The profile is left unchanged if any field is invalid.
    pub fn merge_into(self, profile: &mut domain::UserProfile) -> Result<(), ImportError> {
        let mut merged = profile.clone();

        if let Some(status) = self.training_status {
            merged.training_status = domain::TrainingStatus::from_name(&status)
                .ok_or_else(|| {
                    ImportError::InvalidProfile(format!("unknown training status \"{status}\""))
                })?;
        }
        if let Some(tier) = self.volume_tier {
            merged.volume_tier = domain::VolumeTier::from_name(&tier).ok_or_else(|| {
                ImportError::InvalidProfile(format!("unknown volume tier \"{tier}\""))
            })?;
        }
        if let Some(use_custom_targets) = self.use_custom_targets {
            merged.use_custom_targets = use_custom_targets;
        }
        if let Some(target) = self.custom_hypertrophy_target {
            merged.custom_hypertrophy_target = target;
        }
        if let Some(target) = self.custom_strength_target {
            merged.custom_strength_target = target;
        }
        if let Some(muscles) = self.hypertrophy_tracked_muscles {
            let muscles = muscles
                .iter()
                .filter_map(|m| domain::Muscle::new(m))
                .collect::<BTreeSet<_>>();
            merged.hypertrophy_tracking = if muscles.is_empty() {
                domain::MuscleTracking::All
            } else {
                domain::MuscleTracking::Selected(muscles)
            };
        }
        if self.strength_tracking_mode.is_some() || self.strength_tracked_exercises.is_some() {
            let mode = self
                .strength_tracking_mode
                .as_deref()
                .unwrap_or(profile.strength_tracking.mode());
            let exercises = match (self.strength_tracked_exercises, &profile.strength_tracking) {
                (Some(exercises), _) => exercises.into_iter().collect(),
                (None, domain::StrengthTracking::Custom(exercises)) => exercises.clone(),
                (None, _) => BTreeSet::new(),
            };
            merged.strength_tracking = match mode {
                "compound" => domain::StrengthTracking::Compound,
                "all" => domain::StrengthTracking::All,
                "custom" => domain::StrengthTracking::Custom(exercises),
                mode => {
                    return Err(ImportError::InvalidProfile(format!(
                        "unknown strength tracking mode \"{mode}\""
                    )));
                }
            };
        }

        *profile = merged;
        Ok(())
    }
}

impl From<&domain::UserProfile> for UserProfile {
    fn from(value: &domain::UserProfile) -> Self {
        Self {
            training_status: Some(value.training_status.name().to_string()),
            volume_tier: Some(value.volume_tier.name().to_string()),
            use_custom_targets: Some(value.use_custom_targets),
            custom_hypertrophy_target: Some(value.custom_hypertrophy_target),
            custom_strength_target: Some(value.custom_strength_target),
            hypertrophy_tracked_muscles: match &value.hypertrophy_tracking {
                domain::MuscleTracking::All => None,
                domain::MuscleTracking::Selected(muscles) => {
                    Some(muscles.iter().map(ToString::to_string).collect())
                }
            },
            strength_tracking_mode: Some(value.strength_tracking.mode().to_string()),
            strength_tracked_exercises: match &value.strength_tracking {
                domain::StrengthTracking::Custom(exercises) => {
                    Some(exercises.iter().cloned().collect())
                }
                _ => None,
            },
        }
    }
}

/// Reads a program document of any supported version.
///
/// A rejected document never yields a partially imported program.
pub fn import_program(document: &Value) -> Result<domain::Program, ImportError> {
    let Value::Object(object) = document else {
        return Err(ImportError::Malformed(
            "expected a JSON object".to_string(),
        ));
    };

    match FormatVersion::of(document) {
        FormatVersion::MultiWeek => {
            let document = serde_json::from_value::<ProgramDocument>(document.clone())?;
            domain::Program::try_from(document)
        }
        FormatVersion::SingleWeek => {
            let days = match object.get("days") {
                Some(days) => serde_json::from_value::<Days>(days.clone())?,
                None => object
                    .iter()
                    .filter(|(key, _)| domain::Day::try_from(key.as_str()).is_ok())
                    .map(|(key, entries)| {
                        Ok((key.clone(), serde_json::from_value(entries.clone())?))
                    })
                    .collect::<Result<Days, serde_json::Error>>()?,
            };
            let name = object
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or(IMPORTED_PROGRAM_NAME);
            let week = domain::Week {
                days: week_days(days).map_err(|err| ImportError::InvalidWeek {
                    week: 1,
                    source: Box::new(err),
                })?,
                ..domain::Week::new("Week 1", domain::WeekType::Training)
            };
            let mut program = domain::Program::from_weeks(name, vec![week])
                .map_err(|_| ImportError::NoWeeks)?;

            if let Some(one_rep_maxes) = object.get("exercise_1rm") {
                store_one_rep_maxes(
                    &mut program,
                    serde_json::from_value(one_rep_maxes.clone())?,
                );
            }

            Ok(program)
        }
    }
}

pub fn parse_program(text: &str) -> Result<domain::Program, ImportError> {
    import_program(&serde_json::from_str(text)?)
}

/// Programs are always written in the current format version.
pub fn export_program(program: &domain::Program) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ProgramDocument::from(program))
}

fn store_one_rep_maxes(program: &mut domain::Program, values: BTreeMap<String, f64>) {
    let count = values.len();
    let stored = program.merge_one_rep_maxes(values, true);
    if stored < count {
        debug!("dropped {} invalid one-rep maxes", count - stored);
    }
}
