use std::collections::BTreeMap;

use log::warn;

use crate::{Day, ExerciseEntry, Property, UserProfile, Week, WeekDays, WeekType, weight_for_reps};

pub const DEFAULT_PROGRAM_NAME: &str = "My Training Program";

/// A multi-week plan with its current week, known one-rep maxes and the
/// profile used to analyze it.
///
/// A program always contains at least one week and the current week always
/// refers to an existing week. Every mutation either succeeds completely or
/// leaves the program unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub name: String,
    weeks: Vec<Week>,
    current_week: usize,
    one_rep_maxes: BTreeMap<String, f64>,
    pub profile: UserProfile,
}

impl Default for Program {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM_NAME)
    }
}

impl Program {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            weeks: vec![Week::new("Week 1", WeekType::Training)],
            current_week: 0,
            one_rep_maxes: BTreeMap::new(),
            profile: UserProfile::default(),
        }
    }

    pub fn from_weeks(name: &str, weeks: Vec<Week>) -> Result<Self, ProgramError> {
        if weeks.is_empty() {
            return Err(ProgramError::NoWeeks);
        }
        Ok(Self {
            weeks,
            ..Self::new(name)
        })
    }

    #[must_use]
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub fn week(&self, index: usize) -> Result<&Week, ProgramError> {
        self.weeks
            .get(index)
            .ok_or(ProgramError::WeekOutOfRange {
                index,
                len: self.weeks.len(),
            })
    }

    pub fn week_mut(&mut self, index: usize) -> Result<&mut Week, ProgramError> {
        let len = self.weeks.len();
        self.weeks
            .get_mut(index)
            .ok_or(ProgramError::WeekOutOfRange { index, len })
    }

    #[must_use]
    pub fn current_week(&self) -> usize {
        self.current_week
    }

    pub fn set_current_week(&mut self, index: usize) -> Result<(), ProgramError> {
        self.check_week(index)?;
        self.current_week = index;
        Ok(())
    }

    #[must_use]
    pub fn current_week_days(&self) -> &WeekDays {
        &self.weeks[self.current_week].days
    }

    /// Appends a week and returns its index.
    ///
    /// Without a name the week is called "Week N", with the type in
    /// parentheses for anything but a training week. When copying from an
    /// existing week into a non-training week, the copied sets are scaled by
    /// the volume modifier of the new type.
    pub fn add_week(
        &mut self,
        copy_from: Option<usize>,
        week_type: WeekType,
        name: Option<&str>,
    ) -> Result<usize, ProgramError> {
        let days = match copy_from {
            Some(index) => {
                let mut days = self.week(index)?.days.clone();
                if week_type != WeekType::Training {
                    days.scale_sets(week_type.volume_modifier());
                }
                days
            }
            None => WeekDays::default(),
        };
        let number = self.weeks.len() + 1;
        let name = match name {
            Some(name) => non_empty(name)?,
            None if week_type == WeekType::Training => format!("Week {number}"),
            None => format!("Week {number} ({})", week_type.name()),
        };
        self.weeks.push(Week {
            name,
            week_type,
            days,
            notes: String::new(),
        });
        Ok(self.weeks.len() - 1)
    }

    pub fn delete_week(&mut self, index: usize) -> Result<Week, ProgramError> {
        self.check_week(index)?;
        if self.weeks.len() <= 1 {
            warn!("refusing to delete the last week");
            return Err(ProgramError::LastWeek);
        }
        let week = self.weeks.remove(index);
        if self.current_week >= self.weeks.len() {
            self.current_week = self.weeks.len() - 1;
        }
        Ok(week)
    }

    /// Duplicates a week including its type and notes. The copy is inserted
    /// at `to`, clamped to the end of the program, or appended. The current
    /// week stays the same week when the copy lands before it.
    pub fn copy_week(&mut self, from: usize, to: Option<usize>) -> Result<usize, ProgramError> {
        let source = self.week(from)?;
        let copy = Week {
            name: format!("{} (Copy)", source.name),
            ..source.clone()
        };
        let index = to.map_or(self.weeks.len(), |to| to.min(self.weeks.len()));
        self.weeks.insert(index, copy);
        if index <= self.current_week {
            self.current_week += 1;
        }
        Ok(index)
    }

    /// Changes the type of a week. With `apply_modifier` the sets are rescaled
    /// by the ratio of the new and the old volume modifier.
    pub fn set_week_type(
        &mut self,
        index: usize,
        week_type: WeekType,
        apply_modifier: bool,
    ) -> Result<(), ProgramError> {
        let week = self.week_mut(index)?;
        let old_modifier = week.week_type.volume_modifier();
        if apply_modifier && week.week_type != week_type && old_modifier > 0.0 {
            week.days
                .scale_sets(week_type.volume_modifier() / old_modifier);
        }
        week.week_type = week_type;
        Ok(())
    }

    /// Scales the sets of a week by `modifier` and marks it as a deload week.
    ///
    /// Scaled sets never drop below one, but the modifier itself must be
    /// positive and finite. A modifier of zero is rejected rather than turning
    /// every entry into a single set.
    pub fn apply_deload_modifier(&mut self, index: usize, modifier: f64) -> Result<(), ProgramError> {
        if !modifier.is_finite() || modifier <= 0.0 {
            warn!("refusing to scale week {index} by {modifier}");
            return Err(ProgramError::InvalidModifier(modifier));
        }
        let week = self.week_mut(index)?;
        week.days.scale_sets(modifier);
        week.week_type = WeekType::Deload;
        Ok(())
    }

    /// Replaces the entries of `target` with a copy of those of `source`,
    /// within the given week or the current week.
    pub fn copy_day_to_day(
        &mut self,
        source: Day,
        target: Day,
        week: Option<usize>,
    ) -> Result<(), ProgramError> {
        let index = week.unwrap_or(self.current_week);
        let week = self.week_mut(index)?;
        let entries = week.days.day(source).to_vec();
        *week.days.day_mut(target) = entries;
        Ok(())
    }

    pub fn rename_week(&mut self, index: usize, name: &str) -> Result<(), ProgramError> {
        let name = non_empty(name)?;
        self.week_mut(index)?.name = name;
        Ok(())
    }

    pub fn set_week_notes(&mut self, index: usize, notes: &str) -> Result<(), ProgramError> {
        self.week_mut(index)?.notes = notes.to_string();
        Ok(())
    }

    /// Rearranges the weeks so that the week at `order[i]` becomes week `i`.
    /// The current week keeps pointing at the same week.
    pub fn reorder_weeks(&mut self, order: &[usize]) -> Result<(), ProgramError> {
        if order.len() != self.weeks.len() {
            return Err(ProgramError::OrderLengthMismatch {
                expected: self.weeks.len(),
                actual: order.len(),
            });
        }
        let mut seen = vec![false; order.len()];
        for &index in order {
            match seen.get_mut(index) {
                Some(s) if !*s => *s = true,
                _ => return Err(ProgramError::InvalidPermutation(order.to_vec())),
            }
        }
        let weeks = order.iter().map(|&i| self.weeks[i].clone()).collect();
        self.current_week = order
            .iter()
            .position(|&i| i == self.current_week)
            .unwrap_or_default();
        self.weeks = weeks;
        Ok(())
    }

    pub fn add_entry(
        &mut self,
        week: usize,
        day: Day,
        entry: ExerciseEntry,
    ) -> Result<(), ProgramError> {
        self.week_mut(week)?.days.day_mut(day).push(entry);
        Ok(())
    }

    pub fn replace_entry(
        &mut self,
        week: usize,
        day: Day,
        index: usize,
        entry: ExerciseEntry,
    ) -> Result<ExerciseEntry, ProgramError> {
        let slot = self.entry_mut(week, day, index)?;
        Ok(std::mem::replace(slot, entry))
    }

    pub fn remove_entry(
        &mut self,
        week: usize,
        day: Day,
        index: usize,
    ) -> Result<ExerciseEntry, ProgramError> {
        self.entry_mut(week, day, index)?;
        Ok(self.week_mut(week)?.days.day_mut(day).remove(index))
    }

    /// Moves an entry within a day, shifting the entries in between.
    pub fn move_entry(
        &mut self,
        week: usize,
        day: Day,
        from: usize,
        to: usize,
    ) -> Result<(), ProgramError> {
        self.entry_mut(week, day, from)?;
        self.entry_mut(week, day, to)?;
        let entries = self.week_mut(week)?.days.day_mut(day);
        let entry = entries.remove(from);
        entries.insert(to, entry);
        Ok(())
    }

    pub fn clear_day(&mut self, week: usize, day: Day) -> Result<Vec<ExerciseEntry>, ProgramError> {
        Ok(std::mem::take(self.week_mut(week)?.days.day_mut(day)))
    }

    /// Replaces the days of the current week and optionally renames the
    /// program.
    pub fn apply_template(&mut self, program_name: Option<&str>, days: WeekDays) {
        self.weeks[self.current_week].days = days;
        if let Some(name) = program_name {
            self.name = name.to_string();
        }
    }

    #[must_use]
    pub fn one_rep_maxes(&self) -> &BTreeMap<String, f64> {
        &self.one_rep_maxes
    }

    #[must_use]
    pub fn one_rep_max(&self, exercise: &str) -> Option<f64> {
        self.one_rep_maxes.get(exercise).copied()
    }

    pub fn set_one_rep_max(&mut self, exercise: &str, value: f64) -> Result<(), ProgramError> {
        if exercise.trim().is_empty() {
            return Err(ProgramError::EmptyName);
        }
        if !value.is_finite() || value <= 0.0 {
            warn!("ignoring one-rep max {value} for \"{exercise}\"");
            return Err(ProgramError::InvalidOneRepMax(value));
        }
        self.one_rep_maxes.insert(exercise.to_string(), value);
        Ok(())
    }

    pub fn remove_one_rep_max(&mut self, exercise: &str) -> Option<f64> {
        self.one_rep_maxes.remove(exercise)
    }

    /// Adds the given one-rep maxes, overwriting existing values for the same
    /// exercise. With `replace` all existing values are dropped first, but only
    /// if at least one value is stored in their place.
    /// Invalid values are skipped. Returns the number of stored values.
    pub fn merge_one_rep_maxes(&mut self, values: BTreeMap<String, f64>, replace: bool) -> usize {
        let valid = values
            .into_iter()
            .filter(|(exercise, value)| {
                let ok = !exercise.trim().is_empty() && value.is_finite() && *value > 0.0;
                if !ok {
                    warn!("ignoring one-rep max {value} for \"{exercise}\"");
                }
                ok
            })
            .collect::<Vec<_>>();

        if valid.is_empty() {
            return 0;
        }
        if replace {
            self.one_rep_maxes.clear();
        }
        let stored = valid.len();
        for (exercise, value) in valid {
            self.one_rep_maxes.insert(exercise.trim().to_string(), value);
        }
        stored
    }

    /// Working weight for the reps of an entry, if the one-rep max of its
    /// exercise is known.
    #[must_use]
    pub fn suggested_weight(&self, entry: &ExerciseEntry) -> Option<f64> {
        self.one_rep_max(&entry.exercise)
            .map(|one_rep_max| weight_for_reps(one_rep_max, entry.reps))
    }

    fn check_week(&self, index: usize) -> Result<(), ProgramError> {
        self.week(index).map(|_| ())
    }

    fn entry_mut(
        &mut self,
        week: usize,
        day: Day,
        index: usize,
    ) -> Result<&mut ExerciseEntry, ProgramError> {
        let entries = self.week_mut(week)?.days.day_mut(day);
        let len = entries.len();
        entries.get_mut(index).ok_or(ProgramError::EntryOutOfRange {
            week,
            day,
            index,
            len,
        })
    }
}

fn non_empty(name: &str) -> Result<String, ProgramError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ProgramError::EmptyName);
    }
    Ok(name.to_string())
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ProgramError {
    #[error("Program must contain at least one week")]
    NoWeeks,
    #[error("Cannot delete the last week")]
    LastWeek,
    #[error("Week {index} does not exist (program has {len} weeks)")]
    WeekOutOfRange { index: usize, len: usize },
    #[error("Entry {index} does not exist on {day:?} of week {week} ({len} entries)")]
    EntryOutOfRange {
        week: usize,
        day: Day,
        index: usize,
        len: usize,
    },
    #[error("Expected an order of {expected} weeks, got {actual}")]
    OrderLengthMismatch { expected: usize, actual: usize },
    #[error("{0:?} is not a permutation of the week indices")]
    InvalidPermutation(Vec<usize>),
    #[error("Volume modifier must be positive, got {0}")]
    InvalidModifier(f64),
    #[error("One-rep max must be positive, got {0}")]
    InvalidOneRepMax(f64),
    #[error("Name must not be empty")]
    EmptyName,
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::{Reps, Sets, fixtures::entry};

    #[fixture]
    fn program() -> Program {
        let mut program = Program::default();
        let days = &mut program.week_mut(0).unwrap().days;
        days.day_mut(Day::Monday)
            .push(entry("Bench Press", 4, 5));
        days.day_mut(Day::Monday)
            .push(entry("Triceps Pushdown", 3, 12));
        days.day_mut(Day::Thursday)
            .push(entry("Barbell Squat", 5, 5));
        program
    }

    fn sets(week: &Week, day: Day) -> Vec<u32> {
        week.days.day(day).iter().map(|e| u32::from(e.sets)).collect()
    }

    #[test]
    fn test_program_default() {
        let program = Program::default();
        assert_eq!(program.name, "My Training Program");
        assert_eq!(program.weeks().len(), 1);
        assert_eq!(program.weeks()[0].name, "Week 1");
        assert_eq!(program.weeks()[0].week_type, WeekType::Training);
        assert_eq!(program.current_week(), 0);
        assert!(program.current_week_days().is_empty());
    }

    #[test]
    fn test_program_from_weeks_empty() {
        assert_eq!(Program::from_weeks("P", vec![]), Err(ProgramError::NoWeeks));
    }

    #[rstest]
    fn test_add_week_empty(mut program: Program) {
        assert_eq!(program.add_week(None, WeekType::Training, None), Ok(1));
        assert_eq!(program.weeks()[1].name, "Week 2");
        assert!(program.weeks()[1].days.is_empty());
        assert_eq!(program.add_week(None, WeekType::Testing, None), Ok(2));
        assert_eq!(program.weeks()[2].name, "Week 3 (1RM Testing)");
    }

    #[rstest]
    fn test_add_week_copy_deload(mut program: Program) {
        assert_eq!(program.add_week(Some(0), WeekType::Deload, None), Ok(1));

        let week = &program.weeks()[1];
        assert_eq!(week.name, "Week 2 (Deload)");
        assert_eq!(week.week_type, WeekType::Deload);
        assert_eq!(sets(week, Day::Monday), vec![2, 1]);
        assert_eq!(sets(week, Day::Thursday), vec![2]);
        assert_eq!(sets(&program.weeks()[0], Day::Monday), vec![4, 3]);
    }

    #[rstest]
    fn test_add_week_copy_training_keeps_sets(mut program: Program) {
        program
            .add_week(Some(0), WeekType::Training, Some("Heavy"))
            .unwrap();
        assert_eq!(program.weeks()[1].name, "Heavy");
        assert_eq!(program.weeks()[1].days, program.weeks()[0].days);
    }

    #[rstest]
    fn test_add_week_invalid_source(mut program: Program) {
        assert_eq!(
            program.add_week(Some(3), WeekType::Training, None),
            Err(ProgramError::WeekOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(program.weeks().len(), 1);
    }

    #[rstest]
    fn test_delete_week(mut program: Program) {
        assert_eq!(program.delete_week(0), Err(ProgramError::LastWeek));

        program.add_week(None, WeekType::Training, None).unwrap();
        program.add_week(None, WeekType::Training, None).unwrap();
        program.set_current_week(2).unwrap();

        assert_eq!(program.delete_week(2).unwrap().name, "Week 3");
        assert_eq!(program.current_week(), 1);
        assert_eq!(
            program.delete_week(5),
            Err(ProgramError::WeekOutOfRange { index: 5, len: 2 })
        );
        program.delete_week(0).unwrap();
        assert_eq!(program.weeks()[0].name, "Week 2");
        assert_eq!(program.current_week(), 0);
    }

    #[rstest]
    fn test_copy_week(mut program: Program) {
        program.set_week_notes(0, "focus on bar speed").unwrap();
        program.set_week_type(0, WeekType::Volume, false).unwrap();

        assert_eq!(program.copy_week(0, None), Ok(1));
        assert_eq!(program.copy_week(0, Some(0)), Ok(0));
        assert_eq!(program.copy_week(0, Some(10)), Ok(3));

        let copy = &program.weeks()[2];
        assert_eq!(copy.name, "Week 1 (Copy)");
        assert_eq!(copy.week_type, WeekType::Volume);
        assert_eq!(copy.notes, "focus on bar speed");
        assert_eq!(program.weeks()[1].name, "Week 1");
        assert_eq!(program.weeks()[3].name, "Week 1 (Copy) (Copy)");
        assert_eq!(
            program.copy_week(4, None),
            Err(ProgramError::WeekOutOfRange { index: 4, len: 4 })
        );
    }

    #[rstest]
    fn test_copy_week_before_current_week(mut program: Program) {
        program.add_week(None, WeekType::Training, None).unwrap();
        program.set_current_week(1).unwrap();

        assert_eq!(program.copy_week(0, Some(0)), Ok(0));
        assert_eq!(program.current_week(), 2);
        assert_eq!(program.weeks()[2].name, "Week 2");

        assert_eq!(program.copy_week(0, Some(2)), Ok(2));
        assert_eq!(program.current_week(), 3);
        assert_eq!(program.weeks()[3].name, "Week 2");

        assert_eq!(program.copy_week(3, None), Ok(4));
        assert_eq!(program.current_week(), 3);
    }

    #[rstest]
    fn test_set_week_type_apply_modifier(mut program: Program) {
        program.set_week_type(0, WeekType::Deload, true).unwrap();
        assert_eq!(sets(&program.weeks()[0], Day::Monday), vec![2, 1]);

        program.set_week_type(0, WeekType::Training, true).unwrap();
        assert_eq!(program.weeks()[0].week_type, WeekType::Training);
        assert_eq!(sets(&program.weeks()[0], Day::Monday), vec![4, 2]);
    }

    #[rstest]
    fn test_set_week_type_without_modifier(mut program: Program) {
        program.set_week_type(0, WeekType::Deload, false).unwrap();
        assert_eq!(program.weeks()[0].week_type, WeekType::Deload);
        assert_eq!(sets(&program.weeks()[0], Day::Monday), vec![4, 3]);
    }

    #[rstest]
    fn test_apply_deload_modifier(mut program: Program) {
        program.apply_deload_modifier(0, 0.6).unwrap();
        assert_eq!(program.weeks()[0].week_type, WeekType::Deload);
        assert_eq!(sets(&program.weeks()[0], Day::Monday), vec![2, 1]);
        assert_eq!(sets(&program.weeks()[0], Day::Thursday), vec![3]);
        assert_eq!(
            program.apply_deload_modifier(0, 0.0),
            Err(ProgramError::InvalidModifier(0.0))
        );
    }

    #[rstest]
    #[case::zero(0.0)]
    #[case::negative(-0.5)]
    #[case::infinite(f64::INFINITY)]
    fn test_apply_deload_modifier_rejected(mut program: Program, #[case] modifier: f64) {
        program.set_week_type(0, WeekType::Volume, false).unwrap();

        assert_eq!(
            program.apply_deload_modifier(0, modifier),
            Err(ProgramError::InvalidModifier(modifier))
        );
        assert_eq!(program.weeks()[0].week_type, WeekType::Volume);
        assert_eq!(sets(&program.weeks()[0], Day::Monday), vec![4, 3]);
    }

    #[rstest]
    fn test_copy_day_to_day(mut program: Program) {
        program.copy_day_to_day(Day::Monday, Day::Friday, None).unwrap();
        assert_eq!(
            program.current_week_days().day(Day::Friday),
            program.current_week_days().day(Day::Monday)
        );

        program.copy_day_to_day(Day::Sunday, Day::Thursday, Some(0)).unwrap();
        assert!(program.current_week_days().day(Day::Thursday).is_empty());
    }

    #[rstest]
    fn test_rename_week(mut program: Program) {
        program.rename_week(0, " Intro ").unwrap();
        assert_eq!(program.weeks()[0].name, "Intro");
        assert_eq!(program.rename_week(0, "  "), Err(ProgramError::EmptyName));
    }

    #[rstest]
    fn test_reorder_weeks(mut program: Program) {
        program.add_week(None, WeekType::Deload, None).unwrap();
        program.add_week(None, WeekType::Testing, None).unwrap();
        program.set_current_week(0).unwrap();

        assert_eq!(
            program.reorder_weeks(&[0, 1]),
            Err(ProgramError::OrderLengthMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            program.reorder_weeks(&[0, 0, 1]),
            Err(ProgramError::InvalidPermutation(vec![0, 0, 1]))
        );
        assert_eq!(
            program.reorder_weeks(&[0, 1, 3]),
            Err(ProgramError::InvalidPermutation(vec![0, 1, 3]))
        );

        program.reorder_weeks(&[2, 0, 1]).unwrap();
        assert_eq!(
            program.weeks().iter().map(|w| w.week_type).collect::<Vec<_>>(),
            vec![WeekType::Testing, WeekType::Training, WeekType::Deload]
        );
        assert_eq!(program.current_week(), 1);
    }

    #[rstest]
    fn test_entry_editing(mut program: Program) {
        program
            .add_entry(0, Day::Monday, entry("Dumbbell Curl", 2, 10))
            .unwrap();
        program.move_entry(0, Day::Monday, 2, 0).unwrap();
        assert_eq!(
            program
                .current_week_days()
                .day(Day::Monday)
                .iter()
                .map(|e| e.exercise.as_str())
                .collect::<Vec<_>>(),
            vec!["Dumbbell Curl", "Bench Press", "Triceps Pushdown"]
        );

        let old = program
            .replace_entry(0, Day::Monday, 1, entry("Incline Bench Press", 3, 8))
            .unwrap();
        assert_eq!(old.exercise, "Bench Press");
        assert_eq!(
            program.remove_entry(0, Day::Monday, 2).unwrap().exercise,
            "Triceps Pushdown"
        );
        assert_eq!(
            program.remove_entry(0, Day::Monday, 2),
            Err(ProgramError::EntryOutOfRange {
                week: 0,
                day: Day::Monday,
                index: 2,
                len: 2
            })
        );
        assert_eq!(program.clear_day(0, Day::Monday).unwrap().len(), 2);
        assert!(program.current_week_days().day(Day::Monday).is_empty());
    }

    #[rstest]
    fn test_apply_template(mut program: Program) {
        program.add_week(None, WeekType::Training, None).unwrap();
        program.set_current_week(1).unwrap();
        let mut days = WeekDays::default();
        days.day_mut(Day::Tuesday).push(entry("Pull-Up", 4, 8));

        program.apply_template(Some("Upper/Lower"), days.clone());

        assert_eq!(program.name, "Upper/Lower");
        assert_eq!(program.weeks()[1].days, days);
        assert!(!program.weeks()[0].days.is_empty());
    }

    #[test]
    fn test_one_rep_maxes() {
        let mut program = Program::default();
        program.set_one_rep_max("Bench Press", 100.0).unwrap();
        assert_eq!(
            program.set_one_rep_max("Barbell Squat", -5.0),
            Err(ProgramError::InvalidOneRepMax(-5.0))
        );
        assert_eq!(program.one_rep_max("Bench Press"), Some(100.0));
        assert_eq!(program.one_rep_max("Barbell Squat"), None);

        let entry = ExerciseEntry::new("Bench Press", Sets::new(3).unwrap(), Reps::new(3).unwrap());
        assert_approx_eq!(program.suggested_weight(&entry).unwrap(), 100.0 / 1.1);
        assert_eq!(program.remove_one_rep_max("Bench Press"), Some(100.0));
        assert_eq!(program.suggested_weight(&entry), None);
    }

    #[rstest]
    #[case::merge(false, vec![("Barbell Squat", 140.0), ("Bench Press", 105.0), ("Pull-Up", 20.0)])]
    #[case::replace(true, vec![("Barbell Squat", 140.0), ("Bench Press", 105.0)])]
    fn test_merge_one_rep_maxes(#[case] replace: bool, #[case] expected: Vec<(&str, f64)>) {
        let mut program = Program::default();
        program.set_one_rep_max("Bench Press", 100.0).unwrap();
        program.set_one_rep_max("Pull-Up", 20.0).unwrap();

        let stored = program.merge_one_rep_maxes(
            BTreeMap::from([
                ("Bench Press".to_string(), 105.0),
                ("Barbell Squat".to_string(), 140.0),
                ("Deadlift".to_string(), f64::NAN),
            ]),
            replace,
        );

        assert_eq!(stored, 2);
        assert_eq!(
            program.one_rep_maxes().clone(),
            expected
                .into_iter()
                .map(|(n, v)| (n.to_string(), v))
                .collect::<BTreeMap<_, _>>()
        );
    }

    #[rstest]
    #[case::blank_name(BTreeMap::from([("  ".to_string(), 120.0)]))]
    #[case::invalid_value(BTreeMap::from([("Deadlift".to_string(), 0.0)]))]
    #[case::empty(BTreeMap::new())]
    fn test_replace_one_rep_maxes_without_valid_values(#[case] values: BTreeMap<String, f64>) {
        let mut program = Program::default();
        program.set_one_rep_max("Bench Press", 100.0).unwrap();

        assert_eq!(program.merge_one_rep_maxes(values, true), 0);
        assert_eq!(
            program.one_rep_maxes().clone(),
            BTreeMap::from([("Bench Press".to_string(), 100.0)])
        );
    }
}
