#![warn(clippy::pedantic)]

//! Plans training programs and evaluates their weekly volume in fractional sets.
//!
//! ```bash
//! fracsets new "Upper Lower"
//! fracsets entry add monday "Bench Press" 4 8
//! fracsets week add --copy-from 1 --type deload
//! fracsets report analyze --week 2
//! fracsets rm set "Bench Press" 110
//! ```

mod log;
mod report;
mod settings;

use std::{
    collections::HashSet,
    fmt::Write as _,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use fracsets_domain::{
    Day, Equipment, Exercise, ExerciseCatalog, ExerciseEntry, ExerciseFilter, Muscle, Program,
    Property,
    Reps, Sets, WeekType, analyze_week, hypertrophy_volume, muscle_balance, muscle_contributors,
    program_stats, strength_details, strength_volume, week_stats,
};
use fracsets_storage::{
    FileRepository, ImportReport, Repository, apply_template, export_custom_exercises,
    export_custom_source, export_one_rep_maxes, import_custom_exercises, import_one_rep_maxes,
    import_program,
};

use settings::Settings;

#[derive(Parser)]
#[command(
    name = "fracsets",
    version,
    about = "Training program planner with fractional set volume analysis"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Program document
    #[arg(long, short = 'p', global = true, default_value = "program.json")]
    program: PathBuf,

    /// Settings file (defaults to fracsets.json if present)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new program document
    New {
        name: Option<String>,

        /// Overwrite an existing document
        #[arg(long)]
        force: bool,
    },

    /// Convert a program document of any format version into the program
    Import {
        file: PathBuf,

        #[arg(long)]
        force: bool,
    },

    /// Show the weeks of the program and the entries of a week
    Show {
        /// Week number (defaults to the current week)
        #[arg(long, short = 'w')]
        week: Option<usize>,
    },

    /// Select the current week
    Select { week: usize },

    /// Week management
    Week {
        #[command(subcommand)]
        action: WeekCommand,
    },

    /// Exercise entries of a week
    Entry {
        #[command(subcommand)]
        action: EntryCommand,
    },

    /// Volume reports and analysis
    Report {
        #[command(subcommand)]
        action: ReportCommand,
    },

    /// One-rep maxes
    Rm {
        #[command(subcommand)]
        action: RmCommand,
    },

    /// Program templates
    Template {
        #[command(subcommand)]
        action: TemplateCommand,
    },

    /// Custom exercise collections
    Custom {
        #[command(subcommand)]
        action: CustomCommand,
    },

    /// Search the exercise catalog
    Exercises {
        /// Part of the exercise name
        #[arg(long, default_value = "")]
        name: String,

        /// Targeted muscle (repeatable, all must match)
        #[arg(long)]
        muscle: Vec<String>,

        /// Equipment (repeatable, any may match)
        #[arg(long)]
        equipment: Vec<String>,
    },

    /// Show the most recent log entries
    Log,
}

#[derive(Subcommand)]
enum WeekCommand {
    /// Append a week
    Add {
        /// Copy the entries of this week
        #[arg(long)]
        copy_from: Option<usize>,

        #[arg(long = "type", default_value = "training", value_parser = parse_week_type)]
        week_type: WeekType,

        #[arg(long)]
        name: Option<String>,
    },

    /// Delete a week
    Delete { week: usize },

    /// Copy a week, by default right after the source
    Copy {
        week: usize,

        /// Position of the copy
        #[arg(long)]
        to: Option<usize>,
    },

    /// Change the type of a week
    Type {
        week: usize,

        #[arg(value_parser = parse_week_type)]
        week_type: WeekType,

        /// Rescale the sets by the volume modifier of the new type
        #[arg(long)]
        apply: bool,
    },

    /// Scale the sets of a week and mark it as deload
    Deload {
        week: usize,

        #[arg(long, default_value_t = 0.5)]
        modifier: f64,
    },

    Rename { week: usize, name: String },

    Notes { week: usize, notes: String },

    /// Reorder the weeks, e.g. `reorder 2 1 3`
    Reorder {
        #[arg(required = true)]
        order: Vec<usize>,
    },

    /// Replace the entries of a day with those of another day
    CopyDay {
        #[arg(value_parser = parse_day)]
        source: Day,

        #[arg(value_parser = parse_day)]
        target: Day,

        #[arg(long, short = 'w')]
        week: Option<usize>,
    },
}

#[derive(Subcommand)]
enum EntryCommand {
    Add {
        #[arg(value_parser = parse_day)]
        day: Day,
        exercise: String,
        #[arg(value_parser = parse_sets)]
        sets: Sets,
        #[arg(value_parser = parse_reps)]
        reps: Reps,

        #[arg(long, short = 'w')]
        week: Option<usize>,
    },

    Replace {
        #[arg(value_parser = parse_day)]
        day: Day,
        index: usize,
        exercise: String,
        #[arg(value_parser = parse_sets)]
        sets: Sets,
        #[arg(value_parser = parse_reps)]
        reps: Reps,

        #[arg(long, short = 'w')]
        week: Option<usize>,
    },

    Remove {
        #[arg(value_parser = parse_day)]
        day: Day,
        index: usize,

        #[arg(long, short = 'w')]
        week: Option<usize>,
    },

    Move {
        #[arg(value_parser = parse_day)]
        day: Day,
        from: usize,
        to: usize,

        #[arg(long, short = 'w')]
        week: Option<usize>,
    },

    /// Remove all entries of a day
    Clear {
        #[arg(value_parser = parse_day)]
        day: Day,

        #[arg(long, short = 'w')]
        week: Option<usize>,
    },
}

#[derive(Subcommand)]
enum ReportCommand {
    /// Hypertrophy and strength volume per day
    Volume {
        #[arg(long, short = 'w')]
        week: Option<usize>,
    },

    /// Set counts of the whole program
    Stats,

    /// Compare the volume of a week with the guidelines
    Analyze {
        #[arg(long, short = 'w')]
        week: Option<usize>,
    },

    /// Push/pull and upper/lower balance
    Balance {
        #[arg(long, short = 'w')]
        week: Option<usize>,
    },

    /// Entries contributing to the volume of a muscle
    Muscle {
        muscle: String,

        #[arg(long, short = 'w')]
        week: Option<usize>,
    },

    /// Direct and indirect strength work of a lift
    Lift {
        exercise: String,

        #[arg(long, short = 'w')]
        week: Option<usize>,
    },
}

#[derive(Subcommand)]
enum RmCommand {
    Set { exercise: String, value: f64 },

    Remove { exercise: String },

    /// Import one-rep maxes from a JSON map or list
    Import {
        file: PathBuf,

        /// Replace all existing values
        #[arg(long)]
        replace: bool,
    },

    Export,

    /// Loads per rep count for a lift
    Loads { exercise: String },
}

#[derive(Subcommand)]
enum TemplateCommand {
    List,

    /// Replace the current week with a template
    Apply { category: String, name: String },
}

#[derive(Subcommand)]
enum CustomCommand {
    /// Import exercises from a JSON file
    Import {
        file: PathBuf,

        /// Collection name (defaults to the file name)
        #[arg(long)]
        source: Option<String>,
    },

    Export {
        #[arg(long)]
        source: Option<String>,
    },

    /// Remove an exercise or a whole collection
    Remove { source: String, name: Option<String> },
}

fn parse_day(value: &str) -> Result<Day, String> {
    Day::try_from(value).map_err(|err| err.to_string())
}

fn parse_sets(value: &str) -> Result<Sets, String> {
    Sets::try_from(value).map_err(|err| err.to_string())
}

fn parse_reps(value: &str) -> Result<Reps, String> {
    Reps::try_from(value).map_err(|err| err.to_string())
}

fn parse_week_type(value: &str) -> Result<WeekType, String> {
    WeekType::from_key(&value.to_lowercase())
        .or_else(|| WeekType::from_name(value))
        .ok_or_else(|| {
            let keys = WeekType::iter().map(|t| t.key()).collect::<Vec<_>>();
            format!("expected one of {}", keys.join(", "))
        })
}

/// Converts a one-based number given on the command line.
fn index(number: usize) -> Result<usize> {
    number
        .checked_sub(1)
        .ok_or_else(|| anyhow!("numbers start at 1"))
}

fn week_index(program: &Program, week: Option<usize>) -> Result<usize> {
    match week {
        Some(week) => index(week),
        None => Ok(program.current_week()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.settings.as_deref()).context("failed to load settings")?;

    let level = if cli.verbose {
        ::log::LevelFilter::Debug
    } else {
        settings.log_level.into()
    };
    let log_file = settings
        .data_dir
        .is_dir()
        .then(|| settings.log_file());
    log::init(level, log_file.as_deref())?;

    let result = run(cli, &settings);
    if let Err(err) = &result {
        ::log::error!("{err:#}");
    }
    ::log::logger().flush();
    result
}

fn run(cli: Cli, settings: &Settings) -> Result<()> {
    let repository = settings.repository();
    let path = cli.program.as_path();

    match cli.command {
        Command::New { name, force } => {
            let program = name.as_deref().map_or_else(Program::default, Program::new);
            create(&repository, path, &program, force)?;
            println!("created {}", path.display());
        }
        Command::Import { file, force } => {
            let text = read_file(&file)?;
            let document = serde_json::from_str(&text)
                .with_context(|| format!("invalid JSON in {}", file.display()))?;
            let program = import_program(&document)
                .with_context(|| format!("failed to import {}", file.display()))?;
            create(&repository, path, &program, force)?;
            println!(
                "imported \"{}\" with {} week(s)",
                program.name,
                program.weeks().len()
            );
        }
        Command::Show { week } => {
            let program = read_program(&repository, path)?;
            let week = program.week(week_index(&program, week)?)?;
            print!("{}", report::render(|out| report::program(out, &program))?);
            println!();
            print!("{}", report::render(|out| report::week(out, &program, week))?);
        }
        Command::Select { week } => {
            modify(&repository, path, |program| {
                Ok(program.set_current_week(index(week)?)?)
            })?;
        }
        Command::Week { action } => modify(&repository, path, |program| week(program, action))?,
        Command::Entry { action } => modify(&repository, path, |program| entry(program, action))?,
        Command::Report { action } => {
            let mut program = read_program(&repository, path)?;
            settings.apply_profile(&mut program)?;
            report(&repository, &program, action)?;
        }
        Command::Rm { action } => one_rep_max(&repository, path, action)?,
        Command::Template { action } => template(&repository, path, action)?,
        Command::Custom { action } => custom(&repository, action)?,
        Command::Exercises {
            name,
            muscle,
            equipment,
        } => exercises(&repository, name, &muscle, &equipment)?,
        Command::Log => {
            for entry in log::entries() {
                println!("{} {:<5} {}", entry.time, entry.level, entry.message);
            }
        }
    }

    Ok(())
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn read_program(repository: &FileRepository, path: &Path) -> Result<Program> {
    repository
        .read_program(path)
        .context("failed to load program")
}

fn create(repository: &FileRepository, path: &Path, program: &Program, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists, use --force to overwrite", path.display());
    }
    Ok(repository.write_program(path, program)?)
}

/// Applies a change to the stored program. Nothing is written if the change
/// fails.
fn modify(
    repository: &FileRepository,
    path: &Path,
    change: impl FnOnce(&mut Program) -> Result<()>,
) -> Result<()> {
    let mut program = read_program(repository, path)?;
    change(&mut program)?;
    repository.write_program(path, &program)?;
    Ok(())
}

fn week(program: &mut Program, action: WeekCommand) -> Result<()> {
    match action {
        WeekCommand::Add {
            copy_from,
            week_type,
            name,
        } => {
            let copy_from = copy_from.map(index).transpose()?;
            let index = program.add_week(copy_from, week_type, name.as_deref())?;
            println!("added {}", program.week(index)?.name);
        }
        WeekCommand::Delete { week } => {
            let week = program.delete_week(index(week)?)?;
            println!("deleted {}", week.name);
        }
        WeekCommand::Copy { week, to } => {
            let to = to.map(index).transpose()?;
            let index = program.copy_week(index(week)?, to)?;
            println!("added {} as week {}", program.week(index)?.name, index + 1);
        }
        WeekCommand::Type {
            week,
            week_type,
            apply,
        } => program.set_week_type(index(week)?, week_type, apply)?,
        WeekCommand::Deload { week, modifier } => {
            program.apply_deload_modifier(index(week)?, modifier)?;
        }
        WeekCommand::Rename { week, name } => program.rename_week(index(week)?, &name)?,
        WeekCommand::Notes { week, notes } => program.set_week_notes(index(week)?, &notes)?,
        WeekCommand::Reorder { order } => {
            let order = order.into_iter().map(index).collect::<Result<Vec<_>>>()?;
            program.reorder_weeks(&order)?;
        }
        WeekCommand::CopyDay {
            source,
            target,
            week,
        } => {
            let week = week.map(index).transpose()?;
            program.copy_day_to_day(source, target, week)?;
        }
    }
    Ok(())
}

fn entry(program: &mut Program, action: EntryCommand) -> Result<()> {
    match action {
        EntryCommand::Add {
            day,
            exercise,
            sets,
            reps,
            week,
        } => {
            let week = week_index(program, week)?;
            program.add_entry(week, day, ExerciseEntry::new(&exercise, sets, reps))?;
        }
        EntryCommand::Replace {
            day,
            index: number,
            exercise,
            sets,
            reps,
            week,
        } => {
            let week = week_index(program, week)?;
            program.replace_entry(
                week,
                day,
                index(number)?,
                ExerciseEntry::new(&exercise, sets, reps),
            )?;
        }
        EntryCommand::Remove {
            day,
            index: number,
            week,
        } => {
            let week = week_index(program, week)?;
            let entry = program.remove_entry(week, day, index(number)?)?;
            println!("removed {} {}x{}", entry.exercise, entry.sets, entry.reps);
        }
        EntryCommand::Move { day, from, to, week } => {
            let week = week_index(program, week)?;
            program.move_entry(week, day, index(from)?, index(to)?)?;
        }
        EntryCommand::Clear { day, week } => {
            let week = week_index(program, week)?;
            let entries = program.clear_day(week, day)?;
            println!("removed {} entries", entries.len());
        }
    }
    Ok(())
}

fn report(repository: &FileRepository, program: &Program, action: ReportCommand) -> Result<()> {
    let catalog = repository
        .read_full_catalog()
        .context("failed to load exercise catalog")?;

    let text = match action {
        ReportCommand::Volume { week } => {
            let days = &program.week(week_index(program, week)?)?.days;
            let hypertrophy = hypertrophy_volume(days, &catalog);
            let strength = strength_volume(days, &catalog);
            let stats = week_stats(days, &catalog);
            report::render(|out| {
                report::hypertrophy_volume(out, &hypertrophy)?;
                writeln!(out)?;
                report::strength_volume(out, &strength)?;
                writeln!(out)?;
                writeln!(
                    out,
                    "{} sets ({} strength, {} hypertrophy)",
                    stats.total_sets, stats.strength_sets, stats.hypertrophy_sets
                )
            })?
        }
        ReportCommand::Stats => {
            let stats = program_stats(program, &catalog);
            report::render(|out| report::program_stats(out, &stats))?
        }
        ReportCommand::Analyze { week } => {
            let days = &program.week(week_index(program, week)?)?.days;
            let analysis = analyze_week(days, &catalog, &program.profile);
            report::render(|out| report::analysis(out, &analysis))?
        }
        ReportCommand::Balance { week } => {
            let days = &program.week(week_index(program, week)?)?.days;
            let balance = muscle_balance(&week_stats(days, &catalog).muscle_breakdown);
            report::render(|out| report::balance(out, &balance))?
        }
        ReportCommand::Muscle { muscle, week } => {
            let days = &program.week(week_index(program, week)?)?.days;
            let muscle = parse_muscle(&muscle, catalog.exercises())?;
            let contributions = muscle_contributors(&muscle, days, &catalog);
            report::render(|out| report::contributors(out, &muscle.to_string(), &contributions))?
        }
        ReportCommand::Lift { exercise, week } => {
            let days = &program.week(week_index(program, week)?)?.days;
            if catalog.lookup(&exercise).is_none() {
                bail!("unknown exercise \"{exercise}\"");
            }
            let details = strength_details(&exercise, days, &catalog);
            report::render(|out| report::strength_details(out, &exercise, &details))?
        }
    };

    print!("{text}");
    Ok(())
}

fn print_import_report(report: &ImportReport) {
    println!("imported {}, failed {}", report.imported, report.failed());
    for error in &report.errors {
        println!("  {error}");
    }
}

fn one_rep_max(repository: &FileRepository, path: &Path, action: RmCommand) -> Result<()> {
    match action {
        RmCommand::Set { exercise, value } => modify(repository, path, |program| {
            Ok(program.set_one_rep_max(&exercise, value)?)
        }),
        RmCommand::Remove { exercise } => modify(repository, path, |program| {
            if program.remove_one_rep_max(&exercise).is_none() {
                bail!("no 1RM for \"{exercise}\"");
            }
            Ok(())
        }),
        RmCommand::Import { file, replace } => {
            let text = read_file(&file)?;
            let document = serde_json::from_str(&text)
                .with_context(|| format!("invalid JSON in {}", file.display()))?;
            modify(repository, path, |program| {
                let report = import_one_rep_maxes(program, &document, replace)?;
                print_import_report(&report);
                Ok(())
            })
        }
        RmCommand::Export => {
            let program = read_program(repository, path)?;
            println!("{}", export_one_rep_maxes(&program)?);
            Ok(())
        }
        RmCommand::Loads { exercise } => {
            let program = read_program(repository, path)?;
            let one_rep_max = program
                .one_rep_max(&exercise)
                .ok_or_else(|| anyhow!("no 1RM for \"{exercise}\""))?;
            print!(
                "{}",
                report::render(|out| report::loads(out, &exercise, one_rep_max))?
            );
            Ok(())
        }
    }
}

fn template(repository: &FileRepository, path: &Path, action: TemplateCommand) -> Result<()> {
    let templates = repository
        .read_templates()
        .context("failed to load templates")?;

    match action {
        TemplateCommand::List => {
            for (category, names) in templates.categories() {
                println!("{category}");
                for name in names {
                    println!("  {name}");
                }
            }
            Ok(())
        }
        TemplateCommand::Apply { category, name } => modify(repository, path, |program| {
            Ok(apply_template(program, &templates, &category, &name)?)
        }),
    }
}

fn custom(repository: &FileRepository, action: CustomCommand) -> Result<()> {
    let mut custom = repository
        .read_custom_exercises()
        .context("failed to load custom exercises")?;

    match action {
        CustomCommand::Import { file, source } => {
            let source = match source {
                Some(source) => source,
                None => file
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .ok_or_else(|| anyhow!("missing --source"))?,
            };
            let text = read_file(&file)?;
            let document = serde_json::from_str(&text)
                .with_context(|| format!("invalid JSON in {}", file.display()))?;
            let report = import_custom_exercises(&document, &source, &mut custom);
            print_import_report(&report);
            if report.imported > 0 {
                repository.write_custom_exercises(&custom)?;
            }
        }
        CustomCommand::Export { source } => {
            let text = match source {
                Some(source) => {
                    serde_json::to_string_pretty(&export_custom_source(&custom, &source))?
                }
                None => serde_json::to_string_pretty(&export_custom_exercises(&custom))?,
            };
            println!("{text}");
        }
        CustomCommand::Remove { source, name } => {
            match name {
                Some(name) => {
                    custom.remove(&source, &name)?;
                }
                None => {
                    custom
                        .remove_source(&source)
                        .ok_or_else(|| anyhow!("no collection \"{source}\""))?;
                }
            }
            repository.write_custom_exercises(&custom)?;
        }
    }
    Ok(())
}

fn exercises(
    repository: &FileRepository,
    name: String,
    muscles: &[String],
    equipment: &[String],
) -> Result<()> {
    let catalog = repository
        .read_full_catalog()
        .context("failed to load exercise catalog")?;
    let filter = ExerciseFilter {
        name,
        muscles: muscles
            .iter()
            .map(|m| parse_muscle(m, catalog.exercises()))
            .collect::<Result<HashSet<_>>>()?,
        equipment: equipment
            .iter()
            .map(|e| Equipment::from_name(e).ok_or_else(|| anyhow!("unknown equipment \"{e}\"")))
            .collect::<Result<HashSet<_>>>()?,
        ..ExerciseFilter::default()
    };

    for exercise in filter.exercises(catalog.exercises().iter()) {
        let muscles = exercise
            .primary_muscles
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        println!("{} ({})", exercise.name, muscles.join(", "));
    }
    Ok(())
}

/// Accepts the standard muscle groups and any muscle used by an exercise of
/// the catalog.
fn parse_muscle(name: &str, exercises: &[Exercise]) -> Result<Muscle> {
    let muscle = Muscle::new(name).ok_or_else(|| anyhow!("invalid muscle name \"{name}\""))?;
    if !muscle.is_known() && !exercises.iter().any(|e| e.muscles().contains(&muscle)) {
        bail!("unknown muscle \"{name}\"");
    }
    Ok(muscle)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::key("deload", Ok(WeekType::Deload))]
    #[case::upper_case_key("Volume", Ok(WeekType::Volume))]
    #[case::name("1RM Testing", Ok(WeekType::Testing))]
    #[case::unknown("peak", Err("expected one of training, deload, testing, intensification, volume".to_string()))]
    fn test_parse_week_type(#[case] value: &str, #[case] expected: Result<WeekType, String>) {
        assert_eq!(parse_week_type(value), expected);
    }

    #[rstest]
    #[case::known(" Front  Deltoids", Ok("front deltoids"))]
    #[case::catalog("Serratus", Ok("serratus"))]
    #[case::unknown("tongue", Err("unknown muscle \"tongue\""))]
    #[case::blank("  ", Err("invalid muscle name \"  \""))]
    fn test_parse_muscle(#[case] name: &str, #[case] expected: Result<&str, &str>) {
        let catalog = vec![Exercise::new("Cable Crunch", &["abdominals"], &["serratus"])];

        assert_eq!(
            parse_muscle(name, &catalog)
                .map(|muscle| muscle.as_ref().to_string())
                .map_err(|err| err.to_string()),
            expected.map(String::from).map_err(String::from)
        );
    }

    #[test]
    fn test_index() {
        assert_eq!(index(1).unwrap(), 0);
        assert!(index(0).is_err());
    }

    #[test]
    fn test_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_modify() {
        let dir = tempfile::tempdir().unwrap();
        let repository = FileRepository::new(dir.path());
        let path = dir.path().join("program.json");
        create(&repository, &path, &Program::new("Test"), false).unwrap();

        modify(&repository, &path, |program| {
            week(
                program,
                WeekCommand::Add {
                    copy_from: None,
                    week_type: WeekType::Deload,
                    name: None,
                },
            )
        })
        .unwrap();
        assert!(
            modify(&repository, &path, |program| {
                week(program, WeekCommand::Delete { week: 3 })
            })
            .is_err()
        );

        let program = read_program(&repository, &path).unwrap();
        assert_eq!(
            program
                .weeks()
                .iter()
                .map(|w| w.name.as_str())
                .collect::<Vec<_>>(),
            vec!["Week 1", "Week 2 (Deload)"]
        );
        assert!(create(&repository, &path, &program, false).is_err());
    }

    #[test]
    fn test_entry_numbers() {
        let mut program = Program::new("Test");
        for (exercise, sets) in [("Bench Press", 3), ("Squat", 4)] {
            entry(
                &mut program,
                EntryCommand::Add {
                    day: Day::Monday,
                    exercise: exercise.to_string(),
                    sets: Sets::new(sets).unwrap(),
                    reps: Reps::new(5).unwrap(),
                    week: None,
                },
            )
            .unwrap();
        }

        entry(
            &mut program,
            EntryCommand::Move {
                day: Day::Monday,
                from: 2,
                to: 1,
                week: Some(1),
            },
        )
        .unwrap();

        assert_eq!(
            program
                .current_week_days()
                .day(Day::Monday)
                .iter()
                .map(|e| e.exercise.as_str())
                .collect::<Vec<_>>(),
            vec!["Squat", "Bench Press"]
        );
    }
}
