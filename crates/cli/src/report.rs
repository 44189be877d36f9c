use std::fmt::{self, Write};

use fracsets_domain::{
    Analysis, BodyRegion, Day, LiftVolume, MovementPattern, MuscleBalance, MuscleContribution,
    MuscleVolume, Program, ProgramStats, Property, StrengthDetails, VolumeStats, Week,
    load_recommendations, recommended_frequency,
};

/// Renders a report into a string.
pub fn render(report: impl FnOnce(&mut String) -> fmt::Result) -> Result<String, fmt::Error> {
    let mut out = String::new();
    report(&mut out)?;
    Ok(out)
}

pub fn program(out: &mut impl Write, program: &Program) -> fmt::Result {
    writeln!(out, "{}", program.name)?;
    for (index, week) in program.weeks().iter().enumerate() {
        let marker = if index == program.current_week() {
            "*"
        } else {
            " "
        };
        writeln!(out, "{marker} {}. {} [{}]", index + 1, week.name, week.week_type.name())?;
    }
    if !program.one_rep_maxes().is_empty() {
        writeln!(out)?;
        writeln!(out, "1RM")?;
        for (exercise, one_rep_max) in program.one_rep_maxes() {
            writeln!(out, "  {exercise}: {one_rep_max:.1}")?;
        }
    }
    Ok(())
}

pub fn week(out: &mut impl Write, program: &Program, week: &Week) -> fmt::Result {
    writeln!(out, "{} [{}]", week.name, week.week_type.name())?;
    if !week.notes.is_empty() {
        writeln!(out, "{}", week.notes)?;
    }
    for (day, entries) in week.days.iter() {
        if entries.is_empty() {
            continue;
        }
        writeln!(out)?;
        writeln!(out, "{}", day.name())?;
        for (index, entry) in entries.iter().enumerate() {
            write!(
                out,
                "  {}. {} {}x{} [{}, RIR {}]",
                index + 1,
                entry.exercise,
                entry.sets,
                entry.reps,
                entry.reps.goal().name(),
                entry.reps.goal_rir()
            )?;
            if let Some(weight) = program.suggested_weight(entry) {
                write!(out, " ~{weight:.1}")?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

fn day_header(out: &mut impl Write, label: &str) -> fmt::Result {
    write!(out, "{label:<28}")?;
    for day in Day::iter() {
        write!(out, "{:>6}", &day.name()[..3])?;
    }
    writeln!(out, "{:>8}", "Total")
}

fn day_row(out: &mut impl Write, label: &str, per_day: &[(Day, f64)], total: f64) -> fmt::Result {
    write!(out, "{label:<28}")?;
    for day in Day::iter() {
        match per_day.iter().find(|(d, _)| d == day) {
            Some((_, sets)) => write!(out, "{sets:>6.1}")?,
            None => write!(out, "{:>6}", "-")?,
        }
    }
    writeln!(out, "{total:>8.1}")
}

pub fn hypertrophy_volume(out: &mut impl Write, volume: &MuscleVolume) -> fmt::Result {
    writeln!(out, "Hypertrophy volume (fractional sets)")?;
    if volume.is_empty() {
        return writeln!(out, "  no hypertrophy work");
    }
    day_header(out, "Muscle")?;
    for muscle in volume.keys() {
        day_row(
            out,
            &muscle.to_string(),
            &volume.per_day(muscle),
            volume.total(muscle),
        )?;
    }
    Ok(())
}

pub fn strength_volume(out: &mut impl Write, volume: &LiftVolume) -> fmt::Result {
    writeln!(out, "Strength volume (fractional sets)")?;
    if volume.is_empty() {
        return writeln!(out, "  no strength work");
    }
    day_header(out, "Exercise")?;
    for exercise in volume.keys() {
        day_row(out, exercise, &volume.per_day(exercise), volume.total(exercise))?;
    }
    Ok(())
}

fn volume_stats(out: &mut impl Write, stats: &VolumeStats, indent: &str) -> fmt::Result {
    writeln!(
        out,
        "{indent}{} sets ({} strength, {} hypertrophy)",
        stats.total_sets, stats.strength_sets, stats.hypertrophy_sets
    )?;
    let regions = BodyRegion::iter()
        .map(|r| format!("{} {}", r.name(), stats.region(*r)))
        .collect::<Vec<_>>();
    writeln!(out, "{indent}Regions: {}", regions.join(", "))?;
    let movements = MovementPattern::iter()
        .map(|m| format!("{} {}", m.name(), stats.movement(*m)))
        .collect::<Vec<_>>();
    writeln!(out, "{indent}Movements: {}", movements.join(", "))
}

pub fn program_stats(out: &mut impl Write, stats: &ProgramStats) -> fmt::Result {
    writeln!(out, "Program")?;
    volume_stats(out, &stats.totals, "  ")?;
    for week in &stats.weeks {
        writeln!(
            out,
            "{}. {} [{}]",
            week.index + 1,
            week.name,
            week.week_type.name()
        )?;
        volume_stats(out, &week.stats, "  ")?;
    }
    if !stats.totals.muscle_breakdown.is_empty() {
        writeln!(out, "Muscle breakdown")?;
        for (muscle, sets) in &stats.totals.muscle_breakdown {
            writeln!(out, "  {muscle}: {sets:.1}")?;
        }
    }
    Ok(())
}

pub fn balance(out: &mut impl Write, balance: &MuscleBalance) -> fmt::Result {
    writeln!(out, "Push {:.1} / Pull {:.1}", balance.push, balance.pull)?;
    match (balance.pull_push_ratio(), balance.assessment()) {
        (Some(ratio), Some(assessment)) => {
            writeln!(out, "  Pull:Push {ratio:.2} ({})", assessment.name())?;
        }
        _ => writeln!(out, "  Pull:Push n/a")?,
    }
    writeln!(out, "Upper {:.1} / Lower {:.1}", balance.upper, balance.lower)?;
    match balance.lower_upper_ratio() {
        Some(ratio) => writeln!(out, "  Lower:Upper {ratio:.2}"),
        None => writeln!(out, "  Lower:Upper n/a"),
    }
}

pub fn analysis(out: &mut impl Write, analysis: &Analysis) -> fmt::Result {
    let guidelines = &analysis.guidelines;
    let hypertrophy = &analysis.hypertrophy;
    writeln!(
        out,
        "Hypertrophy (practical {}-{}, range {}-{}, max {} per session)",
        guidelines.hypertrophy.practical_low,
        guidelines.hypertrophy.practical_high,
        guidelines.hypertrophy.minimum,
        guidelines.hypertrophy.maximum,
        guidelines.per_session_max
    )?;
    for muscle in &hypertrophy.muscles {
        let (low, high) = recommended_frequency(muscle.total);
        write!(
            out,
            "  {:<24}{:>6.1}  {:<16} {low}-{high}x/week",
            muscle.muscle.to_string(),
            muscle.total,
            muscle.status.name()
        )?;
        if muscle.session_warning {
            write!(out, "  max session {:.1}", muscle.max_session)?;
        }
        writeln!(out)?;
    }
    findings(out, "Issues", hypertrophy.issues.iter())?;
    findings(out, "Suggestions", hypertrophy.suggestions.iter())?;

    let strength = &analysis.strength;
    writeln!(
        out,
        "Strength (practical {}-{}, range {}-{}, {}-{}x/week)",
        guidelines.strength.practical_low,
        guidelines.strength.practical_high,
        guidelines.strength.minimum,
        guidelines.strength.maximum,
        guidelines.strength_frequency.0,
        guidelines.strength_frequency.1
    )?;
    for lift in &strength.lifts {
        writeln!(
            out,
            "  {:<24}{:>6} direct {:>6.1} total  {:<16} {}x/week",
            lift.exercise,
            lift.direct_sets,
            lift.total_fractional,
            lift.status.name(),
            lift.days_trained
        )?;
    }
    findings(out, "Issues", strength.issues.iter())?;
    findings(out, "Suggestions", strength.suggestions.iter())?;
    if let Some(big5) = &strength.big5 {
        for (category, entries) in &big5.covered {
            let exercises = entries
                .iter()
                .map(|e| format!("{} {}x{}", e.exercise, e.sets, e.reps))
                .collect::<Vec<_>>();
            writeln!(out, "  Big 5 {}: {}", category.name(), exercises.join(", "))?;
        }
    }

    writeln!(
        out,
        "Frequency ({} training days)",
        analysis.frequency.training_days
    )?;
    for load in &analysis.frequency.days {
        writeln!(
            out,
            "  {:<10}{:>3} exercises {:>4} sets ({} strength, {} hypertrophy)",
            load.day.name(),
            load.exercises,
            load.total_sets,
            load.strength_sets,
            load.hypertrophy_sets
        )?;
    }

    if !analysis.muscle_suggestions.is_empty() || !analysis.lift_suggestions.is_empty() {
        writeln!(out, "Exercise suggestions")?;
    }
    for suggestion in &analysis.muscle_suggestions {
        writeln!(
            out,
            "  {}: {:.1} of {} sets, add ~{} sets in each of 2 sessions: {}",
            suggestion.muscle,
            suggestion.current,
            suggestion.target,
            suggestion.sets_per_session(),
            suggestion.exercises.join(", ")
        )?;
    }
    for suggestion in &analysis.lift_suggestions {
        writeln!(
            out,
            "  {}: {} of {} direct sets, add {:.0} sets over {} more day(s)",
            suggestion.exercise,
            suggestion.current,
            suggestion.target,
            suggestion.deficit.ceil(),
            suggestion.extra_days
        )?;
    }
    Ok(())
}

fn findings<'a, T: fmt::Display + 'a>(
    out: &mut impl Write,
    title: &str,
    findings: impl ExactSizeIterator<Item = &'a T>,
) -> fmt::Result {
    if findings.len() == 0 {
        return Ok(());
    }
    writeln!(out, "  {title}")?;
    for finding in findings {
        writeln!(out, "    - {finding}")?;
    }
    Ok(())
}

pub fn contributors(
    out: &mut impl Write,
    muscle: &str,
    contributions: &[MuscleContribution],
) -> fmt::Result {
    writeln!(out, "{muscle}")?;
    if contributions.is_empty() {
        return writeln!(out, "  no hypertrophy work");
    }
    for c in contributions {
        writeln!(
            out,
            "  {:<10}{} {}x{} ({}) {:.1}",
            c.day.name(),
            c.exercise,
            c.sets,
            c.reps,
            c.stimulus.name(),
            c.contribution
        )?;
    }
    let total = contributions.iter().map(|c| c.contribution).sum::<f64>();
    writeln!(out, "  Total {total:.1}")
}

pub fn strength_details(out: &mut impl Write, exercise: &str, details: &StrengthDetails) -> fmt::Result {
    writeln!(out, "{exercise}")?;
    writeln!(out, "  Direct")?;
    for entry in &details.direct {
        writeln!(out, "    {:<10}{}x{}", entry.day.name(), entry.sets, entry.reps)?;
    }
    writeln!(out, "  Indirect")?;
    for entry in &details.indirect {
        let shared = entry
            .shared_muscles
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        writeln!(
            out,
            "    {:<10}{} {}x{} ({}) {:.1}",
            entry.day.name(),
            entry.exercise,
            entry.sets,
            entry.reps,
            shared.join(", "),
            entry.contribution
        )?;
    }
    Ok(())
}

pub fn loads(out: &mut impl Write, exercise: &str, one_rep_max: f64) -> fmt::Result {
    writeln!(out, "{exercise} (1RM {one_rep_max:.1})")?;
    for (zone, recommendations) in load_recommendations(one_rep_max) {
        writeln!(out, "  {}", zone.description())?;
        for r in recommendations {
            writeln!(
                out,
                "    {:>2} reps {:>3}% {:>7.1}",
                r.reps, r.percentage, r.weight
            )?;
        }
    }
    Ok(())
}
