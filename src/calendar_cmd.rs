//! Calendar commands: fields, add, between, truncate and round.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use tempora_calendar::{Chronology, Instant, RoundingMode};

use crate::cli::{AddArgs, BetweenArgs, FieldsArgs, RoundArgs, TruncateArgs};
use crate::convert;

/// Calendar view of a single instant.
#[derive(Debug, Serialize)]
pub struct FieldsReport {
    pub instant: String,
    pub epoch_millis: i64,
    pub era: String,
    pub year: i32,
    pub year_of_era: u32,
    pub month: u8,
    pub month_name: String,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
    pub day_of_week: String,
    pub day_of_year: u16,
    pub leap_year: bool,
    pub days_in_month: u8,
    pub days_in_year: u16,
}

/// Builds the calendar view of `instant`.
pub fn fields_report(chronology: &Chronology, instant: Instant) -> Result<FieldsReport> {
    let fields = chronology.fields(instant);
    let year = fields.year();
    Ok(FieldsReport {
        instant: chronology.format(instant),
        epoch_millis: instant.as_millis(),
        era: fields.era().to_string(),
        year,
        year_of_era: fields.year_of_era(),
        month: fields.month(),
        month_name: fields.month_of_year()?.to_string(),
        day: fields.day(),
        hour: fields.hour(),
        minute: fields.minute(),
        second: fields.second(),
        millisecond: fields.millisecond(),
        day_of_week: chronology.day_of_week(instant).to_string(),
        day_of_year: chronology.day_of_year(instant),
        leap_year: chronology.is_leap_year(year)?,
        days_in_month: chronology.days_in_month(year, fields.month())?,
        days_in_year: chronology.days_in_year(year)?,
    })
}

/// Renders a report as aligned `name: value` lines.
pub fn render_fields(report: &FieldsReport) -> String {
    let rows = [
        ("instant", report.instant.clone()),
        ("epoch millis", report.epoch_millis.to_string()),
        ("era", report.era.clone()),
        ("year of era", report.year_of_era.to_string()),
        ("month", format!("{} ({})", report.month, report.month_name)),
        ("day", report.day.to_string()),
        ("day of week", report.day_of_week.clone()),
        ("day of year", report.day_of_year.to_string()),
        ("leap year", report.leap_year.to_string()),
        ("days in month", report.days_in_month.to_string()),
        ("days in year", report.days_in_year.to_string()),
    ];
    rows.iter()
        .map(|(name, value)| format!("{:<14}{value}", format!("{name}:")))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn fields(args: FieldsArgs, chronology: &Chronology) -> Result<()> {
    let _cmd = info_span!("fields").entered();
    let instant = convert::parse_instant(chronology, &args.instant)?;
    let report = fields_report(chronology, instant)?;
    if args.json {
        let json = serde_json::to_string_pretty(&report).context("failed to serialize fields")?;
        println!("{json}");
    } else {
        println!("{}", render_fields(&report));
    }
    Ok(())
}

pub fn add(args: AddArgs, chronology: &Chronology) -> Result<()> {
    let _cmd = info_span!("add").entered();
    let instant = convert::parse_instant(chronology, &args.instant)?;
    let result = chronology
        .add(instant, args.amount, args.unit)
        .with_context(|| format!("cannot add {} {} to {}", args.amount, args.unit, args.instant))?;
    info!(amount = args.amount, unit = %args.unit, "added");
    println!("{}", chronology.format(result));
    Ok(())
}

pub fn between(args: BetweenArgs, chronology: &Chronology) -> Result<()> {
    let _cmd = info_span!("between").entered();
    let start = convert::parse_instant(chronology, &args.start)?;
    let end = convert::parse_instant(chronology, &args.end)?;
    let count = chronology
        .between(start, end, args.unit)
        .with_context(|| format!("cannot count {} between the instants", args.unit))?;
    println!("{count}");
    Ok(())
}

pub fn truncate(args: TruncateArgs, chronology: &Chronology) -> Result<()> {
    let _cmd = info_span!("truncate").entered();
    let instant = convert::parse_instant(chronology, &args.instant)?;
    let result = chronology
        .truncate(instant, args.field)
        .with_context(|| format!("cannot truncate to {}", args.field))?;
    println!("{}", chronology.format(result));
    Ok(())
}

/// Rounds with the mode from `--mode`, falling back to `default_mode`.
pub fn round(args: RoundArgs, chronology: &Chronology, default_mode: RoundingMode) -> Result<()> {
    let _cmd = info_span!("round").entered();
    let mode = args.mode.unwrap_or(default_mode);
    let instant = convert::parse_instant(chronology, &args.instant)?;
    let result = chronology
        .round(instant, args.field, mode)
        .with_context(|| format!("cannot round to {} with mode {mode}", args.field))?;
    info!(field = %args.field, %mode, "rounded");
    println!("{}", chronology.format(result));
    Ok(())
}
