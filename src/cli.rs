use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tempora_calendar::{DateField, DateUnit, RoundingMode};

/// Tempora calendar toolkit.
#[derive(Parser)]
#[command(
    name = "tempora",
    version,
    about = "Calendar arithmetic over a hybrid Julian/Gregorian calendar"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (defaults to ./tempora.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show the calendar fields of an instant.
    Fields(FieldsArgs),
    /// Add an amount of a unit to an instant.
    Add(AddArgs),
    /// Count whole units between two instants.
    Between(BetweenArgs),
    /// Snap an instant back to the start of a field period.
    Truncate(TruncateArgs),
    /// Round an instant to a field boundary.
    Round(RoundArgs),
    /// Relate two periods and show their set operations.
    Relate(RelateArgs),
}

/// Arguments for the `fields` subcommand.
#[derive(clap::Args)]
pub struct FieldsArgs {
    /// Local date-time, e.g. `1973-01-22T12:30:30.500` or `0044-03-15 BC`.
    pub instant: String,

    /// Print a JSON object instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `add` subcommand.
#[derive(clap::Args)]
pub struct AddArgs {
    /// Local date-time to start from.
    pub instant: String,

    /// Number of units to add; may be negative.
    #[arg(allow_negative_numbers = true)]
    pub amount: i64,

    /// Unit to add (years, months, weeks, days, hours, minutes, seconds, ms).
    pub unit: DateUnit,
}

/// Arguments for the `between` subcommand.
#[derive(clap::Args)]
pub struct BetweenArgs {
    /// Start of the span.
    pub start: String,

    /// End of the span.
    pub end: String,

    /// Unit to count.
    pub unit: DateUnit,
}

/// Arguments for the `truncate` subcommand.
#[derive(clap::Args)]
pub struct TruncateArgs {
    /// Local date-time to truncate.
    pub instant: String,

    /// Field to truncate to (year, month, day, hour, minute, second).
    pub field: DateField,
}

/// Arguments for the `round` subcommand.
#[derive(clap::Args)]
pub struct RoundArgs {
    /// Local date-time to round.
    pub instant: String,

    /// Field to round to.
    pub field: DateField,

    /// Override the rounding mode from config.
    #[arg(short, long)]
    pub mode: Option<RoundingMode>,
}

/// Arguments for the `relate` subcommand.
#[derive(clap::Args)]
pub struct RelateArgs {
    /// Start of the first period.
    pub a_start: String,

    /// End of the first period.
    pub a_end: String,

    /// Start of the second period.
    pub b_start: String,

    /// End of the second period.
    pub b_end: String,

    /// Print a JSON object instead of text.
    #[arg(long)]
    pub json: bool,
}
