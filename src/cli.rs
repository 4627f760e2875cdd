use std::path::PathBuf;

use clap::builder::RangedI64ValueParser;
use clap::{Parser, Subcommand};
use tongshu::Date;
use tongshu::date::{MAX_YEAR, MIN_YEAR};

/// Longest look-ahead accepted by `deity upcoming`, about a hundred years.
const MAX_UPCOMING_DAYS: i64 = 36_600;

fn year_parser() -> RangedI64ValueParser<i32> {
    clap::value_parser!(i32).range(i64::from(MIN_YEAR)..=i64::from(MAX_YEAR))
}

/// 通書：日干支、農曆、拜拜吉凶與神明聖誕查詢。
#[derive(Parser)]
#[command(
    name = "tongshu",
    version,
    about = "Sexagenary day fortunes, lunar dates and deity birthdays"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to TOML configuration file [default: tongshu.toml].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show the almanac entry for one day (today if no date is given).
    Day(DayArgs),
    /// Show every day of a Gregorian month with its fortune.
    Month(MonthArgs),
    /// Convert a lunar date to its Gregorian date.
    Lunar(LunarArgs),
    /// Show the sixty-day fortune table.
    Table,
    /// Look up deity birthdays.
    #[command(subcommand)]
    Deity(DeityCommand),
    /// Verify the day-label calculation against reference dates.
    Check,
}

/// Arguments for the `day` subcommand.
#[derive(clap::Args)]
pub struct DayArgs {
    /// Gregorian date as YYYY-MM-DD.
    pub date: Option<Date>,

    /// Hour of day (0-23); 23 belongs to the next day under the zi-hour boundary.
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
    pub hour: Option<u32>,

    /// Change days at midnight instead of at the zi hour.
    #[arg(long)]
    pub midnight: bool,
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    #[arg(value_parser = year_parser(), allow_negative_numbers = true)]
    pub year: i32,
    #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: u32,
}

/// Arguments for the `lunar` subcommand.
#[derive(clap::Args)]
pub struct LunarArgs {
    #[arg(value_parser = year_parser(), allow_negative_numbers = true)]
    pub year: i32,
    pub month: u32,
    pub day: u32,

    /// The month is the leap month of that number.
    #[arg(long)]
    pub leap: bool,
}

/// Deity birthday queries.
#[derive(Subcommand)]
pub enum DeityCommand {
    /// Search deity names and notes.
    Search {
        term: String,
    },
    /// Birthdays from today through the next N days.
    Upcoming {
        /// Number of days to look ahead [default: from config].
        #[arg(long, value_parser = clap::value_parser!(u32).range(..=MAX_UPCOMING_DAYS))]
        days: Option<u32>,
    },
    /// Birthdays falling in a Gregorian month.
    Monthly {
        #[arg(value_parser = year_parser(), allow_negative_numbers = true)]
        year: i32,
        #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,
    },
}
