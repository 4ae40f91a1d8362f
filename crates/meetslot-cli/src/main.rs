//! `meetslot` CLI -- find a common meeting slot from already-fetched busy data.
//!
//! Input is a JSON object mapping participant identifiers to lists of busy
//! intervals (`{"a@example.com": [{"start": "...", "end": "..."}]}`), the
//! shape a free/busy provider query returns once OAuth and the network call
//! have happened elsewhere.
//!
//! ## Usage
//!
//! ```sh
//! # Earliest common slot before the last day of work (stdin → stdout)
//! cat busy.json | meetslot find --last-day 12/19/2025
//!
//! # Same, from a file, with an explicit reference time and policy
//! meetslot find -i busy.json --last-day 2025-12-19 \
//!     --now 2025-12-01T12:00:00Z --timezone America/Chicago --min-minutes 30
//!
//! # Merged busy timeline as JSON
//! meetslot merge -i busy.json
//!
//! # Per-participant free/busy report
//! meetslot report -i busy.json
//! ```

use std::collections::HashMap;
use std::io::{self, Read};

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, NaiveTime, Utc};
use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand};

use meetslot_engine::{
    find_common_slot, merge_busy, parse_last_day, render_busy_report, render_slot,
    window_until_last_day, BusySource, Interval, SearchWindow, WorkHoursPolicy,
};

/// Busy data keyed by participant identifier, as loaded from the input JSON.
type BusyMap = HashMap<String, Vec<Interval>>;

#[derive(Parser)]
#[command(
    name = "meetslot",
    version,
    about = "Find the earliest meeting slot that works for everyone"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the earliest common free slot within working hours
    Find {
        /// Input busy-data JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Last permissible day, MM/DD/YYYY or YYYY-MM-DD
        #[arg(long)]
        last_day: String,
        /// Participant to include; repeat for several (defaults to everyone
        /// present in the input)
        #[arg(long = "email")]
        emails: Vec<String>,
        /// Reference time as RFC 3339 (defaults to the current time)
        #[arg(long)]
        now: Option<String>,
        #[command(flatten)]
        policy: PolicyArgs,
    },
    /// Merge all busy intervals into one timeline, printed as JSON
    Merge {
        /// Input busy-data JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print a per-participant free/busy report
    Report {
        /// Input busy-data JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// IANA timezone for displayed times
        #[arg(long, default_value = "America/Chicago")]
        timezone: String,
    },
}

/// Working-hours policy flags shared by slot-finding commands.
#[derive(Args)]
struct PolicyArgs {
    /// IANA timezone the working hours are expressed in
    #[arg(long, default_value = "America/Chicago")]
    timezone: String,
    /// Start of the business day, HH:MM
    #[arg(long, default_value = "09:00")]
    day_start: String,
    /// End of the business day, HH:MM
    #[arg(long, default_value = "17:00")]
    day_end: String,
    /// Minimum meeting length in minutes
    #[arg(long, default_value_t = 30)]
    min_minutes: i64,
}

impl PolicyArgs {
    fn build(&self) -> Result<WorkHoursPolicy> {
        let time_zone: Tz = self
            .timezone
            .parse()
            .map_err(|_| anyhow::anyhow!("Unknown timezone: {}", self.timezone))?;
        let day_start = parse_wall_time(&self.day_start)?;
        let day_end = parse_wall_time(&self.day_end)?;
        let policy = WorkHoursPolicy::new(
            day_start,
            day_end,
            time_zone,
            Duration::minutes(self.min_minutes),
        )?;
        Ok(policy)
    }
}

/// Busy data that was already fetched and written to a file; the engine
/// consumes it through the same seam a live provider client would use.
struct FileSource {
    busy: BusyMap,
}

impl BusySource for FileSource {
    fn busy_intervals(
        &self,
        participants: &[String],
        _window: &SearchWindow,
    ) -> meetslot_engine::error::Result<BusyMap> {
        Ok(participants
            .iter()
            .filter_map(|p| self.busy.get(p).map(|ivs| (p.clone(), ivs.clone())))
            .collect())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Find {
            input,
            last_day,
            emails,
            now,
            policy,
        } => {
            let busy = read_busy_map(input.as_deref())?;
            let policy = policy.build()?;
            let last_day = parse_last_day(&last_day)?;
            let now = match now {
                Some(raw) => DateTime::parse_from_rfc3339(&raw)
                    .with_context(|| format!("Invalid --now timestamp: {}", raw))?
                    .with_timezone(&Utc),
                None => Utc::now(),
            };

            let window = window_until_last_day(now, last_day, &policy);

            // Everyone in the file unless --email narrowed the group.
            let participants: Vec<String> = if emails.is_empty() {
                let mut all: Vec<String> = busy.keys().cloned().collect();
                all.sort();
                all
            } else {
                emails
            };

            let source = FileSource { busy };
            let result = find_common_slot(&source, &participants, &window, &policy)?;
            println!("{}", render_slot(&result, policy.time_zone));
        }
        Commands::Merge { input, output } => {
            let busy = read_busy_map(input.as_deref())?;
            let merged = merge_busy(busy.into_values().flatten());
            let json =
                serde_json::to_string_pretty(&merged).context("Failed to serialize timeline")?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Report { input, timezone } => {
            let busy = read_busy_map(input.as_deref())?;
            let tz: Tz = timezone
                .parse()
                .map_err(|_| anyhow::anyhow!("Unknown timezone: {}", timezone))?;

            let mut participants: Vec<&String> = busy.keys().collect();
            participants.sort();
            for participant in participants {
                let report = render_busy_report(participant, &busy[participant], tz);
                println!("{}", report.trim_end());
            }
        }
    }

    Ok(())
}

/// Parse an HH:MM wall time.
fn parse_wall_time(raw: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .with_context(|| format!("Invalid time: {} (expected HH:MM)", raw))
}

/// Load the participant → busy-intervals map from a file or stdin.
fn read_busy_map(path: Option<&str>) -> Result<BusyMap> {
    let json = read_input(path)?;
    serde_json::from_str(&json).context("Failed to parse busy-data JSON")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
