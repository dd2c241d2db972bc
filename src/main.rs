mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod logging;
mod output;
mod store;
mod utils;

use chrono::{DateTime, NaiveDate, Utc};
use clap::Parser;

use app::{CommandContext, handle_command};
use cli::Cli;
use config::Config;
use error::AppError;
use output::{NumberFormat, TableOptions};
use store::RecordStore;
use utils::{Timezone, parse_date};

/// The current day in `timezone`, or the day pinned with `--today`.
/// A pinned day uses its noon as "now".
fn reference_time(
    today: Option<&str>,
    timezone: Timezone,
) -> Result<(NaiveDate, DateTime<Utc>), AppError> {
    match today {
        Some(raw) => {
            let day = parse_date(raw)?;
            Ok((day, timezone.noon_utc(day)))
        }
        None => {
            let now = Utc::now();
            Ok((timezone.local_date(now), now))
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let number_format = NumberFormat::from_locale(cli.locale.as_deref())?;
    let (today, now) = reference_time(cli.today.as_deref(), timezone)?;
    tracing::debug!(%today, %now, "Reference time");

    let store = RecordStore::load(cli.data.as_deref(), now)?;

    let ctx = CommandContext {
        cli,
        backend: &store,
        timezone,
        today,
        now,
        options: TableOptions {
            order: cli.order,
            use_color: cli.use_color(),
            compact: cli.compact,
            number_format,
        },
    };
    handle_command(cli.command.as_ref(), &ctx)
}

fn main() {
    let (config, notes) = Config::load();
    let cli = Cli::parse().with_config(&config);

    logging::init(cli.debug);
    for note in &notes {
        note.log();
    }

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
