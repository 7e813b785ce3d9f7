mod app;
mod commands;
mod dates;
mod render;

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use countcal_core::CountError;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use crate::app::App;

#[derive(Parser)]
#[command(name = "countcal")]
#[command(about = "Count up from one date and down to another")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the counts and calendar (default)
    Show {
        /// View a share link instead of your own dates
        #[arg(short, long)]
        link: Option<String>,

        /// Count from this date instead of today (YYYY-MM-DD or e.g. "next friday")
        #[arg(short, long)]
        date: Option<String>,

        /// Also show the settings panel
        #[arg(short, long)]
        settings: bool,
    },
    /// Keep the view on screen, redrawing when the date or document changes
    Watch {
        #[arg(short, long)]
        link: Option<String>,

        /// Redraw interval (e.g. "30s", "5m")
        #[arg(short, long, default_value = "1m", value_parser = parse_interval)]
        interval: Duration,
    },
    /// Change your own dates, title and display settings
    Set {
        /// Date to count up from
        #[arg(long)]
        count_up: Option<String>,

        /// Date to count down to
        #[arg(long)]
        count_down: Option<String>,

        #[arg(short, long)]
        title: Option<String>,

        /// Show the calendar grid
        #[arg(long)]
        calendar: Option<bool>,

        #[arg(long, conflicts_with = "count_up")]
        clear_count_up: bool,

        #[arg(long, conflicts_with = "count_down")]
        clear_count_down: bool,

        #[arg(long, conflicts_with = "title")]
        clear_title: bool,
    },
    /// Print a link that shows what you currently see
    Share {
        #[arg(short, long)]
        link: Option<String>,

        /// Open the link in the browser
        #[arg(long)]
        open: bool,
    },
    /// Check a pasted share link and show it
    Redeem { text: String },
    /// Make a share link's dates your own
    Claim { link: String },
    /// Stop viewing a share link
    Clear { link: String },
    /// Throw away your stored dates and start over
    Reset {
        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Show config and data paths
    Config,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Show {
        link: None,
        date: None,
        settings: false,
    });

    let result = run(command).await;

    if let Err(e) = &result {
        if let Some(CountError::DocumentMissing(_)) = e.downcast_ref::<CountError>() {
            eprintln!(
                "{}\n  countcal reset\n",
                "Your stored dates could not be found. Start over with:".yellow()
            );
        }
    }

    result
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Show {
            link,
            date,
            settings,
        } => {
            let app = App::load()?;
            let date = date.as_deref().map(dates::parse_date).transpose()?;
            commands::show::run(&app, link.as_deref(), date, settings)
        }
        Commands::Watch { link, interval } => {
            let app = App::load()?;
            commands::watch::run(&app, link.as_deref(), interval).await
        }
        Commands::Set {
            count_up,
            count_down,
            title,
            calendar,
            clear_count_up,
            clear_count_down,
            clear_title,
        } => {
            let app = App::load()?;
            let changes = commands::set::Changes {
                count_up: field(count_up.as_deref().map(dates::parse_date).transpose()?, clear_count_up),
                count_down: field(
                    count_down.as_deref().map(dates::parse_date).transpose()?,
                    clear_count_down,
                ),
                title: field(title, clear_title),
                calendar,
            };
            commands::set::run(&app, changes)
        }
        Commands::Share { link, open } => {
            let app = App::load()?;
            commands::share::run(&app, link.as_deref(), open)
        }
        Commands::Redeem { text } => {
            let app = App::load()?;
            commands::redeem::run(&app, &text)
        }
        Commands::Claim { link } => {
            let app = App::load()?;
            commands::claim::run(&app, &link)
        }
        Commands::Clear { link } => {
            let app = App::load()?;
            commands::clear::run(&app, &link)
        }
        Commands::Reset { yes } => commands::reset::run(yes),
        Commands::Config => commands::config::run(),
    }
}

/// `Some(Some(v))` to set, `Some(None)` to clear, `None` to leave alone.
fn field<T>(value: Option<T>, clear: bool) -> Option<Option<T>> {
    if clear { Some(None) } else { value.map(Some) }
}

fn parse_interval(s: &str) -> Result<Duration, String> {
    let interval = humantime::parse_duration(s).map_err(|e| e.to_string())?;
    if interval.is_zero() {
        return Err("interval must be greater than zero".to_string());
    }
    Ok(interval)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("COUNTCAL_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_accepts_humantime_durations() {
        assert_eq!(parse_interval("30s").unwrap(), Duration::from_secs(30));
        assert_eq!(parse_interval("5m").unwrap(), Duration::from_secs(300));
    }

    #[test]
    fn interval_rejects_zero_and_garbage() {
        assert!(parse_interval("0s").is_err());
        assert!(parse_interval("0ms").is_err());
        assert!(parse_interval("soon").is_err());
    }

    #[test]
    fn watch_rejects_zero_interval_on_the_command_line() {
        assert!(Cli::try_parse_from(["countcal", "watch", "--interval", "0s"]).is_err());
        assert!(Cli::try_parse_from(["countcal", "watch", "--interval", "10s"]).is_ok());
    }
}
