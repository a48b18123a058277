use chrono::{Duration, NaiveDate, Utc};
use clap::Parser;
use std::sync::Arc;
use surfdash::components::AvailabilityHandle;
use surfdash::{startup, ui};
use tracing::{error, info};

/// Print session availability for a date range
#[derive(Debug, Parser)]
#[command(name = "sessions_table")]
struct Args {
    /// Start of the date range (YYYY-MM-DD), defaults to one week ago
    #[arg(long)]
    from: Option<NaiveDate>,
    /// End of the date range (YYYY-MM-DD), defaults to today
    #[arg(long)]
    to: Option<NaiveDate>,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    let args = Args::parse();

    // Load configuration
    let config = startup::load_config()?;
    let tz = {
        let config_read = config.read().await;
        config_read.display_tz()?
    };

    let today = Utc::now().date_naive();
    let from = args.from.unwrap_or(today - Duration::days(7));
    let to = args.to.unwrap_or(today);

    let handle = AvailabilityHandle::new(Arc::clone(&config));

    info!("Fetching sessions for {} .. {}", from, to);

    // Errors degrade to "no data"; the message is still shown
    let sessions = match handle.get_sessions(from, to).await {
        Ok(sessions) => sessions,
        Err(e) => {
            error!("Failed to fetch sessions: {}", e);
            println!("Error fetching data: {}", e);
            Vec::new()
        }
    };

    if sessions.is_empty() {
        println!("No data found for the selected range.");
    } else {
        print!("{}", ui::table::render_sessions(&sessions, &tz));
    }

    handle.shutdown().await?;

    Ok(())
}
