use chrono::Utc;
use inquire::{InquireError, Select};
use std::sync::Arc;
use surfdash::calendar::{to_calendar_events, WeekWindow};
use surfdash::components::AvailabilityHandle;
use surfdash::error::other_error;
use surfdash::{startup, ui};
use tracing::{error, info};

const ACTION_PREVIOUS: &str = "Previous week";
const ACTION_NEXT: &str = "Next week";
const ACTION_REFRESH: &str = "Refresh";
const ACTION_QUIT: &str = "Quit";

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting surfdash calendar dashboard");

    // Load configuration
    let config = startup::load_config()?;

    let (tz, colors) = {
        let config_read = config.read().await;
        (config_read.display_tz()?, config_read.session_colors.clone())
    };

    let handle = AvailabilityHandle::new(Arc::clone(&config));

    // The displayed window starts at the current week and lives for the
    // whole interactive session
    let mut window = WeekWindow::current(Utc::now().date_naive());

    loop {
        let today = Utc::now().date_naive();

        // Errors degrade to "no data"; the message is still shown
        let sessions = match handle.get_sessions(window.start_date, window.end_date).await {
            Ok(sessions) => sessions,
            Err(e) => {
                error!("Failed to fetch sessions: {}", e);
                println!("Error fetching data: {}", e);
                Vec::new()
            }
        };

        let events = to_calendar_events(&sessions, Utc::now(), &colors);
        println!("{}", ui::calendar::render_week(&window, &events, &tz, today));

        // Week actions are offered only while their guard holds
        let mut actions = Vec::new();
        if window.can_go_previous(today) {
            actions.push(ACTION_PREVIOUS);
        }
        if window.can_go_next(today) {
            actions.push(ACTION_NEXT);
        }
        actions.push(ACTION_REFRESH);
        actions.push(ACTION_QUIT);

        let choice = match Select::new("Navigate", actions).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(other_error(&format!("Prompt error: {}", e)).into()),
        };

        match choice {
            ACTION_PREVIOUS => window = window.previous(today),
            ACTION_NEXT => window = window.next(today),
            ACTION_REFRESH => {
                if let Err(e) = handle
                    .refresh_sessions(window.start_date, window.end_date)
                    .await
                {
                    error!("Failed to refresh sessions: {}", e);
                    println!("Error fetching data: {}", e);
                }
            }
            _ => break,
        }
    }

    handle.shutdown().await?;
    info!("surfdash shut down");

    Ok(())
}
