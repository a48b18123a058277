use crate::error::{config_error, DashResult};
use chrono_tz::Tz;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;

/// Availability endpoint used when API_URL is not set
pub const DEFAULT_API_URL: &str =
    "https://yjeobizxiwkzczfpuyit.supabase.co/functions/v1/past-sessions-availability";

/// Display timezone used when TIMEZONE is not set
pub const DEFAULT_TIMEZONE: &str = "Europe/Berlin";

/// Main configuration structure for the dashboards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Availability endpoint URL
    pub api_url: String,
    /// Timezone used when displaying session times
    pub timezone: String,
    /// Map of session type to calendar color
    pub session_colors: HashMap<String, String>,
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> DashResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let api_url = env::var("API_URL").unwrap_or_else(|_| String::from(DEFAULT_API_URL));
        let timezone = env::var("TIMEZONE").unwrap_or_else(|_| String::from(DEFAULT_TIMEZONE));

        // Initialize default session colors
        let mut session_colors = default_session_colors();

        // Load color overrides from file if it exists
        if let Ok(content) = fs::read_to_string("config/colors.toml") {
            if let Ok(file_colors) = toml::from_str::<HashMap<String, String>>(&content) {
                // Merge with defaults
                for (key, value) in file_colors {
                    session_colors.insert(key, value);
                }
            }
        }

        let config = Config {
            api_url,
            timezone,
            session_colors,
        };

        // Reject unparseable timezones at startup rather than at render time
        config.display_tz()?;

        Ok(config)
    }

    /// Parse the configured display timezone
    pub fn display_tz(&self) -> DashResult<Tz> {
        self.timezone
            .parse()
            .map_err(|_| config_error(&format!("Invalid timezone: {}", self.timezone)))
    }
}

/// Built-in session type to color mapping
pub fn default_session_colors() -> HashMap<String, String> {
    let defaults = [
        ("Beginner Surf Session (mit Haltestange)", "green"),
        ("Beginner Surfkurs", "green"),
        ("Intermediate Surf Session", "blue"),
        ("Trainingssession (Advanced/Pro)", "red"),
        ("Trainingssession (30 Minuten/6 Pax) (Advanced/Pro)", "red"),
        ("Surfnight", "purple"),
        ("Wave and Rave", "purple"),
        ("Kids Surf & Plantsch Session", "yellow"),
        ("Exklusiv Session", "cyan"),
    ];

    defaults
        .iter()
        .map(|(session_type, color)| (session_type.to_string(), color.to_string()))
        .collect()
}
