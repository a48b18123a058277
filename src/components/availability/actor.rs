use super::models::SessionRecord;
use crate::config::Config;
use crate::error::{api_error, DashResult};
use chrono::NaiveDate;
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tracing::{debug, info};
use url::Url;

/// The availability actor that processes fetch requests
pub struct AvailabilityActor {
    config: Arc<RwLock<Config>>,
    client: Client,
    // Memoizes responses per requested range for the life of the session
    cache: HashMap<(NaiveDate, NaiveDate), Vec<SessionRecord>>,
    command_rx: mpsc::Receiver<AvailabilityCommand>,
}

/// Commands that can be sent to the availability actor
pub enum AvailabilityCommand {
    GetSessions {
        from: NaiveDate,
        to: NaiveDate,
        respond_to: mpsc::Sender<DashResult<Vec<SessionRecord>>>,
    },
    RefreshSessions {
        from: NaiveDate,
        to: NaiveDate,
        respond_to: mpsc::Sender<DashResult<Vec<SessionRecord>>>,
    },
    Shutdown,
}

/// Handle for communicating with the availability actor
#[derive(Clone)]
pub struct AvailabilityActorHandle {
    command_tx: mpsc::Sender<AvailabilityCommand>,
}

impl AvailabilityActorHandle {
    /// Get session records for a date range, served from cache when possible
    pub async fn get_sessions(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> DashResult<Vec<SessionRecord>> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(AvailabilityCommand::GetSessions {
                from,
                to,
                respond_to: response_tx,
            })
            .await
            .map_err(|e| api_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| api_error("Response channel closed"))?
    }

    /// Drop the cached entry for a range and fetch it again
    pub async fn refresh_sessions(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> DashResult<Vec<SessionRecord>> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(AvailabilityCommand::RefreshSessions {
                from,
                to,
                respond_to: response_tx,
            })
            .await
            .map_err(|e| api_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| api_error("Response channel closed"))?
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> DashResult<()> {
        let _ = self.command_tx.send(AvailabilityCommand::Shutdown).await;
        Ok(())
    }
}

impl AvailabilityActor {
    /// Create a new actor and return its handle
    pub fn new(config: Arc<RwLock<Config>>) -> (Self, AvailabilityActorHandle) {
        let (command_tx, command_rx) = mpsc::channel(32);

        let actor = Self {
            config,
            client: Client::new(),
            cache: HashMap::new(),
            command_rx,
        };

        let handle = AvailabilityActorHandle { command_tx };

        (actor, handle)
    }

    /// Start the actor's processing loop
    pub async fn run(&mut self) {
        info!("Availability actor started");

        while let Some(cmd) = self.command_rx.recv().await {
            match cmd {
                AvailabilityCommand::GetSessions {
                    from,
                    to,
                    respond_to,
                } => {
                    let result = self.sessions_for_range(from, to, false).await;
                    let _ = respond_to.send(result).await;
                }
                AvailabilityCommand::RefreshSessions {
                    from,
                    to,
                    respond_to,
                } => {
                    let result = self.sessions_for_range(from, to, true).await;
                    let _ = respond_to.send(result).await;
                }
                AvailabilityCommand::Shutdown => {
                    info!("Availability actor shutting down");
                    break;
                }
            }
        }

        info!("Availability actor shut down");
    }

    /// Serve a range from the cache, or fetch it from the endpoint
    async fn sessions_for_range(
        &mut self,
        from: NaiveDate,
        to: NaiveDate,
        force_refresh: bool,
    ) -> DashResult<Vec<SessionRecord>> {
        let key = (from, to);

        if force_refresh {
            self.cache.remove(&key);
        }

        if let Some(cached) = self.cache.get(&key) {
            debug!("Serving sessions for {} .. {} from cache", from, to);
            return Ok(cached.clone());
        }

        let sessions =
            Self::fetch_sessions(Arc::clone(&self.config), self.client.clone(), from, to).await?;
        self.cache.insert(key, sessions.clone());

        Ok(sessions)
    }

    /// Fetch session records for a date range from the availability endpoint
    pub async fn fetch_sessions(
        config: Arc<RwLock<Config>>,
        client: Client,
        from: NaiveDate,
        to: NaiveDate,
    ) -> DashResult<Vec<SessionRecord>> {
        // Get endpoint URL from config
        let api_url = {
            let config_read = config.read().await;
            config_read.api_url.clone()
        };

        // Build URL with the date range as query parameters
        let mut url =
            Url::parse(&api_url).map_err(|e| api_error(&format!("Failed to parse URL: {}", e)))?;

        url.query_pairs_mut()
            .append_pair("from", &from.format("%Y-%m-%d").to_string())
            .append_pair("to", &to.format("%Y-%m-%d").to_string());

        // Make API request
        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| api_error(&format!("Failed to fetch sessions: {}", e)))?;

        if response.status() != reqwest::StatusCode::OK {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(api_error(&format!(
                "Failed to fetch sessions: HTTP {} - {}",
                status, error_body
            )));
        }

        let sessions: Vec<SessionRecord> = response
            .json()
            .await
            .map_err(|e| api_error(&format!("Failed to parse sessions response: {}", e)))?;

        debug!("Fetched {} sessions for {} .. {}", sessions.len(), from, to);

        Ok(sessions)
    }
}
