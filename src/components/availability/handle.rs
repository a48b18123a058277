use super::actor::{AvailabilityActor, AvailabilityActorHandle};
use super::models::SessionRecord;
use crate::config::Config;
use crate::error::DashResult;
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// Handle for interacting with the availability actor
#[derive(Clone)]
pub struct AvailabilityHandle {
    actor_handle: AvailabilityActorHandle,
    _actor_task: Arc<JoinHandle<()>>,
}

impl AvailabilityHandle {
    /// Create a new AvailabilityHandle and spawn the actor
    pub fn new(config: Arc<RwLock<Config>>) -> Self {
        // Create the actor and get its handle
        let (mut actor, handle) = AvailabilityActor::new(config);

        // Spawn a task to run the actor
        let actor_task = tokio::spawn(async move {
            actor.run().await;
        });

        Self {
            actor_handle: handle,
            _actor_task: Arc::new(actor_task),
        }
    }

    /// Get session records for a date range
    pub async fn get_sessions(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> DashResult<Vec<SessionRecord>> {
        self.actor_handle.get_sessions(from, to).await
    }

    /// Fetch a range again, bypassing the cache
    pub async fn refresh_sessions(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> DashResult<Vec<SessionRecord>> {
        self.actor_handle.refresh_sessions(from, to).await
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> DashResult<()> {
        self.actor_handle.shutdown().await
    }
}
