use std::sync::Arc;

use tracing::{info, warn};
use validator::Validate;

use crate::client::ApiClient;
use crate::errors::ApiError;
use crate::models::locker::{Locker, LockerPayload, LockerStats};
use crate::views::aggregate;

/// CRUD and fleet statistics for locker cabinets.
pub struct LockerService {
    client: Arc<ApiClient>,
}

impl LockerService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Locker>, ApiError> {
        self.client.get_list("locker").await
    }

    pub async fn create(&self, payload: &LockerPayload) -> Result<Locker, ApiError> {
        payload.validate()?;
        info!(code = %payload.code, location_id = payload.location_id, "creating locker");
        self.client.post("locker", payload).await
    }

    pub async fn update(&self, id: i64, payload: &LockerPayload) -> Result<Locker, ApiError> {
        payload.validate()?;
        info!(locker_id = id, "updating locker");
        self.client.patch(&format!("locker/{}", id), payload).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        info!(locker_id = id, "deleting locker");
        self.client.delete(&format!("locker/{}", id)).await
    }

    /// Fleet-wide compartment availability counters from `locker/stats`,
    /// falling back to a client-side derivation over the locker list when
    /// the endpoint misbehaves.
    pub async fn stats(&self) -> Result<LockerStats, ApiError> {
        match self.client.get_one::<LockerStats>("locker/stats").await {
            Ok(stats) => Ok(stats),
            Err(err) if err.is_transient() => {
                warn!(error = %err, "stats endpoint failed, deriving from locker list");
                let lockers = self.list().await?;
                Ok(aggregate::derive_locker_stats(&lockers))
            }
            Err(err) => Err(err),
        }
    }
}
