use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::client::ApiClient;
use crate::errors::ApiError;
use crate::models::size::{Size, SizePayload};

/// CRUD on compartment size classes.
pub struct SizeService {
    client: Arc<ApiClient>,
}

impl SizeService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Size>, ApiError> {
        self.client.get_list("sizes").await
    }

    /// Creates a size. A duplicate name comes back as `ApiError::Conflict`,
    /// which the console shows in a dedicated dialog.
    pub async fn create(&self, payload: &SizePayload) -> Result<Size, ApiError> {
        payload.validate()?;
        info!(name = %payload.name, "creating size");
        self.client.post("sizes", payload).await
    }

    pub async fn update(&self, id: i64, payload: &SizePayload) -> Result<Size, ApiError> {
        payload.validate()?;
        info!(size_id = id, "updating size");
        self.client.patch(&format!("sizes/{}", id), payload).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        info!(size_id = id, "deleting size");
        self.client.delete(&format!("sizes/{}", id)).await
    }
}
