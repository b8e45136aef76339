use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::client::ApiClient;
use crate::errors::ApiError;
use crate::models::location::{Location, LocationPayload};

/// CRUD on locker locations.
pub struct LocationService {
    client: Arc<ApiClient>,
}

impl LocationService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Location>, ApiError> {
        self.client.get_list("locations").await
    }

    pub async fn create(&self, payload: &LocationPayload) -> Result<Location, ApiError> {
        payload.validate()?;
        info!(name = %payload.name, "creating location");
        self.client.post("locations", payload).await
    }

    pub async fn update(&self, id: i64, payload: &LocationPayload) -> Result<Location, ApiError> {
        payload.validate()?;
        info!(location_id = id, "updating location");
        self.client
            .patch(&format!("locations/{}", id), payload)
            .await
            .map_err(|err| match err {
                ApiError::NotFound(_) => {
                    ApiError::NotFound(format!("location {} not found", id))
                }
                other => other,
            })
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        info!(location_id = id, "deleting location");
        self.client.delete(&format!("locations/{}", id)).await
    }
}
