use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::client::ApiClient;
use crate::errors::ApiError;
use crate::models::compartment::{Compartment, CompartmentPayload, CompartmentUpdate};

/// CRUD on individual compartments.
pub struct CompartmentService {
    client: Arc<ApiClient>,
}

impl CompartmentService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Compartment>, ApiError> {
        self.client.get_list("compartments").await
    }

    pub async fn list_by_locker(&self, locker_id: i64) -> Result<Vec<Compartment>, ApiError> {
        self.client
            .get_list(&format!("compartments/locker/{}", locker_id))
            .await
    }

    pub async fn create(&self, payload: &CompartmentPayload) -> Result<Compartment, ApiError> {
        payload.validate()?;
        info!(code = %payload.code, locker_id = payload.locker_id, "creating compartment");
        self.client.post("compartments", payload).await
    }

    pub async fn update(
        &self,
        id: i64,
        update: &CompartmentUpdate,
    ) -> Result<Compartment, ApiError> {
        info!(compartment_id = id, "updating compartment");
        self.client
            .patch(&format!("compartments/{}", id), update)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        info!(compartment_id = id, "deleting compartment");
        self.client.delete(&format!("compartments/{}", id)).await
    }
}
