use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use validator::Validate;

use crate::client::ApiClient;
use crate::errors::ApiError;
use crate::models::rental::{
    DeliveryAccepted, DeliveryCreated, DeliveryPayload, Rental, RentalPayload,
};

/// Rental CRUD plus the lifecycle transitions and delivery flows.
pub struct RentalService {
    client: Arc<ApiClient>,
}

impl RentalService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Rental>, ApiError> {
        self.client.get_list("rents").await
    }

    pub async fn get(&self, id: i64) -> Result<Rental, ApiError> {
        self.client.get_one(&format!("rents/{}", id)).await
    }

    pub async fn create(&self, payload: &RentalPayload) -> Result<Rental, ApiError> {
        payload.validate()?;
        info!(
            user_id = payload.user_id,
            compartment_id = payload.compartment_id,
            "creating rental"
        );
        self.client.post("rents", payload).await
    }

    pub async fn update<B: Serialize>(&self, id: i64, patch: &B) -> Result<Rental, ApiError> {
        info!(rent_id = id, "updating rental");
        self.client.patch(&format!("rents/{}", id), patch).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        info!(rent_id = id, "deleting rental");
        self.client.delete(&format!("rents/{}", id)).await
    }

    /// Closes the rental and settles its final cost.
    pub async fn complete(&self, id: i64) -> Result<Rental, ApiError> {
        info!(rent_id = id, "completing rental");
        self.client.put(&format!("rents/{}/complete", id)).await
    }

    /// Marks the stored goods as picked up.
    pub async fn pickup(&self, id: i64) -> Result<Rental, ApiError> {
        info!(rent_id = id, "marking rental picked up");
        self.client.put(&format!("rents/{}/pickup", id)).await
    }

    /// Pops the compartment door for an active rental.
    pub async fn open(&self, id: i64) -> Result<Rental, ApiError> {
        info!(rent_id = id, "opening compartment");
        self.client.put(&format!("rents/{}/open", id)).await
    }

    pub async fn my_rents(&self) -> Result<Vec<Rental>, ApiError> {
        self.client.get_list("rents/my-rents").await
    }

    pub async fn deliveries_for_me(&self) -> Result<Vec<Rental>, ApiError> {
        self.client.get_list("rents/deliveries-for-me").await
    }

    pub async fn create_delivery(
        &self,
        payload: &DeliveryPayload,
    ) -> Result<DeliveryCreated, ApiError> {
        payload.validate()?;
        info!(
            compartment_id = payload.compartment_id,
            "creating delivery rental"
        );
        self.client.post("rents/delivery", payload).await
    }

    /// Accepts an incoming delivery; the backend answers with a payment URL
    /// and the total cost owed.
    pub async fn accept_delivery(&self, id: i64) -> Result<DeliveryAccepted, ApiError> {
        info!(rent_id = id, "accepting delivery");
        self.client
            .put(&format!("rents/{}/accept-delivery", id))
            .await
    }
}
