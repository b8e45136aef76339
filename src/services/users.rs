use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::client::ApiClient;
use crate::errors::ApiError;
use crate::models::user::{AccessGrant, User, UserPayload, UserUpdate};

/// CRUD on user accounts plus the delivery access-grant listing.
pub struct UserService {
    client: Arc<ApiClient>,
}

impl UserService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        self.client.get_list("user").await
    }

    pub async fn create(&self, payload: &UserPayload) -> Result<User, ApiError> {
        payload.validate()?;
        info!(email = %payload.email, role = %payload.role_id, "creating user");
        self.client.post("user", payload).await
    }

    pub async fn update(&self, id: i64, update: &UserUpdate) -> Result<User, ApiError> {
        update.validate()?;
        info!(user_id = id, "updating user");
        self.client.patch(&format!("user/{}", id), update).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        info!(user_id = id, "deleting user");
        self.client.delete(&format!("user/{}", id)).await
    }

    pub async fn list_grants(&self) -> Result<Vec<AccessGrant>, ApiError> {
        self.client.get_list("permissions").await
    }
}
