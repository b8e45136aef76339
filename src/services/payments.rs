use std::sync::Arc;

use crate::client::ApiClient;
use crate::errors::ApiError;
use crate::models::payment::Payment;

/// Read-only access to settlement records.
pub struct PaymentService {
    client: Arc<ApiClient>,
}

impl PaymentService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Payment>, ApiError> {
        self.client.get_list("payments").await
    }
}
