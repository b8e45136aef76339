use std::sync::Arc;

use crate::client::ApiClient;
use crate::errors::ApiError;
use crate::models::location::{District, Province, Ward};

/// Read-only administrative address lookups used by the location form's
/// cascading province/district/ward selects.
pub struct AddressService {
    client: Arc<ApiClient>,
}

impl AddressService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn provinces(&self) -> Result<Vec<Province>, ApiError> {
        self.client.get_list("provinces").await
    }

    pub async fn districts_by_province(
        &self,
        province_id: i64,
    ) -> Result<Vec<District>, ApiError> {
        self.client
            .get_list(&format!("districts/province/{}", province_id))
            .await
    }

    pub async fn wards_by_district(&self, district_id: i64) -> Result<Vec<Ward>, ApiError> {
        self.client
            .get_list(&format!("wards/district/{}", district_id))
            .await
    }
}
