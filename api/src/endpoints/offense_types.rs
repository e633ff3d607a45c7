use crate::client::{ApiClient, ListResponse};
use crate::error::ApiError;
use crate::models::{OffenseType, OffenseTypeInput};

impl ApiClient {
    pub async fn list_offense_types(&self) -> Result<ListResponse<OffenseType>, ApiError> {
        self.get_json("/api/offense-types").await
    }

    pub async fn create_offense_type(&self, input: &OffenseTypeInput) -> Result<(), ApiError> {
        self.post_unit("/api/offense-types", input).await
    }

    pub async fn update_offense_type(
        &self,
        id: &str,
        input: &OffenseTypeInput,
    ) -> Result<(), ApiError> {
        self.put_unit(&format!("/api/offense-types/{id}"), input).await
    }

    pub async fn delete_offense_type(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/offense-types/{id}")).await
    }
}
