use crate::client::{ApiClient, ListResponse};
use crate::error::ApiError;
use crate::models::{Punishment, PunishmentInput};

impl ApiClient {
    pub async fn list_punishments(&self) -> Result<ListResponse<Punishment>, ApiError> {
        self.get_json("/api/punishments").await
    }

    pub async fn create_punishment(&self, input: &PunishmentInput) -> Result<(), ApiError> {
        self.post_unit("/api/punishments", input).await
    }

    pub async fn update_punishment(&self, id: &str, input: &PunishmentInput) -> Result<(), ApiError> {
        self.put_unit(&format!("/api/punishments/{id}"), input).await
    }

    pub async fn delete_punishment(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/punishments/{id}")).await
    }
}
