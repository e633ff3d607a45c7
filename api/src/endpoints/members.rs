use crate::client::{ApiClient, ListResponse};
use crate::error::ApiError;
use crate::models::{Member, MemberInput};

/// Committee-member administration. The server enforces the admin-only
/// policy; these wrappers surface its 403s as [`ApiError::Auth`].
///
/// [`ApiError::Auth`]: crate::error::ApiError::Auth
impl ApiClient {
    pub async fn list_members(&self) -> Result<ListResponse<Member>, ApiError> {
        self.get_json("/api/members").await
    }

    pub async fn create_member(&self, input: &MemberInput) -> Result<(), ApiError> {
        self.post_unit("/api/members", input).await
    }

    pub async fn update_member(&self, id: &str, input: &MemberInput) -> Result<(), ApiError> {
        self.put_unit(&format!("/api/members/{id}"), input).await
    }

    pub async fn delete_member(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/members/{id}")).await
    }
}
