use serde::Serialize;

use crate::client::{ApiClient, ListResponse};
use crate::error::ApiError;
use crate::models::{Case, CaseInput};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResolveRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    resolution_notes: Option<&'a str>,
}

/// Case lifecycle: forward transitions (`approve`, `resolve`) are POSTs,
/// admin-only reversals (`unapprove`, `unresolve`) are PUTs. Every mutation
/// returns `()`; callers reconcile by re-fetching the list.
impl ApiClient {
    pub async fn list_cases(&self) -> Result<ListResponse<Case>, ApiError> {
        self.get_json("/api/cases").await
    }

    pub async fn create_case(&self, input: &CaseInput) -> Result<(), ApiError> {
        self.post_unit("/api/cases", input).await
    }

    pub async fn update_case(&self, id: &str, input: &CaseInput) -> Result<(), ApiError> {
        self.put_unit(&format!("/api/cases/{id}"), input).await
    }

    pub async fn delete_case(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/cases/{id}")).await
    }

    pub async fn approve_case(&self, id: &str) -> Result<(), ApiError> {
        self.post_empty(&format!("/api/cases/{id}/approve")).await
    }

    pub async fn resolve_case(&self, id: &str, notes: Option<&str>) -> Result<(), ApiError> {
        let body = ResolveRequest {
            resolution_notes: notes.filter(|n| !n.trim().is_empty()),
        };
        self.post_unit(&format!("/api/cases/{id}/resolve"), &body)
            .await
    }

    pub async fn unapprove_case(&self, id: &str) -> Result<(), ApiError> {
        self.put_empty(&format!("/api/cases/{id}/unapprove")).await
    }

    pub async fn unresolve_case(&self, id: &str) -> Result<(), ApiError> {
        self.put_empty(&format!("/api/cases/{id}/unresolve")).await
    }
}
