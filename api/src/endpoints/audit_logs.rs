use crate::client::{ApiClient, ListResponse};
use crate::error::ApiError;
use crate::models::AuditLogEntry;

impl ApiClient {
    /// Audit trail, newest first as the server returns it. Read-only;
    /// entries are written server-side as a side effect of mutations.
    pub async fn list_audit_logs(&self) -> Result<ListResponse<AuditLogEntry>, ApiError> {
        self.get_json("/api/audit-logs").await
    }
}
