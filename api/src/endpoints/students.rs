use crate::client::{ApiClient, ItemResponse, ListResponse};
use crate::error::ApiError;
use crate::models::{Student, StudentInput};

impl ApiClient {
    pub async fn list_students(&self) -> Result<ListResponse<Student>, ApiError> {
        self.get_json("/api/students").await
    }

    pub async fn get_student(&self, id: &str) -> Result<Student, ApiError> {
        let res: ItemResponse<Student> = self.get_json(&format!("/api/students/{id}")).await?;
        Ok(res.data)
    }

    pub async fn create_student(&self, input: &StudentInput) -> Result<(), ApiError> {
        self.post_unit("/api/students", input).await
    }

    pub async fn update_student(&self, id: &str, input: &StudentInput) -> Result<(), ApiError> {
        self.put_unit(&format!("/api/students/{id}"), input).await
    }

    pub async fn delete_student(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/students/{id}")).await
    }
}
