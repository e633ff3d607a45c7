//! Thin JSON client for the disciplinary-case API.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Envelope for list endpoints: `{ data: [...], count?: n }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub count: Option<u64>,
}

impl<T> ListResponse<T> {
    /// Server-reported total when present, list length otherwise.
    pub fn total(&self) -> u64 {
        self.count.unwrap_or(self.data.len() as u64)
    }
}

/// Envelope for single-entity reads: `{ data: {...} }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemResponse<T> {
    pub data: T,
}

/// A bearer-token JSON client.
///
/// Cheap to build: screens construct one from the current token on every
/// action, so a token change never leaks into an older client.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attach the bearer token carried on every subsequent request. An empty
    /// token leaves the client unauthenticated.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.token = (!token.is_empty()).then_some(token);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let resp = self.authorized(req).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), "api request failed");
            return Err(ApiError::from_status(status.as_u16(), body));
        }
        Ok(resp)
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        Ok(self.send(req).await?.json().await?)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.decode(self.http.get(self.url(path))).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.decode(self.http.post(self.url(path)).json(body)).await
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.decode(self.http.put(self.url(path)).json(body)).await
    }

    /// Mutations whose response body the client discards; callers reconcile
    /// by re-fetching the affected list.
    pub(crate) async fn post_unit<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        self.send(self.http.post(self.url(path)).json(body)).await?;
        Ok(())
    }

    pub(crate) async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.http.post(self.url(path))).await?;
        Ok(())
    }

    pub(crate) async fn put_unit<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        self.send(self.http.put(self.url(path)).json(body)).await?;
        Ok(())
    }

    pub(crate) async fn put_empty(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.http.put(self.url(path))).await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.http.delete(self.url(path))).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let config = ApiConfig {
            base_url: "http://localhost:5000/".into(),
        };
        let client = ApiClient::new(&config);
        assert_eq!(client.url("/api/students"), "http://localhost:5000/api/students");
    }

    #[test]
    fn empty_token_stays_unauthenticated() {
        let client = ApiClient::new(&ApiConfig::default()).with_token("");
        assert!(client.token.is_none());
        let client = client.with_token("tok");
        assert_eq!(client.token.as_deref(), Some("tok"));
    }

    #[test]
    fn list_total_prefers_server_count() {
        let res: ListResponse<u32> = serde_json::from_str(r#"{"data":[1,2],"count":40}"#).unwrap();
        assert_eq!(res.total(), 40);
        let res: ListResponse<u32> = serde_json::from_str(r#"{"data":[1,2]}"#).unwrap();
        assert_eq!(res.total(), 2);
    }
}
