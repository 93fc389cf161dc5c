//! HTTP client implementation for the health-data broker bridge.
//!
//! This module provides a reqwest-based implementation of the
//! [`HealthConnectClient`](crate::HealthConnectClient) trait.

use crate::{
    HealthConnectClient, HealthConnectError, Permission, RecordType, RecordsResponse,
    TimeRangeFilter, observability,
};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

/// Client for the broker bridge API using reqwest.
#[derive(Clone, Debug)]
pub struct ReqwestHealthConnectClient {
    base_url: String,
    api_token: SecretString,
    client: reqwest::Client,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReadRecordsRequest<'a> {
    time_range_filter: &'a TimeRangeFilter,
}

impl ReqwestHealthConnectClient {
    /// Create a new client instance.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the broker bridge (e.g., "http://127.0.0.1:7420")
    /// * `api_token` - The bearer token for authentication
    pub fn new(base_url: &str, api_token: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .expect("reqwest client build should not fail");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
            client,
        }
    }

    fn get_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .bearer_auth(self.api_token.expose_secret())
    }

    fn post_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .post(url)
            .bearer_auth(self.api_token.expose_secret())
    }

    /// Execute a request and expect a JSON response.
    async fn execute_json<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, HealthConnectError> {
        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(self.error_from_response(resp).await);
        }
        Ok(resp.json::<T>().await?)
    }

    /// Extract error information from a failed response.
    async fn error_from_response(&self, resp: reqwest::Response) -> HealthConnectError {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        let body_snippet: String = body.chars().take(256).collect();

        match status {
            401 | 403 => HealthConnectError::Denied(body_snippet),
            404 => HealthConnectError::NotFound(body_snippet),
            422 => HealthConnectError::InvalidInput(body_snippet),
            503 => HealthConnectError::Unavailable(body_snippet),
            _ => HealthConnectError::Api {
                status,
                message: body_snippet,
            },
        }
    }
}

#[async_trait]
impl HealthConnectClient for ReqwestHealthConnectClient {
    async fn initialize(&self) -> Result<bool, HealthConnectError> {
        let url = format!("{}/v1/status", self.base_url);

        #[derive(serde::Deserialize)]
        struct StatusPayload {
            available: bool,
        }

        let payload: StatusPayload = self.execute_json(self.get_request(&url)).await?;
        Ok(payload.available)
    }

    async fn request_permissions(
        &self,
        permissions: &[Permission],
    ) -> Result<Vec<Permission>, HealthConnectError> {
        let url = format!("{}/v1/permissions/request", self.base_url);
        tracing::debug!("requesting {} read capabilities", permissions.len());
        self.execute_json(self.post_request(&url).json(&permissions))
            .await
    }

    async fn read_records(
        &self,
        record_type: RecordType,
        filter: &TimeRangeFilter,
    ) -> Result<RecordsResponse, HealthConnectError> {
        let url = format!("{}/v1/records/{}/read", self.base_url, record_type.as_str());
        let body = ReadRecordsRequest {
            time_range_filter: filter,
        };

        let result: Result<RecordsResponse, HealthConnectError> =
            self.execute_json(self.post_request(&url).json(&body)).await;
        match &result {
            Ok(resp) => {
                observability::record_read(record_type);
                tracing::trace!(
                    "read {} {} records in [{}, {}]",
                    resp.records.len(),
                    record_type,
                    filter.start_time,
                    filter.end_time
                );
            }
            Err(e) => {
                observability::record_read_error(record_type);
                tracing::debug!("read {} failed: {}", record_type, e);
            }
        }
        result
    }
}
