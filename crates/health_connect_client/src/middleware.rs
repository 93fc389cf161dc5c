//! Middleware layer for cross-cutting concerns.
//!
//! Wraps a [`HealthConnectClient`](crate::HealthConnectClient) with
//! per-operation logging and timing, keeping the aggregation logic free of
//! observability noise.

use std::sync::Arc;
use std::time::Instant;

use crate::{
    HealthConnectClient, HealthConnectError, Permission, RecordType, RecordsResponse,
    TimeRangeFilter,
};
use tracing::debug;

/// Logging wrapper around a `HealthConnectClient`.
#[derive(Clone)]
pub struct LoggingMiddleware<C: HealthConnectClient> {
    inner: Arc<C>,
}

impl<C: HealthConnectClient> LoggingMiddleware<C> {
    pub fn new(client: C) -> Self {
        Self {
            inner: Arc::new(client),
        }
    }

    /// Execute a fallible operation with logging.
    async fn with_logging<F, Fut, T>(
        &self,
        operation: F,
        name: &str,
    ) -> Result<T, HealthConnectError>
    where
        F: FnOnce(Arc<C>) -> Fut,
        Fut: std::future::Future<Output = Result<T, HealthConnectError>>,
    {
        let start = Instant::now();
        debug!("Starting operation: {}", name);

        let result = operation(self.inner.clone()).await;

        let duration = start.elapsed();
        match &result {
            Ok(_) => {
                debug!(
                    "Operation completed successfully: {} in {:?}",
                    name, duration
                );
            }
            Err(e) => {
                debug!(
                    "Operation failed: {} in {:?} - error: {}",
                    name, duration, e
                );
            }
        }

        result
    }
}

#[async_trait::async_trait]
impl<C: HealthConnectClient + 'static> HealthConnectClient for LoggingMiddleware<C> {
    async fn initialize(&self) -> Result<bool, HealthConnectError> {
        self.with_logging(|client| async move { client.initialize().await }, "initialize")
            .await
    }

    async fn request_permissions(
        &self,
        permissions: &[Permission],
    ) -> Result<Vec<Permission>, HealthConnectError> {
        let permissions = permissions.to_vec();
        self.with_logging(
            |client| async move { client.request_permissions(&permissions).await },
            "request_permissions",
        )
        .await
    }

    async fn read_records(
        &self,
        record_type: RecordType,
        filter: &TimeRangeFilter,
    ) -> Result<RecordsResponse, HealthConnectError> {
        let filter = filter.clone();
        self.with_logging(
            |client| async move { client.read_records(record_type, &filter).await },
            record_type.as_str(),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StaticClient;

    #[async_trait]
    impl HealthConnectClient for StaticClient {
        async fn initialize(&self) -> Result<bool, HealthConnectError> {
            Ok(true)
        }

        async fn request_permissions(
            &self,
            permissions: &[Permission],
        ) -> Result<Vec<Permission>, HealthConnectError> {
            Ok(permissions.to_vec())
        }

        async fn read_records(
            &self,
            _record_type: RecordType,
            _filter: &TimeRangeFilter,
        ) -> Result<RecordsResponse, HealthConnectError> {
            Ok(RecordsResponse::default())
        }
    }

    #[tokio::test]
    async fn middleware_forwards_results() {
        let mw = LoggingMiddleware::new(StaticClient);
        assert!(mw.initialize().await.expect("initialize"));
        let granted = mw
            .request_permissions(&Permission::read_all())
            .await
            .expect("permissions");
        assert_eq!(granted.len(), RecordType::ALL.len());
    }
}
