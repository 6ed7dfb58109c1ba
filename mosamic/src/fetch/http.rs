//! HTTP client abstraction for testability.

use std::time::Duration;

use super::FetchError;

/// Default per-request timeout for the underlying client.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Trait for async HTTP GET operations.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests.
pub trait AsyncHttpClient: Send + Sync {
    /// Performs an HTTP GET request and returns the response body.
    fn get(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Result<Vec<u8>, FetchError>> + Send;
}

/// Real HTTP client implementation using reqwest.
#[derive(Clone)]
pub struct AsyncReqwestClient {
    client: reqwest::Client,
}

impl AsyncReqwestClient {
    /// Creates a client with the default timeout.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a client with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl AsyncHttpClient for AsyncReqwestClient {
    async fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Http(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(FetchError::Http(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| FetchError::Http(format!("Failed to read response: {}", e)))
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    /// Mock HTTP client returning a fixed response for every URL.
    #[derive(Clone)]
    pub struct MockHttpClient {
        pub response: Result<Vec<u8>, FetchError>,
    }

    impl AsyncHttpClient for MockHttpClient {
        async fn get(&self, _url: &str) -> Result<Vec<u8>, FetchError> {
            self.response.clone()
        }
    }

    /// Mock HTTP client keyed by URL, for multi-fetch tests.
    #[derive(Clone, Default)]
    pub struct RoutedMockClient {
        pub routes: std::collections::HashMap<String, Result<Vec<u8>, FetchError>>,
    }

    impl AsyncHttpClient for RoutedMockClient {
        async fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
            self.routes
                .get(url)
                .cloned()
                .unwrap_or_else(|| Err(FetchError::Http(format!("HTTP 404 from {}", url))))
        }
    }

    #[tokio::test]
    async fn test_mock_client_success() {
        let mock = MockHttpClient {
            response: Ok(vec![1, 2, 3, 4]),
        };
        let result = mock.get("http://example.com").await;
        assert_eq!(result.unwrap(), vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_mock_client_error() {
        let mock = MockHttpClient {
            response: Err(FetchError::Http("Test error".to_string())),
        };
        assert!(mock.get("http://example.com").await.is_err());
    }

    #[tokio::test]
    async fn test_routed_mock_unknown_url_is_404() {
        let mock = RoutedMockClient::default();
        let err = mock.get("http://example.com/missing").await.unwrap_err();
        assert!(err.to_string().contains("404"));
    }
}
