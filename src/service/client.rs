use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder};
use uuid::Uuid;

use crate::auth::SessionCredential;

/// Production base URL of the document-processing service.
pub const SERVICE_URL: &str = "https://pdf-services.adobe.io";

/// Shared HTTP plumbing for all service calls.
///
/// Cheap to clone: the underlying `reqwest::Client` is reference-counted,
/// so every pipeline stage can own one without new connection pools.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    http: Client,
    base_url: String,
}

impl ServiceClient {
    pub fn new() -> Self {
        Self::with_base_url(SERVICE_URL.to_string())
    }

    /// Create a client pointing at a custom base URL (useful for testing).
    pub fn with_base_url(base_url: String) -> Self {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(120))
            .build()
            .expect("failed to build HTTP client");
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a service-relative path such as `/assets`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Request builder with the service auth headers attached.
    ///
    /// Adds `Authorization: Bearer`, `X-API-Key` and a fresh `x-request-id`
    /// so individual calls can be correlated in service-side logs.
    pub fn authorized(
        &self,
        method: Method,
        url: &str,
        credential: &SessionCredential,
    ) -> RequestBuilder {
        self.http
            .request(method, url)
            .bearer_auth(credential.access_token())
            .header("X-API-Key", credential.api_key())
            .header("x-request-id", Uuid::new_v4().to_string())
    }

    /// Bare request builder for pre-signed upload and download URIs,
    /// which carry their authorization in the URI itself.
    pub fn plain(&self, method: Method, url: &str) -> RequestBuilder {
        self.http.request(method, url)
    }
}

impl Default for ServiceClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_path() {
        let client = ServiceClient::with_base_url("https://svc.example".to_string());
        assert_eq!(client.endpoint("/assets"), "https://svc.example/assets");
        assert_eq!(
            client.endpoint("/operation/compresspdf"),
            "https://svc.example/operation/compresspdf"
        );
    }

    #[test]
    fn default_client_targets_production_url() {
        let client = ServiceClient::new();
        assert_eq!(client.base_url(), SERVICE_URL);
    }
}
