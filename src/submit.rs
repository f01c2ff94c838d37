//! Job submission — the second pipeline stage.

use reqwest::{Method, StatusCode, header};

use crate::auth::SessionCredential;
use crate::operation::Operation;
use crate::service::{ServiceClient, ServiceError};
use crate::upload::AssetHandle;

/// A submitted job: the status address to poll plus the asset it was
/// created for.
#[derive(Debug, Clone)]
pub struct JobHandle {
    pub polling_uri: String,
    pub asset_id: String,
}

/// Creates processing jobs against uploaded assets.
pub struct JobSubmitter {
    client: ServiceClient,
}

impl JobSubmitter {
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }

    /// Submit `operation` for the uploaded asset, returning the polling
    /// address from the `Location` response header.
    ///
    /// 201 Created is the only success signal; a 201 without a `Location`
    /// header is still an error, since there is nothing to poll.
    pub async fn submit(
        &self,
        credential: &SessionCredential,
        handle: &AssetHandle,
        operation: &Operation,
    ) -> Result<JobHandle, ServiceError> {
        if !credential.is_authenticated() {
            return Err(ServiceError::Unauthenticated);
        }

        let url = self.client.endpoint(operation.endpoint());
        let response = self
            .client
            .authorized(Method::POST, &url, credential)
            .json(&operation.request_body(&handle.asset_id))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::CREATED {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ServiceError::SubmissionFailed {
                status: status.as_u16(),
                body,
                asset_id: handle.asset_id.clone(),
            });
        }

        let polling_uri = response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .ok_or(ServiceError::MissingPollingLocation)?;

        Ok(JobHandle {
            polling_uri,
            asset_id: handle.asset_id.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::{CompressionLevel, ExportFormat};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn credential() -> SessionCredential {
        SessionCredential::new("tok-abc", "client-1")
    }

    fn asset_handle() -> AssetHandle {
        AssetHandle {
            asset_id: "urn:aaid:AS:42".into(),
            upload_uri: "https://upload.example/slot/1".into(),
        }
    }

    #[tokio::test]
    async fn submit_returns_polling_address_from_location_header() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/operation/compresspdf"))
            .and(header("Authorization", "Bearer tok-abc"))
            .and(body_json(serde_json::json!({
                "assetID": "urn:aaid:AS:42",
                "compressionLevel": "MEDIUM"
            })))
            .respond_with(
                ResponseTemplate::new(201).insert_header("Location", "https://x/poll/1"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let submitter = JobSubmitter::new(ServiceClient::with_base_url(server.uri()));
        let job = submitter
            .submit(
                &credential(),
                &asset_handle(),
                &Operation::compress(CompressionLevel::Medium),
            )
            .await
            .unwrap();

        assert_eq!(job.polling_uri, "https://x/poll/1");
        assert_eq!(job.asset_id, "urn:aaid:AS:42");
    }

    #[tokio::test]
    async fn submit_export_posts_to_export_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/operation/exportpdf"))
            .and(body_json(serde_json::json!({
                "assetID": "urn:aaid:AS:42",
                "targetFormat": "docx",
                "ocrLang": "en-US"
            })))
            .respond_with(
                ResponseTemplate::new(201).insert_header("Location", "https://x/poll/2"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let submitter = JobSubmitter::new(ServiceClient::with_base_url(server.uri()));
        let job = submitter
            .submit(
                &credential(),
                &asset_handle(),
                &Operation::export(ExportFormat::Docx, "en-US"),
            )
            .await
            .unwrap();

        assert_eq!(job.polling_uri, "https://x/poll/2");
    }

    #[tokio::test]
    async fn non_created_status_is_submission_failure_with_asset_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/operation/compresspdf"))
            .respond_with(ResponseTemplate::new(400).set_body_string("invalid compressionLevel"))
            .mount(&server)
            .await;

        let submitter = JobSubmitter::new(ServiceClient::with_base_url(server.uri()));
        let err = submitter
            .submit(
                &credential(),
                &asset_handle(),
                &Operation::compress(CompressionLevel::Low),
            )
            .await
            .unwrap_err();

        match err {
            ServiceError::SubmissionFailed {
                status,
                body,
                asset_id,
            } => {
                assert_eq!(status, 400);
                assert_eq!(body, "invalid compressionLevel");
                assert_eq!(asset_id, "urn:aaid:AS:42");
            }
            other => panic!("expected SubmissionFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn created_without_location_header_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/operation/compresspdf"))
            .respond_with(ResponseTemplate::new(201))
            .mount(&server)
            .await;

        let submitter = JobSubmitter::new(ServiceClient::with_base_url(server.uri()));
        let err = submitter
            .submit(
                &credential(),
                &asset_handle(),
                &Operation::compress(CompressionLevel::Low),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::MissingPollingLocation));
    }

    #[tokio::test]
    async fn submit_without_token_makes_no_request() {
        let server = MockServer::start().await;

        let submitter = JobSubmitter::new(ServiceClient::with_base_url(server.uri()));
        let err = submitter
            .submit(
                &SessionCredential::new("", "client-1"),
                &asset_handle(),
                &Operation::compress(CompressionLevel::Low),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Unauthenticated));
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
