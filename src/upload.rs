//! Asset acquisition and byte transfer — the first pipeline stage.

use reqwest::{Method, StatusCode, header};

use crate::auth::SessionCredential;
use crate::service::types::CreateAssetRequest;
use crate::service::{AssetResponse, ServiceClient, ServiceError};

/// A write-once upload slot assigned by the service.
///
/// The upload URI is single-use; the asset identifier outlives it and is
/// what job submission refers to.
#[derive(Debug, Clone)]
pub struct AssetHandle {
    pub asset_id: String,
    pub upload_uri: String,
}

/// Acquires upload slots and transfers document bytes into them.
pub struct AssetUploader {
    client: ServiceClient,
}

impl AssetUploader {
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }

    /// Ask the service for a one-time upload URI for content of `media_type`.
    pub async fn acquire_upload_target(
        &self,
        credential: &SessionCredential,
        media_type: &str,
    ) -> Result<AssetHandle, ServiceError> {
        if !credential.is_authenticated() {
            return Err(ServiceError::Unauthenticated);
        }

        let url = self.client.endpoint("/assets");
        let response = self
            .client
            .authorized(Method::POST, &url, credential)
            .json(&CreateAssetRequest {
                media_type: media_type.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ServiceError::RemoteRejected {
                status: status.as_u16(),
                body,
            });
        }

        let asset: AssetResponse = serde_json::from_str(&body)
            .map_err(|e| ServiceError::MalformedAssetResponse(e.to_string()))?;

        Ok(AssetHandle {
            asset_id: asset.asset_id,
            upload_uri: asset.upload_uri,
        })
    }

    /// PUT the raw payload to the handle's upload URI.
    ///
    /// No retry: the URI is single-use, so any non-200 response invalidates
    /// the handle and the caller must treat the failure as terminal.
    pub async fn transfer_bytes(
        &self,
        handle: &AssetHandle,
        payload: Vec<u8>,
        media_type: &str,
    ) -> Result<(), ServiceError> {
        let response = self
            .client
            .plain(Method::PUT, &handle.upload_uri)
            .header(header::CONTENT_TYPE, media_type)
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ServiceError::UploadFailed {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
