//! Wire types for the PDF services REST API.
//!
//! Field names and casing are fixed by the remote service (`mediaType`,
//! `assetID`, `uploadUri`, ...) and must round-trip bit-exact, so every
//! struct spells them out with `#[serde(rename)]` rather than relying on a
//! container-wide rename rule.

use serde::{Deserialize, Serialize};

/// Body of `POST /assets` — declares the media type of the content that
/// will be uploaded into the new slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAssetRequest {
    #[serde(rename = "mediaType")]
    pub media_type: String,
}

/// Response of `POST /assets`: a one-time upload URI plus the opaque asset
/// identifier used later in job submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetResponse {
    #[serde(rename = "uploadUri")]
    pub upload_uri: String,
    #[serde(rename = "assetID")]
    pub asset_id: String,
}

/// Body of `POST /operation/compresspdf`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressJobRequest {
    #[serde(rename = "assetID")]
    pub asset_id: String,
    #[serde(rename = "compressionLevel")]
    pub compression_level: String,
}

/// Body of `POST /operation/exportpdf`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportJobRequest {
    #[serde(rename = "assetID")]
    pub asset_id: String,
    #[serde(rename = "targetFormat")]
    pub target_format: String,
    #[serde(rename = "ocrLang")]
    pub ocr_lang: String,
}

/// A job-submission body for either operation endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum JobRequest {
    Compress(CompressJobRequest),
    Export(ExportJobRequest),
}

/// One poll response from the job's status address.
///
/// `asset` is present only once the status is `done`; `error` only when it
/// is `failed`. Anything absent decodes to `None` rather than failing the
/// whole response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStatusResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<JobAsset>,
    #[serde(rename = "assetID", default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JobError>,
}

/// The transformed artifact once a job is done.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobAsset {
    pub metadata: AssetMetadata,
    #[serde(rename = "downloadUri")]
    pub download_uri: String,
}

/// Artifact metadata: MIME type and size in bytes.
/// `type` is a Rust keyword, hence the rename.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetMetadata {
    #[serde(rename = "type")]
    pub content_type: String,
    pub size: u64,
}

/// Structured failure reported inside a `failed` poll response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobError {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_asset_request_uses_service_casing() {
        let req = CreateAssetRequest {
            media_type: "application/pdf".into(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"mediaType":"application/pdf"}"#);
    }

    #[test]
    fn asset_response_decodes_from_service_format() {
        let json = r#"{"uploadUri":"https://upload.example/slot/1","assetID":"urn:aaid:AS:42"}"#;
        let resp: AssetResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.upload_uri, "https://upload.example/slot/1");
        assert_eq!(resp.asset_id, "urn:aaid:AS:42");
    }

    #[test]
    fn compress_request_field_names() {
        let req = JobRequest::Compress(CompressJobRequest {
            asset_id: "urn:aaid:AS:42".into(),
            compression_level: "LOW".into(),
        });
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(
            json,
            r#"{"assetID":"urn:aaid:AS:42","compressionLevel":"LOW"}"#
        );
    }

    #[test]
    fn export_request_field_names() {
        let req = JobRequest::Export(ExportJobRequest {
            asset_id: "urn:aaid:AS:42".into(),
            target_format: "docx".into(),
            ocr_lang: "en-US".into(),
        });
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(
            json,
            r#"{"assetID":"urn:aaid:AS:42","targetFormat":"docx","ocrLang":"en-US"}"#
        );
    }

    #[test]
    fn done_status_decodes_nested_asset() {
        let json = r#"{
            "status": "done",
            "asset": {
                "metadata": {"type": "application/pdf", "size": 21389},
                "downloadUri": "https://dl.example/out/1"
            },
            "assetID": "urn:aaid:AS:42"
        }"#;
        let resp: JobStatusResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.status, "done");
        let asset = resp.asset.unwrap();
        assert_eq!(asset.download_uri, "https://dl.example/out/1");
        assert_eq!(asset.metadata.content_type, "application/pdf");
        assert_eq!(asset.metadata.size, 21389);
        assert_eq!(resp.asset_id.as_deref(), Some("urn:aaid:AS:42"));
        assert!(resp.error.is_none());
    }

    #[test]
    fn failed_status_decodes_error_block() {
        let json = r#"{
            "status": "failed",
            "error": {"status": 400, "code": "INVALID_DOCUMENT", "message": "The document is corrupt"}
        }"#;
        let resp: JobStatusResponse = serde_json::from_str(json).unwrap();
        let error = resp.error.unwrap();
        assert_eq!(error.status, 400);
        assert_eq!(error.code, "INVALID_DOCUMENT");
        assert_eq!(error.message, "The document is corrupt");
        assert!(resp.asset.is_none());
    }

    #[test]
    fn in_progress_status_decodes_without_optional_blocks() {
        let resp: JobStatusResponse =
            serde_json::from_str(r#"{"status":"in progress"}"#).unwrap();
        assert_eq!(resp.status, "in progress");
        assert!(resp.asset.is_none());
        assert!(resp.error.is_none());
    }
}
