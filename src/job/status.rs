use serde::Serialize;

use crate::service::ServiceError;
use crate::service::types::JobStatusResponse;

/// Status strings the service is known to emit.
pub const STATUS_DONE: &str = "done";
pub const STATUS_FAILED: &str = "failed";
pub const STATUS_IN_PROGRESS: &str = "in progress";

/// The artifact produced by a completed job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletedJob {
    pub download_uri: String,
    pub content_type: String,
    pub size_bytes: u64,
    /// Asset identifier echoed back by the service, when present.
    pub asset_id: Option<String>,
}

/// Failure the service reported for the job itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobFailure {
    pub status: u16,
    pub code: String,
    pub message: String,
}

/// One decoded poll response.
///
/// `InProgress` is the only variant allowed to recur across poll attempts;
/// every other variant ends polling immediately. Unrecognized status strings
/// classify as `Unknown` and are treated as terminal — fail closed on
/// protocol drift rather than polling forever against an unknown state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    InProgress,
    Done(CompletedJob),
    Failed(JobFailure),
    Unknown { raw: String },
}

impl JobStatus {
    /// Classify a decoded poll response.
    ///
    /// A `done` response without an asset descriptor is malformed rather
    /// than unknown: the status string was recognized, the payload was not
    /// usable.
    pub fn classify(response: JobStatusResponse) -> Result<Self, ServiceError> {
        match response.status.as_str() {
            STATUS_IN_PROGRESS => Ok(JobStatus::InProgress),
            STATUS_DONE => {
                let asset = response.asset.ok_or_else(|| {
                    ServiceError::MalformedStatusResponse(
                        "done status without an asset descriptor".to_string(),
                    )
                })?;
                Ok(JobStatus::Done(CompletedJob {
                    download_uri: asset.download_uri,
                    content_type: asset.metadata.content_type,
                    size_bytes: asset.metadata.size,
                    asset_id: response.asset_id,
                }))
            }
            STATUS_FAILED => {
                let error = response.error.unwrap_or_default();
                Ok(JobStatus::Failed(JobFailure {
                    status: error.status,
                    code: error.code,
                    message: error.message,
                }))
            }
            other => Ok(JobStatus::Unknown {
                raw: other.to_string(),
            }),
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, JobStatus::InProgress)
    }
}
