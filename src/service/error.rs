//! Error types for the PDF services client.
//!
//! [`ServiceError`] enumerates every way the upload → submit → poll pipeline
//! can fail, with the HTTP status and raw body preserved wherever the remote
//! side produced them. Uses `thiserror` to derive `Display` and `Error` from
//! the `#[error(...)]` attributes.

use thiserror::Error;

/// A classified failure from the document-processing pipeline.
///
/// Each variant identifies the stage that produced it: asset creation
/// ([`RemoteRejected`](ServiceError::RemoteRejected)), byte transfer
/// ([`UploadFailed`](ServiceError::UploadFailed)), job submission
/// ([`SubmissionFailed`](ServiceError::SubmissionFailed),
/// [`MissingPollingLocation`](ServiceError::MissingPollingLocation)) or
/// status polling (the remaining variants). `RemoteJobFailed` means the
/// service reported that the job itself failed; `PollRequestFailed` means
/// the request to *check* the job failed — the two are kept separate because
/// they warrant different alerting.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No access token present. Raised before any network call is made.
    #[error("not authenticated: no access token present")]
    Unauthenticated,

    /// Network-level failure (DNS, connection refused, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Unexpected HTTP status when creating the upload asset.
    #[error("asset creation rejected (status {status}): {body}")]
    RemoteRejected { status: u16, body: String },

    /// Asset-creation response body did not decode.
    #[error("failed to decode asset response: {0}")]
    MalformedAssetResponse(String),

    /// Non-200 response when transferring bytes to the upload URI.
    /// The URI is single-use, so this is terminal for the asset handle.
    #[error("asset upload failed (status {status}): {body}")]
    UploadFailed { status: u16, body: String },

    /// Job submission returned something other than 201 Created.
    #[error("job submission failed (status {status}, asset {asset_id}): {body}")]
    SubmissionFailed {
        status: u16,
        body: String,
        asset_id: String,
    },

    /// Submission was accepted but the `Location` header is missing,
    /// leaving no address to poll.
    #[error("job submission returned no Location header to poll")]
    MissingPollingLocation,

    /// Poll response body did not decode into a job status.
    #[error("failed to decode job status response: {0}")]
    MalformedStatusResponse(String),

    /// The service reported that the job itself failed.
    #[error("job failed: {message}")]
    RemoteJobFailed { message: String },

    /// The service returned a status string this client does not recognize.
    /// Treated as terminal rather than as progress.
    #[error("unknown job status: {raw:?}")]
    UnknownJobStatus { raw: String },

    /// A status poll request came back with a non-200 HTTP status.
    #[error("status poll request failed (status {status})")]
    PollRequestFailed { status: u16 },

    /// The job was still in progress after the full attempt budget.
    #[error("polling timed out after {attempts} attempts")]
    PollingTimedOut { attempts: u32 },

    /// The caller's deadline elapsed before the pipeline finished.
    #[error("operation cancelled before completion")]
    Cancelled,
}
