//! Status polling — the final pipeline stage, and the only one with a
//! retry budget.

use std::time::Duration;

use reqwest::{Method, StatusCode};
use tokio::time::sleep;

use crate::auth::SessionCredential;
use crate::job::status::{CompletedJob, JobStatus};
use crate::service::{JobStatusResponse, ServiceClient, ServiceError};
use crate::submit::JobHandle;

/// Attempt budget and wait interval for status polling.
///
/// Fixed interval, fixed count: worst case is `max_attempts * interval`
/// (~60s with defaults), which keeps the latency bound easy to reason
/// about. Only `in progress` consumes attempts; every other outcome ends
/// the loop on the spot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollPolicy {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 30,
            interval: Duration::from_secs(2),
        }
    }
}

/// Polls a job's status address until a terminal status or budget
/// exhaustion.
pub struct StatusPoller {
    client: ServiceClient,
    policy: PollPolicy,
}

impl StatusPoller {
    pub fn new(client: ServiceClient) -> Self {
        Self::with_policy(client, PollPolicy::default())
    }

    pub fn with_policy(client: ServiceClient, policy: PollPolicy) -> Self {
        Self { client, policy }
    }

    /// GET the polling address until the job leaves `in progress`.
    ///
    /// Terminal outcomes, in classification order per attempt:
    /// - non-200 poll response → [`ServiceError::PollRequestFailed`]
    ///   (the request to *check* the job failed, distinct from the job
    ///   failing);
    /// - undecodable body → [`ServiceError::MalformedStatusResponse`];
    /// - `failed` → [`ServiceError::RemoteJobFailed`];
    /// - unrecognized status → [`ServiceError::UnknownJobStatus`];
    /// - `done` → the completed artifact.
    ///
    /// `in progress` sleeps one interval and consumes one attempt; running
    /// out of attempts is [`ServiceError::PollingTimedOut`]. The sleep is a
    /// plain tokio sleep, so dropping the returned future cancels the poll
    /// mid-wait as well as mid-request.
    pub async fn poll_until_terminal(
        &self,
        handle: &JobHandle,
        credential: &SessionCredential,
    ) -> Result<CompletedJob, ServiceError> {
        if !credential.is_authenticated() {
            return Err(ServiceError::Unauthenticated);
        }

        for attempt in 1..=self.policy.max_attempts {
            let response = self
                .client
                .authorized(Method::GET, &handle.polling_uri, credential)
                .send()
                .await?;

            let status = response.status();
            if status != StatusCode::OK {
                return Err(ServiceError::PollRequestFailed {
                    status: status.as_u16(),
                });
            }

            let body = response.text().await?;
            let decoded: JobStatusResponse = serde_json::from_str(&body)
                .map_err(|e| ServiceError::MalformedStatusResponse(e.to_string()))?;

            match JobStatus::classify(decoded)? {
                JobStatus::InProgress => {
                    log_poll_progress(attempt, self.policy.max_attempts);
                    sleep(self.policy.interval).await;
                }
                JobStatus::Done(job) => return Ok(job),
                JobStatus::Failed(failure) => {
                    return Err(ServiceError::RemoteJobFailed {
                        message: failure.message,
                    });
                }
                JobStatus::Unknown { raw } => {
                    return Err(ServiceError::UnknownJobStatus { raw });
                }
            }
        }

        Err(ServiceError::PollingTimedOut {
            attempts: self.policy.max_attempts,
        })
    }
}

fn log_poll_progress(attempt: u32, max: u32) {
    eprintln!("  ⏳ Job still in progress ({attempt}/{max})");
}
