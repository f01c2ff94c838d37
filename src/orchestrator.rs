use std::time::Duration;

use crate::auth::SessionCredential;
use crate::job::{CompletedJob, PollPolicy, StatusPoller};
use crate::operation::Operation;
use crate::service::{ServiceClient, ServiceError};
use crate::submit::JobSubmitter;
use crate::upload::AssetUploader;

/// Drives a document through the full upload → submit → poll pipeline.
///
/// One invocation is strictly sequential: each stage consumes a value the
/// previous one produced (asset id, then polling address). Concurrent
/// invocations are independent — the only shared input is the credential,
/// which is read-only here and read once per run.
pub struct JobOrchestrator {
    client: ServiceClient,
    policy: PollPolicy,
}

impl JobOrchestrator {
    pub fn new(client: ServiceClient) -> Self {
        Self::with_policy(client, PollPolicy::default())
    }

    pub fn with_policy(client: ServiceClient, policy: PollPolicy) -> Self {
        Self { client, policy }
    }

    /// Process `payload` with `operation` and return the artifact location.
    ///
    /// The credential is checked once before any network call; a failure in
    /// any stage aborts the pipeline and surfaces that stage's error
    /// unchanged. There is no cross-stage retry — in particular, a
    /// submission failure does not re-upload the asset.
    pub async fn run(
        &self,
        credential: &SessionCredential,
        payload: Vec<u8>,
        media_type: &str,
        operation: &Operation,
    ) -> Result<CompletedJob, ServiceError> {
        if !credential.is_authenticated() {
            return Err(ServiceError::Unauthenticated);
        }

        let uploader = AssetUploader::new(self.client.clone());
        let handle = uploader.acquire_upload_target(credential, media_type).await?;
        uploader.transfer_bytes(&handle, payload, media_type).await?;

        let submitter = JobSubmitter::new(self.client.clone());
        let job = submitter.submit(credential, &handle, operation).await?;

        let poller = StatusPoller::with_policy(self.client.clone(), self.policy.clone());
        poller.poll_until_terminal(&job, credential).await
    }

    /// Like [`run`](Self::run), but abandons the pipeline once `deadline`
    /// elapses.
    ///
    /// Cancellation is future-drop: hitting the deadline aborts whichever
    /// network call or polling sleep is in flight at that moment.
    pub async fn run_with_timeout(
        &self,
        credential: &SessionCredential,
        payload: Vec<u8>,
        media_type: &str,
        operation: &Operation,
        deadline: Duration,
    ) -> Result<CompletedJob, ServiceError> {
        match tokio::time::timeout(deadline, self.run(credential, payload, media_type, operation))
            .await
        {
            Ok(result) => result,
            Err(_) => Err(ServiceError::Cancelled),
        }
    }
}
