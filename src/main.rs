use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use pdflow::auth::Authenticator;
use pdflow::cli::{Cli, Command};
use pdflow::config::PdflowConfig;
use pdflow::error::PdflowError;
use pdflow::job::CompletedJob;
use pdflow::operation::{Operation, PDF_MEDIA_TYPE};
use pdflow::orchestrator::JobOrchestrator;
use pdflow::service::{ServiceClient, ServiceError};
use pdflow::ui::RunProgress;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = PdflowConfig::load().context("failed to load pdflow.toml")?;

    match &cli.command {
        Command::Compress {
            file,
            output,
            level,
        } => {
            let operation = Operation::compress((*level).into());
            run(&cli, &config, file, output.as_deref(), operation).await?;
        }
        Command::Export {
            file,
            output,
            format,
            ocr_lang,
        } => {
            let operation = Operation::export((*format).into(), ocr_lang.clone());
            run(&cli, &config, file, output.as_deref(), operation).await?;
        }
    }

    Ok(())
}

/// Authenticate, run the pipeline and report or download the artifact.
async fn run(
    cli: &Cli,
    config: &PdflowConfig,
    file: &str,
    output: Option<&str>,
    operation: Operation,
) -> Result<(), PdflowError> {
    if config.client_id.is_empty() || config.client_secret.is_empty() {
        return Err(PdflowError::Config(
            "service credentials are not set; add client_id/client_secret to pdflow.toml \
             or export PDF_SERVICES_CLIENT_ID and PDF_SERVICES_CLIENT_SECRET"
                .to_string(),
        ));
    }

    let payload = tokio::fs::read(file).await?;

    let authenticator = Authenticator::with_token_url(format!("{}/token", config.base_url));
    let credential = authenticator
        .authenticate(&config.client_id, &config.client_secret)
        .await?;

    let mut policy = config.poll_policy();
    if let Some(attempts) = cli.max_poll_attempts {
        policy.max_attempts = attempts;
    }
    if let Some(ms) = cli.poll_interval_ms {
        policy.interval = Duration::from_millis(ms);
    }

    let client = ServiceClient::with_base_url(config.base_url.clone());
    let orchestrator = JobOrchestrator::with_policy(client.clone(), policy);

    let progress = RunProgress::start(operation.name(), file);
    let result = match cli.timeout_secs {
        Some(secs) => {
            orchestrator
                .run_with_timeout(
                    &credential,
                    payload,
                    PDF_MEDIA_TYPE,
                    &operation,
                    Duration::from_secs(secs),
                )
                .await
        }
        None => {
            orchestrator
                .run(&credential, payload, PDF_MEDIA_TYPE, &operation)
                .await
        }
    };

    let job = match result {
        Ok(job) => job,
        Err(err) => {
            progress.failure(&err.to_string());
            return Err(err.into());
        }
    };

    match output {
        Some(path) => {
            progress.stage("downloading artifact");
            download_artifact(&client, &job, path).await?;
            progress.success(&format!("{} finished, saved to {path}", operation.name()));
        }
        None => {
            progress.success(&format!("{} finished", operation.name()));
            progress.print_result(&job);
        }
    }

    Ok(())
}

/// Fetch the artifact from its pre-signed download URI and write it to disk.
async fn download_artifact(
    client: &ServiceClient,
    job: &CompletedJob,
    path: &str,
) -> Result<(), PdflowError> {
    let response = client
        .plain(reqwest::Method::GET, &job.download_uri)
        .send()
        .await
        .map_err(ServiceError::from)?;

    let status = response.status();
    if !status.is_success() {
        return Err(PdflowError::DownloadFailed(status.as_u16()));
    }

    let bytes = response.bytes().await.map_err(ServiceError::from)?;
    tokio::fs::write(path, &bytes).await?;
    Ok(())
}
