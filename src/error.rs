use thiserror::Error;

use crate::auth::AuthError;
use crate::service::ServiceError;

#[derive(Debug, Error)]
pub enum PdflowError {
    #[error("config error: {0}")]
    Config(String),

    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("service error: {0}")]
    Service(#[from] ServiceError),

    #[error("artifact download failed (status {0})")]
    DownloadFailed(u16),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
