pub mod client;
pub mod error;
pub mod types;

pub use client::{SERVICE_URL, ServiceClient};
pub use error::ServiceError;
pub use types::{AssetResponse, JobStatusResponse};
