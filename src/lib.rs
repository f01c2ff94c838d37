//! Client library for an Adobe-PDF-Services-style document API.
//!
//! The heart of the crate is [`orchestrator::JobOrchestrator`], which drives
//! a document through the service's asynchronous pipeline: acquire a
//! write-once upload slot ([`upload`]), submit a processing job against it
//! ([`submit`]), then poll the job's status address until it reaches a
//! terminal state ([`job`]). Operations (compress, export) are described by
//! [`operation::Operation`] descriptors; credentials come from
//! [`auth::Authenticator`] as immutable [`auth::SessionCredential`] values.

pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod job;
pub mod operation;
pub mod orchestrator;
pub mod service;
pub mod submit;
pub mod ui;
pub mod upload;

pub use auth::{AuthError, Authenticator, SessionCredential};
pub use error::PdflowError;
pub use job::{CompletedJob, JobStatus, PollPolicy, StatusPoller};
pub use operation::{CompressionLevel, ExportFormat, Operation};
pub use orchestrator::JobOrchestrator;
pub use service::{ServiceClient, ServiceError};
