pub mod poll;
pub mod status;

pub use poll::{PollPolicy, StatusPoller};
pub use status::{CompletedJob, JobFailure, JobStatus};
