pub mod command;
mod context;
mod job;

pub use context::Context;
pub use job::{Job, JobError, JobId, JobSummary, JobTable};
