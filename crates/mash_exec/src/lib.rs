mod error;
mod executor;
mod exit;
mod io;
mod launch;

pub use error::{ExecError, ExecResult};
pub use executor::{Executor, PipelineResult};
