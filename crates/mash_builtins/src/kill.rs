use std::io::Write;

use clap::Parser;
use mash_core::command::{Args, Command, CommandResult};
use mash_core::JobId;

use crate::{status, utils};

/// Command name.
const NAME: &str = "kill";

/// Forcibly terminate a background job.
///
/// The job is removed from the job table once its process has been
/// terminated. If the OS refuses to terminate the process, the job is kept
/// so the operation can be retried.
///
/// This is a built-in shell command.
#[derive(Parser)]
#[clap(name = NAME, version)]
struct KillOpts {
    /// Identifier of the job to terminate.
    id: usize,
}

/// Implementation for the "kill" built-in command.
#[derive(Clone)]
pub struct Kill;
impl Command for Kill {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, args: &mut Args) -> CommandResult {
        let opts = match KillOpts::try_parse_from(args.args()) {
            Ok(opts) => opts,
            Err(error) => return utils::exit_with_parse_error(args.io, error),
        };
        let id = JobId(opts.id);

        match args.context.jobs.terminate(id) {
            Ok(()) => {
                let _ = writeln!(args.io.stdout, "[{id}] Terminated");
                CommandResult::code(status::SUCCESS)
            }
            Err(error) => {
                let _ = writeln!(args.io.stderr, "{NAME}: {error}");
                CommandResult::code(status::GENERAL_ERROR)
            }
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::process::{Command as OsCommand, Stdio};

    use mash_core::Context;

    use crate::utils::{file_contents, mock_io};

    use super::*;

    #[test]
    fn it_terminates_a_running_job() {
        let mut context = Context::new();
        let child = OsCommand::new("sleep")
            .arg("30")
            .stdin(Stdio::null())
            .spawn()
            .expect("test process should spawn");
        let id = context.jobs.register(child, "sleep 30".into());
        let (mut io, mut stdout, _stderr) = mock_io();
        let arguments = vec![NAME.to_string(), id.to_string()];
        let kill = Kill {};

        let mut args = Args::new(&mut context, &mut io, &arguments);
        let result = kill.run(&mut args);
        drop(io);

        assert_eq!(result.code, status::SUCCESS);
        assert_eq!(file_contents(&mut stdout), format!("[{id}] Terminated\n"));
        assert!(context.jobs.is_empty());
    }

    #[test]
    fn it_reports_unknown_jobs() {
        let mut context = Context::new();
        let (mut io, _stdout, mut stderr) = mock_io();
        let arguments = vec![NAME.to_string(), "42".to_string()];
        let kill = Kill {};

        let mut args = Args::new(&mut context, &mut io, &arguments);
        let result = kill.run(&mut args);
        drop(io);

        assert_eq!(result.code, status::GENERAL_ERROR);
        assert_eq!(file_contents(&mut stderr), "kill: job 42 not found\n");
    }
}
