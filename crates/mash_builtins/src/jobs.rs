use std::io::Write;

use clap::Parser;
use mash_core::command::{Args, Command, CommandResult};

use crate::{status, utils};

/// Command name.
const NAME: &str = "jobs";

/// List the shell's background jobs.
///
/// Jobs that have finished since they were last polled are reported as done
/// before the running jobs are listed.
///
/// This is a built-in shell command.
#[derive(Parser)]
#[clap(name = NAME, version)]
struct JobsOpts;

/// Implementation for the "jobs" built-in command.
#[derive(Clone)]
pub struct Jobs;
impl Command for Jobs {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, args: &mut Args) -> CommandResult {
        if let Err(error) = JobsOpts::try_parse_from(args.args()) {
            return utils::exit_with_parse_error(args.io, error);
        }

        args.context.jobs.poll();
        for job in args.context.jobs.take_finished() {
            let _ = writeln!(args.io.stdout, "[{}] Done    {}", job.id, job.description);
        }

        let running = args.context.jobs.list();
        if running.is_empty() {
            let _ = writeln!(args.io.stdout, "No background jobs");
            return CommandResult::code(status::SUCCESS);
        }

        for job in running {
            let _ = writeln!(args.io.stdout, "[{}] PID:{} {}", job.id, job.pid, job.description);
        }

        CommandResult::code(status::SUCCESS)
    }
}
