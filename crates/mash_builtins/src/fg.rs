use std::io::Write;

use clap::Parser;
use mash_core::command::{Args, Command, CommandResult};
use mash_core::JobId;

use crate::{status, utils};

/// Command name.
const NAME: &str = "fg";

/// Wait for a background job in the foreground.
///
/// Blocks the shell until the job's process terminates, then removes the job
/// from the job table.
///
/// This is a built-in shell command.
#[derive(Parser)]
#[clap(name = NAME, version)]
struct FgOpts {
    /// Identifier of the job to wait for.
    id: usize,
}

/// Implementation for the "fg" built-in command.
#[derive(Clone)]
pub struct Fg;
impl Command for Fg {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, args: &mut Args) -> CommandResult {
        let opts = match FgOpts::try_parse_from(args.args()) {
            Ok(opts) => opts,
            Err(error) => return utils::exit_with_parse_error(args.io, error),
        };
        let id = JobId(opts.id);

        args.context.jobs.poll();
        let Some(job) = args.context.jobs.get(id) else {
            let _ = writeln!(args.io.stderr, "{NAME}: job {id} not found");
            return CommandResult::code(status::GENERAL_ERROR);
        };

        let description = job.description().to_string();
        let _ = writeln!(args.io.stdout, "{description}");

        match args.context.jobs.bring_to_foreground(id) {
            Ok(()) => CommandResult::code(status::SUCCESS),
            Err(error) => {
                let _ = writeln!(args.io.stderr, "{NAME}: {error}");
                CommandResult::code(status::GENERAL_ERROR)
            }
        }
    }
}
