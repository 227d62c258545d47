use clap::Parser;
use mash_core::command::{Action, Args, Command, CommandResult};

use crate::utils;

/// Command name.
const NAME: &str = "exit";

/// Exit the shell.
///
/// If no exit status is supplied, the last command's exit code is used.
///
/// This is a built-in shell command.
#[derive(Parser)]
#[clap(name = NAME, version)]
struct ExitOpts {
    /// Exit status for the shell.
    status: Option<i32>,
}

/// Implementation for the "exit" built-in command.
#[derive(Clone)]
pub struct Exit;
impl Command for Exit {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, args: &mut Args) -> CommandResult {
        match ExitOpts::try_parse_from(args.args()) {
            Ok(opts) => {
                let code = opts.status.unwrap_or(args.context.last_exit);
                CommandResult::with_actions(code, vec![Action::Exit(code)])
            }
            Err(error) => utils::exit_with_parse_error(args.io, error),
        }
    }
}
