use std::io::Write;

use clap::Parser;
use mash_core::command::{Args, Command, CommandResult};

use crate::{status, utils};

/// Command name.
const NAME: &str = "help";

/// Usage summary printed by the command.
const HELP_TEXT: &str = "\
mash - a small interactive shell

Pipeline syntax:
  cmd [args...] [< file] [| cmd [args...]]... [> file | >> file] [&]

A trailing & runs the pipeline in the background.

Built-in commands:
  cd [directory]   Change the working directory (home by default).
  exit [code]      Exit the shell (last exit status by default).
  jobs             List background jobs.
  fg <id>          Wait for a background job in the foreground.
  kill <id>        Terminate a background job.
  help             Show this message.
  clear            Clear the terminal screen.";

/// Print a usage summary for the shell.
///
/// This is a built-in shell command.
#[derive(Parser)]
#[clap(name = NAME, version)]
struct HelpOpts;

/// Implementation for the "help" built-in command.
#[derive(Clone)]
pub struct Help;
impl Command for Help {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, args: &mut Args) -> CommandResult {
        if let Err(error) = HelpOpts::try_parse_from(args.args()) {
            return utils::exit_with_parse_error(args.io, error);
        }

        let _ = writeln!(args.io.stdout, "{HELP_TEXT}");
        CommandResult::code(status::SUCCESS)
    }
}
