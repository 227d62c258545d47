use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use mash_core::command::{Args, Command, CommandResult};

use crate::{status, utils};

/// Command name.
const NAME: &str = "cd";

/// Change the shell's working directory.
///
/// If no directory is supplied, the user's home directory is used.
///
/// This is a built-in shell command.
#[derive(Parser)]
#[clap(name = NAME, version)]
struct CdOpts {
    /// Directory to change to.
    directory: Option<PathBuf>,
}

/// Implementation for the "cd" built-in command.
#[derive(Clone)]
pub struct Cd;
impl Command for Cd {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, args: &mut Args) -> CommandResult {
        let opts = match CdOpts::try_parse_from(args.args()) {
            Ok(opts) => opts,
            Err(error) => return utils::exit_with_parse_error(args.io, error),
        };

        let Some(directory) = opts.directory.or_else(dirs::home_dir) else {
            let _ = writeln!(args.io.stderr, "{NAME}: home directory not found");
            return CommandResult::code(status::GENERAL_ERROR);
        };

        match std::env::set_current_dir(&directory) {
            Ok(()) => CommandResult::code(status::SUCCESS),
            Err(error) => {
                let _ = writeln!(args.io.stderr, "{NAME}: {}: {error}", directory.display());
                CommandResult::code(status::GENERAL_ERROR)
            }
        }
    }
}
