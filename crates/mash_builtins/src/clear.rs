use std::io::Write;

use clap::Parser;
use mash_core::command::{Args, Command, CommandResult};

use crate::{status, utils};

/// Command name.
const NAME: &str = "clear";

/// ANSI control sequence erasing the screen and homing the cursor.
const CLEAR_SEQUENCE: &str = "\x1b[2J\x1b[H";

/// Clear the terminal screen.
///
/// This is a built-in shell command.
#[derive(Parser)]
#[clap(name = NAME, version)]
struct ClearOpts;

/// Implementation for the "clear" built-in command.
#[derive(Clone)]
pub struct Clear;
impl Command for Clear {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, args: &mut Args) -> CommandResult {
        if let Err(error) = ClearOpts::try_parse_from(args.args()) {
            return utils::exit_with_parse_error(args.io, error);
        }

        let _ = write!(args.io.stdout, "{CLEAR_SEQUENCE}");
        let _ = args.io.stdout.flush();
        CommandResult::code(status::SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use mash_core::Context;

    use crate::utils::{file_contents, mock_io};

    use super::*;

    #[test]
    fn it_writes_the_clear_sequence() {
        let mut context = Context::new();
        let (mut io, mut stdout, _stderr) = mock_io();
        let arguments = vec![NAME.to_string()];
        let clear = Clear {};

        let mut args = Args::new(&mut context, &mut io, &arguments);
        let result = clear.run(&mut args);
        drop(io);

        assert_eq!(result.code, status::SUCCESS);
        assert_eq!(file_contents(&mut stdout), CLEAR_SEQUENCE);
    }
}
