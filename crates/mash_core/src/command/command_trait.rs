use super::{Args, CommandResult};

/// A command is something that can be executed by the shell without spawning
/// an OS process.
pub trait Command {
    /// Returns the command's name.
    fn name(&self) -> &str;

    /// Runs the command.
    fn run(&self, args: &mut Args) -> CommandResult;
}
