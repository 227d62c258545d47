use crate::{command::Io, Context};

/// Arguments that can be passed to a command.
pub struct Args<'a> {
    /// Execution context for the command.
    pub context: &'a mut Context,

    /// File descriptors that the command can use for input and output.
    pub io: &'a mut Io,

    /// Positional arguments, starting with the command's own name.
    arguments: &'a [String],
}

impl<'a> Args<'a> {
    /// Constructs a new argument bundle for a command invocation.
    pub fn new(context: &'a mut Context, io: &'a mut Io, arguments: &'a [String]) -> Self {
        Self {
            context,
            io,
            arguments,
        }
    }

    /// Returns the positional arguments, starting with the command's own
    /// name.
    pub fn args(&self) -> &[String] {
        self.arguments
    }
}
