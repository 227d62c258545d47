pub(crate) mod command;
pub(crate) mod interactive;

#[cfg(test)]
use mockall::automock;

/// Input resulting from prompting a [`Shell`] for a line.
pub(crate) enum ShellInput {
    /// A line of input.
    Line(String),
    /// Discard the current line and prompt again.
    Interrupt,
    /// End of input. Exit the shell.
    Logout,
}

#[cfg_attr(test, automock)]
pub(crate) trait Shell {
    /// Prompts the user for a line of input.
    fn prompt_line(&mut self, prompt: &str) -> ShellInput;

    /// Returns `true` if the shell is run interactively, i.e. a user is
    /// prompted for input.
    fn is_interactive(&self) -> bool;
}
