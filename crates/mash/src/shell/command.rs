use super::{Shell, ShellInput};

/// A non-interactive shell serving a single predetermined line of input.
pub(crate) struct SingleCommandShell {
    it: Option<String>,
}

impl SingleCommandShell {
    pub(crate) fn new(line: String) -> Self {
        Self { it: Some(line) }
    }
}

impl Shell for SingleCommandShell {
    fn prompt_line(&mut self, _prompt: &str) -> ShellInput {
        if let Some(line) = std::mem::take(&mut self.it) {
            return ShellInput::Line(line);
        }

        ShellInput::Logout
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
