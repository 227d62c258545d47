use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use super::{Shell, ShellInput};

/// An interactive shell backed by a rustyline editor.
pub(crate) struct RustylineShell {
    editor: DefaultEditor,
}

impl RustylineShell {
    pub(crate) fn new() -> rustyline::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Shell for RustylineShell {
    fn prompt_line(&mut self, prompt: &str) -> ShellInput {
        match self.editor.readline(prompt) {
            Ok(line) => ShellInput::Line(line),
            Err(ReadlineError::Interrupted) => ShellInput::Interrupt,
            Err(ReadlineError::Eof) => ShellInput::Logout,
            Err(error) => {
                eprintln!("mash: {error}");
                ShellInput::Logout
            }
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
