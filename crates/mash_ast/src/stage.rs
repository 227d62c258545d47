use std::fmt;
use std::path::PathBuf;

/// A stage represents a single command within a pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stage {
    /// List of arguments for the command. The first argument represents the
    /// name of the program to execute.
    pub arguments: Vec<String>,

    /// File to read the command's input from. Stages other than the first in
    /// a pipeline read from the preceding pipe instead.
    pub input: Option<PathBuf>,

    /// File to write the command's output to. Stages other than the last in
    /// a pipeline write to the following pipe instead.
    pub output: Option<Redirect>,

    /// Whether or not the stage was marked for background execution.
    ///
    /// Only the final stage's marker decides a pipeline's disposition. See
    /// [`Pipeline::is_background`](crate::Pipeline::is_background).
    pub background: bool,
}

impl Stage {
    /// Appends an argument to the stage.
    pub fn arg<A: Into<String>>(&mut self, arg: A) {
        self.arguments.push(arg.into());
    }
}

/// Renders the stage's arguments as a command line for display.
///
/// Arguments containing whitespace are wrapped in double quotes. Embedded
/// quotes are not escaped. Redirections and background markers are omitted.
impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }

            if argument.contains(char::is_whitespace) {
                write!(f, "\"{argument}\"")?;
            } else {
                f.write_str(argument)?;
            }
        }

        Ok(())
    }
}

/// An output redirect for the final stage of a pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    /// File to redirect the output to.
    pub path: PathBuf,

    /// How the file should be opened.
    pub mode: RedirectMode,
}

/// File modes for output redirection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectMode {
    /// Replace the file's previous contents.
    Truncate,

    /// Keep the file's previous contents and write after them.
    Append,
}
