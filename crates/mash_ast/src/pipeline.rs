use std::fmt;

use crate::Stage;

/// A pipeline allows multiple programs to be connected using "pipes", sending
/// one program's output as input for another program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    /// Individual stages arranged such that the `n`-th stage writes its output
    /// to the input of the `(n+1)`-th stage. The first stage reads its input
    /// from the shell's standard input, and the last stage writes its output
    /// to the shell's standard output, unless redirected to a file.
    pub stages: Vec<Stage>,
}

impl Pipeline {
    /// Returns `true` if the pipeline should be executed in the background.
    ///
    /// The final stage's marker is authoritative. Markers on earlier stages
    /// have no effect on the pipeline's disposition.
    pub fn is_background(&self) -> bool {
        self.stages.last().map_or(false, |stage| stage.background)
    }
}

/// Renders the pipeline as a command line for display, joining stages with
/// a pipe operator.
impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stage) in self.stages.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }

            write!(f, "{stage}")?;
        }

        Ok(())
    }
}
