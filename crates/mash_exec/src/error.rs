use std::fmt::Display;
use std::path::PathBuf;

pub type ExecResult<T> = Result<T, ExecError>;

#[derive(Debug)]
pub enum ExecError {
    /// An anonymous pipe could not be created.
    CreatePipeFailed(std::io::Error),

    /// An input redirection file could not be opened.
    FileNotReadable(PathBuf, std::io::Error),

    /// An output redirection file could not be opened.
    FileNotWritable(PathBuf, std::io::Error),

    /// A stage's process could not be spawned. Holds the program name.
    SpawnFailed(String, std::io::Error),
}

impl Display for ExecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecError::CreatePipeFailed(err) => write!(f, "failed to create pipe: {err}"),
            ExecError::FileNotReadable(path, err) => {
                write!(f, "file '{}' is not readable: {err}", path.display())
            }
            ExecError::FileNotWritable(path, err) => {
                write!(f, "file '{}' is not writable: {err}", path.display())
            }
            ExecError::SpawnFailed(program, err) => {
                write!(f, "failed to spawn '{program}': {err}")
            }
        }
    }
}
