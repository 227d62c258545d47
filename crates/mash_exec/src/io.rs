use std::fs::{File, OpenOptions};
use std::io::{Seek, SeekFrom};
use std::path::PathBuf;
use std::process::Stdio;

use mash_ast::RedirectMode;
use os_pipe::{PipeReader, PipeWriter};

use crate::error::{ExecError, ExecResult};

/// Source for a stage's standard input.
pub(crate) enum Input {
    /// Inherit the shell's own input stream.
    Inherit,

    /// Read from a file.
    File(PathBuf),

    /// Read from the preceding pipe.
    Pipe(PipeReader),
}

impl Input {
    /// Converts the source into a [`Stdio`] for a child process, opening the
    /// file if necessary.
    pub(crate) fn into_stdio(self) -> ExecResult<Stdio> {
        match self {
            Input::Inherit => Ok(Stdio::inherit()),
            Input::File(path) => match File::open(&path) {
                Ok(file) => Ok(Stdio::from(file)),
                Err(error) => Err(ExecError::FileNotReadable(path, error)),
            },
            Input::Pipe(reader) => Ok(Stdio::from(reader)),
        }
    }
}

/// Sink for a stage's standard output.
pub(crate) enum Output {
    /// Inherit the shell's own output stream.
    Inherit,

    /// Write to a file.
    File(PathBuf, RedirectMode),

    /// Write to the following pipe.
    Pipe(PipeWriter),
}

impl Output {
    /// Converts the sink into a [`Stdio`] for a child process, opening the
    /// file if necessary.
    pub(crate) fn into_stdio(self) -> ExecResult<Stdio> {
        match self {
            Output::Inherit => Ok(Stdio::inherit()),
            Output::File(path, mode) => Ok(Stdio::from(open_output_file(path, mode)?)),
            Output::Pipe(writer) => Ok(Stdio::from(writer)),
        }
    }
}

/// Sink for a stage's standard error.
///
/// Error streams are never piped. The only redirection is the merge into the
/// final stage's output file.
pub(crate) enum ErrorSink {
    /// Inherit the shell's own error stream.
    Inherit,

    /// Write to the same file as the stage's output.
    OutputFile,
}

/// Opens a file for output redirection.
///
/// Append mode seeks to the end of the file explicitly. The open mode alone
/// does not guarantee append semantics on every platform.
pub(crate) fn open_output_file(path: PathBuf, mode: RedirectMode) -> ExecResult<File> {
    let result = match mode {
        RedirectMode::Truncate => File::create(&path),
        RedirectMode::Append => OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .and_then(|mut file| file.seek(SeekFrom::End(0)).map(|_| file)),
    };

    result.map_err(|error| ExecError::FileNotWritable(path, error))
}
