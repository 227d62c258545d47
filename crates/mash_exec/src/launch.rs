use std::process::{self, Child, Stdio};

use mash_ast::Stage;

use crate::error::{ExecError, ExecResult};
use crate::io::{open_output_file, ErrorSink, Input, Output};

/// Spawns the OS process for a single pipeline stage.
///
/// The program name is the stage's first argument and its resolution is
/// delegated to the OS loader. Redirection files are opened here; on failure
/// every handle already opened for the stage is dropped before the error is
/// returned.
pub(crate) fn launch_stage(
    stage: &Stage,
    input: Input,
    output: Output,
    stderr: ErrorSink,
) -> ExecResult<Child> {
    let (program, arguments) = stage
        .arguments
        .split_first()
        .expect("stage has at least one argument");

    let mut command = process::Command::new(program);
    command.args(arguments);
    command.stdin(input.into_stdio()?);

    match (output, stderr) {
        // A merged error stream shares the output file's handle.
        (Output::File(path, mode), ErrorSink::OutputFile) => {
            let file = open_output_file(path.clone(), mode)?;
            let merged = file
                .try_clone()
                .map_err(|error| ExecError::FileNotWritable(path, error))?;
            command.stdout(file);
            command.stderr(merged);
        }
        (output, ErrorSink::Inherit) => {
            command.stdout(output.into_stdio()?);
            command.stderr(Stdio::inherit());
        }
        (_, ErrorSink::OutputFile) => unreachable!("stderr only merges into a file redirection"),
    }

    command
        .spawn()
        .map_err(|error| ExecError::SpawnFailed(program.clone(), error))
}
