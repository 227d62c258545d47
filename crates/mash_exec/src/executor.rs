use std::collections::HashMap;
use std::io;
use std::process::Child;

use mash_ast::{Pipeline, Stage};
use mash_core::command::{Args, Command, CommandResult, Io};
use mash_core::{Context, JobId};
use os_pipe::{PipeReader, PipeWriter};

use crate::error::{ExecError, ExecResult};
use crate::exit::{EXIT_GENERAL_ERROR, EXIT_SUCCESS};
use crate::io::{ErrorSink, Input, Output};
use crate::launch::launch_stage;

/// The result of executing a pipeline.
pub enum PipelineResult {
    /// The pipeline ran in the foreground and exited with a code.
    Exited(i32),

    /// The pipeline was registered as a background job.
    Backgrounded {
        /// Identifier of the newly registered job.
        id: JobId,

        /// OS identifier of the tracked process.
        pid: u32,
    },

    /// A built-in command ran in the shell's own process.
    Builtin(CommandResult),
}

/// Executes pipelines by spawning OS processes and dispatching built-in
/// commands.
pub struct Executor {
    builtins: HashMap<String, Box<dyn Command>>,
}

impl Executor {
    /// Constructs a new executor with a set of built-in commands.
    pub fn new(builtins: Vec<Box<dyn Command>>) -> Self {
        let builtins = builtins
            .into_iter()
            .map(|command| (command.name().to_string(), command))
            .collect();
        Self { builtins }
    }

    /// Returns `true` if a name refers to a built-in command.
    pub fn is_builtin(&self, name: &str) -> bool {
        self.builtins.contains_key(name)
    }

    /// Executes a [`Pipeline`] within a context.
    ///
    /// A single-stage pipeline naming a built-in command runs in-process.
    /// All other pipelines spawn one OS process per stage, connected by
    /// anonymous pipes. A stage that cannot be spawned is reported on the
    /// standard error stream and skipped; the remaining stages still run,
    /// and the broken stage's pipe reads as closed input downstream.
    ///
    /// Foreground pipelines block until every spawned process has
    /// terminated. Background pipelines register their first spawned process
    /// in the context's job table and return without blocking.
    pub fn execute_pipeline(
        &self,
        pipeline: &Pipeline,
        context: &mut Context,
    ) -> ExecResult<PipelineResult> {
        let stages = &pipeline.stages;
        if stages.is_empty() {
            return Ok(PipelineResult::Exited(EXIT_SUCCESS));
        }

        // Built-in commands run in-process, and only outside pipe plumbing.
        if stages.len() == 1 {
            let builtin = stages[0]
                .arguments
                .first()
                .and_then(|name| self.builtins.get(name));
            if let Some(command) = builtin {
                let result = call_builtin(command.as_ref(), &stages[0], context);
                return Ok(PipelineResult::Builtin(result));
            }
        }

        // One pipe connects each pair of adjacent stages. Every endpoint is
        // moved into exactly one launch attempt below, so each end is either
        // transferred to a child process or dropped before waiting begins.
        let mut readers: Vec<Option<PipeReader>> = Vec::with_capacity(stages.len() - 1);
        let mut writers: Vec<Option<PipeWriter>> = Vec::with_capacity(stages.len() - 1);
        for _ in 1..stages.len() {
            let (reader, writer) = os_pipe::pipe().map_err(ExecError::CreatePipeFailed)?;
            readers.push(Some(reader));
            writers.push(Some(writer));
        }

        let mut children = Vec::with_capacity(stages.len());
        let mut spawn_failed = false;
        for (i, stage) in stages.iter().enumerate() {
            let is_first = i == 0;
            let is_last = i + 1 == stages.len();

            let input = if is_first {
                match &stage.input {
                    Some(path) => Input::File(path.clone()),
                    None => Input::Inherit,
                }
            } else {
                Input::Pipe(readers[i - 1].take().expect("pipe read end is unclaimed"))
            };

            let output = if is_last {
                match &stage.output {
                    Some(redirect) => Output::File(redirect.path.clone(), redirect.mode),
                    None => Output::Inherit,
                }
            } else {
                Output::Pipe(writers[i].take().expect("pipe write end is unclaimed"))
            };

            // Stderr is captured only when merged into the final stage's
            // output file. Intermediate stages always inherit.
            let stderr = if is_last && stage.output.is_some() {
                ErrorSink::OutputFile
            } else {
                ErrorSink::Inherit
            };

            match launch_stage(stage, input, output, stderr) {
                Ok(child) => children.push(child),
                Err(error) => {
                    eprintln!("mash: {error}");
                    spawn_failed = true;
                }
            }
        }

        if pipeline.is_background() {
            return Ok(register_job(children, pipeline, context));
        }

        // Wait for every spawned process, not only the last stage. Exit with
        // 0 only if all stages spawned and exited with 0.
        let mut status = if spawn_failed {
            EXIT_GENERAL_ERROR
        } else {
            EXIT_SUCCESS
        };
        for mut child in children {
            match child.wait() {
                Ok(exit_status) => {
                    let code = exit_status.code().unwrap_or(EXIT_GENERAL_ERROR);
                    if code != EXIT_SUCCESS {
                        status = code;
                    }
                }
                Err(error) => {
                    eprintln!("mash: failed to wait for process: {error}");
                    status = EXIT_GENERAL_ERROR;
                }
            }
        }

        Ok(PipelineResult::Exited(status))
    }
}

/// Runs a built-in command with the shell's own standard streams.
fn call_builtin(command: &dyn Command, stage: &Stage, context: &mut Context) -> CommandResult {
    let mut io = Io::new(
        Box::new(io::stdin()),
        Box::new(io::stdout()),
        Box::new(io::stderr()),
    );
    let mut args = Args::new(context, &mut io, &stage.arguments);
    command.run(&mut args)
}

/// Registers the first spawned process of a background pipeline as a job.
///
/// The remaining process handles are dropped without waiting. Their
/// processes continue, tracked only through the first stage.
fn register_job(children: Vec<Child>, pipeline: &Pipeline, context: &mut Context) -> PipelineResult {
    let mut children = children.into_iter();
    let Some(first) = children.next() else {
        // Nothing was spawned, so there is nothing to track.
        return PipelineResult::Exited(EXIT_GENERAL_ERROR);
    };

    let pid = first.id();
    let id = context.jobs.register(first, pipeline.to_string());
    PipelineResult::Backgrounded { id, pid }
}
