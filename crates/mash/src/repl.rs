use mash_core::command::Action;
use mash_core::Context;
use mash_exec::{Executor, PipelineResult};
use mash_parse::parse;

use crate::shell::{Shell, ShellInput};

/// Main loop for running a [`Shell`].
///
/// Returns the shell's final exit status: the code requested by an `exit`
/// built-in, or the last command's exit status when input ends.
pub(crate) fn run_shell(
    mut shell: Box<dyn Shell>,
    executor: &Executor,
    context: &mut Context,
) -> i32 {
    loop {
        notify_finished_jobs(context);

        let prompt = if shell.is_interactive() {
            prompt()
        } else {
            String::new()
        };

        let line = match shell.prompt_line(&prompt) {
            ShellInput::Line(line) => line,
            ShellInput::Interrupt => continue,
            ShellInput::Logout => break,
        };

        let pipeline = parse(&line);
        if pipeline.stages.is_empty() {
            continue;
        }

        match executor.execute_pipeline(&pipeline, context) {
            Ok(PipelineResult::Exited(code)) => context.register_exit(code),
            Ok(PipelineResult::Backgrounded { id, pid }) => {
                println!("[{id}] {pid}");
                context.register_exit(0);
            }
            Ok(PipelineResult::Builtin(result)) => {
                context.register_exit(result.code);
                for action in result.actions {
                    match action {
                        Action::Exit(code) => return code,
                    }
                }
            }
            Err(error) => {
                eprintln!("mash: {error}");
                context.register_exit(1);
            }
        }
    }

    context.last_exit
}

/// Prints a completion notification for every job that has finished since the
/// previous poll.
fn notify_finished_jobs(context: &mut Context) {
    context.jobs.poll();
    for job in context.jobs.take_finished() {
        println!("[{}] Done    {}", job.id, job.description);
    }
}

/// Returns the interactive prompt, naming the current working directory when
/// it can be determined.
fn prompt() -> String {
    match std::env::current_dir() {
        Ok(cwd) => format!("mash:{}> ", cwd.display()),
        Err(_) => String::from("mash> "),
    }
}
