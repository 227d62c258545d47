mod repl;
mod shell;


use clap::{crate_version, Parser};
use mash_builtins::all_builtins;
use mash_core::Context;
use mash_exec::Executor;

use crate::repl::run_shell;
use crate::shell::{command::SingleCommandShell, interactive::RustylineShell, Shell};

/// Command line options for the application's CLI.
#[derive(Parser)]
#[clap(
    about("A small shell for command interpretation."),
    version(crate_version!())
)]
struct Opts {
    /// Command to run instead of starting an interactive shell.
    #[clap(short, long)]
    command: Option<String>,
}

/// Entrypoint for the application.
fn main() {
    let opts = Opts::parse();

    let shell: Box<dyn Shell> = match opts.command {
        Some(line) => Box::new(SingleCommandShell::new(line)),
        None => match RustylineShell::new() {
            Ok(shell) => Box::new(shell),
            Err(error) => {
                eprintln!("mash: failed to initialize terminal: {error}");
                std::process::exit(1);
            }
        },
    };

    let mut context = Context::new();
    let executor = Executor::new(all_builtins());
    let code = run_shell(shell, &executor, &mut context);
    std::process::exit(code);
}
