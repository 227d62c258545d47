mod cd;
mod clear;
mod exit;
mod fg;
mod help;
mod jobs;
mod kill;
mod status;
mod utils;

pub use cd::Cd;
pub use clear::Clear;
pub use exit::Exit;
pub use fg::Fg;
pub use help::Help;
pub use jobs::Jobs;
pub use kill::Kill;

/// Returns all built-in commands provided by the shell.
pub fn all_builtins() -> Vec<Box<dyn mash_core::command::Command>> {
    vec![
        Box::new(Cd {}),
        Box::new(Clear {}),
        Box::new(Exit {}),
        Box::new(Fg {}),
        Box::new(Help {}),
        Box::new(Jobs {}),
        Box::new(Kill {}),
    ]
}
