use crate::JobTable;

/// An execution context owning the shell-side state of a session.
///
/// Exactly one context exists per shell process. It is threaded through the
/// control loop and every command as a mutable reference. There is no other
/// access path, and thus no synchronization.
pub struct Context {
    /// Background jobs registered within the session.
    pub jobs: JobTable,

    /// The exit code reported by the most recently completed command.
    pub last_exit: i32,
}

impl Context {
    /// Constructs a new context without any background jobs.
    pub fn new() -> Self {
        Self {
            jobs: JobTable::new(),
            last_exit: 0,
        }
    }

    /// Records the exit code of a completed command.
    pub fn register_exit(&mut self, code: i32) {
        self.last_exit = code;
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
