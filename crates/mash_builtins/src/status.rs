/// Exit code indicating success.
pub const SUCCESS: i32 = 0;

/// Exit code for general errors.
pub const GENERAL_ERROR: i32 = 1;

/// Exit code for misuse of shell built-ins.
pub const BUILTIN_ERROR: i32 = 2;
