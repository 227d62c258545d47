/// Status code for a successful exit.
pub(crate) const EXIT_SUCCESS: i32 = 0;

/// Catch-all status code for general errors.
pub(crate) const EXIT_GENERAL_ERROR: i32 = 1;
