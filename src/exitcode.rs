//! Process exit codes
//!
//! Every fatal condition exits with 1, the named constants keep call sites
//! readable.

/// Successful termination (at least one project rendered or reported)
pub const OK: i32 = 0;

/// Generic failure
pub const FAILURE: i32 = 1;

/// Command line usage error (missing report path)
pub const USAGE: i32 = FAILURE;

/// Report file could not be read
pub const NOINPUT: i32 = FAILURE;

/// Report holds no project section
pub const DATAERR: i32 = FAILURE;

/// Configuration error
pub const CONFIG: i32 = FAILURE;
