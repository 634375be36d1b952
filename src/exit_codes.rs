//! Exit code constants for the shotwright CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable shot file, unknown lookup)
//! - 2: Encoder failure (missing conditioning-model handle)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, malformed shot file, or unknown name in a lookup.
pub const USER_ERROR: i32 = 1;

/// Encoder failure: the conditioning-model handle was absent or invalid.
pub const ENCODER_FAILURE: i32 = 2;
