//! Exit codes for the `promptscore` binary.
//! Scripts rely on these; keep them stable.

pub const SUCCESS: i32 = 0;
pub const INVALID_INPUT: i32 = 1; // Empty prompt or unusable argument
pub const INTERNAL_ERROR: i32 = 2; // Configuration, preference store, or unexpected state
pub const SERVER_ERROR: i32 = 3; // Backend answered with a non-2xx status
pub const NETWORK_ERROR: i32 = 4; // No usable response from the backend
