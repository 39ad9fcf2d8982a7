//! Exit code constants for prompt-hub-push.
//!
//! - 0: Every prompt was published
//! - 1: Missing credential, or at least one upload failed

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Configuration error or one or more failed uploads.
pub const FAILURE: i32 = 1;
