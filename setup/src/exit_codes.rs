//! Stable exit codes for setup CLI commands.

/// All requested steps completed.
pub const OK: i32 = 0;
/// A step failed; the last `[ERROR]` line names the step and the cause.
pub const FAILED: i32 = 1;
