//! Process exit codes
//!
//! Translated statuses occupy 0..=63, one bit per pylint category. Codes the
//! tool uses for its own failures sit outside that range so CI scripts can
//! tell them apart from a lint result.

/// Nothing reportable was signaled
pub const SUCCESS: i32 = 0;

/// Highest status a translation can produce (every category blocking)
pub const MAX_TRANSLATED: i32 = 63;

/// Tool error: bad arguments, unreadable configuration, I/O failure
pub const TOOL_ERROR: i32 = 64;
