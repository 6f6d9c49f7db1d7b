//! Application-wide constants for tuning and configuration

/// Maximum number of navigation entries kept for back/forward.
/// The oldest entry is dropped once the limit is reached.
pub const HISTORY_LIMIT: usize = 100;

/// Event loop input poll timeout while a request is in flight (ms).
pub const POLL_BUSY_MS: u64 = 50;

/// Event loop input poll timeout when idle (ms).
pub const POLL_IDLE_MS: u64 = 150;

/// Rows moved by PageUp/PageDown in lists, lines in the reader.
pub const PAGE_STEP: usize = 10;

/// Spinner animation frame duration in milliseconds.
pub const SPINNER_FRAME_MS: u128 = 80;

/// Keep the selected row this fraction from the top of a scrolled list
/// (3 = top third).
pub const SCROLL_TARGET_FRACTION: usize = 3;
