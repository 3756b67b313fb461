pub mod buttondown;
pub mod telegram;

/// One attempt per message, no retry; the next CI run recovers via the
/// sent log.
pub const SEND_TIMEOUT_SECS: u64 = 10;
