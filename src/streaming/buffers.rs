//! Buffer size constants for streaming operations.

/// Default read window for the tab-delimited decoder (1 KB).
/// Lines longer than a window are reassembled through the carryover.
pub const DEFAULT_READ_WINDOW: usize = 1024;

/// Default output buffer size (64 KB).
/// A full project table is a few hundred kilobytes at most.
pub const DEFAULT_OUTPUT_BUFFER: usize = 64 * 1024;

/// Initial carryover capacity (256 bytes).
/// Sufficient for most protein lines.
pub const DEFAULT_CARRYOVER_CAPACITY: usize = 256;

/// Clamp a requested read window to something the decoder can use.
#[inline]
pub const fn read_window_size(requested: usize) -> usize {
    if requested == 0 {
        1
    } else {
        requested
    }
}
