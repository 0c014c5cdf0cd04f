//! Global configuration for runtime parsing behavior.
//!
//! This module provides thread-safe global configuration that affects
//! record parsing without adding overhead to the decode loop.

use std::sync::atomic::{AtomicBool, Ordering};

/// Global flag for strict field counts.
///
/// When enabled, a tab-delimited line with fewer than twelve columns is
/// rejected as malformed. When disabled (the default) the missing trailing
/// columns keep their default values.
///
/// This is set once at startup and read once per parsed line.
static STRICT_FIELDS: AtomicBool = AtomicBool::new(false);

/// Enable or disable strict field counts.
///
/// # Example
///
/// ```
/// use fah_proteins::config;
///
/// // Enable at startup before any parsing
/// config::set_strict_fields(true);
/// assert!(config::is_strict_fields());
/// # config::set_strict_fields(false);
/// ```
#[inline]
pub fn set_strict_fields(enabled: bool) {
    STRICT_FIELDS.store(enabled, Ordering::Release);
}

/// Check if strict field counts are enabled.
#[inline]
pub fn is_strict_fields() -> bool {
    STRICT_FIELDS.load(Ordering::Acquire)
}
