//! Logging boundary for ordkey.
//!
//! All events go through `tracing` with target "ordkey" and carry an `event`
//! field. The library never installs a subscriber; embedding engines do.
//!
//! Comparison is a hot path: it only logs when it fails.

/// Target for all ordkey log events.
pub(crate) const ORDKEY_TARGET: &str = "ordkey";

/// Macro for info-level log events.
///
/// # Example
/// ```ignore
/// log_info!(
///     component = "config",
///     event = "config_loaded",
///     max_text_len = limits.max_text_len,
/// );
/// ```
macro_rules! log_info {
    ($($field:tt)*) => {
        ::tracing::info!(target: $crate::obs::ORDKEY_TARGET, $($field)*)
    };
}

/// Macro for debug-level log events.
macro_rules! log_debug {
    ($($field:tt)*) => {
        ::tracing::debug!(target: $crate::obs::ORDKEY_TARGET, $($field)*)
    };
}

/// Macro for warn-level log events.
macro_rules! log_warn {
    ($($field:tt)*) => {
        ::tracing::warn!(target: $crate::obs::ORDKEY_TARGET, $($field)*)
    };
}

pub(crate) use log_debug;
pub(crate) use log_info;
pub(crate) use log_warn;
