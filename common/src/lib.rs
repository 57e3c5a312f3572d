//! Shared building blocks for the hhfuzz workspace: the immutable run
//! configuration, target parsing and the fatal error taxonomy.

pub mod config;
pub mod error;
pub mod target;

/// Logs an informational line, rendered as `[+]` by the cli formatter.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => { ::tracing::info!($($arg)*) };
}

/// Logs a warning line, rendered as `[*]` by the cli formatter.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => { ::tracing::warn!($($arg)*) };
}

/// Logs a highlighted success line, rendered as `[✓]` by the cli formatter.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => { ::tracing::info!(target: "hhfuzz::success", $($arg)*) };
}
