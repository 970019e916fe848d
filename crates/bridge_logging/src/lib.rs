#![deny(missing_docs)]
//! Shared logging utilities for the bridge workspace.
//!
//! This crate provides the `bridge_*` logging macros used by the core, the
//! importer and the host runtime, plus a test initializer for the global
//! logger. The macros forward to the `log` facade, so whichever backend the
//! host installs receives the records.

use std::sync::Once;

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! bridge_trace {
    ($($arg:tt)*) => {{
        log::trace!(target: "trireme", $($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! bridge_debug {
    ($($arg:tt)*) => {{
        log::debug!(target: "trireme", $($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! bridge_info {
    ($($arg:tt)*) => {{
        log::info!(target: "trireme", $($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! bridge_warn {
    ($($arg:tt)*) => {{
        log::warn!(target: "trireme", $($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! bridge_error {
    ($($arg:tt)*) => {{
        log::error!(target: "trireme", $($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// Safe to call from every test: only the first call installs the logger,
/// and an already-installed logger from elsewhere is left alone.
pub fn initialize_for_tests() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

        // Use debug level in debug builds, info in release builds.
        let level = if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };

        let _ = CombinedLogger::init(vec![TermLogger::new(
            level,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        )]);
    });
}
