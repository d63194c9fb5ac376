#![deny(missing_docs)]
//! Shared logging utilities for the retrieval workspace.
//!
//! This crate provides the `retrieval_*` logging macros used across the
//! codebase and a minimal test initializer for the global logger.

use std::cell::Cell;

thread_local! {
    /// Slug of the source currently being driven on this thread.
    static CURRENT_SOURCE: Cell<Option<&'static str>> = const { Cell::new(None) };
}

/// Records which source the current thread is working on.
/// The pipeline driver sets this on entry and clears it when the source is done.
pub fn set_current_source(slug: Option<&'static str>) {
    CURRENT_SOURCE.with(|v| v.set(slug));
}

/// Returns the source slug set by [`set_current_source`], or `"-"` outside a source.
pub fn current_source() -> &'static str {
    CURRENT_SOURCE.with(|v| v.get().unwrap_or("-"))
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! retrieval_trace {
    ($($arg:tt)*) => {{
        log::trace!("[{}] {}", $crate::current_source(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! retrieval_debug {
    ($($arg:tt)*) => {{
        log::debug!("[{}] {}", $crate::current_source(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! retrieval_info {
    ($($arg:tt)*) => {{
        log::info!("[{}] {}", $crate::current_source(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! retrieval_warn {
    ($($arg:tt)*) => {{
        log::warn!("[{}] {}", $crate::current_source(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! retrieval_error {
    ($($arg:tt)*) => {{
        log::error!("[{}] {}", $crate::current_source(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
