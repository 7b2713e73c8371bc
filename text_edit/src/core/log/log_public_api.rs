// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::dispatcher;

use crate::{TracingConfig, ok};

/// Global default subscriber, which once set, can't be unset or changed.
/// - This is great for apps.
/// - Docs for [Global default tracing
///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_global_default.html)
///
/// Logging is **DISABLED** by **default**. If you never call this function w/ a value
/// other than [`tracing_core::LevelFilter::OFF`], the [`tracing::debug!`] events that the
/// edit model emits go nowhere.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global subscriber was
/// already installed.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return ok!();
    }

    it.install_global()
}

/// Thread local subscriber, which is thread local, and you can assign different ones
/// to different threads.
/// - This is great for tests.
/// - Docs for [Thread local tracing
///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_default.html)
///
/// Logging stays installed until the returned guard is dropped. When the level filter is
/// [`tracing_core::LevelFilter::OFF`] nothing is installed and `None` is returned.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}

#[cfg(test)]
mod tests {
    use tracing_core::LevelFilter;

    use super::*;
    use crate::{DisplayPreference, WriterConfig};

    #[test]
    fn test_off_installs_nothing() {
        let guard = try_initialize_logging_thread_local(LevelFilter::OFF).unwrap();
        assert!(guard.is_none());
        assert!(try_initialize_logging_global(LevelFilter::OFF).is_ok());
    }

    #[test]
    fn test_thread_local_install_returns_guard() {
        let config = TracingConfig {
            writer_config: WriterConfig::Display(DisplayPreference::Stderr),
            level_filter: LevelFilter::DEBUG,
        };
        let guard = try_initialize_logging_thread_local(config).unwrap();
        assert!(guard.is_some());
        tracing::debug!(message = "thread local subscriber installed");
        drop(guard);
    }
}
