//! Log line formatting for applications embedding this client.
//!
//! Produces records shaped as
//! `[2026-08-30T12:00:00.000Z] [ThreadId(1)] [DEBUG] [target] message`,
//! one line per record.

use std::io::Write;

use env_logger::{Builder, Env};

/// Returns an `env_logger` builder preconfigured with this crate's line
/// format and a `warn` default filter. Callers can adjust the filter (the
/// usual `RUST_LOG` variable still applies) before calling `init`.
pub fn builder() -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "[{}] [{:?}] [{}] [{}] {}",
            buf.timestamp_millis(),
            std::thread::current().id(),
            record.level(),
            record.target(),
            record.args()
        )
    });
    builder
}

/// Installs the formatter as the global logger.
///
/// Panics if a logger is already set; use [`try_init`] when that can happen.
pub fn init() {
    builder().init();
}

/// Fallible variant of [`init`] for use in tests and embedded contexts.
pub fn try_init() -> std::result::Result<(), log::SetLoggerError> {
    builder().try_init()
}
