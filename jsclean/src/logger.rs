//! Logger initialization for the jsclean CLI.
//!
//! Logs go to stderr so stdout only ever carries the run summary.

use std::io::Write;

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes `env_logger` with a compact `[LEVEL target] message` format.
///
/// `RUST_LOG` is honoured (default `warn`) unless `level` is given, in which
/// case it overrides the environment. Calling this more than once is a no-op,
/// which keeps tests that share a process from panicking.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));

    if let Some(level) = level {
        builder.filter_level(level);
    }

    builder.format(|buf, record| {
        writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
    });

    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        init_logger(Some(LevelFilter::Debug));
        init_logger(None);
        log::debug!("logger initialised");
    }
}
