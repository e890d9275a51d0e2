use std::env;
use env_logger::{Builder, Env};

/// Starts the logger. `RUST_LOG` wins; otherwise `info`, or `debug` when `verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let level = env::var("RUST_LOG").unwrap_or_else(|_| default.to_string());
    Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .format_module_path(false)
        .init();
}
