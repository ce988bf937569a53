//! Logger setup for the CLI.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes `env_logger` once.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks `debug` over the
/// default `info`. Log lines go to stderr, keeping stdout for command output.
pub fn init_logging(verbose: bool) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(default_level(verbose));
        if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        }
        builder.target(env_logger::Target::Stderr);
        builder.init();
        log::debug!("logging initialized");
    });
}

/// Level used when `RUST_LOG` is unset.
fn default_level(verbose: bool) -> log::LevelFilter {
    if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}
