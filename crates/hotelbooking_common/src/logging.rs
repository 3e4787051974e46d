//! Logging utilities for the hotel booking service.
//!
//! Every crate logs through `tracing`; the binary calls [`init`] once at
//! start-up to install the subscriber.

use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber at INFO.
///
/// # Examples
///
/// ```
/// use hotelbooking_common::logging;
///
/// logging::init();
/// logging::init_with_level(tracing::Level::DEBUG);
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific level for the service's
/// own crates. `RUST_LOG` still applies to everything else.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_with_level(level: Level) {
    let mut filter = EnvFilter::from_default_env();
    for target in ["hotelbooking", "hotelbooking_core", "hotelbooking_db", "hotelbooking_backend"] {
        if let Ok(directive) = format!("{}={}", target, level).parse() {
            filter = filter.add_directive(directive);
        }
    }

    // try_init: a global subscriber may already be installed (tests)
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Log a result, with different messages for success and error cases.
///
/// Returns the original result so it can be used in a chain.
pub fn log_result<T, E: std::fmt::Display>(
    result: Result<T, E>,
    success_message: &str,
    error_context: &str,
) -> Result<T, E> {
    match &result {
        Ok(_) => info!("{}", success_message),
        Err(e) => error!("{}: {}", error_context, e),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init();
        init_with_level(Level::DEBUG);
    }

    #[test]
    fn test_log_result_passes_value_through() {
        let ok: Result<u8, String> = Ok(3);
        assert_eq!(log_result(ok, "done", "failed"), Ok(3));

        let err: Result<u8, String> = Err("bad".to_string());
        assert_eq!(log_result(err, "done", "failed"), Err("bad".to_string()));
    }
}
