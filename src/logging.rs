//! Diagnostic logging setup
//!
//! Reports and exports go to stdout; diagnostics go to stderr through
//! `tracing`. `RUST_LOG` directives are honoured on top of the verbosity level.

use tracing::Level;

/// Map a `-v` count to a log level
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        tracing_subscriber::EnvFilter::from_default_env().add_directive(level_for(verbosity).into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_names(false)
        .with_line_number(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::quiet(0, Level::WARN)]
    #[case::info(1, Level::INFO)]
    #[case::debug(2, Level::DEBUG)]
    #[case::trace(3, Level::TRACE)]
    #[case::saturates(9, Level::TRACE)]
    fn test_level_for(#[case] verbosity: u8, #[case] expected: Level) {
        assert_eq!(level_for(verbosity), expected);
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(0);
        init(2);
    }
}
