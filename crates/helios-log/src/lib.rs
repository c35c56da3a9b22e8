//! Structured logging via the `tracing` ecosystem.
//!
//! Console output with module targets, severity levels, and an uptime
//! timestamp. Filtering respects `RUST_LOG`; an explicit level override from
//! configuration takes its place when the environment variable is unset.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// `level_override` is a tracing filter string (e.g. `"debug"` or
/// `"info,helios_nbody=trace"`), typically from the config file's
/// `debug.log_level`. `RUST_LOG` wins when set; pass `None` or an empty
/// string for the default `info` filter.
///
/// Calling this twice panics (the global subscriber can only be set once),
/// so the binary calls it exactly once at startup.
pub fn init_logging(level_override: Option<&str>) {
    let fallback = match level_override {
        Some(level) if !level.is_empty() => level.to_string(),
        _ => "info".to_string(),
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&fallback));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

/// The default filter used when neither `RUST_LOG` nor an override is set.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new("info")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_enables_info() {
        let filter = default_env_filter();
        assert!(format!("{filter}").contains("info"));
    }

    #[test]
    fn test_override_strings_parse() {
        let overrides = [
            "info",
            "debug,helios_planet=trace",
            "warn,helios_nbody=debug",
            "error",
        ];
        for filter_str in overrides {
            assert!(
                EnvFilter::try_new(filter_str).is_ok(),
                "filter {filter_str:?} failed to parse"
            );
        }
    }
}
