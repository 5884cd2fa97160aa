//! Tracing subscriber setup
//!
//! `RUST_LOG` takes precedence over the configured level. Initialisation is
//! idempotent: once a global subscriber is installed, later calls are no-ops.

use autooptix_domain::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber described by `config`
///
/// Returns `true` when this call installed the subscriber and `false` when
/// one was already present.
pub fn init(config: &LoggingConfig) -> bool {
    let filter = build_filter(config);
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);

    let installed = if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    };

    if installed {
        tracing::debug!(level = %config.level, json = config.json, "Tracing initialised");
    }
    installed
}

/// Filter from `RUST_LOG`, falling back to the configured level
///
/// An unparseable configured level degrades to `info`.
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let config = LoggingConfig::default();
        // the first call may lose to another test in this binary
        let _ = init(&config);
        assert!(!init(&config));
        assert!(!init(&LoggingConfig { json: true, ..config }));
    }

    #[test]
    fn test_invalid_level_falls_back() {
        let config = LoggingConfig { level: "not a [level".to_string(), json: false };
        let filter = build_filter(&config);
        assert!(!filter.to_string().is_empty());
    }
}
