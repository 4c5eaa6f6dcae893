//! Tracing subscriber setup driven by plugin options.

use tracing_subscriber::EnvFilter;

use crate::util::config::{LogLevel, LogOptions};

/// Install a global tracing subscriber for this crate's diagnostics.
///
/// A level of `none` leaves logging untouched. Installation uses
/// `try_init`, so an embedder that already set up its own subscriber
/// keeps it and this call becomes a no-op.
pub fn init(options: &LogOptions) {
    if options.level == LogLevel::None {
        return;
    }

    let filter = EnvFilter::new(format!("gleam_resolve={}", options.level.as_str()));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if options.time {
        builder.try_init()
    } else {
        builder.without_time().try_init()
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed, keeping it");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let options = LogOptions {
            level: LogLevel::Debug,
            time: false,
        };

        // Second call must not panic even though a subscriber exists.
        init(&options);
        init(&options);
    }

    #[test]
    fn test_none_level_is_a_noop() {
        init(&LogOptions::default());
    }
}
