use sentry::ClientInitGuard;
use sentry_tracing::EventFilter;
use std::borrow::Cow;
use thiserror::Error;
use tracing_core::{Level, LevelFilter};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use typed_builder::TypedBuilder;

#[derive(TypedBuilder, Debug)]
pub struct TracingConfig {
    // set by the binary so the sentry release names the binary, not this crate
    pub package: &'static str,
    pub version: &'static str,
    #[builder(default)]
    pub sentry_dsn: Option<String>,
    #[builder(setter(into), default = String::from("dev"))]
    pub env: String,
    /// Level used when `RUST_LOG` is unset or unparsable.
    #[builder(default = LevelFilter::INFO)]
    pub default_level: LevelFilter,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    TracingInit(#[from] tracing_subscriber::util::TryInitError),
}

/// Keeps the sentry client alive. Events are flushed when it is dropped.
pub struct TracingGuard {
    _sentry: ClientInitGuard,
}

fn sentry_event_filter(level: &Level) -> EventFilter {
    match *level {
        Level::ERROR => EventFilter::Event,
        Level::TRACE => EventFilter::Ignore,
        _ => EventFilter::Breadcrumb,
    }
}

/// Installs the global subscriber: a fmt layer filtered by `RUST_LOG` and a
/// sentry layer that reports errors as events and everything below as
/// breadcrumbs.
pub fn setup(config: TracingConfig) -> Result<TracingGuard, Error> {
    let guard = sentry::init((
        config.sentry_dsn.clone(),
        sentry::ClientOptions {
            release: Some(Cow::Owned(format!("{}@{}", config.package, config.version))),
            environment: Some(Cow::Owned(config.env.clone())),
            ..Default::default()
        },
    ));

    let sentry_layer = sentry_tracing::layer().event_filter(|md| sentry_event_filter(md.level()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(config.default_level.into())
                .from_env_lossy(),
        )
        .with(sentry_layer)
        .try_init()?;

    Ok(TracingGuard { _sentry: guard })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentry_event_filter() {
        assert!(matches!(sentry_event_filter(&Level::ERROR), EventFilter::Event));
        assert!(matches!(sentry_event_filter(&Level::WARN), EventFilter::Breadcrumb));
        assert!(matches!(sentry_event_filter(&Level::DEBUG), EventFilter::Breadcrumb));
        assert!(matches!(sentry_event_filter(&Level::TRACE), EventFilter::Ignore));
    }

    #[test]
    fn test_config_defaults() {
        let config = TracingConfig::builder().package("wisemind").version("0.1.0").build();
        assert_eq!(config.env, "dev");
        assert_eq!(config.default_level, LevelFilter::INFO);
        assert!(config.sentry_dsn.is_none());
    }
}
