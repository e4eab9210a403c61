//! Console logging setup.
//!
//! ```ignore
//! use bodsphere_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new().with_filter("bodsphere_core=debug").try_init()?;
//! ```
//!
//! `RUST_LOG` wins over the builder's default filter but not over an explicit
//! `with_filter` call.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::error::{SiteError, SiteResult};

/// Filter used when neither `RUST_LOG` nor `with_filter` is set.
pub const DEFAULT_FILTER: &str = "bodsphere_desktop=info,bodsphere_core=info,bodsphere_ui=info";

/// Builder for the global tracing subscriber.
#[derive(Debug, Clone, Default)]
pub struct LoggingBuilder {
    env_filter: Option<String>,
    with_target: bool,
}

impl LoggingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter directive (e.g. "bodsphere_desktop=info,bodsphere_core=debug").
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Include the event target (module path) in console lines.
    pub fn with_target(mut self, enabled: bool) -> Self {
        self.with_target = enabled;
        self
    }

    /// Resolve the filter: explicit, then `RUST_LOG`, then the default.
    pub fn build_filter(&self) -> SiteResult<EnvFilter> {
        match &self.env_filter {
            Some(directive) => EnvFilter::try_new(directive)
                .map_err(|e| SiteError::Logging(format!("bad filter '{}': {}", directive, e))),
            None => Ok(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
        }
    }

    /// Install the subscriber globally. Fails if one is already installed.
    pub fn try_init(self) -> SiteResult<()> {
        let filter = self.build_filter()?;
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(self.with_target))
            .try_init()
            .map_err(|e| SiteError::Logging(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_is_parsed() {
        let builder = LoggingBuilder::new().with_filter("bodsphere_core=debug");
        assert!(builder.build_filter().is_ok());
    }

    #[test]
    fn bad_filter_is_rejected() {
        let builder = LoggingBuilder::new().with_filter("bodsphere_core=loud");
        assert!(matches!(builder.build_filter(), Err(SiteError::Logging(_))));
    }

    #[test]
    fn second_install_fails() {
        // Whichever call runs first may win; at most one can succeed.
        let first = LoggingBuilder::new().try_init();
        let second = LoggingBuilder::new().try_init();
        assert!(first.is_err() || second.is_err());
    }
}
