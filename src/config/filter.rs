//! Runtime log filter.
//!
//! The filter is the hot-swappable subset of [`LogConfig`]: the optional
//! minimum severity gate and the conditional-placeholder threshold. Log
//! calls take a lock-free snapshot per call; writers swap the whole value
//! atomically, so a call observes either the old or the new filter, never a
//! mix.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::schema::LogConfig;
use crate::severity::Severity;

/// The filter fields consulted on every log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterConfig {
    /// Most verbose severity that reaches the backend; `None` disables the
    /// gate.
    pub min_severity: Option<Severity>,
    /// Threshold for `{?:}` placeholders.
    pub conditional_threshold: Severity,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_severity: None,
            conditional_threshold: Severity::Warn,
        }
    }
}

impl FilterConfig {
    /// Extract the filter fields from a full config.
    pub fn from_config(config: &LogConfig) -> Self {
        Self {
            min_severity: config.min_severity,
            conditional_threshold: config.conditional_threshold,
        }
    }

    /// Whether a call at `severity` may reach the backend.
    pub fn allows(&self, severity: Severity) -> bool {
        match self.min_severity {
            None => true,
            Some(min) => severity.is_at_most(min),
        }
    }
}

/// Shared, atomically swappable view of a [`FilterConfig`].
///
/// Cheap to clone; all clones observe the same filter.
#[derive(Debug, Clone)]
pub struct FilterHandle {
    inner: Arc<ArcSwap<FilterConfig>>,
}

impl Default for FilterHandle {
    fn default() -> Self {
        Self::new(FilterConfig::default())
    }
}

impl FilterHandle {
    pub fn new(config: FilterConfig) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(config)),
        }
    }

    /// The current filter.
    pub fn snapshot(&self) -> FilterConfig {
        **self.inner.load()
    }

    /// Replace the whole filter.
    pub fn store(&self, config: FilterConfig) {
        self.inner.store(Arc::new(config));
    }

    /// Adopt the filter fields of a full config.
    pub fn apply(&self, config: &LogConfig) {
        self.store(FilterConfig::from_config(config));
    }

    /// Adjust the minimum-severity gate.
    pub fn set_min_severity(&self, min_severity: Option<Severity>) {
        self.inner.rcu(|current| FilterConfig {
            min_severity,
            ..**current
        });
    }

    /// Adjust the conditional-placeholder threshold.
    pub fn set_conditional_threshold(&self, conditional_threshold: Severity) {
        self.inner.rcu(|current| FilterConfig {
            conditional_threshold,
            ..**current
        });
    }
}
