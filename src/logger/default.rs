//! Default logger implementation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::backend::{self, BackendError, LogBackend};
use crate::config::{FilterConfig, FilterHandle, LogConfig};
use crate::error::LogResult;
use crate::logger::Logger;
use crate::severity::Severity;
use crate::template::{self, Arg};

/// Formats messages and forwards them to a fixed backend.
///
/// Construction is the only mutable moment: afterwards the logger holds an
/// `Arc` to its backend and a [`FilterHandle`], and every call runs the same
/// gate → format → output sequence.
pub struct DefaultLogger {
    backend: Arc<dyn LogBackend>,
    filter: FilterHandle,
}

impl DefaultLogger {
    /// Logger over `backend` with the default filter: no minimum-severity
    /// gate, conditional threshold `Warn`.
    pub fn new(backend: Arc<dyn LogBackend>) -> Self {
        Self {
            backend,
            filter: FilterHandle::default(),
        }
    }

    /// Logger over `backend` using the filter fields of `config`.
    pub fn with_config(backend: Arc<dyn LogBackend>, config: &LogConfig) -> Self {
        Self {
            backend,
            filter: FilterHandle::new(FilterConfig::from_config(config)),
        }
    }

    /// Build the sink described by `config` and a logger over it.
    pub async fn from_config(config: &LogConfig) -> Result<Self, BackendError> {
        let backend = backend::from_config(&config.sink).await?;
        Ok(Self::with_config(backend, config))
    }

    /// Handle for runtime filter adjustment (and for [`ConfigWatcher`]).
    ///
    /// [`ConfigWatcher`]: crate::config::ConfigWatcher
    pub fn filter(&self) -> FilterHandle {
        self.filter.clone()
    }

    /// Flush the underlying backend.
    pub async fn flush(&self) -> LogResult<()> {
        self.backend.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl Logger for DefaultLogger {
    async fn log(&self, severity: Severity, template: &str, args: Vec<Arg>) -> LogResult<()> {
        let filter = self.filter.snapshot();

        // Gated calls cost no parse and evaluate no deferred arguments.
        if !filter.allows(severity) {
            return Ok(());
        }

        let message = template::format(template, severity, filter.conditional_threshold, args)?;
        let line = format!("[{}] {}", severity.tag(), message);
        self.backend.output(&line).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use crate::backend::MemoryBackend;
    use crate::error::LogError;
    use crate::template::FormatError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn capture() -> (DefaultLogger, Arc<MemoryBackend>) {
        let backend = Arc::new(MemoryBackend::new());
        (DefaultLogger::new(backend.clone()), backend)
    }

    #[tokio::test]
    async fn test_severity_methods_tag_lines() {
        let (logger, backend) = capture();

        logger.error("Failed: {}", args!["disk full"]).await.unwrap();
        logger.warn("careful", args![]).await.unwrap();
        logger.info("hello", args![]).await.unwrap();
        logger.debug("poking", args![]).await.unwrap();
        logger.trace("step", args![]).await.unwrap();
        logger.deep_trace("micro step", args![]).await.unwrap();

        assert_eq!(
            backend.lines(),
            vec![
                "[ERROR] Failed: disk full",
                "[WARN] careful",
                "[INFO] hello",
                "[DEBUG] poking",
                "[TRACE] step",
                "[DEEP_TRACE] micro step",
            ]
        );
    }

    #[tokio::test]
    async fn test_format_error_never_reaches_backend() {
        let (logger, backend) = capture();

        let err = logger.info("a {} b {}", args!["x"]).await.unwrap_err();
        assert!(matches!(
            err,
            LogError::Format(FormatError::MissingArgument { .. })
        ));
        assert!(backend.is_empty());
    }

    #[tokio::test]
    async fn test_min_severity_gate_skips_evaluation() {
        let (logger, backend) = capture();
        logger.filter().set_min_severity(Some(Severity::Info));

        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let lazy = Arg::lazy(move || {
            seen.fetch_add(1, Ordering::SeqCst);
            "expensive"
        });

        logger.debug("probe {}", vec![lazy]).await.unwrap();
        assert!(backend.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        logger.info("kept", args![]).await.unwrap();
        assert_eq!(backend.lines(), vec!["[INFO] kept"]);
    }

    #[tokio::test]
    async fn test_gate_off_by_default() {
        let (logger, backend) = capture();
        for severity in Severity::ALL {
            logger.log(severity, "ping", args![]).await.unwrap();
        }
        assert_eq!(backend.len(), Severity::ALL.len());
    }

    #[tokio::test]
    async fn test_conditional_threshold_is_live() {
        let (logger, backend) = capture();

        logger.info("stats: {?:}", args!["suppressed"]).await.unwrap();
        logger.filter().set_conditional_threshold(Severity::Info);
        logger.info("stats: {?:}", args!["shown"]).await.unwrap();

        assert_eq!(backend.lines(), vec!["[INFO] stats: ", "[INFO] stats: shown"]);
    }
}
