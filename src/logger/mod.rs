//! The logging facade.
//!
//! # Data Flow
//! ```text
//! caller → severity method (error/warn/.../deep_trace)
//!     → log(severity, template, args)
//!     → filter gate (optional min-severity)
//!     → template::format (placeholder resolution)
//!     → backend.output("[TAG] message")
//! ```
//!
//! # Design Decisions
//! - Severity methods are default-method delegation into `log`
//! - One backend call per logging call; errors fail the call loudly
//! - The logger holds only immutable shared state; calls never contend

pub mod default;

use async_trait::async_trait;

use crate::error::LogResult;
use crate::severity::Severity;
use crate::template::Arg;

pub use default::DefaultLogger;

/// Leveled logging capability.
///
/// Implementors provide [`Logger::log`]; the severity methods delegate to
/// it with a fixed tag.
#[async_trait]
pub trait Logger: Send + Sync {
    /// Format `template` against `args` and deliver it at `severity`.
    async fn log(&self, severity: Severity, template: &str, args: Vec<Arg>) -> LogResult<()>;

    async fn error(&self, template: &str, args: Vec<Arg>) -> LogResult<()> {
        self.log(Severity::Error, template, args).await
    }

    async fn warn(&self, template: &str, args: Vec<Arg>) -> LogResult<()> {
        self.log(Severity::Warn, template, args).await
    }

    async fn info(&self, template: &str, args: Vec<Arg>) -> LogResult<()> {
        self.log(Severity::Info, template, args).await
    }

    async fn debug(&self, template: &str, args: Vec<Arg>) -> LogResult<()> {
        self.log(Severity::Debug, template, args).await
    }

    async fn trace(&self, template: &str, args: Vec<Arg>) -> LogResult<()> {
        self.log(Severity::Trace, template, args).await
    }

    async fn deep_trace(&self, template: &str, args: Vec<Arg>) -> LogResult<()> {
        self.log(Severity::DeepTrace, template, args).await
    }
}
