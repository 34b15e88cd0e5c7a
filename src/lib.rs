//! Leveled logging facade with template formatting and pluggable sinks.
//!
//! # Architecture Overview
//!
//! ```text
//! caller
//!   → Logger severity method (error / warn / info / debug / trace / deep_trace)
//!     → log(severity, template, args)
//!       → config::filter   (optional min-severity gate, lock-free snapshot)
//!       → template         (parse {...} spans, resolve args, gate {?:})
//!       → backend          (console / file / memory, or any LogBackend)
//! ```
//!
//! Templates use `{...}` placeholder spans filled positionally; `{?:}` marks
//! detail that only appears for calls at or less verbose than the configured
//! threshold. When its argument is supplied as [`Arg::lazy`], a suppressed
//! placeholder never even computes the value.
//!
//! ```no_run
//! use std::sync::Arc;
//! use fmtlog::{args, Arg, ConsoleBackend, DefaultLogger, Logger};
//!
//! # async fn demo() -> fmtlog::LogResult<()> {
//! let logger = DefaultLogger::new(Arc::new(ConsoleBackend::stdout()));
//! logger.info("User {} logged in from {}", args!["alice", "10.0.0.1"]).await?;
//! logger
//!     .error("Cache stats: {?:}", vec![Arg::lazy(|| "97% hit rate")])
//!     .await?;
//! # Ok(())
//! # }
//! ```

// Core subsystems
pub mod logger;
pub mod severity;
pub mod template;

// Output
pub mod backend;

// Cross-cutting concerns
pub mod config;
pub mod error;

pub use backend::{BackendError, ConsoleBackend, FileBackend, LogBackend, MemoryBackend};
pub use config::{ConfigWatcher, FilterHandle, LogConfig, SinkConfig};
pub use error::{LogError, LogResult};
pub use logger::{DefaultLogger, Logger};
pub use severity::Severity;
pub use template::{Arg, ArgumentError, FormatError};
