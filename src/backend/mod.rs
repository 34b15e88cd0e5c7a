//! Output sinks.
//!
//! # Responsibilities
//! - Define the `LogBackend` capability: deliver one finished line
//! - Provide the built-in sinks (console, file, in-memory capture)
//! - Build a sink from configuration
//!
//! # Design Decisions
//! - `output` receives a complete line and must write it un-interleaved at
//!   the character level; ordering between lines is the backend's concern
//! - Backend failures propagate to the logging caller; no retry, no
//!   buffering, no suppression

pub mod console;
pub mod file;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::schema::{ConsoleStream, SinkConfig};

pub use console::ConsoleBackend;
pub use file::FileBackend;
pub use memory::MemoryBackend;

/// Error type for sink operations.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The underlying writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A log message sink.
///
/// The sole extension point of the crate: console, file, buffer and remote
/// collectors all implement this.
#[async_trait]
pub trait LogBackend: Send + Sync {
    /// Deliver one finished message. May suspend while writing.
    async fn output(&self, message: &str) -> Result<(), BackendError>;

    /// Flush any buffered output. The default is a no-op for unbuffered
    /// sinks.
    async fn flush(&self) -> Result<(), BackendError> {
        Ok(())
    }
}

/// Build the sink described by `config`.
pub async fn from_config(config: &SinkConfig) -> Result<Arc<dyn LogBackend>, BackendError> {
    match config {
        SinkConfig::Console { stream } => {
            let backend = match stream {
                ConsoleStream::Stdout => ConsoleBackend::stdout(),
                ConsoleStream::Stderr => ConsoleBackend::stderr(),
            };
            Ok(Arc::new(backend))
        }
        SinkConfig::File { path } => Ok(Arc::new(FileBackend::open(path).await?)),
    }
}
