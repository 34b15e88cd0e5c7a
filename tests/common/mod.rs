//! Shared utilities for integration testing.

use std::sync::Arc;

use fmtlog::{DefaultLogger, MemoryBackend};

/// A logger wired to an in-memory capture sink.
pub fn capture_logger() -> (DefaultLogger, Arc<MemoryBackend>) {
    let backend = Arc::new(MemoryBackend::new());
    let logger = DefaultLogger::new(backend.clone());
    (logger, backend)
}
