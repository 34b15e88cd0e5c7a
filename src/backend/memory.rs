//! In-memory capture sink.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::backend::{BackendError, LogBackend};

/// Collects messages in memory.
///
/// Used by the test suite to assert on delivered lines; also usable by
/// embedders that want to inspect output programmatically.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    lines: Mutex<Vec<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured lines, in delivery order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("memory sink poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().expect("memory sink poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all captured lines.
    pub fn clear(&self) {
        self.lines.lock().expect("memory sink poisoned").clear();
    }
}

#[async_trait]
impl LogBackend for MemoryBackend {
    async fn output(&self, message: &str) -> Result<(), BackendError> {
        self.lines
            .lock()
            .expect("memory sink poisoned")
            .push(message.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_captures_in_order() {
        let backend = MemoryBackend::new();
        backend.output("one").await.unwrap();
        backend.output("two").await.unwrap();
        assert_eq!(backend.lines(), vec!["one", "two"]);
        assert_eq!(backend.len(), 2);

        backend.clear();
        assert!(backend.is_empty());
    }
}
