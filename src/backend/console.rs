//! Console sink.

use tokio::io::{self, AsyncWriteExt};
use tokio::sync::Mutex;

use async_trait::async_trait;

use crate::backend::{BackendError, LogBackend};

enum Writer {
    Stdout(io::Stdout),
    Stderr(io::Stderr),
}

/// Writes each message as one line to stdout or stderr.
///
/// The writer is acquired once and guarded by a mutex, and each line goes
/// out as a single `write_all`, so concurrent callers cannot interleave
/// within a line.
pub struct ConsoleBackend {
    writer: Mutex<Writer>,
}

impl ConsoleBackend {
    /// Sink to standard output.
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Writer::Stdout(io::stdout())),
        }
    }

    /// Sink to standard error.
    pub fn stderr() -> Self {
        Self {
            writer: Mutex::new(Writer::Stderr(io::stderr())),
        }
    }
}

#[async_trait]
impl LogBackend for ConsoleBackend {
    async fn output(&self, message: &str) -> Result<(), BackendError> {
        let mut line = String::with_capacity(message.len() + 1);
        line.push_str(message);
        line.push('\n');

        let mut writer = self.writer.lock().await;
        match &mut *writer {
            Writer::Stdout(out) => {
                out.write_all(line.as_bytes()).await?;
                out.flush().await?;
            }
            Writer::Stderr(err) => {
                err.write_all(line.as_bytes()).await?;
                err.flush().await?;
            }
        }
        Ok(())
    }
}
