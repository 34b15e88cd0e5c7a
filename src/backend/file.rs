//! Append-to-file sink.

use std::path::{Path, PathBuf};

use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use async_trait::async_trait;

use crate::backend::{BackendError, LogBackend};

/// Appends each message as one line to a file.
pub struct FileBackend {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileBackend {
    /// Open `path` for appending, creating it if necessary.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, BackendError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    /// The path this sink appends to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl LogBackend for FileBackend {
    async fn output(&self, message: &str) -> Result<(), BackendError> {
        let mut line = String::with_capacity(message.len() + 1);
        line.push_str(message);
        line.push('\n');

        let mut file = self.file.lock().await;
        file.write_all(line.as_bytes()).await?;
        Ok(())
    }

    async fn flush(&self) -> Result<(), BackendError> {
        let mut file = self.file.lock().await;
        file.flush().await?;
        Ok(())
    }
}
