//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::severity::Severity;

/// Root configuration for a logger.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogConfig {
    /// Most verbose severity that reaches the backend. `None` disables the
    /// gate: every call is delivered regardless of severity.
    pub min_severity: Option<Severity>,

    /// Conditional placeholders (`{?:}`) substitute their argument only for
    /// calls at or less verbose than this.
    pub conditional_threshold: Severity,

    /// Where finished lines go.
    pub sink: SinkConfig,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            min_severity: None,
            conditional_threshold: Severity::Warn,
            sink: SinkConfig::default(),
        }
    }
}

/// Sink selection.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SinkConfig {
    /// Write to the process console.
    Console {
        #[serde(default)]
        stream: ConsoleStream,
    },
    /// Append to a file.
    File { path: PathBuf },
}

impl Default for SinkConfig {
    fn default() -> Self {
        SinkConfig::Console {
            stream: ConsoleStream::Stdout,
        }
    }
}

/// Which console stream to write to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConsoleStream {
    #[default]
    Stdout,
    Stderr,
}
