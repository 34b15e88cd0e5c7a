//! Log severity levels.
//!
//! # Responsibilities
//! - Define the ordered severity scale (least to most verbose)
//! - Expose comparison as a named capability, not raw numeric ordering
//! - Parse/display the snake_case names used in config files

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Severity of a single logging call, ordered from least to most verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Failures that require attention.
    Error,
    /// Potential problems.
    Warn,
    /// General informational messages.
    Info,
    /// Development-time diagnostics.
    Debug,
    /// Detailed execution traces.
    Trace,
    /// Very high-volume traces, beyond `Trace`.
    DeepTrace,
}

impl Severity {
    /// All severities, least verbose first.
    pub const ALL: [Severity; 6] = [
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::Debug,
        Severity::Trace,
        Severity::DeepTrace,
    ];

    /// Returns true if `self` is at or less verbose than `threshold`.
    ///
    /// This is the one comparison the rest of the crate is allowed to rely
    /// on; the derived `Ord` is an implementation detail of this method.
    pub fn is_at_most(self, threshold: Severity) -> bool {
        self <= threshold
    }

    /// The snake_case name used in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warn => "warn",
            Severity::Info => "info",
            Severity::Debug => "debug",
            Severity::Trace => "trace",
            Severity::DeepTrace => "deep_trace",
        }
    }

    /// The uppercase tag embedded in output lines.
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warn => "WARN",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
            Severity::Trace => "TRACE",
            Severity::DeepTrace => "DEEP_TRACE",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a severity name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity '{0}', expected one of error, warn, info, debug, trace, deep_trace")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "warn" => Ok(Severity::Warn),
            "info" => Ok(Severity::Info),
            "debug" => Ok(Severity::Debug),
            "trace" => Ok(Severity::Trace),
            "deep_trace" | "deeptrace" => Ok(Severity::DeepTrace),
            other => Err(ParseSeverityError(other.to_string())),
        }
    }
}
