//! Template parsing and message formatting.
//!
//! # Data Flow
//! ```text
//! template string
//!     → parser.rs (scan into literal / placeholder segments)
//!     → formatter.rs (consume arguments positionally, gate conditionals)
//!     → final message string
//! ```
//!
//! # Template syntax
//! - `{...}` is a placeholder span. The content is an informational label
//!   (`{}`, `{0}`, `{user}` all behave the same): arguments are consumed
//!   strictly left to right.
//! - `{?:}` is a conditional placeholder: its argument is substituted only
//!   when the call's severity is at or less verbose than the configured
//!   threshold, and is otherwise consumed without being evaluated.
//! - `{{` and `}}` are escapes for literal braces. Spans do not nest.
//!
//! # Design Decisions
//! - Hand-rolled single-pass scan, no regex
//! - Parse fully before rendering, so malformed templates fail before any
//!   argument is evaluated
//! - Arity deficit is an error; surplus arguments are ignored

pub mod arg;
pub mod formatter;
pub mod parser;

use thiserror::Error;

pub use arg::{Arg, ArgumentError};
pub use formatter::format;
pub use parser::{parse, Placeholder, PlaceholderKind, Segment};

/// Errors produced while parsing a template or matching it against its
/// arguments. The backend is never invoked once one of these is raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Placeholder `index` (zero-based, in order of appearance) has no
    /// corresponding argument.
    #[error("placeholder #{index} at byte {position} has no argument ({supplied} supplied)")]
    MissingArgument {
        index: usize,
        position: usize,
        supplied: usize,
    },

    /// A `{` opened a span that never closed.
    #[error("unterminated placeholder opening at byte {position}")]
    UnterminatedPlaceholder { position: usize },

    /// A `}` appeared outside any span without being escaped.
    #[error("unmatched '}}' at byte {position}")]
    UnmatchedBrace { position: usize },
}
