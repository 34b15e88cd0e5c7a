//! Message rendering.

use crate::error::LogError;
use crate::severity::Severity;
use crate::template::arg::{Arg, ArgumentError};
use crate::template::parser::{self, PlaceholderKind, Segment};
use crate::template::FormatError;

/// Render `template` against `args`.
///
/// Arguments are consumed positionally, left to right, one per placeholder.
/// A conditional placeholder (`{?:}`) substitutes its argument only when
/// `severity.is_at_most(conditional_threshold)`; a suppressed argument is
/// consumed but never evaluated. Surplus arguments are ignored.
///
/// The returned string is the bare interpolated message; severity tagging is
/// the logger's concern.
pub fn format(
    template: &str,
    severity: Severity,
    conditional_threshold: Severity,
    args: Vec<Arg>,
) -> Result<String, LogError> {
    let segments = parser::parse(template)?;
    let supplied = args.len();
    let mut args = args.into_iter();
    let mut index = 0usize;
    let mut out = String::with_capacity(template.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => out.push_str(&text),
            Segment::Placeholder(placeholder) => {
                let arg = args.next().ok_or(FormatError::MissingArgument {
                    index,
                    position: placeholder.position,
                    supplied,
                })?;
                let emit = match placeholder.kind {
                    PlaceholderKind::Positional { .. } => true,
                    PlaceholderKind::Conditional => severity.is_at_most(conditional_threshold),
                };
                if emit {
                    let value = arg
                        .resolve()
                        .map_err(|source| ArgumentError { index, source })?;
                    out.push_str(&value);
                }
                index += 1;
            }
        }
    }

    Ok(out)
}
