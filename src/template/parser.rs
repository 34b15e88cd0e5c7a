//! Template scanner.

use crate::template::FormatError;

/// One piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Verbatim text, with escapes already unfolded.
    Literal(String),
    /// A `{...}` span.
    Placeholder(Placeholder),
}

/// A placeholder span and where it starts in the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub kind: PlaceholderKind,
    /// Byte offset of the opening `{`, for error reporting.
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderKind {
    /// Consumes the next argument unconditionally. The label is whatever
    /// appeared between the braces and carries no positional meaning.
    Positional { label: String },
    /// `{?:}`: consumes the next argument, substitutes it only when the
    /// severity threshold permits.
    Conditional,
}

/// Marker distinguishing a conditional span from a labeled one.
const CONDITIONAL_MARKER: &str = "?:";

/// Scan `template` into segments.
///
/// Fails on an unterminated span, a `{` nested inside a span, or an
/// unescaped `}` outside any span.
pub fn parse(template: &str) -> Result<Vec<Segment>, FormatError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = template.char_indices().peekable();

    while let Some((position, ch)) = chars.next() {
        match ch {
            '{' => {
                if matches!(chars.peek(), Some((_, '{'))) {
                    chars.next();
                    literal.push('{');
                    continue;
                }

                let mut content = String::new();
                let mut closed = false;
                for (_, span_ch) in chars.by_ref() {
                    match span_ch {
                        '}' => {
                            closed = true;
                            break;
                        }
                        '{' => {
                            return Err(FormatError::UnterminatedPlaceholder { position });
                        }
                        other => content.push(other),
                    }
                }
                if !closed {
                    return Err(FormatError::UnterminatedPlaceholder { position });
                }

                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                let kind = if content == CONDITIONAL_MARKER {
                    PlaceholderKind::Conditional
                } else {
                    PlaceholderKind::Positional { label: content }
                };
                segments.push(Segment::Placeholder(Placeholder { kind, position }));
            }
            '}' => {
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                    literal.push('}');
                } else {
                    return Err(FormatError::UnmatchedBrace { position });
                }
            }
            other => literal.push(other),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholder_count(segments: &[Segment]) -> usize {
        segments
            .iter()
            .filter(|s| matches!(s, Segment::Placeholder(_)))
            .count()
    }

    #[test]
    fn test_plain_text() {
        let segments = parse("nothing to see here").unwrap();
        assert_eq!(segments, vec![Segment::Literal("nothing to see here".into())]);
    }

    #[test]
    fn test_empty_template() {
        assert_eq!(parse("").unwrap(), vec![]);
    }

    #[test]
    fn test_spans_and_literals_interleave() {
        let segments = parse("User {} logged in from {}").unwrap();
        assert_eq!(segments.len(), 4);
        assert_eq!(placeholder_count(&segments), 2);
        assert_eq!(segments[0], Segment::Literal("User ".into()));
        assert_eq!(segments[2], Segment::Literal(" logged in from ".into()));
    }

    #[test]
    fn test_labels_are_preserved() {
        let segments = parse("{user} did {0}").unwrap();
        match &segments[0] {
            Segment::Placeholder(Placeholder {
                kind: PlaceholderKind::Positional { label },
                position,
            }) => {
                assert_eq!(label, "user");
                assert_eq!(*position, 0);
            }
            other => panic!("unexpected segment: {:?}", other),
        }
    }

    #[test]
    fn test_conditional_marker() {
        let segments = parse("Cache stats: {?:}").unwrap();
        match &segments[1] {
            Segment::Placeholder(p) => assert_eq!(p.kind, PlaceholderKind::Conditional),
            other => panic!("unexpected segment: {:?}", other),
        }
    }

    #[test]
    fn test_escaped_braces() {
        let segments = parse("literal {{braces}} and {} span").unwrap();
        assert_eq!(segments[0], Segment::Literal("literal {braces} and ".into()));
        assert_eq!(placeholder_count(&segments), 1);
    }

    #[test]
    fn test_adjacent_escapes_make_empty_braces() {
        // "{{}}" is the two escapes back to back, not a span.
        let segments = parse("{{}}").unwrap();
        assert_eq!(segments, vec![Segment::Literal("{}".into())]);
    }

    #[test]
    fn test_unterminated_span() {
        let err = parse("oops {value").unwrap_err();
        assert_eq!(err, FormatError::UnterminatedPlaceholder { position: 5 });
    }

    #[test]
    fn test_nested_open_brace_rejected() {
        let err = parse("a {b{c}").unwrap_err();
        assert_eq!(err, FormatError::UnterminatedPlaceholder { position: 2 });
    }

    #[test]
    fn test_unmatched_close_brace() {
        let err = parse("dangling } here").unwrap_err();
        assert_eq!(err, FormatError::UnmatchedBrace { position: 9 });
    }
}
