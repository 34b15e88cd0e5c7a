//! Logging arguments.
//!
//! An argument is either a value captured in its display form at the call
//! site, or a deferred computation that runs only if its placeholder is
//! actually emitted. The split is an explicit tagged union so the formatter
//! pattern-matches on a known variant instead of probing the value at
//! runtime.

use std::fmt;

use thiserror::Error;

/// Boxed error type returned by fallible deferred computations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

type DeferredFn = Box<dyn FnOnce() -> Result<String, BoxError> + Send>;

/// One positional argument for a template placeholder.
pub enum Arg {
    /// A value already rendered to its display form.
    Value(String),
    /// A computation invoked at most once, and only when the placeholder it
    /// binds to is emitted.
    Deferred(DeferredFn),
}

impl Arg {
    /// Capture a value by its `Display` form.
    pub fn display<T: fmt::Display>(value: T) -> Self {
        Arg::Value(value.to_string())
    }

    /// Defer an infallible computation.
    pub fn lazy<F, T>(f: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
        T: fmt::Display,
    {
        Arg::Deferred(Box::new(move || Ok(f().to_string())))
    }

    /// Defer a fallible computation. A returned error propagates out of the
    /// logging call as [`ArgumentError`].
    pub fn try_lazy<F, T, E>(f: F) -> Self
    where
        F: FnOnce() -> Result<T, E> + Send + 'static,
        T: fmt::Display,
        E: Into<BoxError>,
    {
        Arg::Deferred(Box::new(move || {
            f().map(|value| value.to_string()).map_err(Into::into)
        }))
    }

    /// Materialize the display string, running a deferred computation.
    pub(crate) fn resolve(self) -> Result<String, BoxError> {
        match self {
            Arg::Value(value) => Ok(value),
            Arg::Deferred(f) => f(),
        }
    }
}

impl fmt::Debug for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Arg::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// A deferred argument's computation failed.
///
/// Propagated unchanged to the caller of the logging method; the backend is
/// never invoked for the failing call.
#[derive(Debug, Error)]
#[error("deferred argument #{index} failed: {source}")]
pub struct ArgumentError {
    /// Zero-based index of the placeholder the argument was bound to.
    pub index: usize,
    #[source]
    pub source: BoxError,
}

/// Build a `Vec<Arg>` from display values.
///
/// ```
/// use fmtlog::args;
///
/// let args = args!["alice", 42];
/// assert_eq!(args.len(), 2);
/// ```
///
/// Deferred arguments are constructed explicitly with [`Arg::lazy`] or
/// [`Arg::try_lazy`] and mixed in with `vec![]`.
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Arg::display($value)),+]
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_display_value() {
        assert_eq!(Arg::display(42).resolve().unwrap(), "42");
        assert_eq!(Arg::display("alice").resolve().unwrap(), "alice");
    }

    #[test]
    fn test_lazy_runs_on_resolve() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let arg = Arg::lazy(move || {
            seen.fetch_add(1, Ordering::SeqCst);
            "computed"
        });
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(arg.resolve().unwrap(), "computed");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dropped_lazy_never_runs() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let arg = Arg::lazy(move || {
            seen.fetch_add(1, Ordering::SeqCst);
            "unused"
        });
        drop(arg);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_try_lazy_error_propagates() {
        let arg = Arg::try_lazy(|| -> Result<String, std::io::Error> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "stats backend down"))
        });
        let err = arg.resolve().unwrap_err();
        assert!(err.to_string().contains("stats backend down"));
    }

    #[test]
    fn test_args_macro() {
        let args = args!["alice", 7, '!'];
        assert_eq!(args.len(), 3);
        assert!(matches!(&args[0], Arg::Value(v) if v == "alice"));
        let empty = args![];
        assert!(empty.is_empty());
    }
}
