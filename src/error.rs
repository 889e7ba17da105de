//! Error types for the freqcache library.
//!
//! The cache itself is infallible: construction takes a `usize` capacity (so
//! an invalid capacity is unrepresentable), a `get` miss is an ordinary
//! `None`, and a capacity-zero cache is a deliberate degenerate mode. The
//! only error in the crate is [`InvariantError`], returned by the
//! `check_invariants` diagnostics when internal bookkeeping has been
//! corrupted.

use std::fmt;

/// Error returned when internal cache invariants are violated.
///
/// Produced by [`LfuCache::check_invariants`](crate::policy::lfu::LfuCache::check_invariants)
/// and [`RecencyList::check_invariants`](crate::ds::recency_list::RecencyList::check_invariants).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_message() {
        let err = InvariantError::new("bucket chain length mismatch");
        assert_eq!(err.to_string(), "bucket chain length mismatch");
    }

    #[test]
    fn debug_includes_message() {
        let err = InvariantError::new("stale tail link");
        assert!(format!("{:?}", err).contains("stale tail link"));
    }

    #[test]
    fn message_accessor() {
        let err = InvariantError::new("test");
        assert_eq!(err.message(), "test");
    }

    #[test]
    fn clone_and_eq() {
        let a = InvariantError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<InvariantError>();
    }
}
