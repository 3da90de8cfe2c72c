//! Driven port for randomness.
//!
//! Quiz selection draws from an injected source so tests can pin the choice
//! with a seed or a mock instead of relying on process-global state.

/// Source of uniformly distributed indices.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource: Send + Sync {
    /// Return an index in `0..len`, or `None` when `len` is zero.
    ///
    /// Successive calls are independent and each index is equally likely.
    fn pick_index(&self, len: usize) -> Option<usize>;
}
