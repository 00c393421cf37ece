use thiserror::Error;

/// Errors returned by [`DynamicArray`](crate::DynamicArray) operations.
///
/// A failed call never leaves the array partially modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ArrayError {
    /// Index outside the operation's valid bounds.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// pop/min/max/sum on an array with no elements.
    #[error("operation requires a non-empty array")]
    EmptyContainer,

    /// Only produced by `try_reserve`; the automatic growth path aborts instead.
    #[error("allocation failed while reserving capacity for {requested} elements")]
    AllocationFailure { requested: usize },
}

pub type Result<T, E = ArrayError> = std::result::Result<T, E>;
