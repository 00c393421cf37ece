//! A growable array with geometric capacity growth.
//!
//! [`DynamicArray`] keeps its elements in one contiguous buffer. Capacity
//! starts at [`INITIAL_CAPACITY`] and is multiplied by [`GROWTH_FACTOR`]
//! whenever a write would overflow it, so a long run of appends costs
//! amortized O(1) each. Capacity never shrinks except through
//! [`DynamicArray::clear`].
//!
//! ```
//! use dynarray::{ArrayError, DynamicArray};
//!
//! let mut arr = DynamicArray::new();
//! for i in 1..=5 {
//!     arr.append(i);
//! }
//! arr.insert(2, 99)?;
//! assert_eq!(arr.as_slice(), &[1, 2, 99, 3, 4, 5]);
//! assert_eq!(arr.delete(2)?, 99);
//! assert_eq!(arr.sum()?, 15);
//! assert_eq!(arr.get(7), Err(ArrayError::IndexOutOfRange { index: 7, len: 5 }));
//! # Ok::<(), ArrayError>(())
//! ```

mod array;
mod error;
mod iter;
mod query;
mod raw;

pub use array::{DynamicArray, GROWTH_FACTOR, INITIAL_CAPACITY};
pub use error::{ArrayError, Result};
pub use iter::IntoIter;
