//! Aggregate and search queries over the live elements.

use std::cmp::Ordering;
use std::iter::Sum;

use crate::array::DynamicArray;
use crate::error::{ArrayError, Result};

impl<T> DynamicArray<T> {
    /// Largest element. Ties keep the earliest index.
    ///
    /// Elements that do not compare (e.g. `NaN`) never replace the current best.
    pub fn max(&self) -> Result<&T>
    where
        T: PartialOrd,
    {
        self.extremum(|candidate, best| candidate > best)
    }

    /// Smallest element. Ties keep the earliest index.
    pub fn min(&self) -> Result<&T>
    where
        T: PartialOrd,
    {
        self.extremum(|candidate, best| candidate < best)
    }

    /// Sum of every element, folded from the additive identity in index order.
    ///
    /// An empty array is an error rather than the identity, matching `pop`.
    pub fn sum(&self) -> Result<T>
    where
        T: for<'a> Sum<&'a T>,
    {
        if self.is_empty() {
            return Err(ArrayError::EmptyContainer);
        }
        Ok(self.iter().sum::<T>())
    }

    /// Index of the first element equal to `value`.
    pub fn linear_search(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    /// Binary search over contents sorted in non-decreasing order.
    ///
    /// Probes `mid = (left + right) / 2` over the inclusive range
    /// `[0, len - 1]`, so among equal elements the one found is the first
    /// that sequence lands on.
    ///
    /// Sortedness is not checked; on unsorted contents the result is
    /// unspecified but the call still terminates.
    pub fn binary_search(&self, value: &T) -> Option<usize>
    where
        T: PartialOrd,
    {
        let items = self.as_slice();
        // right is one past the inclusive upper bound, so `mid - 1` never underflows
        let (mut left, mut right) = (0, items.len());
        while left < right {
            let mid = left + (right - 1 - left) / 2;
            match items[mid].partial_cmp(value) {
                Some(Ordering::Equal) => return Some(mid),
                Some(Ordering::Less) => left = mid + 1,
                Some(Ordering::Greater) | None => right = mid,
            }
        }
        None
    }

    fn extremum(&self, better: impl Fn(&T, &T) -> bool) -> Result<&T> {
        let (first, rest) = self
            .as_slice()
            .split_first()
            .ok_or(ArrayError::EmptyContainer)?;
        Ok(rest
            .iter()
            .fold(first, |best, item| if better(item, best) { item } else { best }))
    }
}
