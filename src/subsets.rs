//! Lazy enumeration of subsets in canonical order.
//!
//! [`Subsets`] yields exactly the sequence returned by
//! [`power_set`][crate::powerset::power_set], one subset at a time, without
//! materializing the whole family. A [`Mask`] serves as the counter, so the
//! input length is not bounded by the width of a machine integer.
//!
//! # Example
//!
//! ```
//! use powerset_rs::subsets::subsets;
//!
//! let items = [1, 2, 3];
//! let big: Vec<_> = subsets(&items).filter(|s| s.len() >= 2).collect();
//! assert_eq!(big, vec![vec![1, 2], vec![1, 3], vec![2, 3], vec![1, 2, 3]]);
//! ```

use std::iter::FusedIterator;

use log::debug;

use crate::error::PowerSetError;
use crate::mask::Mask;
use crate::powerset::PowerSetConfig;

/// Returns a lazy iterator over all subsets of `items`.
pub fn subsets<T: Clone>(items: &[T]) -> Subsets<'_, T> {
    Subsets::new(items)
}

/// Like [`subsets`], but refuses inputs longer than `config.max_len`.
pub fn try_subsets<'a, T: Clone>(items: &'a [T], config: &PowerSetConfig) -> Result<Subsets<'a, T>, PowerSetError> {
    config.check(items.len())?;
    Ok(Subsets::new(items))
}

/// Returns the `index`-th subset of `items` in canonical order.
///
/// Returns `None` if `index >= 2^n`.
pub fn subset_at<T: Clone>(items: &[T], index: u64) -> Option<Vec<T>> {
    Mask::from_index(items.len(), index).map(|mask| mask.select(items))
}

/// Iterator over all subsets of a slice, in canonical order.
#[derive(Debug, Clone)]
pub struct Subsets<'a, T> {
    items: &'a [T],
    /// Mask of the next subset to yield, `None` once exhausted
    next: Option<Mask>,
    /// Number of subsets yielded so far, saturating
    yielded: usize,
}

impl<'a, T> Subsets<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        debug!("Subsets::new(n = {})", items.len());
        Self {
            items,
            next: Some(Mask::new(items.len())),
            yielded: 0,
        }
    }

    fn remaining(&self) -> Option<usize> {
        if self.next.is_none() {
            return Some(0);
        }
        let total = 1usize.checked_shl(u32::try_from(self.items.len()).ok()?)?;
        Some(total - self.yielded)
    }
}

impl<T: Clone> Iterator for Subsets<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut mask = self.next.take()?;
        let subset = mask.select(self.items);
        if mask.increment() {
            self.next = Some(mask);
        }
        self.yielded = self.yielded.saturating_add(1);
        Some(subset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl<T: Clone> FusedIterator for Subsets<'_, T> {}
