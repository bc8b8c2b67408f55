//! Membership and intersection over families of subsets.
//!
//! Subsets are compared by value, element by element and in order, so
//! `[a, b]` and `[b, a]` are different subsets. Families produced by
//! [`power_set`][crate::powerset::power_set] always list elements in input order,
//! which makes two power sets over compatible inputs directly comparable.

use std::collections::HashSet;
use std::hash::Hash;

use log::debug;

/// Returns true if `subset` occurs in `family`.
pub fn contains_subset<T: PartialEq>(family: &[Vec<T>], subset: &[T]) -> bool {
    family.iter().any(|s| s.as_slice() == subset)
}

/// Returns the subsets of `a` that also occur in `b`, in the order of `a`.
///
/// Duplicates in `a` are kept. Runs in `O(|a| * |b|)` comparisons; see
/// [`intersect_hashed`] for hashable elements.
pub fn intersect<T: PartialEq + Clone>(a: &[Vec<T>], b: &[Vec<T>]) -> Vec<Vec<T>> {
    debug!("intersect(|a| = {}, |b| = {})", a.len(), b.len());
    a.iter().filter(|s| contains_subset(b, s)).cloned().collect()
}

/// Same as [`intersect`], with `b` indexed in a hash set.
pub fn intersect_hashed<T: Hash + Eq + Clone>(a: &[Vec<T>], b: &[Vec<T>]) -> Vec<Vec<T>> {
    debug!("intersect_hashed(|a| = {}, |b| = {})", a.len(), b.len());
    let index: HashSet<&[T]> = b.iter().map(|s| s.as_slice()).collect();
    a.iter().filter(|s| index.contains(s.as_slice())).cloned().collect()
}
