//! Power set construction by recursive doubling.
//!
//! The power set of `[x1, ..., xn]` is built bottom-up: starting from the family
//! holding only the empty subset, every element doubles the family by appending
//! itself to a copy of each subset seen so far.
//!
//! This fixes the *canonical enumeration order*: the `i`-th subset contains
//! the `k`-th input element iff bit `k` of `i` is set. The first half of the
//! output never contains the last element, the second half is the first half
//! with the last element appended.
//!
//! # Example
//!
//! ```
//! use powerset_rs::powerset::power_set;
//!
//! let ps = power_set(&['a', 'b', 'c']);
//! assert_eq!(
//!     ps,
//!     vec![
//!         vec![],
//!         vec!['a'],
//!         vec!['b'],
//!         vec!['a', 'b'],
//!         vec!['c'],
//!         vec!['a', 'c'],
//!         vec!['b', 'c'],
//!         vec!['a', 'b', 'c'],
//!     ]
//! );
//! ```
//!
//! # Performance
//!
//! Time and space are `O(2^n * n)`. This is inherent in the size of the output,
//! so there is no error for large inputs unless the caller opts into one via
//! [`PowerSetConfig::max_len`]. For streaming use, see [`crate::subsets`].

use log::{debug, warn};
use num_bigint::BigUint;

use crate::error::PowerSetError;

/// Largest input length for which the output is reserved up front.
const RESERVE_LIMIT: usize = 20;

/// Configuration for guarded power set construction.
#[derive(Debug, Clone, Default)]
pub struct PowerSetConfig {
    /// Maximum accepted input length (default: no limit).
    pub max_len: Option<usize>,
}

impl PowerSetConfig {
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Checks an input of `len` elements against `max_len`.
    pub fn check(&self, len: usize) -> Result<(), PowerSetError> {
        match self.max_len {
            Some(limit) if len > limit => {
                warn!("{} elements exceed the limit of {}", len, limit);
                Err(PowerSetError::InputTooLarge { len, limit })
            }
            _ => Ok(()),
        }
    }
}

/// Returns all subsets of `items`, in canonical order.
///
/// Subsets are positional: duplicate elements in `items` yield subsets that are
/// equal by value but come from different positions. The result always has
/// exactly `2^n` entries and starts with the empty subset.
pub fn power_set<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    debug!("power_set(n = {})", items.len());

    let mut family: Vec<Vec<T>> = if items.len() <= RESERVE_LIMIT {
        Vec::with_capacity(1 << items.len())
    } else {
        Vec::new()
    };
    family.push(Vec::new());

    for item in items {
        let half = family.len();
        for i in 0..half {
            let mut subset = Vec::with_capacity(family[i].len() + 1);
            subset.extend_from_slice(&family[i]);
            subset.push(item.clone());
            family.push(subset);
        }
    }

    family
}

/// Recursive formulation of [`power_set`].
///
/// `items` is split into everything but the last element and the last element;
/// the result is the power set of the former followed by the same subsets with
/// the last element appended. Recursion depth is `n`.
pub fn power_set_recursive<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    match items.split_last() {
        None => vec![vec![]],
        Some((last, head)) => {
            let base = power_set_recursive(head);
            let extended: Vec<Vec<T>> = base
                .iter()
                .map(|subset| {
                    let mut subset = subset.clone();
                    subset.push(last.clone());
                    subset
                })
                .collect();
            let mut family = base;
            family.extend(extended);
            family
        }
    }
}

/// Like [`power_set`], but refuses inputs longer than `config.max_len`.
pub fn try_power_set<T: Clone>(items: &[T], config: &PowerSetConfig) -> Result<Vec<Vec<T>>, PowerSetError> {
    config.check(items.len())?;
    Ok(power_set(items))
}

/// Number of subsets of an `n`-element sequence, i.e. `2^n`.
pub fn subset_count(n: usize) -> BigUint {
    BigUint::from(1u8) << n
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_power_set_empty() {
        let ps = power_set::<char>(&[]);
        assert_eq!(ps, vec![Vec::<char>::new()]);
    }

    #[test]
    fn test_power_set_single() {
        let ps = power_set(&["A"]);
        assert_eq!(ps, vec![vec![], vec!["A"]]);
    }

    #[test]
    fn test_power_set_two() {
        let ps = power_set(&["A", "B"]);
        assert_eq!(ps, vec![vec![], vec!["A"], vec!["B"], vec!["A", "B"]]);
    }

    #[test]
    fn test_power_set_three() {
        let ps = power_set(&["a", "b", "c"]);
        let expected: Vec<Vec<&str>> = vec![
            vec![],
            vec!["a"],
            vec!["b"],
            vec!["a", "b"],
            vec!["c"],
            vec!["a", "c"],
            vec!["b", "c"],
            vec!["a", "b", "c"],
        ];
        assert_eq!(ps, expected);
    }

    #[test]
    fn test_power_set_len() {
        for n in 0..=12 {
            let items: Vec<usize> = (0..n).collect();
            let ps = power_set(&items);
            assert_eq!(ps.len(), 1 << n, "n = {}", n);
            assert!(ps[0].is_empty());
            assert_eq!(ps.iter().filter(|s| s.is_empty()).count(), 1);
        }
    }

    #[test]
    fn test_power_set_bit_order() {
        let items = [10, 20, 30, 40, 50];
        let ps = power_set(&items);
        for (i, subset) in ps.iter().enumerate() {
            let expected: Vec<i32> = (0..items.len()).filter(|k| i & (1 << k) != 0).map(|k| items[k]).collect();
            assert_eq!(subset, &expected, "i = {}", i);
        }
    }

    #[test]
    fn test_power_set_duplicates_are_positional() {
        let ps = power_set(&['x', 'x']);
        assert_eq!(ps, vec![vec![], vec!['x'], vec!['x'], vec!['x', 'x']]);
    }

    #[test]
    fn test_power_set_deterministic() {
        let items = vec!["p", "q", "r", "s"];
        assert_eq!(power_set(&items), power_set(&items));
    }

    #[test]
    fn test_recursive_agrees() {
        for n in 0..=8 {
            let items: Vec<u32> = (0..n).map(|i| i * 7 + 1).collect();
            assert_eq!(power_set_recursive(&items), power_set(&items), "n = {}", n);
        }
    }

    #[test]
    fn test_doubling_law() {
        let items = vec!["a", "b", "c", "d"];
        let (last, head) = items.split_last().unwrap();
        let base = power_set(head);
        let mut expected = base.clone();
        for subset in &base {
            let mut subset = subset.clone();
            subset.push(*last);
            expected.push(subset);
        }
        assert_eq!(power_set(&items), expected);
    }

    #[test]
    fn test_try_power_set_unlimited() {
        let config = PowerSetConfig::default();
        let ps = try_power_set(&[1, 2, 3], &config).unwrap();
        assert_eq!(ps.len(), 8);
    }

    #[test]
    fn test_try_power_set_at_limit() {
        let config = PowerSetConfig::default().with_max_len(3);
        let ps = try_power_set(&[1, 2, 3], &config).unwrap();
        assert_eq!(ps, power_set(&[1, 2, 3]));
    }

    #[test]
    fn test_try_power_set_too_large() {
        let config = PowerSetConfig::default().with_max_len(2);
        let res = try_power_set(&[1, 2, 3], &config);
        assert_eq!(res, Err(PowerSetError::InputTooLarge { len: 3, limit: 2 }));
    }

    #[test]
    fn test_config_check() {
        let config = PowerSetConfig::default();
        assert_eq!(config.check(usize::MAX), Ok(()));

        let config = config.with_max_len(4);
        assert_eq!(config.check(0), Ok(()));
        assert_eq!(config.check(4), Ok(()));
        assert_eq!(config.check(5), Err(PowerSetError::InputTooLarge { len: 5, limit: 4 }));
    }

    #[test]
    fn test_subset_count() {
        assert_eq!(subset_count(0), BigUint::from(1u32));
        assert_eq!(subset_count(3), BigUint::from(8u32));
        assert_eq!(subset_count(64), BigUint::from(u64::MAX) + 1u32);
        assert_eq!(subset_count(100).bits(), 101);
    }
}
