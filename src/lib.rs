//! # powerset-rs: Power sets in Rust
//!
//! **`powerset-rs`** computes the power set of a sequence (the family of all its subsets)
//! in a fixed, *canonical* order, and builds propositional satisfiability on top of it.
//!
//! ## Canonical Order
//!
//! The power set is built by **recursive doubling**: the power set of `[x1, ..., xn]` is the
//! power set of `[x1, ..., x(n-1)]`, followed by the same subsets with `xn` appended.
//! Equivalently, subset `i` contains `xk` iff bit `k` of `i` is set (bit 0 is `x1`).
//! The empty subset always comes first, and there are exactly `2^n` subsets.
//!
//! Subsets are **positional**: they are defined by which positions are selected, not by the
//! values found there. Inputs with duplicate values produce subsets that are equal by value.
//!
//! ## Basic Usage
//!
//! ```rust
//! use powerset_rs::powerset::power_set;
//! use powerset_rs::subsets::subsets;
//!
//! // Materialize the whole family
//! let ps = power_set(&["A", "B"]);
//! assert_eq!(ps, vec![vec![], vec!["A"], vec!["B"], vec!["A", "B"]]);
//!
//! // Or stream it lazily, in the same order
//! let lazy: Vec<_> = subsets(&["A", "B"]).collect();
//! assert_eq!(lazy, ps);
//! ```
//!
//! ## Core Components
//!
//! - **[`powerset`]**: The power set generator, plus a guarded variant with a configurable size limit.
//! - **[`subsets`]**: Lazy enumeration in canonical order, backed by a [`mask::Mask`] counter.
//! - **[`family`]**: Membership and intersection over families of subsets.
//! - **[`formula`]** and **[`sat`]**: Propositional formulas, decided by enumerating all valuations.

pub mod error;
pub mod family;
pub mod formula;
pub mod mask;
pub mod powerset;
pub mod sat;
pub mod subsets;
pub mod types;
