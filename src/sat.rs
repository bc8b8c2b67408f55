//! Satisfiability and logical consequence by exhaustive enumeration.
//!
//! Every valuation over a set of atoms is a subset of those atoms (the atoms
//! that are true), so the valuations are exactly the power set of the atoms.
//! All queries here enumerate that power set, with atoms sorted by name, in
//! canonical order. This is exponential in the number of atoms.
//!
//! # Example
//!
//! ```
//! use powerset_rs::formula::Formula;
//! use powerset_rs::sat::{logical_consequence, satisfiable};
//!
//! let a = Formula::atom("A");
//! let b = Formula::atom("B");
//!
//! assert!(satisfiable(&Formula::and(a.clone(), Formula::not(a.clone()))).is_none());
//! assert!(logical_consequence(&Formula::and(a.clone(), b.clone()), &a));
//! assert!(!logical_consequence(&Formula::or(a.clone(), b.clone()), &a));
//! ```

use std::collections::BTreeSet;

use log::debug;
use num_bigint::BigUint;

use crate::formula::Formula;
use crate::subsets::subsets;
use crate::types::{Atom, Valuation};

/// Returns an iterator over all valuations of `vars`, in canonical order.
///
/// The first valuation makes every atom false, the last makes every atom true.
pub fn valuations(vars: &[Atom]) -> impl Iterator<Item = Valuation> + '_ {
    subsets(vars).map(Valuation::from_iter)
}

fn sorted_vars<'a>(formulas: impl IntoIterator<Item = &'a Formula>) -> Vec<Atom> {
    let mut vars = BTreeSet::new();
    for f in formulas {
        vars.extend(f.vars());
    }
    vars.into_iter().collect()
}

/// Returns one satisfying valuation of `f`, if any exists.
///
/// The valuation returned is the first model in canonical order. The last-named
/// atom is the most significant bit of that order, so later-named atoms are
/// preferred to be false: for `A OR B` the result is `{A}`.
/// Returns `None` if `f` is unsatisfiable.
pub fn satisfiable(f: &Formula) -> Option<Valuation> {
    let vars = sorted_vars([f]);
    debug!("satisfiable(f = {}, vars = {})", f, vars.len());
    let model = valuations(&vars).find(|v| f.truth_value(v));
    debug!("satisfiable -> {:?}", model.as_ref().map(|v| v.to_string()));
    model
}

/// Returns true if `f` holds in every valuation of its atoms.
pub fn is_valid(f: &Formula) -> bool {
    let vars = sorted_vars([f]);
    debug!("is_valid(f = {}, vars = {})", f, vars.len());
    let valid = valuations(&vars).all(|v| f.truth_value(&v));
    valid
}

/// Returns all satisfying valuations of `f`, in canonical order.
pub fn models(f: &Formula) -> Vec<Valuation> {
    let vars = sorted_vars([f]);
    debug!("models(f = {}, vars = {})", f, vars.len());
    valuations(&vars).filter(|v| f.truth_value(v)).collect()
}

/// Counts the satisfying valuations of `f` over its own atoms.
pub fn model_count(f: &Formula) -> BigUint {
    let vars = sorted_vars([f]);
    debug!("model_count(f = {}, vars = {})", f, vars.len());
    let mut count = BigUint::ZERO;
    for v in valuations(&vars) {
        if f.truth_value(&v) {
            count += 1u32;
        }
    }
    count
}

/// Returns the valuations over the atoms of both formulas in which `f1` is
/// true and `f2` is false.
pub fn countermodels(f1: &Formula, f2: &Formula) -> Vec<Valuation> {
    let vars = sorted_vars([f1, f2]);
    debug!("countermodels(f1 = {}, f2 = {}, vars = {})", f1, f2, vars.len());
    valuations(&vars)
        .filter(|v| f1.truth_value(v) && !f2.truth_value(v))
        .collect()
}

/// Returns true if `f2` is a logical consequence of `f1`, i.e. `f1 |= f2`.
pub fn logical_consequence(f1: &Formula, f2: &Formula) -> bool {
    let vars = sorted_vars([f1, f2]);
    debug!("logical_consequence(f1 = {}, f2 = {}, vars = {})", f1, f2, vars.len());
    let entailed = valuations(&vars).all(|v| !f1.truth_value(&v) || f2.truth_value(&v));
    entailed
}

/// Returns true if `f1` and `f2` have the same truth value in every valuation.
pub fn equivalent(f1: &Formula, f2: &Formula) -> bool {
    logical_consequence(f1, f2) && logical_consequence(f2, f1)
}
