//! Propositional formulas.
//!
//! The primitive connectives are NOT, AND and OR, together with atoms and the
//! constants TRUE and FALSE. Implication and equivalence are reduced to the
//! primitives when constructed:
//!
//! ```text
//! A -> B   ==  (NOT A) OR B
//! A <-> B  ==  (A -> B) AND (B -> A)
//! ```
//!
//! # Example
//!
//! ```
//! use powerset_rs::formula::Formula;
//! use powerset_rs::types::Valuation;
//!
//! let f = Formula::and(Formula::atom("A"), Formula::not(Formula::atom("B")));
//! assert_eq!(f.to_string(), "(A AND (NOT B))");
//! assert!(f.truth_value(&Valuation::from_true(["A"])));
//! assert!(!f.truth_value(&Valuation::from_true(["A", "B"])));
//! ```

use std::collections::BTreeSet;
use std::fmt;

use crate::types::{Atom, Valuation};

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Formula {
    True,
    False,
    Atom(Atom),
    Not(Box<Formula>),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
}

impl Formula {
    pub fn atom(name: impl Into<Atom>) -> Self {
        Formula::Atom(name.into())
    }

    pub fn not(value: Self) -> Self {
        Formula::Not(Box::new(value))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Formula::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Formula::Or(Box::new(lhs), Box::new(rhs))
    }

    /// `lhs -> rhs`, reduced to `(NOT lhs) OR rhs`.
    pub fn implies(lhs: Self, rhs: Self) -> Self {
        Formula::or(Formula::not(lhs), rhs)
    }

    /// `lhs <-> rhs`, reduced to `(lhs -> rhs) AND (rhs -> lhs)`.
    pub fn iff(lhs: Self, rhs: Self) -> Self {
        Formula::and(
            Formula::implies(lhs.clone(), rhs.clone()),
            Formula::implies(rhs, lhs),
        )
    }
}

impl Formula {
    /// Returns the set of all atoms occurring in the formula.
    pub fn vars(&self) -> BTreeSet<Atom> {
        let mut vars = BTreeSet::new();
        self.collect_vars(&mut vars);
        vars
    }

    fn collect_vars(&self, vars: &mut BTreeSet<Atom>) {
        match self {
            Formula::True | Formula::False => {}
            Formula::Atom(atom) => {
                vars.insert(atom.clone());
            }
            Formula::Not(a) => a.collect_vars(vars),
            Formula::And(a, b) | Formula::Or(a, b) => {
                a.collect_vars(vars);
                b.collect_vars(vars);
            }
        }
    }

    /// Evaluates the formula under `valuation`.
    ///
    /// Returns true iff `valuation |= self`.
    pub fn truth_value(&self, valuation: &Valuation) -> bool {
        match self {
            Formula::True => true,
            Formula::False => false,
            Formula::Atom(atom) => valuation.is_true(atom),
            Formula::Not(a) => !a.truth_value(valuation),
            Formula::And(a, b) => a.truth_value(valuation) && b.truth_value(valuation),
            Formula::Or(a, b) => a.truth_value(valuation) || b.truth_value(valuation),
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::True => write!(f, "TRUE"),
            Formula::False => write!(f, "FALSE"),
            Formula::Atom(atom) => write!(f, "{}", atom),
            Formula::Not(a) => write!(f, "(NOT {})", a),
            Formula::And(a, b) => write!(f, "({} AND {})", a, b),
            Formula::Or(a, b) => write!(f, "({} OR {})", a, b),
        }
    }
}
