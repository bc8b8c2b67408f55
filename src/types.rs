//! Type-safe wrappers for propositional atoms and valuations.
use std::collections::BTreeSet;
use std::fmt;

/// The name of a propositional variable.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Atom(String);

impl Atom {
    pub fn new(name: impl Into<String>) -> Self {
        Atom(name.into())
    }

    /// Returns the name of the atom.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Atom {
    fn from(name: &str) -> Self {
        Atom::new(name)
    }
}

impl From<String> for Atom {
    fn from(name: String) -> Self {
        Atom(name)
    }
}

/// An assignment of truth values to atoms.
///
/// Only the atoms that are true are stored; every other atom is false.
/// In particular, the empty valuation makes every atom false.
#[derive(Debug, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Valuation(BTreeSet<Atom>);

impl Valuation {
    /// Creates the valuation in which exactly the given atoms are true.
    pub fn from_true<A: Into<Atom>>(atoms: impl IntoIterator<Item = A>) -> Self {
        Valuation(atoms.into_iter().map(Into::into).collect())
    }

    /// Returns true if `atom` is assigned true.
    pub fn is_true(&self, atom: &Atom) -> bool {
        self.0.contains(atom)
    }

    /// Iterates over the true atoms, in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Atom> {
        self.0.iter()
    }

    /// Returns the number of true atoms.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Atom> for Valuation {
    fn from_iter<I: IntoIterator<Item = Atom>>(iter: I) -> Self {
        Valuation(iter.into_iter().collect())
    }
}

impl fmt::Display for Valuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, atom) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", atom)?;
        }
        write!(f, "}}")
    }
}
