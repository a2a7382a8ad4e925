//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity (and a few other useful things).
//!
//! The 'canonical' implementation of the literal trait is the [ABLiteral] structure, made of an atom (the 'a') and a boolean (the 'b').
//!
//! ```rust
//! # use walksat_lm::structures::literal::{ABLiteral, Literal};
//! let atom = 79;
//! let polarity = true;
//! let literal = ABLiteral::new(atom, polarity);
//!
//! assert!(literal.polarity());
//!
//! assert!(literal.atom().cmp(&79).is_eq());
//! assert!(literal.negate().polarity().cmp(&false).is_eq());
//!
//! assert!(literal.cmp(&ABLiteral::new(79, !false)).is_eq());
//! ```
//!
//! A literal with polarity `false` is a negation, and is satisfied by an assignment exactly when its atom is valued `false`.
//!
//! The integer form of a literal follows the DIMACS convention, and so as atoms begin at `0` the atom *a* is written as *a + 1*.

use crate::{
    structures::{assignment::Assignment, atom::Atom},
    types::err::{self},
};

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal in it's integer form, with sign indicating polarity.
    fn as_int(&self) -> isize;

    /// Whether the literal is true on the given assignment.
    ///
    /// Fails if the atom of the literal has no value on the assignment.
    fn evaluate(&self, assignment: &[bool]) -> Result<bool, err::AssignmentError> {
        match assignment.value_of(self.atom()) {
            Some(value) => Ok(value == self.polarity()),
            None => Err(err::AssignmentError::AtomOutOfRange(self.atom())),
        }
    }
}

/// The representation of a literal as an atom paired with a boolean.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ABLiteral {
    /// The atom of a literal.
    atom: Atom,

    /// The polarity of a literal.
    polarity: bool,
}

/// The canonical implementation of a literal.
pub type CLiteral = ABLiteral;

impl Literal for ABLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        Self { atom, polarity }
    }

    fn negate(&self) -> Self {
        Self {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    fn atom(&self) -> Atom {
        self.atom
    }

    fn polarity(&self) -> bool {
        self.polarity
    }

    fn as_int(&self) -> isize {
        match self.polarity {
            true => self.atom as isize + 1,
            false => -(self.atom as isize + 1),
        }
    }
}

impl PartialOrd for ABLiteral {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ABLiteral {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.atom == other.atom {
            self.polarity.cmp(&other.polarity)
        } else {
            self.atom.cmp(&other.atom)
        }
    }
}

impl std::fmt::Display for ABLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "x{}", self.atom),
            false => write!(f, "¬x{}", self.atom),
        }
    }
}

impl TryFrom<i32> for ABLiteral {
    type Error = ();

    /// A literal from the DIMACS integer form, where `0` is not a literal.
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Err(()),
            _ => Ok(ABLiteral::new(value.unsigned_abs() - 1, value.is_positive())),
        }
    }
}
