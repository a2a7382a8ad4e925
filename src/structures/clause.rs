//! Clauses, aka. a collection of literals.
//!
//! Whether a clause is read as the disjunction of its literals or as a not-all-equal constraint over its literals is a matter for the [formula](crate::structures::formula) containing the clause.
//! The clause itself provides the primitive checks from which either reading is built: whether some literal is true, and whether all literals share a value.
//!
//! ```rust
//! # use walksat_lm::structures::clause::Clause;
//! # use walksat_lm::structures::literal::{ABLiteral, Literal};
//! let x0 = ABLiteral::new(0, true);
//! let x1 = ABLiteral::new(1, true);
//!
//! let clause = Clause::new(vec![x0, x1, x0]);
//! assert_eq!(clause.size(), 2);
//!
//! assert_eq!(clause.is_satisfied(&[false, true]), Ok(true));
//! assert_eq!(clause.is_satisfied(&[false, false]), Ok(false));
//! assert_eq!(clause.all_same(&[false, false]), Ok(true));
//! ```
//!
//! - Duplicate literals are removed, keeping the first occurrence.
//! - A clause containing some atom with both polarities is *always satisfied* (on the disjunctive reading), as a matter of the law of excluded middle.
//! - The empty clause is never satisfied.

use crate::{
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// A clause, as a sequence of distinct literals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clause {
    /// The literals of the clause, in order of (first) addition.
    literals: Vec<CLiteral>,

    /// Whether some atom occurs in the clause with both polarities.
    always_satisfied: bool,
}

impl Clause {
    /// A clause from the given literals, with any duplicate literals removed.
    pub fn new(literals: impl IntoIterator<Item = CLiteral>) -> Self {
        let mut clause = Clause {
            literals: Vec::default(),
            always_satisfied: false,
        };
        for literal in literals {
            clause.push_fresh(literal);
        }
        clause.always_satisfied = clause.tautology_check();
        clause
    }

    /// Adds a literal to the end of the clause, unless the literal is already present.
    pub fn append(&mut self, literal: CLiteral) {
        if self.push_fresh(literal) {
            self.always_satisfied = self.tautology_check();
        }
    }

    fn push_fresh(&mut self, literal: CLiteral) -> bool {
        match self.literals.contains(&literal) {
            true => false,
            false => {
                self.literals.push(literal);
                true
            }
        }
    }

    /// Clauses are short, and so the quadratic check is fine.
    fn tautology_check(&self) -> bool {
        self.literals.iter().enumerate().any(|(index, literal)| {
            self.literals[index + 1..]
                .iter()
                .any(|other| other.atom() == literal.atom())
        })
    }

    /// The number of literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    /// Whether the clause contains some atom with both polarities.
    pub fn always_satisfied(&self) -> bool {
        self.always_satisfied
    }

    /// An iterator over the literals of the clause, in clause order.
    pub fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.literals.iter()
    }

    /// The literal at the given position of the clause, if it exists.
    pub fn literal(&self, index: usize) -> Option<&CLiteral> {
        self.literals.get(index)
    }

    /// An iterator over the atoms of the clause, in clause order.
    ///
    /// An atom is returned twice if it occurs with both polarities.
    pub fn atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.literals.iter().map(|literal| literal.atom())
    }

    /// The number of literals of the clause which are true on the assignment.
    pub fn true_count(&self, assignment: &[bool]) -> Result<usize, err::AssignmentError> {
        let mut count = 0;
        for literal in &self.literals {
            if literal.evaluate(assignment)? {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Whether the clause is satisfied on the assignment, when read as a disjunction.
    pub fn is_satisfied(&self, assignment: &[bool]) -> Result<bool, err::AssignmentError> {
        if self.always_satisfied {
            return Ok(true);
        }
        for literal in &self.literals {
            if literal.evaluate(assignment)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Whether every literal of the clause has the same value on the assignment.
    pub fn all_same(&self, assignment: &[bool]) -> Result<bool, err::AssignmentError> {
        let mut values = self.literals.iter().map(|literal| literal.evaluate(assignment));
        match values.next() {
            None => Ok(true),
            Some(first) => {
                let first = first?;
                for value in values {
                    if value? != first {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
        }
    }

    /// The parity of the given literals, or of the whole clause if no literals are given.
    ///
    /// The parity is -1 if an odd number of the literals are positive, and 1 otherwise.
    pub fn parity(&self, subset: Option<&[CLiteral]>) -> i8 {
        let literals = subset.unwrap_or(&self.literals);
        match literals.iter().fold(false, |r, literal| r ^ literal.polarity()) {
            true => -1,
            false => 1,
        }
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let literals = self
            .literals
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>();
        write!(f, "({})", literals.join(" ∨ "))
    }
}

impl FromIterator<CLiteral> for Clause {
    fn from_iter<I: IntoIterator<Item = CLiteral>>(iter: I) -> Self {
        Clause::new(iter)
    }
}
