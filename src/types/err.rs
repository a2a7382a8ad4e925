//! Error types used in the library.
//!
//! - Errors about the shape of inputs (an assignment of the wrong length, a clause which can never be satisfied, etc.) are returned immediately and are never recovered from within a search.
//! - A search which exhausts its step budget is *not* an error, and is instead noted in a [report](crate::reports::Report).
//!
//! Names of the error enums overlap with the structures they relate to.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::{atom::Atom, formula::ClauseKey};

/// The general error kind, wrapping specific errors.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorKind {
    Assignment(AssignmentError),
    Config(ConfigError),
    Formula(FormulaError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assignment(e) => write!(f, "Assignment error: {e}"),
            Self::Config(e) => write!(f, "Config error: {e}"),
            Self::Formula(e) => write!(f, "Formula error: {e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors relating an assignment to a formula, clause, or literal.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AssignmentError {
    /// The assignment does not value exactly the atoms of the formula.
    Length { expected: usize, found: usize },

    /// Some atom is beyond the end of the assignment.
    AtomOutOfRange(Atom),

    /// A bitstring contained something other than '0' or '1', at the given position.
    Bitstring(usize),
}

impl std::fmt::Display for AssignmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Length { expected, found } => {
                write!(f, "expected length {expected}, actual length {found}")
            }
            Self::AtomOutOfRange(atom) => write!(f, "atom {atom} is not valued"),
            Self::Bitstring(position) => write!(f, "invalid bit at position {position}"),
        }
    }
}

impl From<AssignmentError> for ErrorKind {
    fn from(e: AssignmentError) -> Self {
        ErrorKind::Assignment(e)
    }
}

/// Errors in a configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The noise probability is outside of [0, 1].
    Noise(f64),

    /// The weight of some make or break level is not finite.
    Weight(i32),

    /// Some level appears more than once in the make levels, or more than once in the break levels.
    DuplicateLevel(i32),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Noise(p) => write!(f, "noise {p} is not a probability"),
            Self::Weight(level) => write!(f, "the weight of level {level} is not finite"),
            Self::DuplicateLevel(level) => write!(f, "level {level} is given more than once"),
        }
    }
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors in the shape of a formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormulaError {
    /// The formula contains an empty clause, which no flip can satisfy.
    EmptyClause(ClauseKey),

    /// No clause of the formula has the given key.
    MissingClause(ClauseKey),
}

impl std::fmt::Display for FormulaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyClause(key) => write!(f, "clause {key} is empty"),
            Self::MissingClause(key) => write!(f, "no clause has key {key}"),
        }
    }
}

impl From<FormulaError> for ErrorKind {
    fn from(e: FormulaError) -> Self {
        ErrorKind::Formula(e)
    }
}
