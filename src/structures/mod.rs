//! Key structures, such as literals, clauses, and formulas.
//!
//! Most structures are made of a trait to capture the key features of the structure and a 'canonical' implementation of the trait.
//! Use of a trait or it's canonical implementation within the library is situational.
//!
//! # Other structures without a trait and/or canonical implementation.
//!
//! ## Formulas
//!
//! A [formula] 𝐅 is a sequence of [clauses](clause), interpreted as the conjunction of those clauses.
//! How each clause is read is fixed by the [semantics](formula::Semantics) of the formula, either as the disjunction of its literals or as a not-all-equal constraint over its literals.
//!
//! ## Assignments
//!
//! An [assignment] is a total function from the atoms of some formula to (boolean) values.
//! A search revises a single assignment, until either the assignment satisfies the formula or the search is abandoned.

pub mod assignment;
pub mod atom;
pub mod clause;
pub mod formula;
pub mod literal;
