//! A library for finding assignments which satisfy boolean formulas, by stochastic local search.
//!
//! walksat_lm is an implementation of WalkSATlm, a variant of the WalkSAT local search in which ties between flips which break equally few clauses are resolved by a linear score over the clauses *made* (and broken) at configurable levels.
//! Formulas are read on either standard (SAT) or not-all-equal (NAE-SAT) semantics.
//!
//! As with any local search, the procedure is incomplete.
//! A satisfying assignment found by a search is certainly satisfying, though a search which ends without a satisfying assignment says nothing about the formula.
//!
//! # Orientation
//!
//! The library is designed around a [context], which pairs a [configuration](config) with a source of randomness and an assignment.
//!
//! - A [formula](structures::formula) is built by appending [clauses](structures::clause), and is read (never written) by a search.
//! - A [search](procedures::solve) revises the assignment of the context, one [step](procedures::step) at a time, guided by the [score](procedures::score) of each candidate flip.
//! - The result of a search is a [report](reports), and the final assignment remains with the context.
//!
//! Useful starting points, then, may be:
//! - The [solve procedure](crate::procedures::solve) to inspect the dynamics of a search.
//! - The [scoring procedure](crate::procedures::score) for details on make and break levels.
//! - The [configuration](crate::config) to see what is supported.
//!
//! # Examples
//!
//! + Find an assignment to a small formula, and record the outcome.
//!
//! ```rust
//! # use walksat_lm::config::Config;
//! # use walksat_lm::context::Context;
//! # use walksat_lm::reports::Report;
//! # use walksat_lm::structures::clause::Clause;
//! # use walksat_lm::structures::formula::{Formula, Semantics};
//! use walksat_lm::structures::literal::{CLiteral, Literal};
//!
//! let x = |atom| CLiteral::new(atom, true);
//! let not_x = |atom| CLiteral::new(atom, false);
//!
//! let formula = Formula::from_clauses(
//!     Semantics::Standard,
//!     vec![
//!         Clause::new(vec![x(0), x(1), not_x(2)]),
//!         Clause::new(vec![not_x(0), x(1)]),
//!         Clause::new(vec![x(0), not_x(1), x(2)]),
//!     ],
//! );
//!
//! let mut the_context = Context::from_config(Config::default());
//!
//! assert_eq!(the_context.solve(&formula), Ok(Report::Satisfied));
//! assert_eq!(formula.is_satisfied(the_context.assignment()), Ok(true));
//!
//! let outcome = the_context.outcome();
//! assert_eq!(outcome.result.len(), 3);
//! assert_eq!(outcome.steps, the_context.counters.steps);
//! ```
//!
//! + Search with a step budget, on not-all-equal semantics with balance scoring.
//!
//! ```rust
//! # use walksat_lm::config::{Config, Scoring};
//! # use walksat_lm::context::Context;
//! # use walksat_lm::reports::Report;
//! # use walksat_lm::structures::clause::Clause;
//! # use walksat_lm::structures::formula::{Formula, Semantics};
//! # use walksat_lm::structures::literal::{CLiteral, Literal};
//! let x = |atom| CLiteral::new(atom, true);
//!
//! // No 2-colouring of a triangle.
//! let formula = Formula::from_clauses(
//!     Semantics::NotAllEqual,
//!     vec![
//!         Clause::new(vec![x(0), x(1)]),
//!         Clause::new(vec![x(1), x(2)]),
//!         Clause::new(vec![x(0), x(2)]),
//!     ],
//! );
//!
//! let config = Config {
//!     scoring: Scoring::Balance,
//!     timeout: Some(100),
//!     ..Config::default()
//! };
//! let mut the_context = Context::from_config(config);
//!
//! assert_eq!(the_context.solve(&formula), Ok(Report::TimedOut));
//! ```
//!
//! # Logs
//!
//! Logs are made throughout the library, to the targets listed in [misc::log].
//! No log implementation is provided.

#![allow(clippy::derivable_impls)]

pub mod procedures;

pub mod config;
pub mod context;
pub mod reports;
pub mod structures;
pub mod types;

pub mod generic;

pub mod misc;
