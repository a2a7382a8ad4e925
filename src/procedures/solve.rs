//! Searches for an assignment which satisfies a formula.
//!
//! # Overview
//!
//! [solve](GenericContext::solve) is a WalkSAT style local search, with [steps](crate::procedures::step) guided by [scores](crate::procedures::score) over make and break levels (aka. WalkSATlm).
//!
//! The search begins from an assignment chosen uniformly at random, and each step of the search:
//!
//! - Ends the search if the assignment satisfies the formula.
//! - Ends the search if the step budget is exhausted.
//! - Otherwise, chooses some unsatisfied clause uniformly at random, and flips the atom of some literal of the clause.
//!
//! Roughly, the loop is:
//!
//! ```rust,ignore
//! loop {
//!     self.counters.steps += 1;
//!
//!     let unsatisfied = formula.unsatisfied_keys(&self.assignment)?;
//!     if unsatisfied.is_empty() {
//!         break; // satisfied
//!     }
//!     if timeout.is_some_and(|limit| self.counters.steps > limit) {
//!         break; // timed out
//!     }
//!
//!     self.step(formula, *unsatisfied.choose(rng))?;
//! }
//! ```
//!
//! As the check for satisfaction is made at the start of each step, the count of steps of a search which finds a satisfying assignment is one more than the count of flips made.
//!
//! The search is incomplete, and so a search may exhaust its step budget on a satisfiable formula, and a search on an unsatisfiable formula without a step budget never ends.
//!
//! # Inputs which are rejected
//!
//! Before the search begins:
//! - The configuration is [validated](crate::config::Config::validate).
//! - A formula containing an empty clause is rejected, as no flip satisfies an empty clause.
//!
//! And, make or break levels which no clause of the formula may reach are noted with a warning.
//!
//! # Example
//!
//! ```rust
//! # use walksat_lm::config::Config;
//! # use walksat_lm::context::Context;
//! # use walksat_lm::reports::Report;
//! # use walksat_lm::structures::clause::Clause;
//! # use walksat_lm::structures::formula::{Formula, Semantics};
//! # use walksat_lm::structures::literal::{CLiteral, Literal};
//! let x = |atom| CLiteral::new(atom, true);
//!
//! // Either x0 or x1 but not both, and x1 or x2 but not both.
//! let formula = Formula::from_clauses(
//!     Semantics::NotAllEqual,
//!     vec![Clause::new(vec![x(0), x(1)]), Clause::new(vec![x(1), x(2)])],
//! );
//!
//! let mut the_context = Context::from_config(Config::default());
//! assert_eq!(the_context.solve(&formula), Ok(Report::Satisfied));
//!
//! let assignment = the_context.assignment();
//! assert_ne!(assignment[0], assignment[1]);
//! assert_ne!(assignment[1], assignment[2]);
//! assert_eq!(assignment[0], assignment[2]);
//! ```

use rand::Rng;

use crate::{
    context::{ContextState, Counters, GenericContext},
    misc::log::targets::{self},
    reports::Report,
    structures::{assignment::Assignment, formula::Formula},
    types::err::{self},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Searches for an assignment which satisfies the formula, and returns a report on how the search ended.
    ///
    /// Counters, state, and the assignment of the context are reset at the start of each search, though the source of rng continues from any previous search.
    /// So, after a rejected search the context reports nothing from any previous search.
    pub fn solve(&mut self, formula: &Formula) -> Result<Report, err::ErrorKind> {
        self.counters = Counters::default();
        self.assignment.clear();
        self.state = ContextState::Configuration;

        self.preflight(formula)?;

        self.assignment = formula.random_assignment(&mut self.rng);
        self.state = ContextState::Solving;

        log::info!(target: targets::SEARCH, "Search on {} atoms and {} clauses ({}), from {}", formula.atom_count(), formula.clause_count(), formula.semantics(), self.assignment.bitstring());

        loop {
            self.counters.steps += 1;

            let unsatisfied = formula.unsatisfied_keys(&self.assignment)?;
            if unsatisfied.is_empty() {
                self.state = ContextState::Satisfied;
                break;
            }

            if self
                .config
                .timeout
                .is_some_and(|limit| self.counters.steps > limit)
            {
                self.state = ContextState::TimedOut;
                break;
            }

            let key = unsatisfied[self.rng.gen_range(0..unsatisfied.len())];
            log::trace!(target: targets::SEARCH, "Step {}: {} unsatisfied", self.counters.steps, unsatisfied.len());

            self.step(formula, key)?;
        }

        log::info!(target: targets::SEARCH, "{} after {} steps ({} freebie, {} noise, {} greedy)", self.state, self.counters.steps, self.counters.freebies, self.counters.noise_moves, self.counters.greedy_moves);

        Ok(self.report())
    }

    /// Checks made before a search begins.
    fn preflight(&self, formula: &Formula) -> Result<(), err::ErrorKind> {
        self.config.validate()?;

        if let Some(key) = formula.empty_clause() {
            log::error!(target: targets::FORMULA, "Clause {key} is empty");
            return Err(err::FormulaError::EmptyClause(key).into());
        }

        let sizes = formula.clause_sizes().collect::<Vec<_>>();
        if !sizes.is_empty() {
            for level in self.config.scoring.unreachable_levels(&sizes) {
                log::warn!(target: targets::CONFIG, "Level {level} is not reached by any clause size in {sizes:?}");
            }
        }

        Ok(())
    }
}
