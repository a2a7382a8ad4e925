/*!
Methods for scoring a flip.

# Overview

The score of a flip of some atom *v* on an assignment is a summary of how the status of each clause of the formula changes when *v* is flipped.

Alongside the score is the *base break* of the flip, the count of clauses which are satisfied before the flip and unsatisfied after the flip, on the semantics of the formula.
A flip with a base break of zero is a *freebie*, as the flip gives up no satisfied clause.

# Linear scoring

On [linear](crate::config::Scoring::Linear) scoring each clause is summarised by the count of true literals in the clause before and after the flip.
As a flip changes the value of a single atom, these counts differ by the number of literals of the clause on the atom, in one direction or the other.

For a clause of size *k* and a level τ resolving to κ (see [config](crate::config#levels)):
- The flip *makes* the clause at κ if the count moves from κ - 1 to κ.
- The flip *breaks* the clause at κ if the count moves from κ to κ - 1.

And the score of the flip is the sum over levels of the weight of the level multiplied by the count of clauses made (or broken) at the level.

So, with a make level of 1 and no break levels, the score of a flip is the weighted count of clauses which move from no true literal to some true literal.

As the status of a clause without *v* is unchanged by a flip of *v*, only the [occurrences](crate::structures::formula::Formula::occurrences) of *v* are examined.

# Balance scoring

On [balance](crate::config::Scoring::Balance) scoring every clause of size *k* with *t* true literals after the flip contributes -(2*t* - *k*)², and so a flip which moves clauses toward as many true as false literals scores highest.

As the contribution of a clause without *v* is nonzero, balance scoring examines every clause of the formula.

# Example

```rust
# use walksat_lm::config::{Config, Scoring};
# use walksat_lm::context::Context;
# use walksat_lm::structures::assignment;
# use walksat_lm::structures::clause::Clause;
# use walksat_lm::structures::formula::{Formula, Semantics};
# use walksat_lm::structures::literal::{CLiteral, Literal};
let x = |atom| CLiteral::new(atom, true);
let formula = Formula::from_clauses(
    Semantics::Standard,
    vec![Clause::new(vec![x(0), x(1)]), Clause::new(vec![x(0).negate()])],
);

let config = Config {
    scoring: Scoring::linear(&[(1, 5.0)], &[]),
    ..Config::default()
};
let the_context = Context::from_config(config);

let none_true = assignment::from_bitstring("00").unwrap();
let scored = the_context.score(&formula, 0, &none_true).unwrap();

assert_eq!(scored.score, 5.0);
assert_eq!(scored.base_break, 1);
```
*/

use crate::{
    config::{resolve_level, Level, Scoring, Weight},
    context::GenericContext,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::Clause,
        formula::Formula,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// The score of a flip, together with the count of clauses broken by the flip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scored {
    /// The score of the flip, higher is better.
    pub score: f64,

    /// The count of clauses satisfied before the flip and unsatisfied after the flip.
    pub base_break: usize,
}

impl Scored {
    /// Whether the flip breaks no clause.
    pub fn is_freebie(&self) -> bool {
        self.base_break == 0
    }
}

/// The change in the count of true literals of the clause given a flip of the atom, on an assignment where the atom has the given value.
fn count_shift<'l>(
    literals: impl IntoIterator<Item = &'l CLiteral>,
    atom: Atom,
    value: bool,
) -> isize {
    literals
        .into_iter()
        .filter(|literal| literal.atom() == atom)
        .map(|literal| match literal.polarity() == value {
            true => -1,
            false => 1,
        })
        .sum()
}

/// The weighted count of levels reached by a move from `from` true literals to `to` true literals.
fn level_sum(levels: &[(Level, Weight)], size: usize, from: usize, to: usize) -> Weight {
    levels
        .iter()
        .filter(|(level, _)| match resolve_level(*level, size) {
            Some(kappa) => from + 1 == kappa && to == kappa,
            None => false,
        })
        .map(|(_, weight)| *weight)
        .sum()
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// The score and base break of a flip of `atom` on `assignment`, relative to the configured [Scoring].
    ///
    /// The assignment is read only, and so a flip may be scored on any assignment to the formula.
    pub fn score(
        &self,
        formula: &Formula,
        atom: Atom,
        assignment: &[bool],
    ) -> Result<Scored, err::ErrorKind> {
        let value = match assignment.get(atom as usize) {
            Some(value) => *value,
            None => return Err(err::AssignmentError::AtomOutOfRange(atom).into()),
        };

        let mut base_break = 0;
        let mut score = 0.0;

        for key in formula.occurrences(atom) {
            let clause = match formula.clause(*key) {
                Some(clause) => clause,
                None => return Err(err::FormulaError::MissingClause(*key).into()),
            };
            let (current, flipped) = Self::counts(clause, atom, value, assignment)?;

            let semantics = formula.semantics();
            if semantics.satisfied_on_count(clause, current)
                && !semantics.satisfied_on_count(clause, flipped)
            {
                base_break += 1;
            }

            if let Scoring::Linear { makes, breaks } = &self.config.scoring {
                score += level_sum(makes, clause.size(), current, flipped);
                score += level_sum(breaks, clause.size(), flipped, current);
            }
        }

        if matches!(self.config.scoring, Scoring::Balance) {
            for clause in formula.clauses() {
                let (_, flipped) = Self::counts(clause, atom, value, assignment)?;
                let difference = 2 * flipped as isize - clause.size() as isize;
                score -= (difference * difference) as f64;
            }
        }

        log::trace!(target: targets::SCORE, "Flip of {atom}: score {score}, base break {base_break}");

        Ok(Scored { score, base_break })
    }

    /// The count of true literals of the clause before and after a flip of the atom.
    fn counts(
        clause: &Clause,
        atom: Atom,
        value: bool,
        assignment: &[bool],
    ) -> Result<(usize, usize), err::AssignmentError> {
        let current = clause.true_count(assignment)?;
        let flipped = current as isize + count_shift(clause.literals(), atom, value);
        Ok((current, flipped as usize))
    }
}
