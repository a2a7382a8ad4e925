/*!
A single step of a search, aka. the repair of some unsatisfied clause by a flip.

# Overview

Given an unsatisfied clause the atom to flip is chosen from the atoms of the literals of the clause, in one of three ways:

1. If a flip of the atom of some literal of the clause breaks no clause, the first such atom (in clause order) is flipped.
   This is a *freebie*.
2. Otherwise, with probability [noise](crate::config::Config::noise), the atom of a literal chosen uniformly at random is flipped.
3. Otherwise, the atom to flip is chosen greedily:
   - Of the literals, those whose flip breaks the fewest clauses are kept.
   - If a single literal is kept, its atom is flipped.
   - Otherwise, the atom of a literal chosen uniformly from those kept literals with the highest [score](crate::procedures::score) is flipped.

Roughly:

```rust,ignore
if let Some(atom) = first_freebie {
    flip(atom)
} else if noise.sample(rng) {
    flip(random_literal.atom())
} else {
    let fewest_breaks = candidates.filter(|c| c.base_break == min_break);
    flip(fewest_breaks.filter(|c| c.score == max_score).choose(rng).atom())
}
```

A noise probability outside of [0, 1] is an error, whether the step is made within a search or not.

Note, a clause containing some atom twice (with distinct polarities) offers the atom twice, and so a uniform choice over literals need not be a uniform choice over atoms.
*/

use rand::{
    distributions::{Bernoulli, Distribution},
    seq::SliceRandom,
    Rng,
};

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    procedures::score::Scored,
    structures::{
        assignment::Assignment,
        atom::Atom,
        formula::{ClauseKey, Formula},
        literal::Literal,
    },
    types::err::{self},
};

/// Ok results of a step, each noting the flipped atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOk {
    /// The flip broke no clause.
    Freebie(Atom),

    /// The flip was chosen at random.
    Noise(Atom),

    /// The flip was chosen by score.
    Greedy(Atom),
}

impl StepOk {
    /// The atom flipped by the step.
    pub fn atom(&self) -> Atom {
        match self {
            Self::Freebie(atom) | Self::Noise(atom) | Self::Greedy(atom) => *atom,
        }
    }
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Flips the atom of some literal of the clause with the given key, and returns the kind of step made.
    ///
    /// The clause is expected to be unsatisfied on the current assignment, though this is not checked.
    pub fn step(&mut self, formula: &Formula, key: ClauseKey) -> Result<StepOk, err::ErrorKind> {
        let clause = match formula.clause(key) {
            Some(clause) => clause,
            None => return Err(err::FormulaError::MissingClause(key).into()),
        };
        if clause.size() == 0 {
            return Err(err::FormulaError::EmptyClause(key).into());
        }

        let noise = match Bernoulli::new(self.config.noise.value) {
            Ok(noise) => noise,
            Err(_) => {
                log::error!(target: targets::CONFIG, "Noise {} is not a probability", self.config.noise.value);
                return Err(err::ConfigError::Noise(self.config.noise.value).into());
            }
        };

        let mut candidates: Vec<(Atom, Scored)> = Vec::with_capacity(clause.size());
        let mut freebie = None;

        for literal in clause.literals() {
            let scored = self.score(formula, literal.atom(), &self.assignment)?;
            if scored.is_freebie() {
                freebie = Some(literal.atom());
                break;
            }
            candidates.push((literal.atom(), scored));
        }

        let step = match freebie {
            Some(atom) => {
                self.counters.freebies += 1;
                StepOk::Freebie(atom)
            }

            None if noise.sample(&mut self.rng) => {
                let index = self.rng.gen_range(0..candidates.len());
                self.counters.noise_moves += 1;
                StepOk::Noise(candidates[index].0)
            }

            None => {
                self.counters.greedy_moves += 1;
                StepOk::Greedy(self.greedy_choice(&candidates))
            }
        };

        log::trace!(target: targets::SEARCH, "Clause {key}: {step:?}");

        self.assignment.flip(step.atom())?;
        self.counters.flips += 1;

        Ok(step)
    }

    /// The atom of some candidate with fewest breaks and, of those, highest score.
    ///
    /// Requires at least one candidate.
    fn greedy_choice(&mut self, candidates: &[(Atom, Scored)]) -> Atom {
        let fewest_breaks = candidates
            .iter()
            .map(|(_, scored)| scored.base_break)
            .min()
            .unwrap_or_default();

        let kept = candidates
            .iter()
            .filter(|(_, scored)| scored.base_break == fewest_breaks)
            .collect::<Vec<_>>();

        if let [(atom, _)] = kept.as_slice() {
            return *atom;
        }

        let best_score = kept
            .iter()
            .map(|(_, scored)| scored.score)
            .fold(f64::NEG_INFINITY, f64::max);

        let best = kept
            .into_iter()
            .filter(|(_, scored)| scored.score == best_score)
            .map(|(atom, _)| *atom)
            .collect::<Vec<_>>();

        match best.choose(&mut self.rng) {
            Some(atom) => *atom,
            None => candidates[0].0,
        }
    }
}
