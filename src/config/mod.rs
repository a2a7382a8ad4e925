/*!
Configuration of a context.

All configuration for a context is contained within a [Config], which is fixed for the duration of a search.

The configuration of a search is:
- The probability of a noise move, aka. a flip of some arbitrary atom of the chosen clause.
- The method of [scoring](Scoring) a flip, which is either a linear combination of make and break levels, or the balance of clauses.
- An optional timeout, as a count of steps.
- A seed for the source of randomness.

# Levels

Make and break levels are given as a list of pairs (τ, weight).

The level τ is relative to the size *k* of each clause considered:
- A positive level τ is the level κ = τ.
- A non-positive level τ is the level κ = *k* + τ.

So, the level 0 is the size of a clause, and -1 is one less than the size of a clause, etc.
This allows a single table of levels to apply to formulas with clauses of mixed size.

Each table is a map from levels to weights, and so a level may appear at most once in the make levels and at most once in the break levels.
A configuration which repeats a level within a table is rejected by [validate](Config::validate).

A flip *makes* a clause at level κ if the count of true literals in the clause moves from κ - 1 to κ, and *breaks* a clause at level κ if the count moves from κ to κ - 1.
A level κ outside of [1, *k*] is never reached by a clause of size *k*, and contributes nothing to the score of a flip on such a clause.

```rust
# use walksat_lm::config::{Config, Scoring};
let config = Config {
    scoring: Scoring::linear(&[(1, 1.0)], &[(0, 1.0)]),
    ..Config::default()
};

assert!(config.validate().is_ok());
```
*/

mod config_option;
pub use config_option::ConfigOption;

pub mod defaults;

use crate::{
    misc::log::targets::{self},
    types::err::{self},
};

/// Representation for the probability of a noise move.
pub type Noise = f64;

/// A make or break level, relative to the size of a clause when non-positive.
pub type Level = i32;

/// The weight of a make or break level.
pub type Weight = f64;

/// A table of levels paired with weights.
pub type Levels = Vec<(Level, Weight)>;

/// Methods of scoring a flip.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Scoring {
    /// The weighted sum of make and break levels.
    Linear { makes: Levels, breaks: Levels },

    /// The (negated) sum over all clauses of the squared difference between true and false literals of the clause.
    ///
    /// Intended for formulas with not-all-equal semantics, where any clause drifting toward all true or all false literals is penalised.
    Balance,
}

impl Scoring {
    /// Linear scoring with the given make and break levels.
    pub fn linear(makes: &[(Level, Weight)], breaks: &[(Level, Weight)]) -> Self {
        Scoring::Linear {
            makes: makes.to_vec(),
            breaks: breaks.to_vec(),
        }
    }

    /// The levels of the scoring method which are never reached by a clause of any of the given sizes.
    pub fn unreachable_levels(&self, sizes: &[usize]) -> Vec<Level> {
        match self {
            Self::Balance => Vec::default(),
            Self::Linear { makes, breaks } => makes
                .iter()
                .chain(breaks.iter())
                .map(|(level, _)| *level)
                .filter(|level| {
                    !sizes
                        .iter()
                        .any(|size| resolve_level(*level, *size).is_some())
                })
                .collect(),
        }
    }
}

impl Default for Scoring {
    fn default() -> Self {
        Scoring::linear(&defaults::MAKE_LEVELS, &defaults::BREAK_LEVELS)
    }
}

/// The level κ of τ for a clause of the given size, if κ is in [1, size].
pub fn resolve_level(level: Level, size: usize) -> Option<usize> {
    let kappa = match level <= 0 {
        true => size as i64 + level as i64,
        false => level as i64,
    };
    match 1 <= kappa && kappa <= size as i64 {
        true => Some(kappa as usize),
        false => None,
    }
}

/// The primary configuration structure.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Config {
    /// The probability of a noise move, when no freebie is available.
    pub noise: ConfigOption<Noise>,

    /// How to score flips.
    pub scoring: Scoring,

    /// The maximum number of steps of a search, if any.
    pub timeout: Option<usize>,

    /// The seed for the source of randomness.
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            noise: ConfigOption {
                name: "noise",
                min: 0.0,
                max: 1.0,
                value: defaults::NOISE,
            },

            scoring: Scoring::default(),

            timeout: defaults::TIMEOUT,

            seed: defaults::RNG_SEED,
        }
    }
}

impl Config {
    /// A default configuration with the given noise.
    pub fn with_noise(noise: Noise) -> Self {
        let mut config = Config::default();
        config.noise.value = noise;
        config
    }

    /// Checks the configuration may be used for a search.
    pub fn validate(&self) -> Result<(), err::ConfigError> {
        if !self.noise.within_bounds() {
            log::error!(target: targets::CONFIG, "Noise {} outside of {:?}", self.noise.value, self.noise.min_max());
            return Err(err::ConfigError::Noise(self.noise.value));
        }

        if let Scoring::Linear { makes, breaks } = &self.scoring {
            for (level, weight) in makes.iter().chain(breaks.iter()) {
                if !weight.is_finite() {
                    log::error!(target: targets::CONFIG, "Level {level} has weight {weight}");
                    return Err(err::ConfigError::Weight(*level));
                }
            }

            for table in [makes, breaks] {
                for (index, (level, _)) in table.iter().enumerate() {
                    if table[..index].iter().any(|(earlier, _)| earlier == level) {
                        log::error!(target: targets::CONFIG, "Level {level} is given more than once");
                        return Err(err::ConfigError::DuplicateLevel(*level));
                    }
                }
            }
        }

        Ok(())
    }
}
