use crate::{
    config::Config,
    reports::{Outcome, Report},
    structures::assignment::CAssignment,
};

use super::{ContextState, Counters};

/// A generic context, parameratised to a source of randomness.
///
/// Requires a source of [rng](rand::Rng) which (also) implements [Default].
///
/// # Example
///
/// ```rust
/// # use walksat_lm::context::GenericContext;
/// # use walksat_lm::generic::random::MinimalPCG32;
/// # use walksat_lm::config::Config;
/// let context = GenericContext::<MinimalPCG32>::with_rng(Config::default(), MinimalPCG32::default());
/// ```
pub struct GenericContext<R: rand::Rng + std::default::Default> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to the most recent search.
    pub counters: Counters,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,

    /// The assignment revised by a search.
    pub(crate) assignment: CAssignment,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// A context from some given configuration and source of rng.
    pub fn with_rng(config: Config, rng: R) -> Self {
        Self {
            config,
            counters: Counters::default(),
            state: ContextState::Configuration,
            rng,
            assignment: CAssignment::default(),
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// The current assignment of the context.
    ///
    /// After a search this is the final assignment of the search, whether or not the assignment is satisfying.
    pub fn assignment(&self) -> &[bool] {
        &self.assignment
    }

    /// The report, final assignment, and count of steps of the most recent search.
    pub fn outcome(&self) -> Outcome {
        Outcome {
            report: self.report(),
            result: self.assignment.iter().map(|value| *value as u8).collect(),
            steps: self.counters.steps,
        }
    }
}
