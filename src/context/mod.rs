/*!
The context --- within which searches take place.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over the source of randomness, and a context fixes the source of randomness to [MinimalPCG32](crate::generic::random::MinimalPCG32).

A context owns an assignment and a source of randomness, and borrows a [formula](crate::structures::formula::Formula) for the duration of a search.
As a context never mutates the formula, any number of contexts may search on the same formula at once.

# Example
```rust
# use walksat_lm::config::Config;
# use walksat_lm::context::Context;
# use walksat_lm::reports::Report;
# use walksat_lm::structures::clause::Clause;
# use walksat_lm::structures::formula::{Formula, Semantics};
# use walksat_lm::structures::literal::{CLiteral, Literal};
let p = CLiteral::new(0, true);
let q = CLiteral::new(1, true);

let mut formula = Formula::new(Semantics::Standard);
formula.append(Clause::new(vec![p, q]));
formula.append(Clause::new(vec![p.negate()]));

let mut the_context = Context::from_config(Config::default());

assert_eq!(the_context.solve(&formula), Ok(Report::Satisfied));
assert_eq!(the_context.assignment(), &[false, true]);
```
*/

mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// No search has been made.
    Configuration,

    /// A search is in progress.
    Solving,

    /// The assignment of the context satisfies the most recently searched formula.
    Satisfied,

    /// The most recent search exhausted its step budget.
    TimedOut,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfied => write!(f, "Satisfied"),
            Self::TimedOut => write!(f, "TimedOut"),
        }
    }
}
