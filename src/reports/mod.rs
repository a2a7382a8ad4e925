/*!
Reports for the context.

A [Report] is the high-level result of a search, and an [Outcome] pairs the report with the final assignment and count of steps taken.

An outcome serializes to the form:

```json
{"report":"Satisfied","result":[0,1,1],"steps":4}
```

Where `result` is the final assignment, with atom *i* valued at index *i* as either 0 or 1.
*/

use crate::context::ContextState;

/// High-level reports regarding a search.
#[derive(PartialEq, Eq, Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub enum Report {
    /// The assignment of the context satisfies the formula.
    Satisfied,

    /// The step budget of the search was exhausted before a satisfying assignment was found.
    TimedOut,

    /// No search has completed.
    Unknown,
}

impl From<&ContextState> for Report {
    fn from(value: &ContextState) -> Self {
        match value {
            ContextState::Configuration | ContextState::Solving => Self::Unknown,
            ContextState::Satisfied => Self::Satisfied,
            ContextState::TimedOut => Self::TimedOut,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfied => write!(f, "Satisfied"),
            Self::TimedOut => write!(f, "TimedOut"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// The result of a search, suitable for recording.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Outcome {
    /// How the search ended.
    pub report: Report,

    /// The final assignment of the search, as 0s and 1s.
    pub result: Vec<u8>,

    /// The count of steps taken by the search.
    pub steps: usize,
}

impl Outcome {
    /// Whether the outcome records a satisfying assignment.
    pub fn satisfied(&self) -> bool {
        self.report == Report::Satisfied
    }
}
