/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when tuning a configuration, extending the library, and/or fixing issues.

Note, no log implementation is provided.
For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
- Each step of a search can be followed with `RUST_LOG=search=trace …` or,
- The scores considered before each flip can be found with `RUST_LOG=score=trace …`

For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [search loop](crate::procedures::solve) and [steps](crate::procedures::step)
    pub const SEARCH: &str = "search";

    /// Logs related to [scoring](crate::procedures::score)
    pub const SCORE: &str = "score";

    /// Logs related to [formulas](crate::structures::formula)
    pub const FORMULA: &str = "formula";

    /// Logs related to the [configuration](crate::config)
    pub const CONFIG: &str = "config";
}
