//! Procedures of a search.
//!
//! For the most part these are methods accessed via a context, and primarily placed here for documentation.

pub mod score;
pub mod solve;
pub mod step;
