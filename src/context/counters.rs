/// Counts for various things which count, roughly.
///
/// Counters are reset at the start of each search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Counters {
    /// The total number of iterations through a search, including the final check of the assignment.
    pub steps: usize,

    /// A count of every flip made.
    pub flips: usize,

    /// A count of flips which broke no clause.
    pub freebies: usize,

    /// A count of flips made at random.
    pub noise_moves: usize,

    /// A count of flips made by score.
    pub greedy_moves: usize,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            steps: 0,
            flips: 0,

            freebies: 0,
            noise_moves: 0,
            greedy_moves: 0,
        }
    }
}
