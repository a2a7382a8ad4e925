use crate::config::{Level, Noise, Weight};

pub const NOISE: Noise = 0.15;

pub const MAKE_LEVELS: [(Level, Weight); 2] = [(1, 5.0), (2, 6.0)];
pub const BREAK_LEVELS: [(Level, Weight); 0] = [];

pub const TIMEOUT: Option<usize> = None;

pub const RNG_SEED: u64 = 0;
