pub mod scan;
pub mod strategy;

pub use scan::{max, max_by, max_index};
pub use strategy::{LinearScan, MaxStrategy, PairwiseEarlyExit, PairwiseScan};
