use super::scan;

pub trait MaxStrategy {
    /// First-encountered greatest element, [`None`] for an empty slice.
    fn find<'a, T: Ord>(&self, items: &'a [T]) -> Option<&'a T>;
}

/// Running-maximum scan. O(n).
#[derive(Debug, Default, Clone, Copy)]
pub struct LinearScan;

impl MaxStrategy for LinearScan {
    fn find<'a, T: Ord>(&self, items: &'a [T]) -> Option<&'a T> {
        scan::max(items)
    }
}

/// Compares every candidate against every element and returns the first
/// candidate nothing exceeds.
///
/// O(n^2) worst and average case; O(n) when the first element is the maximum.
#[derive(Debug, Default, Clone, Copy)]
pub struct PairwiseScan;

impl MaxStrategy for PairwiseScan {
    fn find<'a, T: Ord>(&self, items: &'a [T]) -> Option<&'a T> {
        for candidate in items {
            let mut is_max = true;
            for other in items {
                if candidate < other {
                    is_max = false;
                }
            }
            if is_max {
                return Some(candidate);
            }
        }
        None
    }
}

/// [`PairwiseScan`] that drops a candidate at the first greater element.
/// Same complexity class, smaller constant.
#[derive(Debug, Default, Clone, Copy)]
pub struct PairwiseEarlyExit;

impl MaxStrategy for PairwiseEarlyExit {
    fn find<'a, T: Ord>(&self, items: &'a [T]) -> Option<&'a T> {
        items
            .iter()
            .find(|&candidate| !items.iter().any(|other| candidate < other))
    }
}
