use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;

/// Capability bound for the caller-supplied position type.
///
/// `Hash + Eq` let positions key the model's maps and sets, `Ord` fixes
/// a deterministic order for frontier tie-breaking and neighbor
/// expansion, `Debug` feeds tracing fields. Blanket-implemented for any
/// type meeting the bounds.
pub trait Position: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> Position for T {}

/// Best known cumulative path length from the start position,
/// measured in hops (edge count), not accumulated edge weight.
/// Finite and non-negative by construction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct PathCost(f64);

impl PathCost {
    pub const ZERO: PathCost = PathCost(0.0);

    pub fn from_hops(hops: usize) -> Self {
        PathCost(hops as f64)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for PathCost {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::ops::Add for PathCost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        PathCost(self.0 + other.0)
    }
}

/// Options bounding a search
///
/// Both bounds default to `None`: the search runs until it concludes,
/// which on an infinite or lazily-generated graph with no reachable
/// goal means it runs forever. Callers searching unbounded spaces
/// should set at least one limit.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Maximum search-loop iterations before abandoning
    pub max_iterations: Option<usize>,
    /// Maximum open-set size before abandoning
    pub max_open_set: Option<usize>,
}

/// A found path and its search statistics
///
/// `path` runs from the position just after `start` to `goal`
/// inclusive; `start` itself is never included. When `start == goal`
/// the path is empty.
#[derive(Debug, Clone, Serialize)]
pub struct PathResult<P> {
    pub start: P,
    pub goal: P,
    pub path: Vec<P>,
    /// Hop count of the path (`path.len()`)
    pub path_length: usize,
    /// Number of positions expanded before the goal was reached
    pub expanded: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_cost_zero() {
        let cost = PathCost::ZERO;
        assert_eq!(cost.value(), 0.0);
        assert_eq!(PathCost::default(), cost);
    }

    #[test]
    fn test_path_cost_from_hops() {
        let cost = PathCost::from_hops(5);
        assert_eq!(cost.value(), 5.0);
    }

    #[test]
    fn test_path_cost_addition() {
        let sum = PathCost::from_hops(2) + PathCost::from_hops(3);
        assert_eq!(sum.value(), 5.0);
    }

    #[test]
    fn test_path_cost_ordering() {
        assert!(PathCost::from_hops(1) < PathCost::from_hops(2));
        assert!(PathCost::ZERO < PathCost::from_hops(1));
    }

    #[test]
    fn test_search_options_default_unbounded() {
        let opts = SearchOptions::default();
        assert!(opts.max_iterations.is_none());
        assert!(opts.max_open_set.is_none());
    }
}
