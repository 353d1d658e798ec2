use super::types::Position;
use std::collections::HashSet;

/// Trait for providing graph adjacency and the search metric
///
/// The search engine sees the caller's graph only through this seam: it
/// never assumes any structure on positions beyond the `Position`
/// bounds, so the space may be a materialized graph, a grid, or a
/// lazily-generated state space.
pub trait SearchSpace<P: Position> {
    /// Enumerate the positions reachable in one move from `from`
    fn moves(&self, from: &P) -> HashSet<P>;

    /// Estimated cost between two positions.
    /// Called as `cost(goal, candidate)` when scoring the frontier.
    fn cost(&self, goal: &P, candidate: &P) -> f64;
}

/// Adapter implementing `SearchSpace` from a pair of closures, for
/// callers without a natural graph type.
pub struct FnSpace<C, M> {
    cost_fn: C,
    move_fn: M,
}

impl<C, M> FnSpace<C, M> {
    pub fn new(cost_fn: C, move_fn: M) -> Self {
        FnSpace { cost_fn, move_fn }
    }
}

impl<P, C, M> SearchSpace<P> for FnSpace<C, M>
where
    P: Position,
    C: Fn(&P, &P) -> f64,
    M: Fn(&P) -> HashSet<P>,
{
    fn moves(&self, from: &P) -> HashSet<P> {
        (self.move_fn)(from)
    }

    fn cost(&self, goal: &P, candidate: &P) -> f64 {
        (self.cost_fn)(goal, candidate)
    }
}
