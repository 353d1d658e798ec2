use super::types::{PathCost, Position};
use std::collections::{HashMap, HashSet};

/// Per-search state threaded through the search loop
///
/// Created once per search, owned and mutated by the loop, discarded at
/// termination. Invariants upheld by the loop and the cost relaxer:
/// every member of `open_set` has an entry in `costs`, an evaluated
/// position is never reinserted into `open_set`, and `came_from` forms
/// a forest rooted at positions with no entry (principally the start).
#[derive(Debug, Clone)]
pub struct Model<P: Position> {
    /// Positions already expanded; excluded from re-expansion
    pub evaluated: HashSet<P>,
    /// Positions discovered but not yet expanded
    pub open_set: HashSet<P>,
    /// Best known hop count from the start per discovered position
    pub costs: HashMap<P, PathCost>,
    /// Predecessor on the best known path per discovered position
    pub came_from: HashMap<P, P>,
}

impl<P: Position> Model<P> {
    /// Seed a fresh model: only `start` is open, at cost zero
    pub fn new(start: P) -> Self {
        Model {
            evaluated: HashSet::new(),
            open_set: HashSet::from([start.clone()]),
            costs: HashMap::from([(start, PathCost::ZERO)]),
            came_from: HashMap::new(),
        }
    }
}
