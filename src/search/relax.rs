use super::model::Model;
use super::path::reconstruct_path;
use super::types::{PathCost, Position};

/// Conditionally relax a neighbor's recorded cost and predecessor
///
/// Tentatively routes `neighbour` through `current`, measures the
/// resulting path length in hops via reconstruction, and commits only
/// when `neighbour` had no recorded cost or the hop count strictly
/// improves on it; otherwise the tentative predecessor is rolled back.
///
/// The relaxation metric is deliberately hop count, not accumulated
/// edge weight: the search optimizes fewest hops, and the caller's cost
/// function only steers exploration order.
pub fn update_cost<P: Position>(current: &P, neighbour: &P, model: &mut Model<P>) {
    let previous = model
        .came_from
        .insert(neighbour.clone(), current.clone());

    let distance_to = PathCost::from_hops(reconstruct_path(&model.came_from, neighbour).len());

    let improves = match model.costs.get(neighbour) {
        Some(recorded) => distance_to < *recorded,
        None => true,
    };

    if improves {
        model.costs.insert(neighbour.clone(), distance_to);
    } else {
        // keep the old path
        match previous {
            Some(predecessor) => model.came_from.insert(neighbour.clone(), predecessor),
            None => model.came_from.remove(neighbour),
        };
    }
}
