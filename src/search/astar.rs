use super::frontier::cheapest_open;
use super::model::Model;
use super::path::reconstruct_path;
use super::relax::update_cost;
use super::space::SearchSpace;
use super::types::{PathResult, Position, SearchOptions};
use crate::error::{Result, WaypathError};

/// Run the search loop until a terminal state
///
/// Each iteration selects the cheapest open position, finishes if it is
/// the goal, and otherwise expands it: the position moves to the
/// evaluated set, its not-yet-evaluated neighbors join the open set and
/// are relaxed in sorted order so equal-hop ties resolve the same way
/// on every run. Returns the reconstructed path and the final model.
fn astar<P, S>(space: &S, opts: &SearchOptions, start: &P, goal: &P) -> Result<(Vec<P>, Model<P>)>
where
    P: Position,
    S: SearchSpace<P>,
{
    let mut model = Model::new(start.clone());
    let mut iterations = 0usize;

    loop {
        if let Some(limit) = opts.max_iterations {
            if iterations >= limit {
                return Err(WaypathError::IterationLimitExceeded { limit });
            }
        }
        if let Some(limit) = opts.max_open_set {
            if model.open_set.len() > limit {
                return Err(WaypathError::OpenSetLimitExceeded { limit });
            }
        }

        let current = cheapest_open(|p| space.cost(goal, p), &model)?;
        if current == *goal {
            let path = reconstruct_path(&model.came_from, goal);
            return Ok((path, model));
        }

        model.open_set.remove(&current);
        model.evaluated.insert(current.clone());

        let mut new_neighbours: Vec<P> = space
            .moves(&current)
            .into_iter()
            .filter(|n| !model.evaluated.contains(n))
            .collect();
        // Sort for determinism
        new_neighbours.sort();

        for neighbour in &new_neighbours {
            model.open_set.insert(neighbour.clone());
        }
        for neighbour in &new_neighbours {
            update_cost(&current, neighbour, &mut model);
        }

        tracing::trace!(
            open = model.open_set.len(),
            evaluated = model.evaluated.len(),
            "expanded position"
        );
        iterations += 1;
    }
}

/// Find the lowest-hop-count path from `start` to `goal`
///
/// The returned path runs from the position just after `start` to
/// `goal` inclusive; when `start == goal` it is empty. Fails with
/// `PathNotFound` once the open set is exhausted. On an infinite or
/// lazily-generated space with no reachable goal the search does not
/// terminate unless a bound is set in `opts`.
#[tracing::instrument(skip(space, opts), fields(start = ?start, goal = ?goal))]
pub fn find_path<P, S>(
    space: &S,
    opts: &SearchOptions,
    start: &P,
    goal: &P,
) -> Result<PathResult<P>>
where
    P: Position,
    S: SearchSpace<P>,
{
    let (path, model) = match astar(space, opts, start, goal) {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::debug!(%err, "search terminated without a path");
            return Err(err);
        }
    };

    tracing::debug!(
        path_length = path.len(),
        expanded = model.evaluated.len(),
        "path found"
    );

    let path_length = path.len();
    Ok(PathResult {
        start: start.clone(),
        goal: goal.clone(),
        path,
        path_length,
        expanded: model.evaluated.len(),
    })
}
