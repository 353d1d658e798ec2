use super::model::Model;
use super::types::Position;
use crate::error::{Result, WaypathError};

/// Select the open position with the lowest estimated total cost
///
/// Scans the whole open set and totals each member's recorded cost with
/// `score` (cost-so-far plus estimate to goal). Exact ties go to the
/// `Ord`-smaller position so repeated searches pick the same frontier.
///
/// Returns `PathNotFound` when the open set is empty, and
/// `InconsistentFrontier` when a member has no recorded cost — a logic
/// fault upstream, not a normal runtime condition.
pub fn cheapest_open<P, F>(score: F, model: &Model<P>) -> Result<P>
where
    P: Position,
    F: Fn(&P) -> f64,
{
    let mut best: Option<(&P, f64)> = None;

    for position in &model.open_set {
        let recorded = model
            .costs
            .get(position)
            .ok_or(WaypathError::InconsistentFrontier)?;
        let total = recorded.value() + score(position);

        best = match best {
            None => Some((position, total)),
            Some((best_pos, best_total)) => {
                if total < best_total || (total == best_total && position < best_pos) {
                    Some((position, total))
                } else {
                    Some((best_pos, best_total))
                }
            }
        };
    }

    best.map(|(position, _)| position.clone())
        .ok_or(WaypathError::PathNotFound)
}
