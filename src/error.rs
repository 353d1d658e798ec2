//! Error types for waypath
//!
//! A search either concludes (path found, or the frontier is exhausted
//! and no path exists) or is abandoned because a configured bound was
//! hit. The two outcomes surface as distinct variants: an abandoned
//! search must not be read as "no path exists".

use thiserror::Error;

/// Errors that can occur during a path search
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WaypathError {
    /// The open set was exhausted before the goal was reached
    #[error("no path found between start and goal")]
    PathNotFound,

    /// The open set contained a position with no recorded cost.
    /// Cannot occur while the search loop and cost relaxer uphold their
    /// invariants; surfacing it beats panicking in library code.
    #[error("open set contains a position with no recorded cost")]
    InconsistentFrontier,

    /// The search was abandoned after `max_iterations` loop iterations
    #[error("search exceeded the iteration limit of {limit}")]
    IterationLimitExceeded { limit: usize },

    /// The search was abandoned because the open set grew past `max_open_set`
    #[error("open set exceeded the size limit of {limit}")]
    OpenSetLimitExceeded { limit: usize },
}

pub type Result<T> = std::result::Result<T, WaypathError>;
