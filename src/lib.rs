//! Waypath
//!
//! Generalized A* path search: callers supply the graph (a move function
//! enumerating neighbors) and the metric (a cost function between
//! positions); `find_path` returns the lowest-hop-count path between two
//! positions, or reports that no path exists.

pub mod error;
pub mod logging;
pub mod search;
