//! A* path search over caller-supplied search spaces
//!
//! Provides the pieces of a generalized A* search:
//! - `Model`: the per-search state (evaluated set, open set, cost map,
//!   predecessor map)
//! - `cheapest_open`: frontier selection by cost-so-far plus estimate
//! - `reconstruct_path`: predecessor walk into a forward path
//! - `update_cost`: conditional relaxation of a neighbor's cost
//! - `find_path`: the public entry point tying them together

pub mod astar;
pub mod frontier;
pub mod model;
pub mod path;
pub mod relax;
pub mod space;
pub mod types;

pub use astar::find_path;
pub use frontier::cheapest_open;
pub use model::Model;
pub use path::reconstruct_path;
pub use relax::update_cost;
pub use space::{FnSpace, SearchSpace};
pub use types::{PathCost, PathResult, Position, SearchOptions};
