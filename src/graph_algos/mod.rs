
pub mod a_star;
mod shortest_path;

use shortest_path::shortest_path;

use crate::collections::FxIndexMap;
use crate::geometry::Coordinate;

pub use a_star::find_path;

/// Per-search node state, owned by one search call and dropped when it returns
/// The tuple contains (parent_index, g) where:
/// - parent_index is the index of the predecessor in the map
///   (usize::MAX for the start node, which has no predecessor)
/// - g is the best known cost to reach the coordinate from the start
pub type SearchNodeMap = FxIndexMap<Coordinate, (usize, f64)>;
