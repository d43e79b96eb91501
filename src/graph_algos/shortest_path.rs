use crate::errors::{PlannerError, Result};
use crate::geometry::Coordinate;
use super::SearchNodeMap;

/// Construct the path by walking predecessor links back from the goal
/// Returns the ordered coordinates from start to goal inclusive
/// node_map: per-search node state produced by the search loop
/// goal_index: index of the goal node in the node_map
pub(crate) fn shortest_path(node_map: &SearchNodeMap, goal_index: usize) -> Result<Vec<Coordinate>> {

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    while current_index != usize::MAX {
        if let Some((&coord, &(parent_index, _))) = node_map.get_index(current_index) {
            path.push(coord);
            current_index = parent_index;
        } else {
            return Err(PlannerError::NoPathFound);
        }
    }

    // The path is collected in reverse order, so reverse it
    path.reverse();

    if path.is_empty() {
        return Err(PlannerError::NoPathFound);
    }

    Ok(path)
}
