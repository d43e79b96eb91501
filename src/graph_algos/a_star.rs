use crate::errors::{PlannerError, Result};
use crate::geometry::Coordinate;
use crate::grid::Grid;
use super::{SearchNodeMap, shortest_path};

use std::{
    collections::BinaryHeap,
    cmp::Ordering,
};
use indexmap::map::Entry::{Occupied, Vacant};
use log::debug;



/// Frontier entry on the A* search
#[derive(Debug)]
struct Node {
    index: usize, // index in the node map - identifies the coordinate
    g: f64,       // cost to reach this node from the start
    f: f64,       // total estimate = g + heuristic
}

// BinaryHeap is a max-heap, so order entries by descending f to pop the
// cheapest first. total_cmp gives floats a total order.
impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f.total_cmp(&self.f)
    }
}
impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.f.total_cmp(&other.f) == Ordering::Equal
    }
}
impl Eq for Node {}


/// A* shortest path between two cells of an occupancy grid
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// Straight steps cost 1, diagonal steps cost sqrt(2). The Chebyshev
/// heuristic never overestimates the remaining cost, so the returned
/// path is cost-optimal.
///
/// Both endpoints must be in-bounds and free, otherwise the search is
/// rejected with `InvalidEndpoint` before any expansion happens.
/// A disconnected pair yields `NoPathFound`.
pub fn find_path(grid: &Grid, start: Coordinate, end: Coordinate) -> Result<Vec<Coordinate>> {

    if !grid.is_free(start) {
        return Err(PlannerError::InvalidEndpoint(start));
    }
    if !grid.is_free(end) {
        return Err(PlannerError::InvalidEndpoint(end));
    }
    if start == end {
        return Ok(vec![start]);
    }

    let heuristic = |c: &Coordinate| c.chebyshev(&end) as f64;

    // Frontier of discovered-but-not-finalized nodes, cheapest f first.
    // Superseded entries stay queued and are discarded lazily when popped.
    let mut open_list: BinaryHeap<Node> = BinaryHeap::new();

    // Per-coordinate best cost and predecessor, see SearchNodeMap
    let mut node_map = SearchNodeMap::default();

    let start_index = node_map.insert_full(start, (usize::MAX, 0.0)).0;
    open_list.push(Node {
        index: start_index,
        g: 0.0,
        f: heuristic(&start),
    });

    let mut expanded = 0usize;

    while let Some(Node { index, g, .. }) = open_list.pop() {

        // fetch current best cost for the node
        let (coord, &(_, best_g)) = node_map.get_index(index).unwrap();
        let coord = *coord;

        // A cheaper route to this coordinate was recorded after this entry
        // was queued - the entry is stale, skip it
        if g > best_g {
            continue;
        }

        if coord == end {
            debug!("path found after {expanded} expansions, cost {best_g:.3}");
            return shortest_path(&node_map, index);
        }

        expanded += 1;

        for (neighbor, step_cost) in grid.neighbors(coord) {

            let tentative_g = best_g + step_cost;
            let f = tentative_g + heuristic(&neighbor);

            let neighbor_index = match node_map.entry(neighbor) {
                Vacant(e) => {
                    // first time this coordinate is discovered
                    let i = e.index();
                    e.insert((index, tentative_g));
                    i
                }
                Occupied(mut e) => {
                    if e.get().1 > tentative_g {
                        // found a cheaper route to this coordinate
                        let i = e.index();
                        e.insert((index, tentative_g));
                        i
                    } else {
                        // the recorded route is at least as good, do nothing
                        continue;
                    }
                }
            };

            // Queue the improved entry; any older entry for the same
            // coordinate is now stale and will be skipped at pop time
            open_list.push(Node {
                index: neighbor_index,
                g: tentative_g,
                f,
            });
        }
    }

    debug!("frontier exhausted after {expanded} expansions, no path");
    Err(PlannerError::NoPathFound)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{DIAGONAL_COST, STRAIGHT_COST};
    use rand::prelude::*;
    use rand::rngs::StdRng;

    const EPS: f64 = 1e-9;

    /// Total cost of a path under the straight/diagonal cost model
    fn path_cost(path: &[Coordinate]) -> f64 {
        path.windows(2)
            .map(|w| {
                let dr = w[0].row.abs_diff(w[1].row);
                let dc = w[0].col.abs_diff(w[1].col);
                if dr == 1 && dc == 1 {
                    DIAGONAL_COST
                } else {
                    STRAIGHT_COST
                }
            })
            .sum()
    }

    /// Every consecutive pair must be a valid single-step move onto a free cell
    fn assert_valid(grid: &Grid, path: &[Coordinate]) {
        for coord in path {
            assert!(grid.is_free(*coord), "path crosses blocked cell {coord}");
        }
        for w in path.windows(2) {
            let dr = w[0].row.abs_diff(w[1].row);
            let dc = w[0].col.abs_diff(w[1].col);
            assert!(dr <= 1 && dc <= 1 && dr + dc > 0, "invalid step {} -> {}", w[0], w[1]);
        }
    }

    /// Reference shortest distance by exhaustive relaxation, for cross-checks
    fn reference_distance(grid: &Grid, start: Coordinate, end: Coordinate) -> Option<f64> {
        let mut dist = vec![f64::INFINITY; grid.rows() * grid.cols()];
        let idx = |c: Coordinate| c.row * grid.cols() + c.col;
        dist[idx(start)] = 0.0;
        loop {
            let mut changed = false;
            for row in 0..grid.rows() {
                for col in 0..grid.cols() {
                    let coord = Coordinate::new(row, col);
                    let d = dist[idx(coord)];
                    if !grid.is_free(coord) || !d.is_finite() {
                        continue;
                    }
                    for (n, cost) in grid.neighbors(coord) {
                        if d + cost < dist[idx(n)] - EPS {
                            dist[idx(n)] = d + cost;
                            changed = true;
                        }
                    }
                }
            }
            if !changed {
                break;
            }
        }
        dist[idx(end)].is_finite().then(|| dist[idx(end)])
    }

    #[test]
    fn test_straight_diagonal_run() {
        // fully open 3x3, the diagonal is the cheapest route
        let grid = Grid::from_ascii("000\n000\n000").unwrap();
        let path = find_path(&grid, Coordinate::new(0, 0), Coordinate::new(2, 2)).unwrap();
        assert_eq!(
            path,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(1, 1),
                Coordinate::new(2, 2),
            ]
        );
        assert!((path_cost(&path) - 2.0 * DIAGONAL_COST).abs() < EPS);
    }

    #[test]
    fn test_detour_around_blocked_center() {
        let grid = Grid::from_ascii("000\n010\n000").unwrap();
        let start = Coordinate::new(0, 0);
        let end = Coordinate::new(2, 2);
        let path = find_path(&grid, start, end).unwrap();

        assert_valid(&grid, &path);
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&end));
        assert!(!path.contains(&Coordinate::new(1, 1)));
        // three moves: the detour costs one diagonal plus two straight steps
        assert_eq!(path.len(), 4);
        assert!((path_cost(&path) - (2.0 * STRAIGHT_COST + DIAGONAL_COST)).abs() < EPS);
    }

    #[test]
    fn test_no_path_across_full_wall() {
        // a full-width blocked row leaves no diagonal gap
        let grid = Grid::from_ascii(
            "00000\n\
             00000\n\
             11111\n\
             00000\n\
             00000",
        )
        .unwrap();
        let result = find_path(&grid, Coordinate::new(0, 0), Coordinate::new(4, 4));
        assert!(matches!(result, Err(PlannerError::NoPathFound)));
    }

    #[test]
    fn test_start_equals_end() {
        let grid = Grid::from_ascii("00\n00").unwrap();
        let p = Coordinate::new(1, 0);
        assert_eq!(find_path(&grid, p, p).unwrap(), vec![p]);
    }

    #[test]
    fn test_rejects_blocked_endpoint() {
        let grid = Grid::from_ascii("01\n00").unwrap();
        let blocked = Coordinate::new(0, 1);
        let free = Coordinate::new(0, 0);
        assert!(matches!(
            find_path(&grid, blocked, free),
            Err(PlannerError::InvalidEndpoint(c)) if c == blocked
        ));
        assert!(matches!(
            find_path(&grid, free, blocked),
            Err(PlannerError::InvalidEndpoint(c)) if c == blocked
        ));
    }

    #[test]
    fn test_rejects_out_of_bounds_endpoint() {
        let grid = Grid::from_ascii("00\n00").unwrap();
        let outside = Coordinate::new(5, 0);
        assert!(matches!(
            find_path(&grid, Coordinate::new(0, 0), outside),
            Err(PlannerError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_repeated_queries_are_deterministic() {
        let grid = Grid::from_ascii(
            "0000000\n\
             0110110\n\
             0010010\n\
             0000000\n\
             0101110\n\
             0100000\n\
             0001000",
        )
        .unwrap();
        let start = Coordinate::new(0, 0);
        let end = Coordinate::new(6, 6);
        let first = find_path(&grid, start, end).unwrap();
        for _ in 0..5 {
            assert_eq!(find_path(&grid, start, end).unwrap(), first);
        }
    }

    #[test]
    fn test_optimal_on_random_grids() {
        // Cross-check A* cost against exhaustive relaxation on small
        // random grids, including disconnected start/end pairs
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..25 {
            let rows = rng.random_range(4..12);
            let cols = rng.random_range(4..12);
            let cells: Vec<bool> = (0..rows * cols).map(|_| rng.random_bool(0.35)).collect();
            let grid = Grid::from_cells(rows, cols, cells).unwrap();

            let free: Vec<Coordinate> = (0..rows)
                .flat_map(|r| (0..cols).map(move |c| Coordinate::new(r, c)))
                .filter(|&c| grid.is_free(c))
                .collect();
            if free.len() < 2 {
                continue;
            }
            let start = free[rng.random_range(0..free.len())];
            let end = free[rng.random_range(0..free.len())];

            match reference_distance(&grid, start, end) {
                Some(best) => {
                    let path = find_path(&grid, start, end).unwrap();
                    assert_valid(&grid, &path);
                    assert_eq!(path.first(), Some(&start));
                    assert_eq!(path.last(), Some(&end));
                    assert!(
                        (path_cost(&path) - best).abs() < 1e-6,
                        "suboptimal path on\n{grid}start {start} end {end}: {} vs {}",
                        path_cost(&path),
                        best
                    );
                }
                None => {
                    assert!(matches!(
                        find_path(&grid, start, end),
                        Err(PlannerError::NoPathFound)
                    ));
                }
            }
        }
    }
}
