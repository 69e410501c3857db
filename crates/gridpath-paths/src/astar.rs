use gridpath_core::{Cell, Dims};

use crate::distance::Manhattan;
use crate::error::{Endpoint, PathError, validate};
use crate::frontier::Frontier;
use crate::path::Path;
use crate::traits::{Heuristic, Walkable};

const UNREACHED: u32 = u32::MAX;
const NO_PARENT: usize = usize::MAX;

/// Per-cell search record.
#[derive(Clone, Copy)]
struct Node {
    g: u32,
    parent: usize,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHED,
            parent: NO_PARENT,
        }
    }
}

/// Frontier payload: the cell and the g-score it was queued with.
#[derive(Clone, Copy)]
struct Visit {
    cell: Cell,
    g: u32,
}

/// A* shortest-path search over a [`Walkable`] grid.
///
/// Movement is 4-connected with unit cost. Neighbours are generated in the
/// order up, down, left, right and frontier ties are broken by insertion
/// order, which fixes which of several optimal paths is returned.
///
/// The finder holds configuration only; each call builds its own frontier
/// and cost table.
#[derive(Debug, Clone, Default)]
pub struct PathFinder<H = Manhattan> {
    heuristic: H,
    expansion_limit: Option<usize>,
}

impl PathFinder<Manhattan> {
    /// A finder using the Manhattan heuristic and no expansion limit.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: Heuristic> PathFinder<H> {
    /// A finder using a custom heuristic.
    ///
    /// The heuristic must be admissible for the result to be optimal.
    pub fn with_heuristic(heuristic: H) -> Self {
        Self {
            heuristic,
            expansion_limit: None,
        }
    }

    /// Abort with [`PathError::BudgetExhausted`] once `limit` cells have been
    /// expanded without reaching the goal.
    pub fn with_expansion_limit(mut self, limit: usize) -> Self {
        self.expansion_limit = Some(limit);
        self
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    pub fn expansion_limit(&self) -> Option<usize> {
        self.expansion_limit
    }

    /// Compute a minimum-step path from `start` to `goal`.
    ///
    /// Returns `Ok(None)` when the goal cannot be reached. When
    /// `start == goal` the result is `[start]` whatever that cell's state;
    /// otherwise the start is entered into the search without a passability
    /// check and every other cell on the path is passable.
    pub fn find_path<W: Walkable + ?Sized>(
        &self,
        grid: &W,
        start: Cell,
        goal: Cell,
    ) -> Result<Option<Path>, PathError> {
        let dims = validate(grid, &[(Endpoint::Start, start), (Endpoint::Goal, goal)])?;

        if start == goal {
            return Ok(Some(Path::single(start)));
        }

        let mut nodes = vec![Node::default(); dims.len()];
        let mut frontier = Frontier::new();
        let mut expanded = 0usize;
        let mut stale = 0usize;

        let start_idx = flat(dims, start);
        let goal_idx = flat(dims, goal);
        nodes[start_idx].g = 0;
        frontier.push(
            self.heuristic.estimate(start, goal),
            Visit { cell: start, g: 0 },
        );

        while let Some((_, current)) = frontier.pop() {
            let ci = flat(dims, current.cell);

            // A cheaper route to this cell was queued after this entry.
            if current.g > nodes[ci].g {
                stale += 1;
                continue;
            }

            if ci == goal_idx {
                log::debug!(
                    "astar {start} -> {goal}: {} steps, {expanded} expanded, {stale} stale",
                    current.g
                );
                return Ok(Some(reconstruct(dims, &nodes, goal_idx)));
            }

            if self.expansion_limit.is_some_and(|limit| expanded >= limit) {
                log::debug!("astar {start} -> {goal}: budget of {expanded} expansions spent");
                return Err(PathError::BudgetExhausted { expanded });
            }
            expanded += 1;
            log::trace!("expand {} g={}", current.cell, current.g);

            let tentative = current.g + 1;
            for n in current.cell.neighbors_4() {
                let Some(ni) = dims.index(n) else {
                    continue;
                };
                if !grid.is_passable(n) || tentative >= nodes[ni].g {
                    continue;
                }
                nodes[ni] = Node {
                    g: tentative,
                    parent: ci,
                };
                let f = tentative.saturating_add(self.heuristic.estimate(n, goal));
                frontier.push(f, Visit { cell: n, g: tentative });
            }
        }

        log::debug!("astar {start} -> {goal}: unreachable after {expanded} expansions");
        Ok(None)
    }
}

/// Flat index of a cell already known to be in bounds.
#[inline]
fn flat(dims: Dims, c: Cell) -> usize {
    c.row as usize * dims.cols as usize + c.col as usize
}

fn reconstruct(dims: Dims, nodes: &[Node], goal_idx: usize) -> Path {
    let mut cells = Vec::new();
    let mut ci = goal_idx;
    while ci != NO_PARENT {
        cells.push(dims.cell(ci));
        ci = nodes[ci].parent;
    }
    cells.reverse();
    Path::from_cells(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::shortest_steps;
    use gridpath_core::{CellState, Grid};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn c(row: i32, col: i32) -> Cell {
        Cell::new(row, col)
    }

    fn find(grid: &Grid, start: Cell, goal: Cell) -> Option<Path> {
        PathFinder::new().find_path(grid, start, goal).unwrap()
    }

    fn random_grid(rng: &mut StdRng, rows: i32, cols: i32, density: f64) -> Grid {
        let values: Vec<i32> = (0..rows * cols)
            .map(|_| i32::from(rng.random_bool(density)))
            .collect();
        Grid::from_values(rows, cols, &values).unwrap()
    }

    #[test]
    fn open_grid_returns_pinned_staircase() {
        let grid = Grid::new(5, 5).unwrap();
        let path = find(&grid, c(0, 0), c(4, 4)).unwrap();
        assert_eq!(path.len(), 9);
        assert_eq!(path.steps(), 8);
        let expected = [
            c(0, 0),
            c(1, 0),
            c(2, 0),
            c(3, 0),
            c(4, 0),
            c(4, 1),
            c(4, 2),
            c(4, 3),
            c(4, 4),
        ];
        assert_eq!(path.cells(), expected);
    }

    #[test]
    fn forced_detour_through_bottom_row() {
        let grid = Grid::parse(
            "
            .#.
            .#.
            ...",
        )
        .unwrap();
        let path = find(&grid, c(0, 0), c(0, 2)).unwrap();
        assert_eq!(path.len(), 7);
        assert!(path.is_valid_on(&grid));
        assert_eq!(
            path.cells(),
            [c(0, 0), c(1, 0), c(2, 0), c(2, 1), c(2, 2), c(1, 2), c(0, 2)]
        );
    }

    #[test]
    fn isolated_goal_is_not_found() {
        let grid = Grid::parse(
            "
            .#.
            ###
            .#.",
        )
        .unwrap();
        assert_eq!(find(&grid, c(0, 0), c(2, 2)), None);
    }

    #[test]
    fn enclosed_goal_in_open_field_is_not_found() {
        let grid = Grid::parse(
            "
            .......
            ..###..
            ..#.#..
            ..###..
            .......",
        )
        .unwrap();
        assert_eq!(find(&grid, c(0, 0), c(2, 3)), None);
        assert_eq!(find(&grid, c(2, 3), c(0, 0)), None);
    }

    #[test]
    fn start_equals_goal_ignores_cell_state() {
        let grid = Grid::parse("#.").unwrap();
        let path = find(&grid, c(0, 0), c(0, 0)).unwrap();
        assert_eq!(path.cells(), [c(0, 0)]);
    }

    #[test]
    fn blocked_start_is_trusted() {
        let grid = Grid::parse("#..").unwrap();
        let path = find(&grid, c(0, 0), c(0, 2)).unwrap();
        assert_eq!(path.cells(), [c(0, 0), c(0, 1), c(0, 2)]);
    }

    #[test]
    fn blocked_goal_is_not_found() {
        let grid = Grid::parse("..#").unwrap();
        assert_eq!(find(&grid, c(0, 0), c(0, 2)), None);
    }

    #[test]
    fn single_cell_grid() {
        let grid = Grid::new(1, 1).unwrap();
        assert_eq!(find(&grid, c(0, 0), c(0, 0)).unwrap().len(), 1);
    }

    #[test]
    fn out_of_bounds_endpoints_rejected() {
        let grid = Grid::new(3, 4).unwrap();
        let pf = PathFinder::new();
        assert_eq!(
            pf.find_path(&grid, c(-1, 0), c(0, 0)),
            Err(PathError::OutOfBounds {
                endpoint: Endpoint::Start,
                cell: c(-1, 0),
                dims: Dims::new(3, 4),
            })
        );
        assert_eq!(
            pf.find_path(&grid, c(0, 0), c(0, 4)),
            Err(PathError::OutOfBounds {
                endpoint: Endpoint::Goal,
                cell: c(0, 4),
                dims: Dims::new(3, 4),
            })
        );
        // Checked even when start == goal.
        assert!(pf.find_path(&grid, c(3, 0), c(3, 0)).is_err());
    }

    #[test]
    fn zero_sized_walkable_rejected() {
        struct Nothing;
        impl Walkable for Nothing {
            fn dims(&self) -> Dims {
                Dims::new(0, 5)
            }
            fn is_passable(&self, _: Cell) -> bool {
                true
            }
        }
        assert_eq!(
            PathFinder::new().find_path(&Nothing, c(0, 0), c(0, 1)),
            Err(PathError::InvalidGrid(Dims::new(0, 5)))
        );
    }

    #[test]
    fn grid_is_unchanged() {
        let mut rng = StdRng::seed_from_u64(11);
        let grid = random_grid(&mut rng, 12, 12, 0.3);
        let before = grid.clone();
        let _ = find(&grid, c(0, 0), c(11, 11));
        assert_eq!(grid, before);
    }

    #[test]
    fn matches_bfs_on_random_grids() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let rows = rng.random_range(1..10);
            let cols = rng.random_range(1..10);
            let grid = random_grid(&mut rng, rows, cols, 0.3);
            let start = c(rng.random_range(0..rows), rng.random_range(0..cols));
            let goal = c(rng.random_range(0..rows), rng.random_range(0..cols));

            let expected = shortest_steps(&grid, start, goal).unwrap();
            let found = find(&grid, start, goal);
            assert_eq!(found.as_ref().map(Path::steps), expected, "{grid}\n{start} -> {goal}");
            if let Some(path) = found {
                assert_eq!(path.start(), start);
                assert_eq!(path.goal(), goal);
                assert!(path.is_valid_on(&grid));
            }
        }
    }

    #[test]
    fn inconsistent_heuristic_stays_optimal() {
        // Admissible but not consistent: drops to zero on odd cells.
        let h = |a: Cell, b: Cell| {
            if (a.row + a.col) % 2 == 0 {
                a.manhattan(b)
            } else {
                0
            }
        };
        let pf = PathFinder::with_heuristic(h);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let grid = random_grid(&mut rng, 8, 8, 0.25);
            let start = c(rng.random_range(0..8), rng.random_range(0..8));
            let goal = c(rng.random_range(0..8), rng.random_range(0..8));
            let expected = shortest_steps(&grid, start, goal).unwrap();
            let found = pf.find_path(&grid, start, goal).unwrap();
            assert_eq!(found.map(|p| p.steps()), expected);
        }
    }

    #[test]
    fn expansion_limit_aborts_search() {
        let grid = Grid::new(20, 20).unwrap();
        let pf = PathFinder::new().with_expansion_limit(5);
        assert_eq!(pf.expansion_limit(), Some(5));
        assert_eq!(
            pf.find_path(&grid, c(0, 0), c(19, 19)),
            Err(PathError::BudgetExhausted { expanded: 5 })
        );
        // A generous budget behaves like no budget.
        let pf = PathFinder::new().with_expansion_limit(10_000);
        let path = pf.find_path(&grid, c(0, 0), c(19, 19)).unwrap().unwrap();
        assert_eq!(path.steps(), 38);
    }

    #[test]
    fn unreachable_within_budget_is_not_found() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(c(0, 1), CellState::Blocked);
        grid.set(c(1, 0), CellState::Blocked);
        let pf = PathFinder::new().with_expansion_limit(1);
        assert_eq!(pf.find_path(&grid, c(0, 0), c(2, 2)), Ok(None));
    }

    #[test]
    fn concurrent_searches_share_grid() {
        let grid = Grid::new(30, 30).unwrap();
        let pf = PathFinder::new();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|i| {
                    let (grid, pf) = (&grid, &pf);
                    s.spawn(move || pf.find_path(grid, c(0, i), c(29, 29)))
                })
                .collect();
            for (i, h) in handles.into_iter().enumerate() {
                let path = h.join().unwrap().unwrap().unwrap();
                assert_eq!(path.steps(), 29 + 29 - i as u32);
            }
        });
    }
}
