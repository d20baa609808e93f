//! Maze generation with randomized depth-first search

use anyhow::bail;
use log::debug;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::{Cell, Point, START_CELL};

/// Backpointers from each visited room to the room it was first
/// discovered from; `None` for the start cell and unvisited cells.
pub type BackPointers = Vec<Vec<Option<Point>>>;

/// Carves perfect mazes onto a grid of wall cells.
pub struct MazeGenerator {
    random: StdRng,
}

impl MazeGenerator {
    /// Offsets from a room to its up-to-4 neighbor rooms. The cell in
    /// between is the wall slot carving opens.
    const NEIGHBOR_OFFSETS: [(i64, i64); 4] = [(2, 0), (-2, 0), (0, 2), (0, -2)];

    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Generate a maze grid of the given full size, walls included.
    ///
    /// Rooms sit at even-even coordinates; iterative depth-first
    /// search from [START_CELL] visits every room exactly once,
    /// opening the wall between a room and the room it is discovered
    /// from. The carved corridors therefore form a spanning tree over
    /// the rooms. Returns the grid, the backpointer table, and the
    /// room reached at the greatest stack depth, which becomes the
    /// stop cell.
    ///
    /// The depth metric is stack depth at discovery time rather than
    /// shortest-path distance, which biases the stop cell toward the
    /// end of a long winding corridor.
    pub fn generate(
        &mut self,
        rows: usize,
        cols: usize,
    ) -> anyhow::Result<(Vec<Vec<Cell>>, BackPointers, Point)> {
        if rows == 0 || cols == 0 {
            bail!("maze dimensions must be positive, got {rows}x{cols}");
        }

        let mut grid = vec![vec![Cell::Wall; cols]; rows];
        let mut back: BackPointers = vec![vec![None; cols]; rows];
        let mut visited = vec![vec![false; cols]; rows];

        let mut tracker = DepthTracker::new(START_CELL);
        let mut stack = vec![START_CELL];
        visited[START_CELL.row][START_CELL.col] = true;

        while let Some(&cell) = stack.last() {
            grid[cell.row][cell.col] = Cell::Space;
            tracker.observe(stack.len(), cell);

            let candidates: Vec<Point> = Self::NEIGHBOR_OFFSETS
                .iter()
                .filter_map(|&(dr, dc)| {
                    let r = cell.row as i64 + dr;
                    let c = cell.col as i64 + dc;
                    ((0..rows as i64).contains(&r)
                        && (0..cols as i64).contains(&c)
                        && !visited[r as usize][c as usize])
                        .then(|| Point {
                            row: r as usize,
                            col: c as usize,
                        })
                })
                .collect();

            if let Some(&next) = candidates.choose(&mut self.random) {
                visited[next.row][next.col] = true;

                // Open the wall between the two rooms.
                let between = cell.midpoint(next);
                grid[between.row][between.col] = Cell::Space;

                back[next.row][next.col] = Some(cell);
                stack.push(next);
            } else {
                stack.pop();
            }
        }

        let (furthest, depth) = tracker.into_furthest();
        debug!(
            "carved {rows}x{cols} maze, stop cell ({}, {}) at depth {depth}",
            furthest.row, furthest.col
        );
        Ok((grid, back, furthest))
    }
}

/// Tracks the first cell observed at the greatest stack depth.
///
/// Later cells arriving at the same depth never replace the first one;
/// only a strictly greater depth does.
struct DepthTracker {
    max_depth: usize,
    furthest: Point,
}

impl DepthTracker {
    fn new(start: Point) -> Self {
        Self {
            max_depth: 0,
            furthest: start,
        }
    }

    fn observe(&mut self, depth: usize, cell: Point) {
        if depth > self.max_depth {
            self.max_depth = depth;
            self.furthest = cell;
        }
    }

    fn into_furthest(self) -> (Point, usize) {
        (self.furthest, self.max_depth)
    }
}
