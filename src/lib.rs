//! Generate perfect mazes and draw their solutions
//!
//! A maze is carved on a rectangular grid with randomized depth-first
//! search. Cells at even-even coordinates are rooms; the cells between
//! them start out as walls, and carving opens the wall between two
//! rooms when the search first steps from one to the other. The carved
//! corridors form a spanning tree over the rooms, so there is exactly
//! one path between any two open cells. The room reached at the
//! greatest search depth becomes the stop cell, and the solution path
//! from start to stop is recovered from the backpointers recorded
//! during the search.
//!
//! # Examples
//! ```
//! use maze_carver::{render, Maze, MazeGenerator};
//!
//! let mut generator = MazeGenerator::new(Some(7));
//! let maze = Maze::new(21, 21, &mut generator).unwrap();
//! println!("{}", render::render_maze(&maze));
//! println!("{}", render::render_solution(&maze));
//! ```
//!
//! Requested sizes come in as room counts and are clamped and widened
//! to make space for walls at the boundary layer:
//! ```
//! use maze_carver::dimensions::RoomDimensions;
//!
//! let dims = RoomDimensions::clamped(20, 20);
//! assert_eq!((dims.grid_rows(), dims.grid_cols()), (39, 39));
//! ```

pub mod dimensions;
pub mod maze_generator;
pub mod path;
pub mod render;

pub use maze_generator::MazeGenerator;

/// Location on the maze grid
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    /// The grid cell exactly halfway between two cells.
    ///
    /// Only meaningful for cells an even number of steps apart, such
    /// as two adjacent rooms with a wall slot between them.
    pub fn midpoint(self, other: Point) -> Point {
        Point {
            row: (self.row + other.row) / 2,
            col: (self.col + other.col) / 2,
        }
    }
}

/// State of a single grid cell
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Cell {
    /// Impassable cell, the initial state of every cell
    Wall,
    /// Open room or carved corridor
    Space,
    /// The fixed starting room
    Start,
    /// The room discovered deepest in the search
    Stop,
}

/// Direction of travel arriving at a path cell, start towards stop
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Direction {
    /// No arrow; rooms along the path carry this
    None,
    Left,
    Right,
    Up,
    Down,
}

/// One entry of the solution path: a cell and the arrow drawn on it
pub type PathStep = (Point, Direction);

/// Room cell where every search starts
pub const START_CELL: Point = Point { row: 0, col: 0 };

/// A generated maze together with its solution path
///
/// Fully immutable after construction; regeneration discards the old
/// maze and constructs a new one.
pub struct Maze {
    grid: Vec<Vec<Cell>>,
    start: Point,
    stop: Point,
    path: Vec<PathStep>,
}

impl Maze {
    /// Generate a maze of the given full grid size, walls included.
    ///
    /// The backpointer table built during generation is consumed here
    /// to reconstruct the solution path and then dropped. Returns an
    /// error if either dimension is zero.
    pub fn new(rows: usize, cols: usize, generator: &mut MazeGenerator) -> anyhow::Result<Self> {
        let (mut grid, back, stop) = generator.generate(rows, cols)?;
        let path = path::reconstruct(&back, START_CELL, stop);

        grid[START_CELL.row][START_CELL.col] = Cell::Start;
        grid[stop.row][stop.col] = Cell::Stop;

        Ok(Maze {
            grid,
            start: START_CELL,
            stop,
            path,
        })
    }

    /// Cell states, indexed by row and then column
    pub fn grid(&self) -> &[Vec<Cell>] {
        &self.grid
    }

    /// The solution path, ordered from the stop cell back to the start
    pub fn path(&self) -> &[PathStep] {
        &self.path
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn stop(&self) -> Point {
        self.stop
    }

    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn cols(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use crate::{Cell, Maze, MazeGenerator, Point, START_CELL};

    fn generate(rows: usize, cols: usize, seed: u64) -> Maze {
        let mut generator = MazeGenerator::new(Some(seed));
        Maze::new(rows, cols, &mut generator).unwrap()
    }

    fn open_cells(maze: &Maze) -> usize {
        maze.grid()
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Wall)
            .count()
    }

    /// Breadth-first flood over non-wall cells from the start.
    fn reachable_open_cells(maze: &Maze) -> usize {
        let (rows, cols) = (maze.rows(), maze.cols());
        let mut seen = vec![vec![false; cols]; rows];
        let mut queue = VecDeque::from([START_CELL]);
        seen[START_CELL.row][START_CELL.col] = true;

        let mut count = 0;
        while let Some(cell) = queue.pop_front() {
            count += 1;
            for (dr, dc) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
                let r = cell.row as i64 + dr;
                let c = cell.col as i64 + dc;
                if r < 0 || r as usize >= rows || c < 0 || c as usize >= cols {
                    continue;
                }
                let (r, c) = (r as usize, c as usize);
                if !seen[r][c] && maze.grid()[r][c] != Cell::Wall {
                    seen[r][c] = true;
                    queue.push_back(Point { row: r, col: c });
                }
            }
        }
        count
    }

    #[test]
    fn every_open_cell_is_reachable_from_start() {
        for seed in 0..5 {
            let maze = generate(21, 33, seed);
            assert_eq!(reachable_open_cells(&maze), open_cells(&maze));
        }
    }

    #[test]
    fn carved_corridors_form_a_spanning_tree() {
        // A spanning tree over n rooms has n - 1 edges, and every
        // corridor cell is one edge. With odd grid dimensions all
        // rooms are visited, so open cells = rooms + (rooms - 1).
        let (rows, cols) = (11, 15);
        let rooms = ((rows + 1) / 2) * ((cols + 1) / 2);
        for seed in 0..5 {
            let maze = generate(rows, cols, seed);
            assert_eq!(open_cells(&maze), 2 * rooms - 1);
        }
    }

    #[test]
    fn start_and_stop_are_marked_on_the_grid() {
        let maze = generate(21, 21, 3);
        assert_eq!(maze.grid()[0][0], Cell::Start);
        assert_eq!(maze.start(), START_CELL);
        let stop = maze.stop();
        assert_eq!(maze.grid()[stop.row][stop.col], Cell::Stop);
        assert_ne!(stop, START_CELL);
    }

    #[test]
    fn solution_path_walks_adjacent_open_cells() {
        let maze = generate(19, 19, 11);

        // The path is stored stop-to-start; walk it start-to-stop.
        let positions: Vec<Point> = maze.path().iter().rev().map(|&(p, _)| p).collect();
        assert!(!positions.is_empty());

        let manhattan = |a: Point, b: Point| a.row.abs_diff(b.row) + a.col.abs_diff(b.col);

        assert_eq!(manhattan(maze.start(), positions[0]), 1);
        assert_eq!(manhattan(*positions.last().unwrap(), maze.stop()), 1);
        for pair in positions.windows(2) {
            assert_eq!(manhattan(pair[0], pair[1]), 1);
        }
        for p in positions {
            assert_ne!(maze.grid()[p.row][p.col], Cell::Wall);
        }
    }

    #[test]
    fn same_seed_generates_identical_mazes() {
        let first = generate(25, 31, 42);
        let second = generate(25, 31, 42);
        assert_eq!(first.grid(), second.grid());
        assert_eq!(first.stop(), second.stop());
        assert_eq!(first.path(), second.path());
    }

    #[test]
    fn minimal_grid_carves_a_spanning_tree_over_four_rooms() {
        // rows = cols = 3 holds rooms at (0,0), (0,2), (2,0), (2,2);
        // a spanning tree on 4 nodes carves exactly 3 wall cells open.
        for seed in 0..10 {
            let maze = generate(3, 3, seed);
            assert_eq!(maze.grid()[0][0], Cell::Start);
            for (r, c) in [(0, 2), (2, 0), (2, 2)] {
                assert_ne!(maze.grid()[r][c], Cell::Wall, "room ({r},{c}) not visited");
            }
            assert_eq!(open_cells(&maze), 7);
        }
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let mut generator = MazeGenerator::new(Some(0));
        assert!(Maze::new(0, 5, &mut generator).is_err());
        assert!(Maze::new(5, 0, &mut generator).is_err());
    }
}
