//! Terminal rendering of mazes and their solutions

use std::thread;
use std::time::Duration;

use itertools::Itertools;

use crate::{Cell, Direction, Maze};

const WALL_SQUARE: char = '⬛';
const SPACE_SQUARE: char = '⬜';
const START_SQUARE: char = '🟩';
const STOP_SQUARE: char = '🟥';
const PATH_SQUARE: char = '🟦';

const fn cell_square(cell: Cell) -> char {
    match cell {
        Cell::Wall => WALL_SQUARE,
        Cell::Space => SPACE_SQUARE,
        Cell::Start => START_SQUARE,
        Cell::Stop => STOP_SQUARE,
    }
}

/// Arrow drawn over a corridor cell on the solution path. Rooms on the
/// path carry no direction and get the plain path color instead.
const fn arrow(direction: Direction) -> Option<char> {
    match direction {
        Direction::None => None,
        Direction::Left => Some('⬅'),
        Direction::Right => Some('➡'),
        Direction::Up => Some('⬆'),
        Direction::Down => Some('⬇'),
    }
}

fn squares(maze: &Maze) -> Vec<Vec<char>> {
    maze.grid()
        .iter()
        .map(|row| row.iter().map(|&cell| cell_square(cell)).collect())
        .collect()
}

fn frame(squares: &[Vec<char>]) -> String {
    squares.iter().map(|row| row.iter().join("")).join("\n")
}

/// Render the maze without its solution, one square per cell.
pub fn render_maze(maze: &Maze) -> String {
    frame(&squares(maze))
}

/// Render the maze with the solution path overlaid.
///
/// Path cells are flooded with the path color; corridor cells
/// additionally get an arrow showing the direction of travel from
/// start to stop.
pub fn render_solution(maze: &Maze) -> String {
    let mut squares = squares(maze);
    for &(point, direction) in maze.path() {
        squares[point.row][point.col] = arrow(direction).unwrap_or(PATH_SQUARE);
    }
    frame(&squares)
}

/// Draw the solution on the terminal one step at a time.
///
/// Clears the screen for each frame and sleeps `frame_ms` in between.
/// Steps are drawn from the start towards the stop cell.
pub fn playback(maze: &Maze, frame_ms: u64) {
    fn print_frame(squares: &[Vec<char>]) {
        print!("\x1B[2J\x1B[1;1H");
        println!("{}", frame(squares));
    }

    let mut squares = squares(maze);
    print_frame(&squares);

    // The reconstructed path runs stop-to-start; play it backwards.
    for &(point, direction) in maze.path().iter().rev() {
        thread::sleep(Duration::from_millis(frame_ms));
        squares[point.row][point.col] = arrow(direction).unwrap_or(PATH_SQUARE);
        print_frame(&squares);
    }
}
