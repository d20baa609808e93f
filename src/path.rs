//! Solution path reconstruction from generation backpointers

use crate::{maze_generator::BackPointers, Direction, PathStep, Point};

/// Walk the backpointer chain from `end` to `start` and collect the
/// solution path.
///
/// Each step from a room to its backpointer contributes the wall slot
/// in between, carrying the direction of travel from start towards
/// end. Intermediate rooms are included with [Direction::None] so the
/// renderer floods them with the path color without drawing an arrow;
/// the start and end rooms are left out, as they keep their own
/// markers. The walk terminates because backpointers form a tree
/// rooted at the start.
///
/// The result is ordered from the end cell back to the start.
pub fn reconstruct(back: &BackPointers, start: Point, end: Point) -> Vec<PathStep> {
    let mut path = Vec::new();

    let mut cell = end;
    loop {
        if cell != start && cell != end {
            path.push((cell, Direction::None));
        }
        match back[cell.row][cell.col] {
            Some(prev) => {
                let between = cell.midpoint(prev);
                path.push((between, direction_from(prev, cell)));
                cell = prev;
            }
            None => break,
        }
    }

    path
}

/// Direction of the move from one cell to an adjacent one.
///
/// A move changes exactly one axis; row comparisons take priority over
/// column comparisons.
pub fn direction_from(from: Point, to: Point) -> Direction {
    if to.row > from.row {
        Direction::Down
    } else if to.row < from.row {
        Direction::Up
    } else if to.col > from.col {
        Direction::Right
    } else if to.col < from.col {
        Direction::Left
    } else {
        Direction::None
    }
}
