//! CLI for maze generation

use clap::Parser;
use log::debug;
use maze_carver::dimensions::{self, RoomDimensions, DEFAULT_COLS, DEFAULT_ROWS};
use maze_carver::{render, Maze, MazeGenerator};

/// Carve a perfect maze and show the way through it
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of room rows, walls excluded. Non-numeric values fall
    /// back to the default.
    #[arg(long, default_value = "20")]
    rows: String,

    /// Number of room columns, walls excluded. Non-numeric values
    /// fall back to the default.
    #[arg(long, default_value = "20")]
    cols: String,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Overlay the solution path on the maze
    #[arg(short, long)]
    solve: bool,

    /// Animate drawing the solution on the terminal
    #[arg(short, long)]
    playback: bool,

    /// Playback frame length in milliseconds
    #[arg(short, long, default_value_t = 120)]
    frame_length: u64,
}

/// Generate a maze of the requested size, print or play it back
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let rows = dimensions::parse_room_count(&args.rows, DEFAULT_ROWS);
    let cols = dimensions::parse_room_count(&args.cols, DEFAULT_COLS);
    let dims = RoomDimensions::clamped(rows, cols);
    debug!("requested {rows}x{cols} rooms, using {}x{}", dims.rows, dims.cols);

    let mut generator = MazeGenerator::new(args.seed);
    let maze = Maze::new(dims.grid_rows(), dims.grid_cols(), &mut generator)?;

    if args.playback {
        render::playback(&maze, args.frame_length);
    } else if args.solve {
        println!("{}", render::render_solution(&maze));
    } else {
        println!("{}", render::render_maze(&maze));
    }
    Ok(())
}
