use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

pub mod best_paths;
pub mod logger;
pub mod maze;
pub mod score;
pub mod search;

pub use best_paths::BestPaths;
pub use maze::{Direction, Edge, Maze, MazeBuilder, Position, Tile};
pub use score::{step_score, Score, STEP_SCORE, TURN_SCORE};
pub use search::ScoreTable;

#[derive(Debug)]
pub enum Error {
    InconsistentRow(usize, usize),
    MultipleStartPosition(Position, Position),
    MultipleEndPosition(Position, Position),
    InvalidCharForMap(char),
    NoStartPosition,
    NoEndPosition,
    EmptyMap,
    NoPathToEnd(Position, Position), // (start position, end position)
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} column(s) in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::MultipleStartPosition(last_pos, pos) => write!(
                f,
                "Expect only one start position, given two({}, {}).",
                last_pos, pos
            ),
            Error::MultipleEndPosition(last_pos, pos) => write!(
                f,
                "Expect only one end position, given two({}, {}).",
                last_pos, pos
            ),
            Error::InvalidCharForMap(c) => write!(f, "Invalid character({}) for map.", c),
            Error::NoStartPosition => write!(f, "No start position in map."),
            Error::NoEndPosition => write!(f, "No end position in map."),
            Error::EmptyMap => write!(f, "No tiles in map."),
            Error::NoPathToEnd(start_pos, end_pos) => write!(
                f,
                "No path from start position{} to end position{}.",
                start_pos, end_pos
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    /// Print the maze with tiles on the best paths marked as 'O'.
    #[arg(long)]
    pub draw: bool,
    /// Log more details to stderr, repeat for even more.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    pub min_score: Score,
    pub best_tile_n: usize,
}

/// Both answers from a single search.
pub fn solve(maze: &Maze) -> Result<Solution, Error> {
    let table = maze.score_table();
    let best_paths = maze.best_paths_in(&table)?;

    Ok(Solution {
        min_score: best_paths.score(),
        best_tile_n: best_paths.tile_n(),
    })
}

pub fn read_maze<P: AsRef<Path>>(path: P) -> Result<Maze> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut builder = MazeBuilder::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        builder
            .add_line(line.as_str())
            .with_context(|| format!("Invalid row at line {}.", ind + 1))?;
    }

    Ok(builder.build()?)
}
