use anyhow::{Context, Result};
use clap::Parser;
use reindeer_maze::{logger, CLIArgs};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    logger::init(args.verbose);
    let maze = reindeer_maze::read_maze(&args.input_path).with_context(|| {
        format!(
            "Failed to read maze from given file({}).",
            args.input_path.display()
        )
    })?;

    let table = maze.score_table();
    let min_score = maze
        .min_score_in(&table)
        .context("Failed to walk through given maze.")?;
    println!("The minimum score of walking through the maze is {}.", min_score);
    if args.draw {
        let best_paths = maze.best_paths_in(&table)?;
        print!("{}", best_paths.render(&maze));
    }

    Ok(())
}
