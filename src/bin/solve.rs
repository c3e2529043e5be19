use anyhow::{Context, Result};
use clap::Parser;
use reindeer_maze::{logger, CLIArgs};

// Prints the minimum score, then the number of tiles on the best paths.
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
    let best_paths = maze
        .best_paths_in(&table)
        .context("Failed to walk through given maze.")?;
    println!("{}", best_paths.score());
    println!("{}", best_paths.tile_n());
    if args.draw {
        eprint!("{}", best_paths.render(&maze));
    }

    Ok(())
}
