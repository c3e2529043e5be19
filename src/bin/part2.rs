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

    let best_paths = maze
        .best_paths()
        .context("Failed to walk through given maze.")?;
    println!(
        "There are {} tile(s) in the maze that's on at least one path with the minimum score.",
        best_paths.tile_n()
    );
    if args.draw {
        print!("{}", best_paths.render(&maze));
    }

    Ok(())
}
