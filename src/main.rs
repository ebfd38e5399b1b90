use std::{io, thread, time::Duration};

use anyhow::Context;
use lifegrid::{GameOfLife, Grid};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

mod console;
mod options;
mod prompt;
mod stats;

use console::{ConsoleCommand, ConsoleRender};
use stats::Recorder;

/// Builds and seeds the grid, prompting for whatever the options left out
fn args_to_grid(args: &options::Args) -> anyhow::Result<Grid> {
    let mut prompt = prompt::Prompt::new(io::stdin().lock(), io::stdout());

    let width = match args.width()? {
        Some(width) => width,
        None => prompt.dimension("Enter the width of the grid: ")?,
    };
    let height = match args.height()? {
        Some(height) => height,
        None => prompt.dimension("Enter the height of the grid: ")?,
    };
    let mut grid = Grid::new(width, height)?;

    if let Some(pattern) = args.pattern()? {
        grid.seed_with_pattern(&pattern)
            .context("cannot place the pattern")?;
        return Ok(grid);
    }

    if args.random() || prompt.confirm("Randomize initial state? (y/n): ")? {
        match args.seed()? {
            Some(seed) => grid.seed_random(&mut ChaCha8Rng::seed_from_u64(seed)),
            None => grid.seed_random(&mut rand::rng()),
        }
    } else {
        let pattern = prompt.pattern(width, height)?;
        grid.seed_with_pattern(&pattern)?;
    }
    Ok(grid)
}

/// Draws one generation, in the console or as text on stdout
fn show(console: &mut Option<ConsoleRender>, grid: &Grid, stats: &mut Recorder) -> io::Result<()> {
    match console {
        Some(console) => {
            if stats.has_report() {
                console.set_report(stats.report());
            }
            console.render(grid)
        }
        None => {
            println!("generation {}:\n{}\n", stats.gens(), grid);
            if stats.has_report() {
                println!("{}", stats.report());
            }
            Ok(())
        }
    }
}

/// Sleeps between generations; returns `false` if the user asked to stop
fn wait(console: &mut Option<ConsoleRender>, grid: &Grid, interval: Duration) -> io::Result<bool> {
    match console {
        Some(console) => Ok(!matches!(
            console.wait(grid, interval)?,
            Some(ConsoleCommand::Exit)
        )),
        None => {
            if !interval.is_zero() {
                thread::sleep(interval);
            }
            Ok(true)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let Some(args) = options::Args::from_env()? else {
        return Ok(());
    };

    let grid = args_to_grid(&args)?;
    let steps = args.steps()?;
    let interval = args.interval()?;

    // setup the engine and reporting metrics
    let game = GameOfLife::new(grid, args.rule()?);
    let mut console = if args.console() {
        Some(ConsoleRender::new()?)
    } else {
        None
    };
    let mut stats = Recorder::new(game.alive_count());

    let seed = game.snapshot();
    show(&mut console, &seed, &mut stats)?;
    let mut shown = seed;
    let mut generations = game.steps(steps);
    // wait before pulling the next generation so an early exit leaves the
    // engine on the one last shown
    while generations.len() > 0 {
        if !wait(&mut console, &shown, interval)? {
            break;
        }
        let Some(grid) = generations.next() else {
            break;
        };
        stats.record(grid.alive_count());
        show(&mut console, &grid, &mut stats)?;
        shown = grid;
    }
    std::mem::drop(console);

    let game = generations.engine();
    println!(
        "{} generations, {} cells alive",
        game.generation(),
        game.alive_count()
    );
    Ok(())
}
