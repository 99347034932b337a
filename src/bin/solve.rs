//! CLI entry point (SPEC_FULL.md §7): read a board, run the search, print
//! the solution notation.

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use env_logger::{Builder, Target};
use log::LevelFilter;

use stormy_seas::{parse_state, BoardConfig, Puzzle};

#[derive(Parser, Debug)]
#[command(author, version, about = "Solve a Stormy Seas puzzle")]
struct Cli {
    /// Path to the puzzle's text layout.
    input: PathBuf,

    /// Path to a JSON board configuration. Defaults to the reference board.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Cli::parse();

    Builder::new()
        .filter(
            None,
            match args.verbose {
                0 => LevelFilter::Warn,
                1 => LevelFilter::Info,
                2 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            },
        )
        .target(Target::Stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => BoardConfig::from_reader(File::open(path)?)?,
        None => BoardConfig::default(),
    };

    let mut text = String::new();
    read_input(&args.input, &mut text)?;

    let state = parse_state(&text, &config)?;
    let puzzle = Puzzle::new(state);
    let solution = puzzle.solve()?;

    println!("{}", solution.to_notation());
    println!("moves: {}, steps: {}", solution.move_count(), solution.step_count());

    Ok(())
}

fn read_input(path: &PathBuf, out: &mut String) -> io::Result<()> {
    File::open(path)?.read_to_string(out)?;
    Ok(())
}
