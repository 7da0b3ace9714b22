use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use instant::Duration;

use crossword_fill::structure::Structure;
use crossword_fill::{Outcome, Solver, SolverOptions, WordList};

/// Fill a crossword structure with words from a word list
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Structure file: `_` marks an open cell, anything else a block
    structure: PathBuf,

    /// Word list file, one word per line
    words: PathBuf,

    /// Also write the filled grid to this file
    output: Option<PathBuf>,

    /// Give up after this many seconds
    #[arg(short, long)]
    time_limit: Option<f64>,

    /// Log debug output (RUST_LOG overrides this)
    #[arg(short, long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    crossword_fill::logging::init_logger(cli.debug);

    if let Err(e) = try_main(cli) {
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let structure = Structure::load(&cli.structure)?;
    let puzzle = structure.puzzle()?;
    let word_list = WordList::load(&cli.words)?;
    log::info!(
        "Loaded {}x{} structure with {} slots and {} words",
        structure.width,
        structure.height,
        puzzle.len(),
        word_list.len()
    );

    let time_limit = cli.time_limit.map(Duration::try_from_secs_f64).transpose()?;
    let solution = Solver::with_options(&puzzle, &word_list, SolverOptions { time_limit }).solve()?;
    log::debug!("{:?}", solution.statistics);

    match solution.outcome {
        Outcome::Unsatisfiable => println!("No solution."),
        Outcome::Solved(assignment) => {
            let display_grid = structure.render(&puzzle, &word_list, &assignment);
            println!("{}", display_grid);

            if let Some(output) = cli.output {
                fs::write(&output, display_grid + "\n")?;
                log::info!("Wrote filled grid to {}", output.display());
            }
        }
    }

    Ok(())
}
