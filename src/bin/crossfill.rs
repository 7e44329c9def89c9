use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crossfill::error::{Error, Result};
use crossfill::puzzle::Puzzle;
use crossfill::render::FilledGrid;
use crossfill::solver::heuristics::{
    value::{LeastConstrainingValueHeuristic, SeededShuffleHeuristic, ValueOrderingHeuristic},
    variable::MinimumRemainingValuesHeuristic,
};
use crossfill::solver::{stats::render_stats_table, SolverEngine};
use crossfill::wordlist::WordList;

/// Fill a crossword grid from a structure file and a word list.
#[derive(Debug, Parser)]
#[command(name = "crossfill", version, about)]
struct Args {
    /// Grid structure file: one line per row, `_` for open cells.
    structure: PathBuf,

    /// Word list file, one candidate per line.
    words: PathBuf,

    /// Write the rendered grid to a file as well as stdout.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print search statistics after solving.
    #[arg(long)]
    stats: bool,

    /// Emit the result as JSON instead of a rendered grid.
    #[arg(long)]
    json: bool,

    /// Shuffle candidate order with this seed instead of using the
    /// least-constraining-value heuristic.
    #[arg(long)]
    seed: Option<u64>,

    /// Maintain arc consistency during the search as well as before it.
    #[arg(long)]
    propagate: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let structure = fs::read_to_string(&args.structure).map_err(|source| Error::Io {
        path: args.structure.clone(),
        source,
    })?;
    let puzzle = Puzzle::parse(&structure)?;
    let words = WordList::from_path(&args.words)?;

    let value_heuristic: Box<dyn ValueOrderingHeuristic> = match args.seed {
        Some(seed) => Box::new(SeededShuffleHeuristic::new(seed)),
        None => Box::new(LeastConstrainingValueHeuristic),
    };
    let engine = SolverEngine::new(Box::new(MinimumRemainingValuesHeuristic), value_heuristic)
        .with_search_propagation(args.propagate);

    let (solution, stats) = engine.solve(&puzzle, &words);

    match solution {
        None => println!("No solution."),
        Some(assignment) => {
            let rendered = FilledGrid::new(&puzzle, &assignment).to_string();

            if args.json {
                let entries: Vec<serde_json::Value> = assignment
                    .iter()
                    .map(|(slot, word)| serde_json::json!({ "slot": slot, "word": word }))
                    .collect();
                let report = serde_json::json!({
                    "grid": rendered.lines().collect::<Vec<_>>(),
                    "slots": entries,
                    "stats": &stats,
                });
                println!("{}", serde_json::to_string_pretty(&report).expect("report is valid JSON"));
            } else {
                print!("{rendered}");
            }

            if let Some(path) = &args.output {
                fs::write(path, &rendered).map_err(|source| Error::Io {
                    path: path.clone(),
                    source,
                })?;
            }
        }
    }

    if args.stats && !args.json {
        println!("{}", render_stats_table(&stats));
    }

    Ok(())
}
