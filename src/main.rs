use pocketcube::prelude::*;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::seq::SliceRandom;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[clap(name = "pocketcube", about = "Optimal 2x2x2 pocket cube solver")]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Explore the full state graph and write the solution tree.
    Build {
        #[clap(long, default_value = "tree.jsonl")]
        out: PathBuf,
        /// Stop after this many levels; omit for the exhaustive build.
        #[clap(long)]
        max_depth: Option<usize>,
    },
    /// Solve a cube state against a previously built tree.
    Solve {
        state: String,
        #[clap(long, default_value = "tree.jsonl")]
        table: PathBuf,
    },
    /// Report whether a state, or any reorientation of it, is known.
    Symmetry {
        state: String,
        #[clap(long, default_value = "tree.jsonl")]
        table: PathBuf,
    },
    /// Apply random turns to the solved cube and print the result.
    Scramble {
        #[clap(long, default_value_t = 20)]
        steps: usize,
    },
}

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()?;

    match Cli::parse().command {
        Command::Build { out, max_depth } => {
            let file = File::create(&out)
                .with_context(|| format!("creating table file {}", out.display()))?;
            let mut sink = JsonLinesSink::new(BufWriter::new(file));
            let stats = build_tree(&mut sink, &BuildOptions { max_depth })?;
            sink.finish()?;
            println!(
                "{} states across {} levels written to {}",
                stats.states,
                stats.levels,
                out.display()
            );
        }

        Command::Solve { state, table } => {
            let solver = Solver::new(load_table(&table)?);
            match solver.solve(&state) {
                Ok(solution) => {
                    println!("{}", serde_json::json!({ "solution": solution.labels() }))
                }
                Err(Error::NotFound) => {
                    println!("{}", serde_json::json!({ "solution": null }))
                }
                Err(error) => return Err(error.into()),
            }
        }

        Command::Symmetry { state, table } => {
            let solver = Solver::new(load_table(&table)?);
            let outcome = solver.find_symmetric(&state)?;
            println!("{}", serde_json::to_string(&outcome)?);
        }

        Command::Scramble { steps } => {
            let mut rng = rand::thread_rng();
            let turns: Vec<Move> = Move::all().collect();
            let scramble: Vec<Move> = (0..steps)
                .filter_map(|_| turns.choose(&mut rng).copied())
                .collect();

            let cube = Cube::solved().apply_all(scramble.iter().copied());
            let letters: String = scramble.iter().map(|move_| move_.letter()).collect();
            println!("scramble: {}", letters);
            print!("{}", cube);
            println!("state: {}", cube.key());
        }
    }

    Ok(())
}

fn load_table(path: &Path) -> anyhow::Result<MemoryTable> {
    let file =
        File::open(path).with_context(|| format!("opening table file {}", path.display()))?;
    let table = MemoryTable::read_json_lines(BufReader::new(file))
        .with_context(|| format!("loading table file {}", path.display()))?;
    Ok(table)
}
