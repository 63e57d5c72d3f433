use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use labkit_cli::Exercise;
use labkit_cli::scenario::Scenario;
use labkit_observability::LogFormat;

#[derive(Parser)]
#[command(name = "labkit", about = "Run the validated-entity exercises")]
struct Args {
    /// Log line format (level comes from RUST_LOG)
    #[arg(long, global = true, default_value = "pretty")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Car with a fuel tank
    Garage(RunArgs),
    /// Tree growing up to a maximum height
    Forest(RunArgs),
    /// Duelists, warriors and archers
    Arena(RunArgs),
    /// Book taxonomy
    Library(RunArgs),
    /// Every built-in scenario in turn
    All,
}

#[derive(clap::Args)]
struct RunArgs {
    /// JSON scenario to run instead of the built-in one
    #[arg(short, long)]
    scenario: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    labkit_observability::init(args.log_format);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let (exercise, run_args) = match args.command {
        Command::Garage(a) => (Exercise::Garage, a),
        Command::Forest(a) => (Exercise::Forest, a),
        Command::Arena(a) => (Exercise::Arena, a),
        Command::Library(a) => (Exercise::Library, a),
        Command::All => {
            for exercise in Exercise::ALL {
                writeln!(out, "== {} ==", exercise.name())?;
                exercise
                    .run_builtin(&mut out)
                    .with_context(|| format!("{} scenario failed", exercise.name()))?;
            }
            return Ok(());
        }
    };

    let result = match run_args.scenario {
        Some(path) => exercise.run(&Scenario::load(&path)?, &mut out),
        None => exercise.run_builtin(&mut out),
    };
    result.with_context(|| format!("{} scenario failed", exercise.name()))
}
