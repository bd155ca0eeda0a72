//! antfarm: move a colony of agents from `##start` to `##end` through a
//! room graph, one hop per agent per turn, without two agents sharing an
//! intermediate room.
//!
//! The input description is echoed to stdout, followed by a blank line and
//! one `L<agent>-<room>` line per turn.  Diagnostics go to stderr; raise
//! their verbosity with `-v` or `RUST_LOG`.

mod config;

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use af_input::load_farm;
use af_output::{CsvWriter, LineWriter, TurnOutputObserver, TurnWriter};
use af_sched::solve;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "antfarm", version, about = "Route agents through a room graph")]
struct Args {
    /// Farm description file
    file: PathBuf,

    /// TOML file with run limits
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Maximum number of simple paths to enumerate
    #[arg(long, value_name = "N")]
    max_paths: Option<usize>,

    /// Maximum number of search nodes the path selector may expand
    #[arg(long, value_name = "N")]
    max_selection_steps: Option<u64>,

    /// Abort the schedule after this many turns
    #[arg(long, value_name = "N")]
    max_turns: Option<u64>,

    /// Also write the moves as `turn,agent,room` rows to this file
    #[arg(long, value_name = "OUT")]
    csv: Option<PathBuf>,

    /// Print only the turn lines
    #[arg(long)]
    no_echo: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = if verbose > 0 {
        EnvFilter::new(default)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let config = config::resolve(args)?;

    let farm = load_farm(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let graph = farm.to_graph().context("invalid farm")?;
    info!(
        agents = farm.agent_count,
        rooms = graph.room_count(),
        tunnels = graph.tunnel_count(),
        "farm loaded",
    );

    let out = BufWriter::new(io::stdout().lock());
    let lines = if args.no_echo {
        LineWriter::new(out)
    } else {
        LineWriter::with_preamble(out, farm.lines.clone())
    };

    let mut obs = TurnOutputObserver::new(&graph, lines);
    let plan = solve(&graph, farm.agent_count, &config, &mut obs)?;
    if let Some(e) = obs.take_error() {
        return Err(e).context("writing moves");
    }
    info!(
        paths = plan.paths.len(),
        turns = plan.log.turn_count(),
        moves = plan.log.total_moves(),
        "routing complete",
    );

    if let Some(path) = &args.csv {
        let mut csv = CsvWriter::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        for turn in plan.log.iter() {
            csv.write_turn(&graph, turn.turn, &turn.moves)?;
        }
        csv.finish()
            .with_context(|| format!("writing {}", path.display()))?;
    }

    Ok(())
}
