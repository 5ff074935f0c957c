//! vrctl: interactive console for the rust_vr dispatch simulator.
//!
//! Scatters a seeded set of service nodes, parks one vehicle at the start
//! position and reads commands from stdin, one per line.  Piped input works
//! the same way as a terminal, so a command file doubles as a batch script:
//!
//! ```text
//! printf 'status\nauto\nexit\n' | vrctl --output ./out
//! ```
//!
//! Set `RUST_LOG=debug` to trace every dispatch decision.

mod args;
mod command;
mod narrator;
mod report;
mod session;


use std::fs;
use std::io::{self, IsTerminal};
use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use vr_core::SimConfig;
use vr_dispatch::{DispatchPolicy, GreedyPriorityPolicy, IndexedPriorityPolicy};
use vr_output::{CsvWriter, SimOutputObserver};
use vr_registry::scatter_nodes;
use vr_sim::SimBuilder;

use args::Args;
use narrator::Narrator;
use session::Session;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse(std::env::args().skip(1))?;
    if args.help {
        println!("{}", args::USAGE);
        return Ok(());
    }

    let config = load_config(args.config.as_deref())?;
    let registry = scatter_nodes(&config).context("generating nodes")?;
    tracing::info!(nodes = registry.len(), seed = config.seed, "scenario generated");

    let output = match &args.output {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            let writer = CsvWriter::new(dir)
                .with_context(|| format!("opening CSV output in {}", dir.display()))?;
            Some(SimOutputObserver::new(writer))
        }
        None => None,
    };

    let policy: Box<dyn DispatchPolicy> = if args.indexed {
        Box::new(IndexedPriorityPolicy::new(&registry))
    } else {
        Box::new(GreedyPriorityPolicy)
    };
    let sim = SimBuilder::new(registry, policy).config(&config).build()?;

    println!("=== vrctl — single-vehicle dispatch simulator ===");
    println!(
        "Nodes: {}  |  Priority: {}  |  Seed: {}  |  Speed: {} km/h",
        config.node_count,
        config
            .priority_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", "),
        config.seed,
        config.speed,
    );
    if let Some(dir) = &args.output {
        println!("Recording CSV output to {}", dir.display());
    }
    println!();
    println!("{}", report::HELP);

    let mut session = Session::new(sim, Narrator::new(output));
    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    session.run(stdin.lock(), &mut io::stdout().lock(), prompt)?;
    Ok(())
}

/// Defaults, overridden field by field by the JSON file when one is given.
fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let config = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str::<SimConfig>(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SimConfig::default(),
    };
    config.validate().context("invalid configuration")?;
    Ok(config)
}
