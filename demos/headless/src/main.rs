//! headless — run the contagion engine without a display.
//!
//! Stands in for the interactive front end: each step is one advance call of
//! `speed` ticks, the way a renderer would call it once per frame.
//!
//! ```text
//! headless --steps 1000 --speed 3 --output output/run1
//! headless --config scenario.json --log-level debug
//! ```

mod logging;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info, warn};

use ct_core::SimConfig;
use ct_output::{CsvWriter, SimOutputObserver};
use ct_sim::{NoopObserver, Sim, SimBuilder, SimObserver, Snapshot};

#[derive(Parser, Debug)]
#[command(version, about = "Headless contagion simulation")]
struct Args {
    /// JSON file with a `SimConfig`; missing fields take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Override the configured ticks per step.
    #[arg(long)]
    speed: Option<u32>,

    /// Number of advance calls to run.
    #[arg(long, default_value_t = 500)]
    steps: u32,

    /// Directory for `history.csv` and `agent_snapshots.csv`.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write agent rows every this many steps (0 = never).
    #[arg(long, default_value_t = 50)]
    snapshot_interval: u64,

    /// Log a progress line every this many steps.
    #[arg(long, default_value_t = 100)]
    report_every: u32,

    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn load_config(args: &Args) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(speed) = args.speed {
        config.speed = speed;
    }
    Ok(config)
}

/// Run `steps` advance calls, logging progress; returns the last snapshot.
fn run<O: SimObserver>(sim: &mut Sim, args: &Args, observer: &mut O) -> Result<Snapshot> {
    let mut snapshot = sim.snapshot();
    for step in 1..=args.steps {
        let speed = sim.config().speed;
        snapshot = sim.advance_observed(speed, observer)?;
        if args.report_every > 0 && step % args.report_every == 0 {
            let c = &snapshot.counts;
            info!(
                "{}: S {} E {} I {} R {} D {} Q {} | Rt {:.2}",
                snapshot.tick, c.healthy, c.exposed, c.infected, c.recovered, c.dead, c.quarantined,
                snapshot.reproduction
            );
        }
    }
    Ok(snapshot)
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.log_level)?;

    let config = load_config(&args)?;
    info!(
        "population {} | initial infected {} | radius {} | p {} | quarantine {}",
        config.population,
        config.initial_infected,
        config.infection_radius,
        config.infection_probability,
        if config.quarantine_enabled { "on" } else { "off" },
    );
    let mut sim = SimBuilder::new(config).build()?;

    let t0 = Instant::now();
    let snapshot = match &args.output {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let writer = CsvWriter::new(dir)?;
            let mut obs = SimOutputObserver::new(writer, args.snapshot_interval);
            let snapshot = run(&mut sim, &args, &mut obs)?;
            obs.finish()?;
            if let Some(e) = obs.take_error() {
                warn!("output error: {e}");
            }
            snapshot
        }
        None => run(&mut sim, &args, &mut NoopObserver)?,
    };
    let elapsed = t0.elapsed();

    let c = &snapshot.counts;
    println!("Simulation complete in {:.3} s ({} ticks)", elapsed.as_secs_f64(), snapshot.tick.0);
    println!("{:<12} {:>8}", "Status", "Agents");
    println!("{}", "-".repeat(21));
    for (label, n) in [
        ("healthy", c.healthy),
        ("exposed", c.exposed),
        ("infected", c.infected),
        ("recovered", c.recovered),
        ("dead", c.dead),
        ("quarantined", c.quarantined),
    ] {
        println!("{label:<12} {n:>8}");
    }
    println!();
    println!("Rt now {:.2}, peak {:.2}", snapshot.reproduction, snapshot.max_reproduction);

    Ok(())
}
