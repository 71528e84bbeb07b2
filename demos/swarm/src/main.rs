//! swarm: the default flocking scenario.
//!
//! Ten agents, twenty ticks, a 5×5 torus.  Every section of `flock.toml`
//! (path overridable with `FLOCK_CONFIG`) may change that; see
//! `demos/swarm/flock.toml` for the full set of keys.  Trajectories and tick
//! summaries land in `output/swarm/` as CSV.  Log verbosity follows
//! `RUST_LOG` (default `info`).

mod config;


use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Result, bail};
use tracing_subscriber::EnvFilter;

use flock_output::{CsvWriter, SimOutputObserver};
use flock_sim::{SimBuilder, TracingObserver};

use config::DemoConfig;

const DEFAULT_CONFIG_PATH: &str = "flock.toml";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let path = std::env::var_os("FLOCK_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let cfg = DemoConfig::load_or_default(&path)?;

    tracing::info!(
        agents = cfg.world.agents,
        ticks = cfg.sim.total_ticks,
        seed = cfg.sim.seed,
        width = cfg.world.width,
        height = cfg.world.height,
        boundary = %cfg.world.boundary,
        "building swarm"
    );

    let mut sim = SimBuilder::new(
        cfg.sim.clone(),
        cfg.params.clone(),
        cfg.world.bounds(),
        cfg.world.boundary,
        cfg.world.agents,
    )
    .build()?;

    let writer = CsvWriter::new(&cfg.output.dir)?;
    let mut obs = (SimOutputObserver::new(writer), TracingObserver::new(cfg.output.log_every));

    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.0.take_error() {
        bail!("output error: {e}");
    }

    tracing::info!(
        elapsed_ms = elapsed.as_secs_f64() * 1e3,
        dir = %cfg.output.dir.display(),
        "wrote trajectories.csv and tick_summaries.csv"
    );

    println!("{:<8} {:>10} {:>10} {:>10} {:>10}", "Agent", "x", "y", "hx", "hy");
    println!("{}", "-".repeat(52));
    for agent in &sim.agents {
        let pos = sim.space.position(agent.id)?;
        println!(
            "{:<8} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
            agent.id.0, pos.x, pos.y, agent.heading.x, agent.heading.y
        );
    }

    Ok(())
}
