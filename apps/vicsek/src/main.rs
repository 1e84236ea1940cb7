//! vicsek — headless runner for the Vicsek flocking engine.
//!
//! Builds a flock from an optional JSON config plus command-line overrides,
//! runs it for `total_ticks` and optionally writes CSV output.  Set
//! `RUST_LOG=info` (or `debug` for per-step lines) to see progress.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use vk_agent::AgentStore;
use vk_core::{Domain, FlockConfig, Tick};
use vk_output::{CsvWriter, FlockOutputObserver};
use vk_sim::{FlockBuilder, FlockObserver, NoopObserver, StepStats};

/// Ticks between progress log lines.
const PROGRESS_INTERVAL: u64 = 100;

#[derive(Parser, Debug)]
#[command(name = "vicsek", version, about = "Run a headless Vicsek flocking simulation")]
struct Cli {
    /// JSON file with `FlockConfig` fields; missing fields take defaults.
    #[arg(long, env = "VICSEK_CONFIG")]
    config: Option<PathBuf>,

    /// Initial number of agents.
    #[arg(long)]
    agents: Option<usize>,

    /// Interaction radius.
    #[arg(long)]
    radius: Option<f64>,

    /// Noise amplitude (heading noise is uniform in [-η/2, η/2]).
    #[arg(long)]
    noise: Option<f64>,

    /// Speed of every agent.
    #[arg(long)]
    speed: Option<f64>,

    /// Domain width and height.
    #[arg(long)]
    size: Option<f64>,

    /// Number of ticks to run.
    #[arg(long)]
    ticks: Option<u64>,

    /// Master RNG seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Rayon worker threads (only with the `parallel` feature).
    #[arg(long)]
    threads: Option<usize>,

    /// Directory for `agent_snapshots.csv` and `tick_summaries.csv`.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write an agent snapshot every K ticks (0 disables snapshots).
    #[arg(long)]
    snapshot_interval: Option<u64>,
}

impl Cli {
    /// Start from the config file (or defaults) and apply flag overrides.
    fn resolve_config(&self) -> Result<FlockConfig> {
        let mut cfg = match &self.config {
            Some(path) => load_config(path)?,
            None => FlockConfig::default(),
        };
        if let Some(n) = self.agents {
            cfg.agent_count = n;
        }
        if let Some(r) = self.radius {
            cfg.radius = r;
        }
        if let Some(eta) = self.noise {
            cfg.noise = eta;
        }
        if let Some(v) = self.speed {
            cfg.speed = v;
        }
        if let Some(side) = self.size {
            cfg.width = side;
            cfg.height = side;
        }
        if let Some(t) = self.ticks {
            cfg.total_ticks = t;
        }
        if let Some(s) = self.seed {
            cfg.seed = s;
        }
        if self.threads.is_some() {
            cfg.num_threads = self.threads;
        }
        if let Some(k) = self.snapshot_interval {
            cfg.output_interval_ticks = k;
        }
        cfg.validate().context("invalid configuration")?;
        Ok(cfg)
    }
}

fn load_config(path: &Path) -> Result<FlockConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

// ── Progress logging ──────────────────────────────────────────────────────────

/// Logs the order parameter every `interval` ticks, then forwards to `inner`.
struct Progress<O> {
    interval: u64,
    inner:    O,
}

impl<O: FlockObserver> FlockObserver for Progress<O> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.inner.on_tick_start(tick);
    }

    fn on_tick_end(&mut self, stats: &StepStats) {
        if stats.tick.is_on_interval(self.interval) {
            info!(
                tick = stats.tick.0,
                agents = stats.agents,
                mean_neighbors = stats.mean_neighbors,
                order = stats.order,
                "progress",
            );
        }
        self.inner.on_tick_end(stats);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore, domain: &Domain) {
        self.inner.on_snapshot(tick, agents, domain);
    }

    fn on_run_end(&mut self, final_tick: Tick) {
        self.inner.on_run_end(final_tick);
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    #[cfg(not(feature = "parallel"))]
    if config.num_threads.is_some_and(|n| n > 1) {
        tracing::warn!("--threads ignored: built without the `parallel` feature");
    }

    let mut engine = FlockBuilder::new(config).build()?;
    let started = Instant::now();

    match &cli.output {
        Some(dir) => {
            let writer = CsvWriter::new(dir)
                .with_context(|| format!("opening output directory {}", dir.display()))?;
            let mut obs = Progress {
                interval: PROGRESS_INTERVAL,
                inner:    FlockOutputObserver::new(writer),
            };
            engine.run(&mut obs);
            if let Some(e) = obs.inner.take_error() {
                return Err(e).context("writing output");
            }
            info!(dir = %dir.display(), "output written");
        }
        None => {
            let mut obs = Progress { interval: PROGRESS_INTERVAL, inner: NoopObserver };
            engine.run(&mut obs);
        }
    }

    info!(
        ticks = engine.tick().0,
        agents = engine.len(),
        order = engine.order_parameter(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "done",
    );
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
