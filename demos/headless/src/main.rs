//! headless — minimal host for the boids flocking engine.
//!
//! Drives a reference 640×480 swarm for a fixed number of frames with no
//! window.  A scripted list of "clicks" stands in for pointer input: each is
//! decoded into an `Interaction` and queued, then drained at the start of the
//! next frame exactly as a GUI host would.  Flock statistics are logged every
//! `REPORT_INTERVAL` frames.
//!
//! Set `RUST_LOG=debug` to see insert / scatter events, `RUST_LOG=trace` for
//! every tick.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use boids_core::{SwarmConfig, Tick, Vec2};
use boids_flock::{FlockStats, FlockStore};
use boids_sim::{Interaction, InteractionQueue, PointerButton, Swarm, SwarmObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT:     usize = 100;
const SEED:            u64   = 42;
const FRAMES:          u64   = 600;
const REPORT_INTERVAL: u64   = 100;

/// (frame, button, world x, world y)
const SCRIPTED_CLICKS: &[(u64, PointerButton, f64, f64)] = &[
    (50,  PointerButton::Primary,   100.0, 100.0),
    (50,  PointerButton::Primary,   110.0, 100.0),
    (120, PointerButton::Secondary, 320.0, 240.0),
    (300, PointerButton::Other(2),  0.0,   0.0),
    (400, PointerButton::Primary,   600.0, 400.0),
];

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs a stats line every `interval` frames.  Holds no simulation state.
struct StatsReporter {
    interval: u64,
}

impl SwarmObserver for StatsReporter {
    fn on_interaction(&mut self, tick: Tick, interaction: &Interaction) {
        info!(%tick, ?interaction, "interaction applied");
    }

    fn on_tick_end(&mut self, tick: Tick, flock: &FlockStore) {
        if tick.0 % self.interval == 0 {
            info!(%tick, stats = %FlockStats::of(flock), "frame");
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SwarmConfig {
        initial_count: AGENT_COUNT,
        seed: SEED,
        ..SwarmConfig::default()
    };
    info!(agents = config.initial_count, frames = FRAMES, seed = config.seed, "starting boids");

    let mut swarm = Swarm::new(config).context("building swarm")?;
    let mut queue = InteractionQueue::new();
    let mut reporter = StatsReporter { interval: REPORT_INTERVAL };

    let started = Instant::now();
    for frame in 0..FRAMES {
        for &(at, button, x, y) in SCRIPTED_CLICKS.iter().filter(|c| c.0 == frame) {
            let mapped = queue
                .push_click(button, Vec2::new(x, y))
                .with_context(|| format!("queueing click at frame {at}"))?;
            if !mapped {
                info!(?button, "click ignored");
            }
        }
        swarm.step(&mut queue, &mut reporter);
    }
    let elapsed = started.elapsed();

    info!(
        frames = FRAMES,
        agents = swarm.count(),
        secs = elapsed.as_secs_f64(),
        "simulation complete"
    );
    info!(stats = %FlockStats::of(swarm.flock()), "final");

    Ok(())
}
