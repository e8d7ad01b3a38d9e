//=========================================================================
// Carrot Hop — Binary Entry Point
//=========================================================================

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::{Builder, Env};
use log::{info, warn};

use carrot_hop::config::GameConfig;
use carrot_hop::game::{self, SceneId};
use carrot_hop::EngineBuilder;

/// Endless vertical platformer: bounce up, collect carrots, don't fall.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// RON configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fixed seed for platform placement.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Logic ticks per second (overrides the config file).
    #[arg(long)]
    tps: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(tps) = args.tps {
        config.tps = tps;
    }

    for warning in config.validate() {
        warn!("Config: {}", warning);
    }
    anyhow::ensure!(config.tps > 0.0, "tps must be positive, got {}", config.tps);
    anyhow::ensure!(
        config.window.width > 0.0 && config.window.height > 0.0,
        "window size must be positive"
    );

    info!(
        "Starting Carrot Hop ({}x{}, seed: {:?})",
        config.window.width, config.window.height, config.seed
    );

    EngineBuilder::<SceneId>::new()
        .with_tps(config.tps)
        .with_viewport(config.window.width, config.window.height)
        .build()
        .init(|systems, _context| game::register(systems, &config))
        .run(config.window.clone())
        .context("running the game window")?;

    Ok(())
}
