//! Headless driver that plays one level against a scripted player and logs a
//! summary.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use clap::Parser;
use haunt::player::player_stamina_system;
use haunt::{
    init_logging, spawn_demo_world, AudioOutbox, CueSource, GameConfig, GameOutcome, Ghost,
    GhostMode, HauntPlugin, LevelProgress, NearestGhostRegistry, Player, PlayerInput,
    PresentationPlugin, StaminaModel,
};
use log::info;

/// Headless run of the ghost hunt against a scripted player
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Level to play, overriding the configuration
    #[arg(short, long)]
    level: Option<u32>,
    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 1200)]
    ticks: u32,
    /// RNG seed, overriding the configuration
    #[arg(short, long)]
    seed: Option<u64>,
}

const FRAME: Duration = Duration::from_micros(16_667);

/// Walks the player forward and sprints in bursts.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn scripted_input(time: Res<Time>, mut input: ResMut<PlayerInput>) {
    input.movement = Vec2::Y * 0.6;
    input.look = Vec2::ZERO;
    input.sprint_held = time.elapsed_secs().rem_euclid(4.0) < 1.5;
}

#[derive(Debug, Default)]
struct Tally {
    heartbeats: usize,
    footsteps: usize,
}

fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::from_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(level) = args.level {
        config.spawner.level = level;
    }
    if args.seed.is_some() {
        config.rng_seed = args.seed;
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    let config = load_config(&args)?;

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
        .add_plugins(PresentationPlugin::from_config(&config))
        .add_plugins(HauntPlugin::new(config))
        .add_systems(Startup, spawn_demo_world)
        .add_systems(Update, scripted_input.before(player_stamina_system));

    let mut tally = Tally::default();
    let mut frames = 0;
    while frames < args.ticks {
        app.update();
        frames += 1;
        for cue in app.world_mut().resource_mut::<AudioOutbox>().drain() {
            match cue.source {
                CueSource::Heartbeat { .. } => tally.heartbeats += 1,
                CueSource::Footstep => tally.footsteps += 1,
            }
        }
        if !app.world().resource::<GameOutcome>().is_playing() {
            break;
        }
    }

    let world = app.world_mut();
    let outcome = *world.resource::<GameOutcome>();
    let level = world.resource::<LevelProgress>().level();
    let held = world.resource::<NearestGhostRegistry>().held();
    let chasing = world
        .query::<&Ghost>()
        .iter(world)
        .filter(|ghost| ghost.mode() == GhostMode::Chasing)
        .count();
    let energy = world
        .query_filtered::<&StaminaModel, With<Player>>()
        .iter(world)
        .next()
        .map_or(0.0, StaminaModel::energy_fraction);

    info!("level {level} finished after {frames} frames: {outcome:?}");
    info!("ghosts chasing: {chasing}; nearest ghost: {held:?}");
    info!("player energy: {:.0}%", energy * 100.0);
    info!(
        "cues: {} heartbeats, {} footsteps",
        tally.heartbeats, tally.footsteps
    );
    Ok(())
}
