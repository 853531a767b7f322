use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use neonrun_game::GameLoop;
use neonrun_input::InputEvent;
use neonrun_kernel::GameConfig;
use neonrun_render::DebugTextRenderer;

#[derive(Parser)]
#[command(name = "neonrun-cli", about = "Headless runner for the neonrun scene")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Simulate the scene for a number of ticks at 60 Hz
    Run {
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "120")]
        ticks: u64,
        /// Keys held from the first tick, comma separated (e.g. w,d)
        #[arg(short, long, value_delimiter = ',')]
        keys: Vec<String>,
        /// Release all held keys at this tick
        #[arg(long)]
        release_at: Option<u64>,
        /// YAML config file; built-in defaults when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Shake the camera with this intensity for half a second at start
        #[arg(long)]
        shake: Option<f32>,
        /// Damage dealt to the nearest enemy every `hit_every` ticks
        #[arg(long, default_value = "0")]
        damage: u32,
        #[arg(long, default_value = "60")]
        hit_every: u64,
        /// Print every n-th frame (0 prints only the last)
        #[arg(long, default_value = "0")]
        print_every: u64,
        /// Print a JSON summary instead of the last frame
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration as YAML
    Config {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

const FRAME_MS: f64 = 1000.0 / 60.0;

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<GameConfig> {
    match path {
        Some(p) => GameConfig::load(p).with_context(|| format!("reading {}", p.display())),
        None => Ok(GameConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("neonrun-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("render: {}", neonrun_render::crate_info());
            println!("input: {}", neonrun_input::crate_info());
            let config = GameConfig::default();
            println!(
                "defaults: {} enemies, attack range {}, detection range {}",
                config.spawns.len(),
                config.enemy.attack_range,
                config.enemy.detection_range
            );
        }
        Commands::Run {
            ticks,
            keys,
            release_at,
            config,
            shake,
            damage,
            hit_every,
            print_every,
            json,
        } => {
            let config = load_config(config.as_ref())?;
            let mut game = GameLoop::new(&config, DebugTextRenderer::new(), 0.0)?;

            for key in &keys {
                game.handle_input(&InputEvent::KeyDown(key.clone()));
            }
            if let Some(intensity) = shake {
                game.shake_camera(intensity, 0.5);
            }

            let mut last_frame = String::new();
            for tick in 1..=ticks {
                if release_at == Some(tick) {
                    for key in &keys {
                        game.handle_input(&InputEvent::KeyUp(key.clone()));
                    }
                }
                if damage > 0 && hit_every > 0 && tick % hit_every == 0 {
                    let player = game.world().player().position;
                    if let Some(id) = game.world().nearest_enemy(player).map(|e| e.id()) {
                        let remaining = game.damage_enemy(id, damage)?;
                        tracing::info!("hit enemy {} for {damage}, {remaining} left", id.short());
                    }
                }

                let Some(frame) = game.tick(tick as f64 * FRAME_MS) else {
                    break;
                };
                if print_every > 0 && tick % print_every == 0 && !json {
                    print!("{frame}");
                }
                last_frame = frame;
            }
            game.stop();

            if json {
                let world = game.world();
                let player = world.player().position;
                let enemies: Vec<_> = world
                    .active_enemies()
                    .map(|e| {
                        serde_json::json!({
                            "id": e.id().short(),
                            "behavior": e.behavior().to_string(),
                            "position": [e.position().x, e.position().y, e.position().z],
                            "health": e.health().current(),
                            "waypoint": e.waypoint_index(),
                        })
                    })
                    .collect();
                let summary = serde_json::json!({
                    "tick": world.tick(),
                    "fps": game.hud().fps(),
                    "player": [player.x, player.y, player.z],
                    "camera": {
                        "eye": [game.camera().eye().x, game.camera().eye().y, game.camera().eye().z],
                        "look_at": [game.camera().look_at().x, game.camera().look_at().y, game.camera().look_at().z],
                    },
                    "enemies": enemies,
                });
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else if print_every == 0 {
                print!("{last_frame}");
            }
        }
        Commands::Config { config } => {
            let config = load_config(config.as_ref())?;
            print!("{}", config.to_yaml()?);
        }
    }

    Ok(())
}
