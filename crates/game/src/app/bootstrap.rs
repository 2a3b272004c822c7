use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tilescroll_engine::{LoopConfig, Rect, Scene, Vec2};
use tracing::info;
use tracing_subscriber::EnvFilter;

use super::config::{ConfigError, GameConfig};
use super::gameplay::{generate_tilemap, BulletSpec, GameState, TileScrollScene, WorldGenError};

pub(crate) struct AppWiring {
    pub(crate) config: LoopConfig,
    pub(crate) scene: Box<dyn Scene>,
}

#[derive(Debug, Error)]
pub(crate) enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    WorldGen(#[from] WorldGenError),
}

pub(crate) fn build_app() -> Result<AppWiring, StartupError> {
    info!("=== Tile Scroller Startup ===");

    let (game_config, config_path) = GameConfig::from_env()?;
    info!(
        path = config_path
            .as_deref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "<defaults>".to_string()),
        "config_loaded"
    );

    build_from_config(&game_config)
}

fn build_from_config(game_config: &GameConfig) -> Result<AppWiring, StartupError> {
    let world = &game_config.world;
    let seed = world.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let filled_tiles = game_config.filled_tile_count();
    let tilemap = generate_tilemap(
        world.columns,
        world.rows,
        world.tile_size as f32,
        filled_tiles,
        &mut rng,
    )?;
    info!(
        columns = world.columns,
        rows = world.rows,
        filled_tiles,
        seed,
        "world_generated"
    );

    let [spawn_x, spawn_y] = game_config.player_spawn();
    let player = Rect::new(
        spawn_x,
        spawn_y,
        game_config.player.width,
        game_config.player.height,
    );
    let bullet_spec = BulletSpec {
        size: Vec2::new(game_config.bullet.width, game_config.bullet.height),
        spawn_offset: Vec2::new(
            game_config.bullet.spawn_offset[0],
            game_config.bullet.spawn_offset[1],
        ),
    };
    let state = GameState::new(
        player,
        game_config.player.speed,
        tilemap.world_size(),
        bullet_spec,
    );

    let window = &game_config.window;
    let config = LoopConfig {
        window_title: window.title.clone(),
        window_width: window.width,
        window_height: window.height,
        max_frame_delta: window.max_frame_delta_ms.map(Duration::from_millis),
        max_render_fps: window.max_render_fps,
        ..LoopConfig::default()
    };

    Ok(AppWiring {
        config,
        scene: Box::new(TileScrollScene::new(tilemap, state)),
    })
}

pub(crate) fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}
