use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

pub(crate) const CONFIG_PATH_ENV_VAR: &str = "TILESCROLL_CONFIG";
pub(crate) const SEED_ENV_VAR: &str = "TILESCROLL_SEED";

/// One wall tile per this many tiles when `filled_tiles` is not set.
const DEFAULT_FILL_DIVISOR: usize = 20;

/// Largest grid accepted. World generation holds one index per tile.
const MAX_TILE_COUNT: usize = 1 << 24;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct WorldSection {
    pub(crate) tile_size: u32,
    pub(crate) columns: u32,
    pub(crate) rows: u32,
    pub(crate) filled_tiles: Option<usize>,
    pub(crate) seed: Option<u64>,
}

impl Default for WorldSection {
    fn default() -> Self {
        Self {
            tile_size: 20,
            columns: 500,
            rows: 500,
            filled_tiles: None,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct PlayerSection {
    pub(crate) width: f32,
    pub(crate) height: f32,
    /// Units per second along each held axis.
    pub(crate) speed: f32,
    /// Top-left spawn position; the world center when omitted.
    pub(crate) spawn: Option<[f32; 2]>,
}

impl Default for PlayerSection {
    fn default() -> Self {
        Self {
            width: 20.0,
            height: 20.0,
            speed: 400.0,
            spawn: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct BulletSection {
    pub(crate) width: f32,
    pub(crate) height: f32,
    pub(crate) spawn_offset: [f32; 2],
}

impl Default for BulletSection {
    fn default() -> Self {
        Self {
            width: 5.0,
            height: 20.0,
            spawn_offset: [20.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct WindowSection {
    pub(crate) title: String,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) max_render_fps: Option<u32>,
    pub(crate) max_frame_delta_ms: Option<u64>,
}

impl Default for WindowSection {
    fn default() -> Self {
        Self {
            title: "Tile Scroller".to_string(),
            width: 800,
            height: 800,
            max_render_fps: None,
            max_frame_delta_ms: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct GameConfig {
    pub(crate) world: WorldSection,
    pub(crate) player: PlayerSection,
    pub(crate) bullet: BulletSection,
    pub(crate) window: WindowSection,
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config '{path}'{location}: {source}")]
    Parse {
        path: PathBuf,
        location: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid argument: {field} {reason}")]
    InvalidArgument { field: &'static str, reason: String },
}

impl GameConfig {
    /// Defaults, overlaid by the JSON file named in `TILESCROLL_CONFIG` and the
    /// seed in `TILESCROLL_SEED`, then validated.
    pub(crate) fn from_env() -> Result<(Self, Option<PathBuf>), ConfigError> {
        let path = env::var_os(CONFIG_PATH_ENV_VAR).map(PathBuf::from);
        let mut config = match &path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };
        if let Some(seed) = seed_from_env() {
            config.world.seed = Some(seed);
        }
        config.validate()?;
        Ok((config, path))
    }

    pub(crate) fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_json(&raw).map_err(|(location, source)| ConfigError::Parse {
            path: path.to_path_buf(),
            location,
            source,
        })
    }

    fn parse_json(raw: &str) -> Result<Self, (String, serde_json::Error)> {
        let mut deserializer = serde_json::Deserializer::from_str(raw);
        serde_path_to_error::deserialize::<_, GameConfig>(&mut deserializer).map_err(|error| {
            let path = error.path().to_string();
            let location = if path.is_empty() || path == "." {
                String::new()
            } else {
                format!(" at {path}")
            };
            (location, error.into_inner())
        })
    }

    pub(crate) fn tile_count(&self) -> usize {
        self.world.columns as usize * self.world.rows as usize
    }

    pub(crate) fn filled_tile_count(&self) -> usize {
        self.world
            .filled_tiles
            .unwrap_or(self.tile_count() / DEFAULT_FILL_DIVISOR)
    }

    pub(crate) fn world_width(&self) -> f32 {
        self.world.columns as f32 * self.world.tile_size as f32
    }

    pub(crate) fn world_height(&self) -> f32 {
        self.world.rows as f32 * self.world.tile_size as f32
    }

    pub(crate) fn player_spawn(&self) -> [f32; 2] {
        self.player.spawn.unwrap_or([
            (self.world.columns * self.world.tile_size / 2) as f32,
            (self.world.rows * self.world.tile_size / 2) as f32,
        ])
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.world.tile_size == 0 {
            return Err(invalid("world.tile_size", "must be positive"));
        }
        if self.world.columns == 0 || self.world.rows == 0 {
            return Err(invalid(
                "world.columns/world.rows",
                format!(
                    "must both be positive, got {}x{}",
                    self.world.columns, self.world.rows
                ),
            ));
        }
        if self
            .world
            .columns
            .checked_mul(self.world.tile_size)
            .and_then(|_| self.world.rows.checked_mul(self.world.tile_size))
            .is_none()
        {
            return Err(invalid("world", "extent overflows u32 units"));
        }
        if self.tile_count() > MAX_TILE_COUNT {
            return Err(invalid(
                "world.columns/world.rows",
                format!(
                    "{}x{} is {} tiles, more than {MAX_TILE_COUNT}",
                    self.world.columns,
                    self.world.rows,
                    self.tile_count()
                ),
            ));
        }
        if self.filled_tile_count() > self.tile_count() {
            return Err(invalid(
                "world.filled_tiles",
                format!(
                    "{} exceeds tile count {}",
                    self.filled_tile_count(),
                    self.tile_count()
                ),
            ));
        }

        ensure_positive("player.width", self.player.width)?;
        ensure_positive("player.height", self.player.height)?;
        if self.player.width > self.world_width() || self.player.height > self.world_height() {
            return Err(invalid("player", "is larger than the world"));
        }
        if !self.player.speed.is_finite() || self.player.speed < 0.0 {
            return Err(invalid(
                "player.speed",
                format!("must be finite and non-negative, got {}", self.player.speed),
            ));
        }
        let [spawn_x, spawn_y] = self.player_spawn();
        let max_x = self.world_width() - self.player.width;
        let max_y = self.world_height() - self.player.height;
        if !(0.0..=max_x).contains(&spawn_x) || !(0.0..=max_y).contains(&spawn_y) {
            return Err(invalid(
                "player.spawn",
                format!("({spawn_x}, {spawn_y}) is outside (0..={max_x}, 0..={max_y})"),
            ));
        }

        ensure_positive("bullet.width", self.bullet.width)?;
        ensure_positive("bullet.height", self.bullet.height)?;
        if !self.bullet.spawn_offset.iter().all(|value| value.is_finite()) {
            return Err(invalid("bullet.spawn_offset", "must be finite"));
        }

        if self.window.width == 0 || self.window.height == 0 {
            return Err(invalid("window.width/window.height", "must both be positive"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidArgument {
        field,
        reason: reason.into(),
    }
}

fn ensure_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be positive and finite, got {value}")))
    }
}

fn seed_from_env() -> Option<u64> {
    match env::var(SEED_ENV_VAR) {
        Ok(value) => match value.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                warn!(
                    env_var = SEED_ENV_VAR,
                    value = value.as_str(),
                    "invalid seed env var value; falling back to config"
                );
                None
            }
        },
        Err(env::VarError::NotPresent) => None,
        Err(err) => {
            warn!(
                env_var = SEED_ENV_VAR,
                error = %err,
                "unable to read seed env var; falling back to config"
            );
            None
        }
    }
}
