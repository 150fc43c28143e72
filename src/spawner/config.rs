// src/spawner/config.rs
//! Session-static spawner tuning, read from a `.ron` file at startup.

use bevy::prelude::*;
use serde::Deserialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::pool::PoolLimits;

pub const DEFAULT_CONFIG_PATH: &str = "assets/config/spawner.ron";
/// Overrides `DEFAULT_CONFIG_PATH` when set.
pub const CONFIG_PATH_ENV: &str = "ENEMY_FIELD_CONFIG";
/// Upper bound for `pool_max_size`; the free list reserves up to this many slots.
pub const POOL_SIZE_LIMIT: usize = 4096;

#[derive(Resource, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpawnerConfig {
    /// Enemies placed immediately when a game starts.
    pub initial_enemies: u32,
    /// Seconds between periodic spawns.
    pub spawn_delay_secs: f32,
    /// Free-list capacity reserved up front.
    pub pool_default_size: usize,
    /// Most inactive enemies kept around for reuse.
    pub pool_max_size: usize,
    pub min_enemy_size: f32,
    pub max_enemy_size: f32,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            initial_enemies: 5,
            spawn_delay_secs: 5.0,
            pool_default_size: 10,
            pool_max_size: 20,
            min_enemy_size: 0.5,
            max_enemy_size: 1.5,
            seed: None,
        }
    }
}

impl SpawnerConfig {
    /// Read from `path`; a missing file yields the defaults.
    /// Plain file I/O rather than an asset loader: the values are needed
    /// before the `App` exists so a bad file can stop startup.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_ron(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::de::from_str(text).map_err(|e| ConfigError::Ron(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let delay = self.spawn_delay_secs;
        if !(delay > 0.0 && Duration::try_from_secs_f32(delay).is_ok()) {
            return Err(ConfigError::SpawnDelay(delay));
        }
        let (min, max) = (self.min_enemy_size, self.max_enemy_size);
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(ConfigError::SizeRange { min, max });
        }
        if self.pool_max_size == 0
            || self.pool_max_size > POOL_SIZE_LIMIT
            || self.pool_default_size > self.pool_max_size
        {
            return Err(ConfigError::PoolLimits {
                default: self.pool_default_size,
                max: self.pool_max_size,
            });
        }
        Ok(())
    }

    /// Only meaningful once `validate` has passed.
    pub fn spawn_interval(&self) -> Duration {
        Duration::from_secs_f32(self.spawn_delay_secs)
    }

    pub fn pool_limits(&self) -> PoolLimits {
        PoolLimits {
            default_capacity: self.pool_default_size,
            max_size: self.pool_max_size,
        }
    }
}

/// `$ENEMY_FIELD_CONFIG`, else `assets/config/spawner.ron`.
pub fn config_path() -> PathBuf {
    resolve_config_path(std::env::var_os(CONFIG_PATH_ENV))
}

fn resolve_config_path(overridden: Option<OsString>) -> PathBuf {
    overridden
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

// ---------- Errors ----------

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("I/O while reading spawner config: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(String),
    #[error("spawn_delay_secs must be a positive, representable number of seconds, got {0}")]
    SpawnDelay(f32),
    #[error("enemy sizes must be finite and positive with min <= max: min {min}, max {max}")]
    SizeRange { min: f32, max: f32 },
    #[error("pool sizes invalid: default {default} must not exceed max {max}, and max must be in 1..={limit}", limit = POOL_SIZE_LIMIT)]
    PoolLimits { default: usize, max: usize },
}
