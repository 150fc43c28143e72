// src/spawner/mod.rs

pub mod components;
pub mod config;
pub mod controller;
pub mod placement;
pub mod plugin;
pub mod pool;
pub mod systems;
pub mod timer;

pub use components::SpawnerCommand;
pub use config::{config_path, ConfigError, SpawnerConfig};
pub use controller::EnemySpawner;
pub use plugin::{SpawnerPlugin, SpawnerSet};
