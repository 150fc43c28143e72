// src/spawner/plugin.rs
//! Spawner wiring.
//! - `SpawnerConfig` (inserted by the host before this plugin, defaults otherwise)
//! - Startup: RNG seed, controller entity + pool
//! - Update: game-flow requests, then the spawn clock

use bevy::prelude::*;

use super::components::SpawnerCommand;
use super::config::SpawnerConfig;
use super::controller::EnemySpawner;
use super::systems::{apply_spawner_commands, init_spawner, seed_spawn_rng, tick_spawn_timer};

/// Ordering handle for systems that talk to the spawner.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum SpawnerSet {
    Commands,
    Clock,
}

pub struct SpawnerPlugin;

impl Plugin for SpawnerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpawnerConfig>()
            .init_resource::<EnemySpawner>()
            .add_event::<SpawnerCommand>()
            .configure_sets(Update, (SpawnerSet::Commands, SpawnerSet::Clock).chain())
            .add_systems(Startup, (seed_spawn_rng, init_spawner))
            .add_systems(Update, apply_spawner_commands.in_set(SpawnerSet::Commands))
            .add_systems(Update, tick_spawn_timer.in_set(SpawnerSet::Clock));
    }
}
