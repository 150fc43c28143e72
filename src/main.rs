use bevy::prelude::*;

mod actions;
mod enemy;
mod input;
mod setup;
mod spawner;
mod state;
mod ui;

use enemy::dress_new_enemies;
use input::GameFlowPlugin;
use spawner::{config_path, ConfigError, SpawnerConfig, SpawnerPlugin};
use state::GameState;
use ui::{
    despawn_overlay, spawn_pause_overlay, spawn_pool_hud, spawn_title_overlay, update_pool_hud,
    PauseOverlay, TitleOverlay,
};

fn main() -> Result<(), ConfigError> {
    // Tuning is fixed for the session; a broken file stops us before a window opens.
    let config = SpawnerConfig::load(&config_path())?;

    App::new()
        .add_plugins(DefaultPlugins)
        .insert_resource(config)
        // spawner: pool, clock, start/stop/reset requests
        .add_plugins(SpawnerPlugin)
        // keyboard -> game state -> spawner requests
        .add_plugins(GameFlowPlugin)
        // camera, light, ground, player
        .add_systems(Startup, (setup::setup, spawn_pool_hud))
        // overlays
        .add_systems(OnEnter(GameState::Title), spawn_title_overlay)
        .add_systems(OnExit(GameState::Title), despawn_overlay::<TitleOverlay>)
        .add_systems(OnEnter(GameState::Paused), spawn_pause_overlay)
        .add_systems(OnExit(GameState::Paused), despawn_overlay::<PauseOverlay>)
        .add_systems(Update, (dress_new_enemies, update_pool_hud))
        .run();

    Ok(())
}
