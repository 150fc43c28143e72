// src/state.rs
use bevy::prelude::*;

#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Waiting for the player to start a run.
    #[default]
    Title,
    Running,
    Paused,
}
