// src/spawner/components.rs
use bevy::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Parent of every pooled enemy.
#[derive(Component)]
pub struct SpawnController;

/// RNG behind spawn positions and sizes.
#[derive(Resource, Deref, DerefMut)]
pub struct SpawnRng(pub ChaCha8Rng);

/// Game-flow requests to the spawner. Applied in order, once per frame.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnerCommand {
    /// Release every enemy, spawn the opening batch, start the timer.
    StartGame,
    StartSpawning,
    StopSpawning,
    ReleaseAll,
    /// Return one enemy to the pool (e.g. it was killed).
    Release(Entity),
}
