// src/spawner/systems.rs

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::enemy::{Enemy, Inactive};
use crate::setup::{Ground, Player};
use super::components::{SpawnController, SpawnRng, SpawnerCommand};
use super::config::SpawnerConfig;
use super::controller::{EnemySpawner, SpawnScene, SpawnerError};
use super::pool::{Pool, PoolHooks};

/// Pool whose instances live as hidden children of `controller` while free.
pub(crate) fn enemy_pool(controller: Entity, config: &SpawnerConfig) -> Pool<Entity> {
    let hooks = PoolHooks::new(move |commands: &mut Commands| {
        commands
            .spawn((
                Name::new("Enemy"),
                Enemy,
                Inactive,
                Transform::default(),
                Visibility::Hidden,
                ChildOf(controller),
            ))
            .id()
    })
    .on_get(|commands, enemy| {
        commands.entity(enemy).remove::<Inactive>().insert(Visibility::Inherited);
    })
    .on_release(|commands, enemy| {
        commands.entity(enemy).insert((Inactive, Visibility::Hidden));
    })
    .on_destroy(|commands, enemy| {
        commands.entity(enemy).despawn();
    });

    Pool::new(hooks, config.pool_limits())
}

/// Startup: seed the spawn RNG from config (or the OS).
pub fn seed_spawn_rng(mut commands: Commands, config: Res<SpawnerConfig>) {
    let rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };
    commands.insert_resource(SpawnRng(rng));
}

/// Startup: create the controller entity and hand the pool to the spawner.
pub fn init_spawner(
    mut commands: Commands,
    config: Res<SpawnerConfig>,
    mut spawner: ResMut<EnemySpawner>,
) -> Result {
    // main validates the file; this also covers configs inserted in code
    config.validate()?;
    let controller = commands
        .spawn((
            Name::new("Enemy Spawner"),
            SpawnController,
            Transform::default(),
            Visibility::default(),
        ))
        .id();

    spawner.initialize(controller, enemy_pool(controller, &config), &config)?;
    info!(
        "Spawner: pool ready (default {}, max {}), {} opening enemies, one every {:.1}s, sizes {}..={}",
        config.pool_default_size,
        config.pool_max_size,
        config.initial_enemies,
        config.spawn_delay_secs,
        config.min_enemy_size,
        config.max_enemy_size,
    );
    Ok(())
}

fn scene_snapshot(
    ground: &Query<&Transform, With<Ground>>,
    player: &Query<Entity, With<Player>>,
) -> Result<SpawnScene, SpawnerError> {
    let ground = ground.single().map_err(|_| SpawnerError::NoGround)?;
    let follow_target = player.single().map_err(|_| SpawnerError::NoFollowTarget)?;
    Ok(SpawnScene { ground_scale: ground.scale, follow_target })
}

/// Update: apply queued game-flow requests.
pub fn apply_spawner_commands(
    mut requests: EventReader<SpawnerCommand>,
    mut commands: Commands,
    mut spawner: ResMut<EnemySpawner>,
    mut rng: ResMut<SpawnRng>,
    ground: Query<&Transform, With<Ground>>,
    player: Query<Entity, With<Player>>,
) -> Result {
    for request in requests.read() {
        match *request {
            SpawnerCommand::StartGame => {
                let scene = scene_snapshot(&ground, &player)?;
                spawner.on_game_start(&mut commands, &mut rng.0, &scene)?;
            }
            SpawnerCommand::StartSpawning => {
                if spawner.start_spawning()? {
                    info!("Spawner: spawning started");
                }
            }
            SpawnerCommand::StopSpawning => {
                if spawner.stop_spawning()? {
                    info!("Spawner: spawning stopped");
                }
            }
            SpawnerCommand::ReleaseAll => {
                let n = spawner.release_all(&mut commands)?;
                debug!("Spawner: released {n} enemies");
            }
            SpawnerCommand::Release(enemy) => match spawner.release(&mut commands, enemy) {
                Ok(_) => {}
                Err(SpawnerError::Pool(e)) => warn!("Spawner: ignoring release of {enemy}: {e}"),
                Err(e) => return Err(e.into()),
            },
        }
    }
    Ok(())
}

/// Update: advance the spawn clock and spawn whatever fell due this frame.
pub fn tick_spawn_timer(
    time: Res<Time>,
    mut commands: Commands,
    mut spawner: ResMut<EnemySpawner>,
    mut rng: ResMut<SpawnRng>,
    ground: Query<&Transform, With<Ground>>,
    player: Query<Entity, With<Player>>,
) -> Result {
    if !spawner.is_spawning() {
        return Ok(());
    }
    let due = spawner.tick(time.delta())?;
    if due == 0 {
        return Ok(());
    }

    let scene = scene_snapshot(&ground, &player)?;
    for _ in 0..due {
        spawner.spawn_one(&mut commands, &mut rng.0, &scene)?;
    }
    Ok(())
}
