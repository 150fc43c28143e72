// src/spawner/controller.rs
//! The spawner resource: pool + timer + spawn rules behind start/stop/reset.

use bevy::prelude::*;
use rand::Rng;
use std::time::Duration;

use crate::enemy;
use super::config::SpawnerConfig;
use super::placement::{spawn_position, spawn_scale};
use super::pool::{Pool, PoolError, Released};
use super::timer::SpawnTimer;

/// Scene facts a spawn reads, gathered fresh each time.
#[derive(Clone, Copy, Debug)]
pub struct SpawnScene {
    /// Ground footprint scale; X is width, Z is depth.
    pub ground_scale: Vec3,
    pub follow_target: Entity,
}

/// Owned by the `App`; systems reach it as `ResMut<EnemySpawner>`.
/// Every operation except the state queries requires `initialize` first.
#[derive(Resource, Default)]
pub struct EnemySpawner {
    runtime: Option<Runtime>,
}

struct Runtime {
    controller: Entity,
    pool: Pool<Entity>,
    timer: SpawnTimer,
    initial_enemies: u32,
    min_size: f32,
    max_size: f32,
}

impl EnemySpawner {
    /// Store the pool and spawn rules. `controller` is the entity enemies are parented to.
    pub fn initialize(
        &mut self,
        controller: Entity,
        pool: Pool<Entity>,
        config: &SpawnerConfig,
    ) -> Result<(), SpawnerError> {
        if self.runtime.is_some() {
            return Err(SpawnerError::AlreadyInitialized);
        }
        self.runtime = Some(Runtime {
            controller,
            pool,
            timer: SpawnTimer::new(config.spawn_interval()),
            initial_enemies: config.initial_enemies,
            min_size: config.min_enemy_size,
            max_size: config.max_enemy_size,
        });
        Ok(())
    }

    pub fn is_spawning(&self) -> bool {
        self.runtime.as_ref().is_some_and(|rt| rt.timer.is_running())
    }

    pub fn controller(&self) -> Result<Entity, SpawnerError> {
        Ok(self.runtime()?.controller)
    }

    pub fn pool(&self) -> Result<&Pool<Entity>, SpawnerError> {
        Ok(&self.runtime()?.pool)
    }

    /// Returns `true` if the timer was stopped before this call.
    pub fn start_spawning(&mut self) -> Result<bool, SpawnerError> {
        Ok(self.runtime_mut()?.timer.start())
    }

    /// Returns `true` if the timer was running before this call.
    pub fn stop_spawning(&mut self) -> Result<bool, SpawnerError> {
        Ok(self.runtime_mut()?.timer.stop())
    }

    /// Advance the spawn clock; returns the number of spawns now due.
    pub fn tick(&mut self, delta: Duration) -> Result<u32, SpawnerError> {
        Ok(self.runtime_mut()?.timer.tick(delta))
    }

    /// Take one enemy from the pool and re-arm it somewhere over the ground.
    pub fn spawn_one(
        &mut self,
        commands: &mut Commands,
        rng: &mut impl Rng,
        scene: &SpawnScene,
    ) -> Result<Entity, SpawnerError> {
        let rt = self.runtime_mut()?;
        let enemy = rt.pool.get(commands);

        let position = spawn_position(rng, scene.ground_scale);
        let scale = spawn_scale(rng, rt.min_size, rt.max_size);
        enemy::initialize(&mut commands.entity(enemy), position, scene.follow_target, scale);

        debug!("Spawner: enemy {enemy} at {position} scale {scale:.2}");
        Ok(enemy)
    }

    /// Return a single enemy to the pool.
    pub fn release(&mut self, commands: &mut Commands, enemy: Entity) -> Result<Released, SpawnerError> {
        let released = self.runtime_mut()?.pool.release(commands, enemy)?;
        debug!("Spawner: released enemy {enemy} ({released:?})");
        Ok(released)
    }

    /// Release every enemy still checked out. The pool's own record is the
    /// source of truth, so enemies spawned earlier in the same frame (not yet
    /// visible to queries) are included, and non-enemy children of the
    /// controller are never touched.
    pub fn release_all(&mut self, commands: &mut Commands) -> Result<usize, SpawnerError> {
        let rt = self.runtime_mut()?;
        let out: Vec<Entity> = rt.pool.active().copied().collect();
        for &enemy in &out {
            rt.pool.release(commands, enemy)?;
        }
        Ok(out.len())
    }

    /// Reset to a fresh wave: release everything, spawn the opening batch,
    /// then start the timer.
    pub fn on_game_start(
        &mut self,
        commands: &mut Commands,
        rng: &mut impl Rng,
        scene: &SpawnScene,
    ) -> Result<(), SpawnerError> {
        let released = self.release_all(commands)?;
        let initial = self.runtime()?.initial_enemies;
        for _ in 0..initial {
            self.spawn_one(commands, rng, scene)?;
        }
        self.start_spawning()?;

        info!("Spawner: game start, released {released}, spawned {initial}");
        Ok(())
    }

    fn runtime(&self) -> Result<&Runtime, SpawnerError> {
        self.runtime.as_ref().ok_or(SpawnerError::NotInitialized)
    }

    fn runtime_mut(&mut self) -> Result<&mut Runtime, SpawnerError> {
        self.runtime.as_mut().ok_or(SpawnerError::NotInitialized)
    }
}

// ---------- Errors ----------

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SpawnerError {
    #[error("enemy spawner used before its pool was initialized")]
    NotInitialized,
    #[error("enemy spawner pool is already initialized")]
    AlreadyInitialized,
    #[error("no ground footprint in the scene")]
    NoGround,
    #[error("no follow-target in the scene")]
    NoFollowTarget,
    #[error(transparent)]
    Pool(#[from] PoolError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemy::{Enemy, FollowTarget, Inactive};
    use crate::spawner::systems::enemy_pool;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    struct Fixture {
        world: World,
        spawner: EnemySpawner,
        rng: ChaCha8Rng,
        scene: SpawnScene,
        controller: Entity,
    }

    impl Fixture {
        fn new(config: SpawnerConfig) -> Self {
            let mut world = World::new();
            let controller = world.spawn(Transform::default()).id();
            let player = world.spawn_empty().id();
            let mut spawner = EnemySpawner::default();
            spawner
                .initialize(controller, enemy_pool(controller, &config), &config)
                .unwrap();
            Self {
                world,
                spawner,
                rng: ChaCha8Rng::seed_from_u64(5),
                scene: SpawnScene { ground_scale: Vec3::new(20.0, 1.0, 10.0), follow_target: player },
                controller,
            }
        }

        fn spawn(&mut self) -> Entity {
            let Self { world, spawner, rng, scene, .. } = self;
            let e = {
                let mut commands = world.commands();
                spawner.spawn_one(&mut commands, rng, scene).unwrap()
            };
            world.flush();
            e
        }

        fn release_all(&mut self) -> usize {
            let Self { world, spawner, .. } = self;
            let n = {
                let mut commands = world.commands();
                spawner.release_all(&mut commands).unwrap()
            };
            world.flush();
            n
        }

        fn game_start(&mut self) {
            let Self { world, spawner, rng, scene, .. } = self;
            {
                let mut commands = world.commands();
                spawner.on_game_start(&mut commands, rng, scene).unwrap();
            }
            world.flush();
        }

        fn active(&mut self) -> usize {
            let mut q = self.world.query_filtered::<&ChildOf, (With<Enemy>, Without<Inactive>)>();
            let controller = self.controller;
            q.iter(&self.world).filter(|c| c.parent() == controller).count()
        }
    }

    fn config() -> SpawnerConfig {
        SpawnerConfig { pool_default_size: 2, pool_max_size: 4, ..default() }
    }

    #[test]
    fn uninitialized_spawner_fails_fast() {
        let mut spawner = EnemySpawner::default();
        assert!(!spawner.is_spawning());
        assert_eq!(spawner.start_spawning(), Err(SpawnerError::NotInitialized));
        assert_eq!(spawner.stop_spawning(), Err(SpawnerError::NotInitialized));
        assert_eq!(spawner.tick(Duration::from_secs(1)), Err(SpawnerError::NotInitialized));
        assert!(spawner.pool().is_err());

        let mut world = World::new();
        let mut commands = world.commands();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let scene = SpawnScene { ground_scale: Vec3::ONE, follow_target: Entity::PLACEHOLDER };
        assert_eq!(
            spawner.spawn_one(&mut commands, &mut rng, &scene).err(),
            Some(SpawnerError::NotInitialized)
        );
    }

    #[test]
    fn initialize_twice_is_rejected() {
        let mut fx = Fixture::new(config());
        let pool = enemy_pool(fx.controller, &config());
        assert_eq!(
            fx.spawner.initialize(fx.controller, pool, &config()),
            Err(SpawnerError::AlreadyInitialized)
        );
    }

    #[test]
    fn spawned_enemy_is_initialized_within_bounds() {
        let mut fx = Fixture::new(SpawnerConfig { min_enemy_size: 0.5, max_enemy_size: 1.5, ..config() });
        for _ in 0..50 {
            let e = fx.spawn();
            let tf = fx.world.get::<Transform>(e).unwrap();
            let p = tf.translation;
            assert!(p.x.abs() <= 10.0 && p.z.abs() <= 5.0, "{p}");
            assert!((1.0..=25.0).contains(&p.y));
            assert!((0.5..=1.5).contains(&tf.scale.x));
            assert_eq!(tf.scale.x, tf.scale.z);
            assert_eq!(fx.world.get::<FollowTarget>(e), Some(&FollowTarget(fx.scene.follow_target)));
            assert!(fx.world.get::<Inactive>(e).is_none());
            assert_eq!(fx.world.get::<ChildOf>(e).map(|c| c.parent()), Some(fx.controller));
        }
    }

    #[test]
    fn release_then_spawn_reuses_instance() {
        let mut fx = Fixture::new(config());
        let first = fx.spawn();
        assert_eq!(fx.release_all(), 1);
        assert!(fx.world.get::<Inactive>(first).is_some());

        let second = fx.spawn();
        assert_eq!(first, second);
        assert_eq!(fx.spawner.pool().unwrap().count_all(), 1);
    }

    #[test]
    fn release_all_leaves_other_children_alone() {
        let mut fx = Fixture::new(config());
        for _ in 0..3 {
            fx.spawn();
        }
        let bystander = fx.world.spawn(ChildOf(fx.controller)).id();
        let stray = fx.world.spawn(Enemy).id();

        assert_eq!(fx.release_all(), 3);
        assert_eq!(fx.active(), 0);
        assert!(fx.world.get::<Inactive>(bystander).is_none());
        assert!(fx.world.get::<Inactive>(stray).is_none());

        // nothing left to release
        assert_eq!(fx.release_all(), 0);
    }

    #[test]
    fn release_single_twice_reports_pool_error() {
        let mut fx = Fixture::new(config());
        let e = fx.spawn();
        let mut commands = fx.world.commands();
        assert_eq!(fx.spawner.release(&mut commands, e), Ok(Released::Pooled));
        assert_eq!(
            fx.spawner.release(&mut commands, e),
            Err(SpawnerError::Pool(PoolError::NotCheckedOut))
        );
    }

    #[test]
    fn game_start_resets_to_initial_count() {
        let mut fx = Fixture::new(SpawnerConfig { initial_enemies: 5, ..config() });

        fx.game_start();
        assert_eq!(fx.active(), 5);
        assert!(fx.spawner.is_spawning());

        fx.spawn();
        fx.spawn();
        assert_eq!(fx.active(), 7);

        fx.game_start();
        assert_eq!(fx.active(), 5);
        assert!(fx.spawner.is_spawning());
        // 7 released into a free list of 4: three were destroyed
        let pool = fx.spawner.pool().unwrap();
        assert_eq!((pool.count_active(), pool.count_all()), (5, 5));
    }
}
