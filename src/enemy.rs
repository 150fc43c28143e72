// src/enemy.rs
use bevy::prelude::*;

/// Tag carried by every pooled enemy, active or not.
#[derive(Component)]
pub struct Enemy;

/// Present while an enemy sits in the pool. Such enemies are hidden and
/// must be skipped by anything that moves or positions enemies.
#[derive(Component)]
pub struct Inactive;

/// The entity an enemy tracks.
#[derive(Component, Deref, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FollowTarget(pub Entity);

/// Shared look for every enemy body.
#[derive(Resource, Clone)]
pub struct EnemyVisuals {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

/// Re-arm an enemy that was just taken out of the pool.
pub fn initialize(enemy: &mut EntityCommands, position: Vec3, follow_target: Entity, scale: f32) {
    enemy.insert((
        Transform {
            translation: position,
            scale: Vec3::splat(scale),
            ..default()
        },
        FollowTarget(follow_target),
    ));
}

/// Gives newly created enemies a body. Pool reuse keeps the mesh, so this
/// only runs once per entity.
pub fn dress_new_enemies(
    mut commands: Commands,
    visuals: Option<Res<EnemyVisuals>>,
    fresh: Query<Entity, Added<Enemy>>,
) {
    let Some(visuals) = visuals else { return };
    for e in &fresh {
        commands
            .entity(e)
            .insert((Mesh3d(visuals.mesh.clone()), MeshMaterial3d(visuals.material.clone())));
    }
}
