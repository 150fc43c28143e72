use bevy::prelude::*;

use crate::enemy::EnemyVisuals;

/// Ground footprint (X width, Z depth), applied as the ground's scale.
pub const GROUND_SIZE: Vec2 = Vec2::new(40.0, 30.0);

/// The spawn footprint. Its `Transform::scale` X/Z are the width/depth enemies spawn over.
#[derive(Component)]
pub struct Ground;

/// What enemies follow.
#[derive(Component)]
pub struct Player;

pub fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // 1) Light
    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(8.0, 30.0, 12.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // 2) Camera
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 38.0, 42.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // 3) Ground: a unit plane scaled out to the footprint
    commands.spawn((
        Name::new("Ground"),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(1.0, 1.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(88, 120, 72),
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::from_scale(Vec3::new(GROUND_SIZE.x, 1.0, GROUND_SIZE.y)),
        Ground,
    ));

    // 4) Player capsule
    commands.spawn((
        Name::new("Player"),
        Mesh3d(meshes.add(Capsule3d::new(0.4, 1.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(124, 144, 255),
            ..default()
        })),
        Transform::from_xyz(0.0, 0.9, 0.0),
        Player,
    ));

    // 5) Shared enemy look, picked up by `dress_new_enemies`
    commands.insert_resource(EnemyVisuals {
        mesh: meshes.add(Sphere::new(0.5)),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb_u8(220, 60, 50),
            ..default()
        }),
    });
}
