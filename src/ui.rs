use bevy::prelude::*;
use bevy::ui::BackgroundColor;

use crate::spawner::EnemySpawner;

#[derive(Component)]
pub struct TitleOverlay;

#[derive(Component)]
pub struct PauseOverlay;

/// Corner readout of the enemy pool.
#[derive(Component)]
pub struct PoolHud;

fn spawn_overlay(commands: &mut Commands, label: &str, marker: impl Component) {
    commands
        .spawn((
            // Fullscreen transparent overlay node
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::linear_rgba(0.0, 0.0, 0.0, 0.7)),
            marker,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(label),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextLayout::new_with_justify(JustifyText::Center),
                TextColor(Color::WHITE),
            ));
        });
}

pub fn spawn_title_overlay(mut commands: Commands) {
    spawn_overlay(&mut commands, "Press Enter to start", TitleOverlay);
}

pub fn spawn_pause_overlay(mut commands: Commands) {
    spawn_overlay(&mut commands, "Paused", PauseOverlay);
}

pub fn despawn_overlay<T: Component>(
    mut commands: Commands,
    query: Query<Entity, With<T>>,
) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}

pub fn spawn_pool_hud(mut commands: Commands) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
        Text::new(""),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(Color::WHITE),
        PoolHud,
    ));
}

pub fn update_pool_hud(
    spawner: Res<EnemySpawner>,
    mut hud: Query<&mut Text, With<PoolHud>>,
) {
    if !spawner.is_changed() {
        return;
    }
    let Ok(pool) = spawner.pool() else { return };
    let Ok(mut text) = hud.single_mut() else { return };

    text.0 = format!(
        "enemies {} | pooled {}/{} | alive {} | {}",
        pool.count_active(),
        pool.count_inactive(),
        pool.limits().max_size,
        pool.count_all(),
        if spawner.is_spawning() { "spawning" } else { "stopped" },
    );
}
