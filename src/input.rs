use bevy::prelude::*;
use bevy::input::{keyboard::KeyCode, ButtonInput};

use crate::actions::{ActionState, PlayerAction};
use crate::setup::{Ground, Player};
use crate::spawner::{SpawnerCommand, SpawnerSet};
use crate::state::GameState;

pub const PLAYER_SPEED: f32 = 12.0;
pub const MAX_PLAYER_DT: f32 = 0.05; // never use a dt larger than 50ms

/// Keyboard -> actions -> game state + spawner requests.
pub struct GameFlowPlugin;

impl Plugin for GameFlowPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActionState>()
            .init_state::<GameState>()
            .add_systems(OnEnter(GameState::Paused), stop_spawning_on_pause)
            .add_systems(OnExit(GameState::Paused), resume_spawning_on_unpause)
            .add_systems(
                Update,
                (input_mapping_system, (game_flow_system, pause_toggle_system))
                    .chain()
                    .before(SpawnerSet::Commands),
            )
            .add_systems(
                Update,
                player_movement
                    .after(input_mapping_system)
                    .run_if(in_state(GameState::Running)),
            );
    }
}

pub fn input_mapping_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut action_state: ResMut<ActionState>,
) {
    action_state.set(PlayerAction::MoveForward, keys.pressed(KeyCode::KeyW));
    action_state.set(PlayerAction::MoveBackward, keys.pressed(KeyCode::KeyS));
    action_state.set(PlayerAction::MoveLeft, keys.pressed(KeyCode::KeyA));
    action_state.set(PlayerAction::MoveRight, keys.pressed(KeyCode::KeyD));
    action_state.set(PlayerAction::StartGame, keys.pressed(KeyCode::Enter));
    action_state.set(PlayerAction::Restart, keys.pressed(KeyCode::KeyR));
    action_state.set(PlayerAction::TogglePause, keys.pressed(KeyCode::Escape));
}

/// Title + Enter starts a run; R during a run resets it.
pub fn game_flow_system(
    actions: Res<ActionState>,
    current_state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut spawner: EventWriter<SpawnerCommand>,
) {
    match current_state.get() {
        GameState::Title if actions.just_pressed(PlayerAction::StartGame) => {
            spawner.write(SpawnerCommand::StartGame);
            next_state.set(GameState::Running);
            info!("Started game");
        }
        GameState::Running if actions.just_pressed(PlayerAction::Restart) => {
            spawner.write(SpawnerCommand::StartGame);
            info!("Restarted game");
        }
        _ => {}
    }
}

pub fn pause_toggle_system(
    actions: Res<ActionState>,
    mut next_state: ResMut<NextState<GameState>>,
    current_state: Res<State<GameState>>,
) {
    if actions.just_pressed(PlayerAction::TogglePause) {
        if current_state.get() == &GameState::Running {
            next_state.set(GameState::Paused);
            info!("Paused game");
        } else if current_state.get() == &GameState::Paused {
            next_state.set(GameState::Running);
            info!("Resumed game");
        }
    }
}

pub fn stop_spawning_on_pause(mut spawner: EventWriter<SpawnerCommand>) {
    spawner.write(SpawnerCommand::StopSpawning);
}

pub fn resume_spawning_on_unpause(mut spawner: EventWriter<SpawnerCommand>) {
    spawner.write(SpawnerCommand::StartSpawning);
}

/// WASD over the ground, kept inside its footprint.
pub fn player_movement(
    time: Res<Time>,
    action_state: Res<ActionState>,
    ground: Query<&Transform, (With<Ground>, Without<Player>)>,
    mut player: Query<&mut Transform, With<Player>>,
) {
    let dt = time.delta_secs().min(MAX_PLAYER_DT);
    let Ok(mut tf) = player.single_mut() else { return; };

    let axis = action_state.move_axis();
    if axis == Vec2::ZERO {
        return;
    }
    tf.translation.x += axis.x * PLAYER_SPEED * dt;
    tf.translation.z -= axis.y * PLAYER_SPEED * dt;

    if let Ok(ground) = ground.single() {
        let half = Vec2::new(ground.scale.x.abs(), ground.scale.z.abs()) * 0.5;
        tf.translation.x = tf.translation.x.clamp(-half.x, half.x);
        tf.translation.z = tf.translation.z.clamp(-half.y, half.y);
    }
}
