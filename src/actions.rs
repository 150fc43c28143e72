use bevy::prelude::*;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,
    StartGame,
    Restart,
    TogglePause,
}

/// Held state plus edge-triggered presses for the current frame.
#[derive(Default, Resource)]
pub struct ActionState {
    pressed: HashMap<PlayerAction, bool>,
    just_pressed: HashSet<PlayerAction>,
}

impl ActionState {
    pub fn set(&mut self, action: PlayerAction, is_pressed: bool) {
        let was = self.pressed(action);
        if is_pressed && !was {
            self.just_pressed.insert(action);
        } else {
            self.just_pressed.remove(&action);
        }
        self.pressed.insert(action, is_pressed);
    }

    pub fn pressed(&self, action: PlayerAction) -> bool {
        *self.pressed.get(&action).unwrap_or(&false)
    }

    pub fn just_pressed(&self, action: PlayerAction) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Unit vector (or zero) on the ground plane from the held move keys.
    /// X is right, Y is forward (world -Z).
    pub fn move_axis(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.pressed(PlayerAction::MoveForward) { dir.y += 1.0; }
        if self.pressed(PlayerAction::MoveBackward) { dir.y -= 1.0; }
        if self.pressed(PlayerAction::MoveLeft) { dir.x -= 1.0; }
        if self.pressed(PlayerAction::MoveRight) { dir.x += 1.0; }
        dir.normalize_or_zero()
    }
}
