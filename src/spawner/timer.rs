// src/spawner/timer.rs
use bevy::prelude::*;
use std::time::Duration;

/// Repeating spawn clock. There is exactly one per spawner; starting it twice
/// or stopping it twice changes nothing.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    timer: Timer,
    running: bool,
}

impl SpawnTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            timer: Timer::new(interval, TimerMode::Repeating),
            running: false,
        }
    }

    /// Returns `true` if the clock was stopped and is now running.
    /// A fresh start waits one full interval before the first spawn.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.timer.reset();
        self.running = true;
        true
    }

    /// Returns `true` if the clock was running and is now stopped.
    pub fn stop(&mut self) -> bool {
        std::mem::replace(&mut self.running, false)
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance by one frame; returns how many spawns fell due.
    pub fn tick(&mut self, delta: Duration) -> u32 {
        if !self.running {
            return 0;
        }
        self.timer.tick(delta);
        self.timer.times_finished_this_tick()
    }
}
