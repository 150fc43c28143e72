// src/spawner/placement.rs
//! Where and how big a freshly activated enemy is.

use bevy::prelude::*;
use rand::Rng;
use std::ops::Range;

/// Whole-unit heights; upper bound exclusive.
pub const SPAWN_HEIGHTS: Range<i32> = 1..25;

/// Uniform point over the ground footprint, centred on the spawner.
/// `ground_scale.x` / `.z` are the footprint's width / depth.
pub fn spawn_position(rng: &mut impl Rng, ground_scale: Vec3) -> Vec3 {
    let half_w = ground_scale.x.abs() * 0.5;
    let half_d = ground_scale.z.abs() * 0.5;

    Vec3::new(
        rng.random_range(-half_w..=half_w),
        rng.random_range(SPAWN_HEIGHTS) as f32,
        rng.random_range(-half_d..=half_d),
    )
}

/// Uniform size in `[min, max]`. Callers keep `min <= max` (the config validates it).
#[inline]
pub fn spawn_scale(rng: &mut impl Rng, min: f32, max: f32) -> f32 {
    rng.random_range(min..=max)
}
