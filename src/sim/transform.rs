//! Arena space <-> world space conversion
//!
//! Arena space puts the origin at a corner of the 40x40 footprint with z
//! pointing north. World space centers the footprint on the origin and flips
//! the depth axis. Omitted values (and negative horizontal coordinates) are
//! replaced with uniform random draws from the shared RNG.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use crate::arena::{Color, Vector3};
use crate::consts::{ARENA_HALF, ARENA_SIZE};
use crate::{degrees_to_world, world_to_degrees};

/// Arena position to world position, lifted by `offset_y`
pub fn to_world<R: Rng + ?Sized>(pos: Option<Vector3>, offset_y: f32, rng: &mut R) -> Vec3 {
    match pos {
        Some(p) => {
            let x = if p.x < 0.0 { random_coord(rng) } else { p.x };
            let z = if p.z < 0.0 { random_coord(rng) } else { p.z };
            Vec3::new(x - ARENA_HALF, offset_y + p.y, -z + ARENA_HALF)
        }
        None => Vec3::new(
            random_coord(rng) - ARENA_HALF,
            offset_y,
            random_coord(rng) - ARENA_HALF,
        ),
    }
}

/// World position back to arena position, with `offset_y` removed
pub fn to_arena(pos: Vec3, offset_y: f32) -> Vector3 {
    Vector3::new(pos.x + ARENA_HALF, pos.y - offset_y, ARENA_HALF - pos.z)
}

/// Arena rotation (degrees clockwise) to world yaw (radians counterclockwise)
pub fn to_world_rot<R: Rng + ?Sized>(rot: Option<f32>, rng: &mut R) -> f32 {
    match rot {
        Some(deg) => degrees_to_world(deg),
        None => rng.random::<f32>() * TAU,
    }
}

/// World yaw back to arena degrees in [0, 360)
pub fn to_arena_rot(rad: f32) -> f32 {
    world_to_degrees(rad)
}

/// 8-bit color to normalized RGB
pub fn to_world_color<R: Rng + ?Sized>(color: Option<Color>, rng: &mut R) -> Vec3 {
    match color {
        Some(c) => Vec3::from_array(c.channels()) / 255.0,
        None => Vec3::new(rng.random(), rng.random(), rng.random()),
    }
}

#[inline]
fn random_coord<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random::<f32>() * ARENA_SIZE
}
