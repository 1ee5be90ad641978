//! Animal Arena - episodic 3D arena tasks for reinforcement learning
//!
//! Core modules:
//! - `arena`: Declarative scene description (items with ragged attribute lists)
//! - `sim`: Arena instantiation, episode state machine, blackout and action mapping
//! - `settings`: Environment configuration
//! - `error`: Configuration and backend error types

pub mod arena;
pub mod error;
pub mod settings;
pub mod sim;

pub use arena::{Arena, ArenaConfig, Color, Item, ItemKind, Rgb, Vector3};
pub use error::{ArenaError, BackendError};
pub use settings::{EnvConfig, LightConfig};
pub use sim::{ArenaEnv, Backend, Frame, HeadlessBackend, StepInfo, StepResult};

/// Environment configuration constants
pub mod consts {
    /// Side length of the square arena footprint (arena units)
    pub const ARENA_SIZE: f32 = 40.0;
    /// Half of the footprint; arena-space midpoint maps to world origin
    pub const ARENA_HALF: f32 = ARENA_SIZE / 2.0;

    /// Reward lost per tick while inside a hot zone
    pub const HOT_ZONE_DAMAGE: f32 = 1e-5;
    /// Reward granted by a good goal on first contact
    pub const GOOD_GOAL_REWARD: f32 = 1.0;

    /// Horizontal impulse given to bouncing goals at spawn
    pub const BOUNCE_IMPULSE: f32 = 10.0;
    /// Goal spheres are light rigid bodies
    pub const GOAL_MASS: f32 = 0.5;

    /// Turn channel multiplier of the control vector
    pub const TURN_SCALE: i32 = 6;

    /// Agent capsule radius; the agent is lifted by this much above the floor
    pub const AGENT_RADIUS: f32 = 0.5;

    /// Zones are thin boxes lying on the floor
    pub const ZONE_HALF_HEIGHT: f32 = 0.01;

    /// Default episode length when an arena does not set one
    pub const DEFAULT_TIME_LIMIT: u32 = 1000;

    /// Fixed timestep of the headless backend (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
}

/// Convert arena degrees (clockwise from north) to backend radians (counterclockwise)
#[inline]
pub fn degrees_to_world(deg: f32) -> f32 {
    2.0 * std::f32::consts::PI * -deg / 360.0
}

/// Inverse of [`degrees_to_world`], normalized to [0, 360)
#[inline]
pub fn world_to_degrees(rad: f32) -> f32 {
    normalize_degrees(-rad * 360.0 / (2.0 * std::f32::consts::PI))
}

/// Normalize degrees to [0, 360)
#[inline]
pub fn normalize_degrees(deg: f32) -> f32 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
