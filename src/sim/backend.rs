//! Physics/rendering backend interface
//!
//! The backend owns every simulated body. The environment only keeps opaque
//! [`EntityId`]s and treats the backend as the source of truth for existence.

use std::fmt;
use std::path::PathBuf;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::action::Control;
use crate::error::BackendError;
use crate::settings::LightConfig;

/// Backend-assigned handle of a placed body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle of an additional camera view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CameraId(pub u32);

/// How a body is painted
#[derive(Debug, Clone, PartialEq)]
pub enum Surface {
    Texture(PathBuf),
    /// Normalized RGB
    Color(Vec3),
}

/// Collision geometry of a mesh model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionShape {
    /// Convex hull / bounding primitive derived by the backend
    #[default]
    Primitive,
    /// Collide against the visual mesh itself (static bodies)
    VisualMesh,
    /// Load the collision shape shipped next to the model
    Precomputed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxDesc {
    pub surface: Surface,
    pub half_extent: Vec3,
    pub pos: Vec3,
    /// Yaw in radians
    pub rot: f32,
    /// 0.0 = static
    pub mass: f32,
    /// Report contacts with the agent
    pub detect_collision: bool,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SphereDesc {
    pub surface: Surface,
    pub radius: f32,
    pub pos: Vec3,
    pub rot: f32,
    pub mass: f32,
    pub detect_collision: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelDesc {
    pub path: PathBuf,
    pub scale: Vec3,
    pub pos: Vec3,
    pub rot: f32,
    pub mass: f32,
    /// Tint applied over the model's own material
    pub color: Option<Vec3>,
    pub detect_collision: bool,
    pub collision: CollisionShape,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraDesc {
    pub width: u32,
    pub height: u32,
    pub background_color: Vec3,
    pub far: f32,
    pub focal_length: f32,
    pub shadow_buffer_width: u32,
}

/// RGB8 image, row-major, `width * height * 3` bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Frame {
    pub const CHANNELS: usize = 3;

    /// All-black frame
    pub fn zeroed(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * Self::CHANNELS],
        }
    }

    /// Frame filled with a normalized RGB color
    pub fn filled(width: u32, height: u32, color: Vec3) -> Self {
        let texel = color_to_texel(color);
        let mut frame = Self::zeroed(width, height);
        frame.pixels_mut().fill(texel);
        frame
    }

    /// `(height, width, channels)`
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.height as usize, self.width as usize, Self::CHANNELS)
    }

    /// Zero every byte in place; shape is unchanged
    pub fn blank(&mut self) {
        self.data.fill(0);
    }

    pub fn is_blank(&self) -> bool {
        self.data.iter().all(|&b| b == 0)
    }

    pub fn pixels(&self) -> &[[u8; 3]] {
        bytemuck::cast_slice(&self.data)
    }

    pub fn pixels_mut(&mut self) -> &mut [[u8; 3]] {
        bytemuck::cast_slice_mut(&mut self.data)
    }
}

fn color_to_texel(color: Vec3) -> [u8; 3] {
    let c = (color.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
    [c.x as u8, c.y as u8, c.z as u8]
}

/// Result of one backend tick
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub frame: Frame,
    /// Entities the agent touched this tick, in backend order
    pub collided: Vec<EntityId>,
}

/// Agent pose and motion in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentTelemetry {
    pub position: Vec3,
    pub rotation: Quat,
    pub velocity: Vec3,
}

impl Default for AgentTelemetry {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            velocity: Vec3::ZERO,
        }
    }
}

impl AgentTelemetry {
    /// Velocity expressed in the agent's own frame
    pub fn local_velocity(&self) -> Vec3 {
        self.rotation.inverse() * self.velocity
    }
}

/// Primitives the environment needs from a physics/rendering engine
pub trait Backend {
    fn set_light(&mut self, light: &LightConfig) -> Result<(), BackendError>;

    fn add_box(&mut self, desc: BoxDesc) -> Result<EntityId, BackendError>;

    fn add_sphere(&mut self, desc: SphereDesc) -> Result<EntityId, BackendError>;

    fn add_model(&mut self, desc: ModelDesc) -> Result<EntityId, BackendError>;

    fn apply_impulse(&mut self, id: EntityId, impulse: Vec3) -> Result<(), BackendError>;

    /// Removing an id that is no longer resident must succeed as a no-op
    fn remove_entity(&mut self, id: EntityId) -> Result<(), BackendError>;

    /// Place the controllable agent; `rot_y` is yaw in radians
    fn locate_agent(&mut self, pos: Vec3, rot_y: f32) -> Result<(), BackendError>;

    fn add_camera_view(&mut self, desc: CameraDesc) -> Result<CameraId, BackendError>;

    fn step(&mut self, control: Control) -> Result<Observation, BackendError>;

    fn render(&mut self, camera: CameraId, pos: Vec3, rot: Quat) -> Result<Frame, BackendError>;

    fn agent_telemetry(&self) -> AgentTelemetry;
}
