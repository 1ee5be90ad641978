//! Headless kinematic backend
//!
//! A small deterministic stand-in for a full physics engine:
//! - Fixed timestep (`SIM_DT`) per `step`
//! - Agent is a circle on the XZ plane driven directly by the control vector
//! - Dynamic bodies integrate their velocity with linear damping
//! - Contacts are reported for `detect_collision` bodies on every tick the agent
//!   overlaps them, in ascending id order
//! - Frames are flat fills of the camera background color
//!
//! Good enough to drive the episode state machine end to end without a GPU.

use std::collections::BTreeMap;

use glam::{Quat, Vec2, Vec3, Vec3Swizzles};

use super::action::Control;
use super::backend::{
    AgentTelemetry, Backend, BoxDesc, CameraDesc, CameraId, EntityId, Frame, ModelDesc,
    Observation, SphereDesc,
};
use crate::consts::{ARENA_HALF, SIM_DT};
use crate::error::BackendError;
use crate::settings::{EnvConfig, LightConfig};

/// Agent ground speed at full forward control (units per second)
pub const AGENT_SPEED: f32 = 10.0;
/// Velocity fraction lost per second by free bodies
pub const LINEAR_DAMPING: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Shape {
    Sphere { radius: f32 },
    Box { half_extent: Vec3 },
    /// Meshes are approximated by their scaled unit box
    Model { scale: Vec3 },
}

#[derive(Debug, Clone, PartialEq)]
struct Body {
    shape: Shape,
    pos: Vec3,
    rot: f32,
    vel: Vec3,
    mass: f32,
    detect_collision: bool,
}

impl Body {
    fn is_dynamic(&self) -> bool {
        self.mass > 0.0
    }

    /// Half extent on the XZ plane, used to keep bodies inside the arena
    fn footprint(&self) -> Vec2 {
        match self.shape {
            Shape::Sphere { radius } => Vec2::splat(radius),
            Shape::Box { half_extent } => half_extent.xz(),
            Shape::Model { scale } => scale.xz(),
        }
    }

    /// Whether a circle of `radius` at `point` (XZ) overlaps this body
    fn touches(&self, point: Vec2, radius: f32) -> bool {
        match self.shape {
            Shape::Sphere { radius: r } => point.distance_squared(self.pos.xz()) < (r + radius).powi(2),
            Shape::Box { half_extent } => circle_box_overlap(point, radius, self, half_extent.xz()),
            Shape::Model { scale } => circle_box_overlap(point, radius, self, scale.xz()),
        }
    }
}

/// Circle vs yawed rectangle on the XZ plane
fn circle_box_overlap(point: Vec2, radius: f32, body: &Body, half: Vec2) -> bool {
    let delta = point - body.pos.xz();
    let local = Quat::from_rotation_y(body.rot).inverse() * Vec3::new(delta.x, 0.0, delta.y);
    let local = local.xz();
    let closest = local.clamp(-half, half);
    local.distance_squared(closest) < radius * radius
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Agent {
    pos: Vec3,
    yaw: f32,
    vel: Vec3,
}

impl Agent {
    fn forward(&self) -> Vec3 {
        Vec3::new(-self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    fn right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, -self.yaw.sin())
    }
}

/// Deterministic backend without rendering
#[derive(Debug, Clone)]
pub struct HeadlessBackend {
    width: u32,
    height: u32,
    background: Vec3,
    agent_radius: f32,
    light: Option<LightConfig>,
    agent: Agent,
    bodies: BTreeMap<EntityId, Body>,
    cameras: Vec<CameraDesc>,
    next_id: u32,
    ticks: u64,
}

impl HeadlessBackend {
    pub fn new(config: &EnvConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            background: config.background_color,
            agent_radius: config.agent_radius,
            light: None,
            agent: Agent {
                pos: Vec3::new(0.0, config.agent_radius, 0.0),
                yaw: 0.0,
                vel: Vec3::ZERO,
            },
            bodies: BTreeMap::new(),
            cameras: Vec::new(),
            next_id: 1,
            ticks: 0,
        }
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.bodies.contains_key(&id)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn body_position(&self, id: EntityId) -> Option<Vec3> {
        self.bodies.get(&id).map(|b| b.pos)
    }

    pub fn agent_position(&self) -> Vec3 {
        self.agent.pos
    }

    pub fn light(&self) -> Option<&LightConfig> {
        self.light.as_ref()
    }

    /// Ticks simulated since construction
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    fn insert(&mut self, body: Body) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.bodies.insert(id, body);
        id
    }

    fn drive_agent(&mut self, control: Control) {
        let [turn, strafe, forward] = control.0;
        self.agent.yaw -= (turn as f32).to_radians();

        let dir = self.agent.forward() * forward as f32 + self.agent.right() * strafe as f32;
        self.agent.vel = dir.normalize_or_zero() * AGENT_SPEED;
        self.agent.pos += self.agent.vel * SIM_DT;

        let limit = ARENA_HALF - self.agent_radius;
        self.agent.pos.x = self.agent.pos.x.clamp(-limit, limit);
        self.agent.pos.z = self.agent.pos.z.clamp(-limit, limit);
    }

    fn integrate_bodies(&mut self) {
        let damping = (1.0 - LINEAR_DAMPING * SIM_DT).max(0.0);
        for body in self.bodies.values_mut().filter(|b| b.is_dynamic()) {
            body.pos += body.vel * SIM_DT;
            body.vel *= damping;

            // Stop at the boundary walls
            let limit = Vec2::splat(ARENA_HALF) - body.footprint();
            if body.pos.x.abs() > limit.x {
                body.pos.x = body.pos.x.clamp(-limit.x, limit.x);
                body.vel.x = 0.0;
            }
            if body.pos.z.abs() > limit.y {
                body.pos.z = body.pos.z.clamp(-limit.y, limit.y);
                body.vel.z = 0.0;
            }
        }
    }

    fn contacts(&self) -> Vec<EntityId> {
        let point = self.agent.pos.xz();
        self.bodies
            .iter()
            .filter(|(_, b)| b.detect_collision && b.touches(point, self.agent_radius))
            .map(|(&id, _)| id)
            .collect()
    }
}

impl Backend for HeadlessBackend {
    fn set_light(&mut self, light: &LightConfig) -> Result<(), BackendError> {
        self.light = Some(*light);
        Ok(())
    }

    fn add_box(&mut self, desc: BoxDesc) -> Result<EntityId, BackendError> {
        if desc.half_extent.min_element() < 0.0 {
            return Err(BackendError::Create {
                kind: "box",
                reason: format!("negative half extent {}", desc.half_extent),
            });
        }
        Ok(self.insert(Body {
            shape: Shape::Box {
                half_extent: desc.half_extent,
            },
            pos: desc.pos,
            rot: desc.rot,
            vel: Vec3::ZERO,
            mass: desc.mass,
            detect_collision: desc.detect_collision,
        }))
    }

    fn add_sphere(&mut self, desc: SphereDesc) -> Result<EntityId, BackendError> {
        if desc.radius <= 0.0 {
            return Err(BackendError::Create {
                kind: "sphere",
                reason: format!("non-positive radius {}", desc.radius),
            });
        }
        Ok(self.insert(Body {
            shape: Shape::Sphere {
                radius: desc.radius,
            },
            pos: desc.pos,
            rot: desc.rot,
            vel: Vec3::ZERO,
            mass: desc.mass,
            detect_collision: desc.detect_collision,
        }))
    }

    fn add_model(&mut self, desc: ModelDesc) -> Result<EntityId, BackendError> {
        log::trace!("Model {} approximated by its bounds", desc.path.display());
        Ok(self.insert(Body {
            shape: Shape::Model { scale: desc.scale },
            pos: desc.pos,
            rot: desc.rot,
            vel: Vec3::ZERO,
            mass: desc.mass,
            detect_collision: desc.detect_collision,
        }))
    }

    fn apply_impulse(&mut self, id: EntityId, impulse: Vec3) -> Result<(), BackendError> {
        let body = self
            .bodies
            .get_mut(&id)
            .ok_or_else(|| BackendError::Other(format!("impulse on missing entity {id}")))?;
        if body.is_dynamic() {
            body.vel += impulse / body.mass;
        }
        Ok(())
    }

    fn remove_entity(&mut self, id: EntityId) -> Result<(), BackendError> {
        self.bodies.remove(&id);
        Ok(())
    }

    fn locate_agent(&mut self, pos: Vec3, rot_y: f32) -> Result<(), BackendError> {
        self.agent = Agent {
            pos,
            yaw: rot_y,
            vel: Vec3::ZERO,
        };
        Ok(())
    }

    fn add_camera_view(&mut self, desc: CameraDesc) -> Result<CameraId, BackendError> {
        self.cameras.push(desc);
        Ok(CameraId(self.cameras.len() as u32 - 1))
    }

    fn step(&mut self, control: Control) -> Result<Observation, BackendError> {
        self.drive_agent(control);
        self.integrate_bodies();
        self.ticks += 1;

        let collided = self.contacts();
        if !collided.is_empty() {
            log::trace!("Tick {}: agent touching {:?}", self.ticks, collided);
        }
        Ok(Observation {
            frame: Frame::filled(self.width, self.height, self.background),
            collided,
        })
    }

    fn render(&mut self, camera: CameraId, _pos: Vec3, _rot: Quat) -> Result<Frame, BackendError> {
        let desc = self
            .cameras
            .get(camera.0 as usize)
            .ok_or_else(|| BackendError::Render(format!("unknown camera {}", camera.0)))?;
        Ok(Frame::filled(desc.width, desc.height, desc.background_color))
    }

    fn agent_telemetry(&self) -> AgentTelemetry {
        AgentTelemetry {
            position: self.agent.pos,
            rotation: Quat::from_rotation_y(self.agent.yaw),
            velocity: self.agent.vel,
        }
    }
}
