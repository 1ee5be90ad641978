//! Item placement rules
//!
//! One rule per [`ItemKind`]. Each rule converts the item's (possibly
//! unspecified) attributes to world space, creates the body in the backend
//! and records its role in the [`StageRegistry`].

use glam::Vec3;
use rand::Rng;

use super::backend::{Backend, BoxDesc, CollisionShape, EntityId, ModelDesc, SphereDesc, Surface};
use super::stage::{Role, StageRegistry};
use super::transform::{to_world, to_world_color, to_world_rot};
use crate::arena::{Item, ItemKind, Placement, Vector3};
use crate::consts::{ARENA_HALF, BOUNCE_IMPULSE, GOAL_MASS, GOOD_GOAL_REWARD, ZONE_HALF_HEIGHT};
use crate::error::Result;
use crate::settings::EnvConfig;

/// Variant flags of the goal family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalTraits {
    pub good: bool,
    pub bounce: bool,
    pub multi: bool,
}

impl GoalTraits {
    pub const fn new(good: bool, bounce: bool, multi: bool) -> Self {
        Self { good, bounce, multi }
    }

    /// Reward if good, terminal unless multi-collect
    pub fn role(&self) -> Role {
        let role = if self.good {
            Role::reward(GOOD_GOAL_REWARD)
        } else {
            Role::NEUTRAL
        };
        role.and_terminal(!self.multi)
    }

    fn texture(&self) -> &'static str {
        match (self.good, self.multi) {
            (true, true) => "misc/good_goal_multi.png",
            (true, false) => "misc/good_goal.png",
            (false, _) => "misc/bad_goal.png",
        }
    }
}

/// Spawn impulse of a bouncing goal facing `rot` (world yaw)
pub fn bounce_impulse(rot: f32) -> Vec3 {
    Vec3::new(-rot.sin(), 0.0, -rot.cos()) * BOUNCE_IMPULSE
}

/// Places items into a backend and records their roles
pub struct Placer<'a, B: Backend + ?Sized, R: Rng + ?Sized> {
    pub backend: &'a mut B,
    pub rng: &'a mut R,
    pub stage: &'a mut StageRegistry,
    pub config: &'a EnvConfig,
}

impl<B: Backend + ?Sized, R: Rng + ?Sized> Placer<'_, B, R> {
    /// Place every element of `item`; returns how many bodies were created
    pub fn place_item(&mut self, item: &Item) -> Result<usize> {
        let kind = item.kind()?;

        // Only the first element of an agent item is used
        if kind == ItemKind::Agent {
            self.place_one(kind, item, Placement::of(item, 0))?;
            return Ok(0);
        }

        let mut count = 0;
        for placement in item.placements() {
            if let Some((id, role)) = self.place_one(kind, item, placement)? {
                log::debug!("Placed {} {} at element {} ({:?})", kind, id, placement.index, role);
                self.stage.register(id, role);
                count += 1;
            }
        }
        Ok(count)
    }

    fn place_one(
        &mut self,
        kind: ItemKind,
        item: &Item,
        p: Placement,
    ) -> Result<Option<(EntityId, Role)>> {
        let placed = match kind {
            ItemKind::Agent => {
                self.locate_agent(p)?;
                return Ok(None);
            }
            ItemKind::GoodGoal => self.goal(item, p, GoalTraits::new(true, false, false))?,
            ItemKind::GoodGoalBounce => self.goal(item, p, GoalTraits::new(true, true, false))?,
            ItemKind::GoodGoalMulti => self.goal(item, p, GoalTraits::new(true, false, true))?,
            ItemKind::GoodGoalMultiBounce => {
                self.goal(item, p, GoalTraits::new(true, true, true))?
            }
            ItemKind::BadGoal => self.goal(item, p, GoalTraits::new(false, false, false))?,
            ItemKind::BadGoalBounce => self.goal(item, p, GoalTraits::new(false, true, false))?,
            ItemKind::Wall => (self.wall(p, p.require_size(item)?)?, Role::NEUTRAL),
            ItemKind::Ramp => (self.ramp(p, p.require_size(item)?)?, Role::NEUTRAL),
            ItemKind::CylinderTunnel | ItemKind::CylinderTunnelTransparent => {
                (self.cylinder(p, p.require_size(item)?)?, Role::NEUTRAL)
            }
            ItemKind::DeathZone => {
                let size = p.require_size(item)?;
                (self.zone(p, size, "immovable/death_zone.png")?, Role::TERMINAL)
            }
            ItemKind::HotZone => {
                let size = p.require_size(item)?;
                (self.zone(p, size, "immovable/hot_zone.png")?, Role::HAZARD)
            }
            ItemKind::Cardbox1 => {
                let size = p.require_size(item)?;
                (self.cardbox(p, size, "movable/cardbox1.obj", 1.0)?, Role::NEUTRAL)
            }
            ItemKind::Cardbox2 => {
                let size = p.require_size(item)?;
                (self.cardbox(p, size, "movable/cardbox2.obj", 2.0)?, Role::NEUTRAL)
            }
            ItemKind::LObject => {
                let size = p.require_size(item)?;
                (self.lu_object(p, size, "movable/lobject.obj")?, Role::NEUTRAL)
            }
            ItemKind::LObject2 => {
                let size = p.require_size(item)?;
                (self.lu_object(p, size, "movable/lobject2.obj")?, Role::NEUTRAL)
            }
            ItemKind::UObject => {
                let size = p.require_size(item)?;
                (self.lu_object(p, size, "movable/uobject.obj")?, Role::NEUTRAL)
            }
        };
        Ok(Some(placed))
    }

    fn locate_agent(&mut self, p: Placement) -> Result<()> {
        let pos = to_world(p.position, self.config.agent_radius, self.rng);
        let rot = to_world_rot(p.rotation, self.rng);
        log::debug!("Agent at {pos} facing {rot:.3} rad");
        self.backend.locate_agent(pos, rot)?;
        Ok(())
    }

    fn goal(&mut self, item: &Item, p: Placement, goal: GoalTraits) -> Result<(EntityId, Role)> {
        let size = p.require_size(item)?;
        let radius = size.x * 0.5;
        let pos = to_world(p.position, radius, self.rng);

        let id = self.backend.add_sphere(SphereDesc {
            surface: Surface::Texture(self.config.asset(goal.texture())),
            radius,
            pos,
            rot: 0.0,
            mass: GOAL_MASS,
            detect_collision: true,
        })?;

        if goal.bounce {
            let rot = to_world_rot(p.rotation, self.rng);
            self.backend.apply_impulse(id, bounce_impulse(rot))?;
        }
        Ok((id, goal.role()))
    }

    fn wall(&mut self, p: Placement, size: Vector3) -> Result<EntityId> {
        let half = half_extent(size);
        let pos = to_world(p.position, half.y, self.rng);
        let rot = to_world_rot(p.rotation, self.rng);
        let color = to_world_color(p.color, self.rng);
        Ok(self.backend.add_box(BoxDesc {
            surface: Surface::Color(color),
            half_extent: half,
            pos,
            rot,
            mass: 0.0,
            detect_collision: false,
            visible: true,
        })?)
    }

    fn ramp(&mut self, p: Placement, size: Vector3) -> Result<EntityId> {
        let pos = to_world(p.position, 0.0, self.rng);
        let rot = to_world_rot(p.rotation, self.rng);
        let color = to_world_color(p.color, self.rng);
        Ok(self.backend.add_model(ModelDesc {
            path: self.config.asset("immovable/ramp.obj"),
            scale: half_extent(size),
            pos,
            rot,
            mass: 0.0,
            color: Some(color),
            detect_collision: false,
            collision: CollisionShape::VisualMesh,
        })?)
    }

    fn cylinder(&mut self, p: Placement, size: Vector3) -> Result<EntityId> {
        let pos = to_world(p.position, 0.0, self.rng);
        let rot = to_world_rot(p.rotation, self.rng);
        Ok(self.backend.add_model(ModelDesc {
            path: self.config.asset("immovable/cylinder.obj"),
            scale: half_extent(size),
            pos,
            rot,
            mass: 0.0,
            color: None,
            detect_collision: false,
            collision: CollisionShape::VisualMesh,
        })?)
    }

    fn zone(&mut self, p: Placement, size: Vector3, texture: &str) -> Result<EntityId> {
        let pos = to_world(p.position, ZONE_HALF_HEIGHT, self.rng);
        let rot = to_world_rot(p.rotation, self.rng);
        Ok(self.backend.add_box(BoxDesc {
            surface: Surface::Texture(self.config.asset(texture)),
            half_extent: Vec3::new(size.x * 0.5, ZONE_HALF_HEIGHT, size.z * 0.5),
            pos,
            rot,
            mass: 0.0,
            detect_collision: true,
            visible: true,
        })?)
    }

    fn cardbox(
        &mut self,
        p: Placement,
        size: Vector3,
        model: &str,
        mass: f32,
    ) -> Result<EntityId> {
        let scale = half_extent(size);
        let pos = to_world(p.position, scale.y, self.rng);
        let rot = to_world_rot(p.rotation, self.rng);
        Ok(self.backend.add_model(ModelDesc {
            path: self.config.asset(model),
            scale,
            pos,
            rot,
            mass,
            color: None,
            detect_collision: false,
            collision: CollisionShape::Primitive,
        })?)
    }

    fn lu_object(&mut self, p: Placement, size: Vector3, model: &str) -> Result<EntityId> {
        let pos = to_world(p.position, size.y * 0.5, self.rng);
        let rot = to_world_rot(p.rotation, self.rng);
        // Model units differ per axis: x is authored at 10x, z at ~3.3x
        let scale = Vec3::new(size.x * 0.1, size.y, size.z * 0.3);
        Ok(self.backend.add_model(ModelDesc {
            path: self.config.asset(model),
            scale,
            pos,
            rot,
            mass: 1.0,
            color: None,
            detect_collision: false,
            collision: CollisionShape::Precomputed,
        })?)
    }
}

/// Build the permanent floor and boundary walls
///
/// These bodies live for the whole environment lifetime and are never part of
/// an episode's placed set.
pub fn build_fixed_stage<B: Backend + ?Sized>(
    backend: &mut B,
    config: &EnvConfig,
) -> Result<Vec<EntityId>> {
    const WALL_DISTANCE: f32 = ARENA_HALF;
    const INVISIBLE_HALF_HEIGHT: f32 = 10.0;

    let floor = config.asset("stage/floor.png");
    let wall = config.asset("stage/wall.png");
    let mut ids = Vec::with_capacity(9);

    ids.push(backend.add_box(BoxDesc {
        surface: Surface::Texture(floor),
        half_extent: Vec3::new(ARENA_HALF, 1.0, ARENA_HALF),
        pos: Vec3::new(0.0, -1.0, 0.0),
        rot: 0.0,
        mass: 0.0,
        detect_collision: false,
        visible: true,
    })?);

    // Low visible walls, then tall invisible ones to keep bodies inside
    for (half_height, visible) in [(1.0, true), (INVISIBLE_HALF_HEIGHT, false)] {
        let long = WALL_DISTANCE + 1.0;
        let sides = [
            (Vec3::new(long, half_height, 1.0), Vec3::new(0.0, half_height, -WALL_DISTANCE)),
            (Vec3::new(long, half_height, 1.0), Vec3::new(0.0, half_height, WALL_DISTANCE)),
            (Vec3::new(1.0, half_height, long), Vec3::new(-WALL_DISTANCE, half_height, 0.0)),
            (Vec3::new(1.0, half_height, long), Vec3::new(WALL_DISTANCE, half_height, 0.0)),
        ];
        for (half_extent, pos) in sides {
            ids.push(backend.add_box(BoxDesc {
                surface: Surface::Texture(wall.clone()),
                half_extent,
                pos,
                rot: 0.0,
                mass: 0.0,
                detect_collision: false,
                visible,
            })?);
        }
    }
    Ok(ids)
}

#[inline]
fn half_extent(size: Vector3) -> Vec3 {
    Vec3::new(size.x, size.y, size.z) * 0.5
}
