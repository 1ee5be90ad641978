//! Arena instantiation and episode simulation
//!
//! Everything that turns a declarative [`Arena`](crate::arena::Arena) into
//! bodies in a backend and drives episodes over them:
//! - Seeded RNG only (one `Pcg32` per environment)
//! - Stable iteration order (placement follows item order, contacts follow backend order)
//! - No rendering here; frames come from the backend

pub mod action;
pub mod backend;
pub mod blackout;
pub mod episode;
pub mod headless;
pub mod placement;
pub mod stage;
pub mod transform;

#[cfg(test)]
pub(crate) mod testing;

pub use action::{ACTION_CHOICES, Action, Control, to_control};
pub use backend::{
    AgentTelemetry, Backend, BoxDesc, CameraDesc, CameraId, CollisionShape, EntityId, Frame,
    ModelDesc, Observation, SphereDesc, Surface,
};
pub use blackout::{Blackout, is_blacked_out};
pub use episode::{ArenaEnv, EpisodePhase, StepInfo, StepResult};
pub use headless::HeadlessBackend;
pub use placement::{GoalTraits, Placer, bounce_impulse, build_fixed_stage};
pub use stage::{Role, StageRegistry};
pub use transform::{to_arena, to_arena_rot, to_world, to_world_color, to_world_rot};
