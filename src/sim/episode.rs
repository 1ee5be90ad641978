//! Episode state machine
//!
//! Owns every placed entity and its role. A reset always tears the whole arena
//! down before rebuilding it, and a terminal step rebuilds immediately, so the
//! caller only ever sees frames from an active episode.

use std::f32::consts::FRAC_PI_2;

use glam::{EulerRot, Quat, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::action::{ACTION_CHOICES, Action, Control, to_control};
use super::backend::{Backend, CameraDesc, CameraId, EntityId, Frame};
use super::blackout::Blackout;
use super::placement::{Placer, build_fixed_stage};
use super::stage::StageRegistry;
use super::transform::{to_arena, to_arena_rot};
use crate::arena::{Arena, Vector3};
use crate::consts::HOT_ZONE_DAMAGE;
use crate::error::{ArenaError, Result};
use crate::settings::EnvConfig;

/// Top view camera hovers this high above the arena center
const TOP_VIEW_HEIGHT: f32 = 40.0;

/// Lifecycle of the placed arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodePhase {
    /// Nothing placed (before the first reset, or after a failed one)
    Empty,
    /// Entities placed, accepting steps
    Active,
}

/// Auxiliary step output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepInfo {
    /// Agent velocity in agent-local coordinates
    pub velocity: Vec3,
    /// Raw world position (debug only)
    pub position: Option<Vec3>,
    /// Raw world rotation (debug only)
    pub rotation: Option<Quat>,
    /// Position in arena space (debug only)
    pub arena_position: Option<Vector3>,
    /// Heading in arena degrees (debug only)
    pub arena_rotation: Option<f32>,
    /// Episodes started so far, including the current one
    pub episode: u32,
    /// Step counter of the episode the returned frame belongs to
    pub step: u32,
    pub timed_out: bool,
    pub blacked_out: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    pub frame: Frame,
    pub reward: f32,
    pub terminal: bool,
    pub info: StepInfo,
}

/// Arena environment driving an external backend
pub struct ArenaEnv<B: Backend> {
    backend: B,
    config: EnvConfig,
    arena: Arena,
    blackout: Blackout,
    /// Replacement arena waiting for the next rebuild
    pending: Option<(Arena, Blackout)>,
    rng: Pcg32,
    stage: StageRegistry,
    phase: EpisodePhase,
    step_num: u32,
    episode: u32,
    top_camera: CameraId,
}

impl<B: Backend> ArenaEnv<B> {
    /// Build the fixed stage and place the arena for the first episode
    pub fn new(mut backend: B, arena: Arena, config: EnvConfig) -> Result<Self> {
        arena.validate()?;
        let blackout = Blackout::new(arena.blackouts.clone())?;

        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        log::info!(
            "Creating arena environment: {} items, t={}, seed={}",
            arena.items.len(),
            arena.t,
            seed
        );

        backend.set_light(&config.light)?;
        let fixed = build_fixed_stage(&mut backend, &config)?;
        log::debug!("Fixed stage built ({} bodies)", fixed.len());

        let top_camera = backend.add_camera_view(CameraDesc {
            width: config.top_view_size,
            height: config.top_view_size,
            background_color: config.background_color,
            far: 50.0,
            focal_length: 30.0,
            shadow_buffer_width: config.shadow_buffer_width,
        })?;

        let mut env = Self {
            backend,
            config,
            arena,
            blackout,
            pending: None,
            rng: Pcg32::seed_from_u64(seed),
            stage: StageRegistry::new(),
            phase: EpisodePhase::Empty,
            step_num: 0,
            episode: 0,
            top_camera,
        };
        env.reset()?;
        Ok(env)
    }

    /// Tear down and rebuild the arena; returns the first frame
    pub fn reset(&mut self) -> Result<Frame> {
        let mut frame = self.rebuild()?;
        if self.blackout.is_blacked_out(self.step_num) {
            frame.blank();
        }
        Ok(frame)
    }

    /// Advance one tick
    pub fn step(&mut self, action: impl Into<Action>) -> Result<StepResult> {
        if self.phase != EpisodePhase::Active {
            return Err(ArenaError::EpisodeNotActive);
        }

        let control = to_control(action.into());
        let obs = self.backend.step(control)?;
        self.step_num += 1;

        let mut reward = 0.0;
        let mut terminal = false;
        for id in obs.collided {
            let (delta, ends) = self.resolve_collision(id)?;
            reward += delta;
            terminal |= ends;
        }

        let timed_out = !terminal && self.step_num >= self.arena.t;
        if timed_out {
            log::debug!("Episode {} timed out after {} steps", self.episode, self.step_num);
            terminal = true;
        }

        // Telemetry describes the tick just simulated, before any rebuild
        let mut info = self.step_info();
        info.timed_out = timed_out;

        let mut frame = obs.frame;
        if terminal {
            frame = self.rebuild()?;
        }

        info.episode = self.episode;
        info.step = self.step_num;
        info.blacked_out = self.blackout.is_blacked_out(self.step_num);
        if info.blacked_out {
            frame.blank();
        }

        if reward != 0.0 {
            log::trace!("Step {}: reward {}", info.step, reward);
        }

        Ok(StepResult {
            frame,
            reward,
            terminal,
            info,
        })
    }

    /// Render the arena from straight above
    pub fn get_top_view(&mut self) -> Result<Frame> {
        let pos = Vec3::new(0.0, TOP_VIEW_HEIGHT, 0.0);
        let rot = Quat::from_rotation_x(-FRAC_PI_2);
        Ok(self.backend.render(self.top_camera, pos, rot)?)
    }

    /// Replace the arena; takes effect on the next reset
    ///
    /// The running episode keeps its time limit and blackout schedule.
    pub fn set_arena(&mut self, arena: Arena) -> Result<()> {
        arena.validate()?;
        let blackout = Blackout::new(arena.blackouts.clone())?;
        self.pending = Some((arena, blackout));
        Ok(())
    }

    /// Arena queued by [`set_arena`](Self::set_arena), if not yet applied
    pub fn pending_arena(&self) -> Option<&Arena> {
        self.pending.as_ref().map(|(arena, _)| arena)
    }

    /// Choices per action channel
    pub fn action_space(&self) -> [i32; 2] {
        [ACTION_CHOICES, ACTION_CHOICES]
    }

    /// `(height, width, channels)` of agent frames
    pub fn observation_shape(&self) -> (usize, usize, usize) {
        (
            self.config.height as usize,
            self.config.width as usize,
            Frame::CHANNELS,
        )
    }

    pub fn reward_range(&self) -> (f32, f32) {
        (f32::NEG_INFINITY, f32::INFINITY)
    }

    pub fn phase(&self) -> EpisodePhase {
        self.phase
    }

    pub fn step_count(&self) -> u32 {
        self.step_num
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    pub fn stage(&self) -> &StageRegistry {
        &self.stage
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    fn rebuild(&mut self) -> Result<Frame> {
        self.phase = EpisodePhase::Empty;
        self.teardown()?;

        if let Some((arena, blackout)) = self.pending.take() {
            log::info!("Switching to new arena ({} items, t={})", arena.items.len(), arena.t);
            self.arena = arena;
            self.blackout = blackout;
        }

        let mut placed = 0;
        for item in &self.arena.items {
            placed += Placer {
                backend: &mut self.backend,
                rng: &mut self.rng,
                stage: &mut self.stage,
                config: &self.config,
            }
            .place_item(item)?;
        }

        let obs = self.backend.step(Control::ZERO)?;
        self.episode += 1;
        self.phase = EpisodePhase::Active;
        log::info!("Episode {} started ({} entities placed)", self.episode, placed);
        Ok(obs.frame)
    }

    fn teardown(&mut self) -> Result<()> {
        for id in self.stage.take_all() {
            self.backend.remove_entity(id)?;
        }
        self.step_num = 0;
        Ok(())
    }

    /// Reward delta and terminal flag caused by touching `id`
    fn resolve_collision(&mut self, id: EntityId) -> Result<(f32, bool)> {
        let mut reward = 0.0;
        let role = self.stage.role_of(id);

        if let Some(amount) = self.stage.collect_reward(id) {
            log::debug!("Collected {} from {}", amount, id);
            reward += amount;
            self.backend.remove_entity(id)?;
        }
        if role.hazard {
            reward -= HOT_ZONE_DAMAGE;
        }
        if role.is_neutral() {
            log::debug!("Ignoring contact with unclassified entity {}", id);
        }
        Ok((reward, role.terminal))
    }

    fn step_info(&self) -> StepInfo {
        let telemetry = self.backend.agent_telemetry();
        let debug = self.config.debug;
        let yaw = telemetry.rotation.to_euler(EulerRot::YXZ).0;
        StepInfo {
            velocity: telemetry.local_velocity(),
            position: debug.then_some(telemetry.position),
            rotation: debug.then_some(telemetry.rotation),
            arena_position: debug.then(|| to_arena(telemetry.position, self.config.agent_radius)),
            arena_rotation: debug.then(|| to_arena_rot(yaw)),
            episode: self.episode,
            step: self.step_num,
            timed_out: false,
            blacked_out: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::{Item, ItemKind};
    use crate::consts::GOOD_GOAL_REWARD;
    use crate::sim::testing::{Call, ScriptedBackend};

    fn config() -> EnvConfig {
        EnvConfig {
            width: 4,
            height: 3,
            ..EnvConfig::default().with_seed(11)
        }
    }

    fn goal(kind: ItemKind) -> Item {
        Item::new(kind)
            .with_position(Vector3::new(10.0, 0.0, 10.0))
            .with_size(Vector3::new(1.0, 1.0, 1.0))
    }

    fn zone(kind: ItemKind) -> Item {
        Item::new(kind)
            .with_position(Vector3::new(30.0, 0.0, 30.0))
            .with_size(Vector3::new(4.0, 0.0, 4.0))
    }

    fn arena(items: Vec<Item>, t: u32) -> Arena {
        Arena {
            t,
            blackouts: Vec::new(),
            items,
        }
    }

    fn env(arena: Arena) -> ArenaEnv<ScriptedBackend> {
        ArenaEnv::new(ScriptedBackend::new(4, 3), arena, config()).unwrap()
    }

    /// Id of the most recently created sphere
    fn last_sphere(env: &ArenaEnv<ScriptedBackend>) -> EntityId {
        env.backend().spheres().last().unwrap().0
    }

    fn last_box(env: &ArenaEnv<ScriptedBackend>) -> EntityId {
        env.backend().boxes().last().unwrap().0
    }

    #[test]
    fn test_construction_places_arena() {
        let env = env(arena(vec![goal(ItemKind::GoodGoal), zone(ItemKind::HotZone)], 100));
        assert_eq!(env.phase(), EpisodePhase::Active);
        assert_eq!(env.episode(), 1);
        assert_eq!(env.step_count(), 0);
        assert_eq!(env.stage().len(), 2);
        // Fixed stage (9 boxes) + hot zone
        assert_eq!(env.backend().boxes().len(), 10);
        assert_eq!(env.backend().steps(), vec![Control::ZERO]);
        assert!(env.backend().calls.contains(&Call::SetLight));
    }

    #[test]
    fn test_reset_tears_down_then_rebuilds() {
        let mut env = env(arena(vec![goal(ItemKind::GoodGoal), zone(ItemKind::DeathZone)], 100));
        let before: Vec<_> = env.stage().placed().to_vec();
        env.step(Action::IDLE).unwrap();
        assert_eq!(env.step_count(), 1);

        let frame = env.reset().unwrap();
        assert_eq!(frame.shape(), (3, 4, 3));
        assert_eq!(env.step_count(), 0);
        assert_eq!(env.episode(), 2);
        assert_eq!(env.backend().removed(), before);
        for id in &before {
            assert!(!env.backend().resident.contains(id));
            assert!(!env.stage().is_placed(*id));
        }
        assert_eq!(env.stage().len(), 2);
    }

    #[test]
    fn test_single_collect_goal() {
        let mut env = env(arena(vec![goal(ItemKind::GoodGoal)], 100));
        let id = last_sphere(&env);
        env.step(Action::IDLE).unwrap();

        env.backend_mut().queue_collisions(&[id]);
        let result = env.step(Action::IDLE).unwrap();
        assert_eq!(result.reward, GOOD_GOAL_REWARD);
        assert!(result.terminal);
        assert!(!result.info.timed_out);
        assert!(!env.backend().resident.contains(&id));
        // Removed exactly once: on collection, not again at teardown
        assert_eq!(env.backend().removed().iter().filter(|&&r| r == id).count(), 1);

        // Auto reset: new episode with a fresh goal
        assert_eq!(env.episode(), 2);
        assert_eq!(env.step_count(), 0);
        assert_eq!(result.info.step, 0);
        assert_ne!(last_sphere(&env), id);
        assert_eq!(env.stage().len(), 1);
    }

    #[test]
    fn test_multi_collect_goal() {
        let mut env = env(arena(
            vec![goal(ItemKind::GoodGoalMulti), goal(ItemKind::GoodGoalMulti)],
            100,
        ));
        let id = last_sphere(&env);

        env.backend_mut().queue_collisions(&[id]);
        let result = env.step(Action::IDLE).unwrap();
        assert_eq!(result.reward, GOOD_GOAL_REWARD);
        assert!(!result.terminal);
        assert!(!env.stage().is_placed(id));
        assert!(!env.backend().resident.contains(&id));
        assert_eq!(env.stage().len(), 1);

        // Stale contact after removal grants nothing
        env.backend_mut().queue_collisions(&[id]);
        let result = env.step(Action::IDLE).unwrap();
        assert_eq!(result.reward, 0.0);
        assert!(!result.terminal);
        assert_eq!(env.episode(), 1);
    }

    #[test]
    fn test_hazard_accumulates_and_persists() {
        let mut env = env(arena(vec![zone(ItemKind::HotZone)], 1000));
        let id = last_box(&env);

        let n = 25;
        let mut total = 0.0_f64;
        for _ in 0..n {
            env.backend_mut().queue_collisions(&[id]);
            let result = env.step(Action::IDLE).unwrap();
            assert!(!result.terminal);
            assert!((result.reward + HOT_ZONE_DAMAGE).abs() < 1e-12);
            total += f64::from(result.reward);
        }
        assert!((total + n as f64 * 1e-5).abs() < 1e-9);
        assert!(env.stage().is_placed(id));
        assert!(env.backend().resident.contains(&id));
        assert!(env.backend().removed().is_empty());
    }

    #[test]
    fn test_death_zone_terminal_without_reward() {
        let mut env = env(arena(vec![zone(ItemKind::DeathZone)], 100));
        let id = last_box(&env);
        env.backend_mut().queue_collisions(&[id]);
        let result = env.step(Action::IDLE).unwrap();
        assert_eq!(result.reward, 0.0);
        assert!(result.terminal);
        assert_eq!(env.episode(), 2);
    }

    #[test]
    fn test_all_collisions_in_tick_are_resolved() {
        let mut env = env(arena(
            vec![zone(ItemKind::DeathZone), goal(ItemKind::GoodGoalMulti), zone(ItemKind::HotZone)],
            100,
        ));
        let boxes = env.backend().boxes();
        let death = boxes[boxes.len() - 2].0;
        let hot = boxes[boxes.len() - 1].0;
        let multi = last_sphere(&env);

        // Terminal contact first must not short-circuit the rest
        env.backend_mut().queue_collisions(&[death, multi, hot]);
        let result = env.step(Action::IDLE).unwrap();
        assert!(result.terminal);
        assert!((result.reward - (GOOD_GOAL_REWARD - HOT_ZONE_DAMAGE)).abs() < 1e-6);
        assert!(env.backend().removed().contains(&multi));
    }

    #[test]
    fn test_unclassified_collision_is_noop() {
        let mut env = env(arena(vec![goal(ItemKind::GoodGoal)], 100));
        env.backend_mut().queue_collisions(&[EntityId(9999), EntityId(100)]);
        let result = env.step(Action::IDLE).unwrap();
        assert_eq!(result.reward, 0.0);
        assert!(!result.terminal);
        assert!(env.backend().removed().is_empty());
    }

    #[test]
    fn test_timeout() {
        let t = 5;
        let mut env = env(arena(vec![goal(ItemKind::GoodGoal)], t));
        let placed = env.stage().placed().to_vec();

        for step in 1..t {
            let result = env.step(Action::IDLE).unwrap();
            assert!(!result.terminal, "step {step}");
            assert_eq!(env.step_count(), step);
        }
        let result = env.step(Action::IDLE).unwrap();
        assert!(result.terminal);
        assert!(result.info.timed_out);
        assert_eq!(result.reward, 0.0);
        assert_eq!(env.step_count(), 0);
        assert_eq!(env.episode(), 2);
        assert_eq!(env.backend().removed(), placed);
    }

    #[test]
    fn test_goal_on_last_step_is_not_a_timeout() {
        let mut env = env(arena(vec![goal(ItemKind::GoodGoal)], 1));
        let id = last_sphere(&env);
        env.backend_mut().queue_collisions(&[id]);
        let result = env.step(Action::IDLE).unwrap();
        assert!(result.terminal);
        assert!(!result.info.timed_out);
        assert_eq!(result.reward, GOOD_GOAL_REWARD);
    }

    #[test]
    fn test_blackout_blanks_frame_only() {
        let mut arena = arena(vec![zone(ItemKind::HotZone)], 100);
        arena.blackouts = vec![2, 4];
        let mut env = env(arena);
        let hot = last_box(&env);

        let first = env.step(Action::IDLE).unwrap();
        assert!(!first.frame.is_blank());

        env.backend_mut().queue_collisions(&[hot]);
        let second = env.step(Action::IDLE).unwrap();
        assert!(second.info.blacked_out);
        assert!(second.frame.is_blank());
        assert_eq!(second.frame.shape(), (3, 4, 3));
        assert!((second.reward + HOT_ZONE_DAMAGE).abs() < 1e-12);

        assert!(env.step(Action::IDLE).unwrap().frame.is_blank());
        assert!(!env.step(Action::IDLE).unwrap().frame.is_blank());
    }

    #[test]
    fn test_blackout_uses_new_episode_counter() {
        let mut arena = arena(vec![], 3);
        arena.blackouts = vec![-2];
        let mut env = env(arena);

        assert!(!env.step(Action::IDLE).unwrap().info.blacked_out); // 1
        assert!(env.step(Action::IDLE).unwrap().info.blacked_out); // 2
        // Step 3 times out; the returned frame belongs to step 0 of the next episode
        let result = env.step(Action::IDLE).unwrap();
        assert!(result.terminal);
        assert!(!result.info.blacked_out);
        assert!(!result.frame.is_blank());
    }

    #[test]
    fn test_action_is_mapped_and_forwarded() {
        let mut env = env(arena(vec![], 100));
        env.step(Action::new(2, 0)).unwrap();
        env.step([7, -3]).unwrap();
        let steps = env.backend().steps();
        assert_eq!(steps[1], Control([6, 0, -1]));
        assert_eq!(steps[2], Control([6, 0, -1]));
    }

    #[test]
    fn test_info_debug_fields() {
        let mut quiet = env(arena(vec![], 100));
        let info = quiet.step(Action::IDLE).unwrap().info;
        assert!(info.position.is_none() && info.rotation.is_none());
        assert!(info.arena_position.is_none() && info.arena_rotation.is_none());

        let mut backend = ScriptedBackend::new(4, 3);
        backend.telemetry.position = Vec3::new(0.0, 0.5, 0.0);
        backend.telemetry.velocity = Vec3::new(0.0, 0.0, -2.0);
        let mut env =
            ArenaEnv::new(backend, arena(vec![], 100), config().with_debug(true)).unwrap();
        let info = env.step(Action::IDLE).unwrap().info;
        assert_eq!(info.position, Some(Vec3::new(0.0, 0.5, 0.0)));
        assert_eq!(info.arena_position, Some(Vector3::new(20.0, 0.0, 20.0)));
        assert_eq!(info.arena_rotation, Some(0.0));
        assert!((info.velocity - Vec3::new(0.0, 0.0, -2.0)).length() < 1e-6);
    }

    #[test]
    fn test_top_view() {
        let mut env = env(arena(vec![], 100));
        let frame = env.get_top_view().unwrap();
        assert_eq!(frame.shape(), (8, 8, 3));
        let render = env
            .backend()
            .calls
            .iter()
            .find_map(|c| match c {
                Call::Render(_, pos, rot) => Some((*pos, *rot)),
                _ => None,
            })
            .unwrap();
        assert_eq!(render.0, Vec3::new(0.0, 40.0, 0.0));
        let expected = Quat::from_xyzw((-FRAC_PI_2 * 0.5).sin(), 0.0, 0.0, (-FRAC_PI_2 * 0.5).cos());
        assert!(render.1.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn test_failed_reset_blocks_stepping() {
        let mut env = env(arena(vec![goal(ItemKind::GoodGoal)], 100));
        let next = env.backend().creates();
        env.backend_mut().fail_create_at = Some(next);

        assert!(matches!(env.reset(), Err(ArenaError::Backend(_))));
        assert_eq!(env.phase(), EpisodePhase::Empty);
        assert!(matches!(env.step(Action::IDLE), Err(ArenaError::EpisodeNotActive)));

        env.backend_mut().fail_create_at = None;
        env.reset().unwrap();
        assert!(env.step(Action::IDLE).is_ok());
    }

    #[test]
    fn test_invalid_arena_rejected_at_construction() {
        let bad = arena(vec![Item { name: "Tree".into(), ..Default::default() }], 10);
        let err = ArenaEnv::new(ScriptedBackend::new(4, 3), bad, config()).err().unwrap();
        assert!(matches!(err, ArenaError::UnknownItem { .. }));

        let mut blackout = arena(vec![], 10);
        blackout.blackouts = vec![4, 2];
        let err = ArenaEnv::new(ScriptedBackend::new(4, 3), blackout, config()).err().unwrap();
        assert!(matches!(err, ArenaError::InvalidBlackout { .. }));
    }

    #[test]
    fn test_seeded_randomization_is_reproducible() {
        let random_goal = Item::new(ItemKind::GoodGoal).with_size(Vector3::new(1.0, 1.0, 1.0));
        let a = env(arena(vec![random_goal.clone()], 100));
        let b = env(arena(vec![random_goal], 100));
        assert_eq!(a.backend().spheres()[0].1.pos, b.backend().spheres()[0].1.pos);
    }

    #[test]
    fn test_set_arena_waits_for_reset() {
        let mut env = env(arena(vec![goal(ItemKind::GoodGoal)], 100));
        for _ in 0..3 {
            env.step(Action::IDLE).unwrap();
        }

        let mut next = arena(vec![zone(ItemKind::HotZone), zone(ItemKind::HotZone)], 2);
        next.blackouts = vec![1];
        env.set_arena(next).unwrap();
        assert_eq!(env.arena().t, 100);
        assert_eq!(env.pending_arena().map(|a| a.t), Some(2));

        // The running episode keeps the old limit and schedule
        let result = env.step(Action::IDLE).unwrap();
        assert!(!result.terminal);
        assert!(!result.info.blacked_out);
        assert_eq!(env.step_count(), 4);

        let old = env.stage().placed().to_vec();
        env.reset().unwrap();
        assert!(env.pending_arena().is_none());
        assert_eq!(env.arena().t, 2);
        assert_eq!(env.backend().removed(), old);
        assert_eq!(env.stage().len(), 2);

        let first = env.step(Action::IDLE).unwrap();
        assert!(first.info.blacked_out);
        assert!(!first.terminal);
        assert!(env.step(Action::IDLE).unwrap().info.timed_out);
    }

    #[test]
    fn test_set_arena_rejects_invalid_without_queueing() {
        let mut env = env(arena(vec![], 100));
        let bad = arena(vec![Item { name: "Tree".into(), ..Default::default() }], 10);
        assert!(env.set_arena(bad).is_err());
        assert!(env.pending_arena().is_none());

        let mut unsorted = arena(vec![], 10);
        unsorted.blackouts = vec![3, 3];
        assert!(matches!(env.set_arena(unsorted), Err(ArenaError::InvalidBlackout { .. })));
        assert!(env.pending_arena().is_none());
    }

    #[test]
    fn test_gym_metadata() {
        let env = env(arena(vec![], 100));
        assert_eq!(env.action_space(), [3, 3]);
        assert_eq!(env.observation_shape(), (3, 4, 3));
        assert_eq!(env.reward_range().0, f32::NEG_INFINITY);
    }
}
