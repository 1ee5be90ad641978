//! Animal Arena demo driver
//!
//! Loads an arena configuration (first argument, or a built-in arena), then
//! runs a seeded random rollout against the headless backend and logs rewards.
//!
//! Usage: `animal-arena [arena.json] [steps] [seed]`

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), animal_arena::ArenaError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Animal Arena (headless) starting...");
    demo::run(std::env::args().skip(1).collect())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The demo only targets native; the library is usable from any target
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use animal_arena::sim::Action;
    use animal_arena::{
        Arena, ArenaConfig, ArenaEnv, ArenaError, EnvConfig, HeadlessBackend, Item, ItemKind,
        Vector3,
    };
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    const DEFAULT_STEPS: u32 = 2_000;
    const DEFAULT_SEED: u64 = 42;

    /// Two multi goals, a single goal, a hot zone and a wall around a fixed agent
    fn builtin_arena() -> Arena {
        Arena {
            t: 250,
            blackouts: vec![-40],
            ..Arena::default()
        }
        .with_item(
            Item::new(ItemKind::Agent)
                .with_position(Vector3::new(20.0, 0.0, 20.0))
                .with_rotation(0.0),
        )
        .with_item(
            Item::new(ItemKind::GoodGoalMulti)
                .with_position(Vector3::new(20.0, 0.0, 14.0))
                .with_size(Vector3::new(1.0, 1.0, 1.0))
                .with_position(Vector3::new(26.0, 0.0, 20.0))
                .with_size(Vector3::new(1.0, 1.0, 1.0)),
        )
        .with_item(Item::new(ItemKind::GoodGoal).with_size(Vector3::new(2.0, 2.0, 2.0)))
        .with_item(
            Item::new(ItemKind::HotZone)
                .with_position(Vector3::new(14.0, 0.0, 20.0))
                .with_size(Vector3::new(4.0, 0.0, 4.0)),
        )
        .with_item(
            Item::new(ItemKind::Wall)
                .with_position(Vector3::new(20.0, 0.0, 30.0))
                .with_size(Vector3::new(10.0, 2.0, 1.0))
                .with_rotation(0.0),
        )
    }

    pub fn run(args: Vec<String>) -> Result<(), ArenaError> {
        let arena = match args.first() {
            Some(path) => {
                log::info!("Loading arenas from {}", path);
                ArenaConfig::load(path)?.arena(0)?.clone()
            }
            None => builtin_arena(),
        };
        let steps = args
            .get(1)
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_STEPS);
        let seed = args
            .get(2)
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_SEED);

        let config = EnvConfig::default().with_seed(seed);
        let backend = HeadlessBackend::new(&config);
        let mut env = ArenaEnv::new(backend, arena, config)?;
        log::info!(
            "Action space {:?}, observation shape {:?}",
            env.action_space(),
            env.observation_shape()
        );

        let mut policy = Pcg32::seed_from_u64(seed ^ 0x5eed);
        let mut episode_reward = 0.0;
        let mut totals = Vec::new();
        let mut dark_frames = 0u32;

        for _ in 0..steps {
            let action = Action::new(policy.random_range(0..3), policy.random_range(0..3));
            let result = env.step(action)?;
            episode_reward += result.reward;
            if result.info.blacked_out {
                dark_frames += 1;
            }
            if result.terminal {
                log::info!(
                    "Episode {} finished: reward {:.5}{}",
                    totals.len() + 1,
                    episode_reward,
                    if result.info.timed_out { " (timeout)" } else { "" }
                );
                totals.push(episode_reward);
                episode_reward = 0.0;
            }
        }

        let top = env.get_top_view()?;
        log::info!("Top view {}x{}", top.width, top.height);

        let mean = if totals.is_empty() {
            0.0
        } else {
            totals.iter().sum::<f32>() / totals.len() as f32
        };
        log::info!(
            "{} steps ({} backend ticks), {} episodes finished, mean reward {:.5}, {} blacked-out frames",
            steps,
            env.backend().ticks(),
            totals.len(),
            mean,
            dark_frames
        );
        Ok(())
    }
}
