use std::env;

use dotenv::dotenv;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use zombot::{
    BestFirstPlanner, DefaultObserver, Environment, Game, GridWorld, QLearningConfig,
    QLearningController,
};

/// Demo dungeon: entrance top-left, exit bottom-right behind a detour.
const DEMO_MAP: &[&str] = &[
    "##########",
    "#H....#..#",
    "#.###.#.##",
    "#.#...#..#",
    "#.#.###..#",
    "#.#....#.#",
    "#...##...#",
    "######..E#",
    "##########",
];

fn get_env_var_u64(key: &str) -> Option<u64> {
    env::var(key).ok().and_then(|val| val.parse::<u64>().ok())
}

fn get_env_var_usize(key: &str) -> Option<usize> {
    env::var(key).ok().and_then(|val| val.parse::<usize>().ok())
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("zombot=debug,info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

fn main() {
    dotenv().ok();
    init_logging();

    let controller_kind =
        env::var("ZOMBOT_CONTROLLER").unwrap_or_else(|_| "best_first".to_string());
    let max_ticks = get_env_var_usize("ZOMBOT_MAX_TICKS").unwrap_or(200);

    let mut world = GridWorld::from_ascii(DEMO_MAP);

    match controller_kind.as_str() {
        "best_first" => {
            let mut planner = BestFirstPlanner::new(&world);
            let mut game = Game::new(world, DefaultObserver);
            game.run(&mut planner, max_ticks);
        }
        "qlearning" => {
            let mut config = QLearningConfig::default();
            if let Some(episodes) = get_env_var_usize("ZOMBOT_EPISODES") {
                config.episodes = episodes;
            }

            let rng = match get_env_var_u64("ZOMBOT_SEED") {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };

            tracing::info!(
                episodes = config.episodes,
                "training q-learning controller, this may take a moment"
            );
            let mut controller = QLearningController::train(&mut world, config, rng);
            assert_eq!(world.hero_position(), world.exit(0));

            let mut game = Game::new(world, DefaultObserver);
            game.run(&mut controller, max_ticks);
        }
        other => {
            panic!("unknown ZOMBOT_CONTROLLER {:?}, expected best_first or qlearning", other);
        }
    }
}
