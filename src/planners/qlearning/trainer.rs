use rand::Rng;
use tracing::{debug, info};

use crate::infra::{ACTION_SPACE, Action, Position};
use crate::planners::qlearning::QTable;
use crate::state::Environment;

/// Training configuration. The defaults are the tuning the policy ships
/// with; tests shrink the episode budget.
#[derive(Debug, Clone)]
pub struct QLearningConfig {
    /// Probability of exploring uniformly at random instead of acting
    /// greedily. Constant for the whole run, no decay.
    pub exploration_rate: f32,
    /// Discount factor applied to the successor state's best value.
    pub discount: f32,
    /// Step size of the Bellman update.
    pub learning_rate: f32,
    /// Number of simulated episodes.
    pub episodes: usize,
    /// Step cap per episode; the only backstop against wandering forever.
    pub max_steps_per_episode: usize,
}

impl Default for QLearningConfig {
    fn default() -> Self {
        Self {
            exploration_rate: 0.9,
            discount: 0.9,
            learning_rate: 0.1,
            episodes: 1000,
            max_steps_per_episode: 300,
        }
    }
}

/// Summary of one finished episode, handed to the `train_until` hook.
#[derive(Debug, Clone, Copy)]
pub struct EpisodeStats {
    pub episode: usize,
    pub steps: usize,
    pub reached_exit: bool,
}

/// Aggregate counters for a whole training run.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrainingStats {
    pub episodes: usize,
    pub total_steps: usize,
    pub exits_reached: usize,
    pub aborted: bool,
}

/// Runs simulated episodes against the environment and fills a Q-table with
/// one-step Bellman updates.
///
/// The exploration source is injected so training can be made reproducible;
/// tests seed a `StdRng`, the demo binary may hand in `rand::rng()`.
pub struct QTrainer<R: Rng> {
    config: QLearningConfig,
    rng: R,
}

impl<R: Rng> QTrainer<R> {
    pub fn new(config: QLearningConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Run the full episode budget, then reset the environment so runtime
    /// play starts from the canonical initial placement.
    pub fn train<E: Environment>(&mut self, env: &mut E) -> (QTable, TrainingStats) {
        self.train_until(env, |_| true)
    }

    /// Like `train`, but `keep_going` sees every finished episode and can
    /// abort the remainder of a long run.
    pub fn train_until<E: Environment>(
        &mut self,
        env: &mut E,
        mut keep_going: impl FnMut(&EpisodeStats) -> bool,
    ) -> (QTable, TrainingStats) {
        let mut table = QTable::new(env.width(), env.height());
        let mut stats = TrainingStats::default();

        for episode in 0..self.config.episodes {
            let episode_stats = self.run_episode(env, &mut table, episode);

            stats.episodes += 1;
            stats.total_steps += episode_stats.steps;
            if episode_stats.reached_exit {
                stats.exits_reached += 1;
            }

            if !keep_going(&episode_stats) {
                info!("training aborted after episode {}", episode);
                stats.aborted = true;
                break;
            }
        }

        env.reset_game();
        info!(
            episodes = stats.episodes,
            total_steps = stats.total_steps,
            exits_reached = stats.exits_reached,
            "training finished"
        );
        (table, stats)
    }

    fn run_episode<E: Environment>(
        &mut self,
        env: &mut E,
        table: &mut QTable,
        episode: usize,
    ) -> EpisodeStats {
        env.reset_game();
        let mut state = env.hero_position();
        let mut steps = 0;

        while !env.is_exit(state) && steps < self.config.max_steps_per_episode {
            let action_index = self.select_action(table, state);
            let action = Action::ALL[action_index];

            // Lookahead only; the environment is not touched until the
            // update below has read the successor's value.
            let next = env.hero_next_position(action);
            if !env.is_valid_move(next) {
                // Retry the same state. The step counter stays untouched, so
                // a state whose every action is invalid spins until the wait
                // slot or an abort gets it out.
                continue;
            }

            let reward = if env.is_exit(next) {
                100.0
            } else if env.is_unexplored(next) {
                10.0
            } else {
                -1.0
            };

            let target = reward + self.config.discount * table.max_value(next);
            table.update(state, action_index, self.config.learning_rate, target);

            env.apply_action(action);
            state = next;
            steps += 1;
        }

        let reached_exit = env.is_exit(state);
        debug!(episode, steps, reached_exit, "episode finished");
        EpisodeStats {
            episode,
            steps,
            reached_exit,
        }
    }

    fn select_action(&mut self, table: &QTable, state: Position) -> usize {
        if self.rng.random::<f32>() < self.config.exploration_rate {
            self.rng.random_range(0..ACTION_SPACE)
        } else {
            table.best_action_index(state)
        }
    }
}
