mod best_first;
pub mod qlearning;

pub use best_first::BestFirstPlanner;
pub use qlearning::{QLearningConfig, QLearningController, QTable, QTrainer, TrainingStats};

use crate::infra::Action;
use crate::state::Environment;

/// Shared per-tick contract of the navigation controllers. The orchestrating
/// game loop asks for one action per tick; the environment is borrowed
/// read-only at query time, while construction (the planner's search, the
/// RL controller's training) takes whatever access it needs up front.
pub trait Controller<E: Environment> {
    fn next_action(&mut self, env: &E) -> Action;
}
