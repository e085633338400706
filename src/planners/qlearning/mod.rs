//! Tabular Q-learning navigation policy.
//!
//! The trainer runs bounded simulated episodes against the environment and
//! fills a dense action-value table with one-step Bellman updates; the
//! controller then replays the table greedily, one action per tick.

mod controller;
mod table;
mod trainer;

pub use controller::QLearningController;
pub use table::QTable;
pub use trainer::{EpisodeStats, QLearningConfig, QTrainer, TrainingStats};
