pub mod game;
pub mod game_observer;
pub mod infra;
pub mod planners;
pub mod state;

// Re-export commonly used types for convenience
pub use game::{Game, GameOutcome};
pub use game_observer::{DefaultObserver, GameObserver};
pub use infra::{ACTION_SPACE, Action, Position};
pub use planners::{
    BestFirstPlanner, Controller, QLearningConfig, QLearningController, QTable, QTrainer,
};
pub use state::{Environment, GridWorld};
