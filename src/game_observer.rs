use tracing::{debug, info};

use crate::game::GameOutcome;
use crate::infra::{Action, Position};

/// Trait for observing game events during execution. All methods default to
/// no-ops so observers only implement what they care about.
pub trait GameObserver {
    /// Called once before the first tick.
    fn on_game_start(&mut self, map_width: i32, map_height: i32) {
        let _ = (map_width, map_height);
    }

    /// Called every tick with the action the controller selected and the
    /// hero position it was selected from.
    fn on_action_selected(&mut self, tick: usize, hero: Position, action: Action) {
        let _ = (tick, hero, action);
    }

    /// Called when the run finishes.
    fn on_game_finished(&mut self, outcome: GameOutcome, ticks: usize) {
        let _ = (outcome, ticks);
    }
}

/// Observer that narrates the run through `tracing`.
pub struct DefaultObserver;

impl GameObserver for DefaultObserver {
    fn on_game_start(&mut self, map_width: i32, map_height: i32) {
        info!("starting run on a {}x{} map", map_width, map_height);
    }

    fn on_action_selected(&mut self, tick: usize, hero: Position, action: Action) {
        debug!(tick, ?hero, ?action, "action selected");
    }

    fn on_game_finished(&mut self, outcome: GameOutcome, ticks: usize) {
        info!("run finished: {:?} after {} ticks", outcome, ticks);
    }
}
