mod grid;

pub use grid::{GridWorld, Tile};

use crate::infra::{Action, Position};

/// Contract of the external collaborator that owns the authoritative grid
/// state, the validity rules and the hero position. Controllers only ever
/// talk to the dungeon through this trait.
///
/// Reference points: `exit(0)` is the map entrance the hero spawns on and the
/// declared origin for route reconstruction; `exit(1)` is the heuristic
/// target of the search. They are distinct cells on most maps.
pub trait Environment {
    /// Grid width. Must be positive; a zero-sized grid is a fatal
    /// precondition violation, not a recoverable condition.
    fn width(&self) -> i32;

    /// Grid height. Must be positive.
    fn height(&self) -> i32;

    /// The i-th designated reference point.
    fn exit(&self, index: usize) -> Position;

    /// True iff the cell is a designated exit.
    fn is_exit(&self, pos: Position) -> bool;

    /// True iff a move onto this cell is currently legal.
    fn is_valid_move(&self, pos: Position) -> bool;

    /// True iff the cell has not been visited since the last reset. Used for
    /// reward shaping during training.
    fn is_unexplored(&self, pos: Position) -> bool;

    /// Current hero cell.
    fn hero_position(&self) -> Position;

    /// The cell the hero would occupy if `action` were applied. Pure
    /// lookahead, no mutation. Total over all actions: `Idle` (and the
    /// reserved wait slot) yields the hero's own cell.
    fn hero_next_position(&self, action: Action) -> Position;

    /// Reinitialize the hero placement and the unexplored grid. Called once
    /// per training episode and once more after training completes.
    fn reset_game(&mut self);

    /// Apply an action to the authoritative hero position. Invalid moves are
    /// ignored.
    fn apply_action(&mut self, action: Action);
}
