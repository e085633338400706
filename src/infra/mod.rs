mod action;
mod types;

pub use action::{ACTION_SPACE, Action};
pub use types::Position;

// ============================================================================
// Helper functions
// ============================================================================

/// Map an adjacent waypoint to the move that reaches it. Returns `None` when
/// the waypoint is not exactly one step away from `current`.
pub fn step_action(current: Position, next: Position) -> Option<Action> {
    match (next.x - current.x, next.y - current.y) {
        (0, -1) => Some(Action::Up),
        (1, 0) => Some(Action::Right),
        (0, 1) => Some(Action::Down),
        (-1, 0) => Some(Action::Left),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_action_rejects_non_adjacent_cells() {
        let current = Position::new(2, 2);
        assert_eq!(step_action(current, Position::new(2, 1)), Some(Action::Up));
        assert_eq!(step_action(current, Position::new(3, 2)), Some(Action::Right));
        // Same column but two rows away: not a single step.
        assert_eq!(step_action(current, Position::new(2, 4)), None);
        // Diagonal.
        assert_eq!(step_action(current, Position::new(3, 3)), None);
        // Same cell.
        assert_eq!(step_action(current, current), None);
    }
}
