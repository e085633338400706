/// Number of slots in the Q-table's action dimension. Indices 0-3 are the
/// directional moves; index 4 is the reserved wait slot (`Action::Idle`).
pub const ACTION_SPACE: usize = 5;

/// A discrete move the agent can take on one tick.
///
/// The game loop dispatches on the literal wire codes {UP=0, RIGHT=1, DOWN=2,
/// LEFT=3, IDLE=-1}, so `code` must stay stable. The dense table index used
/// by the Q-table is a separate mapping in which `Idle` occupies slot 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Right,
    Down,
    Left,
    Idle,
}

impl Action {
    /// All actions in table-index order.
    pub const ALL: [Action; ACTION_SPACE] =
        [Action::Up, Action::Right, Action::Down, Action::Left, Action::Idle];

    /// Stable wire encoding consumed by the orchestrating game loop.
    pub fn code(self) -> i32 {
        match self {
            Action::Up => 0,
            Action::Right => 1,
            Action::Down => 2,
            Action::Left => 3,
            Action::Idle => -1,
        }
    }

    pub fn from_code(code: i32) -> Option<Action> {
        match code {
            0 => Some(Action::Up),
            1 => Some(Action::Right),
            2 => Some(Action::Down),
            3 => Some(Action::Left),
            -1 => Some(Action::Idle),
            _ => None,
        }
    }

    /// Dense index into a Q-table row.
    pub fn index(self) -> usize {
        match self {
            Action::Up => 0,
            Action::Right => 1,
            Action::Down => 2,
            Action::Left => 3,
            Action::Idle => 4,
        }
    }

    /// Total decoder over the table's action dimension: every index in
    /// `0..ACTION_SPACE` maps to an action, with slot 4 as wait.
    pub fn from_index(index: usize) -> Option<Action> {
        Action::ALL.get(index).copied()
    }

    /// Grid offset of the move. `Idle` stays in place.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Action::Up => (0, -1),
            Action::Right => (1, 0),
            Action::Down => (0, 1),
            Action::Left => (-1, 0),
            Action::Idle => (0, 0),
        }
    }

    pub fn is_directional(self) -> bool {
        !matches!(self, Action::Idle)
    }
}
