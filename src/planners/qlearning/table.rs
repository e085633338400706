use crate::infra::{ACTION_SPACE, Position};

/// Dense action-value table over (cell, action).
///
/// Backed by a single flat buffer indexed by a computed linear offset, so
/// allocation happens once and lookups stay predictable. Values start at
/// zero; the trainer is the only writer, and the table is read-only once
/// training ends.
#[derive(Debug, Clone, PartialEq)]
pub struct QTable {
    width: i32,
    height: i32,
    values: Vec<f32>,
}

impl QTable {
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "grid must be non-empty, got {}x{}", width, height);
        Self {
            width,
            height,
            values: vec![0.0; width as usize * height as usize * ACTION_SPACE],
        }
    }

    /// Linear offset of (pos, action). Coordinates outside the allocated
    /// bounds are a contract violation by the environment, not a recoverable
    /// condition.
    fn offset(&self, pos: Position, action_index: usize) -> usize {
        assert!(
            pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height,
            "position {:?} outside the {}x{} table",
            pos,
            self.width,
            self.height
        );
        assert!(action_index < ACTION_SPACE, "action index {} out of range", action_index);
        (pos.y as usize * self.width as usize + pos.x as usize) * ACTION_SPACE + action_index
    }

    pub fn get(&self, pos: Position, action_index: usize) -> f32 {
        self.values[self.offset(pos, action_index)]
    }

    /// The action-value row for one cell.
    pub fn row(&self, pos: Position) -> &[f32] {
        let base = self.offset(pos, 0);
        &self.values[base..base + ACTION_SPACE]
    }

    /// Greatest value in a cell's row.
    pub fn max_value(&self, pos: Position) -> f32 {
        self.row(pos).iter().copied().fold(f32::MIN, f32::max)
    }

    /// Index of the greatest value in a cell's row; equal values resolve to
    /// the lowest index, so greedy selection is deterministic.
    pub fn best_action_index(&self, pos: Position) -> usize {
        let row = self.row(pos);
        let mut best = 0;
        for (index, &value) in row.iter().enumerate().skip(1) {
            if value > row[best] {
                best = index;
            }
        }
        best
    }

    /// One-step Bellman update:
    /// `Q[s,a] += alpha * (reward + gamma * max_a' Q[s',a'] - Q[s,a])`.
    pub fn update(
        &mut self,
        pos: Position,
        action_index: usize,
        alpha: f32,
        target: f32,
    ) {
        let offset = self.offset(pos, action_index);
        let current = self.values[offset];
        self.values[offset] = current + alpha * (target - current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::ACTION_SPACE;

    #[test]
    fn test_starts_zeroed() {
        let table = QTable::new(4, 3);
        for y in 0..3 {
            for x in 0..4 {
                for a in 0..ACTION_SPACE {
                    assert_eq!(table.get(Position::new(x, y), a), 0.0);
                }
            }
        }
    }

    #[test]
    fn test_rows_are_independent() {
        let mut table = QTable::new(3, 3);
        table.update(Position::new(1, 2), 3, 1.0, 7.5);

        assert_eq!(table.get(Position::new(1, 2), 3), 7.5);
        assert_eq!(table.get(Position::new(2, 1), 3), 0.0);
        assert_eq!(table.get(Position::new(1, 2), 2), 0.0);
        assert_eq!(table.max_value(Position::new(1, 2)), 7.5);
    }

    #[test]
    fn test_best_action_breaks_ties_on_lowest_index() {
        let mut table = QTable::new(2, 1);
        let pos = Position::new(0, 0);
        assert_eq!(table.best_action_index(pos), 0);

        table.update(pos, 1, 1.0, 5.0);
        table.update(pos, 3, 1.0, 5.0);
        assert_eq!(table.best_action_index(pos), 1);
    }

    #[test]
    fn test_bellman_update_moves_toward_target() {
        let mut table = QTable::new(1, 1);
        let pos = Position::new(0, 0);
        table.update(pos, 0, 0.1, 100.0);
        assert!((table.get(pos, 0) - 10.0).abs() < 1e-6);
        table.update(pos, 0, 0.1, 100.0);
        assert!((table.get(pos, 0) - 19.0).abs() < 1e-6);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_out_of_bounds_access_is_fatal() {
        let table = QTable::new(2, 2);
        table.get(Position::new(2, 0), 0);
    }
}
