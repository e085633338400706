use tracing::debug;

use crate::infra::{Action, Position};
use crate::state::Environment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Floor,
    Exit,
}

/// In-process dungeon used by the demo binary and the test suite.
///
/// Built from an ASCII sketch: `#` wall, `.` floor, `E` exit, `H` hero spawn.
/// The spawn cell doubles as reference point 0 (the route origin); exits
/// follow in scan order, so `exit(1)` is the first `E` of the map.
#[derive(Debug, Clone)]
pub struct GridWorld {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
    reference_points: Vec<Position>,
    spawn: Position,
    hero: Position,
    unexplored: Vec<bool>,
}

impl GridWorld {
    pub fn from_ascii(rows: &[&str]) -> Self {
        assert!(!rows.is_empty(), "map must have at least one row");
        let width = rows[0].chars().count();
        assert!(width > 0, "map rows must not be empty");

        let mut tiles = Vec::with_capacity(width * rows.len());
        let mut exits = Vec::new();
        let mut spawn = None;

        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.chars().count(), width, "map row {} has inconsistent width", y);
            for (x, ch) in row.chars().enumerate() {
                let pos = Position::new(x as i32, y as i32);
                let tile = match ch {
                    '#' => Tile::Wall,
                    '.' => Tile::Floor,
                    'E' => {
                        exits.push(pos);
                        Tile::Exit
                    }
                    'H' => {
                        assert!(spawn.is_none(), "map declares more than one hero spawn");
                        spawn = Some(pos);
                        Tile::Floor
                    }
                    _ => panic!("unknown map character {:?} at ({}, {})", ch, x, y),
                };
                tiles.push(tile);
            }
        }

        let spawn = spawn.expect("map declares no hero spawn");
        let mut reference_points = vec![spawn];
        reference_points.extend(exits);

        let cell_count = tiles.len();
        let mut world = Self {
            width: width as i32,
            height: rows.len() as i32,
            tiles,
            reference_points,
            spawn,
            hero: spawn,
            unexplored: vec![true; cell_count],
        };
        world.reset_game();
        world
    }

    fn cell_index(&self, pos: Position) -> Option<usize> {
        if pos.x < 0 || pos.x >= self.width || pos.y < 0 || pos.y >= self.height {
            return None;
        }
        Some((pos.y * self.width + pos.x) as usize)
    }

    pub fn tile(&self, pos: Position) -> Option<Tile> {
        self.cell_index(pos).map(|i| self.tiles[i])
    }

    fn mark_explored(&mut self, pos: Position) {
        if let Some(i) = self.cell_index(pos) {
            self.unexplored[i] = false;
        }
    }
}

impl Environment for GridWorld {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn exit(&self, index: usize) -> Position {
        assert!(
            index < self.reference_points.len(),
            "reference point {} requested but map only has {}",
            index,
            self.reference_points.len()
        );
        self.reference_points[index]
    }

    fn is_exit(&self, pos: Position) -> bool {
        matches!(self.tile(pos), Some(Tile::Exit))
    }

    fn is_valid_move(&self, pos: Position) -> bool {
        matches!(self.tile(pos), Some(Tile::Floor | Tile::Exit))
    }

    fn is_unexplored(&self, pos: Position) -> bool {
        self.cell_index(pos).is_some_and(|i| self.unexplored[i])
    }

    fn hero_position(&self) -> Position {
        self.hero
    }

    fn hero_next_position(&self, action: Action) -> Position {
        self.hero.step(action)
    }

    fn reset_game(&mut self) {
        self.hero = self.spawn;
        self.unexplored.fill(true);
        self.mark_explored(self.spawn);
    }

    fn apply_action(&mut self, action: Action) {
        let next = self.hero.step(action);
        if self.is_valid_move(next) {
            self.hero = next;
            self.mark_explored(next);
        } else {
            debug!("ignoring invalid move {:?} from {:?}", action, self.hero);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_world() -> GridWorld {
        GridWorld::from_ascii(&[
            "#####", //
            "#H..#", //
            "#.#.#", //
            "#..E#", //
            "#####",
        ])
    }

    #[test]
    fn test_parse_dimensions_and_reference_points() {
        let world = small_world();
        assert_eq!(world.width(), 5);
        assert_eq!(world.height(), 5);
        assert_eq!(world.exit(0), Position::new(1, 1));
        assert_eq!(world.exit(1), Position::new(3, 3));
        assert_eq!(world.hero_position(), Position::new(1, 1));
    }

    #[test]
    fn test_validity_rules() {
        let world = small_world();
        assert!(world.is_valid_move(Position::new(2, 1)));
        assert!(world.is_valid_move(Position::new(3, 3))); // exit is enterable
        assert!(!world.is_valid_move(Position::new(0, 0))); // wall
        assert!(!world.is_valid_move(Position::new(2, 2))); // inner wall
        assert!(!world.is_valid_move(Position::new(-1, 1))); // out of bounds
        assert!(world.is_exit(Position::new(3, 3)));
        assert!(!world.is_exit(Position::new(1, 1)));
    }

    #[test]
    fn test_apply_action_and_exploration_tracking() {
        let mut world = small_world();
        assert!(!world.is_unexplored(Position::new(1, 1))); // spawn starts explored
        assert!(world.is_unexplored(Position::new(2, 1)));

        world.apply_action(Action::Right);
        assert_eq!(world.hero_position(), Position::new(2, 1));
        assert!(!world.is_unexplored(Position::new(2, 1)));

        // Walking into the wall above is ignored.
        world.apply_action(Action::Up);
        assert_eq!(world.hero_position(), Position::new(2, 1));

        world.reset_game();
        assert_eq!(world.hero_position(), Position::new(1, 1));
        assert!(world.is_unexplored(Position::new(2, 1)));
    }

    #[test]
    fn test_hero_next_position_is_total() {
        let world = small_world();
        assert_eq!(world.hero_next_position(Action::Right), Position::new(2, 1));
        assert_eq!(world.hero_next_position(Action::Up), Position::new(1, 0));
        assert_eq!(world.hero_next_position(Action::Idle), world.hero_position());
    }
}
