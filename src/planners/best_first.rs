use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use tracing::debug;

use crate::infra::{Action, Position, step_action};
use crate::planners::Controller;
use crate::state::Environment;

#[derive(Clone, Eq, PartialEq)]
struct Node {
    pos: Position,
    heuristic: i32,
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        other.heuristic.cmp(&self.heuristic)
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One-shot route planner: computes a path to the nearest reachable exit at
/// construction time, then replays it one waypoint per tick.
///
/// The search is pure best-first — the frontier is ordered by the Manhattan
/// distance of each candidate to the heuristic target alone, with no account
/// of distance already traveled, so the result is heuristically greedy rather
/// than guaranteed shortest.
pub struct BestFirstPlanner {
    path: VecDeque<Position>,
}

impl BestFirstPlanner {
    /// Plan with the map's own reference points: the search starts on the
    /// entrance cell `exit(0)`, aims at `exit(1)`, and reconstructs the route
    /// back to `exit(0)`.
    pub fn new<E: Environment>(env: &E) -> Self {
        Self::with_references(env, env.exit(0), env.exit(0), env.exit(1))
    }

    /// Plan with explicit reference points. `origin` is the declared root of
    /// the reconstruction and need not equal `start`; when it is not on the
    /// parent chain of the discovered exit, the route comes back empty.
    pub fn with_references<E: Environment>(
        env: &E,
        start: Position,
        origin: Position,
        target: Position,
    ) -> Self {
        let path = Self::find_path(env, start, origin, target);
        debug!("planned route of {} waypoints from {:?}", path.len(), start);
        Self {
            path: path.into_iter().collect(),
        }
    }

    /// Remaining waypoints, front first.
    pub fn remaining(&self) -> impl Iterator<Item = &Position> {
        self.path.iter()
    }

    /// Best-first search over the 4-connected grid, subject to the
    /// environment's move-validity rule.
    ///
    /// The frontier tolerates duplicate entries of the same cell (there is no
    /// decrease-key); a cell is marked visited when popped, and each enqueue
    /// of a still-unvisited neighbor overwrites its recorded parent.
    pub fn find_path<E: Environment>(
        env: &E,
        start: Position,
        origin: Position,
        target: Position,
    ) -> Vec<Position> {
        let mut frontier = BinaryHeap::new();
        let mut visited: HashSet<Position> = HashSet::new();
        let mut parents: HashMap<Position, Position> = HashMap::new();

        frontier.push(Node {
            pos: start,
            heuristic: start.distance(&target),
        });

        while let Some(Node { pos: current, .. }) = frontier.pop() {
            if env.is_exit(current) {
                return Self::reconstruct(current, origin, &parents);
            }

            visited.insert(current);
            for neighbor in current.neighbors() {
                if env.is_valid_move(neighbor) && !visited.contains(&neighbor) {
                    frontier.push(Node {
                        pos: neighbor,
                        heuristic: neighbor.distance(&target),
                    });
                    parents.insert(neighbor, current);
                }
            }
        }

        debug!("frontier exhausted without reaching an exit");
        Vec::new()
    }

    /// Backtrack parent pointers from the discovered exit to the declared
    /// origin. The chain only reaches the origin when it coincides with the
    /// search start; otherwise the route is reported empty.
    fn reconstruct(
        exit: Position,
        origin: Position,
        parents: &HashMap<Position, Position>,
    ) -> Vec<Position> {
        let mut path = Vec::new();
        let mut current = exit;
        while current != origin {
            path.push(current);
            match parents.get(&current) {
                Some(&parent) => current = parent,
                None => {
                    debug!("origin {:?} not on the parent chain of {:?}", origin, exit);
                    return Vec::new();
                }
            }
        }
        path.push(origin);
        path.reverse();
        path
    }
}

impl<E: Environment> Controller<E> for BestFirstPlanner {
    /// Replay one waypoint. The head of the route is consumed unconditionally;
    /// it only becomes a move when it is exactly one step from the hero and
    /// the environment confirms that step is legal right now. A mismatched or
    /// invalid waypoint costs an `Idle` tick and the route skips past it.
    fn next_action(&mut self, env: &E) -> Action {
        let Some(next) = self.path.pop_front() else {
            return Action::Idle;
        };

        let hero = env.hero_position();
        match step_action(hero, next) {
            Some(action) if env.is_valid_move(next) => action,
            _ => {
                debug!("waypoint {:?} unusable from {:?}, idling past it", next, hero);
                Action::Idle
            }
        }
    }
}
