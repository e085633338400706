use crate::game_observer::GameObserver;
use crate::planners::Controller;
use crate::state::Environment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The hero stands on an exit cell.
    ExitReached,
    /// The tick budget ran out first.
    TickLimit,
}

/// Drives one controller against one environment, tick by tick: query the
/// next action, tell the observer, apply it, stop on exit or tick cap.
pub struct Game<E: Environment> {
    env: E,
    observer: Box<dyn GameObserver>,
}

impl<E: Environment> Game<E> {
    pub fn new(env: E, observer: impl GameObserver + 'static) -> Self {
        Self {
            env,
            observer: Box::new(observer),
        }
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut E {
        &mut self.env
    }

    pub fn run(&mut self, controller: &mut impl Controller<E>, max_ticks: usize) -> GameOutcome {
        self.observer.on_game_start(self.env.width(), self.env.height());

        let mut ticks = 0;
        let outcome = loop {
            if self.env.is_exit(self.env.hero_position()) {
                break GameOutcome::ExitReached;
            }
            if ticks >= max_ticks {
                break GameOutcome::TickLimit;
            }

            let hero = self.env.hero_position();
            let action = controller.next_action(&self.env);
            self.observer.on_action_selected(ticks, hero, action);

            self.env.apply_action(action);
            ticks += 1;
        };

        self.observer.on_game_finished(outcome, ticks);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_observer::DefaultObserver;
    use crate::infra::{Action, Position};
    use crate::planners::BestFirstPlanner;
    use crate::state::GridWorld;

    #[test]
    fn test_planner_driven_game_reaches_exit() {
        let world = GridWorld::from_ascii(&[
            "#######", //
            "#H..#.#", //
            "#.#.#.#", //
            "#.#...#", //
            "#.##.##", //
            "#....E#", //
            "#######",
        ]);
        let mut planner = BestFirstPlanner::new(&world);
        let mut game = Game::new(world, DefaultObserver);

        let outcome = game.run(&mut planner, 50);
        assert_eq!(outcome, GameOutcome::ExitReached);
        assert!(game.env().is_exit(game.env().hero_position()));
    }

    #[test]
    fn test_unreachable_exit_hits_tick_limit() {
        let world = GridWorld::from_ascii(&[
            "#####", //
            "#H#E#", //
            "#####",
        ]);
        let mut planner = BestFirstPlanner::new(&world);
        let mut game = Game::new(world, DefaultObserver);

        let outcome = game.run(&mut planner, 10);
        assert_eq!(outcome, GameOutcome::TickLimit);
        assert_eq!(game.env().hero_position(), Position::new(1, 1));
    }

    #[test]
    fn test_idle_controller_never_moves() {
        struct IdleController;
        impl<E: crate::state::Environment> Controller<E> for IdleController {
            fn next_action(&mut self, _env: &E) -> Action {
                Action::Idle
            }
        }

        let world = GridWorld::from_ascii(&["H.E"]);
        let start = world.hero_position();
        let mut game = Game::new(world, DefaultObserver);
        let outcome = game.run(&mut IdleController, 5);

        assert_eq!(outcome, GameOutcome::TickLimit);
        assert_eq!(game.env().hero_position(), start);
    }
}
