use rand::Rng;

use crate::config::Config;
use crate::food::spawn_food;
use crate::snake::{Crash, Direction, MoveResult, Snake};
use crate::{Coord, Coords};

/// Fixed grid; the outer ring is wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    width: Coord,
    height: Coord,
}

impl Board {
    pub fn new(width: Coord, height: Coord) -> Self {
        Board { width, height }
    }

    pub fn width(&self) -> Coord {
        self.width
    }

    pub fn height(&self) -> Coord {
        self.height
    }

    /// Largest interior coordinates; the interior starts at (1, 1).
    pub fn interior_max(&self) -> Coords {
        (self.width - 2, self.height - 2)
    }

    pub fn is_interior(&self, pos: Coords) -> bool {
        let (max_x, max_y) = self.interior_max();
        pos.0 >= 1 && pos.1 >= 1 && pos.0 <= max_x && pos.1 <= max_y
    }

    pub fn center(&self) -> Coords {
        (self.width / 2, self.height / 2)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverReason {
    Wall,
    SelfCollision,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    Ate,
    GameOver(GameOverReason),
}

#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    snake: Snake,
    food: Coords,
    score: u32,
    score_per_food: u32,
    over: Option<GameOverReason>,
}

impl GameState {
    /// Centered one-cell snake heading up, food placed at random.
    pub fn new<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Self {
        let board = Board::new(config.width, config.height);
        let snake = Snake::new(board.center(), Direction::Up);
        let food = spawn_food(rng, &board, &snake);
        GameState { board, snake, food, score: 0, score_per_food: config.score_per_food, over: None }
    }

    /// Builds a state from explicit parts, mostly for scenarios and tests.
    pub fn with_parts(config: &Config, snake: Snake, food: Coords) -> Self {
        let board = Board::new(config.width, config.height);
        GameState { board, snake, food, score: 0, score_per_food: config.score_per_food, over: None }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Coords {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn direction(&self) -> Direction {
        self.snake.get_direction()
    }

    pub fn is_over(&self) -> bool {
        self.over.is_some()
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.over
    }

    /// Returns whether the direction changed; reversals are refused.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        self.snake.set_direction(direction)
    }

    pub fn quit(&mut self) {
        if self.over.is_none() {
            self.over = Some(GameOverReason::Quit);
        }
    }

    /// One tick of movement. A finished game is left as is.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) -> StepOutcome {
        if let Some(reason) = self.over {
            return StepOutcome::GameOver(reason);
        }

        let (max_x, max_y) = self.board.interior_max();
        match self.snake.move_step(max_x, max_y, self.food) {
            MoveResult::Crashed(crash) => {
                let reason = match crash {
                    Crash::Wall => GameOverReason::Wall,
                    Crash::Body => GameOverReason::SelfCollision,
                };
                self.over = Some(reason);
                StepOutcome::GameOver(reason)
            }
            MoveResult::Moved { old_tail: None, .. } => {
                self.score += self.score_per_food;
                self.food = spawn_food(rng, &self.board, &self.snake);
                StepOutcome::Ate
            }
            MoveResult::Moved { .. } => StepOutcome::Moved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    #[test]
    fn new_state_is_centered_and_heading_up() {
        let state = GameState::new(&Config::default(), &mut rng());
        assert_eq!(state.snake().head(), (20, 10));
        assert_eq!(state.snake().len(), 1);
        assert_eq!(state.direction(), Direction::Up);
        assert_eq!(state.score(), 0);
        assert!(!state.is_over());
        assert!(state.board().is_interior(state.food()));
        assert_ne!(state.food(), (20, 10));
    }

    #[test]
    fn board_interior_excludes_the_wall_ring() {
        let board = Board::new(40, 20);
        assert!(board.is_interior((1, 1)));
        assert!(board.is_interior((38, 18)));
        assert!(!board.is_interior((0, 5)));
        assert!(!board.is_interior((39, 5)));
        assert!(!board.is_interior((5, 19)));
    }

    #[test]
    fn quit_marks_game_over_and_freezes_state() {
        let mut state = GameState::new(&Config::default(), &mut rng());
        state.quit();
        assert_eq!(state.game_over_reason(), Some(GameOverReason::Quit));
        assert_eq!(state.update(&mut rng()), StepOutcome::GameOver(GameOverReason::Quit));
        assert_eq!(state.snake().head(), (20, 10));
    }

    #[test]
    fn first_crash_reason_sticks() {
        let config = Config::default();
        let snake = Snake::from_cells(&[(1, 1)], Direction::Up);
        let mut state = GameState::with_parts(&config, snake, (5, 5));
        assert_eq!(state.update(&mut rng()), StepOutcome::GameOver(GameOverReason::Wall));
        state.quit();
        assert_eq!(state.game_over_reason(), Some(GameOverReason::Wall));
    }
}
