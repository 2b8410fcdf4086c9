use std::{thread::sleep, time::Duration};

use anyhow::{bail, Result};
use crossterm::event::KeyEvent;
use rand::Rng;

use crate::config::Config;
use crate::input::{is_ctrl_c, poll_input, TickInput};
use crate::render::{frame, game_over_lines};
use crate::snake::Direction;
use crate::state::{GameOverReason, GameState, StepOutcome};
use crate::term::TermManager;

const START_DELAY: Duration = Duration::from_secs(1);
/// Score line, hint line and the game-over message below the board.
const STATUS_ROWS: i16 = 6;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickResult {
    Running,
    Over(GameOverReason),
    /// Ctrl+C: the state was not touched.
    Interrupted,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The player saw the game-over screen and acknowledged it.
    Finished { score: u32 },
    /// Ctrl+C: leave immediately.
    Aborted,
}

pub struct SnakeGame<R: Rng> {
    config: Config,
    term: TermManager,
    rng: R,
}

impl<R: Rng> SnakeGame<R> {
    pub fn new(config: Config, term: TermManager, rng: R) -> Self {
        SnakeGame { config, term, rng }
    }

    pub fn initialize(&mut self) -> Result<()> {
        self.config.validate()?;
        self.term.setup()?;

        let (w, h) = self.term.get_terminal_size()?;
        if w < self.config.width || h < self.config.height + STATUS_ROWS {
            bail!(
                "terminal is {}x{}, the board needs at least {}x{}",
                w,
                h,
                self.config.width,
                self.config.height + STATUS_ROWS
            );
        }

        Ok(())
    }

    pub fn run(&mut self) -> Result<Outcome> {
        self.show_intro()?;

        let mut state = GameState::new(&self.config, &mut self.rng);
        log::debug!("running");

        loop {
            let input = self.read_input(&state);
            match tick(&mut state, input, &mut self.rng) {
                TickResult::Interrupted => return Ok(self.abort()),
                TickResult::Over(_) => {
                    self.term.draw_frame(&frame(&state))?;
                    break;
                }
                TickResult::Running => {
                    self.term.draw_frame(&frame(&state))?;
                    sleep(self.config.tick_interval);
                }
            }
        }

        self.game_over(&state)
    }

    pub fn restore(&mut self) -> Result<()> {
        self.term.restore()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn show_intro(&mut self) -> Result<()> {
        self.term.clear()?;
        self.term.show_message(0, &["Snake Game starting...".to_string()])?;
        sleep(START_DELAY);
        Ok(())
    }

    fn read_input(&self, state: &GameState) -> TickInput {
        fold_keys(self.term.read_key_events_queue(), state.direction())
    }

    fn abort(&self) -> Outcome {
        log::warn!("interrupted");
        Outcome::Aborted
    }

    fn game_over(&mut self, state: &GameState) -> Result<Outcome> {
        let reason = state.game_over_reason().unwrap_or(GameOverReason::Quit);
        log::info!(
            "game over ({:?}), score {}, length {}",
            reason,
            state.score(),
            state.snake().len()
        );

        let top = frame(state).len() as u16;
        self.term.show_message(top, &game_over_lines(state.score()))?;

        let ack = self
            .term
            .discard_pending_keys()
            .and_then(|_| self.term.read_key_blocking());
        Ok(acknowledge(ack, state.score()))
    }
}

/// Outcome of the key pressed on the end screen; a broken stream still finishes normally.
pub fn acknowledge(ack: Result<KeyEvent>, score: u32) -> Outcome {
    match ack {
        Ok(key) if is_ctrl_c(&key) => {
            log::warn!("interrupted");
            Outcome::Aborted
        }
        Ok(_) => Outcome::Finished { score },
        Err(err) => {
            log::warn!("input stream failed on the end screen: {:#}", err);
            Outcome::Finished { score }
        }
    }
}

/// Turns one tick's read into input. A broken input stream ends the game like a quit.
pub fn fold_keys(keys: Result<Vec<KeyEvent>>, current: Direction) -> TickInput {
    match keys {
        Ok(keys) => poll_input(&keys, current),
        Err(err) => {
            log::warn!("input stream failed, quitting: {:#}", err);
            TickInput { quit: true, ..TickInput::default() }
        }
    }
}

/// Applies one tick of input to `state` and advances it.
///
/// A turn buffered alongside Escape is taken before quitting, but the snake
/// does not move on a quitting tick.
pub fn tick<R: Rng + ?Sized>(state: &mut GameState, input: TickInput, rng: &mut R) -> TickResult {
    if input.interrupt {
        return TickResult::Interrupted;
    }

    if let Some(dir) = input.direction {
        state.set_direction(dir);
    }

    if input.quit {
        state.quit();
    } else if let StepOutcome::Ate = state.update(rng) {
        log::debug!("ate, score {}", state.score());
    }

    match state.game_over_reason() {
        Some(reason) => TickResult::Over(reason),
        None => TickResult::Running,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Snake;
    use anyhow::anyhow;
    use crossterm::event::{KeyCode, KeyModifiers};
    use rand::{rngs::StdRng, SeedableRng};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(3)
    }

    fn state() -> GameState {
        let snake = Snake::from_cells(&[(10, 10), (10, 11)], Direction::Up);
        GameState::with_parts(&Config::default(), snake, (30, 3))
    }

    #[test]
    fn plain_tick_moves_the_snake() {
        let mut state = state();
        assert_eq!(tick(&mut state, TickInput::default(), &mut rng()), TickResult::Running);
        assert_eq!(state.snake().head(), (10, 9));
    }

    #[test]
    fn quit_ends_the_game_without_moving() {
        let mut state = state();
        let input = TickInput { quit: true, ..TickInput::default() };
        assert_eq!(tick(&mut state, input, &mut rng()), TickResult::Over(GameOverReason::Quit));
        assert_eq!(state.snake().head(), (10, 10));
        assert!(state.is_over());
    }

    #[test]
    fn interrupt_leaves_the_state_alone() {
        let mut state = state();
        let input = TickInput { direction: Some(Direction::Left), interrupt: true, ..TickInput::default() };
        assert_eq!(tick(&mut state, input, &mut rng()), TickResult::Interrupted);
        assert_eq!(state.snake().head(), (10, 10));
        assert_eq!(state.direction(), Direction::Up);
        assert!(!state.is_over());
    }

    #[test]
    fn turn_buffered_with_escape_is_applied_before_quitting() {
        let mut state = state();
        let input = TickInput { direction: Some(Direction::Right), quit: true, interrupt: false };
        assert_eq!(tick(&mut state, input, &mut rng()), TickResult::Over(GameOverReason::Quit));
        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.snake().head(), (10, 10));
    }

    #[test]
    fn broken_input_stream_ends_the_game_as_a_quit() {
        let input = fold_keys(Err(anyhow!("stdin closed")), Direction::Up);
        assert_eq!(input, TickInput { quit: true, ..TickInput::default() });

        let mut state = state();
        assert_eq!(tick(&mut state, input, &mut rng()), TickResult::Over(GameOverReason::Quit));
        assert_eq!(state.snake().head(), (10, 10));
    }

    #[test]
    fn escape_with_a_turn_reports_quit() {
        let keys = vec![
            KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
        ];
        let input = fold_keys(Ok(keys), Direction::Up);

        let mut state = state();
        assert_eq!(tick(&mut state, input, &mut rng()), TickResult::Over(GameOverReason::Quit));
        assert_eq!(state.direction(), Direction::Right);
    }

    #[test]
    fn ctrl_c_short_circuits_the_tick() {
        let keys = vec![KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)];
        let input = fold_keys(Ok(keys), Direction::Up);

        let mut state = state();
        assert_eq!(tick(&mut state, input, &mut rng()), TickResult::Interrupted);
        assert!(!state.is_over());
    }

    #[test]
    fn end_screen_input_failure_still_finishes() {
        assert_eq!(
            acknowledge(Err(anyhow!("stdin closed")), 40),
            Outcome::Finished { score: 40 }
        );
    }

    #[test]
    fn end_screen_keys() {
        let any = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(acknowledge(Ok(any), 10), Outcome::Finished { score: 10 });
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(acknowledge(Ok(ctrl_c), 10), Outcome::Aborted);
    }

    #[test]
    fn crash_reports_its_reason() {
        let snake = Snake::from_cells(&[(10, 1)], Direction::Up);
        let mut state = GameState::with_parts(&Config::default(), snake, (30, 3));
        assert_eq!(tick(&mut state, TickInput::default(), &mut rng()), TickResult::Over(GameOverReason::Wall));
    }
}
