//! Builds the full text frame for a game state.

use crate::config::{EMPTY_CHAR, FOOD_CHAR, SNAKE_BODY_CHAR, SNAKE_HEAD_CHAR, WALL_CHAR};
use crate::state::GameState;

pub const CONTROLS_HINT: &str = "Controls: W/A/S/D or Arrow Keys. ESC to quit.";

/// Walls, interior rows, score line and controls hint, top to bottom.
pub fn frame(state: &GameState) -> Vec<String> {
    let board = state.board();
    let snake = state.snake();
    let head = snake.head();
    let food = state.food();

    let wall_row: String = std::iter::repeat(WALL_CHAR).take(board.width() as usize).collect();
    let mut lines = Vec::with_capacity(board.height() as usize + 2);

    lines.push(wall_row.clone());

    for y in 1..board.height() - 1 {
        let mut line = String::with_capacity(board.width() as usize);
        line.push(WALL_CHAR);
        for x in 1..board.width() - 1 {
            let pos = (x, y);
            let ch = if pos == head {
                SNAKE_HEAD_CHAR
            } else if snake.contains(&pos) {
                SNAKE_BODY_CHAR
            } else if pos == food {
                FOOD_CHAR
            } else {
                EMPTY_CHAR
            };
            line.push(ch);
        }
        line.push(WALL_CHAR);
        lines.push(line);
    }

    lines.push(wall_row);
    lines.push(format!("Score: {}", state.score()));
    lines.push(CONTROLS_HINT.to_string());

    lines
}

/// Lines shown under the final frame.
pub fn game_over_lines(score: u32) -> Vec<String> {
    vec![
        String::new(),
        "GAME OVER!".to_string(),
        format!("Final Score: {}", score),
        "Press any key to exit...".to_string(),
    ]
}
