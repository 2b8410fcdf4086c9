//! Maps terminal key events to game input.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction::{self, *};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Turn(Direction),
    Quit,
    Interrupt,
}

/// What a single tick of buffered keys amounts to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickInput {
    pub direction: Option<Direction>,
    pub quit: bool,
    pub interrupt: bool,
}

pub fn map_key(ev: &KeyEvent) -> Option<KeyAction> {
    if is_ctrl_c(ev) {
        return Some(KeyAction::Interrupt);
    }

    match ev.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(KeyAction::Turn(Up)),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(KeyAction::Turn(Down)),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(KeyAction::Turn(Left)),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(KeyAction::Turn(Right)),
        KeyCode::Esc => Some(KeyAction::Quit),
        _ => None,
    }
}

/// Folds every key buffered this tick into one input.
///
/// Each turn is checked against `current`, the direction travelled on the
/// last tick; reversals are dropped and the last valid turn wins.
pub fn poll_input<'a, I>(keys: I, current: Direction) -> TickInput
where
    I: IntoIterator<Item = &'a KeyEvent>,
{
    let mut input = TickInput::default();

    for key in keys {
        match map_key(key) {
            Some(KeyAction::Turn(dir)) if dir != current.opposite() => input.direction = Some(dir),
            Some(KeyAction::Turn(_)) => {}
            Some(KeyAction::Quit) => input.quit = true,
            Some(KeyAction::Interrupt) => input.interrupt = true,
            None => {}
        }
    }

    input
}

pub fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}
