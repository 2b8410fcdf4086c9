//! Terminal snake.
//!
//! The game logic (`snake`, `food`, `state`, `input`, `render`) is pure and
//! terminal-free; `term` and `game` wire it to a real terminal.

pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod render;
pub mod snake;
pub mod state;
pub mod term;

pub type Coord = i16;
pub type Coords = (Coord, Coord);
