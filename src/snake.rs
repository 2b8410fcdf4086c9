use std::collections::VecDeque;

use crate::{Coord, Coords};
use Direction::*;
use MoveResult::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    /// Unit vector in board coordinates (y grows downwards).
    pub fn delta(self) -> (Coord, Coord) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Crash {
    Wall,
    Body,
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveResult {
    /// `old_tail` is `None` on a growth step.
    Moved { new_head: Coords, old_tail: Option<Coords> },
    Crashed(Crash),
}

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Coords>,
    direction: Direction,
}

impl Snake {
    pub fn new(pos: Coords, direction: Direction) -> Self {
        Snake { body: VecDeque::from(vec![pos]), direction }
    }

    /// Builds a snake from explicit cells, head first. Panics on an empty body.
    pub fn from_cells(cells: &[Coords], direction: Direction) -> Self {
        assert!(!cells.is_empty(), "a snake needs at least one cell");
        Snake { body: cells.iter().copied().collect(), direction }
    }

    pub fn body(&self) -> &VecDeque<Coords> {
        &self.body
    }

    pub fn head(&self) -> Coords {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn contains(&self, pos: &Coords) -> bool {
        self.body.contains(pos)
    }

    pub fn next_head(&self) -> Coords {
        let (x, y) = self.head();
        let (dx, dy) = self.direction.delta();
        (x + dx, y + dy)
    }

    /// Advances one cell inside the interior `1..=max_x` × `1..=max_y`.
    ///
    /// On a crash the body is left untouched. The tail is kept when the new
    /// head lands on `food`.
    pub fn move_step(&mut self, max_x: Coord, max_y: Coord, food: Coords) -> MoveResult {
        let new_head = self.next_head();

        if new_head.0 < 1 || new_head.1 < 1 || new_head.0 > max_x || new_head.1 > max_y {
            return Crashed(Crash::Wall);
        }

        if self.body.contains(&new_head) {
            return Crashed(Crash::Body);
        }

        self.body.push_front(new_head);

        if new_head == food {
            Moved { new_head, old_tail: None }
        } else {
            Moved { new_head, old_tail: self.body.pop_back() }
        }
    }

    /// Reversals are ignored; returns whether the direction was taken.
    pub fn set_direction(&mut self, new_direction: Direction) -> bool {
        if new_direction == self.direction.opposite() {
            return false;
        }
        self.direction = new_direction;
        true
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }
}
