use rand::Rng;

use crate::snake::Snake;
use crate::state::Board;
use crate::Coords;

/// Picks a uniformly random interior cell that the snake does not occupy.
///
/// Rejection sampling with no retry cap: the board must have at least one
/// free interior cell.
pub fn spawn_food<R: Rng + ?Sized>(rng: &mut R, board: &Board, snake: &Snake) -> Coords {
    let (max_x, max_y) = board.interior_max();

    loop {
        let pos = (rng.gen_range(1..=max_x), rng.gen_range(1..=max_y));
        if !snake.contains(&pos) {
            log::debug!("food spawned at {:?}", pos);
            return pos;
        }
    }
}
