//! Food placement.

use crate::{aux::Coordinates, snake::Snake};
use rand::Rng;

/// Pick a uniformly random cell of a `width`x`height` board that isn't
/// occupied by `snake`.
///
/// Candidates are drawn until a free one is found or `attempts` draws were
/// spent. Return none if the snake already covers the whole board or the
/// budget ran out.
pub(crate) fn spawn<R: Rng + ?Sized>(
    rng: &mut R,
    (width, height): (usize, usize),
    snake: &Snake,
    attempts: usize,
) -> Option<Coordinates> {
    if snake.len() >= width * height {
        log::warn!("snake covers the whole {}x{} board, no room for food", width, height);
        return None;
    }

    for _ in 0..attempts {
        let candidate = Coordinates::new(
            rng.gen_range(0..width) as i32,
            rng.gen_range(0..height) as i32,
        );
        if !snake.contains(candidate) {
            log::trace!("food placed at {}", candidate);
            return Some(candidate);
        }
    }

    log::warn!("no free cell found for food after {} attempts", attempts);
    None
}
