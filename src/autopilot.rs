//! Greedy steering used to run the snake game without a player.

use game::prelude::*;
use rand::Rng;

/// Headings the snake can take next tick without crashing.
///
/// The reverse of the current heading is never offered, and cells covered by
/// the body count as blocked even if the tail is about to leave them.
pub fn safe_directions(sim: &GridSimulation) -> Vec<Direction> {
	let (width, height) = sim.settings().grid_size;
	let head = sim.snake().head();

	Direction::ALL
		.iter()
		.copied()
		.filter(|&direction| direction != -sim.heading())
		.filter(|&direction| {
			let next = head + direction;
			next.within(width, height) && !sim.snake().contains(next)
		})
		.collect()
}

/// Pick the safe heading that gets closest to the food.
///
/// Without food the current heading is kept when it's safe. If nothing is
/// safe, any heading goes.
pub fn choose_direction<R: Rng + ?Sized>(sim: &GridSimulation, rng: &mut R) -> Direction {
	let safe = safe_directions(sim);
	let head = sim.snake().head();

	let choice = match sim.food() {
		Some(food) => safe
			.iter()
			.copied()
			.min_by_key(|&direction| (head + direction).distance(food)),
		None => safe
			.iter()
			.copied()
			.find(|&direction| direction == sim.heading())
			.or_else(|| safe.first().copied()),
	};

	choice.unwrap_or_else(|| {
		log::debug!("no safe move from {}", head);
		rng.gen()
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::{rngs::StdRng, SeedableRng};

	fn sim(grid_size: (usize, usize), initial_length: usize) -> GridSimulation {
		GridSimulation::with_settings(Settings {
			grid_size,
			initial_length,
			seed: Some(11),
			..Default::default()
		})
		.unwrap()
	}

	#[test]
	fn never_offers_reversal_or_walls() {
		// single row, the only free cell holds the food
		let mut sim = sim((3, 1), 2);
		assert_eq!(sim.step(), StepOutcome::Ate);
		assert_eq!(sim.snake().head(), Coordinates::new(2, 0));

		assert!(safe_directions(&sim).is_empty());
	}

	#[test]
	fn heads_for_food() {
		let sim = sim((10, 10), 3);
		let food = sim.food().unwrap();
		let head = sim.snake().head();
		let mut rng = StdRng::seed_from_u64(0);

		let safe = safe_directions(&sim);
		let best = safe.iter().map(|&d| (head + d).distance(food)).min();

		let direction = choose_direction(&sim, &mut rng);
		assert!(safe.contains(&direction));
		assert_eq!(Some((head + direction).distance(food)), best);
	}

	#[test]
	fn autopilot_scores() {
		let mut sim = sim((12, 12), 3);
		let mut rng = StdRng::seed_from_u64(0);

		for _ in 0..200 {
			if sim.is_game_over() {
				break;
			}
			let direction = choose_direction(&sim, &mut rng);
			sim.set_direction(direction);
			sim.step();
		}

		assert!(sim.score() > 0);
	}
}
