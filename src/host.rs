//! Host side of the snake game: input translation and tick cadence.

use crate::shell::Navigation;
use game::prelude::*;
use std::time::Duration;

/// Keys the snake view reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
	Up,
	Down,
	Left,
	Right,
	W,
	A,
	S,
	D,
	R,
	Escape,
}

impl Key {
	/// Heading the key steers to, if it's a steering key.
	pub fn direction(self) -> Option<Direction> {
		match self {
			Self::Up | Self::W => Some(Direction::Up),
			Self::Down | Self::S => Some(Direction::Down),
			Self::Left | Self::A => Some(Direction::Left),
			Self::Right | Self::D => Some(Direction::Right),
			Self::R | Self::Escape => None,
		}
	}
}

/// Owns a [`GridSimulation`] and runs it at a fixed cadence.
#[derive(Debug)]
pub struct SnakeHost {
	sim: GridSimulation,
	clock: TickClock,
	notice: Option<GameWarning>,
}

impl SnakeHost {
	/// Return a new [`SnakeHost`] stepping the game every `interval`.
	pub fn new(settings: Settings, interval: Duration) -> game::Result<Self> {
		Ok(Self {
			sim: GridSimulation::with_settings(settings)?,
			clock: TickClock::new(interval)?,
			notice: None,
		})
	}

	/// React to a key press. Return a navigation request if the key asks to
	/// leave the view.
	///
	/// `R` restarts only once the game is over.
	pub fn key(&mut self, key: Key) -> Option<Navigation> {
		if let Some(direction) = key.direction() {
			self.sim.set_direction(direction);
			return None;
		}
		match key {
			Key::R if self.sim.is_game_over() => self.restart(),
			Key::Escape => return Some(Navigation::BackToMenu),
			_ => (),
		}
		None
	}

	/// Restart control. Works in any state.
	pub fn restart(&mut self) {
		self.sim.reset();
		self.clock.reset();
		self.notice = None;
	}

	/// Let `elapsed` frame time pass and run every tick that became due.
	///
	/// Nothing runs while the game is over.
	pub fn update(&mut self, elapsed: Duration) -> Vec<StepOutcome> {
		self.update_steered(elapsed, |_| None)
	}

	/// Same as [`SnakeHost::update`], but `steer` may pick the heading right
	/// before every tick, so a frame running several ticks never reuses a
	/// stale decision. Returning `None` keeps the pending heading.
	pub fn update_steered<F>(&mut self, elapsed: Duration, mut steer: F) -> Vec<StepOutcome>
	where
		F: FnMut(&GridSimulation) -> Option<Direction>,
	{
		if self.sim.is_game_over() {
			return Vec::new();
		}

		let due = self.clock.advance(elapsed);
		let mut outcomes = Vec::with_capacity(due as usize);
		for _ in 0..due {
			if let Some(direction) = steer(&self.sim) {
				self.sim.set_direction(direction);
			}
			outcomes.push(self.sim.step());
			if self.sim.is_game_over() {
				self.clock.reset();
				break;
			}
		}
		if let Some(warning) = self.sim.take_warning() {
			log::warn!("{}", warning);
			self.notice = Some(warning);
		}
		outcomes
	}

	/// Text for the score line.
	pub fn score_text(&self) -> String {
		format!("Score: {}", self.sim.score())
	}

	/// Text for the status line.
	pub fn status_text(&self) -> String {
		if self.sim.is_game_over() {
			String::from("Game over! Press R to restart")
		} else if let Some(notice) = self.notice {
			format!("Careful: {}", notice)
		} else {
			String::from("Steer with W A S D or the arrow keys\nPress R to restart after game over")
		}
	}

	/// Board to be drawn this frame.
	pub fn snapshot(&self) -> Snapshot {
		self.sim.snapshot()
	}

	/// Return the hosted game.
	pub fn sim(&self) -> &GridSimulation {
		&self.sim
	}
}
