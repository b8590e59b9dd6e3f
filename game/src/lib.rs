//! Game abstractions crate.
//!
//! The centerpiece is [`GridSimulation`], a tick-driven snake game on a fixed
//! size board. [`tictactoe`] and [`memory`] hold the two smaller games, and
//! [`clock`] has the helpers hosts use to drive them from a frame loop.

pub mod aux;
pub mod clock;
pub mod error;
mod food;
pub mod grid;
pub mod memory;
pub mod snake;
pub mod tictactoe;

/// This is an alias for standart [`Result`](std::result::Result) type which
/// represents failure.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Common reexports in one place.
pub mod prelude {
	pub use crate::{
		aux::*,
		clock::{TickClock, Timer},
		error::{GameError, GameWarning},
		grid::{CellState, Snapshot},
		memory::{MemoryGame, MemorySettings},
		tictactoe::TicTacToe,
		Collision, GridSimulation, Settings, SimState, StepOutcome,
	};
}

use aux::{Coordinates, Direction};
use error::{GameError, GameWarning};
use grid::{CellState, Snapshot};
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use snake::Snake;

/// State of the [`GridSimulation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimState {
	/// Snake is moving.
	Playing,

	/// Snake crashed. Only [`GridSimulation::reset`] leaves this state.
	GameOver,
}

/// What the snake ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collision {
	/// Board boundary.
	Wall,

	/// Own body.
	Body,
}

/// Result of a single [`GridSimulation::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
	/// Game is over, nothing happened.
	Idle,

	/// Snake moved one cell.
	Moved,

	/// Snake moved onto the food and grew.
	Ate,

	/// Snake crashed and the game is over now.
	Collided(Collision),
}

/// Snake game on a fixed size board.
#[derive(Debug, Clone)]
pub struct GridSimulation {
	settings: Settings,
	snake: Snake,

	/// Heading applied on the last step.
	heading: Direction,

	/// Heading to be applied on the next step.
	pending: Direction,

	food: Option<Coordinates>,
	score: u32,
	game_over: bool,
	warning: Option<GameWarning>,
	rng: StdRng,
}

impl GridSimulation {
	/// Return a new [`GridSimulation`] on a `width`x`height` board with a
	/// snake of `initial_length` parts. Other settings are defaults.
	pub fn initialize(width: usize, height: usize, initial_length: usize) -> Result<Self> {
		Self::with_settings(Settings {
			grid_size: (width, height),
			initial_length,
			..Default::default()
		})
	}

	/// Return a new [`GridSimulation`] configured by `settings`.
	pub fn with_settings(settings: Settings) -> Result<Self> {
		settings.validate()?;

		let rng = match settings.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_entropy(),
		};
		let mut sim = Self {
			snake: Snake::new(settings.start(), settings.initial_length),
			heading: Direction::Right,
			pending: Direction::Right,
			food: None,
			score: 0,
			game_over: false,
			warning: None,
			settings,
			rng,
		};
		sim.spawn_food();

		log::info!(
			"new {}x{} snake game, snake at {}",
			sim.settings.grid_size.0,
			sim.settings.grid_size.1,
			sim.snake.head()
		);
		Ok(sim)
	}

	/// Request a new heading for the next step.
	///
	/// Requests to turn back onto the current heading are ignored, as is
	/// everything after the game is over. Only the last accepted request
	/// before a step is applied.
	pub fn set_direction(&mut self, requested: Direction) {
		if self.game_over {
			return;
		}
		if requested == -self.heading {
			log::trace!("ignoring reversal from {} to {}", self.heading, requested);
			return;
		}
		self.pending = requested;
	}

	/// Advance the game by one tick.
	pub fn step(&mut self) -> StepOutcome {
		if self.game_over {
			return StepOutcome::Idle;
		}

		self.heading = self.pending;
		let new_head = self.snake.head() + self.heading;
		let (width, height) = self.settings.grid_size;

		if !new_head.within(width, height) {
			return self.crash(Collision::Wall, new_head);
		}
		// checked against the body before the tail moves away
		if self.snake.contains(new_head) {
			return self.crash(Collision::Body, new_head);
		}

		self.snake.push_head(new_head);

		if self.food == Some(new_head) {
			self.score += self.settings.food_reward;
			log::debug!("food eaten at {}, score {}", new_head, self.score);
			self.spawn_food();
			StepOutcome::Ate
		} else {
			self.snake.pop_tail();
			// a previous spawn ran out of attempts
			if self.food.is_none() {
				self.spawn_food();
			}
			StepOutcome::Moved
		}
	}

	fn crash(&mut self, collision: Collision, at: Coordinates) -> StepOutcome {
		self.game_over = true;
		log::info!(
			"snake hit {:?} at {}, game over with score {}",
			collision,
			at,
			self.score
		);
		StepOutcome::Collided(collision)
	}

	/// Move the food to a random free cell and return its coordinates.
	///
	/// If no free cell is found, the board is left without food and a
	/// [`GameWarning::NoFreeCell`] is recorded.
	pub fn spawn_food(&mut self) -> Option<Coordinates> {
		self.food = food::spawn(
			&mut self.rng,
			self.settings.grid_size,
			&self.snake,
			self.settings.food_attempts,
		);
		if self.food.is_none() {
			self.warning = Some(GameWarning::NoFreeCell);
		}
		self.food
	}

	/// Return a render-ready view of the board.
	pub fn snapshot(&self) -> Snapshot {
		let mut snapshot = Snapshot::new(self.settings.grid_size);
		if let Some(food) = self.food {
			snapshot.set(food, CellState::Food);
		}
		for part in self.snake.parts().skip(1) {
			snapshot.set(part, CellState::SnakeBody);
		}
		snapshot.set(self.snake.head(), CellState::SnakeHead);
		snapshot
	}

	/// Start over with the same settings.
	pub fn reset(&mut self) {
		self.snake = Snake::new(self.settings.start(), self.settings.initial_length);
		self.heading = Direction::Right;
		self.pending = Direction::Right;
		self.score = 0;
		self.game_over = false;
		self.warning = None;
		self.spawn_food();
		log::info!("snake game restarted");
	}

	/// Current score.
	pub fn score(&self) -> u32 {
		self.score
	}

	/// Return `true` once the snake crashed.
	pub fn is_game_over(&self) -> bool {
		self.game_over
	}

	/// Return current [`SimState`].
	pub fn state(&self) -> SimState {
		match self.game_over {
			true => SimState::GameOver,
			false => SimState::Playing,
		}
	}

	/// Heading applied on the last step.
	pub fn heading(&self) -> Direction {
		self.heading
	}

	/// Return the snake.
	pub fn snake(&self) -> &Snake {
		&self.snake
	}

	/// Return food coordinates, if there's food on the board.
	pub fn food(&self) -> Option<Coordinates> {
		self.food
	}

	/// Take the last warning, if any, for display.
	pub fn take_warning(&mut self) -> Option<GameWarning> {
		self.warning.take()
	}

	/// Return game [`settings`](Settings).
	pub fn settings(&self) -> &Settings {
		&self.settings
	}
}

/// Snake game settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
	/// Board size as (width, height).
	pub grid_size: (usize, usize),

	/// Snake length when the game starts. Must be less than the board width.
	pub initial_length: usize,

	/// Score added for every eaten food.
	pub food_reward: u32,

	/// How many random cells are tried when placing food before giving up.
	pub food_attempts: usize,

	/// Seed of the food placement. If it's none, seed from entropy.
	pub seed: Option<u64>,
}

impl Settings {
	/// Default board size.
	pub const GRID_SIZE: (usize, usize) = (32, 32);

	/// Default snake length when it spawns.
	pub const INITIAL_LENGTH: usize = 5;

	/// Default score for one food.
	pub const FOOD_REWARD: u32 = 10;

	/// Default amount of food placement attempts.
	pub const FOOD_ATTEMPTS: usize = 10_000;

	/// Check that a game can be started with these settings.
	pub fn validate(&self) -> std::result::Result<(), GameError> {
		let (width, height) = self.grid_size;
		if width == 0 || height == 0 {
			return Err(GameError::ZeroGridSize { width, height });
		}
		if i32::try_from(width).is_err()
			|| i32::try_from(height).is_err()
			|| width.checked_mul(height).is_none()
		{
			return Err(GameError::GridTooLarge { width, height });
		}
		if self.initial_length == 0 {
			return Err(GameError::EmptySnake);
		}
		if self.initial_length >= width {
			return Err(GameError::SnakeTooLong {
				length: self.initial_length,
				width,
			});
		}
		Ok(())
	}

	/// Head of a fresh snake.
	///
	/// The tail sits on the left quarter of the middle row, shifted left when
	/// the snake would not fit otherwise, and the head is its rightmost part.
	fn start(&self) -> Coordinates {
		let (width, height) = self.grid_size;
		let tail = (width / 4).min(width - self.initial_length);
		Coordinates::new(
			(tail + self.initial_length - 1) as i32,
			(height / 2) as i32,
		)
	}
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			grid_size: Self::GRID_SIZE,
			initial_length: Self::INITIAL_LENGTH,
			food_reward: Self::FOOD_REWARD,
			food_attempts: Self::FOOD_ATTEMPTS,
			seed: None,
		}
	}
}
