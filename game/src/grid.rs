//! Render-ready board snapshots.
//!
//! Board is implemented like a math plot, so (0, 0) cell is the bottom left
//! one, Y-axis is going up and X-axis is going right.

use crate::{aux::Coordinates, error::GameError, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt};

/// What occupies a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
	/// Nothing.
	Empty,

	/// A part of the snake other than its head.
	SnakeBody,

	/// The snake's head.
	SnakeHead,

	/// Food.
	Food,
}

impl CellState {
	/// Character used when the board is printed.
	pub fn symbol(self) -> char {
		match self {
			Self::Empty => '.',
			Self::SnakeBody => 'o',
			Self::SnakeHead => '@',
			Self::Food => '*',
		}
	}
}

impl Default for CellState {
	fn default() -> Self {
		Self::Empty
	}
}

/// Fixed-capacity board of [`CellState`]s, indexed directly by coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSnapshot")]
pub struct Snapshot {
	/// Cells row by row, starting from the bottom row.
	cells: Vec<CellState>,

	/// Board size as (width, height).
	size: (usize, usize),
}

impl Snapshot {
	/// Return an empty [`Snapshot`] of the given size.
	pub fn new(size: (usize, usize)) -> Self {
		Self {
			cells: vec![CellState::Empty; size.0 * size.1],
			size,
		}
	}

	/// Board size as (width, height).
	pub fn size(&self) -> (usize, usize) {
		self.size
	}

	fn index(&self, coords: Coordinates) -> Option<usize> {
		coords
			.within(self.size.0, self.size.1)
			.then(|| coords.y as usize * self.size.0 + coords.x as usize)
	}

	/// Return state of the cell, or none if `coords` are off the board.
	pub fn get(&self, coords: Coordinates) -> Option<CellState> {
		self.index(coords).and_then(|i| self.cells.get(i).copied())
	}

	/// Overwrite state of the cell. Off-board coordinates are ignored.
	pub(crate) fn set(&mut self, coords: Coordinates, state: CellState) {
		if let Some(i) = self.index(coords) {
			self.cells[i] = state;
		}
	}

	/// Iterate over all cells with their coordinates, bottom row first.
	pub fn iter(&self) -> impl Iterator<Item = (Coordinates, CellState)> + '_ {
		(0..self.size.1)
			.cartesian_product(0..self.size.0)
			.map(|(y, x)| Coordinates::new(x as i32, y as i32))
			.zip(self.cells.iter().copied())
	}

	/// Return amount of cells in the given state.
	pub fn count(&self, state: CellState) -> usize {
		self.cells.iter().filter(|&&cell| cell == state).count()
	}

	/// Convert [`Snapshot`] to binary json.
	pub fn as_bytes(&self) -> Result<Vec<u8>> {
		Ok(serde_json::to_string(self)?.as_bytes().to_vec())
	}

	/// Convert json string to [`Snapshot`].
	pub fn from_string<T: AsRef<str>>(string: T) -> Result<Self> {
		Ok(serde_json::from_str(string.as_ref())?)
	}
}

/// Unchecked form of [`Snapshot`] as it comes from json.
#[derive(Deserialize)]
struct RawSnapshot {
	cells: Vec<CellState>,
	size: (usize, usize),
}

impl TryFrom<RawSnapshot> for Snapshot {
	type Error = GameError;

	fn try_from(raw: RawSnapshot) -> std::result::Result<Self, Self::Error> {
		if raw.size.0.checked_mul(raw.size.1) != Some(raw.cells.len()) {
			return Err(GameError::MalformedSnapshot {
				cells: raw.cells.len(),
				size: raw.size,
			});
		}
		Ok(Self {
			cells: raw.cells,
			size: raw.size,
		})
	}
}

impl fmt::Display for Snapshot {
	/// Print the board with the top row first.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let width = self.size.0.max(1);
		for row in self.cells.chunks(width).rev() {
			let line: String = row.iter().map(|cell| cell.symbol()).collect();
			writeln!(f, "{}", line)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn set_and_get() {
		let mut snapshot = Snapshot::new((3, 2));
		snapshot.set((2, 1).into(), CellState::Food);
		snapshot.set((5, 5).into(), CellState::Food);

		assert_eq!(snapshot.get((2, 1).into()), Some(CellState::Food));
		assert_eq!(snapshot.get((0, 0).into()), Some(CellState::Empty));
		assert_eq!(snapshot.get((3, 0).into()), None);
		assert_eq!(snapshot.count(CellState::Food), 1);
	}

	#[test]
	fn iter_visits_every_cell_once() {
		let mut snapshot = Snapshot::new((3, 2));
		snapshot.set((1, 1).into(), CellState::SnakeHead);

		let cells: Vec<_> = snapshot.iter().collect();
		assert_eq!(cells.len(), 6);
		assert_eq!(cells[0].0, Coordinates::new(0, 0));
		assert_eq!(cells[4], (Coordinates::new(1, 1), CellState::SnakeHead));
	}

	#[test]
	fn display_top_row_first() {
		let mut snapshot = Snapshot::new((3, 2));
		snapshot.set((0, 0).into(), CellState::SnakeBody);
		snapshot.set((1, 0).into(), CellState::SnakeHead);
		snapshot.set((2, 1).into(), CellState::Food);

		assert_eq!(snapshot.to_string(), "..*\no@.\n");
	}

	#[test]
	fn json_roundtrip() -> Result<()> {
		let mut snapshot = Snapshot::new((2, 2));
		snapshot.set((1, 0).into(), CellState::Food);

		let bytes = snapshot.as_bytes()?;
		let parsed = Snapshot::from_string(String::from_utf8(bytes)?)?;

		assert_eq!(parsed, snapshot);
		Ok(())
	}

	#[test]
	fn rejects_mismatched_cells() {
		assert!(Snapshot::from_string(r#"{"cells":[],"size":[2,2]}"#).is_err());
		assert!(Snapshot::from_string(r#"{"cells":["empty","food"],"size":[3,1]}"#).is_err());

		let snapshot = Snapshot::from_string(r#"{"cells":["empty","food"],"size":[2,1]}"#).unwrap();
		assert_eq!(snapshot.get((1, 0).into()), Some(CellState::Food));
		assert_eq!(snapshot.get((1, 1).into()), None);
	}
}
