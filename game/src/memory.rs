//! Memory match abstractions.

use crate::{clock::Timer, error::GameError, Result};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Memory game settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemorySettings {
	/// Amount of cards on the table. Must be even.
	pub card_count: usize,

	/// Amount of distinct card faces available.
	pub faces: usize,

	/// How long two revealed cards stay face up before they're checked.
	pub reveal_delay: Duration,

	/// Seed of the shuffle. If it's none, seed from entropy.
	pub seed: Option<u64>,
}

impl MemorySettings {
	/// Default amount of cards.
	pub const CARD_COUNT: usize = 12;

	/// Default amount of card faces.
	pub const FACES: usize = 6;

	/// Default reveal delay.
	pub const REVEAL_DELAY: Duration = Duration::from_millis(500);
}

impl Default for MemorySettings {
	fn default() -> Self {
		Self {
			card_count: Self::CARD_COUNT,
			faces: Self::FACES,
			reveal_delay: Self::REVEAL_DELAY,
			seed: None,
		}
	}
}

/// Result of a single [`MemoryGame::flip`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flip {
	/// Click was not accepted and nothing changed.
	Ignored,

	/// First card of a pair is face up.
	First,

	/// Second card is face up, the pair is checked after the reveal delay.
	Second,
}

/// What happened when a revealed pair was checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
	/// Both cards show the same face and stay up.
	Matched,

	/// Faces differ, both cards are hidden again.
	Mismatched,

	/// Last pair was matched.
	Completed,
}

/// Table of face-down cards to be matched in pairs.
#[derive(Debug, Clone)]
pub struct MemoryGame {
	cards: Vec<usize>,
	matched: Vec<bool>,
	first: Option<usize>,
	second: Option<usize>,
	check: Timer<(usize, usize)>,
	pairs_found: usize,
	settings: MemorySettings,
	rng: StdRng,
}

impl MemoryGame {
	/// Return a freshly dealt [`MemoryGame`].
	pub fn new(settings: MemorySettings) -> Result<Self> {
		let count = settings.card_count;
		if count == 0 || count % 2 != 0 {
			return Err(Box::new(GameError::OddCardCount(count)));
		}
		if settings.faces < count / 2 {
			return Err(Box::new(GameError::NotEnoughFaces {
				pairs: count / 2,
				faces: settings.faces,
			}));
		}

		let rng = match settings.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_entropy(),
		};
		let mut game = Self {
			cards: Vec::with_capacity(count),
			matched: Vec::with_capacity(count),
			first: None,
			second: None,
			check: Timer::new(),
			pairs_found: 0,
			settings,
			rng,
		};
		game.deal();
		Ok(game)
	}

	fn deal(&mut self) {
		let count = self.settings.card_count;
		self.cards = (0..count).map(|i| i / 2).collect();
		self.cards.shuffle(&mut self.rng);
		self.matched = vec![false; count];
		self.first = None;
		self.second = None;
		self.check.cancel();
		self.pairs_found = 0;
		log::debug!("dealt {} memory cards", count);
	}

	/// Turn card at `index` face up.
	pub fn flip(&mut self, index: usize) -> Flip {
		if self.check.is_pending()
			|| index >= self.cards.len()
			|| self.matched[index]
			|| self.first == Some(index)
		{
			log::trace!("ignoring flip of card {}", index);
			return Flip::Ignored;
		}

		match self.first {
			None => {
				self.first = Some(index);
				Flip::First
			}
			Some(first) => {
				self.second = Some(index);
				self.check
					.schedule(self.settings.reveal_delay, (first, index));
				Flip::Second
			}
		}
	}

	/// Let `elapsed` time pass and check the revealed pair if it's due.
	pub fn advance(&mut self, elapsed: Duration) -> Option<Check> {
		let (first, second) = self.check.advance(elapsed)?;
		self.first = None;
		self.second = None;

		if self.cards[first] != self.cards[second] {
			return Some(Check::Mismatched);
		}

		self.matched[first] = true;
		self.matched[second] = true;
		self.pairs_found += 1;
		log::debug!("pair {} found", self.pairs_found);

		if self.is_complete() {
			log::info!("all {} pairs found", self.pairs_found);
			Some(Check::Completed)
		} else {
			Some(Check::Matched)
		}
	}

	/// Shuffle and deal the cards again.
	pub fn restart(&mut self) {
		self.deal();
	}

	/// Return `true` if card at `index` shows its face.
	pub fn is_face_up(&self, index: usize) -> bool {
		self.is_matched(index) || self.first == Some(index) || self.second == Some(index)
	}

	/// Return `true` if card at `index` is already matched.
	pub fn is_matched(&self, index: usize) -> bool {
		self.matched.get(index).copied().unwrap_or(false)
	}

	/// Face id of the card at `index`, if the card shows its face.
	pub fn face(&self, index: usize) -> Option<usize> {
		self.is_face_up(index).then(|| self.cards[index])
	}

	/// Return `true` if input is accepted right now.
	pub fn can_flip(&self) -> bool {
		!self.check.is_pending()
	}

	/// Amount of matched pairs.
	pub fn pairs_found(&self) -> usize {
		self.pairs_found
	}

	/// Amount of cards on the table.
	pub fn len(&self) -> usize {
		self.cards.len()
	}

	/// Return `true` if there are no cards on the table.
	pub fn is_empty(&self) -> bool {
		self.cards.is_empty()
	}

	/// Return `true` if all pairs are matched.
	pub fn is_complete(&self) -> bool {
		self.pairs_found * 2 >= self.cards.len()
	}

	/// Text for the status line.
	pub fn status_text(&self) -> String {
		if self.is_complete() {
			String::from("All pairs found, well done!")
		} else if self.pairs_found > 0 {
			format!("Pair found! ({})", self.pairs_found)
		} else {
			String::from("Find all the pairs!")
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use itertools::Itertools;

	const DELAY: Duration = MemorySettings::REVEAL_DELAY;

	fn game(card_count: usize, faces: usize) -> Result<MemoryGame> {
		MemoryGame::new(MemorySettings {
			card_count,
			faces,
			seed: Some(3),
			..Default::default()
		})
	}

	/// Indexes of the two cards sharing `face`.
	fn pair_of(game: &MemoryGame, face: usize) -> (usize, usize) {
		let mut found = game.cards.iter().positions(|&id| id == face);
		(found.next().unwrap(), found.next().unwrap())
	}

	#[test]
	fn deals_pairs() -> Result<()> {
		let game = game(8, 4)?;
		let mut faces = game.cards.clone();
		faces.sort_unstable();

		assert_eq!(faces, [0, 0, 1, 1, 2, 2, 3, 3]);
		assert!((0..8).all(|i| !game.is_face_up(i)));
		Ok(())
	}

	#[test]
	fn rejects_bad_configuration() {
		let odd = game(7, 4).unwrap_err();
		assert_eq!(odd.downcast_ref::<GameError>(), Some(&GameError::OddCardCount(7)));

		let zero = game(0, 4).unwrap_err();
		assert_eq!(zero.downcast_ref::<GameError>(), Some(&GameError::OddCardCount(0)));

		let faces = game(8, 3).unwrap_err();
		assert_eq!(
			faces.downcast_ref::<GameError>(),
			Some(&GameError::NotEnoughFaces { pairs: 4, faces: 3 })
		);
	}

	#[test]
	fn match_stays_face_up() -> Result<()> {
		let mut game = game(4, 2)?;
		let (a, b) = pair_of(&game, 0);

		assert_eq!(game.flip(a), Flip::First);
		assert_eq!(game.flip(a), Flip::Ignored);
		assert_eq!(game.flip(b), Flip::Second);
		assert!(!game.can_flip());
		assert_eq!(game.advance(DELAY / 2), None);
		assert_eq!(game.advance(DELAY / 2), Some(Check::Matched));

		assert!(game.is_matched(a) && game.is_matched(b));
		assert_eq!(game.face(a), Some(0));
		assert_eq!(game.flip(a), Flip::Ignored);
		assert_eq!(game.status_text(), "Pair found! (1)");
		Ok(())
	}

	#[test]
	fn mismatch_hides_both() -> Result<()> {
		let mut game = game(4, 2)?;
		let (a, b) = pair_of(&game, 0);
		let (c, _) = pair_of(&game, 1);

		game.flip(a);
		game.flip(c);
		assert_eq!(game.flip(b), Flip::Ignored);
		assert_eq!(game.advance(DELAY), Some(Check::Mismatched));

		assert!(!game.is_face_up(a) && !game.is_face_up(c));
		assert!(game.can_flip());
		assert_eq!(game.pairs_found(), 0);
		Ok(())
	}

	#[test]
	fn last_pair_completes() -> Result<()> {
		let mut game = game(4, 2)?;
		for face in 0..2 {
			let (a, b) = pair_of(&game, face);
			game.flip(a);
			game.flip(b);
			game.advance(DELAY);
		}

		assert!(game.is_complete());
		assert_eq!(game.status_text(), "All pairs found, well done!");

		game.restart();
		assert_eq!(game.pairs_found(), 0);
		assert!(!game.is_complete());
		Ok(())
	}
}
