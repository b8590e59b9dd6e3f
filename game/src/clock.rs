//! Cadence helpers for single-threaded host loops.

use crate::{error::GameError, Result};
use std::time::Duration;

/// Turns elapsed wall time into whole ticks.
///
/// Elapsed time is accumulated and consumed in whole-interval chunks, the
/// fractional leftover is carried to the next [`advance`](Self::advance).
#[derive(Debug, Clone)]
pub struct TickClock {
	interval: Duration,
	accumulated: Duration,
}

impl TickClock {
	/// Default interval between two ticks.
	pub const INTERVAL: Duration = Duration::from_millis(100);

	/// Return a new [`TickClock`]. Fails if `interval` is zero.
	pub fn new(interval: Duration) -> Result<Self> {
		if interval.is_zero() {
			return Err(Box::new(GameError::ZeroInterval));
		}
		Ok(Self {
			interval,
			accumulated: Duration::ZERO,
		})
	}

	/// Add `elapsed` time and return how many ticks are due.
	pub fn advance(&mut self, elapsed: Duration) -> u32 {
		self.accumulated += elapsed;
		let due = self.accumulated.as_nanos() / self.interval.as_nanos();
		let due = u32::try_from(due).unwrap_or(u32::MAX);
		self.accumulated -= self.interval * due;
		due
	}

	/// Drop the carried leftover.
	pub fn reset(&mut self) {
		self.accumulated = Duration::ZERO;
	}

	/// Time carried over to the next advance.
	pub fn leftover(&self) -> Duration {
		self.accumulated
	}

	/// Interval between two ticks.
	pub fn interval(&self) -> Duration {
		self.interval
	}
}

impl Default for TickClock {
	fn default() -> Self {
		Self {
			interval: Self::INTERVAL,
			accumulated: Duration::ZERO,
		}
	}
}

/// Single-shot deferred event carrying a payload.
///
/// The host polls it with [`advance`](Self::advance) instead of blocking,
/// and the payload is handed back exactly once when the delay has elapsed.
#[derive(Debug, Clone)]
pub struct Timer<T> {
	pending: Option<(Duration, T)>,
}

impl<T> Timer<T> {
	/// Return an idle [`Timer`].
	pub fn new() -> Self {
		Self { pending: None }
	}

	/// Schedule `payload` to fire after `delay`, replacing anything pending.
	pub fn schedule(&mut self, delay: Duration, payload: T) {
		self.pending = Some((delay, payload));
	}

	/// Let `elapsed` time pass and return the payload if it fired.
	pub fn advance(&mut self, elapsed: Duration) -> Option<T> {
		let (remaining, _) = self.pending.as_mut()?;
		*remaining = remaining.saturating_sub(elapsed);
		if remaining.is_zero() {
			self.pending.take().map(|(_, payload)| payload)
		} else {
			None
		}
	}

	/// Drop the pending payload without firing it.
	pub fn cancel(&mut self) -> Option<T> {
		self.pending.take().map(|(_, payload)| payload)
	}

	/// Return `true` if a payload is waiting to fire.
	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}
}

impl<T> Default for Timer<T> {
	fn default() -> Self {
		Self::new()
	}
}
