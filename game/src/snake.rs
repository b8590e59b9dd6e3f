//! Snake abstractions.

use crate::aux::*;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Snake body. The head is the first part and the tail is the last one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Snake {
    parts: VecDeque<Coordinates>,
}

impl Snake {
    /// Return a horizontal [`Snake`] of `length` parts whose head is at
    /// `head` and whose body trails to the left of it.
    ///
    /// `length` must be non-zero.
    pub(crate) fn new(head: Coordinates, length: usize) -> Self {
        Self {
            parts: (0..length as i32)
                .map(|i| Coordinates::new(head.x - i, head.y))
                .collect(),
        }
    }

    /// Return coordinates of the head.
    pub fn head(&self) -> Coordinates {
        self.parts[0]
    }

    /// Return coordinates of the tail.
    pub fn tail(&self) -> Coordinates {
        self.parts[self.parts.len() - 1]
    }

    /// Return `true` if any part of the snake occupies `coords`.
    pub fn contains(&self, coords: Coordinates) -> bool {
        self.parts.contains(&coords)
    }

    /// Add a new head in front of the current one.
    pub(crate) fn push_head(&mut self, coords: Coordinates) {
        self.parts.push_front(coords);
    }

    /// Drop the tail part.
    pub(crate) fn pop_tail(&mut self) -> Option<Coordinates> {
        // length never drops below one
        if self.parts.len() > 1 {
            self.parts.pop_back()
        } else {
            None
        }
    }

    /// Iterate over parts from head to tail.
    pub fn parts(&self) -> impl Iterator<Item = Coordinates> + '_ {
        self.parts.iter().copied()
    }

    /// Return `true` if no two parts share a cell.
    pub fn is_distinct(&self) -> bool {
        self.parts.iter().all_unique()
    }

    /// Return snake's length (amount of parts).
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Return true if snake has zero length, false otherwise.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Build a snake from explicit parts, head first.
    pub(crate) fn from_parts(parts: &[(i32, i32)]) -> Snake {
        Snake {
            parts: parts.iter().map(|&p| p.into()).collect(),
        }
    }

    #[test]
    fn new_trails_left() {
        let snake = Snake::new(Coordinates::new(4, 5), 3);
        let parts: Vec<_> = snake.parts().map(<(i32, i32)>::from).collect();

        assert_eq!(parts, [(4, 5), (3, 5), (2, 5)]);
        assert_eq!(snake.head(), Coordinates::new(4, 5));
        assert_eq!(snake.tail(), Coordinates::new(2, 5));
    }

    #[test]
    fn move_keeps_length() {
        let mut snake = Snake::new(Coordinates::new(4, 5), 3);
        snake.push_head(Coordinates::new(5, 5));
        snake.pop_tail();

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Coordinates::new(5, 5));
        assert_eq!(snake.tail(), Coordinates::new(3, 5));
        assert!(!snake.contains(Coordinates::new(2, 5)));
    }

    #[test]
    fn single_part_keeps_tail() {
        let mut snake = Snake::new(Coordinates::new(0, 0), 1);

        assert_eq!(snake.pop_tail(), None);
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn distinct_parts() {
        assert!(from_parts(&[(1, 1), (1, 2), (2, 2)]).is_distinct());
        assert!(!from_parts(&[(1, 1), (1, 2), (1, 1)]).is_distinct());
    }
}
