//! Auxiliary abstractions.

use rand_derive2::RandGen;
use serde::{Deserialize, Serialize};
use std::{fmt, ops};

/// Cell coordinates on the board.
///
/// Note that this coordinates system is same as in math, so (0, 0) point is the
/// bottom left cell of the board and moving [`Direction::Up`] increases `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Coordinates {
    /// Column index.
    pub x: i32,

    /// Row index.
    pub y: i32,
}

impl Coordinates {
    /// Return a new [`Coordinates`].
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return `true` if these coordinates lie inside a `width`x`height` board.
    pub fn within(self, width: usize, height: usize) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as usize) < width && (self.y as usize) < height
    }

    /// Manhattan distance between two cells.
    pub fn distance(self, other: Self) -> i32 {
        let delta = self - other;
        delta.x.abs() + delta.y.abs()
    }
}

impl From<Coordinates> for (i32, i32) {
    fn from(c: Coordinates) -> Self {
        (c.x, c.y)
    }
}

impl From<(i32, i32)> for Coordinates {
    fn from(t: (i32, i32)) -> Self {
        Self::new(t.0, t.1)
    }
}

impl ops::Add for Coordinates {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl ops::Add<Direction> for Coordinates {
    type Output = Self;

    fn add(self, direction: Direction) -> Self::Output {
        self + direction.offset()
    }
}

impl ops::Sub for Coordinates {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Heading of the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, RandGen, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Up.
    Up,

    /// Down.
    Down,

    /// Left.
    Left,

    /// Right.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Return opposite direction.
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit offset of one step in this direction.
    pub fn offset(self) -> Coordinates {
        match self {
            Self::Up => Coordinates::new(0, 1),
            Self::Down => Coordinates::new(0, -1),
            Self::Left => Coordinates::new(-1, 0),
            Self::Right => Coordinates::new(1, 0),
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Self::Right
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lower_case = format!("{:?}", self).to_lowercase();
        write!(f, "{}", lower_case)
    }
}

impl ops::Neg for Direction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.opposite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coords_sum() {
        let coords1 = Coordinates::new(10, 15);
        let coords2 = Coordinates::new(-5, 3);
        let coords3 = Coordinates::new(5, 18);

        assert_eq!(coords1 + coords2, coords3);
    }

    #[test]
    fn coords_plus_direction() {
        let origin = Coordinates::new(3, 3);

        assert_eq!(origin + Direction::Up, Coordinates::new(3, 4));
        assert_eq!(origin + Direction::Down, Coordinates::new(3, 2));
        assert_eq!(origin + Direction::Left, Coordinates::new(2, 3));
        assert_eq!(origin + Direction::Right, Coordinates::new(4, 3));
    }

    #[test]
    fn coords_distance() {
        let a = Coordinates::new(1, 5);
        let b = Coordinates::new(4, 3);

        assert_eq!(a - b, Coordinates::new(-3, 2));
        assert_eq!(a.distance(b), 5);
        assert_eq!(b.distance(a), 5);
    }

    #[test]
    fn coords_within() {
        assert!(Coordinates::new(0, 0).within(3, 2));
        assert!(Coordinates::new(2, 1).within(3, 2));
        assert!(!Coordinates::new(3, 1).within(3, 2));
        assert!(!Coordinates::new(2, 2).within(3, 2));
        assert!(!Coordinates::new(-1, 0).within(3, 2));
    }

    #[test]
    fn dir_neg() {
        assert_eq!(Direction::Left, -Direction::Right);
        assert_eq!(Direction::Right, -Direction::Left);
        assert_eq!(Direction::Down, -Direction::Up);
        assert_eq!(Direction::Up, -Direction::Down);
    }
}
