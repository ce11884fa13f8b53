use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width and height of the board. The grid wraps in both directions.
pub const BOARD_SIZE: u8 = 19;

/// A cell on the toroidal board. Both coordinates are always in `0..BOARD_SIZE`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "RawPoint")]
pub struct Point {
    x: u8,
    y: u8,
}

/// Unchecked wire form of a point.
#[derive(Deserialize)]
struct RawPoint {
    x: u8,
    y: u8,
}

impl TryFrom<RawPoint> for Point {
    type Error = ParsePointError;

    fn try_from(raw: RawPoint) -> Result<Self, Self::Error> {
        Point::checked(raw.x, raw.y)
            .ok_or_else(|| ParsePointError::OutOfRange(format!("{},{}", raw.x, raw.y)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsePointError {
    Malformed(String),
    OutOfRange(String),
}

impl fmt::Display for ParsePointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsePointError::Malformed(s) => write!(f, "malformed point key: {s:?}"),
            ParsePointError::OutOfRange(s) => write!(f, "point off board: {s:?}"),
        }
    }
}

impl std::error::Error for ParsePointError {}

impl Point {
    /// Panics if either coordinate is off the board.
    pub fn new(x: u8, y: u8) -> Self {
        assert!(
            x < BOARD_SIZE && y < BOARD_SIZE,
            "point ({x}, {y}) off board"
        );
        Point { x, y }
    }

    /// Fallible constructor for coordinates coming from outside the engine.
    pub fn checked(x: u8, y: u8) -> Option<Self> {
        (x < BOARD_SIZE && y < BOARD_SIZE).then_some(Point { x, y })
    }

    pub fn x(self) -> u8 {
        self.x
    }

    pub fn y(self) -> u8 {
        self.y
    }

    /// Reduce an arbitrary integer pair onto the torus.
    pub fn wrapping(x: i32, y: i32) -> Self {
        let n = BOARD_SIZE as i32;
        Point {
            x: x.rem_euclid(n) as u8,
            y: y.rem_euclid(n) as u8,
        }
    }

    /// The four orthogonal neighbors: west, south, east, north.
    pub fn neighbors(self) -> [Point; 4] {
        let last = BOARD_SIZE - 1;
        let Point { x, y } = self;
        [
            Point {
                x: if x > 0 { x - 1 } else { last },
                y,
            },
            Point {
                x,
                y: (y + 1) % BOARD_SIZE,
            },
            Point {
                x: (x + 1) % BOARD_SIZE,
                y,
            },
            Point {
                x,
                y: if y > 0 { y - 1 } else { last },
            },
        ]
    }

    /// Canonical `"x,y"` key.
    pub fn to_key(self) -> String {
        self.to_string()
    }

    pub fn from_key(key: &str) -> Result<Self, ParsePointError> {
        key.parse()
    }

    /// Row-major index into a `BOARD_SIZE * BOARD_SIZE` array.
    pub fn index(self) -> usize {
        self.y as usize * BOARD_SIZE as usize + self.x as usize
    }

    /// Every point on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Point> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Point { x, y }))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParsePointError::Malformed(s.to_string());
        let (x, y) = s.split_once(',').ok_or_else(malformed)?;
        let x: u8 = x.trim().parse().map_err(|_| malformed())?;
        let y: u8 = y.trim().parse().map_err(|_| malformed())?;
        Point::checked(x, y).ok_or_else(|| ParsePointError::OutOfRange(s.to_string()))
    }
}
