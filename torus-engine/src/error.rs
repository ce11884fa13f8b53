use std::fmt;

use crate::point::Point;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoError {
    /// The target cell already holds a stone.
    Occupied(Point),
    /// The stone's chain would be left without liberties.
    Suicide(Point),
    /// The move recreates the position from before the opponent's last move.
    KoViolation(Point),
    /// A position holds a chain without liberties.
    NoLiberties(Point),
    NotOnBoard,
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoError::Occupied(p) => write!(f, "occupied: {p}"),
            GoError::Suicide(p) => write!(f, "suicide: {p}"),
            GoError::KoViolation(p) => write!(f, "ko violation: {p}"),
            GoError::NoLiberties(p) => write!(f, "chain without liberties: {p}"),
            GoError::NotOnBoard => write!(f, "not on board"),
        }
    }
}

impl std::error::Error for GoError {}
