use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color::Color;
use crate::point::Point;

/// A stone played at a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    pub stone: Color,
    pub pos: Point,
}

impl Turn {
    pub fn new(stone: Color, pos: Point) -> Self {
        Turn { stone, pos }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.stone.letter(), self.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let t = Turn::new(Color::White, Point::new(3, 14));
        assert_eq!(t.to_string(), "W 3,14");
    }

    #[test]
    fn serializes_color_as_number() {
        let t = Turn::new(Color::Black, Point::new(1, 2));
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"{"stone":1,"pos":{"x":1,"y":2}}"#);
        assert_eq!(serde_json::from_str::<Turn>(&json).unwrap(), t);
    }

    #[test]
    fn rejects_off_board_position() {
        let json = r#"{"stone":1,"pos":{"x":200,"y":200}}"#;
        assert!(serde_json::from_str::<Turn>(json).is_err());
    }
}
