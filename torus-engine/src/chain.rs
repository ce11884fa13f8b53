use std::collections::BTreeSet;

use crate::color::Color;
use crate::point::Point;
use crate::sets::{difference, intersection, union};

/// A connected group of same-colored stones and the empty cells bordering it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    color: Color,
    stones: BTreeSet<Point>,
    liberties: BTreeSet<Point>,
}

impl Chain {
    pub fn new(color: Color, stones: BTreeSet<Point>, liberties: BTreeSet<Point>) -> Self {
        debug_assert!(!stones.is_empty(), "chain without stones");
        debug_assert!(
            intersection(&stones, &liberties).is_empty(),
            "chain lists its own stone as a liberty"
        );
        Chain {
            color,
            stones,
            liberties,
        }
    }

    /// A lone stone with the given liberties.
    pub fn singleton(color: Color, point: Point, liberties: BTreeSet<Point>) -> Self {
        Chain::new(color, BTreeSet::from([point]), liberties)
    }

    // -- Accessors --

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn stones(&self) -> &BTreeSet<Point> {
        &self.stones
    }

    pub fn liberties(&self) -> &BTreeSet<Point> {
        &self.liberties
    }

    pub fn stone_count(&self) -> usize {
        self.stones.len()
    }

    pub fn liberty_count(&self) -> usize {
        self.liberties.len()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.stones.contains(&point)
    }

    // -- Liberty bookkeeping --

    pub fn remove_liberty(&mut self, point: Point) {
        self.liberties.remove(&point);
    }

    pub fn add_liberty(&mut self, point: Point) {
        self.liberties.insert(point);
    }

    /// Combine with a same-colored chain. Neither input changes.
    ///
    /// Liberties that turn out to be stones of the combined chain are dropped.
    /// Panics if the colors differ.
    pub fn merge_with(&self, other: &Chain) -> Chain {
        assert_eq!(
            self.color, other.color,
            "cannot merge chains of different colors"
        );
        let stones = union(&self.stones, &other.stones);
        let liberties = difference(&union(&self.liberties, &other.liberties), &stones);
        Chain::new(self.color, stones, liberties)
    }

    pub fn deep_copy(&self) -> Chain {
        self.clone()
    }
}
