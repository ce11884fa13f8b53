use std::collections::{BTreeSet, HashMap};
use std::fmt;

use arrayvec::ArrayVec;
use tracing::{debug, trace};

use crate::chain::Chain;
use crate::color::Color;
use crate::error::GoError;
use crate::point::{BOARD_SIZE, Point};

/// Slot of a chain in the board's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ChainId(usize);

/// Result of an accepted placement.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Placement {
    /// Opponent stones removed by the move, in ascending order per chain.
    pub captured: Vec<Point>,
}

/// The toroidal board.
///
/// Every occupied point maps to the arena slot of the chain that owns it, so
/// all stones of a chain observe merges and captures at once.
#[derive(Debug, Default)]
pub struct Board {
    grid: HashMap<Point, ChainId>,
    chains: Vec<Option<Chain>>,
    free: Vec<ChainId>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a position from ASCII rows: 'B' = Black, 'W' = White, anything else empty.
    /// Missing rows and columns are empty. Fails if any chain would have no liberties.
    pub fn from_layout(layout: &[&str]) -> Result<Self, GoError> {
        if layout.len() > BOARD_SIZE as usize {
            return Err(GoError::NotOnBoard);
        }

        let mut board = Board::new();
        for (y, row) in layout.iter().enumerate() {
            if row.chars().count() > BOARD_SIZE as usize {
                return Err(GoError::NotOnBoard);
            }
            for (x, c) in row.chars().enumerate() {
                if let Some(color) = Color::from_letter(c) {
                    let placement = board.try_place(color, Point::new(x as u8, y as u8))?;
                    if let Some(&dead) = placement.captured.first() {
                        return Err(GoError::NoLiberties(dead));
                    }
                }
            }
        }
        Ok(board)
    }

    // -- Accessors --

    pub fn color_at(&self, point: Point) -> Option<Color> {
        self.grid.get(&point).map(|&id| self.chain(id).color())
    }

    pub fn chain_at(&self, point: Point) -> Option<&Chain> {
        self.grid.get(&point).map(|&id| self.chain(id))
    }

    pub fn is_occupied(&self, point: Point) -> bool {
        self.grid.contains_key(&point)
    }

    /// Number of stones on the board.
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// Occupied points with their colors, in row-major order.
    pub fn stones(&self) -> impl Iterator<Item = (Point, Color)> + '_ {
        Point::all().filter_map(|p| self.color_at(p).map(|c| (p, c)))
    }

    /// Distinct chains currently on the board.
    pub fn chains(&self) -> impl Iterator<Item = &Chain> {
        self.chains.iter().flatten()
    }

    /// Row-major cells: 1 = Black, -1 = White, 0 = empty.
    pub fn cells(&self) -> Vec<i8> {
        Point::all()
            .map(|p| self.color_at(p).map_or(0, Color::to_int))
            .collect()
    }

    // -- Placement --

    /// Place a stone, returning whether the move was accepted.
    pub fn place_stone(&mut self, color: Color, point: Point) -> bool {
        self.try_place(color, point).is_ok()
    }

    /// Place a stone, resolve captures, then reject suicide.
    ///
    /// On error the board is left exactly as it was. Ko is not checked here.
    pub fn try_place(&mut self, color: Color, point: Point) -> Result<Placement, GoError> {
        if self.is_occupied(point) {
            debug!(%color, %point, "rejected: occupied");
            return Err(GoError::Occupied(point));
        }

        let mut same: ArrayVec<ChainId, 4> = ArrayVec::new();
        let mut opposite: ArrayVec<ChainId, 4> = ArrayVec::new();
        let mut liberties = BTreeSet::new();
        for n in point.neighbors() {
            match self.grid.get(&n) {
                None => {
                    liberties.insert(n);
                }
                Some(&id) => {
                    let bucket = if self.chain(id).color() == color {
                        &mut same
                    } else {
                        &mut opposite
                    };
                    if !bucket.contains(&id) {
                        bucket.push(id);
                    }
                }
            }
        }

        // The new stone must be visible in the grid before captures run, so
        // vacated points are credited back to it.
        let reused = !self.free.is_empty();
        let placed = self.alloc(Chain::singleton(color, point, liberties));
        self.grid.insert(point, placed);

        for &id in &opposite {
            self.chain_mut(id).remove_liberty(point);
        }

        let mut captured = Vec::new();
        let mut captured_ids: ArrayVec<ChainId, 4> = ArrayVec::new();
        for &id in &opposite {
            if self.chain(id).liberty_count() == 0 {
                captured.extend(self.remove_chain(id));
                captured_ids.push(id);
            }
        }

        let merged = same
            .iter()
            .fold(self.chain(placed).clone(), |acc, &id| {
                acc.merge_with(self.chain(id))
            });

        // Captures are not rolled back here. Any capture frees a neighbor of
        // `point`, so this only fires when nothing was captured.
        if merged.liberty_count() == 0 {
            for &id in &opposite {
                if !captured_ids.contains(&id) {
                    self.chain_mut(id).add_liberty(point);
                }
            }
            self.grid.remove(&point);
            self.unalloc(placed, reused);
            debug!(%color, %point, "rejected: suicide");
            return Err(GoError::Suicide(point));
        }

        for &id in &same {
            self.release(id);
        }
        let stones: Vec<Point> = merged.stones().iter().copied().collect();
        self.chains[placed.0] = Some(merged);
        for stone in stones {
            self.grid.insert(stone, placed);
        }

        if captured.is_empty() {
            trace!(%color, %point, "placed");
        } else {
            debug!(%color, %point, count = captured.len(), "captured");
        }
        Ok(Placement { captured })
    }

    /// Take a chain off the board. Each vacated point becomes a liberty of
    /// every other chain bordering it.
    fn remove_chain(&mut self, id: ChainId) -> Vec<Point> {
        let Some(chain) = self.chains[id.0].take() else {
            return Vec::new();
        };

        for &stone in chain.stones() {
            for n in stone.neighbors() {
                if let Some(&neighbor) = self.grid.get(&n) {
                    if neighbor != id {
                        self.chain_mut(neighbor).add_liberty(stone);
                    }
                }
            }
            self.grid.remove(&stone);
        }
        self.release(id);

        chain.stones().iter().copied().collect()
    }

    // -- Snapshots --

    /// Same occupied points with the same colors. Chain layout is ignored.
    pub fn is_equal_with(&self, other: &Board) -> bool {
        self.grid.len() == other.grid.len()
            && self
                .grid
                .iter()
                .all(|(&p, &id)| other.color_at(p) == Some(self.chain(id).color()))
    }

    /// Independent copy with fresh chains and a compacted arena.
    pub fn deep_copy(&self) -> Board {
        let mut copy = Board::new();
        for point in Point::all() {
            if copy.is_occupied(point) {
                continue;
            }
            let Some(&id) = self.grid.get(&point) else {
                continue;
            };
            let chain = self.chain(id).deep_copy();
            let stones: Vec<Point> = chain.stones().iter().copied().collect();
            let new_id = copy.alloc(chain);
            for stone in stones {
                copy.grid.insert(stone, new_id);
            }
        }
        copy
    }

    // -- Arena --

    fn chain(&self, id: ChainId) -> &Chain {
        self.chains[id.0]
            .as_ref()
            .expect("grid refers to a released chain")
    }

    fn chain_mut(&mut self, id: ChainId) -> &mut Chain {
        self.chains[id.0]
            .as_mut()
            .expect("grid refers to a released chain")
    }

    fn alloc(&mut self, chain: Chain) -> ChainId {
        match self.free.pop() {
            Some(id) => {
                self.chains[id.0] = Some(chain);
                id
            }
            None => {
                self.chains.push(Some(chain));
                ChainId(self.chains.len() - 1)
            }
        }
    }

    /// Undo the `alloc` that returned `id`, leaving the arena exactly as it was.
    /// `reused` is whether that slot came from the free list.
    fn unalloc(&mut self, id: ChainId, reused: bool) {
        self.chains[id.0] = None;
        if reused {
            self.free.push(id);
        } else {
            self.chains.pop();
        }
    }

    /// Free a slot. A trailing slot is dropped instead of going on the free list.
    fn release(&mut self, id: ChainId) {
        self.chains[id.0] = None;
        if id.0 + 1 == self.chains.len() {
            self.chains.pop();
        } else {
            self.free.push(id);
        }
    }
}

impl Clone for Board {
    fn clone(&self) -> Self {
        self.deep_copy()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal_with(other)
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let c = self
                    .color_at(Point::new(x, y))
                    .map_or('+', Color::letter);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
