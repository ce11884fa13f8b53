use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, Placement};
use crate::color::Color;
use crate::error::GoError;
use crate::point::{BOARD_SIZE, Point};
use crate::turn::Turn;

/// Render-ready view of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Vec<i8>,
    pub size: u8,
    pub move_number: usize,
    pub to_play: Color,
    pub last_move: Option<Turn>,
}

/// A live board plus one snapshot per accepted move.
///
/// `history[0]` is the empty board and `history[n]` the position after move
/// `n`. Colors alternate starting with Black. A move that recreates the
/// position from before the opponent's last move is rolled back.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    history: Vec<Board>,
    moves: Vec<Turn>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        let board = Board::new();
        Game {
            history: vec![board.deep_copy()],
            board,
            moves: Vec::new(),
        }
    }

    /// Replay a sequence of points with alternating colors.
    pub fn with_moves(points: &[Point]) -> Result<Self, GoError> {
        let mut game = Game::new();
        for &point in points {
            game.try_play(point)?;
        }
        Ok(game)
    }

    // -- Accessors --

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn moves(&self) -> &[Turn] {
        &self.moves
    }

    pub fn last_move(&self) -> Option<&Turn> {
        self.moves.last()
    }

    pub fn move_number(&self) -> usize {
        self.moves.len()
    }

    pub fn current_color(&self) -> Color {
        if self.move_number() % 2 == 0 {
            Color::Black
        } else {
            Color::White
        }
    }

    pub fn stone_at(&self, point: Point) -> Option<Color> {
        self.board.color_at(point)
    }

    // -- Game actions --

    /// Play the current color at `point`.
    pub fn try_play(&mut self, point: Point) -> Result<Placement, GoError> {
        let color = self.current_color();
        let placement = self.board.try_place(color, point)?;

        if self.repeats_previous(&self.board) {
            debug!(%color, %point, "ko: rolling back");
            self.board = self.history[self.move_number()].deep_copy();
            return Err(GoError::KoViolation(point));
        }

        self.history.push(self.board.deep_copy());
        self.moves.push(Turn::new(color, point));
        Ok(placement)
    }

    /// Take back the last move. Returns false at the start of the game.
    pub fn undo(&mut self) -> bool {
        let Some(turn) = self.moves.pop() else {
            return false;
        };
        self.history.pop();
        if let Some(previous) = self.history.last() {
            self.board = previous.deep_copy();
        }
        debug!(%turn, move_number = self.move_number(), "undo");
        true
    }

    /// Whether `try_play(point)` would succeed. Evaluated on a scratch board.
    pub fn is_legal(&self, point: Point) -> bool {
        let mut scratch = self.board.deep_copy();
        scratch.place_stone(self.current_color(), point) && !self.repeats_previous(&scratch)
    }

    fn repeats_previous(&self, board: &Board) -> bool {
        self.move_number()
            .checked_sub(1)
            .is_some_and(|i| board.is_equal_with(&self.history[i]))
    }

    // -- Serialization --

    pub fn game_state(&self) -> GameState {
        GameState {
            board: self.board.cells(),
            size: BOARD_SIZE,
            move_number: self.move_number(),
            to_play: self.current_color(),
            last_move: self.last_move().copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: u8, y: u8) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn starts_with_black() {
        let game = Game::new();
        assert_eq!(game.current_color(), Color::Black);
        assert_eq!(game.move_number(), 0);
        assert_eq!(game.history().len(), 1);
        assert!(game.board().is_empty());
    }

    #[test]
    fn alternates_colors() {
        let game = Game::with_moves(&[pt(0, 0), pt(5, 5), pt(1, 0)]).unwrap();
        assert_eq!(game.stone_at(pt(0, 0)), Some(Color::Black));
        assert_eq!(game.stone_at(pt(5, 5)), Some(Color::White));
        assert_eq!(game.stone_at(pt(1, 0)), Some(Color::Black));
        assert_eq!(game.current_color(), Color::White);
        assert_eq!(game.history().len(), 4);
    }

    #[test]
    fn rejected_move_keeps_turn() {
        let mut game = Game::with_moves(&[pt(3, 3)]).unwrap();
        assert_eq!(game.try_play(pt(3, 3)), Err(GoError::Occupied(pt(3, 3))));
        assert_eq!(game.current_color(), Color::White);
        assert_eq!(game.move_number(), 1);
    }

    #[test]
    fn undo_restores_previous_position() {
        let mut game = Game::with_moves(&[pt(3, 3), pt(4, 4)]).unwrap();
        assert!(game.undo());
        assert_eq!(game.stone_at(pt(4, 4)), None);
        assert_eq!(game.stone_at(pt(3, 3)), Some(Color::Black));
        assert_eq!(game.current_color(), Color::White);
        assert_eq!(game.board(), &game.history()[1]);

        assert!(game.undo());
        assert!(game.board().is_empty());
        assert!(!game.undo());
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn undo_then_board_is_independent_of_history() {
        let mut game = Game::with_moves(&[pt(3, 3), pt(4, 4)]).unwrap();
        game.undo();
        game.try_play(pt(9, 9)).unwrap();
        assert_eq!(game.history()[1].len(), 1);
        assert_eq!(game.history()[2].color_at(pt(9, 9)), Some(Color::White));
    }

    #[test]
    fn game_state_reflects_position() {
        let game = Game::with_moves(&[pt(2, 1)]).unwrap();
        let state = game.game_state();
        assert_eq!(state.size, 19);
        assert_eq!(state.board.len(), 361);
        assert_eq!(state.board[pt(2, 1).index()], 1);
        assert_eq!(state.move_number, 1);
        assert_eq!(state.to_play, Color::White);
        assert_eq!(state.last_move, Some(Turn::new(Color::Black, pt(2, 1))));
    }

    #[test]
    fn game_state_serializes() {
        let game = Game::with_moves(&[pt(0, 0)]).unwrap();
        let json = serde_json::to_value(game.game_state()).unwrap();
        assert_eq!(json["to_play"], -1);
        assert_eq!(json["move_number"], 1);
        assert_eq!(json["last_move"]["pos"]["x"], 0);
    }
}
