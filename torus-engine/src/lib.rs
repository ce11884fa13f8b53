pub mod board;
pub mod chain;
pub mod color;
pub mod error;
pub mod game;
pub mod point;
pub mod sets;
pub mod turn;

pub use board::{Board, Placement};
pub use chain::Chain;
pub use color::Color;
pub use error::GoError;
pub use game::{Game, GameState};
pub use point::{BOARD_SIZE, ParsePointError, Point};
pub use turn::Turn;
