use torus_engine::{BOARD_SIZE, Game, Point};
use wasm_bindgen::prelude::*;

/// Game handle for the canvas front end. Coordinates are board cells; the
/// front end owns pixel mapping and panning.
#[wasm_bindgen]
pub struct WasmGame {
    inner: Game,
    last_error: Option<String>,
}

impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: Game::new(),
            last_error: None,
        }
    }

    pub fn board_size() -> u8 {
        BOARD_SIZE
    }

    // -- Game actions --

    /// Play the side to move. Returns false for occupied, suicide, ko or
    /// off-board points; `last_error` holds the reason.
    pub fn try_play(&mut self, x: u8, y: u8) -> bool {
        let Some(point) = Point::checked(x, y) else {
            self.last_error = Some(torus_engine::GoError::NotOnBoard.to_string());
            return false;
        };
        match self.inner.try_play(point) {
            Ok(_) => {
                self.last_error = None;
                true
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                false
            }
        }
    }

    pub fn undo(&mut self) -> bool {
        self.last_error = None;
        self.inner.undo()
    }

    pub fn is_legal(&self, x: u8, y: u8) -> bool {
        Point::checked(x, y).is_some_and(|p| self.inner.is_legal(p))
    }

    // -- Queries --

    /// 1 = Black, -1 = White, 0 = empty or off board.
    pub fn stone_at(&self, x: u8, y: u8) -> i8 {
        Point::checked(x, y)
            .and_then(|p| self.inner.stone_at(p))
            .map_or(0, |c| c.to_int())
    }

    pub fn move_number(&self) -> usize {
        self.inner.move_number()
    }

    pub fn current_color(&self) -> i8 {
        self.inner.current_color().to_int()
    }

    pub fn last_error(&self) -> Option<String> {
        self.last_error.clone()
    }

    // -- JSON serialization (WASM boundary) --

    pub fn state_json(&self) -> String {
        serde_json::to_string(&self.inner.game_state())
            .unwrap_or_else(|e| format!(r#"{{"error":"{}"}}"#, e))
    }
}
