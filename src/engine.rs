//! The rules engine: validation and resolution for every game operation.
//!
//! Every operation returns a structured response with a success flag and a
//! human-readable message. Rule violations are logged at Error level and
//! never abort the process; the one informational fallback (a non-positive
//! board size) is logged at Info and still succeeds.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::common::{AttackResult, RulesError};
use crate::domain::{Cell, Game, Player};
use crate::notify::{LogLevel, Notifier};
use crate::protocol::{
    AttackResponse, CellState, GameBoardResponse, NewGameResponse, PlaceShipResponse,
};
use crate::store::GameStore;

/// Board size used when a request asks for a non-positive one.
pub const DEFAULT_BOARD_SIZE: i32 = 10;

/// Game rules over an injected store and log sink.
///
/// Operations are synchronous and take `&mut self`, so exclusive access to
/// the engine is exactly the single-writer serialization the validate-then-
/// mutate sequences need. Hosts serving concurrent callers put the engine
/// behind one writer (see `SessionGateway`).
pub struct RulesEngine<S, N> {
    store: S,
    notifier: N,
}

impl<S: GameStore, N: Notifier> RulesEngine<S, N> {
    pub fn new(store: S, notifier: N) -> Self {
        Self { store, notifier }
    }

    /// Create a new game, replacing the stored one unless it is in progress
    /// and `force_create` is false. A non-positive `board_size` falls back
    /// to [`DEFAULT_BOARD_SIZE`] and still succeeds.
    pub fn create_game(&mut self, board_size: i32, force_create: bool) -> NewGameResponse {
        let mut response = NewGameResponse {
            success: false,
            game_in_progress: false,
            message: String::new(),
        };

        let mut board_size = board_size;
        if board_size <= 0 {
            let message = format!(
                "Invalid game board size. New game will be created with default size {}.",
                DEFAULT_BOARD_SIZE
            );
            self.notifier.notify(LogLevel::Info, &message);
            response.message.push_str(&message);
            board_size = DEFAULT_BOARD_SIZE;
        }

        let can_create = match self.store.get() {
            None => true,
            Some(game) => !game.is_in_progress() || force_create,
        };
        if can_create {
            self.store.set(Game::new(board_size));
            self.notifier.notify(LogLevel::Info, "New game created.");
            response.success = true;
            return response;
        }

        let message = self.reject(RulesError::GameInProgress);
        response.message.push_str(&message);
        response.game_in_progress = true;
        response
    }

    /// Place a ship of `length` cells starting at (`x`, `y`), extending
    /// along increasing x when `horizontal`, increasing y otherwise.
    pub fn place_ship(
        &mut self,
        player: i32,
        x: i32,
        y: i32,
        length: i32,
        horizontal: bool,
    ) -> PlaceShipResponse {
        match self.try_place_ship(player, x, y, length, horizontal) {
            Ok(()) => {
                let message = format!("Battleship added at ({},{}).", x, y);
                self.notifier.notify(LogLevel::Info, &message);
                PlaceShipResponse {
                    success: true,
                    message: String::new(),
                }
            }
            Err(err) => PlaceShipResponse {
                success: false,
                message: self.reject(err),
            },
        }
    }

    fn try_place_ship(
        &mut self,
        player: i32,
        x: i32,
        y: i32,
        length: i32,
        horizontal: bool,
    ) -> Result<(), RulesError> {
        if self.store.get().is_none() {
            return Err(RulesError::NoGameFound);
        }
        let player = Player::try_from(player).map_err(RulesError::InvalidPlayer)?;
        if length < 1 {
            return Err(RulesError::InvalidShipSize(length));
        }

        // saturate instead of overflowing: a span past i32::MAX is out of
        // bounds on any board, and the bounds check below rejects it
        let (end_x, end_y) = if horizontal {
            (x.saturating_add(length - 1), y)
        } else {
            (x, y.saturating_add(length - 1))
        };

        let game = match self.store.get_mut() {
            Some(game) => game,
            None => return Err(RulesError::NoGameFound),
        };
        for (px, py) in [(x, y), (end_x, end_y)] {
            if !game.contains(px, py) {
                return Err(RulesError::InvalidPosition(px, py));
            }
        }
        // The whole span is validated before anything is written, so a
        // rejected placement leaves the board untouched.
        for cx in x..=end_x {
            for cy in y..=end_y {
                if game.is_occupied(player, cx, cy) {
                    return Err(RulesError::ShipOverlaps);
                }
            }
        }

        let ship = game.new_ship(player, length);
        let mut cells = Vec::with_capacity(ship.length() as usize);
        for cx in x..=end_x {
            for cy in y..=end_y {
                cells.push(Cell::new(ship.player(), cx, cy, ship.id()));
            }
        }
        game.commit(cells);
        Ok(())
    }

    /// Resolve an attack on (`x`, `y`) of `target_player`'s board.
    ///
    /// `source_player` is accepted as-is: it is not validated and may equal
    /// the target. Attacking an empty coordinate is a Miss, not an error,
    /// and re-attacking a hit cell reports Hit (or Sunk) again.
    pub fn attack(
        &mut self,
        source_player: i32,
        target_player: i32,
        x: i32,
        y: i32,
    ) -> AttackResponse {
        let _ = source_player;

        let fail = |message: String| AttackResponse {
            success: false,
            message,
            result: AttackResult::Miss,
        };
        if self.store.get().is_none() {
            return fail(self.reject(RulesError::NoGameFound));
        }
        let target = match Player::try_from(target_player) {
            Ok(player) => player,
            Err(id) => return fail(self.reject(RulesError::InvalidPlayer(id))),
        };

        let game = match self.store.get_mut() {
            Some(game) => game,
            None => return fail(self.reject(RulesError::NoGameFound)),
        };
        let hit_ship = game.cell_at_mut(target, x, y).map(|cell| {
            cell.mark_hit();
            cell.ship()
        });
        let result = match hit_ship {
            None => AttackResult::Miss,
            Some(ship) => {
                let message = format!("Battleship hit at ({},{}).", x, y);
                self.notifier.notify(LogLevel::Info, &message);
                if game.is_sunk(ship) {
                    let message = format!("Battleship sunk at ({},{}).", x, y);
                    self.notifier.notify(LogLevel::Info, &message);
                    AttackResult::Sunk
                } else {
                    AttackResult::Hit
                }
            }
        };

        AttackResponse {
            success: true,
            message: String::new(),
            result,
        }
    }

    /// Snapshot of every cell, ordered by (player, x, y).
    pub fn game_board(&self) -> GameBoardResponse {
        let game = match self.store.get() {
            Some(game) => game,
            None => {
                return GameBoardResponse {
                    success: false,
                    message: self.reject(RulesError::NoGameFound),
                    cells: Vec::new(),
                }
            }
        };

        let mut cells: Vec<CellState> = game.cells().iter().map(CellState::from).collect();
        cells.sort_by_key(|c| (c.player, c.x, c.y));
        GameBoardResponse {
            success: true,
            message: String::new(),
            cells,
        }
    }

    fn reject(&self, err: RulesError) -> String {
        let message = err.to_string();
        self.notifier.notify(LogLevel::Error, &message);
        message
    }
}
