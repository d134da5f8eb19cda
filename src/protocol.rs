//! Request and response shapes crossing the session boundary.
//!
//! Player fields on requests carry raw integer ids so that malformed input
//! reaches the engine's validation instead of failing to deserialize.

use alloc::string::String;
use alloc::vec::Vec;

use crate::common::AttackResult;
use crate::domain::{Cell, Player};

/// Requests accepted by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Request {
    NewGame {
        board_size: i32,
        force_create: bool,
    },
    AddBattleship {
        player: i32,
        x: i32,
        y: i32,
        ship_size: i32,
        horizontal: bool,
    },
    Attack {
        source_player: i32,
        target_player: i32,
        x: i32,
        y: i32,
    },
    GetBoard,
}

/// Replies produced by the gateway, one variant per request.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Response {
    NewGame(NewGameResponse),
    AddBattleship(PlaceShipResponse),
    Attack(AttackResponse),
    GetBoard(GameBoardResponse),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct NewGameResponse {
    pub success: bool,
    /// Set when creation failed because a game is already in progress.
    pub game_in_progress: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceShipResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResponse {
    pub success: bool,
    pub message: String,
    pub result: AttackResult,
}

/// One board cell as exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct CellState {
    pub player: Player,
    pub x: i32,
    pub y: i32,
    pub hit: bool,
}

impl From<&Cell> for CellState {
    fn from(cell: &Cell) -> Self {
        Self {
            player: cell.player(),
            x: cell.x(),
            y: cell.y(),
            hit: cell.hit(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameBoardResponse {
    pub success: bool,
    pub message: String,
    /// Ordered by (player, x, y); this ordering is part of the response
    /// contract, independent of placement order.
    pub cells: Vec<CellState>,
}
