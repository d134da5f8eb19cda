//! Core data model: players, ships, cells and the game session.

use alloc::vec::Vec;

/// One of the two players in a game. There is no third value; anything
/// else arriving on the boundary is an invalid-input error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    Player1 = 1,
    Player2 = 2,
}

impl Player {
    /// Numeric id used on the request boundary.
    pub fn id(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for Player {
    type Error = i32;

    fn try_from(id: i32) -> Result<Self, i32> {
        match id {
            1 => Ok(Player::Player1),
            2 => Ok(Player::Player2),
            other => Err(other),
        }
    }
}

impl core::fmt::Display for Player {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Player::Player1 => write!(f, "Player1"),
            Player::Player2 => write!(f, "Player2"),
        }
    }
}

/// Opaque ship identity, unique within its owning game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(u32);

/// A placed ship: identity, owner and length. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Battleship {
    id: ShipId,
    player: Player,
    length: i32,
}

impl Battleship {
    fn new(id: ShipId, player: Player, length: i32) -> Self {
        Self { id, player, length }
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn length(&self) -> i32 {
        self.length
    }
}

/// One occupied coordinate on a player's board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    player: Player,
    x: i32,
    y: i32,
    ship: ShipId,
    hit: bool,
}

impl Cell {
    pub(crate) fn new(player: Player, x: i32, y: i32, ship: ShipId) -> Self {
        Self {
            player,
            x,
            y,
            ship,
            hit: false,
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn ship(&self) -> ShipId {
        self.ship
    }

    pub fn hit(&self) -> bool {
        self.hit
    }

    /// Hits are permanent; there is deliberately no way to clear the flag.
    pub(crate) fn mark_hit(&mut self) {
        self.hit = true;
    }
}

/// The single active session: board size, occupied cells in insertion
/// order, and the in-progress flag.
///
/// The playable area is the strict interior of the board: a coordinate is
/// on the board when `0 < x < board_size` and `0 < y < board_size`. The
/// boundary rows and columns 0 and `board_size` are not playable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board_size: i32,
    cells: Vec<Cell>,
    in_progress: bool,
    next_ship: u32,
}

impl Game {
    /// Fresh session: empty board, not yet in progress.
    pub fn new(board_size: i32) -> Self {
        Self {
            board_size,
            cells: Vec::new(),
            in_progress: false,
            next_ship: 0,
        }
    }

    pub fn board_size(&self) -> i32 {
        self.board_size
    }

    /// True once the first ship has been placed. Only replacing the game
    /// clears it.
    pub fn is_in_progress(&self) -> bool {
        self.in_progress
    }

    /// Strict-interior bounds check.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x > 0 && y > 0 && x < self.board_size && y < self.board_size
    }

    /// Whether `player` already has a cell at (`x`, `y`). The other
    /// player's cells do not count; each player has their own board region.
    pub fn is_occupied(&self, player: Player, x: i32, y: i32) -> bool {
        self.cells
            .iter()
            .any(|c| c.player == player && c.x == x && c.y == y)
    }

    /// Cells in insertion order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cell_at_mut(&mut self, player: Player, x: i32, y: i32) -> Option<&mut Cell> {
        self.cells
            .iter_mut()
            .find(|c| c.player == player && c.x == x && c.y == y)
    }

    /// A ship is sunk when every cell referencing it has been hit.
    pub fn is_sunk(&self, ship: ShipId) -> bool {
        self.cells.iter().filter(|c| c.ship == ship).all(|c| c.hit)
    }

    /// Allocate a fresh ship identity. Callers only do this once placement
    /// validation has fully passed.
    pub(crate) fn new_ship(&mut self, player: Player, length: i32) -> Battleship {
        self.next_ship += 1;
        Battleship::new(ShipId(self.next_ship), player, length)
    }

    /// Commit a validated placement in one step and mark the game in
    /// progress. Nothing is written before this point, so a rejected
    /// placement never needs rolling back.
    pub(crate) fn commit(&mut self, cells: Vec<Cell>) {
        self.in_progress = true;
        self.cells.extend(cells);
    }
}
