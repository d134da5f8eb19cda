//! Common types for the rules engine: attack outcomes and rule violations.

/// Result of resolving an attack against a single coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackResult {
    /// No ship segment at the target coordinate.
    Miss,
    /// A segment was hit but its ship still has unhit cells.
    Hit,
    /// The hit completed the ship; every cell of it is now hit.
    Sunk,
}

/// Rule violations. These surface to callers as a failed response carrying
/// the `Display` text, never as a panic or an `Err` on the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesError {
    /// No active game in the store.
    NoGameFound,
    /// Player id that maps to neither Player1 nor Player2.
    InvalidPlayer(i32),
    /// Ship length below one.
    InvalidShipSize(i32),
    /// Coordinate outside the playable interior of the board.
    InvalidPosition(i32, i32),
    /// Placement would overlap a ship of the same player.
    ShipOverlaps,
    /// A game exists and is in progress; creation was not forced.
    GameInProgress,
}

impl core::fmt::Display for RulesError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RulesError::NoGameFound => write!(f, "No game found."),
            RulesError::InvalidPlayer(id) => write!(f, "Invalid player - {}.", id),
            RulesError::InvalidShipSize(len) => write!(f, "Invalid ship size ({}).", len),
            RulesError::InvalidPosition(x, y) => write!(f, "Invalid position ({},{}).", x, y),
            RulesError::ShipOverlaps => write!(f, "Battleships cannot overlap."),
            RulesError::GameInProgress => write!(
                f,
                "New game could not be created. There is a game in progress."
            ),
        }
    }
}
