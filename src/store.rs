//! Session storage: at most one active game at a time.

use crate::domain::Game;

/// Holds the current game. Replacement is unconditional; deciding whether a
/// replacement is allowed belongs to the rules engine, not the store.
pub trait GameStore {
    /// Replace the current game, discarding any previous one.
    fn set(&mut self, game: Game);

    /// The current game, if one was ever created.
    fn get(&self) -> Option<&Game>;

    /// Mutable access to the current game.
    fn get_mut(&mut self) -> Option<&mut Game>;
}

/// Process-memory store; the session lives only as long as the value.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    current: Option<Game>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self { current: None }
    }
}

impl GameStore for InMemoryStore {
    fn set(&mut self, game: Game) {
        self.current = Some(game);
    }

    fn get(&self) -> Option<&Game> {
        self.current.as_ref()
    }

    fn get_mut(&mut self) -> Option<&mut Game> {
        self.current.as_mut()
    }
}
