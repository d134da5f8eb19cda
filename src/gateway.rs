#![cfg(feature = "std")]

//! Boundary between an external caller and the rules engine.

use tokio::sync::{mpsc, oneshot};

use crate::engine::RulesEngine;
use crate::notify::Notifier;
use crate::protocol::{Request, Response};
use crate::store::GameStore;

/// A request paired with the slot its response is sent back through.
pub type Envelope = (Request, oneshot::Sender<Response>);

/// Owns the engine and translates requests into engine calls.
pub struct SessionGateway<S: GameStore, N: Notifier> {
    engine: RulesEngine<S, N>,
}

impl<S: GameStore, N: Notifier> SessionGateway<S, N> {
    pub fn new(engine: RulesEngine<S, N>) -> Self {
        Self { engine }
    }

    /// Dispatch one request to the engine.
    pub fn handle(&mut self, request: Request) -> Response {
        match request {
            Request::NewGame {
                board_size,
                force_create,
            } => Response::NewGame(self.engine.create_game(board_size, force_create)),
            Request::AddBattleship {
                player,
                x,
                y,
                ship_size,
                horizontal,
            } => Response::AddBattleship(self.engine.place_ship(player, x, y, ship_size, horizontal)),
            Request::Attack {
                source_player,
                target_player,
                x,
                y,
            } => Response::Attack(self.engine.attack(source_player, target_player, x, y)),
            Request::GetBoard => Response::GetBoard(self.engine.game_board()),
        }
    }

    /// Serve requests until every sender is dropped.
    ///
    /// Requests are answered strictly one at a time, which is the mutual
    /// exclusion the engine relies on: two validate-then-mutate sequences
    /// can never interleave on the same game.
    pub async fn serve(mut self, mut requests: mpsc::Receiver<Envelope>) -> anyhow::Result<()> {
        while let Some((request, reply)) = requests.recv().await {
            // the caller may have given up waiting; that is not an error here
            let _ = reply.send(self.handle(request));
        }
        Ok(())
    }
}
