use battleship_rules::{
    AttackResult, Envelope, InMemoryStore, LogNotifier, Request, Response, RulesEngine,
    SessionGateway,
};
use tokio::sync::{mpsc, oneshot};

fn spawn_gateway() -> (
    mpsc::Sender<Envelope>,
    tokio::task::JoinHandle<anyhow::Result<()>>,
) {
    let engine = RulesEngine::new(InMemoryStore::new(), LogNotifier);
    let (tx, rx) = mpsc::channel(8);
    let handle = tokio::spawn(SessionGateway::new(engine).serve(rx));
    (tx, handle)
}

async fn call(tx: &mpsc::Sender<Envelope>, request: Request) -> Response {
    let (reply_tx, reply_rx) = oneshot::channel();
    tx.send((request, reply_tx)).await.unwrap();
    reply_rx.await.unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn gateway_plays_a_full_round() {
    let (tx, server) = spawn_gateway();

    let response = call(
        &tx,
        Request::NewGame {
            board_size: 10,
            force_create: false,
        },
    )
    .await;
    match response {
        Response::NewGame(r) => assert!(r.success),
        other => panic!("unexpected response: {:?}", other),
    }

    let response = call(
        &tx,
        Request::AddBattleship {
            player: 1,
            x: 5,
            y: 3,
            ship_size: 2,
            horizontal: true,
        },
    )
    .await;
    match response {
        Response::AddBattleship(r) => assert!(r.success),
        other => panic!("unexpected response: {:?}", other),
    }

    let response = call(
        &tx,
        Request::Attack {
            source_player: 2,
            target_player: 1,
            x: 5,
            y: 3,
        },
    )
    .await;
    match response {
        Response::Attack(r) => {
            assert!(r.success);
            assert_eq!(r.result, AttackResult::Hit);
        }
        other => panic!("unexpected response: {:?}", other),
    }

    let response = call(&tx, Request::GetBoard).await;
    match response {
        Response::GetBoard(r) => {
            assert!(r.success);
            assert_eq!(r.cells.len(), 2);
            assert!(r.cells[0].hit);
            assert!(!r.cells[1].hit);
        }
        other => panic!("unexpected response: {:?}", other),
    }

    drop(tx);
    server.await.unwrap().unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_overlapping_placements_admit_exactly_one() {
    let (tx, server) = spawn_gateway();

    match call(
        &tx,
        Request::NewGame {
            board_size: 10,
            force_create: false,
        },
    )
    .await
    {
        Response::NewGame(r) => assert!(r.success),
        other => panic!("unexpected response: {:?}", other),
    }

    // two identical placements racing through the channel: the serve loop
    // answers one at a time, so the second must see the first ship
    let place = Request::AddBattleship {
        player: 1,
        x: 4,
        y: 4,
        ship_size: 3,
        horizontal: true,
    };
    let first = tokio::spawn({
        let tx = tx.clone();
        let place = place.clone();
        async move { call(&tx, place).await }
    });
    let second = tokio::spawn({
        let tx = tx.clone();
        async move { call(&tx, place).await }
    });

    let outcomes = [first.await.unwrap(), second.await.unwrap()];
    let successes = outcomes
        .iter()
        .filter(|response| match response {
            Response::AddBattleship(r) => r.success,
            other => panic!("unexpected response: {:?}", other),
        })
        .count();
    assert_eq!(successes, 1);

    match call(&tx, Request::GetBoard).await {
        Response::GetBoard(r) => assert_eq!(r.cells.len(), 3),
        other => panic!("unexpected response: {:?}", other),
    }

    drop(tx);
    server.await.unwrap().unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn gateway_reports_failures_as_responses() {
    let (tx, server) = spawn_gateway();

    // no game yet: every operation fails politely instead of panicking
    match call(&tx, Request::GetBoard).await {
        Response::GetBoard(r) => {
            assert!(!r.success);
            assert_eq!(r.message, "No game found.");
        }
        other => panic!("unexpected response: {:?}", other),
    }
    match call(
        &tx,
        Request::Attack {
            source_player: 1,
            target_player: 2,
            x: 3,
            y: 3,
        },
    )
    .await
    {
        Response::Attack(r) => assert!(!r.success),
        other => panic!("unexpected response: {:?}", other),
    }

    drop(tx);
    server.await.unwrap().unwrap();
}
