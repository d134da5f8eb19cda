#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_rules::{
    init_logging, Envelope, InMemoryStore, LogNotifier, Request, Response, RulesEngine,
    SessionGateway,
};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use tokio::io::{AsyncBufReadExt, BufReader};
#[cfg(feature = "std")]
use tokio::sync::{mpsc, oneshot};

/// Interactive driver for the battleship rules engine.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Create a game of this size on startup.
    #[arg(long)]
    board_size: Option<i32>,
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let engine = RulesEngine::new(InMemoryStore::new(), LogNotifier);
    let (tx, rx) = mpsc::channel(16);
    let server = tokio::spawn(SessionGateway::new(engine).serve(rx));

    if let Some(size) = cli.board_size {
        let response = call(
            &tx,
            Request::NewGame {
                board_size: size,
                force_create: false,
            },
        )
        .await?;
        print_response(response);
    }

    println!("commands:");
    println!("  new <size> [force]");
    println!("  add <player> <x> <y> <size> <h|v>");
    println!("  attack <source> <target> <x> <y>");
    println!("  board");
    println!("  quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" {
            break;
        }
        match parse_command(line) {
            Some(request) => print_response(call(&tx, request).await?),
            None => println!("unrecognized command: {}", line),
        }
    }

    drop(tx);
    server.await??;
    Ok(())
}

#[cfg(feature = "std")]
async fn call(tx: &mpsc::Sender<Envelope>, request: Request) -> anyhow::Result<Response> {
    let (reply_tx, reply_rx) = oneshot::channel();
    tx.send((request, reply_tx))
        .await
        .map_err(|_| anyhow::anyhow!("gateway stopped"))?;
    Ok(reply_rx.await?)
}

#[cfg(feature = "std")]
fn parse_command(line: &str) -> Option<Request> {
    let mut parts = line.split_whitespace();
    let request = match parts.next()? {
        "new" => Request::NewGame {
            board_size: parts.next()?.parse().ok()?,
            force_create: matches!(parts.next(), Some("force")),
        },
        "add" => Request::AddBattleship {
            player: parts.next()?.parse().ok()?,
            x: parts.next()?.parse().ok()?,
            y: parts.next()?.parse().ok()?,
            ship_size: parts.next()?.parse().ok()?,
            horizontal: match parts.next()? {
                "h" => true,
                "v" => false,
                _ => return None,
            },
        },
        "attack" => Request::Attack {
            source_player: parts.next()?.parse().ok()?,
            target_player: parts.next()?.parse().ok()?,
            x: parts.next()?.parse().ok()?,
            y: parts.next()?.parse().ok()?,
        },
        "board" => Request::GetBoard,
        _ => return None,
    };
    Some(request)
}

#[cfg(feature = "std")]
fn print_response(response: Response) {
    match response {
        Response::NewGame(r) => {
            if r.success {
                println!("ok {}", r.message);
            } else {
                println!("error: {}", r.message);
            }
        }
        Response::AddBattleship(r) => {
            if r.success {
                println!("ok");
            } else {
                println!("error: {}", r.message);
            }
        }
        Response::Attack(r) => {
            if r.success {
                println!("{:?}", r.result);
            } else {
                println!("error: {}", r.message);
            }
        }
        Response::GetBoard(r) => {
            if r.success {
                for cell in &r.cells {
                    println!(
                        "{} ({},{}) {}",
                        cell.player,
                        cell.x,
                        cell.y,
                        if cell.hit { "hit" } else { "afloat" }
                    );
                }
            } else {
                println!("error: {}", r.message);
            }
        }
    }
}
