//! Pairup - memory-matching card game CLI
//!
//! Interactive terminal front-end over the headless game engine.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

use pairup::{
    Card, ClickOutcome, Flippable, GameConfig, GameSession, GridSize, IgnoreReason, MemoryStore,
    ResultRepository, ResultStore, SessionError, FLIP_BACK_DELAY,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { size, db, no_store } => run_play(size, db, no_store).await,
        Command::Stats { db, json } => run_stats(db, json).await,
    }
}

/// Opens the sqlite repository and brings its schema up to date.
#[instrument]
fn open_repository(db_path: &str) -> Result<ResultRepository> {
    let repo = ResultRepository::new(db_path.to_string());
    repo.run_migrations()?;
    Ok(repo)
}

/// Run an interactive game in the terminal.
#[instrument]
async fn run_play(size: GridSize, db_path: String, no_store: bool) -> Result<()> {
    let store: Arc<dyn ResultStore> = if no_store {
        info!("Playing without persistence");
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(open_repository(&db_path)?)
    };

    let config = GameConfig::new(size, FLIP_BACK_DELAY);
    let mut session = GameSession::new(config, store)?;

    println!("Memory Card Game ({size})");
    println!("Click two cards to flip them over; matching pairs stay face up.");
    println!("Enter a card number, 'avg' for the average, or 'q' to quit.\n");

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        render_board(&session);
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let input = line?.trim().to_lowercase();

        match input.as_str() {
            "q" | "quit" => break,
            "avg" | "average" => show_average(&session).await,
            _ => {
                let Ok(id) = input.parse::<usize>() else {
                    println!("Enter a card number, 'avg', or 'q'.");
                    continue;
                };
                match session.click(id).await {
                    ClickOutcome::Ignored(reason) => report_ignored(reason),
                    ClickOutcome::Selected | ClickOutcome::Matched => {}
                    ClickOutcome::Mismatch { generation } => {
                        render_board(&session);
                        println!("No match...");
                        session.run_flip_back(generation).await;
                    }
                    ClickOutcome::Won { total_clicks } => {
                        render_board(&session);
                        println!("You win! Total clicks: {total_clicks}");
                        if !prompt_restart(&mut lines)? {
                            break;
                        }
                        session.restart()?;
                    }
                }
                println!("Clicks: {}", session.board().total_clicks());
            }
        }
    }

    Ok(())
}

/// Aggregate summary across all stored games.
#[derive(Debug, serde::Serialize)]
struct StatsSummary {
    games: usize,
    average_clicks: f64,
}

/// Print aggregate statistics for all stored games.
#[instrument]
async fn run_stats(db_path: String, json: bool) -> Result<()> {
    let repo = open_repository(&db_path)?;
    let records = repo.list_all().await?;
    let clicks: Vec<i64> = records.iter().map(|r| *r.clicks() as i64).collect();

    let summary = StatsSummary {
        games: clicks.len(),
        average_clicks: pairup::stats::mean_rounded(&clicks),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else if summary.games == 0 {
        println!("No games played yet.");
    } else {
        println!("Games played: {}", summary.games);
        println!("Average clicks to complete game: {:.2}", summary.average_clicks);
    }
    Ok(())
}

async fn show_average(session: &GameSession) {
    match session.average_clicks().await {
        Ok(Some(avg)) => println!("Average clicks to complete game: {avg:.2}"),
        Ok(None) => println!("No games played yet."),
        Err(SessionError::Stale) => {}
        Err(e) => println!("{e}"),
    }
}

fn report_ignored(reason: IgnoreReason) {
    match reason {
        IgnoreReason::GameFinished => println!("The game is over."),
        IgnoreReason::Locked => {}
        IgnoreReason::NoSuchCard => println!("No card at that number."),
        IgnoreReason::AlreadyFaceUp => {}
    }
}

fn prompt_restart(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
) -> Result<bool> {
    print!("Play again? [y/N] ");
    std::io::stdout().flush()?;
    let Some(line) = lines.next() else {
        return Ok(false);
    };
    Ok(matches!(line?.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Renders the board as a grid of numbered cells; face-up cards show
/// their colour and shape.
fn render_board(session: &GameSession) {
    let cols = session.config().grid().cols().max(1) as usize;
    let cards = session.board().cards();

    for row in cards.chunks(cols) {
        let line: Vec<String> = row.iter().map(cell_label).collect();
        println!("{}", line.join("  "));
    }
}

fn cell_label(card: &Card) -> String {
    if card.is_face_up() {
        format!("[{:>2} {}]", card.id(), card.face())
    } else {
        format!("[{:>2} ###]", card.id())
    }
}
