//! Neon Tic-Tac-Toe - terminal game with score tracking.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use neon_tictactoe::{
    Arena, ArenaConfig, Cli, Command, GameEvent, GameMode, InputLines, JsonFileStore,
    Orchestrator, StatsStore, TextRenderer,
};
use std::io::BufRead;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = ArenaConfig::load_or_default(&cli.config)?;
    init_tracing(config.log_filter());

    match cli.command {
        Command::Play {
            mode,
            difficulty,
            ai_mark,
            ai_delay_ms,
            rounds,
        } => {
            config.apply_overrides(difficulty, ai_mark, ai_delay_ms, cli.stats);
            run_play(config, mode, rounds).await
        }
        Command::Stats => {
            config.apply_overrides(None, None, None, cli.stats);
            show_stats(&config)
        }
        Command::ResetStats => {
            config.apply_overrides(None, None, None, cli.stats);
            reset_stats(&config)
        }
    }
}

/// Logs go to stderr so the board on stdout stays readable.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Play games in the terminal
#[instrument(skip(config))]
async fn run_play(config: ArenaConfig, mode: GameMode, rounds: Option<u32>) -> Result<()> {
    info!(mode = mode.name(), difficulty = %config.difficulty(), "Starting play");

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<GameEvent>();
    let render_task = tokio::spawn(async move {
        let mut renderer = TextRenderer::new(std::io::stdout());
        while let Some(event) = event_rx.recv().await {
            if let Err(e) = renderer.event(&event) {
                warn!(error = %e, "Failed to write to terminal");
                break;
            }
        }
    });

    let input = spawn_stdin_reader(mode.needs_input());
    let (player_x, player_o) = mode.build_players(&config, input, event_tx.clone());
    let mut orchestrator = Orchestrator::new(player_x, player_o, event_tx.clone());

    let store = JsonFileStore::new(config.stats_path());
    let mut arena = Arena::open(store)?.with_events(event_tx.clone());
    event_tx.send(GameEvent::ScoresUpdated(*arena.scoreboard()))?;

    if mode.needs_input() {
        event_tx.send(GameEvent::Notice(
            "Enter 1-9 or a square name; r restarts, reset clears scores, q quits".to_string(),
        ))?;
    }

    // Self-play would never end on its own.
    let rounds = match mode {
        GameMode::AiVsAi => rounds.or(Some(1)),
        _ => rounds,
    };
    let finished = arena.play(&mut orchestrator, rounds).await?;
    debug!(finished, "Play loop done");

    drop(orchestrator);
    drop(arena);
    drop(event_tx);
    render_task.await?;
    Ok(())
}

/// Reads stdin lines on a plain thread so a pending read never holds up exit.
fn spawn_stdin_reader(enabled: bool) -> InputLines {
    let (tx, rx) = mpsc::unbounded_channel();
    if enabled {
        std::thread::spawn(move || {
            for line in std::io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "Failed to read stdin");
                        break;
                    }
                }
            }
        });
    }
    Arc::new(Mutex::new(rx))
}

/// Show the saved scores
fn show_stats(config: &ArenaConfig) -> Result<()> {
    let store = JsonFileStore::new(config.stats_path());
    let scoreboard = store.load()?;
    TextRenderer::new(std::io::stdout()).scoreboard(&scoreboard)?;
    debug!(path = %store.path().display(), "Stats shown");
    Ok(())
}

/// Clear the running scores
fn reset_stats(config: &ArenaConfig) -> Result<()> {
    let mut arena = Arena::open(JsonFileStore::new(config.stats_path()))?;
    arena.reset_scores()?;
    let mut out = TextRenderer::new(std::io::stdout());
    out.line("Running scores cleared")?;
    out.scoreboard(arena.scoreboard())?;
    Ok(())
}
