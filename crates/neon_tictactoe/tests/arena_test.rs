//! Tests for the round loop with scripted and AI players.

use anyhow::Result;
use neon_tictactoe::{
    AiPlayer, AiRecord, Arena, GameEvent, MemoryStore, Orchestrator, Player, PlayerAction,
    RoundResult, StatsStore,
};
use neon_tictactoe_core::{Difficulty, Game, Mark, MoveOutcome, Position, WinPattern};
use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::mpsc;

/// Player that replays a fixed list of actions, then quits.
struct ScriptedPlayer {
    name: String,
    actions: VecDeque<PlayerAction>,
    is_ai: bool,
}

impl ScriptedPlayer {
    fn new(name: &str, actions: impl IntoIterator<Item = PlayerAction>) -> Self {
        Self {
            name: name.to_string(),
            actions: actions.into_iter().collect(),
            is_ai: false,
        }
    }

    fn places(name: &str, positions: &[Position]) -> Self {
        Self::new(name, positions.iter().copied().map(PlayerAction::Place))
    }
}

#[async_trait::async_trait]
impl Player for ScriptedPlayer {
    async fn get_action(&mut self, _game: &Game) -> Result<PlayerAction> {
        Ok(self.actions.pop_front().unwrap_or(PlayerAction::Quit))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_ai(&self) -> bool {
        self.is_ai
    }
}

fn drain(rx: &mut mpsc::UnboundedReceiver<GameEvent>) -> Vec<GameEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn test_top_row_win_is_reported_and_recorded() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let x = ScriptedPlayer::places(
        "Alice",
        &[Position::TopLeft, Position::TopCenter, Position::TopRight],
    );
    let o = ScriptedPlayer::places("Bob", &[Position::Center, Position::MiddleLeft]);
    let mut orchestrator = Orchestrator::new(Box::new(x), Box::new(o), tx.clone());

    let store = MemoryStore::new();
    let mut arena = Arena::open(store.clone()).unwrap().with_events(tx);
    let finished = arena.play(&mut orchestrator, Some(1)).await.unwrap();

    assert_eq!(finished, 1);
    assert_eq!(*store.load().unwrap().scores().x(), 1);
    assert_eq!(*store.load().unwrap().totals().games(), 1);

    let events = drain(&mut rx);
    assert!(events.contains(&GameEvent::GameOver {
        outcome: MoveOutcome::Won {
            mark: Mark::X,
            pattern: WinPattern::TopRow
        },
        winner: Some("Alice".to_string()),
    }));
    assert!(matches!(events.last(), Some(GameEvent::ScoresUpdated(_))));
}

#[tokio::test]
async fn test_occupied_square_is_rejected_and_retried() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let x = ScriptedPlayer::places(
        "Alice",
        &[Position::TopLeft, Position::TopCenter, Position::TopRight],
    );
    // Bob first tries the square Alice already holds.
    let o = ScriptedPlayer::places(
        "Bob",
        &[Position::TopLeft, Position::Center, Position::MiddleLeft],
    );
    let mut orchestrator = Orchestrator::new(Box::new(x), Box::new(o), tx);

    let result = orchestrator.run().await.unwrap();
    assert!(matches!(result, RoundResult::Finished(MoveOutcome::Won { mark: Mark::X, .. })));

    let rejected = drain(&mut rx)
        .into_iter()
        .filter(|e| matches!(e, GameEvent::MoveRejected { .. }))
        .count();
    assert_eq!(rejected, 1);
    assert_eq!(
        orchestrator.game().history(),
        &[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::TopRight
        ]
    );
}

#[tokio::test]
async fn test_restart_discards_game_without_recording() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let x = ScriptedPlayer::new(
        "Alice",
        [
            PlayerAction::Place(Position::Center),
            PlayerAction::Restart,
            PlayerAction::Place(Position::TopLeft),
        ],
    );
    let o = ScriptedPlayer::places("Bob", &[Position::TopLeft]);
    let mut orchestrator = Orchestrator::new(Box::new(x), Box::new(o), tx);

    let store = MemoryStore::new();
    let mut arena = Arena::open(store.clone()).unwrap();
    let finished = arena.play(&mut orchestrator, None).await.unwrap();

    // Alice restarts on her second turn, plays once more, then Bob runs out and quits.
    assert_eq!(finished, 0);
    assert_eq!(orchestrator.game().history(), &[Position::TopLeft]);
    assert_eq!(*store.load().unwrap().totals().games(), 0);
}

#[tokio::test]
async fn test_draw_is_recorded_against_ai() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let x = ScriptedPlayer::places(
        "You",
        &[
            Position::TopLeft,
            Position::TopRight,
            Position::MiddleLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ],
    );
    let mut o = ScriptedPlayer::places(
        "AI",
        &[
            Position::Center,
            Position::TopCenter,
            Position::MiddleRight,
            Position::BottomLeft,
        ],
    );
    o.is_ai = true;
    let mut orchestrator = Orchestrator::new(Box::new(x), Box::new(o), tx);
    assert_eq!(orchestrator.ai_mark(), Some(Mark::O));

    let store = MemoryStore::new();
    let mut arena = Arena::open(store.clone()).unwrap();
    arena.play(&mut orchestrator, Some(1)).await.unwrap();

    let board = store.load().unwrap();
    assert_eq!(*board.scores().tie(), 1);
    assert_eq!(*board.vs_ai().ties(), 1);
}

#[tokio::test]
async fn test_ai_self_play_records_totals_only() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let x = AiPlayer::seeded("AI X", Difficulty::Hard, Duration::ZERO, 10);
    let o = AiPlayer::seeded("AI O", Difficulty::Hard, Duration::ZERO, 20);
    let mut orchestrator = Orchestrator::new(Box::new(x), Box::new(o), tx);
    assert_eq!(orchestrator.ai_mark(), None);

    let store = MemoryStore::new();
    let mut arena = Arena::open(store.clone()).unwrap();
    let finished = arena.play(&mut orchestrator, Some(20)).await.unwrap();

    let board = store.load().unwrap();
    assert_eq!(finished, 20);
    let totals = board.totals();
    assert_eq!(*totals.games(), 20);
    assert_eq!(totals.x_wins() + totals.o_wins() + totals.ties(), 20);
    assert_eq!(*board.vs_ai(), AiRecord::default());
}

#[tokio::test]
async fn test_in_game_reset_clears_scores_and_keeps_playing() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let x = ScriptedPlayer::new(
        "Alice",
        [
            PlayerAction::Place(Position::TopLeft),
            PlayerAction::Place(Position::TopCenter),
            PlayerAction::Place(Position::TopRight),
            PlayerAction::ResetScores,
            PlayerAction::Place(Position::Center),
        ],
    );
    let o = ScriptedPlayer::places("Bob", &[Position::Center, Position::MiddleLeft]);
    let mut orchestrator = Orchestrator::new(Box::new(x), Box::new(o), tx.clone());

    let store = MemoryStore::new();
    let mut arena = Arena::open(store.clone()).unwrap().with_events(tx);
    let finished = arena.play(&mut orchestrator, None).await.unwrap();

    assert_eq!(finished, 1);
    let board = store.load().unwrap();
    assert_eq!(*board.scores().x(), 0);
    assert_eq!(*board.totals().x_wins(), 1);
    assert_eq!(*board.totals().games(), 1);

    // The game after the reset starts from an empty board.
    assert_eq!(orchestrator.game().history(), &[Position::Center]);

    let updates: Vec<_> = drain(&mut rx)
        .into_iter()
        .filter_map(|e| match e {
            GameEvent::ScoresUpdated(board) => Some(*board.scores().x()),
            _ => None,
        })
        .collect();
    assert_eq!(updates, vec![1, 0]);
}

#[tokio::test]
async fn test_reset_scores_keeps_totals() {
    let store = MemoryStore::new();
    let mut arena = Arena::open(store.clone()).unwrap();
    arena.record(&MoveOutcome::Draw, None).unwrap();
    arena.reset_scores().unwrap();

    let board = store.load().unwrap();
    assert_eq!(*board.scores().tie(), 0);
    assert_eq!(*board.totals().ties(), 1);
}
