//! Shared helpers for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};
use werewolf_engine::{GameConfig, GameState, PlayerId, Shuffle};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize test logging once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, defaulting to `warn`.
pub fn init_tracing() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Leaves seats in join order, so roles follow the dealing order exactly.
pub struct NoShuffle;

impl Shuffle for NoShuffle {
    fn shuffle<T>(&mut self, _items: &mut [T]) {}
}

pub fn pid(id: u64) -> PlayerId {
    PlayerId::new(id)
}

/// A game with players `1..=seats` joined, still recruiting.
pub fn lobby(seats: u64) -> GameState {
    let mut game = GameState::new(pid(1000), GameConfig::new(), 42).unwrap();
    for id in 1..=seats {
        game.join(pid(id)).unwrap();
    }
    game
}

/// A started game dealt without shuffling.
///
/// With six seats: 1 Werewolf, 2 Seer, 3 Guard, 4-6 Villager.
pub fn started(seats: u64) -> GameState {
    let mut game = lobby(seats);
    game.start_with(&mut NoShuffle).unwrap();
    game
}
