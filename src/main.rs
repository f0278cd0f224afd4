//! Headless playout runner (default binary).
//!
//! Plays seeded random games against the rules engine and prints a summary
//! per game - a quick way to exercise every engine path end to end without
//! a UI. Usage: `blockfall [seed] [games]`.

use anyhow::{Context, Result};
use tracing::info;

use blockfall::core::{
    is_valid_placement, place_shape, Board, ShapeGenerator, ShapeQueue, SimpleRng,
};
use blockfall::engine::{
    check_game_over, dispatch_cues, perform_line_clearing, EngineConfig, RecordingCuePlayer,
};
use blockfall::types::{GameMode, BOARD_SIZE, SHAPE_DIM};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let seed: u32 = match args.next() {
        Some(raw) => raw.parse().context("seed must be a u32")?,
        None => 1,
    };
    let games: u32 = match args.next() {
        Some(raw) => raw.parse().context("game count must be a u32")?,
        None => 1,
    };

    for game in 0..games {
        let summary = play_one(seed.wrapping_add(game));
        println!(
            "game {:>3}  seed {:>10}  turns {:>4}  score {:>7}  clears {:>3}  full-board {}",
            game, summary.seed, summary.turns, summary.score, summary.clears, summary.full_boards
        );
    }

    Ok(())
}

struct PlayoutSummary {
    seed: u32,
    turns: u32,
    score: u32,
    clears: u32,
    full_boards: u32,
}

/// Play one capped game with a greedy first-fit policy
fn play_one(seed: u32) -> PlayoutSummary {
    let config = EngineConfig::default();
    let mut rng = SimpleRng::new(seed);
    let mut queue = ShapeQueue::new_infinite(1, ShapeGenerator::uniform(), &mut rng);
    let mut board = Board::new();
    let mut cues = RecordingCuePlayer::default();

    let mut score: u32 = 0;
    let mut turns = 0;
    let mut clears = 0;
    let mut full_boards = 0;
    // Treat each turn as one millisecond of host time; the engine only
    // cares that the base timestamp is monotonic.
    let mut now_ms: u64 = 0;

    // A greedy infinite-mode game can go on indefinitely; cap the playout.
    while turns < 5_000 {
        // Spend score on queue slots as they become affordable.
        for slot in 1..queue.slots().len() {
            if let Ok(cost) = queue.purchase_slot(slot, score, &mut rng) {
                score -= cost;
                info!(slot, cost, "unlocked queue slot");
            }
        }

        let shapes = queue.visible_shapes();
        let rotation_locks = vec![false; shapes.len()];
        if check_game_over(&board, &shapes, &rotation_locks, GameMode::Classic) {
            break;
        }

        let Some((slot, row, col)) = first_fit(&board, &queue) else {
            break;
        };
        let shape = queue
            .consume_shape(slot, &mut rng)
            .expect("first_fit picked an active slot");
        board = place_shape(&shape, row, col, &board, GameMode::Classic)
            .expect("first_fit picked a valid placement");

        let outcome = perform_line_clearing(&board, now_ms, &config);
        if outcome.result.cleared_any() {
            clears += 1;
            dispatch_cues(&outcome.timeline, &mut cues);
            now_ms = outcome.timeline.end_ms();
        }
        if outcome.result.full_board_clear {
            full_boards += 1;
        }
        score += outcome.result.points;
        board = outcome.result.board;

        turns += 1;
        now_ms += 1;
    }

    info!(
        seed,
        turns,
        score,
        cues = cues.events.len(),
        "playout finished"
    );
    PlayoutSummary {
        seed,
        turns,
        score,
        clears,
        full_boards,
    }
}

/// First slot/position where any visible shape fits
fn first_fit(board: &Board, queue: &ShapeQueue) -> Option<(usize, i8, i8)> {
    let min = -(SHAPE_DIM as i8 - 1);
    let max = BOARD_SIZE as i8;
    for slot in 0..queue.slots().len() {
        let Some(shape) = queue.shape_at(slot) else {
            continue;
        };
        for row in min..max {
            for col in min..max {
                if is_valid_placement(shape, row, col, board, GameMode::Classic) {
                    return Some((slot, row, col));
                }
            }
        }
    }
    None
}
