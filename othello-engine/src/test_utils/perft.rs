//! "Perft" move-generation test: count the positions reachable at a given depth.
//! See: http://www.aartbik.com/MISC/reversi.html
//!
//! [`Engine`] folds a forced pass into the move that caused it, so counts only
//! match the published table until passes appear (depth 9 and beyond).

use crate::Engine;

/// Count the leaves `depth` moves below the standard opening.
pub fn run_perft(depth: u64) -> u64 {
    leaves_below(&Engine::new(), depth)
}

/// Count the leaves `depth` moves below `engine`.
/// A position where the player to move has no legal move is a leaf.
pub fn leaves_below(engine: &Engine, depth: u64) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = engine.legal_moves();
    if moves.is_empty() {
        return 1;
    }

    moves
        .into_iter()
        .filter_map(|loc| {
            let mut child = engine.clone();
            child.play(loc).ok()?;
            Some(leaves_below(&child, depth - 1))
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}
