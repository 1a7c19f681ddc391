//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for checking move generation against published counts.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::board::Board;
use crate::game::Side;

/// Count the leaves `depth` plies below the starting position, Black to move.
///
/// A position where the side to move has no legal move is counted as a leaf,
/// so the counts match the published ones until the first forced pass (depth 9).
pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Board::new(), Side::Black, depth)
}

fn leaves_below(board: Board, side: Side, depth: u64) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let index = board.move_index(side);
    if index.is_empty() {
        return 1;
    }

    index
        .destinations()
        .into_iter()
        .map(|loc| {
            let mut next = board;
            match next.apply(&index, loc) {
                Ok(_) => leaves_below(next, !side, depth - 1),
                Err(_) => 0,
            }
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
