// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capture resolution for opponent groups left without liberties

use std::collections::HashSet;

use crate::board::Board;
use crate::group;
use crate::{Color, Coord};

/// Find every opponent stone captured by the placement at `last_move`.
///
/// Each adjacent opponent group is judged once, against the board exactly as
/// it stands after the placement. Removals are not interleaved with the
/// scan: removing one group cannot hand liberties back to another within the
/// same capture event. The result is sorted row-major so callers see a
/// stable order.
pub fn captures_for(board: &Board, last_move: Coord, mover: Color) -> Vec<Coord> {
    let opponent = mover.opposite();
    let mut doomed: HashSet<Coord> = HashSet::new();

    for neighbor in board.adjacent_coords(last_move) {
        if board.get(neighbor) != Some(opponent) || doomed.contains(&neighbor) {
            continue;
        }
        if let Some(group) = group::group_at(board, neighbor) {
            if group.liberties == 0 {
                doomed.extend(group.stones);
            }
        }
    }

    let mut captured: Vec<Coord> = doomed.into_iter().collect();
    captured.sort_unstable_by_key(|c| (c.y, c.x));
    captured
}

/// Remove captured stones from the board in one pass.
pub fn apply_captures(board: &mut Board, captured: &[Coord]) {
    for &coord in captured {
        board.remove(coord);
    }
}
