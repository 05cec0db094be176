//! Territory attribution and score computation

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::{Color, Coord};

/// Komi compensation added to White's final score
pub const KOMI: f32 = 6.5;

/// Territory totals per color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territories {
    pub black: u16,
    pub white: u16,
}

/// Live score for display: captures plus current territory, no komi
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub black: u16,
    pub white: u16,
}

/// End-of-game totals with komi applied to White
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinalScore {
    pub black: f32,
    pub white: f32,
    pub captures_black: u16,
    pub captures_white: u16,
    pub komi: f32,
}

/// Attribute each maximal empty region to the one color enclosing it.
///
/// A region bordered by exactly one color counts whole toward that color; a
/// region bordered by both colors, or by none (an empty board), is neutral.
/// Every empty cell is visited exactly once across the scan.
pub fn territories(board: &Board) -> Territories {
    let mut terr_b = 0u16;
    let mut terr_w = 0u16;
    let mut seen = HashSet::<Coord>::new();

    for y in 0..board.size() {
        for x in 0..board.size() {
            let c = Coord::new(x, y);
            if board.get(c).is_some() || seen.contains(&c) {
                continue;
            }

            let (region, borders) = region_and_borders(board, c, &mut seen);
            if borders.len() == 1 {
                match borders.into_iter().next() {
                    Some(Color::Black) => terr_b += region.len() as u16,
                    Some(Color::White) => terr_w += region.len() as u16,
                    None => {}
                }
            }
        }
    }

    Territories {
        black: terr_b,
        white: terr_w,
    }
}

/// Live display score: capture tally plus current territory, per color.
pub fn live_score(board: &Board, captures: (u16, u16)) -> Scores {
    let terr = territories(board);
    Scores {
        black: captures.0 + terr.black,
        white: captures.1 + terr.white,
    }
}

/// Final score with komi added to White only.
pub fn final_score(board: &Board, captures: (u16, u16), komi: f32) -> FinalScore {
    let terr = territories(board);
    FinalScore {
        black: captures.0 as f32 + terr.black as f32,
        white: captures.1 as f32 + terr.white as f32 + komi,
        captures_black: captures.0,
        captures_white: captures.1,
        komi,
    }
}

/// BFS over empty cells; returns (region coords, bordering stone colours)
fn region_and_borders(
    board: &Board,
    start: Coord,
    global_seen: &mut HashSet<Coord>,
) -> (Vec<Coord>, HashSet<Color>) {
    let mut q = VecDeque::from([start]);
    let mut region = vec![start];
    let mut borders = HashSet::<Color>::new();
    global_seen.insert(start);

    while let Some(c) = q.pop_front() {
        for n in board.adjacent_coords(c) {
            match board.get(n) {
                Some(col) => {
                    borders.insert(col);
                }
                None => {
                    if global_seen.insert(n) {
                        region.push(n);
                        q.push_back(n);
                    }
                }
            }
        }
    }

    (region, borders)
}
