// SPDX-License-Identifier: MIT OR Apache-2.0

//! Move legality: occupancy, suicide, and positional repetition (superko)

use crate::board::{Board, Position};
use crate::capture;
use crate::group;
use crate::{Color, Coord, GameError};

/// Validates placements against the suicide and superko rules.
///
/// All provisional work happens on a scratch copy of the board; the real
/// board is never touched on any path, so a rejected move cannot leak
/// partial state.
pub struct RuleValidator<'a> {
    /// The board being checked
    board: &'a Board,
    /// Every position reached so far, newest last, for repetition checks
    history: &'a [Position],
}

/// Outcome of a successful validation: the stones that will come off and
/// the position the board will be in once they have.
#[derive(Debug, Clone)]
pub struct ValidPlacement {
    /// Opponent stones captured by the placement, row-major order
    pub captured: Vec<Coord>,
    /// Post-capture snapshot, ready for the repetition history
    pub position: Position,
}

impl<'a> RuleValidator<'a> {
    /// Create a new rules validator
    pub fn new(board: &'a Board, history: &'a [Position]) -> Self {
        Self { board, history }
    }

    /// Check a placement of `color` at `coord`.
    ///
    /// A placement is suicide when the placed group ends with zero liberties
    /// and no adjacent opponent group is left without liberties by it. It is
    /// a ko violation when the board position after captures matches any
    /// position reached earlier in the game.
    pub fn check_move(&self, coord: Coord, color: Color) -> Result<ValidPlacement, GameError> {
        if !coord.is_valid(self.board.size()) {
            return Err(GameError::InvalidCoordinate);
        }
        if self.board.get(coord).is_some() {
            return Err(GameError::OccupiedPosition);
        }

        let mut scratch = self.board.clone();
        scratch.place(coord, color);

        // Opponent groups are judged on the as-placed board, before any
        // removal.
        let captured = capture::captures_for(&scratch, coord, color);

        let own_liberties = group::group_at(&scratch, coord).map_or(0, |g| g.liberties);
        if own_liberties == 0 && captured.is_empty() {
            tracing::debug!("suicide rejected at {:?} for {:?}", coord, color);
            return Err(GameError::SelfCapture);
        }

        capture::apply_captures(&mut scratch, &captured);
        let position = scratch.snapshot();
        if self.history.contains(&position) {
            tracing::debug!("ko violation detected at {:?}", coord);
            return Err(GameError::KoViolation);
        }

        Ok(ValidPlacement { captured, position })
    }
}
