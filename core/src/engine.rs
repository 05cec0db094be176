// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game orchestration: turn order, pass counting, histories, and scores

use serde::{Deserialize, Serialize};

use crate::board::{Board, Position};
use crate::capture;
use crate::rules::RuleValidator;
use crate::scoring::{self, FinalScore, Scores, KOMI};
use crate::{Color, Coord, GameError, MoveRecord};

/// A single Go game.
///
/// The engine is the sole owner of the board, the turn state, the capture
/// tallies, and both histories; every mutation goes through [`place_stone`],
/// [`pass_turn`], [`undo`], [`redo`], or [`reset`]. A rejected operation
/// leaves the whole engine exactly as it was. Multiple independent games are
/// multiple independent `GameEngine` values.
///
/// [`place_stone`]: GameEngine::place_stone
/// [`pass_turn`]: GameEngine::pass_turn
/// [`undo`]: GameEngine::undo
/// [`redo`]: GameEngine::redo
/// [`reset`]: GameEngine::reset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
    current_player: Color,
    /// Consecutive passes; two ends the game
    pass_count: u8,
    /// Stones captured by (Black, White)
    captures: (u16, u16),
    /// Accepted placements, oldest first
    move_history: Vec<MoveRecord>,
    /// Undone placements awaiting redo, next candidate last
    redo_stack: Vec<MoveRecord>,
    /// Post-capture snapshot of every accepted placement, for superko
    position_history: Vec<Position>,
}

impl GameEngine {
    /// Create a new game on an empty board. Black moves first.
    pub fn new(board_size: u8) -> Self {
        Self {
            board: Board::new(board_size),
            current_player: Color::Black,
            pass_count: 0,
            captures: (0, 0),
            move_history: Vec::new(),
            redo_stack: Vec::new(),
            position_history: Vec::new(),
        }
    }

    /// Place a stone for the current player.
    ///
    /// On success returns the captured coordinates (possibly empty), records
    /// the move, clears the redo stack, and hands the turn to the opponent.
    /// On failure nothing changes and the specific rejection is returned.
    pub fn place_stone(&mut self, coord: Coord) -> Result<Vec<Coord>, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }

        let captured = self.apply_placement(coord, self.current_player)?;
        // A new move invalidates any undone branch.
        self.redo_stack.clear();
        Ok(captured)
    }

    /// Validate and execute a placement for `color`, independent of whose
    /// turn it notionally is. Shared by `place_stone` and `redo`.
    fn apply_placement(&mut self, coord: Coord, color: Color) -> Result<Vec<Coord>, GameError> {
        let placement =
            RuleValidator::new(&self.board, &self.position_history).check_move(coord, color)?;

        self.board.place(coord, color);
        capture::apply_captures(&mut self.board, &placement.captured);

        let captured_count = placement.captured.len() as u16;
        match color {
            Color::Black => self.captures.0 += captured_count,
            Color::White => self.captures.1 += captured_count,
        }

        self.position_history.push(placement.position);
        self.move_history.push(MoveRecord {
            coord,
            color,
            captured: placement.captured.clone(),
        });

        self.current_player = color.opposite();
        self.pass_count = 0;

        tracing::debug!(
            "{:?} placed at {:?}, captured {}",
            color,
            coord,
            captured_count
        );
        Ok(placement.captured)
    }

    /// Pass the turn. Two consecutive passes end the game.
    ///
    /// A no-op once the game is over.
    pub fn pass_turn(&mut self) {
        if self.is_game_over() {
            return;
        }

        self.pass_count += 1;
        self.current_player = self.current_player.opposite();

        if self.is_game_over() {
            tracing::debug!("game over after two consecutive passes");
        }
    }

    /// Undo the most recent placement.
    ///
    /// Restores the captured stones, gives the capture credit back, returns
    /// the turn to the undone mover, and drops the newest entry from the
    /// repetition history. The undone move becomes available for [`redo`].
    ///
    /// The pass counter is untouched: undoing out of a finished game only
    /// reopens it if the caller also calls [`reset_pass_count`].
    ///
    /// [`redo`]: GameEngine::redo
    /// [`reset_pass_count`]: GameEngine::reset_pass_count
    pub fn undo(&mut self) -> Result<(), GameError> {
        let record = self.move_history.pop().ok_or(GameError::NoMoveToUndo)?;

        self.board.remove(record.coord);
        let opponent = record.color.opposite();
        for &c in &record.captured {
            self.board.place(c, opponent);
        }

        let captured_count = record.captured.len() as u16;
        match record.color {
            Color::Black => self.captures.0 -= captured_count,
            Color::White => self.captures.1 -= captured_count,
        }

        self.position_history.pop();
        self.current_player = record.color;
        self.redo_stack.push(record);
        Ok(())
    }

    /// Replay the most recently undone placement.
    ///
    /// The move goes back through the full validation and capture path, so
    /// captures are recomputed and the player after the redone move becomes
    /// current. If the position has changed in a way that makes the move
    /// illegal, nothing happens, the entry stays on the redo stack, and
    /// [`GameError::InvalidRedo`] is returned.
    pub fn redo(&mut self) -> Result<(), GameError> {
        let record = self
            .redo_stack
            .last()
            .cloned()
            .ok_or(GameError::NoMoveToRedo)?;

        match self.apply_placement(record.coord, record.color) {
            Ok(_) => {
                self.redo_stack.pop();
                Ok(())
            }
            Err(err) => {
                tracing::debug!("redo of {:?} rejected: {}", record.coord, err);
                Err(GameError::InvalidRedo)
            }
        }
    }

    /// Restore the construction state: empty board, Black to move, no
    /// passes, no captures, empty histories.
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_player = Color::Black;
        self.pass_count = 0;
        self.captures = (0, 0);
        self.move_history.clear();
        self.redo_stack.clear();
        self.position_history.clear();
    }

    /// Read-only view of the board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Hand the turn to a specific color.
    ///
    /// For external collaborators issuing forced placements, such as a
    /// handicap-stone dealer; normal play never needs it.
    pub fn set_current_player(&mut self, color: Color) {
        self.current_player = color;
    }

    /// True after two consecutive passes
    pub fn is_game_over(&self) -> bool {
        self.pass_count >= 2
    }

    /// Consecutive passes so far
    pub fn pass_count(&self) -> u8 {
        self.pass_count
    }

    /// Clear the consecutive-pass counter.
    ///
    /// Callers that undo out of a finished game use this to return it to
    /// play.
    pub fn reset_pass_count(&mut self) {
        self.pass_count = 0;
    }

    /// Stones captured by (Black, White)
    pub fn captures(&self) -> (u16, u16) {
        self.captures
    }

    /// Number of placements in the move history
    pub fn move_count(&self) -> usize {
        self.move_history.len()
    }

    /// Number of undone placements available for redo
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Live display score: captures plus current territory, no komi
    pub fn scores(&self) -> Scores {
        scoring::live_score(&self.board, self.captures)
    }

    /// End-of-game score with komi added to White
    pub fn final_scores(&self) -> FinalScore {
        scoring::final_score(&self.board, self.captures, KOMI)
    }
}
