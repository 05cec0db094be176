// SPDX-License-Identifier: MIT OR Apache-2.0

//! Goban Core - Go Rules Engine
//!
//! This crate provides the core game functionality including:
//! - Go board representation and manipulation
//! - Move legality checks (occupancy, suicide, positional superko)
//! - Capture resolution and per-player capture tallies
//! - Territory scoring and final scores with komi
//! - Undo/redo over the full move history
//!
//! The engine is a standalone library: rendering, input capture, and clocks
//! belong to the embedding application, which drives the engine through
//! [`engine::GameEngine`].

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod capture;
pub mod engine;
pub mod group;
pub mod rules;
pub mod scoring;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Player color in a Go game (Black or White)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Black player (traditionally goes first)
    Black,
    /// White player
    White,
}

impl Color {
    /// Returns the opposite color
    pub fn opposite(&self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// Board coordinate representing an intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// X coordinate (column)
    pub x: u8,
    /// Y coordinate (row)
    pub y: u8,
}

impl Coord {
    /// Create a new coordinate
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Check if coordinate is valid for a board of given size
    pub fn is_valid(&self, board_size: u8) -> bool {
        self.x < board_size && self.y < board_size
    }
}

/// A placement kept in move history.
///
/// Stores the literal set of stones removed when the move was played, which
/// is what makes the move exactly invertible: recomputing captures at undo
/// time could disagree if the board has changed shape since.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Where the stone was placed
    pub coord: Coord,
    /// Who placed it
    pub color: Color,
    /// Opponent stones removed as a consequence of this placement
    pub captured: Vec<Coord>,
}

/// Errors that can occur during game play
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The coordinate is outside the board
    #[error("Invalid coordinate")]
    InvalidCoordinate,

    /// The position is already occupied
    #[error("Position already occupied")]
    OccupiedPosition,

    /// The move violates the ko rule
    #[error("Move violates ko rule")]
    KoViolation,

    /// The move would result in self-capture (suicide)
    #[error("Move would result in self-capture")]
    SelfCapture,

    /// The game has ended; no further placements are accepted
    #[error("Game is already over")]
    GameOver,

    /// Move history is empty
    #[error("No move to undo")]
    NoMoveToUndo,

    /// Redo stack is empty
    #[error("No move to redo")]
    NoMoveToRedo,

    /// The pending redo is no longer a legal placement
    #[error("Redone move is no longer legal")]
    InvalidRedo,
}
