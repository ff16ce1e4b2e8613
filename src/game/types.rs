use serde::{Serialize, Deserialize};

use crate::config::game::{BOARD_COLS, BOARD_ROWS};

/// Logical role of a participant within a match. The first registrant plays
/// `One` (marks `X`) and moves first; the second plays `Two` (marks `O`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    #[serde(rename = "X")]
    One,
    #[serde(rename = "O")]
    Two,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Character used when rendering the board for diagnostics.
    pub fn mark(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

/// A single board cell: empty, or marked by a player.
pub type Cell = Option<Player>;

/// The full board contents. Serializes as a 3x3 array of `"X"`, `"O"` or null.
pub type BoardGrid = [[Cell; BOARD_COLS]; BOARD_ROWS];
