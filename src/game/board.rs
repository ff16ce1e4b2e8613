//! Board engine: turn enforcement, move validation, and win detection for a
//! single match. Pure state machine, no I/O; the match registry drives it.

use std::fmt;

use crate::config::game::{BOARD_COLS, BOARD_ROWS, WIN_SEQUENCE_LEN};
use crate::game::types::{BoardGrid, Player};

/// One game of tic-tac-toe. Starts empty with `Player::One` to move.
#[derive(Debug, Clone)]
pub struct Board {
    grid: BoardGrid,
    current_turn: Player,
    winner: Option<Player>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            grid: [[None; BOARD_COLS]; BOARD_ROWS],
            current_turn: Player::One,
            winner: None,
        }
    }

    pub fn is_player_turn(&self, player: Player) -> bool {
        self.current_turn == player
    }

    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Independent copy of the board contents. Mutating the returned grid has
    /// no effect on subsequent reads.
    pub fn board_state(&self) -> BoardGrid {
        self.grid
    }

    /// Attempt to place `player`'s mark at (row, col).
    ///
    /// Returns false without mutating anything when the game is already
    /// decided, it is not `player`'s turn, the coordinates are out of range,
    /// or the cell is occupied. Otherwise writes the mark, runs win detection
    /// for the mover, and flips the turn. The turn flips even on a winning
    /// move; that is inert because no further move is accepted once a winner
    /// is set.
    pub fn attempt_move(&mut self, player: Player, row: i32, col: i32) -> bool {
        if self.has_winner() {
            return false;
        }

        if !self.is_player_turn(player) {
            return false;
        }

        let (row, col) = match Self::cell_index(row, col) {
            Some(index) => index,
            None => return false,
        };

        if self.grid[row][col].is_some() {
            return false;
        }

        self.grid[row][col] = Some(player);

        // A move can only complete the mover's own line, so winner stays
        // monotonic without an explicit guard.
        if self.player_has_won(player) {
            self.winner = Some(player);
        }

        self.current_turn = self.current_turn.opponent();

        true
    }

    fn cell_index(row: i32, col: i32) -> Option<(usize, usize)> {
        if row < 0 || row as usize >= BOARD_ROWS {
            return None;
        }
        if col < 0 || col as usize >= BOARD_COLS {
            return None;
        }
        Some((row as usize, col as usize))
    }

    /// Scans each row, each column, and both diagonals, counting consecutive
    /// cells holding `player`'s mark from the start of the line. Only a run of
    /// the full winning length counts.
    fn player_has_won(&self, player: Player) -> bool {
        let target = Some(player);

        for row in 0..BOARD_ROWS {
            let run = (0..BOARD_COLS)
                .take_while(|&col| self.grid[row][col] == target)
                .count();
            if run >= WIN_SEQUENCE_LEN {
                return true;
            }
        }

        for col in 0..BOARD_COLS {
            let run = (0..BOARD_ROWS)
                .take_while(|&row| self.grid[row][col] == target)
                .count();
            if run >= WIN_SEQUENCE_LEN {
                return true;
            }
        }

        let diagonal = (0..BOARD_ROWS)
            .take_while(|&i| self.grid[i][i] == target)
            .count();
        if diagonal >= WIN_SEQUENCE_LEN {
            return true;
        }

        let anti_diagonal = (0..BOARD_ROWS)
            .take_while(|&i| self.grid[i][BOARD_ROWS - i - 1] == target)
            .count();
        anti_diagonal >= WIN_SEQUENCE_LEN
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Renders the board for diagnostic logging, e.g. `|X| |O|`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.grid.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "|")?;
            for cell in row {
                let mark = cell.map_or(' ', Player::mark);
                write!(f, "{}|", mark)?;
            }
        }
        Ok(())
    }
}
