/// Game configuration constants.
///
/// The board is a fixed 3x3 grid; three consecutive marks win.
pub const BOARD_ROWS: usize = 3;

/// Number of columns in the game board.
pub const BOARD_COLS: usize = 3;

/// Number of consecutive marks required to win.
pub const WIN_SEQUENCE_LEN: usize = 3;
