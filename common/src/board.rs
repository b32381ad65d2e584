use serde::{Deserialize, Serialize};
use std::fmt;

/// The two symbols that can be placed. `X` always opens the game.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Player whose turn it is after `ply` half-moves have been played
    pub fn for_ply(ply: usize) -> Self {
        if ply % 2 == 0 { Player::X } else { Player::O }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// State of a single square. Serializes as `null`, `"X"` or `"O"`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(from = "Option<Player>", into = "Option<Player>")]
pub enum Cell {
    #[default]
    Empty,
    Taken(Player),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Taken(player) => Some(*player),
        }
    }
}

impl From<Option<Player>> for Cell {
    fn from(value: Option<Player>) -> Self {
        value.map_or(Cell::Empty, Cell::Taken)
    }
}

impl From<Cell> for Option<Player> {
    fn from(value: Cell) -> Self {
        value.player()
    }
}

/// Row/column of a placed square, both 0-indexed
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    /// Convert a board index to its location
    pub fn from_index(index: usize) -> Option<Self> {
        if index < BOARD_CELLS {
            Some(Self {
                row: index / BOARD_SIDE,
                col: index % BOARD_SIDE,
            })
        } else {
            None
        }
    }

    /// Convert row and column (0-indexed) to board index
    pub fn coords_to_index(row: usize, col: usize) -> Option<usize> {
        if row < BOARD_SIDE && col < BOARD_SIDE {
            Some(row * BOARD_SIDE + col)
        } else {
            None
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

pub const BOARD_SIDE: usize = 3;
pub const BOARD_CELLS: usize = BOARD_SIDE * BOARD_SIDE;

/// Winning combinations, checked in this order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // columns
    [0, 4, 8], [2, 4, 6],            // diagonals
];

/// A completed line and the player who owns it
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Winner {
    pub player: Player,
    pub line: [usize; 3],
}

/// The 3x3 board as a flat array of 9 cells
/// Index mapping: [0,1,2,3,4,5,6,7,8]
/// Visual layout:
/// ```text
/// 0 | 1 | 2
/// ---------
/// 3 | 4 | 5
/// ---------
/// 6 | 7 | 8
/// ```
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns a copy of this board with `player` placed at `index`.
    /// The receiver is left untouched so stored snapshots never change.
    pub fn with_placed(&self, index: usize, player: Player) -> Option<Self> {
        match self.cells.get(index) {
            Some(Cell::Empty) => {
                let mut next = *self;
                next.cells[index] = Cell::Taken(player);
                Some(next)
            }
            _ => None,
        }
    }

    /// Check if the board is full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }
}

/// First winning triple on the board, if any
pub fn evaluate(board: &Board) -> Option<Winner> {
    let cells = board.cells();
    WINNING_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match cells[a] {
            Cell::Taken(player) if cells[a] == cells[b] && cells[b] == cells[c] => {
                Some(Winner { player, line })
            }
            _ => None,
        }
    })
}

/// Full board without a winner. A full board that contains a line is a win, not a draw.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && evaluate(board).is_none()
}
