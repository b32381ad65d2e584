use serde::{Deserialize, Serialize};

use crate::board::{evaluate, Board, Cell, Location, Player};
use crate::error::EngineError;

/// One snapshot in the game: the board after a placement and where it happened.
/// The opening snapshot carries the default location, which is never shown.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub squares: Board,
    pub location: Location,
}

impl Move {
    pub fn opening() -> Self {
        Self {
            squares: Board::new(),
            location: Location::default(),
        }
    }
}

/// Ordered list of snapshots, always starting with the empty board
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct History {
    moves: Vec<Move>,
}

impl History {
    pub fn new() -> Self {
        Self { moves: vec![Move::opening()] }
    }

    /// Rebuild a history from stored snapshots, checking that it starts with
    /// the empty board and that every step adds exactly one symbol for the
    /// player whose turn it was.
    pub(crate) fn from_moves(moves: Vec<Move>) -> Result<Self, EngineError> {
        let invalid = EngineError::InvalidHistory;

        let first = moves
            .first()
            .ok_or_else(|| invalid("history is empty".to_string()))?;
        if first.squares != Board::new() {
            return Err(invalid("history does not start with an empty board".to_string()));
        }

        for (i, pair) in moves.windows(2).enumerate() {
            let step = i + 1;
            let (prev, next) = (&pair[0].squares, &pair[1].squares);
            if evaluate(prev).is_some() {
                return Err(invalid(format!("step {step} follows a finished game")));
            }

            let changed: Vec<usize> = (0..prev.cells().len())
                .filter(|&index| prev.get(index) != next.get(index))
                .collect();
            let &[index] = changed.as_slice() else {
                return Err(invalid(format!("step {step} changes {} squares", changed.len())));
            };

            let player = Player::for_ply(i);
            let placed = Cell::Taken(player);
            if prev.get(index) != Some(Cell::Empty) || next.get(index) != Some(placed) {
                let reason = format!("step {step} must place {player} on an empty square");
                return Err(invalid(reason));
            }
            if Location::from_index(index) != Some(pair[1].location) {
                return Err(invalid(format!("step {step} has the wrong location")));
            }
        }

        Ok(Self { moves })
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Never true; a history always holds the opening snapshot.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn get(&self, step: usize) -> Option<&Move> {
        self.moves.get(step)
    }

    pub fn last_step(&self) -> usize {
        self.moves.len() - 1
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Move> + ExactSizeIterator {
        self.moves.iter()
    }

    /// Drop every snapshot after `step`, then append `next`.
    /// Returns the index of the appended snapshot.
    pub fn branch_from(&mut self, step: usize, next: Move) -> usize {
        self.moves.truncate(step + 1);
        self.moves.push(next);
        self.last_step()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
