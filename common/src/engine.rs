use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{evaluate, is_draw, Board, Location, Player, Winner};
use crate::error::EngineError;
use crate::history::{History, Move};
use crate::view::{HistoryLabel, Status};

/// Tic-tac-toe game with a browsable history of snapshots.
///
/// The engine stores only the history, the viewed step and the list order.
/// Winner, draw and turn are derived from the viewed snapshot on every call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "Transcript")]
pub struct GameEngine {
    history: History,
    current_step: usize,
    order_ascending: bool,
}

/// Unchecked shape of a saved game; only becomes an engine through `TryFrom`
#[derive(Deserialize)]
struct Transcript {
    history: Vec<Move>,
    current_step: usize,
    order_ascending: bool,
}

impl TryFrom<Transcript> for GameEngine {
    type Error = EngineError;

    fn try_from(transcript: Transcript) -> Result<Self, Self::Error> {
        let history = History::from_moves(transcript.history)?;
        let len = history.len();
        if transcript.current_step >= len {
            return Err(EngineError::StepOutOfRange {
                step: transcript.current_step,
                len,
            });
        }
        Ok(Self {
            history,
            current_step: transcript.current_step,
            order_ascending: transcript.order_ascending,
        })
    }
}

impl GameEngine {
    /// Create a new game with empty board, X to start
    pub fn new() -> Self {
        Self::with_order(true)
    }

    pub fn with_order(order_ascending: bool) -> Self {
        Self {
            history: History::new(),
            current_step: 0,
            order_ascending,
        }
    }

    /// Place the next symbol on `cell_index`.
    ///
    /// Ignored when the viewed board already has a winner, the cell is taken or
    /// the index is off the board. Any snapshots after the viewed step are
    /// discarded before the new one is appended.
    ///
    /// # Returns
    /// * `true` - a symbol was placed
    /// * `false` - the click was ignored and nothing changed
    pub fn apply_move(&mut self, cell_index: usize) -> bool {
        let current = self.current_board();

        if let Some(winner) = evaluate(&current) {
            debug!(cell_index, winner = %winner.player, "move ignored, game already won");
            return false;
        }

        let Some(location) = Location::from_index(cell_index) else {
            debug!(cell_index, "move ignored, index off the board");
            return false;
        };

        let player = self.player_to_move();
        let Some(squares) = current.with_placed(cell_index, player) else {
            debug!(cell_index, "move ignored, cell already occupied");
            return false;
        };

        let dropped = self.history.last_step() - self.current_step;
        let next = Move { squares, location };
        self.current_step = self.history.branch_from(self.current_step, next);
        info!(
            %player,
            %location,
            step = self.current_step,
            dropped,
            "move placed"
        );
        true
    }

    /// View the snapshot at `step`. History is kept intact.
    pub fn jump_to(&mut self, step: usize) -> Result<(), EngineError> {
        let len = self.history.len();
        if step >= len {
            return Err(EngineError::StepOutOfRange { step, len });
        }
        self.current_step = step;
        info!(step, "jumped");
        Ok(())
    }

    pub fn toggle_order(&mut self) {
        self.order_ascending = !self.order_ascending;
        debug!(order_ascending = self.order_ascending, "order toggled");
    }

    /// Start over with a single empty snapshot. The list order is kept.
    pub fn reset(&mut self) {
        *self = Self::with_order(self.order_ascending);
        info!("game reset");
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn order_ascending(&self) -> bool {
        self.order_ascending
    }

    pub fn current_board(&self) -> Board {
        self.history
            .get(self.current_step)
            .map(|m| m.squares)
            .unwrap_or_default()
    }

    /// Player to move at the viewed step, by ply parity
    pub fn player_to_move(&self) -> Player {
        Player::for_ply(self.current_step)
    }

    pub fn winner(&self) -> Option<Winner> {
        evaluate(&self.current_board())
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.winner().map(|w| w.line)
    }

    pub fn status(&self) -> Status {
        let board = self.current_board();
        if is_draw(&board) {
            Status::Draw
        } else if let Some(winner) = evaluate(&board) {
            Status::Win(winner.player)
        } else {
            Status::NextTurn(self.player_to_move())
        }
    }

    /// Move list in display order. Each entry jumps to its own history index
    /// regardless of where it is listed.
    pub fn history_labels(&self) -> Vec<HistoryLabel> {
        let mut entries: Vec<(usize, &Move)> = self.history.iter().enumerate().collect();
        if !self.order_ascending {
            entries.reverse();
        }

        entries
            .into_iter()
            .enumerate()
            .map(|(display_index, (step, m))| {
                HistoryLabel::new(display_index, step, m.location, self.current_step)
            })
            .collect()
    }

    /// JSON transcript of the whole game
    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a transcript written by `to_json`. Histories that could not come
    /// from real play are rejected.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
