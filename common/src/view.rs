//! Render-ready values derived from the engine state.

use serde::Serialize;
use std::fmt;

use crate::board::{Location, Player};

/// What the status line shows for the viewed snapshot
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Draw,
    Win(Player),
    NextTurn(Player),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Draw => write!(f, "Draw: You are both LOOOSERS!"),
            Status::Win(player) => write!(f, "Winning: {player}"),
            Status::NextTurn(player) => write!(f, "Next player: {player}"),
        }
    }
}

/// One entry of the move list.
///
/// `display_index` is the position in the rendered list, `jump_target` is the
/// history index the entry refers to. They only coincide in ascending order.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct HistoryLabel {
    pub display_index: usize,
    pub jump_target: usize,
    pub text: String,
    pub location: Option<Location>,
    pub is_current: bool,
}

impl HistoryLabel {
    pub(crate) fn new(
        display_index: usize,
        jump_target: usize,
        location: Location,
        current_step: usize,
    ) -> Self {
        let (text, location) = if jump_target == 0 {
            ("Go to game start".to_string(), None)
        } else {
            (format!("Go to move #{jump_target}"), Some(location))
        };
        Self {
            display_index,
            jump_target,
            text,
            location,
            is_current: jump_target == current_step,
        }
    }

    /// `"Location: (r,c)"`, empty for the game start entry
    pub fn location_text(&self) -> String {
        self.location
            .map(|location| format!("Location: {location}"))
            .unwrap_or_default()
    }
}

/// Caption for the control that flips the list order
pub fn sort_caption(order_ascending: bool) -> &'static str {
    if order_ascending {
        "Sort Descending"
    } else {
        "Sort Ascending"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(Status::Draw.to_string(), "Draw: You are both LOOOSERS!");
        assert_eq!(Status::Win(Player::O).to_string(), "Winning: O");
        assert_eq!(Status::NextTurn(Player::X).to_string(), "Next player: X");
    }

    #[test]
    fn test_game_start_label_has_no_location() {
        let label = HistoryLabel::new(3, 0, Location { row: 0, col: 0 }, 2);
        assert_eq!(label.text, "Go to game start");
        assert_eq!(label.location, None);
        assert_eq!(label.location_text(), "");
        assert!(!label.is_current);
    }

    #[test]
    fn test_move_label() {
        let label = HistoryLabel::new(0, 2, Location { row: 2, col: 1 }, 2);
        assert_eq!(label.text, "Go to move #2");
        assert_eq!(label.location_text(), "Location: (2,1)");
        assert!(label.is_current);
    }

    #[test]
    fn test_sort_caption() {
        assert_eq!(sort_caption(true), "Sort Descending");
        assert_eq!(sort_caption(false), "Sort Ascending");
    }
}
