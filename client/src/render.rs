use colored::*;
use tris_common::{view::sort_caption, Board, Cell, GameEngine, Player, Status, BOARD_SIDE};

fn symbol(cell: Cell, index: usize, highlighted: bool) -> ColoredString {
    match cell.player() {
        Some(player) if highlighted => player.to_string().black().on_green().bold(),
        Some(Player::X) => "X".bright_cyan().bold(),
        Some(Player::O) => "O".bright_magenta().bold(),
        None => (index + 1).to_string().dimmed(),
    }
}

/// Board with free squares numbered 1-9 and the winning line highlighted
pub fn board(board: &Board, winning_line: Option<[usize; 3]>) -> String {
    let is_winning = |index: usize| winning_line.is_some_and(|line| line.contains(&index));

    board
        .cells()
        .chunks(BOARD_SIDE)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, &cell)| {
                    let index = row * BOARD_SIDE + col;
                    format!(" {} ", symbol(cell, index, is_winning(index)))
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}

pub fn status(status: Status) -> ColoredString {
    let text = status.to_string();
    match status {
        Status::Draw => text.yellow().bold(),
        Status::Win(_) => text.green().bold(),
        Status::NextTurn(_) => text.normal(),
    }
}

/// Move list in the engine's display order, one line per entry
pub fn move_list(engine: &GameEngine) -> String {
    engine
        .history_labels()
        .iter()
        .map(|label| {
            let marker = if label.is_current { ">" } else { " " };
            let entry = format!("{marker} [{}] {}", label.jump_target, label.text);
            let entry = if label.is_current { entry.bold() } else { entry.normal() };
            match label.location {
                Some(_) => format!("{entry} {}", label.location_text().dimmed()),
                None => entry.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Everything that goes on screen for one frame
pub fn frame(engine: &GameEngine) -> String {
    format!(
        "{}\n\n{}\n\n{} {}\n{}",
        board(&engine.current_board(), engine.winning_line()),
        status(engine.status()),
        "Moves".underline(),
        format!("(s: {})", sort_caption(engine.order_ascending())).dimmed(),
        move_list(engine),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_empty_board_shows_numbers() {
        plain();
        let rendered = board(&Board::new(), None);
        assert_eq!(
            rendered,
            " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 "
        );
    }

    #[test]
    fn test_board_shows_symbols() {
        plain();
        let mut engine = GameEngine::new();
        engine.apply_move(0);
        engine.apply_move(4);

        let rendered = board(&engine.current_board(), engine.winning_line());
        assert!(rendered.starts_with(" X | 2 | 3 \n"));
        assert!(rendered.contains(" 4 | O | 6 "));
    }

    #[test]
    fn test_move_list_descending() {
        plain();
        let mut engine = GameEngine::new();
        engine.apply_move(7);
        engine.toggle_order();

        assert_eq!(
            move_list(&engine),
            "> [1] Go to move #1 Location: (2,1)\n  [0] Go to game start"
        );
    }

    #[test]
    fn test_frame_contains_status_and_caption() {
        plain();
        let mut engine = GameEngine::new();
        for cell in [0, 3, 1, 4, 2] {
            engine.apply_move(cell);
        }

        let rendered = frame(&engine);
        assert!(rendered.contains("Winning: X"));
        assert!(rendered.contains("(s: Sort Descending)"));
        assert!(rendered.contains("> [5] Go to move #5 Location: (0,2)"));
    }
}
