use std::path::PathBuf;

use tris_common::Location;

/// A single line of user input, parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Place(usize),
    Jump(usize),
    ToggleOrder,
    NewGame,
    Save(Option<PathBuf>),
    Help,
    Quit,
}

pub const HELP: &[(&str, &str)] = &[
    ("1-9", "place on a square, counted left to right, top to bottom"),
    ("row col", "place at a 0-indexed row and column, e.g. '1 2'"),
    ("j N", "jump to history entry N (0 is game start)"),
    ("s", "flip the move list order"),
    ("n", "start a new game"),
    ("w [path]", "write a JSON transcript of the game"),
    ("h", "show this help"),
    ("q", "quit"),
];

impl Command {
    pub fn parse(line: &str) -> Result<Command, String> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => Err("Empty input. Type 'h' for help.".to_string()),
            ["q" | "quit" | "exit"] => Ok(Command::Quit),
            ["h" | "help" | "?"] => Ok(Command::Help),
            ["s" | "sort"] => Ok(Command::ToggleOrder),
            ["n" | "new"] => Ok(Command::NewGame),
            ["w" | "save"] => Ok(Command::Save(None)),
            ["w" | "save", path] => Ok(Command::Save(Some(PathBuf::from(*path)))),
            ["j" | "jump", step] => step
                .parse::<usize>()
                .map(Command::Jump)
                .map_err(|_| format!("'{step}' is not a history entry number")),
            [square] => match square.parse::<usize>() {
                Ok(n @ 1..=9) => Ok(Command::Place(n - 1)),
                _ => Err(format!("'{square}' is not a square. Use 1-9 or 'row col'.")),
            },
            [row, col] => match (row.parse::<usize>(), col.parse::<usize>()) {
                (Ok(row), Ok(col)) => Location::coords_to_index(row, col)
                    .map(Command::Place)
                    .ok_or_else(|| format!("({row},{col}) is off the board")),
                _ => Err("Invalid input format. Use 'row col' (e.g., '1 2')".to_string()),
            },
            _ => Err("Unknown command. Type 'h' for help.".to_string()),
        }
    }
}
