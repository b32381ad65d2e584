use anyhow::{Context, Result};
use colored::*;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::fs;
use std::path::Path;
use tracing::{info, warn};
use tris_common::GameEngine;

use crate::command::{Command, HELP};
use crate::config::Config;
use crate::render;
use crate::ui::{clear_screen, wait_for_keypress};

/// The one game a session drives, plus the session settings it needs
pub struct Session {
    pub engine: GameEngine,
    pub config: Config,
    pub message: Option<ColoredString>,
}

/// Whether the loop should keep reading input
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            engine: GameEngine::with_order(!config.start_descending),
            config,
            message: None,
        }
    }

    /// Apply one command to the game. Problems end up in `message` rather than
    /// aborting the session.
    pub fn handle(&mut self, command: Command) -> Flow {
        self.message = None;
        match command {
            Command::Place(index) => {
                if !self.engine.apply_move(index) {
                    self.message = Some("That square can't be played.".dimmed());
                }
            }
            Command::Jump(step) => {
                if let Err(e) = self.engine.jump_to(step) {
                    self.message = Some(e.to_string().red());
                }
            }
            Command::ToggleOrder => self.engine.toggle_order(),
            Command::NewGame => self.engine.reset(),
            Command::Save(path) => {
                let path = path.unwrap_or_else(|| self.config.transcript_path.clone().into());
                self.message = Some(match save_transcript(&self.engine, &path) {
                    Ok(()) => format!("✓ Transcript written to {}", path.display()).green(),
                    Err(e) => {
                        warn!(error = %e, "transcript not written");
                        format!("{e:#}").red()
                    }
                });
            }
            Command::Help => {}
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }
}

pub fn save_transcript(engine: &GameEngine, path: &Path) -> Result<()> {
    let json = engine.to_json()?;
    fs::write(path, json)
        .with_context(|| format!("failed to write transcript {}", path.display()))?;
    info!(path = %path.display(), steps = engine.history().len(), "transcript saved");
    Ok(())
}

fn show_help() -> std::io::Result<()> {
    clear_screen()?;
    println!("{}\n", "Commands".underline());
    for (keys, text) in HELP {
        println!("  {}  {}", format!("{keys:<9}").bright_yellow(), text);
    }
    println!("\n{}", "Press any key to return to the game...".dimmed());
    wait_for_keypress()
}

pub fn run(config: Config) -> Result<()> {
    let mut session = Session::new(config);
    let mut rl = DefaultEditor::new()?;
    info!("session started");

    loop {
        clear_screen()?;
        println!("{}\n", "Tic-Tac-Toe".bright_cyan().bold());
        println!("{}", render::frame(&session.engine));

        if let Some(msg) = &session.message {
            println!("\n{msg}");
        }

        let line = match rl.readline("\n> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };
        let _ = rl.add_history_entry(line.as_str());

        match Command::parse(&line) {
            Ok(Command::Help) => show_help()?,
            Ok(command) => {
                if session.handle(command) == Flow::Quit {
                    break;
                }
            }
            Err(msg) => session.message = Some(msg.red()),
        }
    }

    info!("session ended");
    println!("\n{}", "Goodbye!".cyan());
    Ok(())
}
