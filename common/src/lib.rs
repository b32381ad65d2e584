mod board;
mod engine;
mod error;
mod history;

pub mod view;

pub use board::*;
pub use engine::GameEngine;
pub use error::EngineError;
pub use history::{History, Move};
pub use view::{HistoryLabel, Status};
