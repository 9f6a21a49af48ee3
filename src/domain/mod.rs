pub mod mapping;
pub mod models;
pub mod rank;

pub use mapping::build_current_game;
pub use models::{Civilization, CurrentGame, GameResult, ModeStats, Player};
pub use rank::derive_rank;
