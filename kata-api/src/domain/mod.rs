pub mod memory_game;
pub mod models;
pub mod password;
pub mod stopwatch;
pub mod tip;

pub use memory_game::{MemoryCard, MemoryGameState, PickOutcome};
pub use password::{generate_password, PasswordError, PasswordOptions};
pub use stopwatch::{StopwatchAction, StopwatchState};
pub use tip::{split_bill, TipBreakdown, TipError};
