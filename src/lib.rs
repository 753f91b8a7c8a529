// Library interface for code-breaker
// The binary and the integration tests both go through this crate root

pub mod cache;
pub mod cli;
pub mod code;
pub mod config;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod scorer;
pub mod session;
pub mod solver;

// Re-export commonly used items for easier testing
pub use code::{Code, Symbol, generate};
pub use config::SessionConfig;
pub use error::{ConfigError, GameError, InvalidInput};
pub use game_state::{GameInterface, LoopSummary, UserAction, game_loop};
pub use scorer::{Feedback, score};
pub use session::{Attempt, Session, Status};
pub use solver::{Recommendation, best_information_guess, filter_candidates, recommend};
