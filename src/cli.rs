use crate::code::{Code, Symbol};
use crate::config::{
    DEFAULT_ALPHABET_SIZE, DEFAULT_CODE_LENGTH, DEFAULT_MAX_ATTEMPTS, SessionConfig,
};
use crate::error::{ConfigError, GameError};
use crate::game_state::{GameInterface, UserAction};
use crate::session::Attempt;
use crate::solver::Recommendation;
use clap::Parser;
use std::io::BufRead;

/// Code Breaker: guess the secret code from exact/partial feedback
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Number of symbols in the secret code
    #[arg(short = 'n', long = "length", default_value_t = DEFAULT_CODE_LENGTH)]
    pub code_length: usize,

    /// Number of distinct symbols (codes use 1..=K)
    #[arg(short = 'k', long = "colors", default_value_t = DEFAULT_ALPHABET_SIZE)]
    pub alphabet_size: Symbol,

    /// Guesses allowed per game
    #[arg(short = 'a', long = "max-attempts", default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Seed for secret generation, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not read or write the cached opening hint
    #[arg(long)]
    pub no_cache: bool,

    /// Print each new secret when a game starts
    #[arg(long)]
    pub show_secret: bool,
}

impl Cli {
    pub fn session_config(&self) -> Result<SessionConfig, ConfigError> {
        SessionConfig::new(self.code_length, self.alphabet_size, self.max_attempts)
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

/// Reads one trimmed line. `None` at end of input or on a read error.
fn read_line<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => None,
        Ok(_) => Some(input.trim().to_string()),
        Err(e) => {
            log::warn!("read_line() - failed to read input: {e}");
            None
        }
    }
}

/// Maps one line of player input to an action.
pub fn parse_action(input: &str) -> Result<UserAction, GameError> {
    match input.to_uppercase().as_str() {
        "EXIT" | "QUIT" => Ok(UserAction::Exit),
        "NEXT" | "R" => Ok(UserAction::NewGame),
        "HINT" => Ok(UserAction::Hint),
        "HISTORY" => Ok(UserAction::History),
        "REVEAL" => Ok(UserAction::Reveal),
        _ => Ok(UserAction::Guess(input.parse::<Code>()?)),
    }
}

pub fn display_intro(config: &SessionConfig) {
    println!(
        "Guess the {}-symbol code. Symbols are 1-{}, repeats allowed. You have {} attempts.",
        config.code_length(),
        config.alphabet_size(),
        config.max_attempts()
    );
    println!("Feedback: G = right symbol, right position; Y = right symbol, wrong position.");
}

pub fn display_attempt(index: usize, attempt: &Attempt, config: &SessionConfig) {
    println!(
        "{:>2}. {}  {}  ({})",
        index,
        attempt.guess(),
        attempt.feedback().pegs(config.code_length()),
        attempt.feedback()
    );
}

pub fn display_recommendation(recommendation: &Recommendation) {
    let category = if recommendation.is_candidate {
        "could be the secret"
    } else {
        "information-gathering"
    };
    println!(
        "Recommended guess: {} (expected pool size {:.2} of {} candidates) [{}]",
        recommendation.guess, recommendation.score, recommendation.remaining, category
    );
}

/// CLI implementation of the GameInterface trait
/// This struct wraps a BufRead reader and implements the game interface for CLI interaction
pub struct CliInterface<R: BufRead> {
    reader: R,
    show_secret: bool,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            show_secret: false,
        }
    }

    #[must_use]
    pub fn with_show_secret(mut self, show_secret: bool) -> Self {
        self.show_secret = show_secret;
        self
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_intro(&mut self, config: &SessionConfig) {
        display_intro(config);
    }

    fn display_session_start(&mut self, secret: &Code) {
        if self.show_secret {
            println!("Secret code (for testing): {secret}");
        }
    }

    fn read_action(&mut self) -> Option<UserAction> {
        println!(
            "\nEnter your guess (e.g. 1234), or 'hint', 'history', 'reveal', 'next', 'exit':"
        );
        let Some(input) = read_line(&mut self.reader) else {
            return Some(UserAction::Exit);
        };
        match parse_action(&input) {
            Ok(action) => Some(action),
            Err(e) => {
                println!("{e}");
                None
            }
        }
    }

    fn display_feedback(&mut self, attempt: &Attempt, remaining: usize, config: &SessionConfig) {
        println!(
            "{}  {}  ({})",
            attempt.guess(),
            attempt.feedback().pegs(config.code_length()),
            attempt.feedback()
        );
        println!("Attempts remaining: {remaining}");
    }

    fn display_error(&mut self, error: &GameError) {
        match error {
            GameError::InvalidInput(_) => println!("{error}"),
            GameError::SessionClosed { .. } => {
                println!("The game is over. Type 'next' to play again or 'exit' to quit.");
            }
        }
    }

    fn display_won(&mut self, attempts: usize) {
        let plural = if attempts == 1 { "" } else { "s" };
        println!("Congratulations! You broke the code in {attempts} attempt{plural}!");
        println!("Type 'next' to play again or 'exit' to quit.");
    }

    fn display_lost(&mut self, secret: &Code) {
        println!("Game over! The code was: {secret}");
        println!("Type 'next' to play again or 'exit' to quit.");
    }

    fn display_history(&mut self, attempts: &[Attempt], config: &SessionConfig) {
        if attempts.is_empty() {
            println!("No guesses yet.");
            return;
        }
        for (i, attempt) in attempts.iter().enumerate() {
            display_attempt(i + 1, attempt, config);
        }
    }

    fn display_secret(&mut self, secret: &Code) {
        println!("Secret code: {secret}");
    }

    fn display_recommendation(&mut self, recommendation: &Recommendation) {
        display_recommendation(recommendation);
    }

    fn display_hint_unavailable(&mut self) {
        println!("No hint available for this game.");
    }

    fn display_computing_message(&mut self) {
        println!("Computing a hint, please wait...");
    }

    fn display_new_game_message(&mut self) {
        println!("New game started.");
    }

    fn display_exit_message(&mut self) {
        println!("Exiting.");
    }
}
