use crate::code::Symbol;
use crate::session::Status;
use thiserror::Error;

/// A guess (or secret) that cannot be scored against the current session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("expected {expected} symbols, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("symbol {symbol} at position {position} is outside 1..={alphabet_size}")]
    SymbolOutOfRange {
        symbol: Symbol,
        position: usize,
        alphabet_size: Symbol,
    },
    #[error("'{0}' is not a code")]
    Unparseable(String),
}

/// Errors returned by session operations.
///
/// Both kinds are recoverable: nothing in the session changes when one is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
    #[error("session is closed ({status})")]
    SessionClosed { status: Status },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("code length must be at least 1")]
    ZeroLength,
    #[error("alphabet size must be at least 1")]
    ZeroAlphabet,
    #[error("max attempts must be at least 1")]
    ZeroAttempts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_messages() {
        let err = InvalidInput::WrongLength {
            expected: 4,
            actual: 2,
        };
        assert_eq!(err.to_string(), "expected 4 symbols, got 2");

        let err = InvalidInput::SymbolOutOfRange {
            symbol: 7,
            position: 2,
            alphabet_size: 6,
        };
        assert_eq!(err.to_string(), "symbol 7 at position 2 is outside 1..=6");
    }

    #[test]
    fn test_game_error_wraps_invalid_input() {
        let err: GameError = InvalidInput::Unparseable("abc".to_string()).into();
        assert_eq!(err.to_string(), "invalid input: 'abc' is not a code");
    }

    #[test]
    fn test_session_closed_message() {
        let err = GameError::SessionClosed {
            status: Status::Lost,
        };
        assert_eq!(err.to_string(), "session is closed (lost)");
    }
}
