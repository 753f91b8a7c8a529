use crate::code::Symbol;
use crate::error::ConfigError;

pub const DEFAULT_CODE_LENGTH: usize = 4;
pub const DEFAULT_ALPHABET_SIZE: Symbol = 6;
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Parameters fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    code_length: usize,
    alphabet_size: Symbol,
    max_attempts: usize,
}

impl SessionConfig {
    pub fn new(
        code_length: usize,
        alphabet_size: Symbol,
        max_attempts: usize,
    ) -> Result<Self, ConfigError> {
        if code_length == 0 {
            return Err(ConfigError::ZeroLength);
        }
        if alphabet_size == 0 {
            return Err(ConfigError::ZeroAlphabet);
        }
        if max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(Self {
            code_length,
            alphabet_size,
            max_attempts,
        })
    }

    #[must_use]
    pub fn code_length(&self) -> usize {
        self.code_length
    }

    #[must_use]
    pub fn alphabet_size(&self) -> Symbol {
        self.alphabet_size
    }

    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Number of distinct codes, `K^N`, or `None` if it overflows `usize`.
    #[must_use]
    pub fn search_space(&self) -> Option<usize> {
        let exp = u32::try_from(self.code_length).ok()?;
        usize::from(self.alphabet_size).checked_pow(exp)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            alphabet_size: DEFAULT_ALPHABET_SIZE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}
