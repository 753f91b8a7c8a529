//! A single code-breaking session.
//!
//! # State Machine
//! `InProgress` → `Won` on a perfect guess, `InProgress` → `Lost` when the
//! attempt bound is reached without one. Both terminal states are final.

use crate::code::{self, Code};
use crate::config::SessionConfig;
use crate::debug_log;
use crate::error::GameError;
use crate::scorer::{self, Feedback};
use rand::Rng;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(label)
    }
}

/// One scored guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    guess: Code,
    feedback: Feedback,
}

impl Attempt {
    #[must_use]
    pub fn guess(&self) -> &Code {
        &self.guess
    }

    #[must_use]
    pub fn feedback(&self) -> Feedback {
        self.feedback
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    secret: Code,
    attempts: Vec<Attempt>,
    status: Status,
}

impl Session {
    /// Starts a session with a freshly generated secret.
    pub fn new<R: Rng>(config: SessionConfig, rng: &mut R) -> Self {
        let secret = code::generate_for(&config, rng);
        debug_log!("Session::new() - secret generated: {}", secret);
        Self {
            config,
            secret,
            attempts: Vec::with_capacity(config.max_attempts()),
            status: Status::InProgress,
        }
    }

    /// Starts a session around a known secret.
    pub fn with_secret(config: SessionConfig, secret: Code) -> Result<Self, GameError> {
        secret.validate(&config)?;
        Ok(Self {
            config,
            secret,
            attempts: Vec::with_capacity(config.max_attempts()),
            status: Status::InProgress,
        })
    }

    /// Scores `guess`, records it and advances the status.
    ///
    /// Nothing changes when an error is returned.
    pub fn submit(&mut self, guess: Code) -> Result<Feedback, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::SessionClosed {
                status: self.status,
            });
        }
        guess.validate(&self.config)?;

        let feedback = scorer::score(&self.secret, &guess)?;
        debug_log!(
            "Session::submit() - attempt {}: {} -> {}",
            self.attempts.len() + 1,
            guess,
            feedback
        );
        self.attempts.push(Attempt { guess, feedback });

        if feedback.is_perfect(self.config.code_length()) {
            self.status = Status::Won;
        } else if self.attempts.len() >= self.config.max_attempts() {
            self.status = Status::Lost;
        }
        if self.status.is_terminal() {
            debug_log!("Session::submit() - session {}", self.status);
        }
        Ok(feedback)
    }

    #[must_use]
    pub fn reveal(&self) -> &Code {
        &self.secret
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.config.max_attempts() - self.attempts.len()
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}
