use crate::code::{Code, Symbol};
use crate::error::InvalidInput;
use std::fmt;

/// Result of scoring one guess: symbols in the right position (`exact`) and
/// symbols present elsewhere in the secret (`partial`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    pub exact: usize,
    pub partial: usize,
}

impl Feedback {
    #[must_use]
    pub fn new(exact: usize, partial: usize) -> Self {
        Self { exact, partial }
    }

    /// True when every one of `code_length` positions matched.
    #[must_use]
    pub fn is_perfect(&self, code_length: usize) -> bool {
        self.exact == code_length
    }

    /// Peg row for a code of `code_length`: `G` per exact match, `Y` per
    /// partial match, `X` for the rest.
    #[must_use]
    pub fn pegs(&self, code_length: usize) -> String {
        let misses = code_length.saturating_sub(self.exact + self.partial);
        let mut pegs = String::with_capacity(code_length);
        pegs.extend(std::iter::repeat_n('G', self.exact));
        pegs.extend(std::iter::repeat_n('Y', self.partial));
        pegs.extend(std::iter::repeat_n('X', misses));
        pegs
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} exact, {} partial", self.exact, self.partial)
    }
}

/// Scores `guess` against `secret`.
///
/// Exact matches are taken out first; partial matches are then counted
/// against what is left of the secret, one secret occurrence per match.
pub fn score(secret: &Code, guess: &Code) -> Result<Feedback, InvalidInput> {
    if secret.len() != guess.len() {
        return Err(InvalidInput::WrongLength {
            expected: secret.len(),
            actual: guess.len(),
        });
    }
    Ok(tally(secret.symbols(), guess.symbols()))
}

/// Two-pass scoring over equal-length slices.
pub(crate) fn tally(secret: &[Symbol], guess: &[Symbol]) -> Feedback {
    debug_assert_eq!(secret.len(), guess.len());
    let mut pool: Vec<Option<Symbol>> = secret.iter().copied().map(Some).collect();
    let mut matched = vec![false; guess.len()];
    let mut exact = 0;

    // First pass: exact positions
    for (i, (&g, &s)) in guess.iter().zip(secret).enumerate() {
        if g == s {
            exact += 1;
            pool[i] = None;
            matched[i] = true;
        }
    }

    // Second pass: remaining symbols anywhere in what is left of the secret
    let mut partial = 0;
    for (i, &g) in guess.iter().enumerate() {
        if matched[i] {
            continue;
        }
        if let Some(pos) = pool.iter().position(|&s| s == Some(g)) {
            partial += 1;
            pool[pos] = None;
        }
    }

    Feedback { exact, partial }
}
