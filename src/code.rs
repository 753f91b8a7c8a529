use crate::config::SessionConfig;
use crate::error::InvalidInput;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// One position of a code. Valid symbols are `1..=alphabet_size`.
pub type Symbol = u8;

/// An ordered sequence of symbols: the secret of a session or a guess against it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code(Vec<Symbol>);

impl Code {
    #[must_use]
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }

    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks length and symbol range against a session's configuration.
    pub fn validate(&self, config: &SessionConfig) -> Result<(), InvalidInput> {
        if self.len() != config.code_length() {
            return Err(InvalidInput::WrongLength {
                expected: config.code_length(),
                actual: self.len(),
            });
        }
        let alphabet_size = config.alphabet_size();
        match self
            .0
            .iter()
            .position(|&s| s == 0 || s > alphabet_size)
        {
            Some(position) => Err(InvalidInput::SymbolOutOfRange {
                symbol: self.0[position],
                position,
                alphabet_size,
            }),
            None => Ok(()),
        }
    }
}

impl From<Vec<Symbol>> for Code {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }
}

impl From<&[Symbol]> for Code {
    fn from(symbols: &[Symbol]) -> Self {
        Self(symbols.to_vec())
    }
}

impl FromIterator<Symbol> for Code {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let compact = self.0.iter().all(|&s| s < 10);
        for (i, symbol) in self.0.iter().enumerate() {
            if i > 0 && !compact {
                write!(f, " ")?;
            }
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// Accepts `1234` (single digits) or `1 2 3 4` / `10,2,3,4` (separated symbols).
impl FromStr for Code {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let unparseable = || InvalidInput::Unparseable(input.to_string());
        if input.is_empty() {
            return Err(unparseable());
        }

        let separated = input.chars().any(|c| c.is_whitespace() || c == ',');
        if separated {
            input
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|part| !part.is_empty())
                .map(|part| part.parse::<Symbol>().map_err(|_| unparseable()))
                .collect()
        } else {
            input
                .chars()
                .map(|c| {
                    c.to_digit(10)
                        .and_then(|d| Symbol::try_from(d).ok())
                        .ok_or_else(unparseable)
                })
                .collect()
        }
    }
}

/// Draws `length` symbols uniformly from `1..=alphabet_size`, with replacement.
///
/// An alphabet size of zero is treated as one.
pub fn generate<R: Rng>(length: usize, alphabet_size: Symbol, rng: &mut R) -> Code {
    let upper = alphabet_size.max(1);
    (0..length).map(|_| rng.gen_range(1..=upper)).collect()
}

/// Generates a secret sized for `config`.
pub fn generate_for<R: Rng>(config: &SessionConfig, rng: &mut R) -> Code {
    generate(config.code_length(), config.alphabet_size(), rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generate_length_and_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let code = generate(4, 6, &mut rng);
            assert_eq!(code.len(), 4);
            assert!(code.symbols().iter().all(|&s| (1..=6).contains(&s)));
        }
    }

    #[test]
    fn test_generate_is_deterministic_given_seed() {
        let a = generate(6, 8, &mut StdRng::seed_from_u64(7));
        let b = generate(6, 8, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_single_symbol_alphabet() {
        let code = generate(5, 1, &mut StdRng::seed_from_u64(1));
        assert_eq!(code, Code::from(vec![1, 1, 1, 1, 1]));
    }

    #[test]
    fn test_generate_allows_repeats() {
        let mut rng = StdRng::seed_from_u64(3);
        let has_repeat = (0..100).map(|_| generate(4, 6, &mut rng)).any(|code| {
            let s = code.symbols();
            (0..s.len()).any(|i| s[i + 1..].contains(&s[i]))
        });
        assert!(has_repeat);
    }

    #[test]
    fn test_parse_compact() {
        let code: Code = "1234".parse().unwrap();
        assert_eq!(code, Code::from(vec![1, 2, 3, 4]));
    }

    #[test]
    fn test_parse_separated() {
        let code: Code = " 1 2, 3,4 ".parse().unwrap();
        assert_eq!(code, Code::from(vec![1, 2, 3, 4]));
        let code: Code = "10,2,3,12".parse().unwrap();
        assert_eq!(code, Code::from(vec![10, 2, 3, 12]));
    }

    #[test]
    fn test_parse_rejects_text() {
        assert_eq!(
            "12a4".parse::<Code>(),
            Err(InvalidInput::Unparseable("12a4".to_string()))
        );
        assert!("".parse::<Code>().is_err());
        assert!("1 x 3".parse::<Code>().is_err());
        assert!("1 300".parse::<Code>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Code::from(vec![1, 2, 3, 4]).to_string(), "1234");
        assert_eq!(Code::from(vec![10, 2, 3]).to_string(), "10 2 3");
    }

    #[test]
    fn test_validate() {
        let config = SessionConfig::default();
        assert!(Code::from(vec![1, 6, 3, 4]).validate(&config).is_ok());
        assert_eq!(
            Code::from(vec![1, 2]).validate(&config),
            Err(InvalidInput::WrongLength {
                expected: 4,
                actual: 2
            })
        );
        assert_eq!(
            Code::from(vec![1, 2, 0, 4]).validate(&config),
            Err(InvalidInput::SymbolOutOfRange {
                symbol: 0,
                position: 2,
                alphabet_size: 6
            })
        );
        assert_eq!(
            Code::from(vec![1, 2, 3, 7]).validate(&config),
            Err(InvalidInput::SymbolOutOfRange {
                symbol: 7,
                position: 3,
                alphabet_size: 6
            })
        );
    }
}
