use crate::code::{Code, Symbol};
use crate::config::SessionConfig;
use crate::scorer::{Feedback, tally};
use crate::session::Session;
use std::collections::HashMap;

/// Largest number of codes the hint search will enumerate.
pub const MAX_SEARCH_SPACE: usize = 4096;

/// A suggested next guess.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub guess: Code,
    /// Expected number of candidates left after playing `guess`.
    pub score: f64,
    /// Whether `guess` could itself be the secret.
    pub is_candidate: bool,
    /// Candidates consistent with every attempt so far.
    pub remaining: usize,
}

/// Every code of `length` symbols from `1..=alphabet_size`, in lexicographic order.
///
/// Returns `None` when the space is larger than [`MAX_SEARCH_SPACE`].
#[must_use]
pub fn all_codes(length: usize, alphabet_size: Symbol) -> Option<Vec<Code>> {
    let exp = u32::try_from(length).ok()?;
    let total = usize::from(alphabet_size).checked_pow(exp)?;
    if total > MAX_SEARCH_SPACE || alphabet_size == 0 {
        return None;
    }

    let mut codes = Vec::with_capacity(total);
    let mut current = vec![1; length];
    loop {
        codes.push(Code::from(current.clone()));
        // Odometer increment from the last position
        let mut pos = length;
        loop {
            if pos == 0 {
                return Some(codes);
            }
            pos -= 1;
            if current[pos] < alphabet_size {
                current[pos] += 1;
                break;
            }
            current[pos] = 1;
        }
    }
}

/// Keeps the candidates that, as the secret, would have given `feedback` for `guess`.
#[must_use]
pub fn filter_candidates(candidates: &[Code], guess: &Code, feedback: Feedback) -> Vec<Code> {
    candidates
        .iter()
        .filter(|c| c.len() == guess.len() && tally(c.symbols(), guess.symbols()) == feedback)
        .cloned()
        .collect()
}

/// Average size of the candidate pool left after playing `guess`.
#[must_use]
pub fn expected_pool_size(guess: &Code, candidates: &[Code]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }
    let mut pattern_counts: HashMap<Feedback, usize> = HashMap::new();
    for secret in candidates {
        let pattern = tally(secret.symbols(), guess.symbols());
        *pattern_counts.entry(pattern).or_insert(0) += 1;
    }
    let total = candidates.len() as f64;
    pattern_counts
        .values()
        .map(|&count| (count as f64).powi(2))
        .sum::<f64>()
        / total
}

/// The guess from `pool` that minimises the expected pool size over `candidates`.
///
/// Ties go to a guess that is itself a candidate. Returns `None` for an empty pool.
#[must_use]
pub fn best_information_guess<'a>(
    pool: &'a [Code],
    candidates: &[Code],
) -> Option<(&'a Code, f64, bool)> {
    let mut best: Option<(&Code, f64, bool)> = None;
    for guess in pool {
        let score = expected_pool_size(guess, candidates);
        let better = match best {
            None => true,
            Some((_, best_score, best_is_candidate)) => {
                score < best_score
                    || (score == best_score && !best_is_candidate && candidates.contains(guess))
            }
        };
        if better {
            best = Some((guess, score, candidates.contains(guess)));
        }
    }
    best
}

/// Recommendation for a fresh session of `config`, before any attempt.
#[must_use]
pub fn recommend_opening(config: &SessionConfig) -> Option<Recommendation> {
    let pool = all_codes(config.code_length(), config.alphabet_size())?;
    let (guess, score, is_candidate) = best_information_guess(&pool, &pool)?;
    Some(Recommendation {
        guess: guess.clone(),
        score,
        is_candidate,
        remaining: pool.len(),
    })
}

/// Recommendation given everything `session` has learned so far.
///
/// Returns `None` when the search space is too large to enumerate or no
/// candidate is consistent with the attempts.
#[must_use]
pub fn recommend(session: &Session) -> Option<Recommendation> {
    let config = session.config();
    let pool = all_codes(config.code_length(), config.alphabet_size())?;
    let candidates = session
        .attempts()
        .iter()
        .fold(pool.clone(), |remaining, attempt| {
            filter_candidates(&remaining, attempt.guess(), attempt.feedback())
        });
    if candidates.is_empty() {
        return None;
    }
    if candidates.len() == 1 {
        return Some(Recommendation {
            guess: candidates[0].clone(),
            score: 1.0,
            is_candidate: true,
            remaining: 1,
        });
    }
    let (guess, score, is_candidate) = best_information_guess(&pool, &candidates)?;
    Some(Recommendation {
        guess: guess.clone(),
        score,
        is_candidate,
        remaining: candidates.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_codes_enumerates_space() {
        let codes = all_codes(2, 3).unwrap();
        assert_eq!(codes.len(), 9);
        assert_eq!(codes[0], Code::from(vec![1, 1]));
        assert_eq!(codes[1], Code::from(vec![1, 2]));
        assert_eq!(codes[8], Code::from(vec![3, 3]));
    }

    #[test]
    fn test_all_codes_too_large() {
        assert!(all_codes(5, 6).is_none());
        assert!(all_codes(4, 0).is_none());
        assert_eq!(all_codes(4, 6).map(|c| c.len()), Some(1296));
    }

    #[test]
    fn test_filter_candidates_keeps_secret() {
        let secret = Code::from(vec![2, 1, 3]);
        let pool = all_codes(3, 3).unwrap();
        let guess = Code::from(vec![1, 1, 2]);
        let feedback = tally(secret.symbols(), guess.symbols());
        let filtered = filter_candidates(&pool, &guess, feedback);
        assert!(filtered.contains(&secret));
        assert!(filtered.len() < pool.len());
        assert!(
            filtered
                .iter()
                .all(|c| tally(c.symbols(), guess.symbols()) == feedback)
        );
    }

    #[test]
    fn test_expected_pool_size() {
        let candidates = vec![Code::from(vec![1, 2]), Code::from(vec![2, 1])];
        // [1,2] splits the two candidates apart: (1*1 + 1*1) / 2
        assert!((expected_pool_size(&Code::from(vec![1, 2]), &candidates) - 1.0).abs() < 1e-9);
        // [3,3] scores both as (0,0): 2*2 / 2
        assert!((expected_pool_size(&Code::from(vec![3, 3]), &candidates) - 2.0).abs() < 1e-9);
        assert_eq!(expected_pool_size(&Code::from(vec![1, 2]), &[]), 0.0);
    }

    #[test]
    fn test_best_information_guess_prefers_candidate_on_tie() {
        // [1,3] also splits the candidates but cannot be the secret
        let pool = vec![Code::from(vec![1, 3]), Code::from(vec![1, 2])];
        let candidates = vec![Code::from(vec![1, 2]), Code::from(vec![2, 1])];
        let (guess, score, is_candidate) = best_information_guess(&pool, &candidates).unwrap();
        assert_eq!(guess, &Code::from(vec![1, 2]));
        assert!((score - 1.0).abs() < 1e-9);
        assert!(is_candidate);
    }

    #[test]
    fn test_best_information_guess_empty_pool() {
        assert!(best_information_guess(&[], &[Code::from(vec![1])]).is_none());
    }

    #[test]
    fn test_recommend_opening_small_space() {
        let config = SessionConfig::new(3, 3, 10).unwrap();
        let rec = recommend_opening(&config).unwrap();
        assert_eq!(rec.remaining, 27);
        assert_eq!(rec.guess.len(), 3);
        assert!(rec.score < 27.0);
    }

    #[test]
    fn test_recommend_narrows_to_secret() {
        let config = SessionConfig::new(3, 3, 10).unwrap();
        let secret = Code::from(vec![3, 1, 2]);
        let mut session = Session::with_secret(config, secret.clone()).unwrap();

        for _ in 0..10 {
            let rec = recommend(&session).unwrap();
            session.submit(rec.guess).unwrap();
            if session.status().is_terminal() {
                break;
            }
        }
        assert_eq!(session.status(), crate::session::Status::Won);
    }

    #[test]
    fn test_recommend_single_candidate() {
        let config = SessionConfig::new(2, 2, 10).unwrap();
        let mut session = Session::with_secret(config, Code::from(vec![2, 1])).unwrap();
        session.submit(Code::from(vec![1, 2])).unwrap();
        // (0,2) against [1,2] leaves only [2,1]
        let rec = recommend(&session).unwrap();
        assert_eq!(rec.remaining, 1);
        assert_eq!(rec.guess, Code::from(vec![2, 1]));
    }

    #[test]
    fn test_recommend_unavailable_for_large_space() {
        let config = SessionConfig::new(8, 9, 10).unwrap();
        let session = Session::with_secret(config, Code::from(vec![1; 8])).unwrap();
        assert!(recommend(&session).is_none());
    }
}
