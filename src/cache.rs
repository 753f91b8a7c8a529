use crate::code::Code;
use crate::config::SessionConfig;
use crate::solver::Recommendation;
use crate::{debug_log, info_log};
use std::fs;
use std::path::{Path, PathBuf};

/// Location of the cached opening recommendation for `config`'s code shape.
#[must_use]
pub fn opening_cache_path(config: &SessionConfig) -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| {
        dir.join("code-breaker").join(format!(
            "opening-{}x{}.txt",
            config.code_length(),
            config.alphabet_size()
        ))
    })
}

/// Reads a cached opening. Missing, malformed or mis-sized files yield `None`.
#[must_use]
pub fn read_opening(path: &Path, config: &SessionConfig) -> Option<Recommendation> {
    let contents = fs::read_to_string(path).ok()?;
    let line = contents
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))?;
    let (code_text, score_text) = line.rsplit_once(' ')?;
    let guess: Code = code_text.parse().ok()?;
    let score: f64 = score_text.parse().ok()?;

    if guess.validate(config).is_err() {
        debug_log!("read_opening() - cached code {} does not fit config", guess);
        return None;
    }
    Some(Recommendation {
        guess,
        score,
        // Before the first attempt every code is still a candidate.
        is_candidate: true,
        remaining: config.search_space()?,
    })
}

/// Writes the opening to `path`, creating parent directories. Failures are logged and ignored.
pub fn write_opening(path: &Path, recommendation: &Recommendation) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        info_log!("write_opening() - cannot create {}: {}", parent.display(), e);
        return;
    }
    let contents = format!(
        "# code-breaker opening, computed {}\n{} {}\n",
        chrono::Local::now().to_rfc3339(),
        recommendation.guess,
        recommendation.score
    );
    if let Err(e) = fs::write(path, contents) {
        info_log!("write_opening() - cannot write {}: {}", path.display(), e);
    }
}
