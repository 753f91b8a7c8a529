use crate::cache::{read_opening, write_opening};
use crate::code::Code;
use crate::config::SessionConfig;
use crate::error::GameError;
use crate::session::{Attempt, Session, Status};
use crate::solver::{self, Recommendation};
use crate::{debug_log, info_log};
use rand::Rng;
use std::path::Path;

/// What the player asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(Code),
    Hint,
    History,
    Reveal,
    NewGame,
    Exit,
}

/// Presentation layer driven by [`game_loop`].
pub trait GameInterface {
    fn display_intro(&mut self, config: &SessionConfig);
    /// Called whenever a new secret is drawn.
    fn display_session_start(&mut self, secret: &Code);
    /// Next player action. `None` means the input was not understood and
    /// should be asked for again.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_feedback(&mut self, attempt: &Attempt, remaining: usize, config: &SessionConfig);
    fn display_error(&mut self, error: &GameError);
    fn display_won(&mut self, attempts: usize);
    fn display_lost(&mut self, secret: &Code);
    fn display_history(&mut self, attempts: &[Attempt], config: &SessionConfig);
    fn display_secret(&mut self, secret: &Code);
    fn display_recommendation(&mut self, recommendation: &Recommendation);
    fn display_hint_unavailable(&mut self);
    fn display_computing_message(&mut self);
    fn display_new_game_message(&mut self);
    fn display_exit_message(&mut self);
}

/// Outcome counts for every session played in one run of [`game_loop`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopSummary {
    pub won: usize,
    pub lost: usize,
    /// Sessions left with `next` or `exit` while still in progress.
    pub abandoned: usize,
}

impl LoopSummary {
    fn record(&mut self, status: Status) {
        match status {
            Status::Won => self.won += 1,
            Status::Lost => self.lost += 1,
            Status::InProgress => self.abandoned += 1,
        }
    }
}

/// Plays sessions back to back until the player exits or input runs out.
///
/// `opening_cache` is where the first-move hint for this code shape is
/// cached; `None` disables caching.
pub fn game_loop<I, R>(
    config: &SessionConfig,
    rng: &mut R,
    interface: &mut I,
    opening_cache: Option<&Path>,
) -> LoopSummary
where
    I: GameInterface + ?Sized,
    R: Rng,
{
    let mut summary = LoopSummary::default();
    let mut session = Session::new(*config, rng);
    interface.display_intro(config);
    interface.display_session_start(session.reveal());

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        debug_log!("game_loop() - action: {:?}", action);

        match action {
            UserAction::Exit => {
                summary.record(session.status());
                interface.display_exit_message();
                break;
            }
            UserAction::NewGame => {
                summary.record(session.status());
                session = Session::new(*config, rng);
                interface.display_new_game_message();
                interface.display_session_start(session.reveal());
            }
            UserAction::Guess(guess) => play_guess(&mut session, guess, interface),
            UserAction::Hint => show_hint(&session, interface, opening_cache),
            UserAction::History => interface.display_history(session.attempts(), config),
            UserAction::Reveal => interface.display_secret(session.reveal()),
        }
    }

    info_log!("game_loop() - finished: {:?}", summary);
    summary
}

fn play_guess<I: GameInterface + ?Sized>(session: &mut Session, guess: Code, interface: &mut I) {
    if let Err(e) = session.submit(guess) {
        interface.display_error(&e);
        return;
    }
    if let Some(attempt) = session.attempts().last() {
        interface.display_feedback(attempt, session.remaining_attempts(), session.config());
    }
    match session.status() {
        Status::Won => interface.display_won(session.attempts().len()),
        Status::Lost => interface.display_lost(session.reveal()),
        Status::InProgress => {}
    }
}

fn show_hint<I: GameInterface + ?Sized>(
    session: &Session,
    interface: &mut I,
    opening_cache: Option<&Path>,
) {
    if session.status().is_terminal() {
        interface.display_error(&GameError::SessionClosed {
            status: session.status(),
        });
        return;
    }

    let recommendation = if session.attempts().is_empty() {
        load_or_compute_opening(session.config(), opening_cache, interface)
    } else {
        interface.display_computing_message();
        solver::recommend(session)
    };

    match recommendation {
        Some(rec) => interface.display_recommendation(&rec),
        None => interface.display_hint_unavailable(),
    }
}

fn load_or_compute_opening<I: GameInterface + ?Sized>(
    config: &SessionConfig,
    opening_cache: Option<&Path>,
    interface: &mut I,
) -> Option<Recommendation> {
    if let Some(path) = opening_cache
        && let Some(rec) = read_opening(path, config)
    {
        debug_log!("load_or_compute_opening() - cache hit: {}", path.display());
        return Some(rec);
    }

    interface.display_computing_message();
    let rec = solver::recommend_opening(config)?;

    if let Some(path) = opening_cache {
        write_opening(path, &rec);
    }
    Some(rec)
}
