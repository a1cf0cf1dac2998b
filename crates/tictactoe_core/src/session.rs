//! Command interface for front ends.
//!
//! A [`Session`] holds at most one live [`Game`] and exposes the three
//! commands a display issues: start a new game, attempt a move, and
//! restart. Each command runs to completion before returning.

use crate::action::{MoveError, MoveOutcome};
use crate::game::Game;
use crate::view::GameView;
use tracing::{debug, info, instrument};

/// Errors returned by session commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum SessionError {
    /// No game has been started (or the last one was discarded).
    #[from(ignore)]
    #[display("No game in progress; start a new game first")]
    NoActiveGame,

    /// The move was rejected by the game.
    #[display("{}", _0)]
    Move(MoveError),
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::NoActiveGame => None,
            SessionError::Move(err) => Some(err),
        }
    }
}

/// Holds the single live game a display talks to.
#[derive(Debug, Clone, Default)]
pub struct Session {
    game: Option<Game>,
}

impl Session {
    /// Creates a session with no game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards any live game and starts a fresh one.
    ///
    /// `name_x` plays X and opens; `name_o` plays O.
    #[instrument(skip(self))]
    pub fn start_new_game(&mut self, name_x: &str, name_o: &str) -> &Game {
        if self.game.is_some() {
            debug!("Replacing live game");
        }
        self.game.insert(Game::from_names(name_x, name_o))
    }

    /// Attempts a move at `index` (0-8) for the player whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoActiveGame`] without a live game, or the
    /// game's [`MoveError`] when the move is rejected.
    #[instrument(skip(self))]
    pub fn attempt_move(&mut self, index: usize) -> Result<MoveOutcome, SessionError> {
        let game = self.game.as_mut().ok_or(SessionError::NoActiveGame)?;
        Ok(game.play_round(index)?)
    }

    /// Restarts play.
    ///
    /// With `same_two_players` the live game is reset and the opener
    /// alternates. Otherwise the game is discarded and the next call must
    /// be [`Session::start_new_game`].
    #[instrument(skip(self))]
    pub fn restart(&mut self, same_two_players: bool) -> Result<(), SessionError> {
        if same_two_players {
            let game = self.game.as_mut().ok_or(SessionError::NoActiveGame)?;
            game.reset_game(true);
        } else {
            info!("Discarding game for new players");
            self.game = None;
        }
        Ok(())
    }

    /// Returns the live game, if any.
    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// Read-only snapshot of the live game.
    pub fn view(&self) -> Option<GameView> {
        self.game.as_ref().map(Game::view)
    }
}
