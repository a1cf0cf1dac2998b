//! Game engine: turn order, move validation, and round transitions.

use crate::action::{MoveError, MoveOutcome};
use crate::board::Board;
use crate::phases::Outcome;
use crate::player::Player;
use crate::position::Position;
use crate::rules;
use crate::types::{GameStatus, Marker};
use crate::view::GameView;
use tracing::{debug, info, instrument, warn};

/// Errors raised while setting up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SetupError {
    /// Both players were given the same marker.
    #[display("Both players hold marker {}", _0)]
    DuplicateMarker(Marker),

    /// Players can only be renamed before the first move of a round.
    #[display("Cannot rename players once a round has started")]
    RoundStarted,
}

impl std::error::Error for SetupError {}

/// Tic-tac-toe game engine.
///
/// Owns both players and the board. A round moves from
/// [`GameStatus::InProgress`] to either [`GameStatus::Won`] or
/// [`GameStatus::Draw`] and stays there until [`Game::reset_game`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    players: [Player; 2],
    board: Board,
    /// Index into `players` of the player to move (or the winner).
    current: usize,
    /// Index into `players` of the player who opened this round.
    opener: usize,
    /// Accepted moves plus one.
    turn: u32,
    status: GameStatus,
    history: Vec<Position>,
}

impl Game {
    /// Creates a game from two players holding different markers.
    ///
    /// Whoever holds X opens the first round.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::DuplicateMarker`] if both players hold the same marker.
    #[instrument(skip_all, fields(first = %first, second = %second))]
    pub fn new(first: Player, second: Player) -> Result<Self, SetupError> {
        if first.marker() == second.marker() {
            warn!("Rejecting players with identical markers");
            return Err(SetupError::DuplicateMarker(first.marker()));
        }
        Ok(Self::with_players([first, second]))
    }

    /// Creates a game from raw name input: the first name plays X, the second O.
    pub fn from_names(name_x: &str, name_o: &str) -> Self {
        Self::with_players([
            Player::new(name_x, Marker::X),
            Player::new(name_o, Marker::X.opponent()),
        ])
    }

    /// Markers in `players` must differ.
    fn with_players(players: [Player; 2]) -> Self {
        let opener = seat_of(&players, Marker::X);
        info!(opener = %players[opener], "Starting new game");
        Self {
            players,
            board: Board::new(),
            current: opener,
            opener,
            turn: 1,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Plays the current player's marker at `index` (0-8).
    ///
    /// On acceptance the turn count advances, then the board is checked for
    /// a win and then for a draw. The current player only changes when the
    /// round continues, so after a winning move the current player is the
    /// winner.
    ///
    /// # Errors
    ///
    /// A rejected move changes nothing, not even the turn count:
    /// - [`MoveError::GameOver`] if the round is already won or drawn
    /// - [`MoveError::InvalidIndex`] if `index` is outside 0-8
    /// - [`MoveError::SquareOccupied`] if the cell already holds a marker
    #[instrument(skip(self), fields(turn = self.turn, player = %self.players[self.current]))]
    pub fn play_round(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        if self.status.is_over() {
            debug!("Move after round end ignored");
            return Err(MoveError::GameOver);
        }

        let position = Position::from_index(index).ok_or(MoveError::InvalidIndex(index))?;
        let marker = self.current_player_marker();
        if !self.board.place(marker, position) {
            return Err(MoveError::SquareOccupied(position));
        }

        self.history.push(position);
        self.turn += 1;

        if self.check_winner() {
            self.status = GameStatus::Won(marker);
            info!(winner = %self.players[self.current], "Round won");
            return Ok(MoveOutcome::Won(marker));
        }

        if rules::is_draw(&self.board) {
            self.status = GameStatus::Draw;
            info!("Round drawn");
            return Ok(MoveOutcome::Draw);
        }

        self.current = seat_of(&self.players, marker.opponent());
        Ok(MoveOutcome::Continue)
    }

    /// Checks whether any winning line is fully held by one marker.
    ///
    /// Pure query: safe to call repeatedly for re-rendering.
    pub fn check_winner(&self) -> bool {
        rules::check_winner(&self.board).is_some()
    }

    /// Checks if the round has been won or drawn.
    pub fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the 1-based turn counter (accepted moves plus one).
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Returns how many moves have been accepted this round.
    pub fn moves_made(&self) -> usize {
        self.history.len()
    }

    /// Returns the player to move, or the winner once the round is won.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Name of the player to move (or the winner).
    pub fn current_player_name(&self) -> &str {
        self.current_player().name()
    }

    /// Marker of the player to move (or the winner).
    pub fn current_player_marker(&self) -> Marker {
        self.current_player().marker()
    }

    /// Returns the player who opened the current round.
    pub fn opener(&self) -> &Player {
        &self.players[self.opener]
    }

    /// Returns both players in construction order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the round status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Positions accepted this round, in play order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Returns how the round ended, or `None` while it is in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won(marker) => Some(Outcome::Winner {
                name: self.current_player_name().to_string(),
                marker,
            }),
            GameStatus::Draw => Some(Outcome::Draw),
        }
    }

    /// Read-only snapshot for displays.
    pub fn view(&self) -> GameView {
        GameView::from(self)
    }

    /// Renames both players (in construction order).
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::RoundStarted`] once a move has been accepted.
    #[instrument(skip(self))]
    pub fn rename_players(&mut self, first: &str, second: &str) -> Result<(), SetupError> {
        if !self.history.is_empty() {
            return Err(SetupError::RoundStarted);
        }
        self.players[0].rename(first);
        self.players[1].rename(second);
        Ok(())
    }

    /// Starts a fresh round: empty board, turn 1, status in progress.
    ///
    /// With `same_two_players` the opening player alternates, so the player
    /// who moved second last round opens this one. Without it the opener
    /// goes back to the X holder; callers wanting new players should build
    /// a new [`Game`] instead.
    #[instrument(skip(self), fields(previous_opener = %self.opener()))]
    pub fn reset_game(&mut self, same_two_players: bool) {
        let opening_marker = if same_two_players {
            self.opener().marker().opponent()
        } else {
            Marker::X
        };
        self.opener = seat_of(&self.players, opening_marker);
        self.current = self.opener;
        self.board.reset();
        self.turn = 1;
        self.status = GameStatus::InProgress;
        self.history.clear();
        info!(opener = %self.opener(), "Round reset");
    }
}

/// Index of the player holding `marker`.
fn seat_of(players: &[Player; 2], marker: Marker) -> usize {
    if players[0].marker() == marker { 0 } else { 1 }
}
