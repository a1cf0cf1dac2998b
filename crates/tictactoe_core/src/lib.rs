//! Two-player tic-tac-toe game state.
//!
//! # Architecture
//!
//! - **Board**: the 9-cell grid; guards against overwriting a taken cell
//! - **Rules**: pure win and draw checks over a board
//! - **Game**: two players, turn order, and round transitions
//! - **Session**: the command interface a front end drives
//!
//! Cells are addressed by row-major index 0-8 (or the matching [`Position`]).
//! The core never calls into a display; everything a display needs comes
//! back as return values or a [`GameView`].
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{MoveOutcome, Session};
//!
//! let mut session = Session::new();
//! session.start_new_game("alice", "bob");
//! for index in [0, 3, 1, 4] {
//!     assert_eq!(session.attempt_move(index), Ok(MoveOutcome::Continue));
//! }
//! session.attempt_move(2).unwrap();
//!
//! let game = session.game().unwrap();
//! assert!(game.is_game_over());
//! assert_eq!(game.current_player_name(), "Alice");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod game;
mod phases;
mod player;
mod position;
pub mod rules;
mod session;
mod types;
mod view;

pub use action::{MoveError, MoveOutcome};
pub use board::Board;
pub use game::{Game, SetupError};
pub use phases::Outcome;
pub use player::{Player, normalize_name};
pub use position::Position;
pub use session::{Session, SessionError};
pub use types::{Cell, GameStatus, Marker};
pub use view::GameView;
