//! Read-only snapshot handed to displays.

use crate::game::Game;
use crate::phases::Outcome;
use crate::position::Position;
use crate::types::{Cell, Marker};
use serde::{Deserialize, Serialize};

/// Everything a display needs to render one frame.
///
/// Built from a [`Game`] by value, so holding a view never borrows the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Cells in row-major order (0-8).
    pub cells: [Cell; 9],
    /// Name of the player to move, or the winner.
    pub current_player_name: String,
    /// Marker of the player to move, or the winner.
    pub current_player_marker: Marker,
    /// 1-based turn counter.
    pub turn: u32,
    /// Whether the round has been won or drawn.
    pub is_over: bool,
    /// Whether some line is held by a single marker.
    pub has_winner: bool,
    /// How the round ended, once it has.
    pub outcome: Option<Outcome>,
    /// Positions still open for play.
    pub open_positions: Vec<Position>,
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        Self {
            cells: game.board().snapshot(),
            current_player_name: game.current_player_name().to_string(),
            current_player_marker: game.current_player_marker(),
            turn: game.turn(),
            is_over: game.is_game_over(),
            has_winner: game.check_winner(),
            outcome: game.outcome(),
            open_positions: if game.is_game_over() {
                Vec::new()
            } else {
                game.board().open_positions()
            },
        }
    }
}
