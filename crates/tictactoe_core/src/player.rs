//! Named players.

use crate::types::Marker;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player: a display name and the marker they place.
///
/// The marker is fixed for the life of the player; the name may be
/// reassigned between rounds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    name: String,
    marker: Marker,
}

impl Player {
    /// Creates a player, normalising the raw name input.
    #[instrument]
    pub fn new(raw_name: &str, marker: Marker) -> Self {
        Self {
            name: normalize_name(raw_name, marker),
            marker,
        }
    }

    /// Returns the normalised name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's marker.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Replaces the name, applying the same normalisation as [`Player::new`].
    pub fn rename(&mut self, raw_name: &str) {
        self.name = normalize_name(raw_name, self.marker);
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.marker)
    }
}

/// Capitalises the first character and lowercases the rest.
///
/// Blank input falls back to the marker letter.
pub fn normalize_name(raw: &str, marker: Marker) -> String {
    let mut chars = raw.trim().chars();
    match chars.next() {
        None => marker.symbol().to_string(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_capitalised() {
        assert_eq!(Player::new("alice", Marker::X).name(), "Alice");
        assert_eq!(Player::new("bOB", Marker::O).name(), "Bob");
        assert_eq!(Player::new("MARY ANN", Marker::O).name(), "Mary ann");
    }

    #[test]
    fn test_empty_name_falls_back_to_marker() {
        assert_eq!(Player::new("", Marker::O).name(), "O");
        assert_eq!(Player::new("   ", Marker::X).name(), "X");
    }

    #[test]
    fn test_non_ascii_name() {
        assert_eq!(Player::new("éLODIE", Marker::X).name(), "Élodie");
    }

    #[test]
    fn test_rename_keeps_marker() {
        let mut player = Player::new("alice", Marker::X);
        player.rename("carol");
        assert_eq!(player.name(), "Carol");
        assert_eq!(player.marker(), Marker::X);
    }
}
