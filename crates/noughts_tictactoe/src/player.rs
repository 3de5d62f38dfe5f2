//! Player identity: a fixed mark plus a display name.

use crate::Mark;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A participant in the game.
///
/// The mark is fixed for the player's lifetime. The name can change, but is
/// never empty: blank input falls back to a label derived from the mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Mark placed by this player.
    mark: Mark,
    /// Display name.
    name: String,
}

impl Player {
    /// Creates a player with the default name for `mark`.
    #[instrument]
    pub fn new(mark: Mark) -> Self {
        Self {
            mark,
            name: Self::default_name(mark),
        }
    }

    /// Creates a player and applies `name` through [`Player::set_name`].
    #[instrument(skip(name))]
    pub fn named(mark: Mark, name: impl AsRef<str>) -> Self {
        let mut player = Self::new(mark);
        player.set_name(name);
        player
    }

    /// Label used when no name is given, e.g. `"Player X"`.
    pub fn default_name(mark: Mark) -> String {
        format!("Player {}", mark)
    }

    /// Returns the mark this player places.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the current display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the player.
    ///
    /// Surrounding whitespace is trimmed. An empty result restores the
    /// default name. Uniqueness against the other player is not checked here.
    #[instrument(skip(self, new_name), fields(mark = %self.mark))]
    pub fn set_name(&mut self, new_name: impl AsRef<str>) {
        let trimmed = new_name.as_ref().trim();
        self.name = if trimmed.is_empty() {
            Self::default_name(self.mark)
        } else {
            trimmed.to_string()
        };
        debug!(name = %self.name, "Player renamed");
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.mark)
    }
}
