//! Player and the Slot a player occupies in a match.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in matches and records).
pub type PlayerId = Uuid;

/// A real entrant in the bracket.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    /// Create a player with a fresh random id.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Create a player with an id that already exists elsewhere (e.g. the ladder).
    pub fn with_id(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// One side of a match: a real player or the synthetic bye that pads odd fields.
///
/// The bye only exists while a schedule is generated and inside the returned
/// rounds; it never becomes a record of its own.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Slot {
    Player(Player),
    Bye,
}

impl Slot {
    pub fn is_bye(&self) -> bool {
        matches!(self, Slot::Bye)
    }

    /// The real player in this slot, if any.
    pub fn player(&self) -> Option<&Player> {
        match self {
            Slot::Player(p) => Some(p),
            Slot::Bye => None,
        }
    }
}

impl From<Player> for Slot {
    fn from(p: Player) -> Self {
        Slot::Player(p)
    }
}
