//! Match, Round, the round-robin repetition type and the game played each round.

use crate::models::player::{Player, Slot};
use crate::models::tournament::BracketError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single pairing. `is_bye` is fixed when the match is created.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub player1: Slot,
    pub player2: Slot,
    pub is_bye: bool,
}

impl Match {
    pub fn new(player1: Slot, player2: Slot) -> Self {
        let is_bye = player1.is_bye() || player2.is_bye();
        Self {
            player1,
            player2,
            is_bye,
        }
    }

    /// Same pairing with home/away reversed.
    pub fn swapped(&self) -> Self {
        Self {
            player1: self.player2.clone(),
            player2: self.player1.clone(),
            is_bye: self.is_bye,
        }
    }

    /// The real player who advances automatically, when this is a bye match.
    pub fn bye_recipient(&self) -> Option<&Player> {
        if !self.is_bye {
            return None;
        }
        self.player1.player().or_else(|| self.player2.player())
    }

    /// True if the given player plays in this match.
    pub fn involves(&self, player: &Player) -> bool {
        self.player1.player() == Some(player) || self.player2.player() == Some(player)
    }
}

/// One round of the schedule. Round numbers start at 1.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub round_number: u32,
    pub matches: Vec<Match>,
}

impl Round {
    pub fn bye_count(&self) -> usize {
        self.matches.iter().filter(|m| m.is_bye).count()
    }

    pub fn regular_count(&self) -> usize {
        self.matches.len() - self.bye_count()
    }
}

/// How many times the base rotation is played.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundRobinType {
    #[default]
    Single,
    Double,
    Triple,
}

impl RoundRobinType {
    pub fn repetitions(self) -> usize {
        match self {
            RoundRobinType::Single => 1,
            RoundRobinType::Double => 2,
            RoundRobinType::Triple => 3,
        }
    }
}

impl fmt::Display for RoundRobinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RoundRobinType::Single => "single",
            RoundRobinType::Double => "double",
            RoundRobinType::Triple => "triple",
        };
        f.write_str(s)
    }
}

impl FromStr for RoundRobinType {
    type Err = BracketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(RoundRobinType::Single),
            "double" => Ok(RoundRobinType::Double),
            "triple" => Ok(RoundRobinType::Triple),
            _ => Err(BracketError::UnknownRoundRobinType(s.to_string())),
        }
    }
}

/// Pool game played in a round.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum GameType {
    #[serde(rename = "8-Ball")]
    EightBall,
    #[serde(rename = "9-Ball")]
    NineBall,
    #[serde(rename = "10-Ball")]
    TenBall,
}

impl GameType {
    /// Rotation order used by mixed tournaments.
    pub const ROTATION: [GameType; 3] = [GameType::EightBall, GameType::NineBall, GameType::TenBall];
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameType::EightBall => "8-Ball",
            GameType::NineBall => "9-Ball",
            GameType::TenBall => "10-Ball",
        };
        f.write_str(s)
    }
}

impl FromStr for GameType {
    type Err = BracketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "8-ball" | "8ball" | "8" => Ok(GameType::EightBall),
            "9-ball" | "9ball" | "9" => Ok(GameType::NineBall),
            "10-ball" | "10ball" | "10" => Ok(GameType::TenBall),
            _ => Err(BracketError::UnknownGameType(s.to_string())),
        }
    }
}

/// Game choice for a whole tournament: one fixed game, or rotating through
/// 8-Ball, 9-Ball and 10-Ball by round number.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GameTypeSelection {
    Fixed(GameType),
    Mixed,
}

impl GameTypeSelection {
    /// Game for a given round (round numbers start at 1).
    pub fn for_round(self, round_number: u32) -> GameType {
        match self {
            GameTypeSelection::Fixed(g) => g,
            GameTypeSelection::Mixed => {
                let idx = (round_number.saturating_sub(1) % 3) as usize;
                GameType::ROTATION[idx]
            }
        }
    }
}

impl Default for GameTypeSelection {
    fn default() -> Self {
        GameTypeSelection::Fixed(GameType::EightBall)
    }
}

impl fmt::Display for GameTypeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameTypeSelection::Fixed(g) => write!(f, "{g}"),
            GameTypeSelection::Mixed => f.write_str("mixed"),
        }
    }
}

impl FromStr for GameTypeSelection {
    type Err = BracketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("mixed") {
            return Ok(GameTypeSelection::Mixed);
        }
        s.parse().map(GameTypeSelection::Fixed)
    }
}

// Callers send the game type as a plain string ("mixed", "9-Ball", ...).
impl Serialize for GameTypeSelection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GameTypeSelection {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
