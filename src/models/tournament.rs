//! Tournament identifier and BracketError.

use crate::models::player::PlayerId;
use uuid::Uuid;

/// Unique identifier for a tournament (owned by the caller's storage).
pub type TournamentId = Uuid;

/// Errors that can occur while building a bracket or its payouts.
#[derive(Clone, Debug, PartialEq)]
pub enum BracketError {
    /// No players were supplied.
    EmptyRoster,
    /// A round robin needs at least two players.
    NotEnoughPlayers { found: usize },
    /// Roster is larger than the engine schedules.
    TooManyPlayers { found: usize, max: usize },
    /// The same player id appears more than once in the roster.
    DuplicatePlayer(PlayerId),
    /// Prize distribution was asked for zero rounds.
    NoRounds,
    /// More rounds requested than any schedule can have.
    TooManyRounds { requested: usize, max: usize },
    /// Prize pool is negative, NaN or infinite.
    InvalidPrizePool(f64),
    /// Round numbers start at 1.
    InvalidStartingRound,
    /// A round or match number does not fit in a `u32`.
    RoundNumberOverflow,
    /// Game type string not recognised.
    UnknownGameType(String),
    /// Round-robin type string not recognised.
    UnknownRoundRobinType(String),
}

impl std::fmt::Display for BracketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BracketError::EmptyRoster => write!(f, "No players to schedule"),
            BracketError::NotEnoughPlayers { found } => {
                write!(f, "Need at least 2 players for a round robin (found {})", found)
            }
            BracketError::TooManyPlayers { found, max } => {
                write!(f, "Too many players for a round robin ({} found, at most {})", found, max)
            }
            BracketError::DuplicatePlayer(id) => write!(f, "Player {} appears more than once", id),
            BracketError::NoRounds => write!(f, "Cannot distribute a prize pool over zero rounds"),
            BracketError::TooManyRounds { requested, max } => {
                write!(f, "Too many rounds ({} requested, at most {})", requested, max)
            }
            BracketError::InvalidPrizePool(pool) => write!(f, "Invalid prize pool: {}", pool),
            BracketError::InvalidStartingRound => write!(f, "Starting round number must be at least 1"),
            BracketError::RoundNumberOverflow => {
                write!(f, "Round or match numbering runs past the largest round number")
            }
            BracketError::UnknownGameType(s) => write!(f, "Unknown game type: {}", s),
            BracketError::UnknownRoundRobinType(s) => write!(f, "Unknown round robin type: {}", s),
        }
    }
}

impl std::error::Error for BracketError {}
