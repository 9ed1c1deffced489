//! Data structures for the bracket engine: players, matches, rounds, persisted records.

mod game;
mod player;
mod records;
mod tournament;

pub use game::{GameType, GameTypeSelection, Match, Round, RoundRobinType};
pub use player::{Player, PlayerId, Slot};
pub use records::{DatabaseObjects, MatchRecord, MatchStatus, RoundRecord, RoundStatus};
pub use tournament::{BracketError, TournamentId};
