//! Pool league bracket engine: round-robin schedules, prize distribution and
//! match payouts, flattened into records for storage.

pub mod logic;
pub mod models;

pub use logic::{
    calculate_match_payouts, calculate_prize_distribution, determine_round_robin_type,
    generate_round_robin, plan_bracket, prepare_database_objects,
    prepare_database_objects_with_rng, regenerate_bracket, shuffle_players, BracketConfig,
    BracketPlan, MatchPayouts, PrizeCurve, MAX_PLAYERS, MAX_ROUNDS,
};
pub use models::{
    BracketError, DatabaseObjects, GameType, GameTypeSelection, Match, MatchRecord, MatchStatus,
    Player, PlayerId, Round, RoundRecord, RoundRobinType, RoundStatus, Slot, TournamentId,
};
