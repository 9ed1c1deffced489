//! Bracket logic: seeding, round-robin scheduling, payouts, record assembly.

mod payouts;
mod plan;
mod records;
mod round_robin;
mod seeding;

pub use payouts::{calculate_match_payouts, calculate_prize_distribution, MatchPayouts, PrizeCurve};
pub use plan::{plan_bracket, BracketConfig, BracketPlan};
pub use records::{prepare_database_objects, prepare_database_objects_with_rng};
pub use round_robin::{
    determine_round_robin_type, generate_round_robin, regenerate_bracket, MAX_PLAYERS, MAX_ROUNDS,
};
pub use seeding::shuffle_players;
