//! Plan a whole bracket in one call: seed, schedule, price and flatten.

use crate::logic::payouts::calculate_prize_distribution;
use crate::logic::records::prepare_database_objects_with_rng;
use crate::logic::round_robin::{determine_round_robin_type, generate_round_robin};
use crate::logic::seeding::shuffle_players;
use crate::models::{
    BracketError, DatabaseObjects, GameTypeSelection, Player, Round, RoundRobinType, TournamentId,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Input for [`plan_bracket`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BracketConfig {
    pub tournament_id: TournamentId,
    pub players: Vec<Player>,
    /// None picks the suggested type for the field size.
    #[serde(default)]
    pub round_robin_type: Option<RoundRobinType>,
    pub total_prize_pool: f64,
    #[serde(default)]
    pub game_type: GameTypeSelection,
    /// Shuffle the roster before scheduling.
    #[serde(default)]
    pub shuffle: bool,
}

/// Schedule, per-round prizes and the records to persist.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BracketPlan {
    pub round_robin_type: RoundRobinType,
    pub schedule: Vec<Round>,
    pub prize_distribution: Vec<f64>,
    pub objects: DatabaseObjects,
}

pub fn plan_bracket<R: Rng + ?Sized>(
    config: &BracketConfig,
    rng: &mut R,
) -> Result<BracketPlan, BracketError> {
    let round_robin_type = config
        .round_robin_type
        .unwrap_or_else(|| determine_round_robin_type(config.players.len()));

    let schedule = if config.shuffle {
        let seeded = shuffle_players(&config.players, rng);
        generate_round_robin(&seeded, round_robin_type)?
    } else {
        generate_round_robin(&config.players, round_robin_type)?
    };

    let prize_distribution = calculate_prize_distribution(config.total_prize_pool, schedule.len())?;
    let objects = prepare_database_objects_with_rng(
        config.tournament_id,
        &schedule,
        &prize_distribution,
        config.game_type,
        rng,
    )?;

    log::info!(
        "Planned tournament {}: {} rounds, {} matches, prize pool {}",
        config.tournament_id,
        objects.rounds.len(),
        objects.matches.len(),
        config.total_prize_pool
    );
    Ok(BracketPlan {
        round_robin_type,
        schedule,
        prize_distribution,
        objects,
    })
}
