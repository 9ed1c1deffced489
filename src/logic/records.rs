//! Turn a schedule and its prize distribution into flat records for storage.

use crate::logic::payouts::calculate_match_payouts;
use crate::logic::round_robin::sequence_number;
use crate::models::{
    BracketError, DatabaseObjects, GameTypeSelection, Match, MatchRecord, MatchStatus, Round,
    RoundRecord, RoundStatus, Slot, TournamentId,
};
use rand::Rng;
use uuid::Uuid;

/// Build round and match records with fresh random round ids.
///
/// See [`prepare_database_objects_with_rng`].
pub fn prepare_database_objects(
    tournament_id: TournamentId,
    schedule: &[Round],
    prize_distribution: &[f64],
    game_type: GameTypeSelection,
) -> Result<DatabaseObjects, BracketError> {
    prepare_database_objects_with_rng(
        tournament_id,
        schedule,
        prize_distribution,
        game_type,
        &mut rand::thread_rng(),
    )
}

/// Build round and match records, drawing round ids from `rng`.
///
/// Round `i` of `schedule` takes `prize_distribution[i]` (0 when missing). Bye
/// matches are recorded as completed with the real player as player 1 and winner;
/// every other match starts pending. Fails if a round holds more matches than
/// a `u32` match number can count.
pub fn prepare_database_objects_with_rng<R: Rng + ?Sized>(
    tournament_id: TournamentId,
    schedule: &[Round],
    prize_distribution: &[f64],
    game_type: GameTypeSelection,
    rng: &mut R,
) -> Result<DatabaseObjects, BracketError> {
    let mut objects = DatabaseObjects::default();

    for (round_index, round) in schedule.iter().enumerate() {
        let round_id = uuid::Builder::from_random_bytes(rng.gen()).into_uuid();
        let round_prize = prize_distribution.get(round_index).copied().unwrap_or(0.0);
        let (byes, regular) = (round.bye_count(), round.regular_count());
        let payouts = calculate_match_payouts(round_prize, regular, byes);

        let shortfall = payouts.shortfall(round_prize, regular, byes);
        if shortfall > 0.0 {
            log::debug!(
                "Round {}: {} of {} left unallocated by cent rounding",
                round.round_number,
                shortfall,
                round_prize
            );
        }

        objects.rounds.push(RoundRecord {
            id: round_id,
            tournament_id,
            round_number: round.round_number,
            round_name: format!("Round {}", round.round_number),
            game_type: game_type.for_round(round.round_number),
            prize_per_round: round_prize,
            status: RoundStatus::Pending,
        });

        for (i, m) in round.matches.iter().enumerate() {
            let payout = if m.is_bye {
                payouts.per_bye
            } else {
                payouts.per_match
            };
            let match_number = sequence_number(1, i)?;
            if let Some(record) =
                match_record(tournament_id, round_id, round, match_number, m, payout)
            {
                objects.matches.push(record);
            }
        }
    }

    Ok(objects)
}

/// Flatten one match. Returns None only for a match with no real player, which
/// the generator never produces.
fn match_record(
    tournament_id: TournamentId,
    round_id: Uuid,
    round: &Round,
    match_number: u32,
    m: &Match,
    payout_amount: f64,
) -> Option<MatchRecord> {
    let (player1, player2) = match (&m.player1, &m.player2) {
        (Slot::Player(p1), Slot::Player(p2)) => (p1, Some(p2)),
        (Slot::Player(p), Slot::Bye) | (Slot::Bye, Slot::Player(p)) => (p, None),
        (Slot::Bye, Slot::Bye) => return None,
    };

    let mut record = MatchRecord {
        tournament_id,
        round_id,
        round_number: round.round_number,
        match_number,
        player1_id: player1.id,
        player1_name: player1.name.clone(),
        player2_id: player2.map(|p| p.id),
        player2_name: player2.map(|p| p.name.clone()),
        is_bye: m.is_bye,
        payout_amount,
        status: MatchStatus::Pending,
        winner_id: None,
        winner_name: None,
    };
    if m.is_bye {
        record.status = MatchStatus::Completed;
        record.winner_id = Some(player1.id);
        record.winner_name = Some(player1.name.clone());
    }
    Some(record)
}
