//! Round-robin schedule generation (circle method) and bracket regeneration.

use crate::models::{BracketError, Match, Player, Round, RoundRobinType, Slot};
use std::collections::HashSet;

/// Largest roster the generator schedules.
pub const MAX_PLAYERS: usize = 1024;

/// Upper bound on rounds in any schedule: a triple round robin of `MAX_PLAYERS`.
pub const MAX_ROUNDS: usize = MAX_PLAYERS * 3;

/// Build the full round-robin schedule for `players`.
///
/// 1. Pad odd fields with a bye so the working count `n` is even.
/// 2. Circle method: slot 0 stays put; in each of the `n - 1` base rounds slot `i`
///    plays slot `n - 1 - i`, then the last slot moves to index 1.
/// 3. `Double` appends the base rounds with home/away swapped; `Triple` appends
///    the swapped block and then the base block again.
///
/// Rounds are numbered `1..=(n - 1) * repetitions` with no gaps.
pub fn generate_round_robin(
    players: &[Player],
    kind: RoundRobinType,
) -> Result<Vec<Round>, BracketError> {
    validate_roster(players)?;

    let mut slots: Vec<Slot> = players.iter().cloned().map(Slot::Player).collect();
    if slots.len() % 2 == 1 {
        log::debug!("Odd field of {} players, adding a bye", slots.len());
        slots.push(Slot::Bye);
    }
    let n = slots.len();

    let mut base: Vec<Vec<Match>> = Vec::with_capacity(n - 1);
    for _ in 0..n - 1 {
        let matches = (0..n / 2)
            .filter_map(|i| {
                let (home, away) = (&slots[i], &slots[n - 1 - i]);
                if home.is_bye() && away.is_bye() {
                    None
                } else {
                    Some(Match::new(home.clone(), away.clone()))
                }
            })
            .collect();
        base.push(matches);

        if let Some(last) = slots.pop() {
            slots.insert(1, last);
        }
    }

    let mut blocks: Vec<Vec<Match>> = Vec::with_capacity(base.len() * kind.repetitions());
    blocks.extend(base.iter().cloned());
    if matches!(kind, RoundRobinType::Double | RoundRobinType::Triple) {
        blocks.extend(
            base.iter()
                .map(|matches| matches.iter().map(Match::swapped).collect::<Vec<_>>()),
        );
    }
    if kind == RoundRobinType::Triple {
        blocks.extend(base.iter().cloned());
    }

    let rounds = blocks
        .into_iter()
        .enumerate()
        .map(|(i, matches)| {
            Ok(Round {
                round_number: sequence_number(1, i)?,
                matches,
            })
        })
        .collect::<Result<Vec<Round>, BracketError>>()?;

    log::info!(
        "Generated {} round robin for {} players: {} rounds",
        kind,
        players.len(),
        rounds.len()
    );
    Ok(rounds)
}

/// Re-run the generator for the players still in the tournament, numbering the
/// new rounds from `starting_round_number` so they follow the rounds already played.
pub fn regenerate_bracket(
    active_players: &[Player],
    kind: RoundRobinType,
    starting_round_number: u32,
) -> Result<Vec<Round>, BracketError> {
    if starting_round_number == 0 {
        return Err(BracketError::InvalidStartingRound);
    }
    let mut rounds = generate_round_robin(active_players, kind)?;
    for (i, round) in rounds.iter_mut().enumerate() {
        round.round_number = sequence_number(starting_round_number, i)?;
    }
    log::info!(
        "Regenerated bracket for {} active players from round {}",
        active_players.len(),
        starting_round_number
    );
    Ok(rounds)
}

/// Suggested repetition for a field size: small fields play more often.
/// Purely advisory; callers may pick any type.
pub fn determine_round_robin_type(player_count: usize) -> RoundRobinType {
    match player_count {
        0..=3 => RoundRobinType::Triple,
        4..=8 => RoundRobinType::Double,
        _ => RoundRobinType::Single,
    }
}

/// `start + index` as a round or match number, failing instead of wrapping.
pub(crate) fn sequence_number(start: u32, index: usize) -> Result<u32, BracketError> {
    u32::try_from(index)
        .ok()
        .and_then(|i| start.checked_add(i))
        .ok_or(BracketError::RoundNumberOverflow)
}

fn validate_roster(players: &[Player]) -> Result<(), BracketError> {
    match players.len() {
        0 => return Err(BracketError::EmptyRoster),
        1 => return Err(BracketError::NotEnoughPlayers { found: 1 }),
        found if found > MAX_PLAYERS => {
            return Err(BracketError::TooManyPlayers {
                found,
                max: MAX_PLAYERS,
            })
        }
        _ => {}
    }
    let mut seen = HashSet::with_capacity(players.len());
    for p in players {
        if !seen.insert(p.id) {
            return Err(BracketError::DuplicatePlayer(p.id));
        }
    }
    Ok(())
}
