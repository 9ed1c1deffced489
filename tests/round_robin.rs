//! Integration tests for round-robin scheduling and bracket regeneration.

use pool_bracket_engine::{
    determine_round_robin_type, generate_round_robin, regenerate_bracket, shuffle_players,
    BracketError, Player, Round, RoundRobinType, Slot, MAX_PLAYERS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

fn roster(n: usize) -> Vec<Player> {
    (0..n).map(|i| Player::new(format!("P{i}"))).collect()
}

fn name(slot: &Slot) -> &str {
    match slot {
        Slot::Player(p) => &p.name,
        Slot::Bye => "BYE",
    }
}

fn pairs(round: &Round) -> Vec<(&str, &str)> {
    round
        .matches
        .iter()
        .map(|m| (name(&m.player1), name(&m.player2)))
        .collect()
}

/// Count how often each unordered pair of real players meets.
fn meetings(rounds: &[Round]) -> HashMap<(String, String), usize> {
    let mut counts = HashMap::new();
    for r in rounds {
        for m in &r.matches {
            if let (Slot::Player(a), Slot::Player(b)) = (&m.player1, &m.player2) {
                let key = if a.name < b.name {
                    (a.name.clone(), b.name.clone())
                } else {
                    (b.name.clone(), a.name.clone())
                };
                *counts.entry(key).or_insert(0) += 1;
            }
        }
    }
    counts
}

#[test]
fn every_pair_meets_exactly_once_in_a_single_round_robin() {
    for n in 2..=11 {
        let players = roster(n);
        let rounds = generate_round_robin(&players, RoundRobinType::Single).unwrap();
        let counts = meetings(&rounds);
        assert_eq!(counts.len(), n * (n - 1) / 2, "n = {n}");
        assert!(counts.values().all(|&c| c == 1), "n = {n}");
    }
}

#[test]
fn round_count_scales_with_repetition() {
    for (n, padded) in [(4, 4), (5, 6), (7, 8), (10, 10)] {
        for (kind, k) in [
            (RoundRobinType::Single, 1),
            (RoundRobinType::Double, 2),
            (RoundRobinType::Triple, 3),
        ] {
            let rounds = generate_round_robin(&roster(n), kind).unwrap();
            assert_eq!(rounds.len(), (padded - 1) * k, "n = {n}, {kind}");
        }
    }
}

#[test]
fn round_numbers_are_sequential_from_one() {
    let rounds = generate_round_robin(&roster(6), RoundRobinType::Triple).unwrap();
    let numbers: Vec<u32> = rounds.iter().map(|r| r.round_number).collect();
    let expected: Vec<u32> = (1..=15).collect();
    assert_eq!(numbers, expected);
}

#[test]
fn each_player_plays_once_per_round() {
    let players = roster(8);
    let rounds = generate_round_robin(&players, RoundRobinType::Double).unwrap();
    for r in &rounds {
        assert_eq!(r.matches.len(), 4);
        for p in &players {
            let count = r.matches.iter().filter(|m| m.involves(p)).count();
            assert_eq!(count, 1, "{} in round {}", p.name, r.round_number);
        }
    }
}

#[test]
fn circle_method_pairs_four_players() {
    let players: Vec<Player> = ["A", "B", "C", "D"].iter().map(|n| Player::new(*n)).collect();
    let rounds = generate_round_robin(&players, RoundRobinType::Single).unwrap();
    assert_eq!(pairs(&rounds[0]), vec![("A", "D"), ("B", "C")]);
    assert_eq!(pairs(&rounds[1]), vec![("A", "C"), ("D", "B")]);
    assert_eq!(pairs(&rounds[2]), vec![("A", "B"), ("C", "D")]);
}

#[test]
fn odd_field_gets_one_bye_per_round_and_double_swaps_home_and_away() {
    let players: Vec<Player> = ["A", "B", "C", "D", "E"].iter().map(|n| Player::new(*n)).collect();
    let rounds = generate_round_robin(&players, RoundRobinType::Double).unwrap();
    assert_eq!(rounds.len(), 10);

    assert_eq!(pairs(&rounds[0]), vec![("A", "BYE"), ("B", "E"), ("C", "D")]);
    assert!(rounds[0].matches[0].is_bye);
    assert_eq!(rounds[0].matches[0].bye_recipient().map(|p| p.name.as_str()), Some("A"));
    assert!(!rounds[0].matches[1].is_bye);

    assert_eq!(rounds[5].round_number, 6);
    assert_eq!(pairs(&rounds[5]), vec![("BYE", "A"), ("E", "B"), ("D", "C")]);
    assert!(rounds[5].matches[0].is_bye);

    for r in &rounds {
        assert_eq!(r.bye_count(), 1);
        assert_eq!(r.regular_count(), 2);
    }
    // Each real player sits out exactly once per rotation.
    for p in &players {
        let byes = rounds
            .iter()
            .flat_map(|r| &r.matches)
            .filter(|m| m.bye_recipient() == Some(p))
            .count();
        assert_eq!(byes, 2, "{}", p.name);
    }
}

#[test]
fn triple_repeats_the_base_block_unswapped() {
    let rounds = generate_round_robin(&roster(4), RoundRobinType::Triple).unwrap();
    assert_eq!(rounds.len(), 9);
    for i in 0..3 {
        assert_eq!(rounds[i + 6].matches, rounds[i].matches);
        let swapped: Vec<_> = rounds[i].matches.iter().map(|m| m.swapped()).collect();
        assert_eq!(rounds[i + 3].matches, swapped);
    }
}

#[test]
fn rejects_degenerate_rosters() {
    assert_eq!(
        generate_round_robin(&[], RoundRobinType::Single),
        Err(BracketError::EmptyRoster)
    );
    assert_eq!(
        generate_round_robin(&roster(1), RoundRobinType::Single),
        Err(BracketError::NotEnoughPlayers { found: 1 })
    );
    let mut players = roster(3);
    players.push(players[0].clone());
    assert_eq!(
        generate_round_robin(&players, RoundRobinType::Single),
        Err(BracketError::DuplicatePlayer(players[0].id))
    );
}

#[test]
fn two_players_play_one_match() {
    let rounds = generate_round_robin(&roster(2), RoundRobinType::Single).unwrap();
    assert_eq!(rounds.len(), 1);
    assert_eq!(rounds[0].matches.len(), 1);
    assert!(!rounds[0].matches[0].is_bye);
}

#[test]
fn regenerate_numbers_from_the_starting_round() {
    let players = roster(5);
    let fresh = generate_round_robin(&players, RoundRobinType::Double).unwrap();
    let regenerated = regenerate_bracket(&players, RoundRobinType::Double, 7).unwrap();

    assert_eq!(regenerated.len(), fresh.len());
    for (i, (new, old)) in regenerated.iter().zip(&fresh).enumerate() {
        assert_eq!(new.round_number, 7 + i as u32);
        assert_eq!(new.matches, old.matches);
    }
}

#[test]
fn regenerate_rejects_round_zero() {
    assert_eq!(
        regenerate_bracket(&roster(4), RoundRobinType::Single, 0),
        Err(BracketError::InvalidStartingRound)
    );
}

#[test]
fn regenerate_can_end_on_the_largest_round_number() {
    let rounds = regenerate_bracket(&roster(3), RoundRobinType::Single, u32::MAX - 2).unwrap();
    let numbers: Vec<u32> = rounds.iter().map(|r| r.round_number).collect();
    assert_eq!(numbers, vec![u32::MAX - 2, u32::MAX - 1, u32::MAX]);
}

#[test]
fn regenerate_rejects_numbering_past_the_largest_round_number() {
    assert_eq!(
        regenerate_bracket(&roster(3), RoundRobinType::Single, u32::MAX),
        Err(BracketError::RoundNumberOverflow)
    );
    assert_eq!(
        regenerate_bracket(&roster(4), RoundRobinType::Triple, u32::MAX - 7),
        Err(BracketError::RoundNumberOverflow)
    );
}

#[test]
fn overflow_and_round_zero_report_different_reasons() {
    let overflow = BracketError::RoundNumberOverflow.to_string();
    let zero = BracketError::InvalidStartingRound.to_string();
    assert_ne!(overflow, zero);
    assert!(!overflow.contains("at least 1"));
}

#[test]
fn rejects_rosters_above_the_player_limit() {
    assert_eq!(
        generate_round_robin(&roster(MAX_PLAYERS + 1), RoundRobinType::Single),
        Err(BracketError::TooManyPlayers {
            found: MAX_PLAYERS + 1,
            max: MAX_PLAYERS
        })
    );
}

#[test]
fn suggested_type_depends_on_field_size() {
    assert_eq!(determine_round_robin_type(2), RoundRobinType::Triple);
    assert_eq!(determine_round_robin_type(3), RoundRobinType::Triple);
    assert_eq!(determine_round_robin_type(4), RoundRobinType::Double);
    assert_eq!(determine_round_robin_type(8), RoundRobinType::Double);
    assert_eq!(determine_round_robin_type(9), RoundRobinType::Single);
    assert_eq!(determine_round_robin_type(32), RoundRobinType::Single);
}

#[test]
fn round_robin_type_parses_and_displays() {
    assert_eq!("Double".parse::<RoundRobinType>(), Ok(RoundRobinType::Double));
    assert_eq!(RoundRobinType::Triple.to_string(), "triple");
    assert_eq!(RoundRobinType::Triple.repetitions(), 3);
    assert!(matches!(
        "quadruple".parse::<RoundRobinType>(),
        Err(BracketError::UnknownRoundRobinType(_))
    ));
}

#[test]
fn shuffle_is_a_permutation_and_seeded_shuffles_repeat() {
    let players = roster(12);
    let a = shuffle_players(&players, &mut StdRng::seed_from_u64(42));
    let b = shuffle_players(&players, &mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);

    let mut sorted_a: Vec<_> = a.iter().map(|p| p.id).collect();
    let mut sorted_in: Vec<_> = players.iter().map(|p| p.id).collect();
    sorted_a.sort();
    sorted_in.sort();
    assert_eq!(sorted_a, sorted_in);
}
