//! Seeding: shuffle the roster before scheduling.

use crate::models::Player;
use rand::seq::SliceRandom;
use rand::Rng;

/// Return a shuffled copy of `players` (Fisher-Yates). The input is left untouched.
pub fn shuffle_players<R: Rng + ?Sized>(players: &[Player], rng: &mut R) -> Vec<Player> {
    let mut shuffled = players.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
