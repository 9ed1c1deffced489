//! Prize money: split the pool across rounds, then a round's prize across its matches.

use crate::logic::round_robin::MAX_ROUNDS;
use crate::models::BracketError;
use serde::{Deserialize, Serialize};

/// Escalation curve for round prizes.
///
/// The final round gets `final_round_share` of the pool. Every earlier round `i`
/// (1-based, `k` of them) gets a share of the rest proportional to
/// `base_weight + (i - 1) / (k - 1) * scaling_factor`, so later rounds pay more.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrizeCurve {
    pub final_round_share: f64,
    pub base_weight: f64,
    pub scaling_factor: f64,
}

impl Default for PrizeCurve {
    fn default() -> Self {
        Self {
            final_round_share: 0.20,
            base_weight: 2.0,
            scaling_factor: 1.5,
        }
    }
}

impl PrizeCurve {
    /// Per-round payouts in whole units, one entry per round.
    ///
    /// Rounding drift is added to the final round so the entries always sum to
    /// `total_prize_pool`. A single round is the final round and takes the whole pool;
    /// with two rounds the only earlier round takes all of the non-final share.
    /// At most [`MAX_ROUNDS`] rounds are accepted.
    pub fn distribute(
        &self,
        total_prize_pool: f64,
        num_rounds: usize,
    ) -> Result<Vec<f64>, BracketError> {
        if !total_prize_pool.is_finite() || total_prize_pool < 0.0 {
            return Err(BracketError::InvalidPrizePool(total_prize_pool));
        }
        match num_rounds {
            0 => return Err(BracketError::NoRounds),
            1 => return Ok(vec![total_prize_pool]),
            requested if requested > MAX_ROUNDS => {
                return Err(BracketError::TooManyRounds {
                    requested,
                    max: MAX_ROUNDS,
                })
            }
            _ => {}
        }

        let final_round_payout = total_prize_pool * self.final_round_share;
        let remaining_pool = total_prize_pool * (1.0 - self.final_round_share);

        let weights = self.weights(num_rounds - 1);
        let total_weight: f64 = weights.iter().sum();

        let mut payouts: Vec<f64> = weights
            .iter()
            .map(|w| (w / total_weight * remaining_pool).round())
            .collect();
        payouts.push(final_round_payout.round());

        let difference = total_prize_pool - payouts.iter().sum::<f64>();
        if let Some(last) = payouts.last_mut() {
            *last += difference;
        }
        if difference != 0.0 {
            log::debug!("Prize rounding drift of {} absorbed by the final round", difference);
        }
        Ok(payouts)
    }

    /// Linear weights for the `count` non-final rounds.
    fn weights(&self, count: usize) -> Vec<f64> {
        if count == 1 {
            return vec![self.base_weight];
        }
        let span = (count - 1) as f64;
        (0..count)
            .map(|i| self.base_weight + (i as f64 / span) * self.scaling_factor)
            .collect()
    }
}

/// Split `total_prize_pool` over `num_rounds` rounds with the default curve
/// (20% to the final round, earlier rounds weighted 2.0 rising to 3.5).
pub fn calculate_prize_distribution(
    total_prize_pool: f64,
    num_rounds: usize,
) -> Result<Vec<f64>, BracketError> {
    PrizeCurve::default().distribute(total_prize_pool, num_rounds)
}

/// What each match in a round pays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchPayouts {
    /// Regular match payout, floored to the cent.
    pub per_match: f64,
    /// Bye payout: half of `per_match`, floored to the cent.
    pub per_bye: f64,
    /// Unrounded share of one regular match.
    pub base_per_match: f64,
}

impl MatchPayouts {
    /// Money the cent flooring leaves unallocated in a round. Not redistributed.
    pub fn shortfall(&self, round_payout: f64, num_matches: usize, num_bye_matches: usize) -> f64 {
        let allocated =
            self.per_match * num_matches as f64 + self.per_bye * num_bye_matches as f64;
        (((round_payout - allocated) * 100.0).round() / 100.0).max(0.0)
    }
}

/// Split a round's prize: a bye match counts as half a regular match.
///
/// `num_matches` counts regular matches only. An empty round pays nothing.
pub fn calculate_match_payouts(
    round_payout: f64,
    num_matches: usize,
    num_bye_matches: usize,
) -> MatchPayouts {
    let total_weight = num_matches as f64 + 0.5 * num_bye_matches as f64;
    if total_weight <= 0.0 {
        return MatchPayouts::default();
    }
    let base_per_match = round_payout / total_weight;
    let per_match = floor_cents(base_per_match);
    MatchPayouts {
        per_match,
        per_bye: floor_cents(per_match / 2.0),
        base_per_match,
    }
}

fn floor_cents(amount: f64) -> f64 {
    (amount * 100.0).floor() / 100.0
}
