//! The aggregator — balance, inflow, outflow and interest for one account.
//!
//! Every function here is pure. Nothing in this module touches the store.

use crate::types::Amount;
use serde::{Deserialize, Serialize};

/// Individual interest payouts at or below this value are dropped.
pub const DEFAULT_INTEREST_PAYOUT_THRESHOLD: f64 = 1.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub balance:        Amount,
    pub total_in:       Amount,
    pub total_out:      Amount,
    pub total_interest: Amount,
}

impl AccountSummary {
    pub fn compute(movements: &[Amount], interest_rate: f64, payout_threshold: f64) -> Self {
        Self {
            balance:        balance(movements),
            total_in:       total_in(movements),
            total_out:      total_out(movements),
            total_interest: total_interest(movements, interest_rate, payout_threshold),
        }
    }
}

pub fn balance(movements: &[Amount]) -> Amount {
    movements.iter().sum()
}

pub fn total_in(movements: &[Amount]) -> Amount {
    movements.iter().filter(|&&mov| mov > 0.0).sum()
}

/// Absolute value of all withdrawals.
pub fn total_out(movements: &[Amount]) -> Amount {
    movements
        .iter()
        .filter(|&&mov| mov < 0.0)
        .sum::<Amount>()
        .abs()
}

/// Interest on each deposit, evaluated per deposit: only payouts strictly
/// above `payout_threshold` are summed.
pub fn total_interest(movements: &[Amount], interest_rate: f64, payout_threshold: f64) -> Amount {
    movements
        .iter()
        .filter(|&&mov| mov > 0.0)
        .map(|deposit| deposit * interest_rate / 100.0)
        .filter(|&interest| interest > payout_threshold)
        .sum()
}
