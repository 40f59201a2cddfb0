//! Render requests — everything a presentation surface needs to redraw.
//!
//! The surface inserts each row at the top, so `rows` is the ordered
//! movement list reversed.

use crate::{
    account::Account,
    summary::AccountSummary,
    types::Amount,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    Deposit,
    Withdrawal,
}

impl MovementKind {
    pub fn of(amount: Amount) -> Self {
        if amount > 0.0 { Self::Deposit } else { Self::Withdrawal }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementRow {
    /// 1-based position in the ordered movement list.
    pub number: usize,
    pub kind:   MovementKind,
    pub amount: Amount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderRequest {
    pub movements:      Vec<Amount>,
    pub rows:           Vec<MovementRow>,
    pub balance:        Amount,
    pub total_in:       Amount,
    pub total_out:      Amount,
    pub total_interest: Amount,
    pub welcome_name:   Option<String>,
    pub visible:        bool,
    pub sorted:         bool,
}

impl RenderRequest {
    /// Nothing to show: no session.
    pub fn hidden(sorted: bool) -> Self {
        Self {
            movements:      Vec::new(),
            rows:           Vec::new(),
            balance:        0.0,
            total_in:       0.0,
            total_out:      0.0,
            total_interest: 0.0,
            welcome_name:   None,
            visible:        false,
            sorted,
        }
    }

    pub fn for_account(account: &Account, sorted: bool, payout_threshold: f64) -> Self {
        let movements = ordered_movements(account.movements(), sorted);
        let rows = display_rows(&movements);
        let AccountSummary { balance, total_in, total_out, total_interest } =
            account.summary(payout_threshold);
        Self {
            movements,
            rows,
            balance,
            total_in,
            total_out,
            total_interest,
            welcome_name: Some(account.first_name().to_string()),
            visible: true,
            sorted,
        }
    }

    pub fn welcome_message(&self) -> Option<String> {
        self.welcome_name
            .as_ref()
            .map(|name| format!("Welcome back, {name}"))
    }
}

/// Ascending by amount when `sorted`, insertion order otherwise.
/// Always a copy; the stored sequence is never reordered.
pub fn ordered_movements(movements: &[Amount], sorted: bool) -> Vec<Amount> {
    let mut movs = movements.to_vec();
    if sorted {
        movs.sort_by(|a, b| a.total_cmp(b));
    }
    movs
}

/// Top-to-bottom rows for an ordered movement list.
pub fn display_rows(ordered: &[Amount]) -> Vec<MovementRow> {
    ordered
        .iter()
        .enumerate()
        .rev()
        .map(|(i, &amount)| MovementRow {
            number: i + 1,
            kind:   MovementKind::of(amount),
            amount,
        })
        .collect()
}
