use crate::{
    config::AccountSeed,
    summary::AccountSummary,
    types::{Amount, Pin, Username},
    username::derive_username,
};
use serde::{Deserialize, Serialize};

/// One bank customer. The balance is never stored; it is always the sum
/// of `movements`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    owner:         String,
    username:      Username,
    movements:     Vec<Amount>,
    interest_rate: f64,
    pin:           Pin,
}

impl Account {
    pub fn new(owner: impl Into<String>, movements: Vec<Amount>, interest_rate: f64, pin: Pin) -> Self {
        let owner = owner.into();
        let username = derive_username(&owner);
        Self { owner, username, movements, interest_rate, pin }
    }

    pub fn from_seed(seed: &AccountSeed) -> Self {
        Self::new(seed.owner.clone(), seed.movements.clone(), seed.interest_rate, seed.pin)
    }

    pub fn owner(&self)         -> &str      { &self.owner }
    pub fn username(&self)      -> &str      { &self.username }
    pub fn movements(&self)     -> &[Amount] { &self.movements }
    pub fn interest_rate(&self) -> f64       { self.interest_rate }

    pub fn pin_matches(&self, pin: Pin) -> bool {
        self.pin == pin
    }

    /// First word of the owner's name, used for the welcome line.
    pub fn first_name(&self) -> &str {
        self.owner.split_whitespace().next().unwrap_or(self.owner.as_str())
    }

    pub fn balance(&self) -> Amount {
        crate::summary::balance(&self.movements)
    }

    pub fn summary(&self, payout_threshold: f64) -> AccountSummary {
        AccountSummary::compute(&self.movements, self.interest_rate, payout_threshold)
    }

    /// Movements only ever grow through the controller.
    pub(crate) fn push_movement(&mut self, amount: Amount) {
        self.movements.push(amount);
    }
}
