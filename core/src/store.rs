//! The account store — the single source of truth for every account.
//!
//! RULE: usernames are unique across the store at all times.
//! Insertion order is preserved; removal is by username.

use crate::{
    account::Account,
    config::AccountSeed,
    error::{BankError, BankResult},
    types::Amount,
};

#[derive(Debug, Clone, Default)]
pub struct AccountStore {
    accounts: Vec<Account>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the store at startup, deriving every username once.
    pub fn from_seeds(seeds: &[AccountSeed]) -> BankResult<Self> {
        let mut store = Self::new();
        for seed in seeds {
            store.insert(Account::from_seed(seed))?;
        }
        log::debug!("account store seeded with {} accounts", store.len());
        Ok(store)
    }

    pub fn insert(&mut self, account: Account) -> BankResult<()> {
        if self.find(account.username()).is_some() {
            return Err(BankError::DuplicateUsername {
                username: account.username().to_string(),
            });
        }
        self.accounts.push(account);
        Ok(())
    }

    pub fn find(&self, username: &str) -> Option<&Account> {
        self.accounts.iter().find(|acc| acc.username() == username)
    }

    pub fn position(&self, username: &str) -> Option<usize> {
        self.accounts.iter().position(|acc| acc.username() == username)
    }

    /// Remove the account with `username`, keeping the order of the rest.
    pub fn remove(&mut self, username: &str) -> Option<Account> {
        let index = self.position(username)?;
        Some(self.accounts.remove(index))
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    /// Sum of every account balance. Transfers never change it.
    pub fn total_holdings(&self) -> Amount {
        self.accounts.iter().map(Account::balance).sum()
    }

    pub(crate) fn push_movement(&mut self, index: usize, amount: Amount) {
        self.accounts[index].push_movement(amount);
    }
}
