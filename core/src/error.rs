use crate::types::Amount;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BankError {
    #[error("No account is logged in")]
    NotLoggedIn,

    #[error("Account '{username}' not found")]
    AccountNotFound { username: String },

    #[error("Invalid credentials for '{username}'")]
    InvalidCredentials { username: String },

    #[error("Amount must be positive, got {amount}")]
    InvalidAmount { amount: Amount },

    #[error("Cannot transfer to '{username}'")]
    InvalidReceiver { username: String },

    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: Amount, requested: Amount },

    #[error("Loan of {amount} not eligible: no movement of at least {required}")]
    LoanNotEligible { amount: Amount, required: Amount },

    #[error("Username '{username}' already exists")]
    DuplicateUsername { username: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BankError {
    /// Stable snake_case name used in the event log.
    pub fn reason_code(&self) -> &'static str {
        match self {
            Self::NotLoggedIn              => "not_logged_in",
            Self::AccountNotFound { .. }   => "account_not_found",
            Self::InvalidCredentials { .. } => "invalid_credentials",
            Self::InvalidAmount { .. }     => "invalid_amount",
            Self::InvalidReceiver { .. }   => "invalid_receiver",
            Self::InsufficientFunds { .. } => "insufficient_funds",
            Self::LoanNotEligible { .. }   => "loan_not_eligible",
            Self::DuplicateUsername { .. } => "duplicate_username",
            Self::Serialization(_)         => "serialization",
            Self::Other(_)                 => "other",
        }
    }
}

pub type BankResult<T> = Result<T, BankError>;
