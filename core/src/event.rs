//! The event log — one entry per dispatched command.
//!
//! Rejections are recorded here even though the caller never sees them.

use crate::{
    error::BankResult,
    types::{Amount, CommandId, Username},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BankEvent {
    LoggedIn {
        username: Username,
    },
    TransferCompleted {
        from: Username,
        to: Username,
        amount: Amount,
    },
    LoanGranted {
        username: Username,
        amount: Amount,
    },
    AccountClosed {
        username: Username,
    },
    SortToggled {
        sorted: bool,
    },
    CommandRejected {
        command_type: String,
        reason: String,
    },
}

impl BankEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::LoggedIn { .. }          => "logged_in",
            Self::TransferCompleted { .. } => "transfer_completed",
            Self::LoanGranted { .. }       => "loan_granted",
            Self::AccountClosed { .. }     => "account_closed",
            Self::SortToggled { .. }       => "sort_toggled",
            Self::CommandRejected { .. }   => "command_rejected",
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::CommandRejected { .. })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLogEntry {
    pub seq:        u64,
    pub command_id: CommandId,
    pub event_type: String,
    pub payload:    String, // JSON-serialized BankEvent
}

impl EventLogEntry {
    /// Decode the stored payload back into the event.
    pub fn event(&self) -> BankResult<BankEvent> {
        Ok(serde_json::from_str(&self.payload)?)
    }
}
