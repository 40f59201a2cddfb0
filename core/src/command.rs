use crate::types::{Amount, CommandId, Pin, Username};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Every user action the presentation surface can raise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum BankCommand {
    Login        { username: Username, pin: Pin },
    Transfer     { to: Username, amount: Amount },
    RequestLoan  { amount: Amount },
    CloseAccount { username: Username, pin: Pin },
    ToggleSort,
}

impl BankCommand {
    pub fn command_type(&self) -> &'static str {
        match self {
            Self::Login { .. }        => "login",
            Self::Transfer { .. }     => "transfer",
            Self::RequestLoan { .. }  => "request_loan",
            Self::CloseAccount { .. } => "close_account",
            Self::ToggleSort          => "toggle_sort",
        }
    }
}

/// A command tagged with the id it is logged under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueuedCommand {
    pub command_id: CommandId,
    pub command:    BankCommand,
}

impl QueuedCommand {
    pub fn new(command: BankCommand) -> Self {
        Self {
            command_id: Uuid::new_v4().to_string(),
            command,
        }
    }
}

impl From<BankCommand> for QueuedCommand {
    fn from(command: BankCommand) -> Self {
        Self::new(command)
    }
}
