//! The session controller — the only place the account store is mutated.
//!
//! RULES:
//!   - At most one account is logged in at a time.
//!   - A rejected command leaves the store, the session and the sort flag
//!     exactly as they were.
//!   - `dispatch` never surfaces an error. Callers that need the reason use
//!     the typed operations or `execute`.
//!   - Every dispatched command is recorded in the event log. The log is
//!     never trimmed; it lives as long as the controller.

use crate::{
    account::Account,
    command::{BankCommand, QueuedCommand},
    config::{BankConfig, RulesConfig},
    error::{BankError, BankResult},
    event::{BankEvent, EventLogEntry},
    render::RenderRequest,
    session::SessionState,
    store::AccountStore,
    types::{Amount, Pin},
};

pub struct SessionController {
    store:     AccountStore,
    session:   SessionState,
    sorted:    bool,
    rules:     RulesConfig,
    event_log: Vec<EventLogEntry>,
}

impl SessionController {
    pub fn new(store: AccountStore, rules: RulesConfig) -> Self {
        Self {
            store,
            session:   SessionState::LoggedOut,
            sorted:    false,
            rules,
            event_log: Vec::new(),
        }
    }

    /// Seed the store from `config` and start logged out.
    pub fn from_config(config: &BankConfig) -> BankResult<Self> {
        let store = AccountStore::from_seeds(&config.accounts)?;
        Ok(Self::new(store, config.rules.clone()))
    }

    /// Controller over the built-in demo accounts.
    pub fn demo() -> BankResult<Self> {
        Self::from_config(&BankConfig::demo())
    }

    // ── Accessors ──────────────────────────────────────────────

    pub fn store(&self)     -> &AccountStore    { &self.store }
    pub fn session(&self)   -> &SessionState    { &self.session }
    pub fn rules(&self)     -> &RulesConfig     { &self.rules }
    pub fn events(&self)    -> &[EventLogEntry] { &self.event_log }
    pub fn is_sorted(&self) -> bool             { self.sorted }

    pub fn current_account(&self) -> Option<&Account> {
        self.session
            .current_username()
            .and_then(|username| self.store.find(username))
    }

    // ── Typed operations ───────────────────────────────────────

    /// On failure the prior session, logged in or not, is kept.
    pub fn login(&mut self, username: &str, pin: Pin) -> BankResult<()> {
        let account = self.store.find(username).ok_or_else(|| BankError::AccountNotFound {
            username: username.to_string(),
        })?;
        if !account.pin_matches(pin) {
            return Err(BankError::InvalidCredentials {
                username: username.to_string(),
            });
        }
        self.session = SessionState::LoggedIn {
            username: username.to_string(),
        };
        log::info!("session opened for '{username}'");
        Ok(())
    }

    pub fn transfer(&mut self, to: &str, amount: Amount) -> BankResult<()> {
        let sender = self.current_account().ok_or(BankError::NotLoggedIn)?;
        let from = sender.username().to_string();
        let balance = sender.balance();

        if !is_positive(amount) {
            return Err(BankError::InvalidAmount { amount });
        }
        let receiver_index = self.store.position(to).ok_or_else(|| BankError::AccountNotFound {
            username: to.to_string(),
        })?;
        if to == from {
            return Err(BankError::InvalidReceiver {
                username: to.to_string(),
            });
        }
        if balance < amount {
            return Err(BankError::InsufficientFunds {
                balance,
                requested: amount,
            });
        }

        let sender_index = self.store.position(&from).ok_or(BankError::NotLoggedIn)?;
        self.store.push_movement(sender_index, -amount);
        self.store.push_movement(receiver_index, amount);
        log::debug!("transfer {amount} from '{from}' to '{to}'");
        Ok(())
    }

    /// Returns the granted (floored) amount.
    ///
    /// Eligibility needs one movement of at least `loan_eligibility_ratio`
    /// of the amount. No balance floor applies here, unlike transfers.
    pub fn request_loan(&mut self, amount: Amount) -> BankResult<Amount> {
        let account = self.current_account().ok_or(BankError::NotLoggedIn)?;
        let amount = amount.floor();

        if !is_positive(amount) {
            return Err(BankError::InvalidAmount { amount });
        }
        let required = amount * self.rules.loan_eligibility_ratio;
        if !account.movements().iter().any(|&mov| mov >= required) {
            return Err(BankError::LoanNotEligible { amount, required });
        }

        let username = account.username().to_string();
        let index = self.store.position(&username).ok_or(BankError::NotLoggedIn)?;
        self.store.push_movement(index, amount);
        log::debug!("loan of {amount} granted to '{username}'");
        Ok(amount)
    }

    /// Both `username` and `pin` must match the logged-in account.
    /// Returns the removed account; the session ends.
    pub fn close_account(&mut self, username: &str, pin: Pin) -> BankResult<Account> {
        let account = self.current_account().ok_or(BankError::NotLoggedIn)?;
        if account.username() != username || !account.pin_matches(pin) {
            return Err(BankError::InvalidCredentials {
                username: username.to_string(),
            });
        }

        let removed = self.store.remove(username).ok_or_else(|| BankError::AccountNotFound {
            username: username.to_string(),
        })?;
        self.session = SessionState::LoggedOut;
        log::info!("account '{username}' closed, {} accounts remain", self.store.len());
        Ok(removed)
    }

    /// Presentation only. Returns the new flag.
    pub fn toggle_sort(&mut self) -> bool {
        self.sorted = !self.sorted;
        self.sorted
    }

    // ── Event handling ─────────────────────────────────────────

    /// Run one command and record the outcome in the event log.
    pub fn execute(&mut self, queued: QueuedCommand) -> BankResult<BankEvent> {
        let command_type = queued.command.command_type();
        let outcome = self.apply(&queued.command);

        let event = match &outcome {
            Ok(event) => event.clone(),
            Err(err) => BankEvent::CommandRejected {
                command_type: command_type.to_string(),
                reason:       err.reason_code().to_string(),
            },
        };
        if let Err(err) = self.record(&queued.command_id, &event) {
            log::warn!("could not record {command_type} event: {err}");
        }
        outcome
    }

    /// The handler for user events: apply, then redraw. Rejections are
    /// silent; the caller sees an unchanged render.
    pub fn dispatch(&mut self, command: impl Into<QueuedCommand>) -> RenderRequest {
        let queued = command.into();
        let command_type = queued.command.command_type();
        if let Err(err) = self.execute(queued) {
            log::debug!("{command_type} rejected: {err}");
        }
        self.render()
    }

    pub fn render(&self) -> RenderRequest {
        match self.current_account() {
            Some(account) => RenderRequest::for_account(
                account,
                self.sorted,
                self.rules.interest_payout_threshold,
            ),
            None => RenderRequest::hidden(self.sorted),
        }
    }

    fn apply(&mut self, command: &BankCommand) -> BankResult<BankEvent> {
        match command {
            BankCommand::Login { username, pin } => {
                self.login(username, *pin)?;
                Ok(BankEvent::LoggedIn { username: username.clone() })
            }
            BankCommand::Transfer { to, amount } => {
                self.transfer(to, *amount)?;
                let from = self.session.current_username().unwrap_or_default().to_string();
                Ok(BankEvent::TransferCompleted { from, to: to.clone(), amount: *amount })
            }
            BankCommand::RequestLoan { amount } => {
                let granted = self.request_loan(*amount)?;
                let username = self.session.current_username().unwrap_or_default().to_string();
                Ok(BankEvent::LoanGranted { username, amount: granted })
            }
            BankCommand::CloseAccount { username, pin } => {
                let removed = self.close_account(username, *pin)?;
                Ok(BankEvent::AccountClosed { username: removed.username().to_string() })
            }
            BankCommand::ToggleSort => {
                let sorted = self.toggle_sort();
                Ok(BankEvent::SortToggled { sorted })
            }
        }
    }

    fn record(&mut self, command_id: &str, event: &BankEvent) -> BankResult<()> {
        let entry = EventLogEntry {
            seq:        self.event_log.len() as u64 + 1,
            command_id: command_id.to_string(),
            event_type: event.event_type().to_string(),
            payload:    serde_json::to_string(event)?,
        };
        self.event_log.push(entry);
        Ok(())
    }
}

/// False for zero, negatives and NaN.
fn is_positive(amount: Amount) -> bool {
    amount > 0.0
}
