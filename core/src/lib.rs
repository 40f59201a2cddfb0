//! bankist-core: an in-memory demo bank.
//!
//! The account store is the single source of truth. The session
//! controller validates every user action against it, mutates it when
//! the action is allowed, and hands back a render request for whatever
//! surface draws the accounts.

pub mod account;
pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod render;
pub mod session;
pub mod store;
pub mod summary;
pub mod types;
pub mod username;

pub use controller::SessionController;
pub use error::{BankError, BankResult};
