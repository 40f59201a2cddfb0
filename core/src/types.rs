//! Shared primitive types used across the whole bank.

/// A single signed movement. Positive = deposit, negative = withdrawal.
pub type Amount = f64;

/// Four-digit account PIN, compared by value.
pub type Pin = u16;

/// Short login identifier derived from the owner's initials.
pub type Username = String;

/// Identifier attached to every dispatched command.
pub type CommandId = String;
