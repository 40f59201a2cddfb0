//! Username derivation — one short login id per account owner.
//!
//! RULE: a username is derived exactly once, when the account is built.
//! Nothing re-derives or edits it afterwards.

use crate::{config::AccountSeed, types::Username};

/// Lowercase initials of every word in `owner`.
///
/// `"Jonas Schmedtmann"` becomes `"js"`.
pub fn derive_username(owner: &str) -> Username {
    owner
        .to_lowercase()
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Derive the username for every seed, in seed order.
pub fn create_usernames(seeds: &[AccountSeed]) -> Vec<Username> {
    seeds.iter().map(|seed| derive_username(&seed.owner)).collect()
}
