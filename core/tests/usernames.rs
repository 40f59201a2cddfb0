//! Username derivation across the seeded store.

use bankist_core::{
    config::{AccountSeed, BankConfig},
    error::BankError,
    store::AccountStore,
    username::create_usernames,
};

#[test]
fn demo_accounts_get_initials_as_usernames() {
    let store = AccountStore::from_seeds(&BankConfig::demo().accounts).expect("seed store");
    let usernames: Vec<&str> = store.iter().map(|acc| acc.username()).collect();
    assert_eq!(usernames, vec!["js", "jd", "stw", "ss", "ri", "th"]);
}

#[test]
fn create_usernames_matches_store_derivation() {
    let config = BankConfig::demo();
    let store = AccountStore::from_seeds(&config.accounts).expect("seed store");
    let derived = create_usernames(&config.accounts);
    let stored: Vec<String> = store.iter().map(|acc| acc.username().to_string()).collect();
    assert_eq!(derived, stored);
}

#[test]
fn jonas_schmedtmann_is_js() {
    let store = AccountStore::from_seeds(&BankConfig::demo().accounts).expect("seed store");
    let account = store.find("js").expect("js exists");
    assert_eq!(account.owner(), "Jonas Schmedtmann");
}

#[test]
fn duplicate_initials_are_rejected() {
    let seeds = vec![
        AccountSeed { owner: "John Smith".into(), movements: vec![100.0], interest_rate: 1.0, pin: 1000 },
        AccountSeed { owner: "Jane Stone".into(), movements: vec![200.0], interest_rate: 1.0, pin: 2000 },
    ];
    match AccountStore::from_seeds(&seeds) {
        Err(BankError::DuplicateUsername { username }) => assert_eq!(username, "js"),
        other => panic!("expected DuplicateUsername, got {other:?}"),
    }
}
