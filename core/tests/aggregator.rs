//! Balance, inflow, outflow and interest for the seeded accounts.

use bankist_core::{
    config::BankConfig,
    store::AccountStore,
    summary::{AccountSummary, DEFAULT_INTEREST_PAYOUT_THRESHOLD},
};

const EPS: f64 = 1e-9;

fn demo_store() -> AccountStore {
    AccountStore::from_seeds(&BankConfig::demo().accounts).expect("seed store")
}

#[test]
fn jonas_summary_matches_known_figures() {
    let store = demo_store();
    let summary = store
        .find("js")
        .expect("js exists")
        .summary(DEFAULT_INTEREST_PAYOUT_THRESHOLD);

    assert_eq!(store.find("js").unwrap().interest_rate(), 1.2);
    assert_eq!(summary.balance, 3840.0);
    assert_eq!(summary.total_in, 5020.0);
    assert_eq!(summary.total_out, 1180.0);
    // 2.4 + 5.4 + 36 + 15.6; the 70 deposit pays 0.84 and is dropped.
    assert!((summary.total_interest - 59.4).abs() < EPS, "got {}", summary.total_interest);
}

#[test]
fn balance_is_in_minus_out() {
    for account in demo_store().iter() {
        let s = account.summary(DEFAULT_INTEREST_PAYOUT_THRESHOLD);
        assert!(
            (s.balance - (s.total_in - s.total_out)).abs() < EPS,
            "{}: balance {} != in {} - out {}",
            account.username(), s.balance, s.total_in, s.total_out
        );
    }
}

#[test]
fn account_balance_matches_summary_balance() {
    let store = demo_store();
    let jessica = store.find("jd").expect("jd exists");
    assert_eq!(jessica.balance(), 11720.0);
    assert_eq!(jessica.summary(DEFAULT_INTEREST_PAYOUT_THRESHOLD).balance, jessica.balance());
}

#[test]
fn raising_the_threshold_drops_more_payouts() {
    let movements = [200.0, 450.0, 3000.0];
    let low = AccountSummary::compute(&movements, 1.2, 1.0);
    let high = AccountSummary::compute(&movements, 1.2, 10.0);
    // Only the 3000 deposit (36.0) clears a threshold of 10.
    assert!((high.total_interest - 36.0).abs() < EPS);
    assert!(low.total_interest > high.total_interest);
}
