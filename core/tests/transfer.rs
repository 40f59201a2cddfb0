//! Transfers between accounts.

use bankist_core::{error::BankError, SessionController};

fn logged_in_as_js() -> SessionController {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut ctl = SessionController::demo().expect("demo controller");
    ctl.login("js", 1111).expect("login");
    ctl
}

fn movements_of(ctl: &SessionController, username: &str) -> Vec<f64> {
    ctl.store()
        .find(username)
        .expect("account exists")
        .movements()
        .to_vec()
}

#[test]
fn transfer_moves_funds_and_conserves_total() {
    let mut ctl = logged_in_as_js();
    let total_before = ctl.store().total_holdings();

    ctl.transfer("jd", 100.0).expect("transfer");

    assert_eq!(movements_of(&ctl, "js").last(), Some(&-100.0));
    assert_eq!(movements_of(&ctl, "jd").last(), Some(&100.0));
    assert_eq!(ctl.store().find("js").unwrap().balance(), 3740.0);
    assert_eq!(ctl.store().find("jd").unwrap().balance(), 11820.0);
    assert_eq!(ctl.store().total_holdings(), total_before);
}

#[test]
fn transfer_of_entire_balance_is_allowed() {
    let mut ctl = logged_in_as_js();
    ctl.transfer("ss", 3840.0).expect("transfer whole balance");
    assert_eq!(ctl.store().find("js").unwrap().balance(), 0.0);
}

#[test]
fn non_positive_amounts_are_rejected() {
    let mut ctl = logged_in_as_js();
    let before = movements_of(&ctl, "js");

    for amount in [0.0, -50.0, f64::NAN] {
        let err = ctl.transfer("jd", amount).unwrap_err();
        assert!(matches!(err, BankError::InvalidAmount { .. }), "got {err:?}");
    }
    assert_eq!(movements_of(&ctl, "js"), before);
}

#[test]
fn unknown_receiver_is_rejected() {
    let mut ctl = logged_in_as_js();
    let err = ctl.transfer("nobody", 10.0).unwrap_err();
    assert!(matches!(err, BankError::AccountNotFound { .. }), "got {err:?}");
}

#[test]
fn transfer_to_self_is_rejected() {
    let mut ctl = logged_in_as_js();
    let before = movements_of(&ctl, "js");
    let err = ctl.transfer("js", 10.0).unwrap_err();
    assert!(matches!(err, BankError::InvalidReceiver { .. }), "got {err:?}");
    assert_eq!(movements_of(&ctl, "js"), before);
}

#[test]
fn overdrawing_is_rejected() {
    let mut ctl = logged_in_as_js();
    let sender_before = movements_of(&ctl, "js");
    let receiver_before = movements_of(&ctl, "jd");

    let err = ctl.transfer("jd", 3840.01).unwrap_err();
    match err {
        BankError::InsufficientFunds { balance, requested } => {
            assert_eq!(balance, 3840.0);
            assert_eq!(requested, 3840.01);
        }
        other => panic!("expected InsufficientFunds, got {other:?}"),
    }
    assert_eq!(movements_of(&ctl, "js"), sender_before);
    assert_eq!(movements_of(&ctl, "jd"), receiver_before);
}

#[test]
fn transfer_requires_a_session() {
    let mut ctl = SessionController::demo().expect("demo controller");
    let err = ctl.transfer("jd", 10.0).unwrap_err();
    assert!(matches!(err, BankError::NotLoggedIn), "got {err:?}");
}
