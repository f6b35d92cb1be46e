use bankiolib::{bank::Bank, error::BankError, model::DebitCredit};
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().expect("decimal")
}

/// Два счёта: 1000 и 200.
fn two_accounts() -> (Bank, String, String) {
    let mut bank = Bank::new("Test Bank", "CHF").expect("bank");
    let alice = bank.register_customer("Alice Example").expect("customer");
    let a = bank
        .open_account(alice, dec("1000"))
        .expect("account")
        .iban()
        .to_string();
    let bob = bank.register_customer("Bob Muster").expect("customer");
    let b = bank
        .open_account(bob, dec("200"))
        .expect("account")
        .iban()
        .to_string();
    (bank, a, b)
}

#[test]
fn transfer_moves_money_and_conserves_total() {
    let (mut bank, a, b) = two_accounts();
    let receipt = bank.transfer(&a, &b, dec("50"), "demo").expect("transfer");

    assert_eq!(bank.find_account(&a).expect("src").balance(), dec("950"));
    assert_eq!(bank.find_account(&b).expect("dst").balance(), dec("250"));

    let total: Decimal = bank.accounts().map(|acc| acc.balance()).sum();
    assert_eq!(total, dec("1200"));

    assert_eq!(receipt.reference, "demo");
    assert_eq!(receipt.from, a);
    assert_eq!(receipt.to, b);
    assert_eq!(receipt.amount, dec("50"));
}

#[test]
fn self_transfer_is_rejected_before_any_mutation() {
    let (mut bank, a, _) = two_accounts();
    match bank.transfer(&a, &a, dec("50"), "demo") {
        Err(BankError::InvalidArgument(_)) => {}
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
    let account = bank.find_account(&a).expect("account");
    assert_eq!(account.balance(), dec("1000"));
    assert!(account.entries().is_empty());
}

#[test]
fn transfer_to_unknown_destination_leaves_source_untouched() {
    let (mut bank, a, _) = two_accounts();
    match bank.transfer(&a, "nonexistent", dec("50"), "demo") {
        Err(BankError::NotFound(iban)) => assert_eq!(iban, "nonexistent"),
        other => panic!("expected NotFound, got {other:?}"),
    }
    let account = bank.find_account(&a).expect("account");
    assert_eq!(account.balance(), dec("1000"));
    assert!(account.entries().is_empty());
}

#[test]
fn transfer_from_unknown_source_is_not_found() {
    let (mut bank, _, b) = two_accounts();
    assert!(matches!(
        bank.transfer("nonexistent", &b, dec("50"), "demo"),
        Err(BankError::NotFound(_))
    ));
    assert_eq!(bank.find_account(&b).expect("dst").balance(), dec("200"));
}

#[test]
fn transfer_over_balance_changes_nothing() {
    let (mut bank, a, b) = two_accounts();
    assert!(matches!(
        bank.transfer(&a, &b, dec("5000"), "demo"),
        Err(BankError::InsufficientFunds { .. })
    ));
    assert_eq!(bank.find_account(&a).expect("src").balance(), dec("1000"));
    assert_eq!(bank.find_account(&b).expect("dst").balance(), dec("200"));
    assert!(bank.find_account(&a).expect("src").entries().is_empty());
    assert!(bank.find_account(&b).expect("dst").entries().is_empty());
}

#[test]
fn transfer_rejects_non_positive_amount() {
    let (mut bank, a, b) = two_accounts();
    assert!(matches!(
        bank.transfer(&a, &b, dec("0"), "demo"),
        Err(BankError::InvalidAmount(_))
    ));
}

#[test]
fn transfer_books_entries_on_both_sides() {
    let (mut bank, a, b) = two_accounts();
    bank.transfer(&a, &b, dec("50"), "demo").expect("transfer");

    let src = bank.find_account(&a).expect("src");
    assert_eq!(src.entries().len(), 1);
    assert_eq!(src.entries()[0].dc, DebitCredit::Debit);
    assert_eq!(src.entries()[0].reference.as_deref(), Some("demo"));
    assert!(src.entries()[0].description.contains(&b));

    let dst = bank.find_account(&b).expect("dst");
    assert_eq!(dst.entries().len(), 1);
    assert_eq!(dst.entries()[0].dc, DebitCredit::Credit);
    assert_eq!(dst.entries()[0].reference.as_deref(), Some("demo"));
    assert!(dst.entries()[0].description.contains(&a));
}
