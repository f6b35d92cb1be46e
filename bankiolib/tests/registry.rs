use bankiolib::{bank::Bank, error::BankError};
use rust_decimal::Decimal;

#[test]
fn identifiers_are_sequential_and_distinct() {
    let mut bank = Bank::new("Test Bank", "CHF").expect("bank");
    let alice = bank.register_customer("Alice Example").expect("customer");
    let bob = bank.register_customer("Bob Muster").expect("customer");
    assert_eq!(alice.number(), "K0001");
    assert_eq!(bob.number(), "K0002");

    let first = bank
        .open_account(alice, Decimal::ZERO)
        .expect("account")
        .iban()
        .to_string();
    let second = bank
        .open_account(bob, Decimal::ZERO)
        .expect("account")
        .iban()
        .to_string();
    assert_eq!(first, "CH93-0000-0000-0001");
    assert_eq!(second, "CH93-0000-0000-0002");
    assert_ne!(first, second);
}

#[test]
fn find_unknown_iban_returns_none() {
    let bank = Bank::new("Test Bank", "CHF").expect("bank");
    assert!(bank.find_account("nonexistent").is_none());
}

#[test]
fn listing_is_idempotent() {
    let mut bank = Bank::new("Test Bank", "CHF").expect("bank");
    for name in ["Alice Example", "Bob Muster"] {
        let customer = bank.register_customer(name).expect("customer");
        bank.open_account(customer, Decimal::new(100, 0)).expect("account");
    }

    let mut first: Vec<String> = bank.accounts().map(|a| a.iban().to_string()).collect();
    let mut second: Vec<String> = bank.accounts().map(|a| a.iban().to_string()).collect();
    first.sort();
    second.sort();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn blank_customer_name_is_rejected() {
    let mut bank = Bank::new("Test Bank", "CHF").expect("bank");
    assert!(matches!(
        bank.register_customer("   "),
        Err(BankError::InvalidArgument(_))
    ));
}

#[test]
fn blank_bank_name_is_rejected() {
    assert!(matches!(
        Bank::new("", "CHF"),
        Err(BankError::InvalidArgument(_))
    ));
}

#[test]
fn negative_starting_balance_is_rejected() {
    let mut bank = Bank::new("Test Bank", "CHF").expect("bank");
    let customer = bank.register_customer("Alice Example").expect("customer");
    assert!(matches!(
        bank.open_account(customer, Decimal::new(-1, 0)),
        Err(BankError::InvalidArgument(_))
    ));
    // неудачное открытие не регистрирует счёт
    assert_eq!(bank.accounts().count(), 0);
}

#[test]
fn operations_on_unknown_iban_are_not_found() {
    let mut bank = Bank::new("Test Bank", "CHF").expect("bank");
    assert!(matches!(
        bank.deposit("nonexistent", Decimal::new(10, 0)),
        Err(BankError::NotFound(_))
    ));
    assert!(matches!(
        bank.withdraw("nonexistent", Decimal::new(10, 0)),
        Err(BankError::NotFound(_))
    ));
    assert!(matches!(
        bank.statement("nonexistent"),
        Err(BankError::NotFound(_))
    ));
}
