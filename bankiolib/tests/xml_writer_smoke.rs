use bankiolib::{bank::Bank, formats::xml::SimpleXml, traits::WriteFormat};
use rust_decimal::Decimal;

#[test]
fn xml_statement_smoke() {
    let mut bank = Bank::new("Test Bank", "CHF").expect("bank");
    let customer = bank.register_customer("Alice Example").expect("customer");
    let iban = bank
        .open_account(customer, Decimal::new(1000, 0))
        .expect("account")
        .iban()
        .to_string();
    bank.deposit(&iban, Decimal::new(50, 0)).expect("deposit");

    let st = bank.statement(&iban).expect("statement");
    let mut out = Vec::new();
    SimpleXml::write(&mut out, &st).expect("write xml");
    let text = String::from_utf8(out).expect("utf8");

    assert!(text.contains(&format!("<account_id>{iban}</account_id>")));
    assert!(text.contains("<dc>C</dc>"));
    assert!(text.contains("cash deposit"));
    // statement_id отсутствует — элемент не пишется
    assert!(!text.contains("statement_id"));
}
