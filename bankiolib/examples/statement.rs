use bankiolib::{bank::Bank, formats::csv::Csv, traits::WriteFormat};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: короткая сессия и CSV-выписка первого счёта на stdout
    let mut bank = Bank::new("TBZ Bank", "CHF")?;

    let alice = bank.register_customer("Alice Example")?;
    let a = bank.open_account(alice, Decimal::new(1000, 0))?.iban().to_string();
    let bob = bank.register_customer("Bob Muster")?;
    let b = bank.open_account(bob, Decimal::new(200, 0))?.iban().to_string();

    bank.deposit(&a, Decimal::new(50, 0))?;
    bank.transfer(&a, &b, Decimal::new(25, 0), "demo")?;

    Csv::write(std::io::stdout(), &bank.statement(&a)?)?;
    Ok(())
}
