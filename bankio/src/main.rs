use bankiolib::{
    bank::Bank,
    error::{BankError, Result},
    formats::{csv::Csv, mt940::Mt940, xml::SimpleXml},
    traits::WriteFormat,
};
use clap::Parser;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

#[derive(Parser, Debug)]
#[command(name = "bankio", version, about = "Интерактивный симулятор банка")]
struct Cli {
    /// Файл со сценарием команд (по умолчанию stdin)
    #[arg(short = 'i', long = "input")]
    input: Option<String>,

    /// Название банка
    #[arg(long = "bank-name", default_value = "TBZ Bank")]
    bank_name: String,

    /// Валюта счетов
    #[arg(long = "currency", default_value = "CHF")]
    currency: String,

    /// Не создавать демо-данные
    #[arg(long = "no-seed")]
    no_seed: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // reader
    let reader: Box<dyn io::Read> = match cli.input {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    };

    let mut bank = Bank::new(&cli.bank_name, &cli.currency)?;
    if !cli.no_seed {
        seed(&mut bank)?;
    }

    run(&mut bank, BufReader::new(reader), io::stdout())
}

/// Демо-данные учебного сценария: два клиента, счета на 1000 и 200.
fn seed(bank: &mut Bank) -> Result<()> {
    let alice = bank.register_customer("Alice Example")?;
    let bob = bank.register_customer("Bob Muster")?;
    bank.open_account(alice, Decimal::new(1000, 0))?;
    bank.open_account(bob, Decimal::new(200, 0))?;
    Ok(())
}

fn run<R: BufRead, W: Write>(bank: &mut Bank, mut input: R, mut out: W) -> Result<()> {
    loop {
        writeln!(out)?;
        writeln!(out, "==== {} ====", bank.name())?;
        writeln!(out, "1) Открыть счёт")?;
        writeln!(out, "2) Внести средства")?;
        writeln!(out, "3) Снять средства")?;
        writeln!(out, "4) Перевод")?;
        writeln!(out, "5) Обзор счетов")?;
        writeln!(out, "6) Выписка по счёту")?;
        writeln!(out, "0) Выход")?;
        write!(out, "Выбор: ")?;
        out.flush()?;

        let Some(choice) = read_line(&mut input)? else {
            break; // конец входного потока — как выбор «0»
        };

        let result = match choice.as_str() {
            "1" => open_account(bank, &mut input, &mut out),
            "2" => deposit(bank, &mut input, &mut out),
            "3" => withdraw(bank, &mut input, &mut out),
            "4" => transfer(bank, &mut input, &mut out),
            "5" => overview(bank, &mut out),
            "6" => statement(bank, &mut input, &mut out),
            "0" => break,
            other => {
                writeln!(out, "Неизвестный пункт меню: {other}")?;
                Ok(())
            }
        };
        // любая ошибка операции — одна строка, цикл продолжается
        if let Err(e) = result {
            writeln!(out, "Ошибка: {e}")?;
        }
    }
    writeln!(out, "Программа завершена.")?;
    Ok(())
}

fn open_account<R: BufRead, W: Write>(bank: &mut Bank, input: &mut R, out: &mut W) -> Result<()> {
    let name = prompt(input, out, "Имя клиента")?;
    let start = parse_amount(&prompt(
        input,
        out,
        &format!("Начальный баланс ({})", bank.currency()),
    )?)?;
    let customer = bank.register_customer(&name)?;
    let account = bank.open_account(customer, start)?;
    writeln!(
        out,
        "Счёт открыт: {} | владелец: {} ({})",
        account.iban(),
        account.owner().name(),
        account.owner().number()
    )?;
    Ok(())
}

fn deposit<R: BufRead, W: Write>(bank: &mut Bank, input: &mut R, out: &mut W) -> Result<()> {
    let iban = prompt(input, out, "IBAN для зачисления")?;
    let amount = parse_amount(&prompt(input, out, &format!("Сумма ({})", bank.currency()))?)?;
    let balance = bank.deposit(&iban, amount)?;
    writeln!(out, "Зачислено. Новый баланс: {:.2} {}", balance, bank.currency())?;
    Ok(())
}

fn withdraw<R: BufRead, W: Write>(bank: &mut Bank, input: &mut R, out: &mut W) -> Result<()> {
    let iban = prompt(input, out, "IBAN для снятия")?;
    let amount = parse_amount(&prompt(input, out, &format!("Сумма ({})", bank.currency()))?)?;
    let balance = bank.withdraw(&iban, amount)?;
    writeln!(out, "Снято. Новый баланс: {:.2} {}", balance, bank.currency())?;
    Ok(())
}

fn transfer<R: BufRead, W: Write>(bank: &mut Bank, input: &mut R, out: &mut W) -> Result<()> {
    let from = prompt(input, out, "IBAN источника")?;
    let to = prompt(input, out, "IBAN получателя")?;
    let amount = parse_amount(&prompt(input, out, &format!("Сумма ({})", bank.currency()))?)?;
    let mut reference = prompt(input, out, "Референс (можно пусто)")?;
    if reference.is_empty() {
        reference = "без референса".to_string();
    }

    let receipt = bank.transfer(&from, &to, amount, &reference)?;
    writeln!(
        out,
        "Перевод '{}': {} → {}: {:.2} {}",
        receipt.reference, receipt.from, receipt.to, receipt.amount, receipt.currency
    )?;
    if let (Some(src), Some(dst)) = (bank.find_account(&from), bank.find_account(&to)) {
        writeln!(
            out,
            "Источник: {:.2}, получатель: {:.2}",
            src.balance(),
            dst.balance()
        )?;
    }
    Ok(())
}

fn overview<W: Write>(bank: &Bank, out: &mut W) -> Result<()> {
    writeln!(out, "=== {} – обзор счетов ===", bank.name())?;
    let mut accounts: Vec<_> = bank.accounts().collect();
    if accounts.is_empty() {
        writeln!(out, "(счетов нет)")?;
        return Ok(());
    }
    // порядок реестра не определён, для показа сортируем по IBAN
    accounts.sort_by(|a, b| a.iban().cmp(b.iban()));
    for a in accounts {
        writeln!(
            out,
            "{} | {} ({}) | баланс: {:.2} {}",
            a.iban(),
            a.owner().name(),
            a.owner().number(),
            a.balance(),
            bank.currency()
        )?;
    }
    Ok(())
}

fn statement<R: BufRead, W: Write>(bank: &Bank, input: &mut R, out: &mut W) -> Result<()> {
    let iban = prompt(input, out, "IBAN")?;
    let format = prompt(input, out, "Формат (csv/xml/mt940)")?;
    let path = prompt(input, out, "Файл (пусто – на экран)")?;

    let st = bank.statement(&iban)?;

    let mut writer: Box<dyn Write + '_> = match path.as_str() {
        "" => Box::new(&mut *out),
        p => Box::new(File::create(p)?),
    };
    match format.as_str() {
        "csv" => Csv::write(&mut writer, &st),
        "xml" => SimpleXml::write(&mut writer, &st),
        "mt940" => Mt940::write(&mut writer, &st),
        other => Err(BankError::InvalidArgument(format!("unknown format: {other}"))),
    }?;
    writer.flush()?;
    drop(writer);

    writeln!(out)?;
    Ok(())
}

/// None — конец входного потока.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<String> {
    write!(out, "{text}: ")?;
    out.flush()?;
    read_line(input)?.ok_or_else(|| BankError::Parse("unexpected end of input".into()))
}

/// Десятичная запятая допустима: «100,50» == «100.50».
fn parse_amount(s: &str) -> Result<Decimal> {
    s.replace(',', ".")
        .parse::<Decimal>()
        .map_err(|_| BankError::Parse(format!("expected a number, got '{s}'")))
}
