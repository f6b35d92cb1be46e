//! Доменные модели: клиент, счёт и «нормализованный» слой выписки.
//!
//! Баланс счёта приватный и меняется только через deposit/withdraw/transfer —
//! каждая успешная операция бронирует проводку в журнале счёта.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BankError, Result};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DebitCredit {
    Debit,
    Credit,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    pub booking_date: NaiveDate,
    pub amount: Decimal,
    pub currency: String,
    pub dc: DebitCredit,
    pub description: String,
    pub reference: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Balance {
    pub date: NaiveDate,
    pub amount: Decimal,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Statement {
    pub statement_id: Option<String>,
    pub account_id: String,
    pub opening_balance: Option<Balance>,
    pub closing_balance: Option<Balance>,
    pub entries: Vec<Entry>,
}

/// Квитанция завершённого перевода — только для показа, никуда не сохраняется.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transfer {
    pub reference: String,
    pub from: String,
    pub to: String,
    pub amount: Decimal,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    name: String,
    number: String, // K0001, K0002, ...
}

impl Customer {
    /// Создаётся только реестром (Bank::register_customer).
    pub(crate) fn new(name: &str, number: String) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BankError::InvalidArgument(
                "customer name must not be blank".into(),
            ));
        }
        Ok(Self {
            name: name.to_string(),
            number,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> &str {
        &self.number
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    iban: String,
    owner: Customer,
    balance: Decimal,
    opening: Balance,
    entries: Vec<Entry>,
}

impl Account {
    /// Создаётся только реестром (Bank::open_account).
    pub(crate) fn new(
        iban: String,
        owner: Customer,
        starting_balance: Decimal,
        currency: &str,
    ) -> Result<Self> {
        if starting_balance < Decimal::ZERO {
            return Err(BankError::InvalidArgument(
                "starting balance must not be negative".into(),
            ));
        }
        Ok(Self {
            opening: Balance {
                date: today(),
                amount: starting_balance,
                currency: currency.to_string(),
            },
            iban,
            owner,
            balance: starting_balance,
            entries: Vec::new(),
        })
    }

    pub fn iban(&self) -> &str {
        &self.iban
    }

    pub fn owner(&self) -> &Customer {
        &self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Снимок баланса на момент открытия счёта.
    pub fn opening(&self) -> &Balance {
        &self.opening
    }

    /// Журнал проводок текущей сессии, в порядке бронирования.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<()> {
        check_amount(amount)?;
        self.balance += amount;
        self.book(DebitCredit::Credit, amount, "cash deposit".into(), None);
        debug!(iban = %self.iban, %amount, balance = %self.balance, "deposit");
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<()> {
        check_amount(amount)?;
        if amount > self.balance {
            return Err(BankError::InsufficientFunds {
                balance: self.balance,
                requested: amount,
            });
        }
        self.balance -= amount;
        self.book(DebitCredit::Debit, amount, "cash withdrawal".into(), None);
        debug!(iban = %self.iban, %amount, balance = %self.balance, "withdrawal");
        Ok(())
    }

    /// Дебет стороны-источника перевода. Проверки те же, что у withdraw,
    /// проводка бронируется с текстом и референсом перевода.
    pub(crate) fn debit_transfer(
        &mut self,
        amount: Decimal,
        to: &str,
        reference: &str,
    ) -> Result<()> {
        check_amount(amount)?;
        if amount > self.balance {
            return Err(BankError::InsufficientFunds {
                balance: self.balance,
                requested: amount,
            });
        }
        self.balance -= amount;
        self.book(
            DebitCredit::Debit,
            amount,
            format!("transfer to {to}"),
            Some(reference.to_string()),
        );
        Ok(())
    }

    /// Кредит стороны-получателя. Сумма уже проверена на стороне дебета.
    pub(crate) fn credit_transfer(&mut self, amount: Decimal, from: &str, reference: &str) {
        self.balance += amount;
        self.book(
            DebitCredit::Credit,
            amount,
            format!("transfer from {from}"),
            Some(reference.to_string()),
        );
    }

    /// Компенсация: зачисление не удалось — возвращаем сумму и снимаем
    /// уже забронированную дебетовую проводку.
    pub(crate) fn undo_debit(&mut self, amount: Decimal) {
        self.balance += amount;
        self.entries.pop();
    }

    fn book(
        &mut self,
        dc: DebitCredit,
        amount: Decimal,
        description: String,
        reference: Option<String>,
    ) {
        self.entries.push(Entry {
            booking_date: today(),
            amount,
            currency: self.opening.currency.clone(),
            dc,
            description,
            reference,
        });
    }
}

fn check_amount(amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(BankError::InvalidAmount(amount));
    }
    Ok(())
}

pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
