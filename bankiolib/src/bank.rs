//! Реестр банка: единственный источник идентификаторов и единственный
//! путь поиска счетов.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::info;

use crate::error::{BankError, Result};
use crate::model::{today, Account, Balance, Customer, Statement, Transfer};

pub struct Bank {
    name: String,
    currency: String,
    accounts: HashMap<String, Account>,
    next_customer: u32,
    next_iban: u32,
}

impl Bank {
    pub fn new(name: &str, currency: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BankError::InvalidArgument(
                "bank name must not be blank".into(),
            ));
        }
        Ok(Self {
            name: name.to_string(),
            currency: currency.to_string(),
            accounts: HashMap::new(),
            next_customer: 1,
            next_iban: 1,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn register_customer(&mut self, name: &str) -> Result<Customer> {
        let number = format!("K{:04}", self.next_customer);
        let customer = Customer::new(name, number)?;
        self.next_customer += 1;
        info!(number = customer.number(), "customer registered");
        Ok(customer)
    }

    pub fn open_account(&mut self, owner: Customer, starting_balance: Decimal) -> Result<&Account> {
        let iban = format!("CH93-0000-0000-{:04}", self.next_iban);
        // последовательная генерация не даёт коллизий; проверка защитная
        if self.accounts.contains_key(&iban) {
            return Err(BankError::IdentifierCollision(iban));
        }
        let account = Account::new(iban.clone(), owner, starting_balance, &self.currency)?;
        self.next_iban += 1;
        info!(%iban, %starting_balance, "account opened");
        Ok(self.accounts.entry(iban).or_insert(account))
    }

    /// Отсутствие счёта — не ошибка.
    pub fn find_account(&self, iban: &str) -> Option<&Account> {
        self.accounts.get(iban)
    }

    /// Все счета реестра, порядок не определён.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn deposit(&mut self, iban: &str, amount: Decimal) -> Result<Decimal> {
        let account = self
            .accounts
            .get_mut(iban)
            .ok_or_else(|| BankError::NotFound(iban.to_string()))?;
        account.deposit(amount)?;
        Ok(account.balance())
    }

    pub fn withdraw(&mut self, iban: &str, amount: Decimal) -> Result<Decimal> {
        let account = self
            .accounts
            .get_mut(iban)
            .ok_or_else(|| BankError::NotFound(iban.to_string()))?;
        account.withdraw(amount)?;
        Ok(account.balance())
    }

    /// Перевод «всё или ничего»: обе стороны и сумма проверяются до первого
    /// изменения, а если зачисление всё же сорвётся после списания —
    /// источник компенсируется и ошибка уходит наверх.
    pub fn transfer(
        &mut self,
        from: &str,
        to: &str,
        amount: Decimal,
        reference: &str,
    ) -> Result<Transfer> {
        if from == to {
            return Err(BankError::InvalidArgument(
                "transfer to the same account".into(),
            ));
        }
        if !self.accounts.contains_key(to) {
            return Err(BankError::NotFound(to.to_string()));
        }

        let src = self
            .accounts
            .get_mut(from)
            .ok_or_else(|| BankError::NotFound(from.to_string()))?;
        src.debit_transfer(amount, to, reference)?;

        match self.accounts.get_mut(to) {
            Some(dst) => dst.credit_transfer(amount, from, reference),
            None => {
                // возврат средств на источник
                if let Some(src) = self.accounts.get_mut(from) {
                    src.undo_debit(amount);
                }
                return Err(BankError::NotFound(to.to_string()));
            }
        }

        info!(%from, %to, %amount, reference, "transfer completed");
        Ok(Transfer {
            reference: reference.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            amount,
            currency: self.currency.clone(),
        })
    }

    /// Выписка по счёту: снимок открытия, журнал сессии, текущий баланс
    /// как закрытие на сегодняшнюю дату.
    pub fn statement(&self, iban: &str) -> Result<Statement> {
        let account = self
            .find_account(iban)
            .ok_or_else(|| BankError::NotFound(iban.to_string()))?;
        Ok(Statement {
            statement_id: None,
            account_id: account.iban().to_string(),
            opening_balance: Some(account.opening().clone()),
            closing_balance: Some(Balance {
                date: today(),
                amount: account.balance(),
                currency: self.currency.clone(),
            }),
            entries: account.entries().to_vec(),
        })
    }
}
