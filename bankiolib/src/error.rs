//! Единый тип ошибок публичного API.

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BankError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(Decimal),

    #[error("insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: Decimal, requested: Decimal },

    #[error("account not found: {0}")]
    NotFound(String),

    #[error("identifier collision: {0}")]
    IdentifierCollision(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, BankError>;
