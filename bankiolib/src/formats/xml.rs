//! Упрощённый XML (не CAMT!): плоский документ со счётом, балансами и
//! списком проводок. Только запись — выписка уходит наружу, обратного пути нет.

use crate::{
    error::{BankError, Result},
    model::{DebitCredit, Statement},
};
use quick_xml::se::to_string;
use serde::Serialize;
use std::io::Write;

use rust_decimal::Decimal;

#[derive(Serialize, Debug)]
struct XmlEntry {
    booking_date: String,
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
    currency: String,
    dc: String,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference: Option<String>,
}

#[derive(Serialize, Debug)]
struct XmlBalance {
    date: String,
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
    currency: String,
}

#[derive(Serialize, Debug)]
struct XmlStatement {
    #[serde(skip_serializing_if = "Option::is_none")]
    statement_id: Option<String>,
    account_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    opening_balance: Option<XmlBalance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    closing_balance: Option<XmlBalance>,
    entries: Vec<XmlEntry>,
}

pub struct SimpleXml;

impl crate::traits::WriteFormat for SimpleXml {
    fn write<W: Write>(mut w: W, st: &Statement) -> Result<()> {
        let balance = |b: &crate::model::Balance| XmlBalance {
            date: b.date.format("%Y-%m-%d").to_string(),
            amount: b.amount,
            currency: b.currency.clone(),
        };

        let entries = st
            .entries
            .iter()
            .map(|e| XmlEntry {
                booking_date: e.booking_date.format("%Y-%m-%d").to_string(),
                amount: e.amount,
                currency: e.currency.clone(),
                dc: match e.dc {
                    DebitCredit::Debit => "D".into(),
                    DebitCredit::Credit => "C".into(),
                },
                description: e.description.clone(),
                reference: e.reference.clone(),
            })
            .collect();

        let x = XmlStatement {
            statement_id: st.statement_id.clone(),
            account_id: st.account_id.clone(),
            opening_balance: st.opening_balance.as_ref().map(balance),
            closing_balance: st.closing_balance.as_ref().map(balance),
            entries,
        };

        let s = to_string(&x).map_err(|e| BankError::Xml(format!("{e}")))?;
        w.write_all(s.as_bytes())?;
        Ok(())
    }
}
