//! Денормализованный CSV: одна строка на проводку журнала, открытие и
//! закрытие повторяются в каждой строке. Заголовки:
//! booking_date,dc,amount,currency,description,reference,account_id,opening_amount,opening_date,closing_amount,closing_date

use crate::{
    error::Result,
    model::{DebitCredit, Statement},
};
use csv::WriterBuilder;
use std::io::Write;

#[derive(serde::Serialize)]
struct Row {
    booking_date: String,
    dc: &'static str,
    amount: String,
    currency: String,
    description: String,
    reference: Option<String>,
    account_id: String,

    opening_amount: Option<String>,
    opening_date: Option<String>,

    closing_amount: Option<String>,
    closing_date: Option<String>,
}

pub struct Csv;

impl crate::traits::WriteFormat for Csv {
    fn write<W: Write>(mut w: W, st: &Statement) -> Result<()> {
        let mut wrt = WriterBuilder::new().from_writer(&mut w);

        for e in &st.entries {
            let row = Row {
                booking_date: e.booking_date.format("%Y-%m-%d").to_string(),
                dc: match e.dc {
                    DebitCredit::Debit => "D",
                    DebitCredit::Credit => "C",
                },
                amount: e.amount.to_string(),
                currency: e.currency.clone(),
                description: e.description.clone(),
                reference: e.reference.clone(),
                account_id: st.account_id.clone(),
                opening_amount: st.opening_balance.as_ref().map(|b| b.amount.to_string()),
                opening_date: st
                    .opening_balance
                    .as_ref()
                    .map(|b| b.date.format("%Y-%m-%d").to_string()),
                closing_amount: st.closing_balance.as_ref().map(|b| b.amount.to_string()),
                closing_date: st
                    .closing_balance
                    .as_ref()
                    .map(|b| b.date.format("%Y-%m-%d").to_string()),
            };
            wrt.serialize(row)?;
        }
        wrt.flush()?;
        Ok(())
    }
}
