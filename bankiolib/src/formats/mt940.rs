//! Минимальный MT940 на запись: :20:, :25:, :60F:, :61:, :86:, :62F:.
//! Журнал симулятора датируется днём бронирования, поэтому в :61: одна дата.

use crate::{
    error::Result,
    model::{DebitCredit, Statement},
};
use rust_decimal::Decimal;
use std::io::Write;

pub struct Mt940;

impl crate::traits::WriteFormat for Mt940 {
    fn write<W: Write>(mut w: W, st: &Statement) -> Result<()> {
        use std::fmt::Write as FmtWrite;
        let mut s = String::new();

        match &st.statement_id {
            Some(id) => {
                let _ = writeln!(s, ":20:{id}");
            }
            None => {
                let _ = writeln!(s, ":20:NOTPROVIDED");
            }
        }
        let _ = writeln!(s, ":25:{}", st.account_id);

        if let Some(b) = &st.opening_balance {
            let _ = writeln!(
                s,
                ":60F:{}{}{}",
                if b.amount.is_sign_negative() { "D" } else { "C" },
                b.date.format("%y%m%d"),
                format_amount(&b.amount, &b.currency)
            );
        }

        for e in &st.entries {
            let dc = match e.dc {
                DebitCredit::Debit => "D",
                DebitCredit::Credit => "C",
            };

            // reference (если нет — пишем NONREF)
            let ref_str = e
                .reference
                .as_deref()
                .filter(|v| !v.is_empty())
                .unwrap_or("NONREF");

            // :61: YYMMDD D/C amount NTRF[REF] — сумма БЕЗ валюты
            let _ = writeln!(
                s,
                ":61:{}{}{}NTRF{}",
                e.booking_date.format("%y%m%d"),
                dc,
                format_amount_plain(&e.amount),
                ref_str
            );

            if !e.description.is_empty() {
                let _ = writeln!(s, ":86:{}", e.description);
            }
        }

        if let Some(b) = &st.closing_balance {
            let _ = writeln!(
                s,
                ":62F:{}{}{}",
                if b.amount.is_sign_negative() { "D" } else { "C" },
                b.date.format("%y%m%d"),
                format_amount(&b.amount, &b.currency)
            );
        }

        w.write_all(s.as_bytes())?;
        Ok(())
    }
}

/// Сумма с валютой, запятая как десятичный разделитель.
fn format_amount(a: &Decimal, ccy: &str) -> String {
    format!("{ccy}{}", format_amount_plain(a))
}

fn format_amount_plain(a: &Decimal) -> String {
    let mut s = a.abs().to_string();
    if let Some(dot) = s.find('.') {
        s.replace_range(dot..=dot, ",");
    }
    s
}
