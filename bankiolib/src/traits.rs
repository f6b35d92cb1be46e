//! Унифицированный трэйт записи выписок на основе std::io::Write.
//!
//! Чтения нет: выписка строится из журнала счёта и уходит только наружу.

use crate::{error::Result, model::Statement};
use std::io::Write;

pub trait WriteFormat {
    fn write<W: Write>(w: W, st: &Statement) -> Result<()>;
}
