//! Wires statement parsing, the teller and the output listing together
//! for the binary, kept inside the library so the integration test can
//! drive the exact same pipeline.

use std::io::{Read, Write};

use anyhow::Result;
use csv_parser::CsvStatementParser;
use csv_printer::{AccountRow, print_accounts};

use crate::teller::{StatementError, StatementProcessor, bank_teller::BankTeller};

pub mod csv_parser;
pub mod csv_printer;

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub error_printer: Box<dyn FnMut(u64, StatementError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvStatementParser::new(self.input);

        let mut teller = BankTeller::default();

        for (line, row) in parser {
            let (kind, fields) = row.into_parts();
            if let Err(err) = teller.process_statement(kind, fields) {
                (self.error_printer)(line, err);
            }
        }

        print_accounts(
            self.output,
            teller.bank.accounts().map(|(number, acc)| AccountRow {
                account: number,
                holder: acc.holder().name.clone(),
                balance: acc.balance(),
                withdrawn: acc.amount_withdrawn(),
                opened: acc.open_date().to_owned(),
            }),
        )
    }
}
