use std::io::Read;

use csv::{DeserializeRecordsIntoIter, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    bank::AccountNumber,
    command::{RawStatement, StatementKind},
};

/// One row of the statement file. Only `type` is always present; which
/// of the remaining columns matter depends on the statement kind.
#[derive(Debug, Deserialize)]
pub struct StatementRow {
    #[serde(rename = "type")]
    pub kind: StatementKind,
    pub account: Option<AccountNumber>,
    pub amount: Option<Decimal>,
    pub limit: Option<Decimal>,
    pub opened: Option<String>,
    pub name: Option<String>,
    pub sex: Option<char>,
    pub age: Option<u32>,
    pub weight: Option<f32>,
}

impl StatementRow {
    pub fn into_parts(self) -> (StatementKind, RawStatement) {
        (
            self.kind,
            RawStatement {
                account: self.account,
                amount: self.amount,
                limit: self.limit,
                opened: self.opened,
                name: self.name,
                sex: self.sex,
                age: self.age,
                weight: self.weight,
            },
        )
    }
}

/// Parses a statement file in CSV format
///
/// # Panics
///
/// If a row cannot be parsed
pub struct CsvStatementParser<R> {
    iter: DeserializeRecordsIntoIter<R, StatementRow>,
}

impl<R> CsvStatementParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        Self {
            iter: reader.into_deserialize(),
        }
    }
}

impl<R> Iterator for CsvStatementParser<R>
where
    R: Read,
{
    type Item = (u64, StatementRow);

    fn next(&mut self) -> Option<Self::Item> {
        let curr_line = self.iter.reader().position().line();
        self.iter.next().map(|row| (curr_line, row.unwrap()))
    }
}
