use std::io::Write;

use csv::Writer;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::bank::AccountNumber;

/// Final listing of one account, as written to the output CSV.
#[derive(Debug, Serialize)]
pub struct AccountRow {
    pub account: AccountNumber,
    pub holder: String,
    pub balance: Decimal,
    pub withdrawn: Decimal,
    pub opened: String,
}

pub fn print_accounts<W>(
    output: &mut W,
    rows: impl Iterator<Item = AccountRow>,
) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    for row in rows {
        if let Err(err) = writer.serialize(row) {
            anyhow::bail!("Failed to write to CSV: {err}")
        }
    }
    // Ensure all data is flushed to the output
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}
