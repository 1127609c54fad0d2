use std::fs::File;

use anyhow::{Context, Result};
use teller_bank::bin_utils::Service;
use teller_bank::teller::StatementError;

fn main() -> Result<()> {
    let filename = std::env::args()
        .nth(1)
        .context("Expected a statements file as the first argument")?;
    let file = File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?;

    let service = Service {
        input: file,
        output: &mut std::io::stdout(),
        error_printer: Box::new(|line, err| {
            match err {
                StatementError::CommandErr(err) => {
                    eprintln!("Error at line {line}: {err}")
                }
                StatementError::UnknownAccount { .. }
                | StatementError::WithdrawalDeclined { .. } => {
                    // business outcomes, not input errors, so we don't print them
                }
            }
        }),
    };
    service.run()
}
