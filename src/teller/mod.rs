use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    bank::AccountNumber,
    command::{BankCommandError, RawStatement, StatementKind},
};

pub mod bank_teller;

#[derive(Debug, Error)]
pub enum StatementError {
    #[error(transparent)]
    CommandErr(#[from] BankCommandError),
    #[error("No account is registered under number {number}")]
    UnknownAccount { number: AccountNumber },
    #[error("Withdrawal of {amount} from account {number} was declined")]
    WithdrawalDeclined {
        number: AccountNumber,
        amount: Decimal,
    },
}

/// Integration seam between statement input and the bank itself.
pub trait StatementProcessor {
    fn process_statement(
        &mut self,
        kind: StatementKind,
        row: RawStatement,
    ) -> Result<(), StatementError>;
}
