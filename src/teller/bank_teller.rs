use crate::{
    bank::{AddMode, Bank},
    command::{BankCommand, RawStatement, StatementKind},
};

use super::{StatementError, StatementProcessor};

/// Executes parsed statement commands against an in-memory [`Bank`].
///
/// The bank itself signals declined mutations through booleans and
/// no-ops; this layer turns those into errors so the caller can report
/// which statement line was not honored.
#[derive(Default)]
pub struct BankTeller {
    pub bank: Bank,
}

impl StatementProcessor for BankTeller {
    fn process_statement(
        &mut self,
        kind: StatementKind,
        row: RawStatement,
    ) -> Result<(), StatementError> {
        match BankCommand::parse_command(kind, row)? {
            BankCommand::Open(account) => {
                let number = self.bank.add_account(account, AddMode::New);
                tracing::debug!(number, "opened account");
            }
            BankCommand::Deposit { account, amount } => {
                let acc = self
                    .bank
                    .find_account_mut(account)
                    .ok_or(StatementError::UnknownAccount { number: account })?;
                acc.deposit(amount);
            }
            BankCommand::Withdraw { account, amount } => {
                let acc = self
                    .bank
                    .find_account_mut(account)
                    .ok_or(StatementError::UnknownAccount { number: account })?;
                if !acc.withdraw(amount) {
                    tracing::warn!(number = account, %amount, "withdrawal declined");
                    return Err(StatementError::WithdrawalDeclined {
                        number: account,
                        amount,
                    });
                }
            }
            BankCommand::Close { account } => {
                self.bank.delete_account(account);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::{Decimal, prelude::FromPrimitive};

    use crate::command::BankCommandError;

    use super::*;

    fn dec(value: u32) -> Decimal {
        Decimal::from_u32(value).unwrap()
    }

    fn open_row(balance: u32, name: &str) -> RawStatement {
        RawStatement {
            amount: Some(dec(balance)),
            limit: Some(dec(500)),
            opened: Some("2024-01-01".to_string()),
            name: Some(name.to_string()),
            sex: Some('M'),
            age: Some(25),
            weight: Some(70.0),
            ..Default::default()
        }
    }

    fn movement_row(account: u32, amount: u32) -> RawStatement {
        RawStatement {
            account: Some(account),
            amount: Some(dec(amount)),
            ..Default::default()
        }
    }

    #[test]
    fn process_some_statements() {
        let mut teller = BankTeller::default();
        teller
            .process_statement(StatementKind::Open, open_row(1000, "John"))
            .unwrap();
        teller
            .process_statement(StatementKind::Open, open_row(2000, "Jane"))
            .unwrap();
        assert_eq!(teller.bank.accounts_loaded(), 2);

        teller
            .process_statement(StatementKind::Deposit, movement_row(1, 250))
            .unwrap();
        teller
            .process_statement(StatementKind::Withdraw, movement_row(2, 300))
            .unwrap();

        assert_eq!(teller.bank.find_account(1).unwrap().balance(), dec(1250));
        let a2 = teller.bank.find_account(2).unwrap();
        assert_eq!(a2.balance(), dec(1700));
        assert_eq!(a2.amount_withdrawn(), dec(300));
    }

    #[test]
    fn declined_withdrawal_is_reported() {
        let mut teller = BankTeller::default();
        teller
            .process_statement(StatementKind::Open, open_row(1000, "John"))
            .unwrap();

        // 600 is within the balance but past the 500 withdraw limit
        let err = teller
            .process_statement(StatementKind::Withdraw, movement_row(1, 600))
            .unwrap_err();
        assert!(matches!(
            err,
            StatementError::WithdrawalDeclined { number: 1, .. }
        ));
        assert_eq!(teller.bank.find_account(1).unwrap().balance(), dec(1000));
    }

    #[test]
    fn unknown_account_is_reported() {
        let mut teller = BankTeller::default();
        let err = teller
            .process_statement(StatementKind::Deposit, movement_row(9, 100))
            .unwrap_err();
        assert!(matches!(err, StatementError::UnknownAccount { number: 9 }));
    }

    #[test]
    fn incomplete_open_is_a_command_error() {
        let mut teller = BankTeller::default();
        let err = teller
            .process_statement(StatementKind::Open, RawStatement::default())
            .unwrap_err();
        assert!(matches!(
            err,
            StatementError::CommandErr(BankCommandError::IncompleteOpen)
        ));
    }

    #[test]
    fn close_forgets_the_account() {
        let mut teller = BankTeller::default();
        teller
            .process_statement(StatementKind::Open, open_row(1000, "John"))
            .unwrap();
        teller
            .process_statement(
                StatementKind::Close,
                RawStatement {
                    account: Some(1),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(teller.bank.find_account(1).is_none());
        assert_eq!(teller.bank.accounts_loaded(), 0);
    }
}
