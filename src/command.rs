use rust_decimal::{Decimal, prelude::Zero};
use serde::Deserialize;
use thiserror::Error;

use crate::{account::Account, bank::AccountNumber, holder::Holder};

/// Statement row kinds accepted from the outside.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatementKind {
    Open,
    Deposit,
    Withdraw,
    Close,
}

/// The optional columns of one statement row, before validation.
/// Which of them must be present depends on the [`StatementKind`].
#[derive(Debug, Default)]
pub struct RawStatement {
    pub account: Option<AccountNumber>,
    pub amount: Option<Decimal>,
    pub limit: Option<Decimal>,
    pub opened: Option<String>,
    pub name: Option<String>,
    pub sex: Option<char>,
    pub age: Option<u32>,
    pub weight: Option<f32>,
}

#[derive(Debug, Error)]
pub enum BankCommandError {
    #[error("Account number is required for {kind:?}")]
    AccountRequired { kind: StatementKind },
    #[error("Amount is required for {kind:?}")]
    AmountRequired { kind: StatementKind },
    #[error("Amount must not be negative for {kind:?}")]
    NegativeAmount { kind: StatementKind },
    #[error("Opening an account requires balance, limit, open date and holder details")]
    IncompleteOpen,
}

#[derive(Debug)]
pub enum BankCommand {
    Open(Account),
    Deposit {
        account: AccountNumber,
        amount: Decimal,
    },
    Withdraw {
        account: AccountNumber,
        amount: Decimal,
    },
    Close {
        account: AccountNumber,
    },
}

impl BankCommand {
    pub fn parse_command(
        kind: StatementKind,
        row: RawStatement,
    ) -> Result<Self, BankCommandError> {
        match kind {
            StatementKind::Open => Self::parse_open(row),
            StatementKind::Deposit => {
                let (account, amount) = Self::parse_movement(kind, row)?;
                Ok(Self::Deposit { account, amount })
            }
            StatementKind::Withdraw => {
                let (account, amount) = Self::parse_movement(kind, row)?;
                Ok(Self::Withdraw { account, amount })
            }
            StatementKind::Close => Ok(Self::Close {
                account: row
                    .account
                    .ok_or(BankCommandError::AccountRequired { kind })?,
            }),
        }
    }

    fn parse_open(row: RawStatement) -> Result<Self, BankCommandError> {
        let (
            Some(balance),
            Some(limit),
            Some(opened),
            Some(name),
            Some(sex),
            Some(age),
            Some(weight),
        ) = (
            row.amount, row.limit, row.opened, row.name, row.sex, row.age, row.weight,
        )
        else {
            return Err(BankCommandError::IncompleteOpen);
        };
        if balance < Decimal::zero() || limit < Decimal::zero() {
            return Err(BankCommandError::NegativeAmount {
                kind: StatementKind::Open,
            });
        }
        Ok(Self::Open(Account::new(
            balance,
            limit,
            opened,
            Holder::new(name, sex, age, weight),
        )))
    }

    fn parse_movement(
        kind: StatementKind,
        row: RawStatement,
    ) -> Result<(AccountNumber, Decimal), BankCommandError> {
        let account = row
            .account
            .ok_or(BankCommandError::AccountRequired { kind })?;
        let amount = row
            .amount
            .ok_or(BankCommandError::AmountRequired { kind })?;
        if amount < Decimal::zero() {
            return Err(BankCommandError::NegativeAmount { kind });
        }
        Ok((account, amount))
    }
}
