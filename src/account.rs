use rust_decimal::{Decimal, prelude::Zero};

use crate::holder::Holder;

/// A single account: a spendable balance plus a cumulative withdrawal cap.
///
/// The cap is strict: total withdrawals must stay strictly below
/// `withdraw_limit`, so a withdrawal that would land exactly on the limit
/// is declined. There is no calendar-day reset, the accumulator only
/// grows over the account's lifetime.
#[derive(Debug)]
pub struct Account {
    balance: Decimal,
    withdraw_limit: Decimal,
    amount_withdrawn: Decimal,
    open_date: String,
    holder: Holder,
}

impl Account {
    pub fn new(
        balance: Decimal,
        withdraw_limit: Decimal,
        open_date: impl Into<String>,
        holder: Holder,
    ) -> Self {
        Self {
            balance,
            withdraw_limit,
            amount_withdrawn: Decimal::zero(),
            open_date: open_date.into(),
            holder,
        }
    }

    /// Adds `amount` to the balance. Zero or negative amounts are ignored
    /// without error.
    pub fn deposit(&mut self, amount: Decimal) {
        if amount > Decimal::zero() {
            self.balance += amount;
        } else {
            tracing::debug!(%amount, "ignoring non-positive deposit");
        }
    }

    /// Attempts to withdraw `amount`, reporting whether it went through.
    /// On `false` neither the balance nor the withdrawn total changed.
    pub fn withdraw(&mut self, amount: Decimal) -> bool {
        let allowed = amount > Decimal::zero()
            && amount <= self.balance
            && self.amount_withdrawn + amount < self.withdraw_limit;
        if allowed {
            self.balance -= amount;
            self.amount_withdrawn += amount;
        }
        allowed
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn amount_withdrawn(&self) -> Decimal {
        self.amount_withdrawn
    }

    pub fn withdraw_limit(&self) -> Decimal {
        self.withdraw_limit
    }

    /// Date the account was opened, kept as the caller supplied it.
    /// Stored, never interpreted.
    pub fn open_date(&self) -> &str {
        &self.open_date
    }

    pub fn holder(&self) -> &Holder {
        &self.holder
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::prelude::FromPrimitive;

    use super::*;

    fn dec(value: u32) -> Decimal {
        Decimal::from_u32(value).unwrap()
    }

    /// Balance 1000, withdraw limit 500.
    fn account() -> Account {
        Account::new(
            dec(1000),
            dec(500),
            "2026-01-16",
            Holder::new("John Doe", 'M', 30, 175.0),
        )
    }

    #[test]
    fn deposits_are_additive() {
        let mut acc = account();
        acc.deposit(dec(50));
        acc.deposit(dec(75));
        acc.deposit(dec(25));
        assert_eq!(acc.balance(), dec(1150));
    }

    #[test]
    fn non_positive_deposits_are_ignored() {
        let mut acc = account();
        acc.deposit(Decimal::zero());
        assert_eq!(acc.balance(), dec(1000));
        acc.deposit(-dec(50));
        assert_eq!(acc.balance(), dec(1000));
    }

    #[test]
    fn withdraw_within_limit_and_balance() {
        let mut acc = account();
        assert!(acc.withdraw(dec(100)));
        assert_eq!(acc.balance(), dec(900));
        assert_eq!(acc.amount_withdrawn(), dec(100));
    }

    #[test]
    fn withdraw_rejects_overdraw() {
        let mut acc = Account::new(
            dec(300),
            dec(500),
            "2026-01-16",
            Holder::new("John Doe", 'M', 30, 175.0),
        );
        assert!(!acc.withdraw(dec(400)));
        assert_eq!(acc.balance(), dec(300));
        assert_eq!(acc.amount_withdrawn(), Decimal::zero());
    }

    #[test]
    fn withdraw_rejects_non_positive_amounts() {
        let mut acc = account();
        assert!(!acc.withdraw(Decimal::zero()));
        assert!(!acc.withdraw(-dec(50)));
        assert_eq!(acc.balance(), dec(1000));
    }

    #[test]
    fn withdraw_limit_is_strict() {
        // exactly the limit fails, one unit under succeeds
        let mut acc = account();
        assert!(!acc.withdraw(dec(500)));
        assert_eq!(acc.balance(), dec(1000));
        assert_eq!(acc.amount_withdrawn(), Decimal::zero());

        assert!(acc.withdraw(dec(499)));
        assert_eq!(acc.balance(), dec(501));
        assert_eq!(acc.amount_withdrawn(), dec(499));
    }

    #[test]
    fn withdrawn_total_accumulates_across_calls() {
        let mut acc = account();
        assert!(acc.withdraw(dec(300)));
        // 300 + 250 would reach past the 500 limit
        assert!(!acc.withdraw(dec(250)));
        assert_eq!(acc.balance(), dec(700));
        assert_eq!(acc.amount_withdrawn(), dec(300));
    }
}
