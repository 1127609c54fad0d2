use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::account::Account;

pub type AccountNumber = u32;

/// How an account enters the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddMode {
    /// A freshly opened account.
    New,
    /// An account restored from previously saved state. Numbering works
    /// the same as for [`AddMode::New`], so restoring accounts in their
    /// original creation order reproduces their original numbers.
    Load,
}

/// In-memory registry of accounts, keyed by account number.
///
/// Numbers are handed out ascending from 1, which makes map order and
/// insertion order the same thing.
#[derive(Debug)]
pub struct Bank {
    accounts: BTreeMap<AccountNumber, Account>,
    next_account_number: AccountNumber,
    accounts_loaded: u32,
}

impl Default for Bank {
    fn default() -> Self {
        Self {
            accounts: BTreeMap::new(),
            next_account_number: 1,
            accounts_loaded: 0,
        }
    }
}

impl Bank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `account` and returns the number it is now reachable
    /// under. Both modes draw from the same counter, so numbers are
    /// unique across the bank's lifetime.
    pub fn add_account(&mut self, account: Account, mode: AddMode) -> AccountNumber {
        let number = self.next_account_number;
        self.next_account_number += 1;
        self.accounts.insert(number, account);
        self.accounts_loaded += 1;
        if mode == AddMode::Load {
            tracing::debug!(number, "restored previously created account");
        }
        number
    }

    pub fn find_account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.get(&number)
    }

    pub fn find_account_mut(&mut self, number: AccountNumber) -> Option<&mut Account> {
        self.accounts.get_mut(&number)
    }

    /// Removes the account under `number` if there is one. Unknown
    /// numbers are ignored without error.
    pub fn delete_account(&mut self, number: AccountNumber) {
        if self.accounts.remove(&number).is_some() {
            self.accounts_loaded = self.accounts_loaded.saturating_sub(1);
        }
    }

    /// Arithmetic mean over all balances, `None` when the bank holds no
    /// accounts.
    pub fn average_balance(&self) -> Option<Decimal> {
        if self.accounts.is_empty() {
            return None;
        }
        let total: Decimal = self.accounts.values().map(Account::balance).sum();
        Some(total / Decimal::from(self.accounts.len()))
    }

    pub fn maximum_balance(&self) -> Option<Decimal> {
        self.accounts.values().map(Account::balance).max()
    }

    pub fn minimum_balance(&self) -> Option<Decimal> {
        self.accounts.values().map(Account::balance).min()
    }

    /// All accounts with their numbers, in the order they were added.
    pub fn accounts(&self) -> impl Iterator<Item = (AccountNumber, &Account)> {
        self.accounts.iter().map(|(number, acc)| (*number, acc))
    }

    /// Placeholder for linking an account to one held at another bank.
    /// Accepts anything, validates nothing, changes no state.
    pub fn register_account(
        &mut self,
        _from_bank: u32,
        _from_account: u32,
        _to_bank: u32,
        _to_account: u32,
    ) -> bool {
        true
    }

    /// Placeholder for a real inter-account transfer. No balance moves;
    /// do not mistake the `true` result for a completed transfer.
    pub fn transfer_amount(
        &mut self,
        _from_bank: u32,
        _from_account: u32,
        _to_bank: u32,
        _to_account: u32,
        _amount: Decimal,
    ) -> bool {
        true
    }

    /// Count of tracked accounts. Kept as its own counter rather than
    /// derived from the map size, and callers may overwrite it.
    pub fn accounts_loaded(&self) -> u32 {
        self.accounts_loaded
    }

    pub fn set_accounts_loaded(&mut self, count: u32) {
        self.accounts_loaded = count;
    }
}
