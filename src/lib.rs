/// The person an account is opened for. Pure data, no behavior.
pub mod holder;

/// Single-account logic: deposits plus limit-checked withdrawals.
pub mod account;

/// The in-memory registry ("bank") owning all accounts, keyed by
/// sequentially assigned account numbers.
pub mod bank;

/// Parses raw statement rows into commands that later are executed
/// against the [`bank`].
pub mod command;

/// Statement processor interface, plus the bank-backed implementation.
///
/// NOTE: Technically this interface is not necessary, but it is a
/// convenient point to swap the in-memory bank for something backed
/// by real storage.
pub mod teller;

/// Ideally, this module would live in its own crate, as a way to
/// bootstrap the core logic. However, I want to use it for integration
/// tests so I put it here.
pub mod bin_utils;
