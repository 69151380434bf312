//! Account state and the account-kind variants
//!
//! This module defines the `Account` structure shared by all account kinds
//! and the `AccountKind` tag that selects the deposit/withdraw rules applied
//! to it. The rules themselves live in [`crate::core::rules`]; this module
//! only holds state and the construction guards.

use super::error::LedgerError;
use super::owner::OwnerId;
use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use std::fmt;

/// Account identifier
///
/// Supports account IDs from 0 to 4,294,967,295
pub type AccountId = u32;

/// Timestamp format used by the accounts file and by [`Account`]'s display
/// representation: `YYYY-MM-DD HH:MM:SS±HHMM`.
pub const OPEN_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%z";

/// Minimum opening (and maintained) balance for a savings account
pub const SAVINGS_MINIMUM_BALANCE: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Minimum opening (and maintained) balance for a money-market account
pub const MONEY_MARKET_MINIMUM_BALANCE: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Account behavior variants
///
/// The kind selects which deposit/withdraw rules apply to the account.
/// Kinds that track a usage counter carry it inside their variant, so a
/// base or savings account cannot hold a check count by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// Plain account: unguarded deposits, withdrawals up to the balance
    Base,

    /// Savings account: balance may never drop below 10; withdrawals
    /// receive a fixed credit of 2
    Savings,

    /// Checking account: may overdraw to 0 via plain withdrawals and to
    /// -10 via checks; tracks how many checks have been written
    Checking {
        /// Number of checks written since the last reset
        checks_written: u32,
    },

    /// Money-market account: high minimum balance, limited number of
    /// transactions, and a fee for dropping below the minimum
    MoneyMarket {
        /// Number of counted transactions since the last reset
        transactions: u32,
    },
}

impl AccountKind {
    /// A checking account with no checks written yet
    pub fn checking() -> Self {
        AccountKind::Checking { checks_written: 0 }
    }

    /// A money-market account with no transactions counted yet
    pub fn money_market() -> Self {
        AccountKind::MoneyMarket { transactions: 0 }
    }

    /// Human-readable kind name, used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            AccountKind::Base => "base",
            AccountKind::Savings => "savings",
            AccountKind::Checking { .. } => "checking",
            AccountKind::MoneyMarket { .. } => "money-market",
        }
    }
}

/// A bank account
///
/// Accounts are built in two phases: construction from a parsed record,
/// then owner attachment during the ledger's link phase. The `owner` field
/// is `None` only between those phases; the loader rejects any ledger in
/// which an account is still unlinked after all link pairs are applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Unique account ID, the key into the ledger's account map
    pub id: AccountId,

    /// The behavior variant for this account
    pub kind: AccountKind,

    /// Current balance
    ///
    /// Non-negative at construction; the rules for the account's kind
    /// govern how far it may drop afterwards.
    pub balance: Decimal,

    /// When the account was opened
    pub opened_at: DateTime<FixedOffset>,

    /// Owning [`Owner`](super::owner::Owner), as a key into the ledger's
    /// owner map
    ///
    /// This is a back-reference, not a value field: it is excluded from
    /// the display representation.
    pub owner: Option<OwnerId>,
}

impl Account {
    /// Create a new account, enforcing the construction guards
    ///
    /// # Errors
    ///
    /// * [`LedgerError::NegativeBalance`] if `balance` is negative
    ///   (any kind)
    /// * [`LedgerError::InsufficientOpeningBalance`] if a savings account
    ///   is opened below 10 or a money-market account below 10,000
    pub fn new(
        id: AccountId,
        kind: AccountKind,
        balance: Decimal,
        opened_at: DateTime<FixedOffset>,
    ) -> Result<Self, LedgerError> {
        if balance < Decimal::ZERO {
            return Err(LedgerError::negative_balance(id, balance));
        }

        let minimum = match kind {
            AccountKind::Savings => Some(SAVINGS_MINIMUM_BALANCE),
            AccountKind::MoneyMarket { .. } => Some(MONEY_MARKET_MINIMUM_BALANCE),
            AccountKind::Base | AccountKind::Checking { .. } => None,
        };
        if let Some(minimum) = minimum {
            if balance < minimum {
                return Err(LedgerError::insufficient_opening_balance(
                    id,
                    kind.name(),
                    minimum,
                    balance,
                ));
            }
        }

        Ok(Account {
            id,
            kind,
            balance,
            opened_at,
            owner: None,
        })
    }

    /// Number of checks written, for checking accounts
    ///
    /// Returns `None` for kinds that do not write checks.
    pub fn checks_written(&self) -> Option<u32> {
        match self.kind {
            AccountKind::Checking { checks_written } => Some(checks_written),
            _ => None,
        }
    }

    /// Number of counted transactions, for money-market accounts
    ///
    /// Returns `None` for kinds without a transaction limit.
    pub fn transactions(&self) -> Option<u32> {
        match self.kind {
            AccountKind::MoneyMarket { transactions } => Some(transactions),
            _ => None,
        }
    }
}

impl fmt::Display for Account {
    /// Default field-by-field representation: ID, balance, open timestamp.
    ///
    /// The owner back-reference is deliberately excluded. The timestamp
    /// uses [`OPEN_DATE_FORMAT`], so a displayed account remains parseable
    /// by the record parser.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account(id={}, balance={}, opened={})",
            self.id,
            self.balance,
            self.opened_at.format(OPEN_DATE_FORMAT)
        )
    }
}
