//! Error types for the bank ledger
//!
//! This module defines all error types that can occur while loading and
//! linking the ledger. Errors are designed to be descriptive and
//! user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Format errors**: malformed line, wrong field count, bad number,
//!   bad timestamp
//! - **Validation errors**: syntactically valid but semantically invalid
//!   values (negative balance)
//! - **Invalid-argument errors**: kind-specific construction guard
//!   violations (insufficient opening balance)
//! - **Not-found errors**: a link pair referencing an unknown account or
//!   owner ID
//!
//! All of these are unrecovered: they propagate to the process boundary
//! and terminate the run with a diagnostic. Non-fatal business outcomes
//! (insufficient funds, transaction limits) are not errors at all; they
//! are carried by [`Outcome`](crate::core::rules::Outcome).

use super::account::AccountId;
use super::owner::OwnerId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the bank ledger
///
/// This enum represents all possible failures while parsing records,
/// constructing accounts, and linking the ledger. Each variant includes
/// relevant context to help diagnose the offending input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Malformed record: wrong field count, non-numeric ID or balance,
    /// or an open date that does not match `YYYY-MM-DD HH:MM:SS±HHMM`
    #[error("malformed record{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Format {
        /// Line number where the error occurred (if known)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A balance parsed successfully but is negative
    ///
    /// Balances must be non-negative at construction, for every account
    /// kind.
    #[error("negative balance {balance} for account {account}")]
    NegativeBalance {
        /// Account ID carrying the bad balance
        account: AccountId,
        /// The offending balance
        balance: Decimal,
    },

    /// A kind-specific opening guard was violated
    ///
    /// Savings accounts require an opening balance of at least 10,
    /// money-market accounts at least 10,000.
    #[error("{kind} account {account} opened with {balance}, below the {minimum} minimum")]
    InsufficientOpeningBalance {
        /// Account ID that failed the guard
        account: AccountId,
        /// Kind name ("savings" or "money-market")
        kind: &'static str,
        /// Required minimum opening balance
        minimum: Decimal,
        /// The offending opening balance
        balance: Decimal,
    },

    /// A link pair referenced an account ID absent from the account map
    #[error("account {account} not found for ownership link")]
    AccountNotFound {
        /// The missing account ID
        account: AccountId,
    },

    /// A link pair referenced an owner ID absent from the owner map
    #[error("owner {owner} not found for ownership link")]
    OwnerNotFound {
        /// The missing owner ID
        owner: OwnerId,
    },

    /// An account was still unlinked after all link pairs were applied
    ///
    /// Every account must have exactly one owner once the load phase
    /// completes; an ownerless account is a data-integrity defect in the
    /// input, surfaced rather than silently tolerated.
    #[error("account {account} has no owner after linking")]
    UnlinkedAccount {
        /// The ownerless account ID
        account: AccountId,
    },

    /// I/O error occurred while reading a data file
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },
}

// Conversion from io::Error to LedgerError
impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::Io {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to LedgerError
impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        // Extract line number if available
        let line = error.position().map(|pos| pos.line());

        LedgerError::Format {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create a Format error
    pub fn format(line: Option<u64>, message: impl Into<String>) -> Self {
        LedgerError::Format {
            line,
            message: message.into(),
        }
    }

    /// Create a NegativeBalance error
    pub fn negative_balance(account: AccountId, balance: Decimal) -> Self {
        LedgerError::NegativeBalance { account, balance }
    }

    /// Create an InsufficientOpeningBalance error
    pub fn insufficient_opening_balance(
        account: AccountId,
        kind: &'static str,
        minimum: Decimal,
        balance: Decimal,
    ) -> Self {
        LedgerError::InsufficientOpeningBalance {
            account,
            kind,
            minimum,
            balance,
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: AccountId) -> Self {
        LedgerError::AccountNotFound { account }
    }

    /// Create an OwnerNotFound error
    pub fn owner_not_found(owner: OwnerId) -> Self {
        LedgerError::OwnerNotFound { owner }
    }

    /// Create an UnlinkedAccount error
    pub fn unlinked_account(account: AccountId) -> Self {
        LedgerError::UnlinkedAccount { account }
    }

    /// Create an Io error
    pub fn io(message: impl Into<String>) -> Self {
        LedgerError::Io {
            message: message.into(),
        }
    }

    /// Attach a line number to a Format error that lacks one
    ///
    /// Readers use this to add file position context to conversion errors
    /// produced by the pure parsing functions. Errors that already carry a
    /// line, and non-format errors, pass through unchanged.
    pub fn at_line(self, line: u64) -> Self {
        match self {
            LedgerError::Format {
                line: None,
                message,
            } => LedgerError::Format {
                line: Some(line),
                message,
            },
            other => other,
        }
    }
}
