//! Bank Ledger Library
//! # Overview
//!
//! This library implements a toy in-memory banking ledger: it loads
//! accounts, owners, and account-ownership links from three flat files,
//! links each account to its owner, and prints one line per account. It
//! also models four account behavior variants with differing
//! deposit/withdraw/interest rules.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Owner, errors)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::rules`] - The per-kind deposit/withdraw/interest matrix
//!   - [`core::ledger`] - Loading and linking the three data sources
//! - [`io`] - Record parsing, file readers, and the report printer
//!
//! # Account Kinds
//!
//! - **Base**: unguarded deposits; withdrawals up to the balance
//! - **Savings**: balance floor of 10; withdrawals credit 2 back;
//!   bears interest
//! - **Checking**: may overdraw to 0 (plain) or -10 (by check); checks
//!   beyond the free allowance carry a fee
//! - **MoneyMarket**: 10,000 minimum, limited transaction count, a 100
//!   fee for dropping below the minimum; bears interest
//!
//! # Failure model
//!
//! Parse, validation, and lookup failures are unrecovered: loading aborts
//! with a [`types::LedgerError`]. Business-rule rejections (insufficient
//! funds, transaction limits) are non-fatal [`core::Outcome`] codes and
//! never halt execution.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use self::core::{Ledger, OperationResult, Outcome};
pub use self::io::write_report;
pub use self::types::{Account, AccountId, AccountKind, LedgerError, Owner, OwnerId};
