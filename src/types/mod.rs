//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account state and the account-kind variants
//! - `owner`: Owner records loaded from the owners file
//! - `error`: Error types for the ledger

pub mod account;
pub mod error;
pub mod owner;

pub use account::{Account, AccountId, AccountKind, OPEN_DATE_FORMAT};
pub use error::LedgerError;
pub use owner::{Owner, OwnerId};
