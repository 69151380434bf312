//! Core business logic module
//!
//! This module contains the core ledger components:
//! - `rules` - The deposit/withdraw/interest behavior matrix per account kind
//! - `ledger` - Loading the three data files and linking accounts to owners

pub mod ledger;
pub mod rules;

pub use ledger::Ledger;
pub use rules::{OperationResult, Outcome, DEFAULT_INTEREST_RATE};
