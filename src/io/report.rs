//! The account report printer
//!
//! A pure read-only consumer of the loaded ledger: one descriptive line per
//! account, in ledger iteration order, with no side effects beyond writing
//! to the given output.

use crate::core::Ledger;
use crate::types::LedgerError;
use std::io::Write;

/// Write one line per account to `output`
///
/// Lines use [`Account`](crate::types::Account)'s display representation
/// (ID, balance, open timestamp; the owner back-reference is excluded) and
/// follow the account source's insertion order, so output is deterministic
/// for the same input.
///
/// # Errors
///
/// Returns [`LedgerError::Io`] if the output cannot be written.
pub fn write_report(ledger: &Ledger, output: &mut dyn Write) -> Result<(), LedgerError> {
    for account in ledger.accounts() {
        writeln!(output, "{}", account)?;
    }
    output.flush()?;
    Ok(())
}
