//! File readers for the three data sources
//!
//! Each reader opens a comma-delimited, headerless file, deserializes every
//! row, and converts it to the domain type. Reading is eager: the whole file
//! is collected into memory before the loader links anything, and the first
//! malformed record fails the read with its line number — there is no
//! skip-and-continue mode.

use crate::io::csv_format::{convert_account_row, AccountRow, LinkRow, OwnerRow};
use crate::types::{Account, AccountId, LedgerError, Owner, OwnerId};
use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::path::Path;

/// Open a headerless, whitespace-trimming CSV reader over `path`
fn open_reader(path: &Path) -> Result<csv::Reader<File>, LedgerError> {
    let file = File::open(path)
        .map_err(|e| LedgerError::io(format!("failed to open '{}': {}", path.display(), e)))?;

    Ok(ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .from_reader(file))
}

/// Read and deserialize every row of `path`
///
/// Rows are paired with their 1-based line number so callers can attach
/// position context to conversion errors.
fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<(u64, T)>, LedgerError> {
    let mut reader = open_reader(path)?;
    let mut rows = Vec::new();
    for (index, row) in reader.deserialize::<T>().enumerate() {
        let line = index as u64 + 1;
        rows.push((line, row.map_err(LedgerError::from)?));
    }
    Ok(rows)
}

/// Read the account source
///
/// # Errors
///
/// * [`LedgerError::Io`] if the file cannot be opened
/// * [`LedgerError::Format`] for a wrong field count, non-numeric ID or
///   balance, or bad open date, with the offending line number
/// * [`LedgerError::NegativeBalance`] for a negative balance
pub fn read_accounts(path: &Path) -> Result<Vec<Account>, LedgerError> {
    read_rows::<AccountRow>(path)?
        .into_iter()
        .map(|(line, row)| convert_account_row(row).map_err(|e| e.at_line(line)))
        .collect()
}

/// Read the owner source
pub fn read_owners(path: &Path) -> Result<Vec<Owner>, LedgerError> {
    Ok(read_rows::<OwnerRow>(path)?
        .into_iter()
        .map(|(_, row)| Owner::from(row))
        .collect())
}

/// Read the ownership-link source into `(account_id, owner_id)` pairs
pub fn read_links(path: &Path) -> Result<Vec<(AccountId, OwnerId)>, LedgerError> {
    Ok(read_rows::<LinkRow>(path)?
        .into_iter()
        .map(|(_, row)| (row.account_id, row.owner_id))
        .collect())
}
