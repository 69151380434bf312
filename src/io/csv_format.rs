//! Record format handling for the three data sources
//!
//! This module centralizes the flat-file format concerns, providing:
//! - Row structures for deserialization (one per source file)
//! - Conversion from rows to domain types
//! - The account round-trip representation
//!
//! All functions are pure (no I/O) for easy testing. The files carry no
//! header row, and fields are taken verbatim: there is no escaping support,
//! so a field value containing the delimiter corrupts the record. That is a
//! documented limitation of the format, not something this module repairs.

use crate::types::account::{Account, AccountId, AccountKind, OPEN_DATE_FORMAT};
use crate::types::owner::{Owner, OwnerId};
use crate::types::LedgerError;
use chrono::{DateTime, FixedOffset, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// Row structure for the account source: `ID,balance,open_date`
///
/// The balance and open date stay as strings so conversion can produce
/// specific error messages; the ID is typed so a non-numeric ID fails at
/// deserialization with a line number attached.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AccountRow {
    pub id: AccountId,
    pub balance: String,
    pub open_date: String,
}

/// Row structure for the owner source:
/// `ID,last_name,first_name,street_address,city,state`
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OwnerRow {
    pub id: OwnerId,
    pub last_name: String,
    pub first_name: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
}

/// Row structure for the ownership-link source: `account_id,owner_id`
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct LinkRow {
    pub account_id: AccountId,
    pub owner_id: OwnerId,
}

/// Convert an [`AccountRow`] to an [`Account`]
///
/// The balance must parse as a decimal and be non-negative. The open date
/// must match `YYYY-MM-DD HH:MM:SS±HHMM`; an empty field defaults to the
/// conversion time, evaluated per record. Accounts from the file are always
/// the base kind — the format carries no kind column.
///
/// # Errors
///
/// * [`LedgerError::Format`] for an unparseable balance or open date
/// * [`LedgerError::NegativeBalance`] for a negative balance
pub fn convert_account_row(row: AccountRow) -> Result<Account, LedgerError> {
    let balance = Decimal::from_str(row.balance.trim()).map_err(|_| {
        LedgerError::format(
            None,
            format!("invalid balance '{}' for account {}", row.balance, row.id),
        )
    })?;

    let opened_at = parse_open_date(&row.open_date, row.id)?;

    Account::new(row.id, AccountKind::Base, balance, opened_at)
}

/// Parse an open-date field, defaulting an empty field to now
fn parse_open_date(value: &str, account: AccountId) -> Result<DateTime<FixedOffset>, LedgerError> {
    let value = value.trim();
    if value.is_empty() {
        // Per-record default, not a shared load-time constant.
        return Ok(Utc::now().fixed_offset());
    }
    DateTime::parse_from_str(value, OPEN_DATE_FORMAT).map_err(|_| {
        LedgerError::format(
            None,
            format!(
                "invalid open date '{}' for account {}, expected YYYY-MM-DD HH:MM:SS±HHMM",
                value, account
            ),
        )
    })
}

impl From<OwnerRow> for Owner {
    /// Owner fields carry no constraints; conversion cannot fail.
    fn from(row: OwnerRow) -> Self {
        Owner {
            id: row.id,
            last_name: row.last_name,
            first_name: row.first_name,
            street_address: row.street_address,
            city: row.city,
            state: row.state,
        }
    }
}

/// Serialize an account back to its source-file representation
///
/// Produces `id,balance,open_date` — the same shape `accounts.csv` uses, so
/// the output of this function is reparseable by [`convert_account_row`].
/// The timestamp may normalize (offset formatting) but the ID and balance
/// round-trip exactly.
pub fn format_account_record(account: &Account) -> String {
    format!(
        "{},{},{}",
        account.id,
        account.balance,
        account.opened_at.format(OPEN_DATE_FORMAT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn row(id: AccountId, balance: &str, open_date: &str) -> AccountRow {
        AccountRow {
            id,
            balance: balance.to_string(),
            open_date: open_date.to_string(),
        }
    }

    #[test]
    fn converts_well_formed_account_row() {
        let account = convert_account_row(row(7, "350", "2021-06-01 08:00:00+0000")).unwrap();
        assert_eq!(account.id, 7);
        assert_eq!(account.kind, AccountKind::Base);
        assert_eq!(account.balance, Decimal::new(350, 0));
        assert_eq!(account.owner, None);
        assert_eq!(
            account.opened_at,
            DateTime::parse_from_str("2021-06-01 08:00:00+0000", OPEN_DATE_FORMAT).unwrap()
        );
    }

    #[rstest]
    #[case::not_a_number("abc")]
    #[case::empty("")]
    #[case::trailing_junk("12x")]
    fn bad_balance_is_a_format_error(#[case] balance: &str) {
        let result = convert_account_row(row(1, balance, "2021-06-01 08:00:00+0000"));
        assert!(matches!(result, Err(LedgerError::Format { .. })));
    }

    #[rstest]
    #[case::date_only("2021-06-01")]
    #[case::missing_offset("2021-06-01 08:00:00")]
    #[case::wrong_separator("2021/06/01 08:00:00+0000")]
    #[case::nonsense("whenever")]
    fn bad_open_date_is_a_format_error(#[case] open_date: &str) {
        let result = convert_account_row(row(1, "100", open_date));
        assert!(matches!(result, Err(LedgerError::Format { .. })));
    }

    #[test]
    fn negative_balance_is_a_validation_error() {
        let result = convert_account_row(row(3, "-5", "2021-06-01 08:00:00+0000"));
        assert_eq!(
            result.unwrap_err(),
            LedgerError::negative_balance(3, Decimal::new(-5, 0))
        );
    }

    #[test]
    fn empty_open_date_defaults_per_record() {
        let before = Utc::now().fixed_offset();
        let first = convert_account_row(row(1, "100", "")).unwrap();
        let second = convert_account_row(row(2, "100", "  ")).unwrap();
        let after = Utc::now().fixed_offset();

        assert!(first.opened_at >= before && first.opened_at <= after);
        assert!(second.opened_at >= first.opened_at);
    }

    #[test]
    fn owner_row_conversion_is_verbatim() {
        let owner: Owner = OwnerRow {
            id: 10,
            last_name: "Doe".to_string(),
            first_name: "Jane".to_string(),
            street_address: "12 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
        }
        .into();

        assert_eq!(owner.id, 10);
        assert_eq!(owner.last_name, "Doe");
        assert_eq!(owner.state, "IL");
    }

    #[test]
    fn account_record_round_trips() {
        let account = convert_account_row(row(7, "350", "2021-06-01 08:00:00+0000")).unwrap();
        let line = format_account_record(&account);
        assert_eq!(line, "7,350,2021-06-01 08:00:00+0000");

        // Reparsing the serialized form reproduces the ID and balance.
        let fields: Vec<&str> = line.splitn(3, ',').collect();
        let reparsed = convert_account_row(row(
            fields[0].parse().unwrap(),
            fields[1],
            fields[2],
        ))
        .unwrap();
        assert_eq!(reparsed.id, account.id);
        assert_eq!(reparsed.balance, account.balance);
        assert_eq!(reparsed.opened_at, account.opened_at);
    }
}
