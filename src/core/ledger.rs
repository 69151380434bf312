//! Ledger loading and linking
//!
//! The ledger is built once from three flat files and treated as read-only
//! afterwards. Loading is strict: the first malformed record, unknown ID in
//! a link pair, or ownerless account aborts the load with an error rather
//! than producing a partially linked ledger.

use crate::io::reader;
use crate::types::{Account, AccountId, LedgerError, Owner, OwnerId};
use std::collections::HashMap;
use std::path::Path;

/// File name of the account source inside the data directory
pub const ACCOUNTS_FILE: &str = "accounts.csv";

/// File name of the owner source inside the data directory
pub const OWNERS_FILE: &str = "owners.csv";

/// File name of the ownership-link source inside the data directory
pub const LINKS_FILE: &str = "account_owners.csv";

/// The in-memory collection of linked accounts and owners for one run
///
/// Owns both maps exclusively; accounts refer to their owner by ID into the
/// owner map. Iteration over accounts follows the insertion order of the
/// account source, so output is reproducible for the same input.
#[derive(Debug, Default)]
pub struct Ledger {
    /// Map of account IDs to accounts
    accounts: HashMap<AccountId, Account>,

    /// Map of owner IDs to owners
    owners: HashMap<OwnerId, Owner>,

    /// Account IDs in account-source insertion order
    account_order: Vec<AccountId>,
}

impl Ledger {
    /// Load and link a ledger from a data directory
    ///
    /// Reads `accounts.csv`, `owners.csv`, and `account_owners.csv` from
    /// `data_dir`, fully into memory, then applies every ownership link.
    ///
    /// # Errors
    ///
    /// Any parse, validation, lookup, or I/O failure propagates; there is
    /// no partial-success mode.
    pub fn load(data_dir: &Path) -> Result<Self, LedgerError> {
        let accounts = reader::read_accounts(&data_dir.join(ACCOUNTS_FILE))?;
        let owners = reader::read_owners(&data_dir.join(OWNERS_FILE))?;
        let links = reader::read_links(&data_dir.join(LINKS_FILE))?;
        Self::from_records(accounts, owners, links)
    }

    /// Build a ledger from already-parsed records
    ///
    /// Applies every `(account_id, owner_id)` link pair, then verifies that
    /// no account was left without an owner.
    ///
    /// # Errors
    ///
    /// * [`LedgerError::AccountNotFound`] / [`LedgerError::OwnerNotFound`]
    ///   if a link pair references an ID absent from its map — propagated,
    ///   never skipped
    /// * [`LedgerError::UnlinkedAccount`] if an account has no owner after
    ///   all links are applied
    pub fn from_records(
        accounts: Vec<Account>,
        owners: Vec<Owner>,
        links: Vec<(AccountId, OwnerId)>,
    ) -> Result<Self, LedgerError> {
        let mut ledger = Ledger::default();

        for account in accounts {
            ledger.insert_account(account);
        }
        for owner in owners {
            ledger.owners.insert(owner.id, owner);
        }
        for (account_id, owner_id) in links {
            ledger.link(account_id, owner_id)?;
        }

        // Every account must be owned once the load phase completes.
        for id in &ledger.account_order {
            if ledger.accounts[id].owner.is_none() {
                return Err(LedgerError::unlinked_account(*id));
            }
        }

        Ok(ledger)
    }

    /// Insert an account, keeping the order vec free of duplicates
    ///
    /// On a duplicate ID the last record wins and the account keeps its
    /// original position in the iteration order.
    fn insert_account(&mut self, account: Account) {
        let id = account.id;
        if self.accounts.insert(id, account).is_none() {
            self.account_order.push(id);
        }
    }

    /// Attach `owner_id` to `account_id`
    fn link(&mut self, account_id: AccountId, owner_id: OwnerId) -> Result<(), LedgerError> {
        if !self.owners.contains_key(&owner_id) {
            return Err(LedgerError::owner_not_found(owner_id));
        }
        let account = self
            .accounts
            .get_mut(&account_id)
            .ok_or_else(|| LedgerError::account_not_found(account_id))?;
        account.owner = Some(owner_id);
        Ok(())
    }

    /// Look up an account by ID
    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(&id)
    }

    /// Look up an account by ID for mutation (deposits, withdrawals)
    pub fn account_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.get_mut(&id)
    }

    /// Look up an owner by ID
    pub fn owner(&self, id: OwnerId) -> Option<&Owner> {
        self.owners.get(&id)
    }

    /// The owner of an account, resolved through the link
    pub fn owner_of(&self, account_id: AccountId) -> Option<&Owner> {
        self.account(account_id)?
            .owner
            .and_then(|owner_id| self.owners.get(&owner_id))
    }

    /// Iterate over accounts in account-source insertion order
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.account_order.iter().map(|id| &self.accounts[id])
    }

    /// Number of accounts in the ledger
    pub fn len(&self) -> usize {
        self.account_order.len()
    }

    /// Whether the ledger holds no accounts
    pub fn is_empty(&self) -> bool {
        self.account_order.is_empty()
    }
}
