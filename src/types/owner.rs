//! Owner records loaded from the owners file
//!
//! Owners are immutable after construction: they are parsed once during the
//! load phase and only ever read afterwards, via the ledger's owner map.

/// Owner identifier
///
/// Supports owner IDs from 0 to 4,294,967,295
pub type OwnerId = u32;

/// A person who owns one or more accounts
///
/// Field values are taken verbatim from the owners file; no normalization
/// is applied to names or addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    /// Unique owner ID, the key into the ledger's owner map
    pub id: OwnerId,

    /// Last name
    pub last_name: String,

    /// First name
    pub first_name: String,

    /// Street address
    pub street_address: String,

    /// City
    pub city: String,

    /// Two-letter state code (not validated)
    pub state: String,
}
