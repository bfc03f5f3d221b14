//! User Data

use crate::domain::users::records::UserUuid;

/// New User Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    /// UUID to assign to the user row.
    pub uuid: UserUuid,

    /// Display name to persist.
    pub name: String,

    /// SHA-256 hex digest of the user's API token.
    pub token_hash: String,
}
