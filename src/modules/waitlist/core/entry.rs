// Waitlist entry as stored and as handed out to readers.
//
// Timestamps
// - created_at is epoch milliseconds, set once by the add flow and never changed.

use crate::modules::waitlist::core::email::EmailAddress;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WaitlistEntry {
    pub id: String,
    pub email: String,
    pub likes: i64,
    pub created_at: i64,
}

/// A validated entry that has not been stored yet. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWaitlistEntry {
    pub email: EmailAddress,
    pub created_at: i64,
}
