// Operator intent to put an email on the waitlist.
//
// - Carries raw input; validation happens in decide.
// - requested_at is stamped by the inbound adapter (epoch milliseconds) and becomes created_at.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddWaitlistEntry {
    pub email: String,
    pub requested_at: i64,
}
