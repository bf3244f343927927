// Pure decision for adding a waitlist entry.
//
// - Validate the email and build the entry to insert.
// - Never perform input or output; duplicates are left to the store's unique constraint.

use crate::modules::waitlist::core::email::{EmailAddress, EmailError};
use crate::modules::waitlist::core::entry::NewWaitlistEntry;
use crate::modules::waitlist::use_cases::add_waitlist_entry::command::AddWaitlistEntry;

pub fn decide_add(command: AddWaitlistEntry) -> Result<NewWaitlistEntry, EmailError> {
    let email = EmailAddress::parse(command.email)?;
    Ok(NewWaitlistEntry {
        email,
        created_at: command.requested_at,
    })
}

#[cfg(test)]
mod add_waitlist_entry_decide_tests {
    use super::*;
    use crate::tests::fixtures::commands::AddWaitlistEntryBuilder;
    use rstest::rstest;

    #[rstest]
    fn it_should_decide_to_add_a_valid_email() {
        let command = AddWaitlistEntryBuilder::new().build();
        let decision = decide_add(command.clone()).expect("expected a valid command");
        assert_eq!(decision.email.as_str(), command.email);
        assert_eq!(decision.created_at, command.requested_at);
    }

    #[rstest]
    fn it_should_reject_a_malformed_email() {
        let command = AddWaitlistEntryBuilder::new().email("not-an-email").build();
        assert_eq!(decide_add(command), Err(EmailError::AtSign));
    }

    #[rstest]
    fn it_should_reject_a_missing_email() {
        let command = AddWaitlistEntryBuilder::new().email("").build();
        assert_eq!(decide_add(command), Err(EmailError::Empty));
    }
}
